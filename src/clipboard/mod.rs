//! Clipboard copy with fallback and visual confirmation.
//!
//! - `feedback` - transient confirmation on the triggering control
//! - `legacy` - off-screen select-and-copy path over a scratch document
//! - `system` - OS clipboard (`arboard`) and terminal OSC 52 (`crossterm`)
//!
//! # Flow
//!
//! ```text
//! primary available? ──yes──► write_text ──ok──► feedback
//!        │                        │
//!        no                      err
//!        ▼                        ▼
//!   legacy copy_sync ◄────────────┘ ──ok──► feedback
//!        │
//!       err ──► log, control untouched
//! ```

mod feedback;
mod legacy;
mod system;

pub use feedback::{FEEDBACK_DURATION, Feedback, schedule_revert};
pub use legacy::{OffscreenCopy, ScratchDocument};
pub use system::{Osc52, SystemClipboard};

use thiserror::Error;

use crate::log;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard is not available")]
    Unavailable,
    #[error("clipboard write failed: {0}")]
    Write(String),
    #[error("copy command failed: {0}")]
    Legacy(String),
}

/// Asynchronous clipboard, the preferred path.
#[allow(async_fn_in_trait)]
pub trait Clipboard {
    /// Whether the clipboard can be used at all in this environment.
    fn is_available(&self) -> bool;

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Synchronous copy used when the primary clipboard is missing or refuses.
pub trait LegacyCopy {
    fn copy_sync(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The control that triggered a copy. Content is its inner markup.
pub trait Control {
    fn content(&self) -> String;
    fn set_content(&mut self, content: String);
}

/// Which path delivered the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyVia {
    Primary,
    Legacy,
}

/// Result of [`copy_to_clipboard`]. Exactly one of confirmation or failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Text copied and confirmation shown; `feedback` restores the control.
    Copied { via: CopyVia, feedback: Feedback },
    /// Both paths failed. The control was not touched.
    Failed(ClipboardError),
}

impl CopyOutcome {
    pub fn is_copied(&self) -> bool {
        matches!(self, Self::Copied { .. })
    }
}

/// Copy `text`, trying `primary` first and `legacy` second, and confirm with
/// `message` on `control`.
///
/// The caller owns reverting the confirmation; see [`schedule_revert`].
pub async fn copy_to_clipboard(
    primary: &impl Clipboard,
    legacy: &impl LegacyCopy,
    control: &mut impl Control,
    text: &str,
    message: &str,
) -> CopyOutcome {
    let primary_result = if primary.is_available() {
        primary.write_text(text).await
    } else {
        Err(ClipboardError::Unavailable)
    };

    let via = match primary_result {
        Ok(()) => CopyVia::Primary,
        Err(primary_err) => {
            crate::debug!("copy"; "primary clipboard failed ({primary_err}), trying fallback");
            match legacy.copy_sync(text) {
                Ok(()) => CopyVia::Legacy,
                Err(err) => {
                    log!("copy"; "could not copy to clipboard: {err}");
                    return CopyOutcome::Failed(err);
                }
            }
        }
    };

    CopyOutcome::Copied {
        via,
        feedback: Feedback::show(control, message),
    }
}
