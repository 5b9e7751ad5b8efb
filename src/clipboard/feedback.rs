//! Transient confirmation shown on the control after a copy.

use std::{
    sync::{Arc, OnceLock},
    time::Duration,
};

use parking_lot::Mutex;
use regex::Regex;
use tokio::task::JoinHandle;

use super::Control;

/// How long the confirmation stays before the original content returns.
pub const FEEDBACK_DURATION: Duration = Duration::from_millis(2000);

/// Original control content, kept to undo the confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    original: String,
}

impl Feedback {
    /// Replace the control's visible text with `message`.
    ///
    /// With an icon inside, only the trailing text after the last tag is
    /// replaced so the icon stays. Otherwise the whole content is replaced.
    pub fn show(control: &mut impl Control, message: &str) -> Self {
        let original = control.content();
        control.set_content(confirmation(&original, message));
        Self { original }
    }

    pub fn original(&self) -> &str {
        &self.original
    }

    /// Put the original content back.
    pub fn revert(self, control: &mut impl Control) {
        control.set_content(self.original);
    }
}

/// Content shown while confirming.
pub(crate) fn confirmation(original: &str, message: &str) -> String {
    static TRAILING_TEXT: OnceLock<Regex> = OnceLock::new();

    if !original.contains("<img") {
        return message.to_string();
    }

    let re = TRAILING_TEXT.get_or_init(|| Regex::new(r">[^<]*$").unwrap());
    re.replace(original, regex::NoExpand(&format!(">{message}")))
        .into_owned()
}

/// Revert `feedback` on `control` after [`FEEDBACK_DURATION`].
///
/// Must be called inside a tokio runtime. Dropping the handle does not cancel
/// the revert; abort it to keep the confirmation.
pub fn schedule_revert<C>(control: Arc<Mutex<C>>, feedback: Feedback) -> JoinHandle<()>
where
    C: Control + Send + 'static,
{
    tokio::spawn(async move {
        tokio::time::sleep(FEEDBACK_DURATION).await;
        feedback.revert(&mut *control.lock());
    })
}
