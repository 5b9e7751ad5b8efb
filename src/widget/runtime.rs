//! Runtime widget: initialization from tag attributes and click handling.
//!
//! The widget only talks to its host through ports, so the same click logic
//! runs against a browser-like host in tests and against the OS clipboard
//! and terminal in the CLI.

use super::{Attributes, WidgetMarkup, WidgetOptions};
use crate::clipboard::{
    Clipboard, ClipboardError, Control, CopyOutcome, CopyVia, Feedback, LegacyCopy,
    copy_to_clipboard,
};
use crate::page::{HeadSource, PageMetadata};
use crate::platform::{ShareError, ShareTarget, build_share_target};
use crate::{debug, log};

/// Window name shared by every share popup, so repeated clicks reuse it.
pub const POPUP_NAME: &str = "share-dialog";

/// Features requested for the share popup.
pub const POPUP_FEATURES: &str = "width=600,height=500,resizable=yes,scrollbars=yes,location=yes";

/// Window creation on the host.
pub trait Popups {
    type Window;

    /// Open `url`. `None` means the host blocked the popup.
    fn open(&mut self, url: &str, name: &str, features: &str) -> Option<Self::Window>;

    fn focus(&mut self, window: &Self::Window);
}

/// Everything a click may touch on the host.
pub struct Ports<'a, H, P, C, L> {
    pub head: &'a H,
    pub popups: &'a mut P,
    pub clipboard: &'a C,
    pub legacy: &'a L,
}

/// What a click ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Share popup opened and focused.
    Opened(String),
    /// Popup blocked by the host. Nothing else happens.
    Blocked(String),
    /// Text copied, confirmation showing until `feedback` is reverted.
    Copied {
        via: CopyVia,
        text: String,
        feedback: Feedback,
    },
    /// Both clipboard paths failed; the control is unchanged.
    CopyFailed(ClipboardError),
    /// Platform id not recognized; nothing happens.
    Skipped(ShareError),
}

/// A widget as created from one inclusion tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeWidget {
    options: WidgetOptions,
    markup: WidgetMarkup,
}

impl RuntimeWidget {
    /// Initialize from the tag's attributes. Never fails: bad values fall
    /// back to defaults and unknown platforms are skipped.
    pub fn from_attributes(attrs: &Attributes) -> Self {
        Self::new(WidgetOptions::from_attributes(attrs))
    }

    pub fn new(options: WidgetOptions) -> Self {
        let markup = WidgetMarkup::new(&options);
        debug!("widget"; "initialized with platforms: {}", options.platforms.join(","));
        Self { options, markup }
    }

    pub fn options(&self) -> &WidgetOptions {
        &self.options
    }

    pub fn markup(&self) -> &WidgetMarkup {
        &self.markup
    }

    /// Handle a click on the button for `platform`.
    pub async fn click<H, P, C, L>(
        &self,
        platform: &str,
        ports: Ports<'_, H, P, C, L>,
        control: &mut impl Control,
    ) -> ClickOutcome
    where
        H: HeadSource,
        P: Popups,
        C: Clipboard,
        L: LegacyCopy,
    {
        handle_click(platform, ports, control).await
    }
}

/// Resolve and perform the share action for `platform`.
///
/// Page metadata is read at click time, so a page that changed its head
/// after the widget was built still shares its current values.
pub async fn handle_click<H, P, C, L>(
    platform: &str,
    ports: Ports<'_, H, P, C, L>,
    control: &mut impl Control,
) -> ClickOutcome
where
    H: HeadSource,
    P: Popups,
    C: Clipboard,
    L: LegacyCopy,
{
    let meta = PageMetadata::extract(ports.head);

    let target = match build_share_target(platform, &meta) {
        Ok(target) => target,
        Err(err) => {
            log!("widget"; "{err}, click ignored");
            return ClickOutcome::Skipped(err);
        }
    };

    match target {
        ShareTarget::Open(url) => match ports.popups.open(&url, POPUP_NAME, POPUP_FEATURES) {
            Some(window) => {
                ports.popups.focus(&window);
                ClickOutcome::Opened(url)
            }
            None => {
                debug!("widget"; "popup blocked for {platform}");
                ClickOutcome::Blocked(url)
            }
        },
        ShareTarget::Copy { text, message } => {
            match copy_to_clipboard(ports.clipboard, ports.legacy, control, &text, message).await {
                CopyOutcome::Copied { via, feedback } => ClickOutcome::Copied { via, text, feedback },
                CopyOutcome::Failed(err) => ClickOutcome::CopyFailed(err),
            }
        }
    }
}
