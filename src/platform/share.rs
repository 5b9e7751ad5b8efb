//! Share target construction.
//!
//! Page fields arrive percent-encoded (see [`PageMetadata`]). Query parameters
//! reuse the encoded form directly; human-readable text (the X `text` field,
//! clipboard payloads) is composed from decoded values.

use thiserror::Error;

use super::lookup;
use crate::page::PageMetadata;
use crate::utils::encode::{decode_component, encode_component, truncate_chars};

/// Maximum description length carried into the X `text` parameter.
pub const X_DESCRIPTION_LIMIT: usize = 100;

/// Confirmation shown after the copy-link action.
pub const COPIED_MESSAGE: &str = "Copied!";

/// Confirmation shown after preparing an Instagram post.
pub const INSTAGRAM_MESSAGE: &str = "Content copied! You can now paste it in Instagram.";

/// What a click on a platform button should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareTarget {
    /// Open this URL in a share popup.
    Open(String),
    /// Put `text` on the clipboard and confirm with `message`.
    Copy { text: String, message: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareError {
    /// The id is not in the platform table; callers skip the element.
    #[error("unrecognized platform `{0}`")]
    UnknownPlatform(String),
}

/// Build the share target for `id` from a metadata snapshot.
pub fn build_share_target(id: &str, meta: &PageMetadata) -> Result<ShareTarget, ShareError> {
    let platform = lookup(id).ok_or_else(|| ShareError::UnknownPlatform(id.to_string()))?;

    let target = match (platform.id, platform.share_url) {
        ("facebook" | "linkedin", Some(base)) => ShareTarget::Open(format!("{base}{}", meta.url)),
        ("x", Some(base)) => {
            let text = encode_component(&x_text(meta));
            ShareTarget::Open(format!("{base}{}&text={text}", meta.url))
        }
        ("pinterest", Some(base)) => {
            let description = if meta.description.is_empty() {
                &meta.title
            } else {
                &meta.description
            };
            let mut url = format!("{base}{}&description={description}", meta.url);
            if !meta.image.is_empty() {
                url.push_str("&media=");
                url.push_str(&meta.image);
            }
            ShareTarget::Open(url)
        }
        ("reddit" | "tiktok", Some(base)) => {
            ShareTarget::Open(format!("{base}{}&title={}", meta.url, meta.title))
        }
        ("instagram", None) => ShareTarget::Copy {
            text: format!("{}\n\n{}", decode_component(&meta.title), meta.raw_url()),
            message: INSTAGRAM_MESSAGE,
        },
        ("copy", None) => ShareTarget::Copy {
            text: format!("{}\n{}", decode_component(&meta.title), meta.raw_url()),
            message: COPIED_MESSAGE,
        },
        // A table entry without a matching rule is as unusable as an unknown id.
        _ => return Err(ShareError::UnknownPlatform(id.to_string())),
    };

    Ok(target)
}

/// Human-readable X text: `"{title} - {description[..100]}..."` or the title.
fn x_text(meta: &PageMetadata) -> String {
    let title = decode_component(&meta.title);
    if meta.description.is_empty() {
        return title.into_owned();
    }
    let description = decode_component(&meta.description);
    format!(
        "{title} - {}...",
        truncate_chars(&description, X_DESCRIPTION_LIMIT)
    )
}
