//! Read widget options back out of emitted markup.
//!
//! Accepts a bare reference snippet as well as a whole page that includes
//! the runtime one or more times.

use thiserror::Error;

use crate::utils::html::unescape;
use crate::widget::{Attributes, OptionsError, WidgetOptions};

/// Substring identifying the runtime script in a `src` attribute.
pub const RUNTIME_MARKER: &str = "share-buttons";

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("failed to parse markup: {0}")]
    Parse(String),
    #[error("no share widget tag found")]
    NotFound,
    #[error("widget tag {index}: {source}")]
    Options {
        index: usize,
        source: OptionsError,
    },
}

/// One inclusion tag and the options it configures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectedTag {
    pub src: String,
    pub options: WidgetOptions,
}

/// Collect every runtime inclusion tag in `markup`, in document order.
///
/// A tag counts when its `src` contains [`RUNTIME_MARKER`] or when it carries
/// `data-platforms`. Invalid option literals are errors here, unlike at
/// runtime.
pub fn inspect(markup: &str) -> Result<Vec<InspectedTag>, InspectError> {
    let dom = tl::parse(markup, tl::ParserOptions::default())
        .map_err(|e| InspectError::Parse(format!("{e:?}")))?;

    let mut found = Vec::new();
    for node in dom.nodes() {
        let Some(tag) = node.as_tag() else { continue };
        if !tag.name().as_utf8_str().eq_ignore_ascii_case("script") {
            continue;
        }

        let attrs: Attributes = tag
            .attributes()
            .iter()
            .map(|(k, v)| {
                let value = v.map(|v| unescape(&v).into_owned()).unwrap_or_default();
                (k.to_ascii_lowercase(), value)
            })
            .collect();

        let src = attrs.get("src").cloned().unwrap_or_default();
        if !src.contains(RUNTIME_MARKER) && !attrs.contains_key("data-platforms") {
            continue;
        }

        let options = WidgetOptions::try_from_attributes(&attrs).map_err(|source| {
            InspectError::Options {
                index: found.len(),
                source,
            }
        })?;
        found.push(InspectedTag { src, options });
    }

    if found.is_empty() {
        return Err(InspectError::NotFound);
    }
    Ok(found)
}
