//! Page metadata snapshot used to populate share dialogs.

use serde::Serialize;

use crate::utils::encode::{decode_component, encode_component};

/// Read access to the hosting page's head metadata.
///
/// Implementations return `None` (or an empty string, treated the same way)
/// for anything the page does not provide.
pub trait HeadSource {
    /// `content` of `<meta property="{property}">`.
    fn meta_property(&self, property: &str) -> Option<String>;

    /// `content` of `<meta name="{name}">`.
    fn meta_name(&self, name: &str) -> Option<String>;

    /// Text of the `<title>` element.
    fn title_element(&self) -> Option<String>;

    /// Generic document title, when the host tracks one apart from `<title>`.
    fn document_title(&self) -> Option<String> {
        None
    }

    /// Full current page location.
    fn location(&self) -> &str;

    /// Host name of the current page.
    fn hostname(&self) -> String {
        url::Url::parse(self.location())
            .ok()
            .and_then(|u| u.host_str().map(str::to_string))
            .unwrap_or_default()
    }
}

/// Best-available page metadata, every field percent-encoded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMetadata {
    pub url: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

impl PageMetadata {
    /// Read metadata from `head`. Called once per share action, never cached.
    ///
    /// - title: `og:title` > `<title>` > document title > `Shared from {host}`
    /// - description: `og:description` > `meta[name=description]` > empty
    /// - image: `og:image` > empty
    pub fn extract(head: &impl HeadSource) -> Self {
        let title = present(head.meta_property("og:title"))
            .or_else(|| present(head.title_element()))
            .or_else(|| present(head.document_title()))
            .unwrap_or_else(|| format!("Shared from {}", head.hostname()));

        let description = present(head.meta_property("og:description"))
            .or_else(|| present(head.meta_name("description")))
            .unwrap_or_default();

        let image = present(head.meta_property("og:image")).unwrap_or_default();

        Self {
            url: encode_component(head.location()),
            title: encode_component(&title),
            description: encode_component(&description),
            image: encode_component(&image),
        }
    }

    /// The page location as the browser reports it.
    pub fn raw_url(&self) -> String {
        decode_component(&self.url).into_owned()
    }
}

/// Treat empty values as missing, like a browser `||` chain.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
