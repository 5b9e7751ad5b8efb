//! `HeadSource` over a static HTML document.

use thiserror::Error;

use super::meta::HeadSource;
use crate::utils::html::unescape;

#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

/// Head metadata collected from an HTML document, plus the page location.
///
/// Tags are collected once at parse time; lookups follow document order, so
/// the first matching tag wins just like `querySelector`.
#[derive(Debug, Clone, Default)]
pub struct HtmlPage {
    location: String,
    properties: Vec<(String, String)>,
    names: Vec<(String, String)>,
    title: Option<String>,
    canonical: Option<String>,
    document_title: Option<String>,
}

impl HtmlPage {
    /// Parse `html` served at `location`.
    pub fn parse(html: &str, location: impl Into<String>) -> Result<Self, PageError> {
        let dom = tl::parse(html, tl::ParserOptions::default())
            .map_err(|e| PageError::Parse(format!("{e:?}")))?;
        let parser = dom.parser();

        let mut page = Self {
            location: location.into(),
            ..Self::default()
        };

        for node in dom.nodes() {
            let Some(tag) = node.as_tag() else { continue };
            let name = tag.name().as_utf8_str().to_ascii_lowercase();
            let attr = |key: &'static str| {
                tag.attributes()
                    .get(key)
                    .flatten()
                    .map(|v| unescape(&v.as_utf8_str()).into_owned())
            };

            match name.as_str() {
                "meta" => {
                    let content = attr("content").unwrap_or_default();
                    if let Some(property) = attr("property") {
                        page.properties.push((property, content));
                    } else if let Some(name) = attr("name") {
                        page.names.push((name.to_ascii_lowercase(), content));
                    }
                }
                // Raw text, surrounding whitespace included, like `textContent`.
                "title" if page.title.is_none() => {
                    let text = tag.inner_text(parser);
                    page.title = Some(unescape(&text).into_owned());
                }
                "link" if page.canonical.is_none() => {
                    let is_canonical = attr("rel")
                        .is_some_and(|rel| rel.split_whitespace().any(|r| r == "canonical"));
                    if is_canonical {
                        page.canonical = attr("href");
                    }
                }
                _ => {}
            }
        }

        Ok(page)
    }

    /// Override the generic document title used as third title fallback.
    pub fn with_document_title(mut self, title: impl Into<String>) -> Self {
        self.document_title = Some(title.into());
        self
    }

    /// Replace the page location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Page's own idea of its URL: `og:url`, then `<link rel="canonical">`.
    pub fn canonical_url(&self) -> Option<String> {
        self.meta_property("og:url")
            .filter(|u| !u.is_empty())
            .or_else(|| self.canonical.clone().filter(|u| !u.is_empty()))
    }
}

impl HeadSource for HtmlPage {
    fn meta_property(&self, property: &str) -> Option<String> {
        first(&self.properties, property)
    }

    fn meta_name(&self, name: &str) -> Option<String> {
        first(&self.names, name)
    }

    fn title_element(&self) -> Option<String> {
        self.title.clone()
    }

    fn document_title(&self) -> Option<String> {
        self.document_title.clone()
    }

    fn location(&self) -> &str {
        &self.location
    }
}

fn first(entries: &[(String, String)], key: &str) -> Option<String> {
    entries
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageMetadata;

    const ARTICLE: &str = r#"<!doctype html>
<html>
<head>
  <title> Fallback &amp; Title </title>
  <meta name="Description" content="Plain description">
  <meta property="og:title" content="Open &quot;Graph&quot; Title">
  <meta property="og:title" content="Second og title">
  <meta property="og:description" content="OG description">
  <meta property="og:image" content="https://cdn.example.com/cover.png">
  <link rel="canonical" href="https://example.com/canonical/">
</head>
<body><p>Hello</p></body>
</html>"#;

    #[test]
    fn test_collects_head_tags() {
        let page = HtmlPage::parse(ARTICLE, "https://example.com/a").unwrap();
        assert_eq!(
            page.meta_property("og:title").as_deref(),
            Some("Open \"Graph\" Title")
        );
        assert_eq!(
            page.meta_name("description").as_deref(),
            Some("Plain description")
        );
        assert_eq!(page.title_element().as_deref(), Some(" Fallback & Title "));
        assert_eq!(page.location(), "https://example.com/a");
    }

    #[test]
    fn test_canonical_url() {
        let page = HtmlPage::parse(ARTICLE, "").unwrap();
        assert_eq!(
            page.canonical_url().as_deref(),
            Some("https://example.com/canonical/")
        );

        let with_og = r#"<head><meta property="og:url" content="https://example.com/og/"><link rel="canonical" href="https://example.com/c/"></head>"#;
        let page = HtmlPage::parse(with_og, "").unwrap();
        assert_eq!(page.canonical_url().as_deref(), Some("https://example.com/og/"));
    }

    #[test]
    fn test_extract_from_bare_page_uses_fallbacks() {
        let page = HtmlPage::parse("<html><body>nothing</body></html>", "https://ex.com/x").unwrap();
        let meta = PageMetadata::extract(&page);
        assert_eq!(meta.title, "Shared%20from%20ex.com");
        assert_eq!(meta.description, "");
        assert_eq!(meta.image, "");
    }

    #[test]
    fn test_title_whitespace_is_kept() {
        let page = HtmlPage::parse("<title> Foo </title>", "https://ex.com/").unwrap();
        assert_eq!(PageMetadata::extract(&page).title, "%20Foo%20");
    }

    #[test]
    fn test_document_title_override() {
        let page = HtmlPage::parse("<html></html>", "https://ex.com/")
            .unwrap()
            .with_document_title("Doc");
        assert_eq!(PageMetadata::extract(&page).title, "Doc");
    }

    #[test]
    fn test_extract_full_page() {
        let page = HtmlPage::parse(ARTICLE, "https://example.com/a").unwrap();
        let meta = PageMetadata::extract(&page);
        assert_eq!(meta.title, "Open%20%22Graph%22%20Title");
        assert_eq!(meta.description, "OG%20description");
        assert_eq!(meta.image, "https%3A%2F%2Fcdn.example.com%2Fcover.png");
    }
}
