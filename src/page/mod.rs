//! Hosting-page metadata.
//!
//! - `meta` - `PageMetadata` snapshot and the `HeadSource` port
//! - `html` - `HeadSource` backed by a parsed HTML document

mod html;
mod meta;

pub use html::{HtmlPage, PageError};
pub use meta::{HeadSource, PageMetadata};
