//! Reference snippet: one `<script>` tag pointing at the hosted runtime.

use std::fmt::Write;

use crate::utils::html::escape_attr;
use crate::widget::WidgetOptions;

/// First line of a reference snippet.
pub const REFERENCE_COMMENT: &str = "<!-- Share Studio Widget -->";

/// Render the reference snippet for `options` loading `script_url`.
///
/// All six attributes are always written, defaults included, so the snippet
/// documents itself and reads back to the same options.
pub fn reference_snippet(options: &WidgetOptions, script_url: &str) -> String {
    let mut out = format!(
        "{REFERENCE_COMMENT}\n<script src=\"{}\"",
        escape_attr(script_url)
    );
    for (name, value) in options.to_attributes() {
        let _ = write!(out, "\n    {name}=\"{}\"", escape_attr(&value));
    }
    out.push_str("\n    defer>\n</script>");
    out
}
