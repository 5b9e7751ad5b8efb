//! Standalone snippet: markup, style and behavior with no external script.

use super::css::stylesheet;
use super::js::{STANDALONE_JS, StandaloneVars};
use super::minify::{AssetKind, minify_or_keep};
use crate::widget::{WidgetMarkup, WidgetOptions};

/// First line of a standalone snippet.
pub const STANDALONE_COMMENT: &str = "<!-- Share Studio Widget (Standalone) -->";

/// Render the standalone snippet for `options`, already rendered as `markup`.
///
/// The script only binds containers carrying its own rule-set key, so
/// snippets for different platform sets can share a page.
pub fn standalone_snippet(options: &WidgetOptions, markup: &WidgetMarkup, minify: bool) -> String {
    let css = minify_or_keep(AssetKind::Css, stylesheet(options), minify);
    let js = minify_or_keep(
        AssetKind::JavaScript,
        STANDALONE_JS.render(&StandaloneVars::for_markup(markup)),
        minify,
    );

    format!(
        "{STANDALONE_COMMENT}\n{}\n\n<style>\n{}\n</style>\n\n<script>\n{}\n</script>",
        markup.to_html(),
        css.trim_end(),
        js.trim_end()
    )
}
