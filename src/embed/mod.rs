//! Embed code emission and embedded static resources.
//!
//! # Module Structure
//!
//! - `template` - Template types for typed variable injection
//! - `css` - Widget stylesheets (`css/widget.css`, `css/floating.css`)
//! - `js` - Widget scripts (`js/core.js` spliced into the two shells)
//! - `minify` - oxc / lightningcss minification with fallback
//! - `reference` - `<script src>` snippet for the hosted runtime
//! - `standalone` - self-contained markup + style + behavior snippet
//! - `inspect` - read options back out of emitted markup
//! - `preview` - preview page (`page/preview.html`)
//!
//! # Usage
//!
//! ```ignore
//! use embed::{EmbedMode, EmbedSettings, generate};
//!
//! let settings = EmbedSettings { mode: EmbedMode::Standalone, ..Default::default() };
//! let code = generate(&options, &settings);
//! ```

pub mod css;
pub mod inspect;
pub mod js;
pub mod minify;
pub mod reference;
pub mod standalone;
mod template;

pub use inspect::{InspectError, InspectedTag, inspect};
pub use template::{Template, TemplateVars};

use serde::{Deserialize, Serialize};

use crate::widget::{WidgetMarkup, WidgetOptions};

/// Hosted runtime loaded by reference snippets.
pub const DEFAULT_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/gh/DrEEjc7/share-studio@latest/dist/share-buttons.min.js";

/// Emitted in place of embed code when no recognized platform is selected.
pub const EMPTY_STATE: &str =
    "<!-- Share Studio: select at least one platform to generate embed code. -->";

/// Kind of embed code to emit.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum EmbedMode {
    /// One script tag referencing the hosted runtime.
    #[default]
    Reference,
    /// Markup, style and behavior in one block, no external script.
    Standalone,
}

impl EmbedMode {
    pub const fn hint(self) -> &'static str {
        match self {
            Self::Reference => {
                "Reference mode: paste where the buttons should appear. The hosted script builds them."
            }
            Self::Standalone => {
                "Standalone mode: paste anywhere in the page body. No external script is loaded."
            }
        }
    }
}

/// Emission settings besides the widget options. Doubles as `[embed]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedSettings {
    pub mode: EmbedMode,
    pub script_url: String,
    pub minify: bool,
}

impl Default for EmbedSettings {
    fn default() -> Self {
        Self {
            mode: EmbedMode::default(),
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            minify: false,
        }
    }
}

/// Embed code for `options`. Pure: equal inputs give byte-identical output.
pub fn generate(options: &WidgetOptions, settings: &EmbedSettings) -> String {
    emit(options, &WidgetMarkup::new(options), settings)
}

/// Embed code for `options` already rendered as `markup`.
fn emit(options: &WidgetOptions, markup: &WidgetMarkup, settings: &EmbedSettings) -> String {
    if markup.is_empty() {
        return EMPTY_STATE.to_string();
    }
    match settings.mode {
        EmbedMode::Reference => reference::reference_snippet(options, &settings.script_url),
        EmbedMode::Standalone => standalone::standalone_snippet(options, markup, settings.minify),
    }
}

/// Self-initializing runtime script: every platform, every style variant.
pub fn bundle(minify_output: bool) -> String {
    let script = js::RUNTIME_JS.render(&js::RuntimeVars {
        core: js::CoreVars::all(),
        styles: css::full_stylesheet(),
    });
    minify::minify_or_keep(minify::AssetKind::JavaScript, script, minify_output)
}

pub mod preview {
    use super::js::{PREVIEW_JS, PreviewScriptVars, StandaloneVars, script_json};
    use super::{EmbedMode, EmbedSettings, Template, TemplateVars, css, emit};
    use crate::theme::ThemeContext;
    use crate::utils::html::escape;
    use crate::widget::{WidgetMarkup, WidgetOptions};

    /// Variables for preview.html.
    pub struct PreviewVars {
        pub theme: ThemeContext,
        pub mode: EmbedMode,
        /// Live widget markup, or the empty-state hint.
        pub preview: String,
        /// Generated embed code, shown escaped.
        pub code: String,
        pub styles: String,
        pub script: String,
    }

    impl TemplateVars for PreviewVars {
        fn apply(&self, content: &str) -> String {
            content
                .replace("__THEME_ATTRIBUTE__", self.theme.body_attribute())
                .replace("__THEME_ICON__", self.theme.toggle_icon())
                .replace("__MODE_HINT__", &escape(self.mode.hint()))
                .replace("__SHARE_STYLES__", &self.styles)
                .replace("__SHARE_SCRIPT__", &self.script)
                .replace("__PREVIEW__", &self.preview)
                .replace("__CODE__", &escape(&self.code))
        }
    }

    pub const PREVIEW_HTML: Template<PreviewVars> =
        Template::new(include_str!("page/preview.html"));

    /// Full preview page: live widget plus the code `settings` would emit.
    ///
    /// The live widget gets the complete stylesheet and working click
    /// handlers regardless of mode, so it behaves like the installed widget.
    pub fn render_preview(
        options: &WidgetOptions,
        settings: &EmbedSettings,
        theme: ThemeContext,
    ) -> String {
        let markup = WidgetMarkup::new(options);
        let script = PREVIEW_JS
            .render(&PreviewScriptVars {
                standalone: StandaloneVars::for_markup(&markup),
                theme_saved: theme.saved,
            })
            .replace("</script", "<\\/script");

        PREVIEW_HTML.render(&PreviewVars {
            theme,
            mode: settings.mode,
            preview: markup.to_preview_html(),
            code: emit(options, &markup, settings),
            styles: css::full_stylesheet(),
            script,
        })
    }

    /// JSON summary of what the preview shows, for scripting.
    pub fn preview_json(options: &WidgetOptions, settings: &EmbedSettings) -> String {
        let markup = WidgetMarkup::new(options);
        let buttons: Vec<_> = markup.buttons.iter().map(|b| b.id()).collect();
        script_json(&serde_json::json!({
            "options": options,
            "buttons": buttons,
            "code": emit(options, &markup, settings),
        }))
    }
}
