//! Widget scripts.
//!
//! `core.js` holds the click behavior and is spliced into every shell:
//! `standalone.js` binds buttons already present in the page, `runtime.js`
//! builds widgets from its own inclusion tag, `preview.js` drives the preview
//! page. Constants come from the Rust tables so the script never disagrees
//! with the library.

use serde::Serialize;
use serde_json::{Map, Value, json};

use super::{Template, TemplateVars};
use crate::clipboard::FEEDBACK_DURATION;
use crate::platform::{
    PLATFORMS, PlatformDescriptor,
    share::{COPIED_MESSAGE, INSTAGRAM_MESSAGE, X_DESCRIPTION_LIMIT},
};
use crate::theme::{THEME_KEY, Theme, ThemeContext};
use crate::widget::{
    ButtonSize, ButtonStyle, DisplayStyle, IconColor, Position, WidgetMarkup, WidgetOptions,
    render::RULES_ATTRIBUTE,
    runtime::{POPUP_FEATURES, POPUP_NAME},
};

#[cfg(test)]
mod engine;

const CORE_JS: &str = include_str!("js/core.js");

/// Rule table entry as the script sees it.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScriptPlatform {
    label: &'static str,
    color_icon: &'static str,
    mono_icon: &'static str,
    share_url: Option<&'static str>,
}

impl From<&PlatformDescriptor> for ScriptPlatform {
    fn from(p: &PlatformDescriptor) -> Self {
        Self {
            label: p.label,
            color_icon: p.icon_color,
            mono_icon: p.icon_mono,
            share_url: p.share_url,
        }
    }
}

/// JSON literal safe to place inside a `<script>` element.
pub fn script_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".into())
        .replace("</", "<\\/")
}

/// Variables for core.js.
pub struct CoreVars<'a> {
    /// Platforms to include in the rule table, in table order.
    pub platforms: Vec<&'a PlatformDescriptor>,
}

impl<'a> CoreVars<'a> {
    /// Every known platform.
    pub fn all() -> Self {
        Self {
            platforms: PLATFORMS.iter().collect(),
        }
    }

    /// Only the rules `markup` needs.
    pub fn for_markup(markup: &WidgetMarkup) -> Self {
        Self {
            platforms: markup.rules(),
        }
    }

    fn table(&self) -> String {
        let table: Map<String, Value> = self
            .platforms
            .iter()
            .map(|p| {
                let entry = serde_json::to_value(ScriptPlatform::from(*p)).unwrap_or(Value::Null);
                (p.id.to_string(), entry)
            })
            .collect();
        script_json(&table)
    }
}

impl TemplateVars for CoreVars<'_> {
    fn apply(&self, content: &str) -> String {
        content
            .replace("__SHARE_PLATFORMS__", &self.table())
            .replace("__SHARE_COPIED_MESSAGE__", &script_json(COPIED_MESSAGE))
            .replace("__SHARE_INSTAGRAM_MESSAGE__", &script_json(INSTAGRAM_MESSAGE))
            .replace("__SHARE_X_LIMIT__", &X_DESCRIPTION_LIMIT.to_string())
            .replace(
                "__SHARE_FEEDBACK_MS__",
                &FEEDBACK_DURATION.as_millis().to_string(),
            )
            .replace("__SHARE_POPUP_NAME__", &script_json(POPUP_NAME))
            .replace("__SHARE_POPUP_FEATURES__", &script_json(POPUP_FEATURES))
    }
}

/// Splice the rendered core into a shell.
fn with_core(shell: &str, core: &CoreVars<'_>) -> String {
    core.apply(&shell.replace("/*! SHARE_CORE */", CORE_JS.trim_end()))
}

/// Variables for standalone.js.
pub struct StandaloneVars<'a> {
    pub core: CoreVars<'a>,
    /// Rule-set key of the containers this script binds.
    pub rules: String,
}

impl StandaloneVars<'static> {
    pub fn for_markup(markup: &WidgetMarkup) -> Self {
        Self {
            core: CoreVars::for_markup(markup),
            rules: markup.rules_key(),
        }
    }
}

impl TemplateVars for StandaloneVars<'_> {
    fn apply(&self, content: &str) -> String {
        with_core(content, &self.core)
            .replace("__SHARE_RULES_ATTRIBUTE__", &script_json(RULES_ATTRIBUTE))
            .replace("__SHARE_RULES__", &script_json(&self.rules))
    }
}

pub const STANDALONE_JS: Template<StandaloneVars<'static>> =
    Template::new(include_str!("js/standalone.js"));

/// Variables for runtime.js.
pub struct RuntimeVars<'a> {
    pub core: CoreVars<'a>,
    /// Stylesheet injected once per page.
    pub styles: String,
}

impl RuntimeVars<'_> {
    /// Attribute name to default value, keyed like the tag attributes.
    fn defaults() -> Map<String, Value> {
        let defaults = WidgetOptions::default();
        let mut map = Map::new();
        map.insert("platforms".into(), json!(defaults.platforms));
        map.insert(IconColor::ATTRIBUTE.into(), json!(defaults.icon_color.as_str()));
        map.insert(DisplayStyle::ATTRIBUTE.into(), json!(defaults.display_style.as_str()));
        map.insert(ButtonStyle::ATTRIBUTE.into(), json!(defaults.button_style.as_str()));
        map.insert(ButtonSize::ATTRIBUTE.into(), json!(defaults.size.as_str()));
        map.insert(Position::ATTRIBUTE.into(), json!(defaults.position.as_str()));
        map
    }

    /// Attribute name to allowed literals.
    fn enums() -> Map<String, Value> {
        [
            (IconColor::ATTRIBUTE, IconColor::EXPECTED),
            (DisplayStyle::ATTRIBUTE, DisplayStyle::EXPECTED),
            (ButtonStyle::ATTRIBUTE, ButtonStyle::EXPECTED),
            (ButtonSize::ATTRIBUTE, ButtonSize::EXPECTED),
            (Position::ATTRIBUTE, Position::EXPECTED),
        ]
        .into_iter()
        .map(|(name, expected)| {
            let literals: Vec<&str> = expected.split_whitespace().collect();
            (name.to_string(), json!(literals))
        })
        .collect()
    }
}

impl TemplateVars for RuntimeVars<'_> {
    fn apply(&self, content: &str) -> String {
        with_core(content, &self.core)
            .replace("__SHARE_STYLES__", &script_json(&self.styles))
            .replace("__SHARE_DEFAULTS__", &script_json(&Self::defaults()))
            .replace("__SHARE_ENUMS__", &script_json(&Self::enums()))
    }
}

pub const RUNTIME_JS: Template<RuntimeVars<'static>> = Template::new(include_str!("js/runtime.js"));

/// Shown on the Copy Code button when both copy paths fail.
pub const COPY_ERROR_MESSAGE: &str = "Error!";

/// Variables for preview.js: the standalone binding plus page controls.
pub struct PreviewScriptVars<'a> {
    pub standalone: StandaloneVars<'a>,
    /// Whether the rendered theme came from a saved preference. When it did
    /// not, the page follows `prefers-color-scheme`.
    pub theme_saved: bool,
}

impl PreviewScriptVars<'_> {
    fn icons() -> Map<String, Value> {
        [Theme::Light, Theme::Dark]
            .into_iter()
            .map(|theme| {
                let icon = ThemeContext::new(theme).toggle_icon();
                (theme.as_str().to_string(), json!(icon))
            })
            .collect()
    }
}

impl TemplateVars for PreviewScriptVars<'_> {
    fn apply(&self, content: &str) -> String {
        self.standalone
            .apply(content)
            .replace("__PREVIEW_THEME_KEY__", &script_json(THEME_KEY))
            .replace("__PREVIEW_THEME_SAVED__", &self.theme_saved.to_string())
            .replace("__PREVIEW_THEME_ICONS__", &script_json(&Self::icons()))
            .replace("__PREVIEW_CODE_COPIED__", &script_json(COPIED_MESSAGE))
            .replace("__PREVIEW_CODE_FAILED__", &script_json(COPY_ERROR_MESSAGE))
    }
}

pub const PREVIEW_JS: Template<PreviewScriptVars<'static>> =
    Template::new(include_str!("js/preview.js"));
