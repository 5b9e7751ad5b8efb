//! Section definitions and per-section validation.
//!
//! `[widget]` and `[embed]` deserialize straight into the library types
//! ([`WidgetOptions`], [`EmbedSettings`]); only `[theme]` is config-specific.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::types::{ConfigDiagnostics, FieldPath};
use super::util::{expand_path, is_http_url};
use crate::embed::EmbedSettings;
use crate::platform::{known_ids, lookup};
use crate::widget::WidgetOptions;

/// Default theme store location.
pub const DEFAULT_THEME_STORE: &str = "~/.config/share-studio/state.json";

/// `[theme]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSectionConfig {
    /// JSON file holding the preview theme preference.
    pub store: String,
}

impl Default for ThemeSectionConfig {
    fn default() -> Self {
        Self {
            store: DEFAULT_THEME_STORE.to_string(),
        }
    }
}

impl ThemeSectionConfig {
    pub const STORE: FieldPath = FieldPath::new("theme.store");

    /// Store path with `~` expanded; relative paths resolve against `root`.
    pub fn store_path(&self, root: &Path) -> PathBuf {
        expand_path(self.store.trim(), root)
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.store.trim().is_empty() {
            diag.error_with_hint(
                Self::STORE,
                "theme store path is empty",
                format!("remove the field to use `{DEFAULT_THEME_STORE}`"),
            );
        }
    }
}

pub const WIDGET_PLATFORMS: FieldPath = FieldPath::new("widget.platforms");
pub const EMBED_SCRIPT_URL: FieldPath = FieldPath::new("embed.script_url");

/// Unknown platform ids only warn: they render nothing but do no harm.
pub fn validate_widget(widget: &WidgetOptions, diag: &mut ConfigDiagnostics) {
    let unknown: Vec<&str> = widget
        .platforms
        .iter()
        .map(String::as_str)
        .filter(|id| lookup(id).is_none())
        .collect();

    if !unknown.is_empty() {
        diag.warn(
            WIDGET_PLATFORMS,
            format!("unknown platform(s) will be skipped: {}", unknown.join(", ")),
            format!("known platforms: {}", known_ids()),
        );
    }
}

pub fn validate_embed(embed: &EmbedSettings, diag: &mut ConfigDiagnostics) {
    if !is_http_url(&embed.script_url) {
        diag.error_with_hint(
            EMBED_SCRIPT_URL,
            format!("`{}` is not an absolute http(s) URL", embed.script_url),
            "use a full URL such as https://cdn.example.com/share-buttons.min.js",
        );
    }
}
