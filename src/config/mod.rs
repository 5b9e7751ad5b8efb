//! Studio configuration management for `share-studio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section    # [theme] and per-section validation
//! ├── types/     # Utility types
//! │   ├── error  # ConfigError, ConfigDiagnostics
//! │   └── field  # FieldPath
//! ├── util       # Config discovery, path and URL helpers
//! └── mod.rs     # StudioConfig (this file)
//! ```
//!
//! # Sections
//!
//! | Section    | Purpose                                          |
//! |------------|--------------------------------------------------|
//! | `[widget]` | Platforms and the five style options             |
//! | `[embed]`  | Embed mode, runtime script URL, minification     |
//! | `[theme]`  | Where the preview theme preference is stored     |
//!
//! The file is optional: without one every value takes its default.
//! Command-line flags override whatever the file sets.

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::ThemeSectionConfig;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{CONFIG_FILE, Cli, Commands, EmbedArgs, WidgetArgs},
    debug, log,
    embed::EmbedSettings,
    widget::WidgetOptions,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing share-studio.toml
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Path to the loaded config file, if any (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Directory relative paths resolve against (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Widget options
    #[serde(default)]
    pub widget: WidgetOptions,

    /// Embed emission settings
    #[serde(default)]
    pub embed: EmbedSettings,

    /// Theme persistence
    #[serde(default)]
    pub theme: ThemeSectionConfig,
}

impl StudioConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. A missing default file
    /// means defaults; a missing file named with `-C` is an error.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config, &cwd) {
            Some(path) => {
                let mut config = Self::from_path(&path)?;
                config.root = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| cwd.clone());
                config.config_path = Some(path);
                config
            }
            None if cli.config != Path::new(CONFIG_FILE) => {
                return Err(ConfigError::NotFound(cli.config.clone()).into());
            }
            None => {
                debug!("config"; "no {} found, using defaults", CONFIG_FILE);
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_command_options(&cli.command);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)
            .with_context(|| format!("in {}", path.display()))?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.normalize();
        debug!("config"; "loaded {}", path.display());
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Trim platform ids and drop blank ones. An explicitly empty list stays
    /// empty and yields the empty state.
    fn normalize(&mut self) {
        self.widget.platforms = clean_platforms(&self.widget.platforms);
    }

    /// Theme store path, `~` expanded.
    pub fn theme_store_path(&self) -> PathBuf {
        self.theme.store_path(&self.root)
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, command: &Commands) {
        match command {
            Commands::Generate { widget, embed, .. } | Commands::Preview { widget, embed, .. } => {
                self.apply_widget_args(widget);
                self.apply_embed_args(embed);
            }
            Commands::Bundle { minify, .. } => {
                Self::update_option(&mut self.embed.minify, minify.as_ref());
            }
            Commands::Share { .. } | Commands::Inspect { .. } | Commands::Theme { .. } => {}
        }
    }

    fn apply_widget_args(&mut self, args: &WidgetArgs) {
        if let Some(platforms) = &args.platforms {
            self.widget.platforms = clean_platforms(platforms);
        }
        Self::update_option(&mut self.widget.icon_color, args.icon_color.as_ref());
        Self::update_option(&mut self.widget.display_style, args.display_style.as_ref());
        Self::update_option(&mut self.widget.button_style, args.button_style.as_ref());
        Self::update_option(&mut self.widget.size, args.size.as_ref());
        Self::update_option(&mut self.widget.position, args.position.as_ref());
    }

    fn apply_embed_args(&mut self, args: &EmbedArgs) {
        Self::update_option(&mut self.embed.mode, args.mode.as_ref());
        Self::update_option(&mut self.embed.script_url, args.script_url.as_ref());
        Self::update_option(&mut self.embed.minify, args.minify.as_ref());
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration after CLI overrides.
    ///
    /// Collects all validation errors and returns them at once; warnings are
    /// printed and never fail loading.
    pub fn validate(&self) -> Result<()> {
        let diag = self.diagnostics();
        diag.print_warnings();
        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    fn diagnostics(&self) -> ConfigDiagnostics {
        let mut diag = ConfigDiagnostics::new();
        section::validate_widget(&self.widget, &mut diag);
        section::validate_embed(&self.embed, &mut diag);
        self.theme.validate(&mut diag);
        diag
    }
}

/// Flatten comma-joined entries, trim ids and drop blank ones.
fn clean_platforms(platforms: &[String]) -> Vec<String> {
    platforms
        .iter()
        .flat_map(|entry| entry.split(','))
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> StudioConfig {
    let (mut parsed, ignored) = StudioConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed.normalize();
    parsed
}

// ============================================================================
// tests
// ============================================================================
