//! Light/dark theme preference for the preview page.
//!
//! The preference is a single string under [`THEME_KEY`] in an injected
//! [`KeyValueStore`]. Anything missing or unreadable means light.

use std::{fs, path::PathBuf};

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{debug, log};

/// Storage key of the theme preference.
pub const THEME_KEY: &str = "share-studio-theme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme as handed to renderers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeContext {
    pub theme: Theme,
    /// The theme is a saved preference rather than the fallback.
    pub saved: bool,
}

impl ThemeContext {
    pub const fn new(theme: Theme) -> Self {
        Self {
            theme,
            saved: false,
        }
    }

    pub const fn saved(theme: Theme) -> Self {
        Self { theme, saved: true }
    }

    /// ` data-theme="dark"` for dark, nothing for light.
    pub const fn body_attribute(&self) -> &'static str {
        match self.theme {
            Theme::Light => "",
            Theme::Dark => r#" data-theme="dark""#,
        }
    }

    /// Icon of the toggle control: the theme you would switch to.
    pub const fn toggle_icon(&self) -> &'static str {
        match self.theme {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

/// String key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// In-process store.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore(FxHashMap<String, String>);

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.0.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.0.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON object on disk. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<FxHashMap<String, String>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(FxHashMap::default()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        // Corrupt files are replaced.
        let mut map = self.read().unwrap_or_else(|e| {
            log!("theme"; "{e}, starting fresh");
            FxHashMap::default()
        });
        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let json = serde_json::to_string_pretty(&map).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;
        fs::write(&self.path, json).map_err(io_err)
    }
}

/// Theme preference on top of a [`KeyValueStore`].
#[derive(Debug)]
pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved theme, if one is saved and readable.
    pub fn stored(&self) -> Option<Theme> {
        match self.store.get(THEME_KEY) {
            Ok(Some(value)) => Theme::parse(&value).or_else(|| {
                debug!("theme"; "ignoring stored theme `{value}`");
                None
            }),
            Ok(None) => None,
            Err(e) => {
                log!("theme"; "{e}, using light");
                None
            }
        }
    }

    /// Saved theme, or light when none is saved or it cannot be read.
    pub fn load(&self) -> Theme {
        self.stored().unwrap_or_default()
    }

    pub fn context(&self) -> ThemeContext {
        self.stored()
            .map_or_else(ThemeContext::default, ThemeContext::saved)
    }

    pub fn set(&mut self, theme: Theme) -> Result<(), StoreError> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// Flip and persist the theme, returning the new one.
    pub fn toggle(&mut self) -> Result<Theme, StoreError> {
        let next = self.load().toggled();
        self.set(next)?;
        Ok(next)
    }

    #[cfg(test)]
    pub fn into_inner(self) -> S {
        self.store
    }
}
