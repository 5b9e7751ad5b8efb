//! `preview` command: write a themed preview page.

use std::path::Path;

use anyhow::Result;

use super::common::write_output;
use crate::config::StudioConfig;
use crate::embed::preview::{preview_json, render_preview};
use crate::theme::{FileStore, ThemeStore};

pub fn write_preview(config: &StudioConfig, output: &Path, json: bool) -> Result<()> {
    if json {
        return write_output(None, &preview_json(&config.widget, &config.embed), "preview");
    }

    let theme = ThemeStore::new(FileStore::new(config.theme_store_path())).context();
    let page = render_preview(&config.widget, &config.embed, theme);
    write_output(Some(output), &page, "preview")
}
