//! `theme` command: read or change the stored preview theme.

use anyhow::Result;

use super::ThemeAction;
use crate::config::StudioConfig;
use crate::log;
use crate::theme::{FileStore, KeyValueStore, Theme, ThemeStore};

pub fn run_theme(config: &StudioConfig, action: ThemeAction) -> Result<()> {
    let mut store = ThemeStore::new(FileStore::new(config.theme_store_path()));
    println!("{}", apply(&mut store, action)?);
    Ok(())
}

fn apply<S: KeyValueStore>(store: &mut ThemeStore<S>, action: ThemeAction) -> Result<Theme> {
    let theme = match action {
        ThemeAction::Get => store.load(),
        ThemeAction::Toggle => {
            let theme = store.toggle()?;
            log!("theme"; "switched to {theme}");
            theme
        }
        ThemeAction::Set { theme } => {
            store.set(theme)?;
            theme
        }
    };
    Ok(theme)
}
