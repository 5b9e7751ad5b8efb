//! Command-line interface module.

mod args;
pub mod bundle;
pub mod common;
pub mod generate;
pub mod inspect;
pub mod preview;
pub mod share;
pub mod theme;

pub use args::{CONFIG_FILE, Cli, Commands, EmbedArgs, ThemeAction, WidgetArgs};
