//! Share Studio - social share buttons generator.

#![allow(dead_code)]

mod cli;
mod clipboard;
mod config;
mod embed;
mod logger;
mod page;
mod platform;
mod theme;
mod utils;
mod widget;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::StudioConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = StudioConfig::load(&cli)?;

    match &cli.command {
        Commands::Generate { output, copy, .. } => {
            cli::generate::generate_code(&config, output.as_deref(), *copy).await
        }
        Commands::Preview { output, json, .. } => {
            cli::preview::write_preview(&config, output, *json)
        }
        Commands::Share {
            platform,
            page,
            url,
            copy,
        } => cli::share::share_page(platform, page, url.as_deref(), *copy).await,
        Commands::Inspect { input, json } => cli::inspect::inspect_markup(input, *json),
        Commands::Theme { action } => cli::theme::run_theme(&config, *action),
        Commands::Bundle { output, .. } => cli::bundle::write_bundle(&config, output.as_deref()),
    }
}
