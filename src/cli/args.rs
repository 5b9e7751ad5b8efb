//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::embed::EmbedMode;
use crate::theme::Theme;
use crate::widget::{ButtonSize, ButtonStyle, DisplayStyle, IconColor, Position};

/// Default config file name, searched upward from the working directory.
pub const CONFIG_FILE: &str = "share-studio.toml";

/// Share Studio: social share buttons generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: share-studio.toml)
    #[arg(short = 'C', long, global = true, default_value = CONFIG_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print embed code for the configured widget
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        widget: WidgetArgs,

        #[command(flatten)]
        embed: EmbedArgs,

        /// Write the code to a file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Also copy the code to the clipboard
        #[arg(long)]
        copy: bool,
    },

    /// Write an HTML page previewing the widget and its embed code
    #[command(visible_alias = "p")]
    Preview {
        #[command(flatten)]
        widget: WidgetArgs,

        #[command(flatten)]
        embed: EmbedArgs,

        /// Preview page path
        #[arg(short, long, default_value = "share-preview.html", value_hint = clap::ValueHint::FilePath)]
        output: PathBuf,

        /// Print a JSON summary to stdout instead of writing a page
        #[arg(long)]
        json: bool,
    },

    /// Compute what a click on one platform button does for a page
    #[command(visible_alias = "s")]
    Share {
        /// Platform id (e.g. x, reddit, copy)
        platform: String,

        /// Saved HTML page to read head metadata from
        #[arg(value_hint = clap::ValueHint::FilePath)]
        page: PathBuf,

        /// Page location; defaults to the page's og:url or canonical link
        #[arg(short = 'U', long, value_hint = clap::ValueHint::Url)]
        url: Option<String>,

        /// Perform the clipboard action for clipboard platforms
        #[arg(long)]
        copy: bool,
    },

    /// Read widget options back out of a snippet or page
    #[command(visible_alias = "i")]
    Inspect {
        /// File to read, or `-` for stdin
        #[arg(default_value = "-", value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Print JSON
        #[arg(long)]
        json: bool,
    },

    /// Read or change the stored preview theme
    #[command(visible_alias = "t")]
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },

    /// Write the self-initializing runtime script
    #[command(visible_alias = "b")]
    Bundle {
        /// Script path (default: stdout)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Minify the script
        #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        minify: Option<bool>,
    },
}

/// Theme subcommands.
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    /// Print the stored theme
    Get,
    /// Switch between light and dark
    Toggle,
    /// Store a theme
    Set {
        #[arg(value_enum)]
        theme: Theme,
    },
}

/// Widget options shared by Generate and Preview. Unset flags keep the
/// config file's values.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct WidgetArgs {
    /// Platforms in render order (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub platforms: Option<Vec<String>>,

    /// Icon asset set
    #[arg(long)]
    pub icon_color: Option<IconColor>,

    /// What each button shows
    #[arg(short, long)]
    pub display_style: Option<DisplayStyle>,

    /// Button corner shape
    #[arg(short, long)]
    pub button_style: Option<ButtonStyle>,

    /// Button size
    #[arg(short, long)]
    pub size: Option<ButtonSize>,

    /// Widget placement
    #[arg(long)]
    pub position: Option<Position>,
}

/// Embed settings shared by Generate and Preview.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct EmbedArgs {
    /// Kind of embed code
    #[arg(long)]
    pub mode: Option<EmbedMode>,

    /// Runtime script URL for reference snippets
    #[arg(long, value_hint = clap::ValueHint::Url)]
    pub script_url: Option<String>,

    /// Minify inline style and script in standalone snippets
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub minify: Option<bool>,
}
