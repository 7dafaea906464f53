//! Command-line interface definitions.

use crate::theme::ThemeVariant;
use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Apex site configuration toolkit
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(
        short = 'C',
        long,
        global = true,
        default_value = "site.toml",
        value_hint = clap::ValueHint::FilePath
    )]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate the site configuration
    #[command(visible_alias = "v")]
    Validate {
        /// Allow top-level sections to be missing
        #[arg(short, long)]
        partial: bool,
    },

    /// Print the CSS custom properties of a theme
    #[command(visible_alias = "c")]
    Css {
        #[command(flatten)]
        args: CssArgs,
    },

    /// Write the flagship configuration as a starting point
    #[command(visible_alias = "i")]
    Init {
        /// Site directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the configuration to stdout instead of writing it
        #[arg(short, long)]
        dry: bool,
    },

    /// List theme presets and layout variants
    #[command(visible_alias = "t")]
    Themes,
}

/// Css command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CssArgs {
    /// Theme variant (luxury-dark, clean-light, bold-contrast).
    /// Defaults to `theme.variant` of the config file.
    #[arg(value_name = "VARIANT")]
    pub variant: Option<ThemeVariant>,

    /// Selector wrapping the declarations
    #[arg(short, long, default_value = crate::theme::DEFAULT_SELECTOR)]
    pub selector: String,

    /// JSON or TOML file of token overrides merged onto the variant
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub overrides: Option<PathBuf>,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
