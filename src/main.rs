//! Apex - site configuration toolkit.

use anyhow::Result;
use apex::cli::{self, Cli, Commands};
use clap::{ColorChoice, Parser};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    apex::logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Validate { partial } => cli::validate::validate_site(&cli.config, *partial),
        Commands::Css { args } => cli::css::write_css(&cli.config, args),
        Commands::Init { name, dry } => cli::init::new_site(name.as_deref(), &cli.config, *dry),
        Commands::Themes => {
            cli::themes::list_themes();
            Ok(())
        }
    }
}
