//! Site initialization module.
//!
//! Writes the flagship configuration into a new or existing directory.
//!
//! # Module Structure
//!
//! - [`validate`]: Pre-initialization validation
//! - [`config`]: Configuration file generation

mod config;
mod validate;

use crate::log;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

pub use validate::InitMode;

/// Create a starting configuration.
///
/// # Steps
/// 1. Validate target directory
/// 2. Create it when `name` is given
/// 3. Write the configuration file
///
/// If `dry_run` is true, only prints the config template to stdout
pub fn new_site(name: Option<&Path>, config_name: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        print!("{}", config::generate_config_template()?);
        return Ok(());
    }

    let (root, mode) = match name {
        Some(name) => (name, InitMode::NewDir),
        None => (Path::new("."), InitMode::CurrentDir),
    };

    validate::validate_target(root, config_name, mode)?;

    if matches!(mode, InitMode::NewDir) {
        fs::create_dir_all(root)
            .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    }

    config::write_config(root, config_name)?;

    log!("init"; "wrote {}", root.join(config_name).display());
    Ok(())
}
