//! Common utilities shared across CLI commands.

use anyhow::{Context, Result, bail};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::find_config_file;

/// Locate the config file named on the command line.
///
/// Relative names are searched upward from the current directory.
pub fn resolve_config(config: &Path) -> Result<PathBuf> {
    match find_config_file(config) {
        Some(path) => Ok(path),
        None => bail!(
            "config file '{}' not found.\n\
             Run `apex init` to create one, or pass `-C <path>`.",
            config.display()
        ),
    }
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create '{}'", parent.display()))?;
            }
            fs::write(path, content)
                .with_context(|| format!("Failed to write '{}'", path.display()))
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{content}")?;
            stdout.flush()?;
            Ok(())
        }
    }
}

/// `"1 error"`, `"2 errors"`.
pub fn plural_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
