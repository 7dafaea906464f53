//! Pre-initialization validation.
//!
//! Validates target directory state before site creation.

use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Initialization mode determines validation rules.
#[derive(Debug, Clone, Copy)]
pub enum InitMode {
    /// `apex init`: write into the current directory (must hold no config yet)
    CurrentDir,
    /// `apex init <name>`: create a new subdirectory (must not exist)
    NewDir,
}

/// Validate target directory for initialization.
///
/// # Rules
/// - `CurrentDir`: `config_name` must not exist yet
/// - `NewDir`: directory must not exist
pub fn validate_target(root: &Path, config_name: &Path, mode: InitMode) -> Result<()> {
    match mode {
        InitMode::CurrentDir => {
            if root.join(config_name).exists() {
                bail!(
                    "'{}' already exists in the current directory.\n\
                     Use `apex init <name>` to create in a new subdirectory.",
                    config_name.display()
                );
            }
            if !is_dir_or_missing(root)? {
                bail!("'{}' is not a directory.", root.display());
            }
        }
        InitMode::NewDir => {
            if root.exists() {
                bail!(
                    "Directory '{}' already exists.\n\
                     Choose a different name or remove the existing directory.",
                    root.display()
                );
            }
        }
    }
    Ok(())
}

/// Check that `path` is a readable directory or does not exist.
fn is_dir_or_missing(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(true);
    }
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata of '{}'", path.display()))?;
    Ok(metadata.is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = "site.toml";

    #[test]
    fn test_empty_dir_current_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_other_files_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("README.md"), "content").unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir).is_ok());
    }

    #[test]
    fn test_existing_config_current_mode() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG), "").unwrap();
        let err = validate_target(temp.path(), Path::new(CONFIG), InitMode::CurrentDir)
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn test_file_as_root_current_mode() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "content").unwrap();
        assert!(validate_target(&file, Path::new(CONFIG), InitMode::CurrentDir).is_err());
    }

    #[test]
    fn test_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        assert!(validate_target(temp.path(), Path::new(CONFIG), InitMode::NewDir).is_err());
    }

    #[test]
    fn test_non_existing_dir_new_mode() {
        let temp = TempDir::new().unwrap();
        let new_path = temp.path().join("new_site");
        assert!(validate_target(&new_path, Path::new(CONFIG), InitMode::NewDir).is_ok());
    }
}
