//! Configuration file generation.
//!
//! Writes the flagship configuration as the starting `site.toml`.

use anyhow::{Context, Result};
use std::{fs, path::Path};

use crate::config::SiteConfig;

/// Generate the starting configuration with a short header.
pub fn generate_config_template() -> Result<String> {
    let body = SiteConfig::flagship()
        .to_toml()
        .context("Failed to serialize the flagship configuration")?;

    let mut out = format!(
        "# Apex site configuration (v{})\n\
         # Edit the sections below, then run `apex validate`.\n\n",
        env!("CARGO_PKG_VERSION")
    );
    out.push_str(&body);
    Ok(out)
}

/// Write the starting configuration to `root/config_name`.
pub fn write_config(root: &Path, config_name: &Path) -> Result<()> {
    let content = generate_config_template()?;

    let path = root.join(config_name);
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_is_valid_config() {
        let template = generate_config_template().unwrap();
        assert!(template.starts_with("# Apex site configuration"));

        let value: serde_json::Value = toml::from_str(&template).unwrap();
        let config = crate::config::validate_config(&value).unwrap();
        assert_eq!(config, SiteConfig::flagship());
    }

    #[test]
    fn test_write_config() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), Path::new("site.toml")).unwrap();

        let loaded = SiteConfig::load(&dir.path().join("site.toml")).unwrap();
        assert_eq!(loaded.meta.site_name, SiteConfig::flagship().meta.site_name);
    }
}
