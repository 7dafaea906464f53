//! Configuration validation command.

use anyhow::{Result, bail};
use serde_json::Value;
use std::path::Path;

use super::common::{plural_count, resolve_config};
use crate::config::{
    ConfigError, SiteConfig, load_value, validate_config, validate_partial_config,
};
use crate::{debug, log};

/// Validate the config file at (or above) `config`.
///
/// Violations are logged one per line; the returned error only summarizes.
pub fn validate_site(config: &Path, partial: bool) -> Result<()> {
    let path = resolve_config(config)?;
    log!("validate"; "checking {}", path.display());

    let value = load_value(&path)?;
    if partial {
        validate_partial(&value)
    } else {
        validate_full(&value)
    }
}

fn validate_full(value: &Value) -> Result<()> {
    let config = match validate_config(value) {
        Ok(config) => config,
        Err(ConfigError::Diagnostics(diag)) => {
            bail!("validation failed: {}", plural_count(diag.len(), "error"))
        }
        Err(err) => return Err(err.into()),
    };

    summarize(&config);
    log!("validate"; "configuration is valid");
    Ok(())
}

fn validate_partial(value: &Value) -> Result<()> {
    let partial = match validate_partial_config(value) {
        Ok(partial) => partial,
        Err(diag) => {
            diag.log_errors();
            bail!("validation failed: {}", plural_count(diag.len(), "error"))
        }
    };

    let present = serde_json::to_value(&partial)?
        .as_object()
        .map_or(0, |sections| sections.len());
    log!(
        "validate";
        "partial configuration is valid ({} present)",
        plural_count(present, "section")
    );
    Ok(())
}

fn summarize(config: &SiteConfig) {
    debug!("validate"; "site: {} ({})", config.meta.site_name, config.meta.site_url);
    debug!("validate"; "theme: {}", config.theme.variant);
    for component in config.theme.layouts.components() {
        debug!("validate"; "layout: {component}");
    }
    if let Some(items) = &config.events.items {
        debug!(
            "validate";
            "events: {} of {} visible",
            config.events.visible_items().count(),
            items.len()
        );
    }
}
