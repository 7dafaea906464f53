//! Theme stylesheet command.

use anyhow::{Context, Result};
use std::path::Path;

use super::args::CssArgs;
use super::common::{resolve_config, write_output};
use crate::config::{SiteConfig, load_value};
use crate::theme::{
    CssVars, ThemeOverrides, ThemeVariant, create_custom_theme, generate_theme_css,
};
use crate::{debug, log};

/// Print or write the CSS custom properties of the selected theme.
pub fn write_css(config: &Path, args: &CssArgs) -> Result<()> {
    let variant = match args.variant {
        Some(variant) => variant,
        None => configured_variant(config)?,
    };
    debug!("css"; "variant: {variant}, selector: {}", args.selector);

    let css = render(variant, args)?;
    write_output(args.output.as_deref(), &css)?;

    if let Some(output) = &args.output {
        log!("css"; "wrote {} theme to {}", variant, output.display());
    }
    Ok(())
}

fn configured_variant(config: &Path) -> Result<ThemeVariant> {
    let path = resolve_config(config)?;
    let config = SiteConfig::load(&path)?;
    Ok(config.theme.variant)
}

fn render(variant: ThemeVariant, args: &CssArgs) -> Result<String> {
    let Some(path) = &args.overrides else {
        return Ok(generate_theme_css(variant, Some(&args.selector))?);
    };

    let value = load_value(path)?;
    let overrides: ThemeOverrides = serde_json::from_value(value)
        .with_context(|| format!("Invalid theme overrides in '{}'", path.display()))?;
    let tokens = create_custom_theme(variant, &overrides)?;
    Ok(CssVars::from_tokens(&tokens).to_css(&args.selector))
}
