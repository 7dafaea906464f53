//! Apex - site configuration core for influencer landing pages.
//!
//! - [`config`]: typed site configuration, schema validation, the flagship preset
//! - [`theme`]: design token bundles and their CSS custom properties
//! - [`layout`]: section layout variant selection
//!
//! ```ignore
//! let config = apex::config::SiteConfig::load(Path::new("site.toml"))?;
//! let css = apex::theme::generate_theme_css(config.theme.variant, None)?;
//! ```

pub mod cli;
pub mod config;
pub mod layout;
pub mod logger;
pub mod theme;
