//! Theme token registry.
//!
//! Three preset bundles are registered under their [`ThemeVariant`] names.
//! `custom` names a theme supplied by the caller, so every registry lookup
//! for it fails with a [`ThemeError`].
//!
//! # Module Structure
//!
//! ```text
//! theme/
//! ├── tokens.rs      # Token types, base bundles, color helpers
//! ├── presets.rs     # luxury-dark, clean-light, bold-contrast
//! ├── vars.rs        # CSS custom properties, style surfaces
//! ├── overrides.rs   # Partial tokens for custom themes
//! └── mod.rs         # Registry and lookup functions (this file)
//! ```

mod overrides;
mod presets;
mod tokens;
mod vars;

pub use overrides::{
    AnimationOverrides, BackgroundOverrides, BorderOverrides, BorderRadiusOverrides,
    ColorOverrides, FontFamilyOverrides, GradientOverrides, SemanticOverrides, ShadowOverrides,
    SpacingOverrides, TextOverrides, ThemeOverrides, TypographyOverrides,
};
pub use tokens::{
    AnimationTokens, BackgroundTokens, BorderRadiusTokens, BorderTokens, ColorTokens,
    FontFamilyTokens, GradientTokens, Scalar, SemanticTokens, ShadowTokens, SpacingTokens,
    TextTokens, ThemeTokens, TokenMap, TypographyTokens, base_animation, base_border_radius,
    base_spacing, base_typography, create_gradient, hex_to_rgba,
};
pub use vars::{CSS_VAR_NAMES, CssVars, StyleSurface};

use crate::config::types::literal_enum;
use std::sync::LazyLock;
use thiserror::Error;

/// Selector used by [`generate_theme_css`] when none is given.
pub const DEFAULT_SELECTOR: &str = ":root";

literal_enum! {
    /// Theme bundle selected by `theme.variant`.
    pub enum ThemeVariant("theme variant") {
        LuxuryDark => "luxury-dark",
        CleanLight => "clean-light",
        BoldContrast => "bold-contrast",
        Custom => "custom",
    }
}

impl ThemeVariant {
    /// Variants with a registered bundle.
    pub const PRESETS: [Self; 3] = [Self::LuxuryDark, Self::CleanLight, Self::BoldContrast];

    pub const fn is_custom(self) -> bool {
        matches!(self, Self::Custom)
    }

    /// Display metadata, `None` for [`ThemeVariant::Custom`].
    pub fn metadata(self) -> Option<&'static ThemeMetadata> {
        match self {
            Self::LuxuryDark => Some(&LUXURY_DARK_META),
            Self::CleanLight => Some(&CLEAN_LIGHT_META),
            Self::BoldContrast => Some(&BOLD_CONTRAST_META),
            Self::Custom => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ThemeError {
    #[error("Custom themes must be provided directly")]
    CustomTokens,
    #[error("Custom themes must provide their own CSS variables")]
    CustomVars,
}

// ============================================================================
// metadata
// ============================================================================

/// Human-facing description of a preset, for theme pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub preview: PreviewColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
}

const LUXURY_DARK_META: ThemeMetadata = ThemeMetadata {
    name: "Luxury Dark",
    description: "Premium dark theme with gold accents. \
                  Perfect for athletes, luxury brands, and exclusive events.",
    preview: PreviewColors {
        primary: "#D4AF37",
        secondary: "#00D4FF",
        background: "#0A0A0A",
    },
};

const CLEAN_LIGHT_META: ThemeMetadata = ThemeMetadata {
    name: "Clean Light",
    description: "Minimalist light theme with subtle accents. \
                  Perfect for lifestyle influencers and wellness brands.",
    preview: PreviewColors {
        primary: "#1A1A1A",
        secondary: "#6366F1",
        background: "#FFFFFF",
    },
};

const BOLD_CONTRAST_META: ThemeMetadata = ThemeMetadata {
    name: "Bold Contrast",
    description: "High-contrast theme with vibrant accents. \
                  Perfect for musicians, artists, and bold personalities.",
    preview: PreviewColors {
        primary: "#FF3366",
        secondary: "#00FF88",
        background: "#000000",
    },
};

// ============================================================================
// registry
// ============================================================================

/// A registered bundle and its derived CSS variables.
struct Entry {
    tokens: ThemeTokens,
    vars: CssVars,
}

impl Entry {
    fn new(tokens: ThemeTokens) -> Self {
        let vars = CssVars::from_tokens(&tokens);
        Self { tokens, vars }
    }
}

static LUXURY_DARK: LazyLock<Entry> = LazyLock::new(|| Entry::new(presets::luxury_dark()));
static CLEAN_LIGHT: LazyLock<Entry> = LazyLock::new(|| Entry::new(presets::clean_light()));
static BOLD_CONTRAST: LazyLock<Entry> =
    LazyLock::new(|| Entry::new(presets::bold_contrast()));

fn entry(variant: ThemeVariant) -> Option<&'static Entry> {
    match variant {
        ThemeVariant::LuxuryDark => Some(&*LUXURY_DARK),
        ThemeVariant::CleanLight => Some(&*CLEAN_LIGHT),
        ThemeVariant::BoldContrast => Some(&*BOLD_CONTRAST),
        ThemeVariant::Custom => None,
    }
}

/// Token bundle registered for `variant`.
///
/// # Errors
///
/// [`ThemeError::CustomTokens`] for [`ThemeVariant::Custom`].
pub fn get_theme(variant: ThemeVariant) -> Result<&'static ThemeTokens, ThemeError> {
    entry(variant)
        .map(|entry| &entry.tokens)
        .ok_or(ThemeError::CustomTokens)
}

/// CSS custom properties registered for `variant`.
///
/// # Errors
///
/// [`ThemeError::CustomVars`] for [`ThemeVariant::Custom`].
pub fn get_theme_css_vars(variant: ThemeVariant) -> Result<&'static CssVars, ThemeError> {
    entry(variant)
        .map(|entry| &entry.vars)
        .ok_or(ThemeError::CustomVars)
}

/// Set every CSS custom property of `variant` on `surface`.
///
/// Nothing is written when the lookup fails.
pub fn apply_theme(
    surface: &mut impl StyleSurface,
    variant: ThemeVariant,
) -> Result<(), ThemeError> {
    get_theme_css_vars(variant)?.apply_to(surface);
    Ok(())
}

/// Render `variant`'s properties as one CSS rule on `selector`
/// (default [`DEFAULT_SELECTOR`]).
pub fn generate_theme_css(
    variant: ThemeVariant,
    selector: Option<&str>,
) -> Result<String, ThemeError> {
    let vars = get_theme_css_vars(variant)?;
    Ok(vars.to_css(selector.unwrap_or(DEFAULT_SELECTOR)))
}

/// Build a new bundle from the `base` preset with `overrides` merged on top.
///
/// The registry is left untouched. See [`ThemeOverrides`] for merge depth.
pub fn create_custom_theme(
    base: ThemeVariant,
    overrides: &ThemeOverrides,
) -> Result<ThemeTokens, ThemeError> {
    let mut tokens = get_theme(base)?.clone();
    overrides.apply_to(&mut tokens);
    Ok(tokens)
}
