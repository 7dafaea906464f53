//! Partial token bundles merged onto a preset.
//!
//! Merge depth per group:
//!
//! | Group                                | Merge                                  |
//! |--------------------------------------|----------------------------------------|
//! | `colors` scalars and subgroups       | key by key                             |
//! | `typography.fontFamily`              | key by key                             |
//! | other `typography` groups            | replaced whole                         |
//! | `spacing`, `animation` groups        | replaced whole (`base` is a scalar)    |
//! | `shadows`, `borderRadius`            | key by key                             |

use super::tokens::*;
use serde::{Deserialize, Serialize};

/// Overwrite `target` when an override is present.
fn update_option<T: Clone>(target: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        *target = value.clone();
    }
}

/// Declare an override struct whose fields mirror `$target` one level deep.
macro_rules! key_overrides {
    (
        $(#[$meta:meta])*
        $name:ident => $target:ty {
            $($(#[$fmeta:meta])* $field:ident: $ty:ty),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
        #[serde(default, rename_all = "camelCase", deny_unknown_fields)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )+
        }

        impl $name {
            fn apply(&self, target: &mut $target) {
                $(update_option(&mut target.$field, self.$field.as_ref());)+
            }
        }
    };
}

key_overrides! {
    BackgroundOverrides => BackgroundTokens {
        primary: String,
        secondary: String,
        tertiary: String,
        elevated: String,
        overlay: String,
    }
}

key_overrides! {
    TextOverrides => TextTokens {
        primary: String,
        secondary: String,
        muted: String,
        inverse: String,
        accent: String,
    }
}

key_overrides! {
    BorderOverrides => BorderTokens {
        default: String,
        subtle: String,
        strong: String,
        focus: String,
    }
}

key_overrides! {
    SemanticOverrides => SemanticTokens {
        success: String,
        warning: String,
        error: String,
        info: String,
    }
}

key_overrides! {
    GradientOverrides => GradientTokens {
        primary: String,
        secondary: String,
        hero: String,
        cta: String,
    }
}

key_overrides! {
    FontFamilyOverrides => FontFamilyTokens {
        heading: String,
        body: String,
        accent: String,
        mono: String,
    }
}

key_overrides! {
    SpacingOverrides => SpacingTokens {
        base: f64,
        scale: TokenMap,
        section: TokenMap,
        container: TokenMap,
    }
}

key_overrides! {
    AnimationOverrides => AnimationTokens {
        duration: TokenMap,
        easing: TokenMap,
        transition: TokenMap,
    }
}

key_overrides! {
    ShadowOverrides => ShadowTokens {
        sm: String,
        md: String,
        lg: String,
        xl: String,
        glow: String,
        inner: String,
    }
}

key_overrides! {
    BorderRadiusOverrides => BorderRadiusTokens {
        none: String,
        sm: String,
        md: String,
        lg: String,
        xl: String,
        #[serde(rename = "2xl")]
        xl2: String,
        full: String,
    }
}

// ============================================================================
// nested groups
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<BackgroundOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border: Option<BorderOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub semantic: Option<SemanticOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradients: Option<GradientOverrides>,
}

impl ColorOverrides {
    fn apply(&self, colors: &mut ColorTokens) {
        update_option(&mut colors.primary, self.primary.as_ref());
        update_option(&mut colors.secondary, self.secondary.as_ref());
        update_option(&mut colors.accent, self.accent.as_ref());

        if let Some(group) = &self.background {
            group.apply(&mut colors.background);
        }
        if let Some(group) = &self.text {
            group.apply(&mut colors.text);
        }
        if let Some(group) = &self.border {
            group.apply(&mut colors.border);
        }
        if let Some(group) = &self.semantic {
            group.apply(&mut colors.semantic);
        }
        if let Some(group) = &self.gradients {
            group.apply(&mut colors.gradients);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct TypographyOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<FontFamilyOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<TokenMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<TokenMap<u16>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_height: Option<TokenMap<Scalar>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<TokenMap>,
}

impl TypographyOverrides {
    fn apply(&self, typography: &mut TypographyTokens) {
        if let Some(group) = &self.font_family {
            group.apply(&mut typography.font_family);
        }
        update_option(&mut typography.font_size, self.font_size.as_ref());
        update_option(&mut typography.font_weight, self.font_weight.as_ref());
        update_option(&mut typography.line_height, self.line_height.as_ref());
        update_option(&mut typography.letter_spacing, self.letter_spacing.as_ref());
    }
}

// ============================================================================
// root
// ============================================================================

/// Partial [`ThemeTokens`]; absent keys keep the base theme's value.
/// Keys that do not name a token group or token are rejected.
///
/// Deserializes from the same camelCase shape as the tokens:
///
/// ```json
/// { "colors": { "primary": "#FFFFFF", "background": { "primary": "#101010" } } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct ThemeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<ColorOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<SpacingOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadows: Option<ShadowOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<BorderRadiusOverrides>,
}

impl ThemeOverrides {
    /// Merge onto `tokens` in place.
    pub fn apply_to(&self, tokens: &mut ThemeTokens) {
        if let Some(colors) = &self.colors {
            colors.apply(&mut tokens.colors);
        }
        if let Some(typography) = &self.typography {
            typography.apply(&mut tokens.typography);
        }
        if let Some(spacing) = &self.spacing {
            spacing.apply(&mut tokens.spacing);
        }
        if let Some(animation) = &self.animation {
            animation.apply(&mut tokens.animation);
        }
        if let Some(shadows) = &self.shadows {
            shadows.apply(&mut tokens.shadows);
        }
        if let Some(radius) = &self.border_radius {
            radius.apply(&mut tokens.border_radius);
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
