//! Built-in token bundles.

use super::tokens::*;

const BODY_STACK: &str = r#""Inter", "Helvetica Neue", sans-serif"#;
const ACCENT_STACK: &str = r#""Space Grotesk", "Helvetica Neue", sans-serif"#;

/// Base typography with concrete heading/body/accent stacks.
fn typography(heading: &str) -> TypographyTokens {
    let mut typography = base_typography();
    typography.font_family.heading = heading.into();
    typography.font_family.body = BODY_STACK.into();
    typography.font_family.accent = ACCENT_STACK.into();
    typography
}

/// Two-layer glow in `color`. Non-hex input is used as is.
fn glow(color: &str, (inner, inner_alpha): (u32, f64), (outer, outer_alpha): (u32, f64)) -> String {
    let rgba = |alpha| hex_to_rgba(color, alpha).unwrap_or_else(|| color.to_string());
    format!(
        "0 0 {inner}px {}, 0 0 {outer}px {}",
        rgba(inner_alpha),
        rgba(outer_alpha)
    )
}

fn shadows(rgb: &str, alphas: [f64; 4], glow: String, inner: &str) -> ShadowTokens {
    let [sm, md, lg, xl] = alphas;
    ShadowTokens {
        sm: format!("0 1px 2px rgba({rgb}, {sm})"),
        md: format!("0 4px 6px rgba({rgb}, {md})"),
        lg: format!("0 10px 15px rgba({rgb}, {lg})"),
        xl: format!("0 20px 25px rgba({rgb}, {xl})"),
        glow,
        inner: inner.into(),
    }
}

/// Premium dark theme with gold accents.
pub fn luxury_dark() -> ThemeTokens {
    ThemeTokens {
        colors: ColorTokens {
            primary: "#D4AF37".into(),
            secondary: "#00D4FF".into(),
            accent: "#FF4444".into(),
            background: BackgroundTokens {
                primary: "#0A0A0A".into(),
                secondary: "#1A1A1A".into(),
                tertiary: "#2A2A2A".into(),
                elevated: "#333333".into(),
                overlay: "rgba(0, 0, 0, 0.8)".into(),
            },
            text: TextTokens {
                primary: "#F5F5F5".into(),
                secondary: "rgba(245, 245, 245, 0.7)".into(),
                muted: "rgba(245, 245, 245, 0.4)".into(),
                inverse: "#0A0A0A".into(),
                accent: "#D4AF37".into(),
            },
            border: BorderTokens {
                default: "rgba(255, 255, 255, 0.1)".into(),
                subtle: "rgba(255, 255, 255, 0.05)".into(),
                strong: "rgba(255, 255, 255, 0.2)".into(),
                focus: "#D4AF37".into(),
            },
            semantic: SemanticTokens {
                success: "#22C55E".into(),
                warning: "#F59E0B".into(),
                error: "#EF4444".into(),
                info: "#3B82F6".into(),
            },
            gradients: GradientTokens {
                primary: create_gradient(&["#D4AF37", "#B8962E"], "to right"),
                secondary: create_gradient(&["#00D4FF", "#0099CC"], "to right"),
                hero: create_gradient(&["#0A0A0A", "#1A1A1A", "#0A0A0A"], "to bottom right"),
                cta: create_gradient(&["#D4AF37", "#F5D76E", "#D4AF37"], "135deg"),
            },
        },
        typography: typography(BODY_STACK),
        spacing: base_spacing(),
        animation: base_animation(),
        shadows: shadows(
            "0, 0, 0",
            [0.5; 4],
            glow("#D4AF37", (20, 0.3), (40, 0.1)),
            "inset 0 2px 4px rgba(0, 0, 0, 0.5)",
        ),
        border_radius: base_border_radius(),
    }
}

/// Minimalist light theme with subtle accents.
pub fn clean_light() -> ThemeTokens {
    ThemeTokens {
        colors: ColorTokens {
            primary: "#1A1A1A".into(),
            secondary: "#6366F1".into(),
            accent: "#EC4899".into(),
            background: BackgroundTokens {
                primary: "#FFFFFF".into(),
                secondary: "#F8FAFC".into(),
                tertiary: "#F1F5F9".into(),
                elevated: "#FFFFFF".into(),
                overlay: "rgba(0, 0, 0, 0.5)".into(),
            },
            text: TextTokens {
                primary: "#0F172A".into(),
                secondary: "#475569".into(),
                muted: "#94A3B8".into(),
                inverse: "#FFFFFF".into(),
                accent: "#6366F1".into(),
            },
            border: BorderTokens {
                default: "#E2E8F0".into(),
                subtle: "#F1F5F9".into(),
                strong: "#CBD5E1".into(),
                focus: "#6366F1".into(),
            },
            semantic: SemanticTokens {
                success: "#10B981".into(),
                warning: "#F59E0B".into(),
                error: "#EF4444".into(),
                info: "#3B82F6".into(),
            },
            gradients: GradientTokens {
                primary: create_gradient(&["#1A1A1A", "#374151"], "to right"),
                secondary: create_gradient(&["#6366F1", "#8B5CF6"], "to right"),
                hero: create_gradient(&["#F8FAFC", "#FFFFFF", "#F1F5F9"], "to bottom"),
                cta: create_gradient(&["#1A1A1A", "#374151", "#1A1A1A"], "135deg"),
            },
        },
        typography: typography(r#""Plus Jakarta Sans", "Inter", sans-serif"#),
        spacing: base_spacing(),
        animation: base_animation(),
        shadows: shadows(
            "0, 0, 0",
            [0.05, 0.05, 0.1, 0.1],
            glow("#6366F1", (20, 0.2), (40, 0.1)),
            "inset 0 2px 4px rgba(0, 0, 0, 0.05)",
        ),
        border_radius: base_border_radius(),
    }
}

/// High-contrast theme with vibrant accents and tighter radii.
pub fn bold_contrast() -> ThemeTokens {
    ThemeTokens {
        colors: ColorTokens {
            primary: "#FF3366".into(),
            secondary: "#00FF88".into(),
            accent: "#FFD700".into(),
            background: BackgroundTokens {
                primary: "#000000".into(),
                secondary: "#111111".into(),
                tertiary: "#1C1C1C".into(),
                elevated: "#222222".into(),
                overlay: "rgba(0, 0, 0, 0.9)".into(),
            },
            text: TextTokens {
                primary: "#FFFFFF".into(),
                secondary: "rgba(255, 255, 255, 0.8)".into(),
                muted: "rgba(255, 255, 255, 0.5)".into(),
                inverse: "#000000".into(),
                accent: "#FF3366".into(),
            },
            border: BorderTokens {
                default: "rgba(255, 255, 255, 0.15)".into(),
                subtle: "rgba(255, 255, 255, 0.08)".into(),
                strong: "rgba(255, 255, 255, 0.3)".into(),
                focus: "#FF3366".into(),
            },
            semantic: SemanticTokens {
                success: "#00FF88".into(),
                warning: "#FFD700".into(),
                error: "#FF3366".into(),
                info: "#00D4FF".into(),
            },
            gradients: GradientTokens {
                primary: create_gradient(&["#FF3366", "#FF6B6B"], "to right"),
                secondary: create_gradient(&["#00FF88", "#00D4FF"], "to right"),
                hero: create_gradient(&["#000000", "#111111", "#000000"], "135deg"),
                cta: create_gradient(&["#FF3366", "#FF6B6B", "#FF3366"], "135deg"),
            },
        },
        typography: typography(r#""Bebas Neue", "Oswald", sans-serif"#),
        spacing: base_spacing(),
        animation: base_animation(),
        shadows: shadows(
            "255, 51, 102",
            [0.1, 0.15, 0.2, 0.25],
            glow("#FF3366", (30, 0.5), (60, 0.3)),
            "inset 0 2px 4px rgba(0, 0, 0, 0.8)",
        ),
        border_radius: BorderRadiusTokens {
            sm: "0.125rem".into(),
            md: "0.25rem".into(),
            lg: "0.375rem".into(),
            xl: "0.5rem".into(),
            xl2: "0.75rem".into(),
            ..base_border_radius()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luxury_dark_shadows() {
        let shadows = luxury_dark().shadows;
        assert_eq!(shadows.sm, "0 1px 2px rgba(0, 0, 0, 0.5)");
        assert_eq!(shadows.xl, "0 20px 25px rgba(0, 0, 0, 0.5)");
        assert_eq!(
            shadows.glow,
            "0 0 20px rgba(212, 175, 55, 0.3), 0 0 40px rgba(212, 175, 55, 0.1)"
        );
    }

    #[test]
    fn test_bold_contrast_shadows_and_radii() {
        let theme = bold_contrast();
        assert_eq!(theme.shadows.md, "0 4px 6px rgba(255, 51, 102, 0.15)");
        assert_eq!(
            theme.shadows.glow,
            "0 0 30px rgba(255, 51, 102, 0.5), 0 0 60px rgba(255, 51, 102, 0.3)"
        );
        assert_eq!(theme.border_radius.xl2, "0.75rem");
        assert_eq!(theme.border_radius.none, "0");
        assert_eq!(theme.border_radius.full, "9999px");
    }

    #[test]
    fn test_presets_keep_base_mono_stack() {
        for theme in [luxury_dark(), clean_light(), bold_contrast()] {
            assert_eq!(
                theme.typography.font_family.mono,
                base_typography().font_family.mono
            );
            assert_eq!(theme.typography.font_family.body, BODY_STACK);
            assert_eq!(theme.spacing, base_spacing());
        }
    }

    #[test]
    fn test_clean_light_fonts_and_gradients() {
        let theme = clean_light();
        assert_eq!(
            theme.typography.font_family.heading,
            r#""Plus Jakarta Sans", "Inter", sans-serif"#
        );
        assert_eq!(
            theme.colors.gradients.hero,
            "linear-gradient(to bottom, #F8FAFC, #FFFFFF, #F1F5F9)"
        );
    }

    #[test]
    fn test_glow_falls_back_to_raw_color() {
        assert_eq!(
            glow("red", (10, 0.5), (20, 0.2)),
            "0 0 10px red, 0 0 20px red"
        );
    }
}
