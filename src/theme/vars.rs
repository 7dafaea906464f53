//! CSS custom properties derived from a token bundle.

use super::tokens::ThemeTokens;
use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

/// Property names, in emission order.
pub const CSS_VAR_NAMES: [&str; 31] = [
    "--color-primary",
    "--color-secondary",
    "--color-accent",
    "--color-bg-primary",
    "--color-bg-secondary",
    "--color-bg-tertiary",
    "--color-bg-elevated",
    "--color-bg-overlay",
    "--color-text-primary",
    "--color-text-secondary",
    "--color-text-muted",
    "--color-text-inverse",
    "--color-text-accent",
    "--color-border-default",
    "--color-border-subtle",
    "--color-border-strong",
    "--color-border-focus",
    "--color-success",
    "--color-warning",
    "--color-error",
    "--color-info",
    "--gradient-primary",
    "--gradient-secondary",
    "--gradient-hero",
    "--gradient-cta",
    "--shadow-sm",
    "--shadow-md",
    "--shadow-lg",
    "--shadow-xl",
    "--shadow-glow",
    "--shadow-inner",
];

/// Ordered `--name: value` pairs for one theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CssVars(Vec<(&'static str, String)>);

impl CssVars {
    /// Project the color, gradient and shadow tokens onto [`CSS_VAR_NAMES`].
    pub fn from_tokens(tokens: &ThemeTokens) -> Self {
        let c = &tokens.colors;
        let s = &tokens.shadows;
        let values = [
            &c.primary,
            &c.secondary,
            &c.accent,
            &c.background.primary,
            &c.background.secondary,
            &c.background.tertiary,
            &c.background.elevated,
            &c.background.overlay,
            &c.text.primary,
            &c.text.secondary,
            &c.text.muted,
            &c.text.inverse,
            &c.text.accent,
            &c.border.default,
            &c.border.subtle,
            &c.border.strong,
            &c.border.focus,
            &c.semantic.success,
            &c.semantic.warning,
            &c.semantic.error,
            &c.semantic.info,
            &c.gradients.primary,
            &c.gradients.secondary,
            &c.gradients.hero,
            &c.gradients.cta,
            &s.sm,
            &s.md,
            &s.lg,
            &s.xl,
            &s.glow,
            &s.inner,
        ];

        Self(
            CSS_VAR_NAMES
                .into_iter()
                .zip(values.map(String::clone))
                .collect(),
        )
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render as a single rule block:
    ///
    /// ```text
    /// :root {
    ///   --color-primary: #D4AF37;
    ///   ...
    /// }
    /// ```
    pub fn to_css(&self, selector: &str) -> String {
        let declarations: Vec<String> = self
            .iter()
            .map(|(key, value)| format!("  {key}: {value};"))
            .collect();
        format!("{selector} {{\n{}\n}}", declarations.join("\n"))
    }

    /// Set every property on `surface`, in order.
    pub fn apply_to(&self, surface: &mut impl StyleSurface) {
        for (key, value) in self.iter() {
            surface.set_property(key, value);
        }
    }
}

impl Index<&str> for CssVars {
    type Output = str;

    /// Panics if `name` is not one of [`CSS_VAR_NAMES`].
    fn index(&self, name: &str) -> &str {
        match self.get(name) {
            Some(value) => value,
            None => panic!("unknown CSS variable `{name}`"),
        }
    }
}

// ============================================================================
// style surfaces
// ============================================================================

/// Anything that holds inline custom properties (an element's style,
/// a property map).
pub trait StyleSurface {
    fn set_property(&mut self, name: &str, value: &str);
}

impl StyleSurface for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}

impl StyleSurface for HashMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.to_string(), value.to_string());
    }
}
