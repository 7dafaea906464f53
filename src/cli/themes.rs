//! Theme and layout listing command.

use owo_colors::OwoColorize;
use std::fmt::Write;

use crate::layout::LayoutComponent;
use crate::theme::ThemeVariant;

/// Print registered theme presets and every layout variant.
pub fn list_themes() {
    print!("{}", render_listing());
}

fn render_listing() -> String {
    let mut out = String::new();

    writeln!(out, "{}", "themes".bold()).ok();
    for variant in ThemeVariant::PRESETS {
        let Some(meta) = variant.metadata() else {
            continue;
        };
        writeln!(
            out,
            "  {:<14} {}  {}",
            variant.as_str().cyan(),
            meta.name,
            format!(
                "{} / {} / {}",
                meta.preview.primary, meta.preview.secondary, meta.preview.background
            )
            .dimmed()
        )
        .ok();
        writeln!(out, "  {:<14} {}", "", meta.description.dimmed()).ok();
    }

    writeln!(out, "\n{}", "layouts".bold()).ok();
    for component in LayoutComponent::ALL {
        let meta = component.metadata();
        writeln!(
            out,
            "  {:<22} {}  {}",
            component.to_string().cyan(),
            meta.name,
            meta.best_for.join(", ").dimmed()
        )
        .ok();
    }

    out
}
