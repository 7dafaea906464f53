//! Configuration error types.

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// ConfigError
// ============================================================================

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config file parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("Config JSON error")]
    Json(#[from] serde_json::Error),

    #[error("unsupported config format `{0}`, expected .toml or .json")]
    UnsupportedFormat(PathBuf),

    // NOTE: No #[from] here - we don't want source() which causes duplicate output
    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

impl ConfigError {
    /// Validation diagnostics, if this error came from the validator.
    pub fn diagnostics(&self) -> Option<&ConfigDiagnostics> {
        match self {
            Self::Diagnostics(diag) => Some(diag),
            _ => None,
        }
    }
}

// ============================================================================
// ConfigDiagnostic
// ============================================================================

/// A single configuration diagnostic
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigDiagnostic {
    /// Config field path (e.g., "hero.background.overlayOpacity")
    pub field: FieldPath,
    /// Error description
    pub message: String,
    /// Fix hint (optional)
    pub hint: Option<String>,
}

impl ConfigDiagnostic {
    pub fn new(field: FieldPath, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Field path in cyan brackets
        writeln!(
            f,
            "{}{}{}",
            "[".dimmed(),
            self.field.as_str().cyan(),
            "]".dimmed()
        )?;
        // Error message with red bullet
        write!(f, "{} {}", "→".red(), self.message)?;
        // Hint in yellow
        if let Some(hint) = &self.hint {
            write!(f, "\n  {} {}", "hint:".yellow(), hint)?;
        }
        Ok(())
    }
}

// ============================================================================
// ConfigDiagnostics
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
    /// Collected warnings (unknown fields).
    warnings: Vec<(FieldPath, String)>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.errors.push(ConfigDiagnostic::new(field, message));
    }

    /// Add an error with a hint.
    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.errors
            .push(ConfigDiagnostic::new(field, message).with_hint(hint));
    }

    /// Add a warning (collected for batch display).
    pub fn warn(&mut self, field: FieldPath, message: impl Into<String>) {
        self.warnings.push((field, message.into()));
    }

    /// Print collected warnings in a grouped format.
    pub fn print_warnings(&self) {
        if self.warnings.is_empty() {
            return;
        }

        crate::log!("warning"; "unknown fields, ignoring:");
        for (field, _) in &self.warnings {
            eprintln!("- {}", field.as_str());
        }
    }

    /// Log one line per error: `field: message`.
    pub fn log_errors(&self) {
        crate::log!("error"; "configuration validation failed:");
        for err in &self.errors {
            crate::log!("error"; "  - {}: {}", err.field.as_str(), err.message);
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ConfigDiagnostic] {
        &self.errors
    }

    pub fn warnings(&self) -> &[(FieldPath, String)] {
        &self.warnings
    }

    /// Errors reported at `path` or anywhere beneath it.
    pub fn errors_at<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a ConfigDiagnostic> {
        self.errors.iter().filter(move |e| e.field.starts_with(path))
    }

    /// Move all errors and warnings from `other` into `self`.
    pub fn extend(&mut self, other: ConfigDiagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// Convert to Result (returns Err if there are errors).
    pub fn into_result(self) -> Result<(), Self> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}\n", "config validation failed:".red().bold())?;
        for (i, err) in self.errors.iter().enumerate() {
            write!(f, "{err}")?;
            if i + 1 < self.errors.len() {
                writeln!(f, "\n")?;
            }
        }
        if self.errors.len() > 1 {
            write!(
                f,
                "\n\n{} {} {}",
                "found".dimmed(),
                self.errors.len().to_string().red().bold(),
                "errors".dimmed()
            )?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_config_error_display() {
        let io_err = ConfigError::Io(
            PathBuf::from("site.toml"),
            Error::new(ErrorKind::NotFound, "file not found"),
        );
        let display = format!("{io_err}");
        assert!(display.contains("IO error"));
        assert!(display.contains("site.toml"));

        let format_err = ConfigError::UnsupportedFormat(PathBuf::from("site.yaml"));
        assert!(format!("{format_err}").contains("site.yaml"));
    }

    #[test]
    fn test_diagnostics_into_result() {
        let mut diag = ConfigDiagnostics::new();
        diag.warn(FieldPath::new("hero.extra"), "unknown field");
        assert!(diag.clone().into_result().is_ok());

        diag.error(FieldPath::new("meta.siteName"), "Required");
        let err = diag.into_result().unwrap_err();
        assert_eq!(err.len(), 1);
        assert_eq!(err.warnings().len(), 1);
        assert_eq!(err.errors()[0].field.as_str(), "meta.siteName");
    }

    #[test]
    fn test_errors_at_filters_by_prefix() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("stats.items"), "too many");
        diag.error(FieldPath::new("stats.items.0.label"), "empty");
        diag.error(FieldPath::new("hero.subheadline"), "Required");
        assert_eq!(diag.errors_at("stats.items").count(), 2);
        assert_eq!(diag.errors_at("hero").count(), 1);
    }

    #[test]
    fn test_diagnostics_display_counts_errors() {
        let mut diag = ConfigDiagnostics::new();
        diag.error_with_hint(FieldPath::new("hero.ctas"), "bad", "fix it");
        diag.error(FieldPath::new("meta.tagline"), "worse");
        let shown = diag.to_string();
        assert!(shown.contains("hero.ctas"));
        assert!(shown.contains("fix it"));
        assert!(shown.contains("worse"));
        assert!(shown.contains("errors"));
    }
}
