//! String formats checked by [`StringRule`](super::StringRule).

/// Well-known string formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Hex, `rgb()`/`rgba()` or any other string. Never rejects.
    Color,
    /// Absolute URL with a scheme.
    Url,
    /// Site-relative path starting with `/`.
    SitePath,
    /// Absolute URL or site-relative path.
    ///
    /// Used for every asset reference (`meta.ogImage`, logos, hero media,
    /// event and about images, sponsor and press logos). Bare relative
    /// names such as `og.jpg` are rejected.
    Link,
}

impl Format {
    /// Returns the violation message if `value` does not match.
    pub fn check(self, value: &str) -> Option<&'static str> {
        match self {
            // Opaque strings are valid colors (see `Color::Opaque`).
            Self::Color => None,
            Self::Url => (!is_absolute_url(value)).then_some("Invalid url"),
            Self::SitePath => {
                (!value.starts_with('/')).then_some("Invalid input: must start with \"/\"")
            }
            Self::Link => (!is_absolute_url(value) && !value.starts_with('/')).then_some(
                "Invalid input: expected an absolute URL or a path starting with \"/\"",
            ),
        }
    }
}

fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_accepts_anything() {
        assert_eq!(Format::Color.check("#FFF"), None);
        assert_eq!(Format::Color.check("var(--color-primary)"), None);
        assert_eq!(Format::Color.check("not a color"), None);
    }

    #[test]
    fn test_url() {
        assert_eq!(Format::Url.check("https://mh5.com"), None);
        assert_eq!(Format::Url.check("/relative"), Some("Invalid url"));
        assert_eq!(Format::Url.check("mh5.com"), Some("Invalid url"));
    }

    #[test]
    fn test_site_path() {
        assert_eq!(Format::SitePath.check("/events"), None);
        assert!(Format::SitePath.check("events").is_some());
        assert!(Format::SitePath.check("https://mh5.com/events").is_some());
    }

    #[test]
    fn test_link_accepts_both_forms() {
        assert_eq!(Format::Link.check("/images/logo.svg"), None);
        assert_eq!(Format::Link.check("https://cdn.example.com/logo.svg"), None);
        assert!(Format::Link.check("images/logo.svg").is_some());
        assert!(Format::Link.check("").is_some());
    }
}
