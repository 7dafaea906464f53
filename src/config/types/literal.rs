//! Closed string literal sets (variant names, providers, formats).

use thiserror::Error;

/// A string that is not a member of a literal set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} `{value}`, expected one of: {}", .expected.join(", "))]
pub struct UnknownLiteral {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static [&'static str],
}

/// Define an enum whose variants serialize as fixed string literals.
///
/// Generates `NAMES` (for schema checks), `ALL`, `as_str`, `parse`,
/// `Display` and `FromStr`.
///
/// ```ignore
/// literal_enum! {
///     /// Email provider.
///     #[derive(Default)]
///     pub enum EmailProvider("email provider") {
///         #[default]
///         ConvertKit => "convertkit",
///         Mailchimp => "mailchimp",
///     }
/// }
/// ```
macro_rules! literal_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident($kind:literal) {
            $($(#[$vmeta:meta])* $variant:ident => $lit:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $lit)]
                $variant,
            )+
        }

        impl $name {
            /// Literal names, in declaration order.
            pub const NAMES: &'static [&'static str] = &[$($lit),+];

            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $lit,)+
                }
            }

            pub fn parse(value: &str) -> Option<Self> {
                match value {
                    $($lit => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::config::types::UnknownLiteral;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::parse(value).ok_or_else(|| $crate::config::types::UnknownLiteral {
                    kind: $kind,
                    value: value.to_string(),
                    expected: Self::NAMES,
                })
            }
        }
    };
}

pub(crate) use literal_enum;

#[cfg(test)]
mod tests {
    literal_enum! {
        #[derive(Default)]
        enum Flavor("flavor") {
            #[default]
            Plain => "plain",
            SplitReveal => "split-reveal",
        }
    }

    #[test]
    fn test_literal_round_trip() {
        assert_eq!(Flavor::NAMES, &["plain", "split-reveal"]);
        assert_eq!(Flavor::parse("split-reveal"), Some(Flavor::SplitReveal));
        assert_eq!(Flavor::SplitReveal.to_string(), "split-reveal");
        assert_eq!(Flavor::default(), Flavor::Plain);

        let json = serde_json::to_string(&Flavor::SplitReveal).unwrap();
        assert_eq!(json, "\"split-reveal\"");
    }

    #[test]
    fn test_unknown_literal_message() {
        let err = "spicy".parse::<Flavor>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown flavor `spicy`, expected one of: plain, split-reveal"
        );
    }
}
