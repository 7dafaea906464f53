//! Configuration utility types.
//!
//! | Module    | Purpose                                      |
//! |-----------|----------------------------------------------|
//! | `color`   | Brand color values (hex / rgba / opaque)     |
//! | `error`   | Configuration error types                    |
//! | `field`   | Field paths used in diagnostics              |
//! | `literal` | Closed string literal sets                   |

mod color;
mod error;
mod field;
mod literal;

pub use color::Color;
pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub(crate) use literal::literal_enum;
pub use literal::UnknownLiteral;
