//! Command-line interface module.

mod args;
pub mod common;
pub mod css;
pub mod init;
pub mod themes;
pub mod validate;

pub use args::{Cli, Commands, CssArgs};
