//! # Entity Builder CLI
//!
//! Command-line interface for Entity Builder.
//!
//! ## Commands
//!
//! - `build` - Build JSON field definitions from a TOML manifest
//! - `validate` - Validate a manifest
//! - `kinds` - List the supported field kinds
//!

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands, OutputFormat};
pub use commands::execute;

/// CLI version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI name
pub const NAME: &str = env!("CARGO_PKG_NAME");
