//! # Entity Builder Core
//!
//! Core types, traits, and error handling for Entity Builder.
//!
//! This crate provides the foundational building blocks used by the field
//! definition factories and the tooling around them, including:
//!
//! - **Types**: Storage types, cardinality, label placement, link types and setting values
//! - **Traits**: `Validatable` and `Named`, plus machine name checks
//! - **Errors**: Unified error handling with `BuilderError` and `BuilderResult`
//!

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use error::{BuilderError, BuilderResult, ResultExt};
pub use traits::{MAX_MACHINE_NAME_LENGTH, Named, Validatable, check_machine_name};
pub use types::{
    CARDINALITY_UNLIMITED, Cardinality, LabelDisplay, LinkType, SettingValue, Settings,
    StorageType, settings,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
