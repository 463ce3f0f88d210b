//! Error types for Entity Builder
//!
//! The field factories themselves never fail. Errors only arise in the
//! layers built on top of them: assembling field sets, reading manifests,
//! and moving definitions in and out of files.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Entity Builder
#[derive(Debug, Error)]
pub enum BuilderError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Machine name is not usable as a field name
    #[error("Invalid machine name '{name}': {message}")]
    InvalidMachineName { name: String, message: String },

    // ========================================================================
    // Field Set Errors
    // ========================================================================
    /// Duplicate machine name within a field set
    #[error("Duplicate field name: '{0}' already exists")]
    DuplicateField(String),

    /// Field not found in a field set
    #[error("Field not found: {0}")]
    FieldNotFound(String),

    // ========================================================================
    // Manifest Errors
    // ========================================================================
    /// Manifest is structurally valid TOML but describes an unusable field set
    #[error("Invalid manifest entry #{index}: {message}")]
    InvalidManifest { index: usize, message: String },

    // ========================================================================
    // IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// File read error
    #[error("Failed to read file '{path}': {message}")]
    FileRead { path: PathBuf, message: String },

    /// File write error
    #[error("Failed to write file '{path}': {message}")]
    FileWrite { path: PathBuf, message: String },

    /// Directory creation failed
    #[error("Failed to create directory '{path}': {message}")]
    DirectoryCreate { path: PathBuf, message: String },

    // ========================================================================
    // Serialization Errors
    // ========================================================================
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Schema version mismatch
    #[error("Schema version mismatch: expected {expected}, found {found}")]
    SchemaVersionMismatch { expected: u32, found: u32 },

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Generic error with context
    #[error("{context}: {message}")]
    WithContext { context: String, message: String },
}

impl BuilderError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        BuilderError::Validation(msg.into())
    }

    /// Create an invalid machine name error
    pub fn invalid_machine_name(name: impl Into<String>, msg: impl Into<String>) -> Self {
        BuilderError::InvalidMachineName {
            name: name.into(),
            message: msg.into(),
        }
    }

    /// Create a manifest error for the entry at `index` (zero based)
    pub fn manifest(index: usize, msg: impl Into<String>) -> Self {
        BuilderError::InvalidManifest {
            index,
            message: msg.into(),
        }
    }

    /// Create an error with context
    pub fn with_context(context: impl Into<String>, msg: impl Into<String>) -> Self {
        BuilderError::WithContext {
            context: context.into(),
            message: msg.into(),
        }
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            BuilderError::Validation(_)
                | BuilderError::InvalidMachineName { .. }
                | BuilderError::DuplicateField(_)
                | BuilderError::InvalidManifest { .. }
        )
    }

    /// Check if this error is an IO error
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            BuilderError::Io(_)
                | BuilderError::FileRead { .. }
                | BuilderError::FileWrite { .. }
                | BuilderError::DirectoryCreate { .. }
        )
    }
}

/// Result type alias using BuilderError
pub type BuilderResult<T> = Result<T, BuilderError>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn with_context<C: Into<String>>(self, context: C) -> BuilderResult<T>;
}

impl<T, E: Into<BuilderError>> ResultExt<T> for Result<T, E> {
    fn with_context<C: Into<String>>(self, context: C) -> BuilderResult<T> {
        self.map_err(|e| {
            let err: BuilderError = e.into();
            BuilderError::WithContext {
                context: context.into(),
                message: err.to_string(),
            }
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = BuilderError::validation("Label is required");
        assert!(err.is_validation());
        assert!(!err.is_io());
        assert_eq!(err.to_string(), "Validation error: Label is required");
    }

    #[test]
    fn test_invalid_machine_name_error() {
        let err = BuilderError::invalid_machine_name("Body Text", "contains spaces");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid machine name 'Body Text': contains spaces"
        );
    }

    #[test]
    fn test_duplicate_field_error() {
        let err = BuilderError::DuplicateField("title".to_string());
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Duplicate field name: 'title' already exists");
    }

    #[test]
    fn test_manifest_error() {
        let err = BuilderError::manifest(2, "label cannot be empty");
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Invalid manifest entry #2: label cannot be empty"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = BuilderError::with_context("Saving field set", "Permission denied");
        assert_eq!(err.to_string(), "Saving field set: Permission denied");
    }

    #[test]
    fn test_result_ext_wraps_message() {
        let result: Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "denied",
        ));
        let err = result.with_context("Writing output").unwrap_err();
        assert_eq!(err.to_string(), "Writing output: IO error: denied");
    }

    #[test]
    fn test_io_error_classification() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BuilderError = io_err.into();
        assert!(err.is_io());
        assert!(!err.is_validation());
    }
}
