//! Core traits for Entity Builder
//!
//! This module defines the traits shared by the collections and manifests
//! built on top of the field factories.

use crate::error::BuilderResult;

// ============================================================================
// Validatable Trait
// ============================================================================

/// Trait for types that can be validated
///
/// Field definitions are never validated here; that is left to the
/// framework consuming them. Validation applies to the structures that
/// group definitions, such as field sets and manifests.
///
/// # Example
///
/// ```rust,ignore
/// use entity_builder_core::{Validatable, BuilderResult, BuilderError};
///
/// struct Bundle {
///     name: String,
/// }
///
/// impl Validatable for Bundle {
///     fn validate(&self) -> BuilderResult<()> {
///         if self.name.is_empty() {
///             return Err(BuilderError::validation("Bundle name cannot be empty"));
///         }
///         Ok(())
///     }
/// }
/// ```
pub trait Validatable {
    /// Validate the current state of the object
    ///
    /// Returns `Ok(())` if valid, or a `BuilderError` describing the problem.
    fn validate(&self) -> BuilderResult<()>;

    /// Check if the object is valid without returning error details
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Get all validation errors (for types that can have multiple errors)
    fn validation_errors(&self) -> Vec<String> {
        match self.validate() {
            Ok(()) => vec![],
            Err(e) => vec![e.to_string()],
        }
    }
}

// ============================================================================
// Named Trait
// ============================================================================

/// Types registered under a machine name
pub trait Named {
    /// Get the machine name
    fn name(&self) -> &str;

    /// Check if the name matches (case-sensitive, machine names are lowercase)
    fn name_matches(&self, other: &str) -> bool {
        self.name() == other
    }
}

// ============================================================================
// Machine names
// ============================================================================

/// Longest machine name the entity framework accepts for a field
pub const MAX_MACHINE_NAME_LENGTH: usize = 32;

/// Check a field machine name, returning the reason it is unusable
pub fn check_machine_name(name: &str) -> Result<(), String> {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return Err("name cannot be empty".to_string());
    };

    if name.len() > MAX_MACHINE_NAME_LENGTH {
        return Err(format!(
            "name is longer than {} characters",
            MAX_MACHINE_NAME_LENGTH
        ));
    }

    if !(first.is_ascii_lowercase() || first == '_') {
        return Err("name must start with a lowercase letter or underscore".to_string());
    }

    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Err(
            "name may only contain lowercase letters, digits and underscores".to_string(),
        );
    }

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
