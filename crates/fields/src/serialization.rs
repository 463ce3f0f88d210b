//! Saving and loading field sets
//!
//! Field sets are exchanged as JSON wrapped with a schema version, so the
//! consuming side can tell which layout of the definition records it gets.

use crate::{BaseFieldSet, SCHEMA_VERSION};
use entity_builder_core::{BuilderError, BuilderResult, Validatable};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ============================================================================
// Field Set File Wrapper
// ============================================================================

/// Wrapper for exported field sets that includes version information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSetFile {
    /// Layout version of the definition records
    pub schema_version: u32,

    /// Entity type the fields belong to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// The field definitions
    pub fields: BaseFieldSet,
}

impl FieldSetFile {
    /// Wrap a field set with the current schema version
    pub fn new(fields: BaseFieldSet) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            entity: None,
            fields,
        }
    }

    /// Set the entity type
    pub fn with_entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Fail if the file was written by a newer layout than this build reads
    pub fn check_version(&self) -> BuilderResult<()> {
        if self.schema_version > SCHEMA_VERSION {
            return Err(BuilderError::SchemaVersionMismatch {
                expected: SCHEMA_VERSION,
                found: self.schema_version,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Save Functions
// ============================================================================

/// Save a field set to a file, creating parent directories as needed
pub fn save_field_set(file: &FieldSetFile, path: impl AsRef<Path>) -> BuilderResult<()> {
    let path = path.as_ref();

    let json = serde_json::to_string_pretty(file).map_err(|e| BuilderError::FileWrite {
        path: path.to_path_buf(),
        message: format!("Failed to serialize field set: {}", e),
    })?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|e| BuilderError::DirectoryCreate {
                path: parent.to_path_buf(),
                message: e.to_string(),
            })?;
        }
    }

    std::fs::write(path, json).map_err(|e| BuilderError::FileWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    tracing::info!(
        path = %path.display(),
        fields = file.fields.len(),
        "saved field set"
    );
    Ok(())
}

/// Save a field set to a pretty-printed JSON string
pub fn save_field_set_to_string(file: &FieldSetFile) -> BuilderResult<String> {
    Ok(serde_json::to_string_pretty(file)?)
}

/// Save a field set to a compact JSON string (no pretty printing)
pub fn save_field_set_to_compact_string(file: &FieldSetFile) -> BuilderResult<String> {
    Ok(serde_json::to_string(file)?)
}

// ============================================================================
// Load Functions
// ============================================================================

/// Load a field set from a file
pub fn load_field_set(path: impl AsRef<Path>) -> BuilderResult<FieldSetFile> {
    let path = path.as_ref();

    let json = std::fs::read_to_string(path).map_err(|e| BuilderError::FileRead {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let file = load_field_set_from_str(&json).map_err(|e| match e {
        BuilderError::Json(je) => BuilderError::FileRead {
            path: path.to_path_buf(),
            message: format!("Invalid field set format: {}", je),
        },
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        fields = file.fields.len(),
        "loaded field set"
    );
    Ok(file)
}

/// Load a field set from a JSON string
///
/// Accepts the versioned wrapper, or a bare object of definitions keyed by
/// machine name.
pub fn load_field_set_from_str(json: &str) -> BuilderResult<FieldSetFile> {
    let file = match serde_json::from_str::<FieldSetFile>(json) {
        Ok(file) => {
            file.check_version()?;
            file
        }
        Err(wrapper_err) => {
            let fields: BaseFieldSet =
                serde_json::from_str(json).map_err(|_| BuilderError::Json(wrapper_err))?;
            tracing::warn!("field set has no version wrapper, assuming current schema");
            FieldSetFile::new(fields)
        }
    };

    file.fields.validate()?;
    Ok(file)
}

// ============================================================================
// Tests
// ============================================================================
