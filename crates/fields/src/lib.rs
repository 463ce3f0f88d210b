//! # Entity Builder Fields
//!
//! Field definition records for content entities, and the factories that
//! build them.
//!
//! ## Core Concepts
//!
//! - **FieldDefinition**: Storage type, label, flags, settings and suggested displays of one field
//! - **Factories**: One function per field kind in [`helper`], each applying a fixed policy
//! - **BaseFieldSet**: Definitions keyed by machine name, as an entity type declares them
//! - **FieldManifest**: TOML description of a field set
//!
//! ```rust,ignore
//! use entity_builder_fields::prelude::*;
//!
//! let title = create_field_textfield("Title", true, true);
//! let related = create_field_node_reference("Related", "node", "article", false);
//! ```

// Module declarations
pub mod field;
pub mod field_set;
pub mod helper;
pub mod kind;
pub mod manifest;
pub mod serialization;

// Re-export commonly used types at crate root
pub use field::{
    DisplayConfigurable, Displays, FieldDefinition, FormDisplay, Formatter, ViewDisplay, Widget,
};
pub use field_set::BaseFieldSet;
pub use helper::{
    create_field_boolean, create_field_datetime, create_field_email,
    create_field_entity_reference, create_field_formatted_textarea, create_field_image,
    create_field_integer, create_field_link, create_field_list, create_field_media_image,
    create_field_node_reference, create_field_paragraph, create_field_textarea,
    create_field_textfield,
};
pub use kind::FieldKind;
pub use manifest::{FieldManifest, FieldParams, FieldSpec};
pub use serialization::{FieldSetFile, load_field_set, load_field_set_from_str, save_field_set};

// Re-export core types that are commonly used with field definitions
pub use entity_builder_core::{
    BuilderError, BuilderResult, Cardinality, LabelDisplay, LinkType, SettingValue, Settings,
    StorageType,
};

/// Current layout version of exported field sets
pub const SCHEMA_VERSION: u32 = 1;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Prelude Module
// ============================================================================

/// Convenient re-exports for common usage
pub mod prelude {
    pub use crate::helper::*;
    pub use crate::{
        BaseFieldSet,
        // Re-exported from core
        Cardinality,
        FieldDefinition,
        FieldKind,
        FieldManifest,
        LabelDisplay,
        LinkType,
        SettingValue,
        StorageType,
    };
}

// ============================================================================
// Tests
// ============================================================================
