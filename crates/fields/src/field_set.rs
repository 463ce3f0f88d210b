//! Ordered collections of field definitions
//!
//! A `BaseFieldSet` is what an entity type hands to the framework as its
//! base fields: definitions keyed by machine name, in declaration order.

use crate::field::FieldDefinition;
use entity_builder_core::{BuilderError, BuilderResult, Validatable, check_machine_name};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// BaseFieldSet
// ============================================================================

/// Field definitions keyed by machine name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseFieldSet {
    fields: IndexMap<String, FieldDefinition>,
}

impl BaseFieldSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Field management
    // ========================================================================

    /// Add a definition under `name`
    ///
    /// Fails when the name is not a valid machine name or is already taken.
    pub fn add(&mut self, name: impl Into<String>, definition: FieldDefinition) -> BuilderResult<()> {
        let name = name.into();

        check_machine_name(&name)
            .map_err(|message| BuilderError::invalid_machine_name(&name, message))?;

        if self.fields.contains_key(&name) {
            return Err(BuilderError::DuplicateField(name));
        }

        tracing::debug!(
            field = %name,
            storage_type = %definition.storage_type,
            "adding field definition"
        );
        self.fields.insert(name, definition);
        Ok(())
    }

    /// Add a definition using builder pattern
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        definition: FieldDefinition,
    ) -> BuilderResult<Self> {
        self.add(name, definition)?;
        Ok(self)
    }

    /// Remove a definition, keeping the order of the rest
    pub fn remove(&mut self, name: &str) -> Option<FieldDefinition> {
        self.fields.shift_remove(name)
    }

    /// Get a definition by machine name
    pub fn get(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.get(name)
    }

    /// Get a definition by machine name, failing when absent
    pub fn require(&self, name: &str) -> BuilderResult<&FieldDefinition> {
        self.get(name)
            .ok_or_else(|| BuilderError::FieldNotFound(name.to_string()))
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Check if a machine name is taken
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Machine names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Iterate over `(machine name, definition)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldDefinition)> {
        self.fields.iter().map(|(name, def)| (name.as_str(), def))
    }

    /// Get all required definitions
    pub fn required_fields(&self) -> Vec<(&str, &FieldDefinition)> {
        self.iter().filter(|(_, def)| def.required).collect()
    }

    /// Number of definitions
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Validatable for BaseFieldSet {
    fn validate(&self) -> BuilderResult<()> {
        // Keys can be inserted through deserialization without passing `add`
        for name in self.fields.keys() {
            check_machine_name(name)
                .map_err(|message| BuilderError::invalid_machine_name(name, message))?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a BaseFieldSet {
    type Item = (&'a String, &'a FieldDefinition);
    type IntoIter = indexmap::map::Iter<'a, String, FieldDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::helper::{create_field_boolean, create_field_email, create_field_textfield};

    #[test]
    fn test_add_and_get() {
        let mut set = BaseFieldSet::new();
        set.add("title", create_field_textfield("Title", true, true))
            .unwrap();
        set.add("published", create_field_boolean("Published"))
            .unwrap();

        assert_eq!(set.len(), 2);
        assert!(set.contains("title"));
        assert_eq!(set.get("title").unwrap().label, "Title");
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["title", "published"]);
        assert_eq!(set.required_fields().len(), 1);
    }

    #[test]
    fn test_duplicate_name_is_rejected() {
        let mut set = BaseFieldSet::new();
        set.add("title", create_field_textfield("Title", true, true))
            .unwrap();
        let err = set
            .add("title", create_field_textfield("Other", false, false))
            .unwrap_err();
        assert!(matches!(err, BuilderError::DuplicateField(ref name) if name == "title"));
        assert_eq!(set.get("title").unwrap().label, "Title");
    }

    #[test]
    fn test_invalid_name_is_rejected() {
        let mut set = BaseFieldSet::new();
        let err = set
            .add("Contact Email", create_field_email("Contact", false))
            .unwrap_err();
        assert!(matches!(err, BuilderError::InvalidMachineName { .. }));
        assert!(set.is_empty());
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut set = BaseFieldSet::new()
            .with_field("a", create_field_boolean("A"))
            .and_then(|s| s.with_field("b", create_field_boolean("B")))
            .and_then(|s| s.with_field("c", create_field_boolean("C")))
            .unwrap();

        assert!(set.remove("b").is_some());
        assert!(set.remove("b").is_none());
        assert_eq!(set.names().collect::<Vec<_>>(), vec!["a", "c"]);
    }

    #[test]
    fn test_require_missing_field() {
        let set = BaseFieldSet::new();
        assert!(matches!(
            set.require("body"),
            Err(BuilderError::FieldNotFound(_))
        ));
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let set = BaseFieldSet::new()
            .with_field("zeta", create_field_boolean("Zeta"))
            .and_then(|s| s.with_field("alpha", create_field_boolean("Alpha")))
            .unwrap();
        let json = serde_json::to_string(&set).unwrap();
        let zeta = json.find("\"zeta\"").unwrap();
        let alpha = json.find("\"alpha\"").unwrap();
        assert!(zeta < alpha);
    }

    #[test]
    fn test_validate_catches_deserialized_bad_names() {
        let json = serde_json::to_string(
            &BaseFieldSet::new()
                .with_field("ok", create_field_boolean("Ok"))
                .unwrap(),
        )
        .unwrap()
        .replace("\"ok\"", "\"Not Ok\"");
        let set: BaseFieldSet = serde_json::from_str(&json).unwrap();
        assert!(!set.is_valid());
    }
}
