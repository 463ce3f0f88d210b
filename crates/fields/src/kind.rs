//! The closed set of field kinds the factories support

use entity_builder_core::StorageType;
use serde::{Deserialize, Serialize};

/// One of the fixed field archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Textfield,
    Textarea,
    FormattedTextarea,
    Integer,
    List,
    Image,
    Email,
    Boolean,
    EntityReference,
    Paragraph,
    NodeReference,
    Datetime,
    Link,
    MediaImage,
}

impl FieldKind {
    /// Every kind, in declaration order
    pub fn all() -> &'static [FieldKind] {
        &[
            FieldKind::Textfield,
            FieldKind::Textarea,
            FieldKind::FormattedTextarea,
            FieldKind::Integer,
            FieldKind::List,
            FieldKind::Image,
            FieldKind::Email,
            FieldKind::Boolean,
            FieldKind::EntityReference,
            FieldKind::Paragraph,
            FieldKind::NodeReference,
            FieldKind::Datetime,
            FieldKind::Link,
            FieldKind::MediaImage,
        ]
    }

    /// Name used in manifests
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKind::Textfield => "textfield",
            FieldKind::Textarea => "textarea",
            FieldKind::FormattedTextarea => "formatted_textarea",
            FieldKind::Integer => "integer",
            FieldKind::List => "list",
            FieldKind::Image => "image",
            FieldKind::Email => "email",
            FieldKind::Boolean => "boolean",
            FieldKind::EntityReference => "entity_reference",
            FieldKind::Paragraph => "paragraph",
            FieldKind::NodeReference => "node_reference",
            FieldKind::Datetime => "datetime",
            FieldKind::Link => "link",
            FieldKind::MediaImage => "media_image",
        }
    }

    /// Storage type the factory for this kind produces
    pub fn storage_type(&self) -> StorageType {
        match self {
            FieldKind::Textfield => StorageType::String,
            FieldKind::Textarea => StorageType::StringLong,
            FieldKind::FormattedTextarea => StorageType::TextLong,
            FieldKind::Integer => StorageType::Integer,
            FieldKind::List => StorageType::ListString,
            FieldKind::Image => StorageType::Image,
            FieldKind::Email => StorageType::Email,
            FieldKind::Boolean => StorageType::Boolean,
            FieldKind::EntityReference
            | FieldKind::NodeReference
            | FieldKind::MediaImage => StorageType::EntityReference,
            FieldKind::Paragraph => StorageType::EntityReferenceRevisions,
            FieldKind::Datetime => StorageType::Datetime,
            FieldKind::Link => StorageType::Link,
        }
    }

    /// Whether the factory suggests a view display
    pub fn has_view_display(&self) -> bool {
        !matches!(self, FieldKind::Boolean | FieldKind::Link)
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FieldKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldKind::all()
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown field kind: {}", s))
    }
}
