//! Declarative field manifests
//!
//! A manifest lists the fields of one entity type in TOML, naming each
//! field's kind and the parameters its factory takes:
//!
//! ```toml
//! entity = "article"
//!
//! [[fields]]
//! name = "title"
//! kind = "textfield"
//! label = "Title"
//! required = true
//! translatable = true
//!
//! [[fields]]
//! kind = "list"
//! label = "Color"
//! multiple = true
//! options = { red = "Red", blue = "Blue" }
//! ```
//!
//! Machine names left out are derived from the label in snake case. Labels
//! with non-ASCII letters or a leading digit do not yield a valid machine
//! name, so such entries need an explicit `name`.
//!
//! Keys a field's kind does not take are rejected, so a misspelled flag
//! never falls back to its default.

use crate::field::FieldDefinition;
use crate::field_set::BaseFieldSet;
use crate::helper;
use crate::kind::FieldKind;
use entity_builder_core::{
    BuilderError, BuilderResult, LinkType, Named, Validatable, check_machine_name,
};
use heck::ToSnakeCase;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ============================================================================
// FieldManifest
// ============================================================================

/// Fields of one entity type, as read from TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldManifest {
    /// Entity type the fields belong to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity: Option<String>,

    /// Field entries in declaration order
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FieldManifest {
    /// Parse a manifest, deriving missing machine names from labels
    pub fn from_toml_str(source: &str) -> BuilderResult<Self> {
        let table: toml::Table = source.parse()?;
        if let Some(toml::Value::Array(entries)) = table.get("fields") {
            for (index, entry) in entries.iter().enumerate() {
                if let toml::Value::Table(entry) = entry {
                    check_entry_keys(index, entry)?;
                }
            }
        }

        let mut manifest: FieldManifest = toml::Value::Table(table).try_into()?;
        for spec in &mut manifest.fields {
            if spec.name.is_none() {
                spec.name = Some(spec.label.to_snake_case());
            }
        }
        Ok(manifest)
    }

    /// Read and parse a manifest file
    pub fn load(path: impl AsRef<Path>) -> BuilderResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| BuilderError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let manifest = Self::from_toml_str(&source)?;
        tracing::debug!(
            path = %path.display(),
            fields = manifest.fields.len(),
            "loaded field manifest"
        );
        Ok(manifest)
    }

    /// Validate the manifest and build its field set
    pub fn build(&self) -> BuilderResult<BaseFieldSet> {
        self.validate()?;

        let mut set = BaseFieldSet::new();
        for spec in &self.fields {
            set.add(spec.name(), spec.definition())?;
        }

        tracing::info!(
            entity = self.entity.as_deref().unwrap_or("-"),
            fields = set.len(),
            "built field set from manifest"
        );
        Ok(set)
    }
}

impl FieldManifest {
    /// Check every entry, keeping the first problem found in each
    fn entry_errors(&self) -> Vec<BuilderError> {
        let mut seen = HashSet::new();
        let mut errors = Vec::new();

        for (index, spec) in self.fields.iter().enumerate() {
            if spec.label.trim().is_empty() {
                errors.push(BuilderError::manifest(index, "label cannot be empty"));
                continue;
            }

            let name = spec.name();
            if let Err(message) = check_machine_name(name) {
                errors.push(BuilderError::manifest(
                    index,
                    format!("machine name '{}': {}", name, message),
                ));
                continue;
            }

            if !seen.insert(name) {
                errors.push(BuilderError::manifest(
                    index,
                    format!("machine name '{}' is used more than once", name),
                ));
                continue;
            }

            match &spec.params {
                FieldParams::List { options, .. } if options.is_empty() => {
                    tracing::warn!(field = %name, "list field has no options");
                }
                FieldParams::Paragraph { bundles, .. } if bundles.is_empty() => {
                    tracing::warn!(field = %name, "paragraph field allows no bundles");
                }
                _ => {}
            }
        }

        errors
    }
}

impl Validatable for FieldManifest {
    fn validate(&self) -> BuilderResult<()> {
        match self.entry_errors().into_iter().next() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn validation_errors(&self) -> Vec<String> {
        self.entry_errors().iter().map(ToString::to_string).collect()
    }
}

// ============================================================================
// FieldSpec
// ============================================================================

/// One manifest entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Machine name; filled from the label when parsed without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Human-readable label
    pub label: String,

    /// Kind and factory parameters
    #[serde(flatten)]
    pub params: FieldParams,
}

impl FieldSpec {
    /// Create an entry with an explicit machine name
    pub fn new(name: impl Into<String>, label: impl Into<String>, params: FieldParams) -> Self {
        Self {
            name: Some(name.into()),
            label: label.into(),
            params,
        }
    }

    /// Get the field kind
    pub fn kind(&self) -> FieldKind {
        self.params.kind()
    }

    /// Build the definition through the factory for this kind
    pub fn definition(&self) -> FieldDefinition {
        let label = self.label.as_str();
        match &self.params {
            FieldParams::Textfield {
                required,
                translatable,
            } => helper::create_field_textfield(label, *required, *translatable),
            FieldParams::Textarea {
                description,
                required,
                translatable,
            } => helper::create_field_textarea(
                label,
                description.as_deref(),
                *required,
                *translatable,
            ),
            FieldParams::FormattedTextarea {
                description,
                required,
                translatable,
            } => helper::create_field_formatted_textarea(
                label,
                description.as_deref(),
                *required,
                *translatable,
            ),
            FieldParams::Integer { required } => helper::create_field_integer(label, *required),
            FieldParams::List {
                required,
                options,
                multiple,
            } => helper::create_field_list(
                label,
                *required,
                options.iter().map(|(k, v)| (k.as_str(), v.as_str())),
                *multiple,
            ),
            FieldParams::Image {
                required,
                focal_point,
                webp_support,
            } => helper::create_field_image(label, *required, *focal_point, *webp_support),
            FieldParams::Email { required } => helper::create_field_email(label, *required),
            FieldParams::Boolean => helper::create_field_boolean(label),
            FieldParams::EntityReference {
                target_type,
                required,
            } => helper::create_field_entity_reference(label, target_type, *required),
            FieldParams::Paragraph {
                bundles,
                required,
                translatable,
            } => helper::create_field_paragraph(
                label,
                bundles.iter().map(String::as_str),
                *required,
                *translatable,
            ),
            FieldParams::NodeReference {
                target_type,
                bundle,
                required,
            } => helper::create_field_node_reference(label, target_type, bundle, *required),
            FieldParams::Datetime { required } => helper::create_field_datetime(label, *required),
            FieldParams::Link {
                required,
                translatable,
                link_type,
                title_enabled,
            } => helper::create_field_link(
                label,
                *required,
                *translatable,
                *link_type,
                *title_enabled,
            ),
            FieldParams::MediaImage { required } => {
                helper::create_field_media_image(label, *required)
            }
        }
    }
}

impl Named for FieldSpec {
    fn name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

// ============================================================================
// FieldParams
// ============================================================================

/// Factory parameters, tagged by field kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldParams {
    Textfield {
        #[serde(default)]
        required: bool,
        #[serde(default)]
        translatable: bool,
    },
    Textarea {
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        translatable: bool,
    },
    FormattedTextarea {
        #[serde(default)]
        description: Option<String>,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        translatable: bool,
    },
    Integer {
        #[serde(default)]
        required: bool,
    },
    List {
        #[serde(default)]
        required: bool,
        #[serde(default)]
        options: IndexMap<String, String>,
        #[serde(default)]
        multiple: bool,
    },
    Image {
        #[serde(default)]
        required: bool,
        #[serde(default)]
        focal_point: bool,
        #[serde(default)]
        webp_support: bool,
    },
    Email {
        #[serde(default)]
        required: bool,
    },
    Boolean,
    EntityReference {
        target_type: String,
        #[serde(default)]
        required: bool,
    },
    Paragraph {
        #[serde(default)]
        bundles: Vec<String>,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        translatable: bool,
    },
    NodeReference {
        #[serde(default = "default_node_target")]
        target_type: String,
        bundle: String,
        #[serde(default)]
        required: bool,
    },
    Datetime {
        #[serde(default)]
        required: bool,
    },
    Link {
        #[serde(default)]
        required: bool,
        #[serde(default)]
        translatable: bool,
        #[serde(
            default,
            deserialize_with = "link_type_by_name",
            serialize_with = "link_type_name"
        )]
        link_type: LinkType,
        #[serde(default = "default_true")]
        title_enabled: bool,
    },
    MediaImage {
        #[serde(default)]
        required: bool,
    },
}

impl FieldParams {
    /// Get the field kind
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldParams::Textfield { .. } => FieldKind::Textfield,
            FieldParams::Textarea { .. } => FieldKind::Textarea,
            FieldParams::FormattedTextarea { .. } => FieldKind::FormattedTextarea,
            FieldParams::Integer { .. } => FieldKind::Integer,
            FieldParams::List { .. } => FieldKind::List,
            FieldParams::Image { .. } => FieldKind::Image,
            FieldParams::Email { .. } => FieldKind::Email,
            FieldParams::Boolean => FieldKind::Boolean,
            FieldParams::EntityReference { .. } => FieldKind::EntityReference,
            FieldParams::Paragraph { .. } => FieldKind::Paragraph,
            FieldParams::NodeReference { .. } => FieldKind::NodeReference,
            FieldParams::Datetime { .. } => FieldKind::Datetime,
            FieldParams::Link { .. } => FieldKind::Link,
            FieldParams::MediaImage { .. } => FieldKind::MediaImage,
        }
    }
}

/// Keys every manifest entry may carry
const ENTRY_KEYS: &[&str] = &["name", "label", "kind"];

/// Parameter keys accepted for a field kind
pub(crate) fn parameter_names(kind: FieldKind) -> &'static [&'static str] {
    match kind {
        FieldKind::Textfield => &["required", "translatable"],
        FieldKind::Textarea | FieldKind::FormattedTextarea => {
            &["description", "required", "translatable"]
        }
        FieldKind::Integer
        | FieldKind::Email
        | FieldKind::Datetime
        | FieldKind::MediaImage => &["required"],
        FieldKind::List => &["required", "options", "multiple"],
        FieldKind::Image => &["required", "focal_point", "webp_support"],
        FieldKind::Boolean => &[],
        FieldKind::EntityReference => &["target_type", "required"],
        FieldKind::Paragraph => &["bundles", "required", "translatable"],
        FieldKind::NodeReference => &["target_type", "bundle", "required"],
        FieldKind::Link => &["required", "translatable", "link_type", "title_enabled"],
    }
}

/// Reject keys the entry's kind does not take
///
/// Entries without a recognizable kind are left for deserialization to report.
fn check_entry_keys(index: usize, entry: &toml::Table) -> BuilderResult<()> {
    let Some(kind) = entry
        .get("kind")
        .and_then(toml::Value::as_str)
        .and_then(|kind| kind.parse::<FieldKind>().ok())
    else {
        return Ok(());
    };

    let allowed = parameter_names(kind);
    match entry
        .keys()
        .find(|key| !ENTRY_KEYS.contains(&key.as_str()) && !allowed.contains(&key.as_str()))
    {
        Some(key) => Err(BuilderError::manifest(
            index,
            format!("unknown key '{}' for a {} field", key, kind),
        )),
        None => Ok(()),
    }
}

fn default_node_target() -> String {
    "node".to_string()
}

fn default_true() -> bool {
    true
}

fn link_type_by_name<'de, D>(deserializer: D) -> Result<LinkType, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

fn link_type_name<S>(link_type: &LinkType, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    let name = match link_type {
        LinkType::Internal => "internal",
        LinkType::External => "external",
        LinkType::Both => "both",
    };
    serializer.serialize_str(name)
}

// ============================================================================
// Tests
// ============================================================================
