//! Core types used throughout Entity Builder
//!
//! This module contains the value types shared by field definitions: the
//! storage type identifiers, cardinality, label placement, link types, and
//! the loosely typed setting values carried in settings maps.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// StorageType
// ============================================================================

/// Low-level storage category the entity framework persists a field with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    /// Short plain string
    String,
    /// Long plain string
    StringLong,
    /// Long formatted text
    TextLong,
    /// Integer
    Integer,
    /// String from a list of allowed values
    ListString,
    /// Image file reference
    Image,
    /// Email address
    Email,
    /// Boolean flag
    Boolean,
    /// Reference to another entity
    EntityReference,
    /// Reference to a specific revision of another entity
    EntityReferenceRevisions,
    /// Date or date/time
    Datetime,
    /// URI with optional title
    Link,
}

impl StorageType {
    /// Get the identifier the framework uses for this storage type
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::String => "string",
            StorageType::StringLong => "string_long",
            StorageType::TextLong => "text_long",
            StorageType::Integer => "integer",
            StorageType::ListString => "list_string",
            StorageType::Image => "image",
            StorageType::Email => "email",
            StorageType::Boolean => "boolean",
            StorageType::EntityReference => "entity_reference",
            StorageType::EntityReferenceRevisions => "entity_reference_revisions",
            StorageType::Datetime => "datetime",
            StorageType::Link => "link",
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Cardinality
// ============================================================================

/// Sentinel the framework uses for "any number of values"
pub const CARDINALITY_UNLIMITED: i64 = -1;

/// Maximum number of values a field may hold
///
/// Serialized as a plain integer, with `-1` standing for unlimited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Cardinality {
    /// At most `n` values (`n >= 1`)
    Limited(u32),
    /// Unbounded ordered sequence of values
    Unlimited,
}

impl Cardinality {
    /// Single-valued field
    pub fn single() -> Self {
        Cardinality::Limited(1)
    }

    /// Check if the field holds more than one value
    pub fn is_multiple(&self) -> bool {
        !matches!(self, Cardinality::Limited(1))
    }
}

impl Default for Cardinality {
    fn default() -> Self {
        Self::single()
    }
}

impl From<Cardinality> for i64 {
    fn from(c: Cardinality) -> Self {
        match c {
            Cardinality::Limited(n) => i64::from(n),
            Cardinality::Unlimited => CARDINALITY_UNLIMITED,
        }
    }
}

impl TryFrom<i64> for Cardinality {
    type Error = String;

    fn try_from(v: i64) -> Result<Self, Self::Error> {
        match v {
            CARDINALITY_UNLIMITED => Ok(Cardinality::Unlimited),
            n if n >= 1 => u32::try_from(n)
                .map(Cardinality::Limited)
                .map_err(|_| format!("cardinality {} is out of range", n)),
            n => Err(format!(
                "cardinality must be positive or {}, got {}",
                CARDINALITY_UNLIMITED, n
            )),
        }
    }
}

impl std::fmt::Display for Cardinality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cardinality::Limited(n) => write!(f, "{}", n),
            Cardinality::Unlimited => write!(f, "unlimited"),
        }
    }
}

// ============================================================================
// LabelDisplay
// ============================================================================

/// Where a formatter places the field label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelDisplay {
    /// Label is not rendered
    Hidden,
    /// Label is rendered on the same line as the value
    Inline,
    /// Label is rendered above the value
    Above,
}

// ============================================================================
// LinkType
// ============================================================================

/// Which kinds of URI a link field accepts
///
/// Serialized as the bit flags the framework stores for link fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LinkType {
    /// Internal paths only
    Internal,
    /// External URLs only
    External,
    /// Both internal and external
    #[default]
    Both,
}

impl LinkType {
    pub const INTERNAL_FLAG: u8 = 0x01;
    pub const EXTERNAL_FLAG: u8 = 0x10;

    /// Get the stored flag value
    pub fn flags(&self) -> u8 {
        match self {
            LinkType::Internal => Self::INTERNAL_FLAG,
            LinkType::External => Self::EXTERNAL_FLAG,
            LinkType::Both => Self::INTERNAL_FLAG | Self::EXTERNAL_FLAG,
        }
    }
}

impl From<LinkType> for u8 {
    fn from(t: LinkType) -> Self {
        t.flags()
    }
}

impl TryFrom<u8> for LinkType {
    type Error = String;

    fn try_from(v: u8) -> Result<Self, Self::Error> {
        match v {
            0x01 => Ok(LinkType::Internal),
            0x10 => Ok(LinkType::External),
            0x11 => Ok(LinkType::Both),
            other => Err(format!("unknown link type flags: {:#04x}", other)),
        }
    }
}

impl std::str::FromStr for LinkType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "internal" => Ok(LinkType::Internal),
            "external" => Ok(LinkType::External),
            "both" | "generic" => Ok(LinkType::Both),
            other => Err(format!("unknown link type: {}", other)),
        }
    }
}

// ============================================================================
// SettingValue
// ============================================================================

/// Ordered mapping of setting names to values
pub type Settings = IndexMap<String, SettingValue>;

/// Loosely typed value stored in settings and display option maps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SettingValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<SettingValue>),
    Map(Settings),
}

impl SettingValue {
    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            SettingValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            SettingValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            SettingValue::String(v) => Some(v.as_str()),
            _ => None,
        }
    }

    /// Try to get as list
    pub fn as_list(&self) -> Option<&[SettingValue]> {
        match self {
            SettingValue::List(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get as map
    pub fn as_map(&self) -> Option<&Settings> {
        match self {
            SettingValue::Map(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a key when this value is a map
    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.as_map().and_then(|m| m.get(key))
    }

    /// Check if null
    pub fn is_null(&self) -> bool {
        matches!(self, SettingValue::Null)
    }
}

impl Default for SettingValue {
    fn default() -> Self {
        SettingValue::Null
    }
}

impl From<bool> for SettingValue {
    fn from(v: bool) -> Self {
        SettingValue::Bool(v)
    }
}

impl From<i32> for SettingValue {
    fn from(v: i32) -> Self {
        SettingValue::Int(i64::from(v))
    }
}

impl From<i64> for SettingValue {
    fn from(v: i64) -> Self {
        SettingValue::Int(v)
    }
}

impl From<u8> for SettingValue {
    fn from(v: u8) -> Self {
        SettingValue::Int(i64::from(v))
    }
}

impl From<&str> for SettingValue {
    fn from(v: &str) -> Self {
        SettingValue::String(v.to_string())
    }
}

impl From<String> for SettingValue {
    fn from(v: String) -> Self {
        SettingValue::String(v)
    }
}

impl From<Vec<SettingValue>> for SettingValue {
    fn from(v: Vec<SettingValue>) -> Self {
        SettingValue::List(v)
    }
}

impl From<Settings> for SettingValue {
    fn from(v: Settings) -> Self {
        SettingValue::Map(v)
    }
}

/// Build an ordered settings map from key/value pairs
pub fn settings<K, V, I>(pairs: I) -> Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
