//! Field definition records
//!
//! This module contains the `FieldDefinition` struct handed to the entity
//! framework, together with the view and form display descriptors and the
//! closed sets of formatter and widget identifiers they reference.

use entity_builder_core::{Cardinality, LabelDisplay, SettingValue, Settings, StorageType};
use serde::{Deserialize, Serialize};

// ============================================================================
// FieldDefinition
// ============================================================================

/// Fully configured description of one entity field
///
/// Definitions have no identity of their own: two definitions built from the
/// same inputs compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Storage type the framework persists the field with
    #[serde(rename = "type")]
    pub storage_type: StorageType,

    /// Human-readable label
    pub label: String,

    /// Optional help text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether a value must be supplied
    #[serde(default)]
    pub required: bool,

    /// Whether values differ per language; `None` leaves the framework default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translatable: Option<bool>,

    /// Maximum number of values
    #[serde(default)]
    pub cardinality: Cardinality,

    /// Value assigned to new entities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<SettingValue>,

    /// Storage and instance settings, specific to the storage type
    #[serde(default)]
    pub settings: Settings,

    /// Suggested display configuration
    pub display: Displays,

    /// Whether downstream configuration may override each display
    #[serde(default)]
    pub display_configurable: DisplayConfigurable,
}

impl FieldDefinition {
    /// Create a definition with the given storage type and form display
    ///
    /// Every definition carries a form display, so it is required up front.
    /// The view display is optional and set with [`with_view_display`].
    ///
    /// [`with_view_display`]: FieldDefinition::with_view_display
    pub fn new(storage_type: StorageType, form: FormDisplay) -> Self {
        Self {
            storage_type,
            label: String::new(),
            description: None,
            required: false,
            translatable: None,
            cardinality: Cardinality::default(),
            default_value: None,
            settings: Settings::new(),
            display: Displays { view: None, form },
            display_configurable: DisplayConfigurable::default(),
        }
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    /// Set the label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Set or clear the description
    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description.map(str::to_string);
        self
    }

    /// Set whether the field is required
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set whether the field is translatable
    pub fn with_translatable(mut self, translatable: bool) -> Self {
        self.translatable = Some(translatable);
        self
    }

    /// Set the cardinality
    pub fn with_cardinality(mut self, cardinality: Cardinality) -> Self {
        self.cardinality = cardinality;
        self
    }

    /// Set the default value
    pub fn with_default_value(mut self, value: impl Into<SettingValue>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Replace all settings
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// Set a single setting, replacing any previous value under the same key
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Set the view display and mark it configurable
    pub fn with_view_display(mut self, view: ViewDisplay) -> Self {
        self.display.view = Some(view);
        self.display_configurable.view = true;
        self
    }

    /// Set whether the form display may be overridden downstream
    pub fn form_configurable(mut self, configurable: bool) -> Self {
        self.display_configurable.form = configurable;
        self
    }

    // ========================================================================
    // Utility methods
    // ========================================================================

    /// Look up a setting
    pub fn setting(&self, key: &str) -> Option<&SettingValue> {
        self.settings.get(key)
    }

    /// Get the view display, if one is configured
    pub fn view_display(&self) -> Option<&ViewDisplay> {
        self.display.view.as_ref()
    }

    /// Get the form display
    pub fn form_display(&self) -> &FormDisplay {
        &self.display.form
    }

    /// Check if a view display is configured
    pub fn has_view_display(&self) -> bool {
        self.display.view.is_some()
    }
}

// ============================================================================
// Displays
// ============================================================================

/// View and form display descriptors of a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Displays {
    /// Rendering; absent when the framework should fall back to its default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewDisplay>,

    /// Editing
    pub form: FormDisplay,
}

/// Permission flags for overriding the suggested displays
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfigurable {
    pub view: bool,
    pub form: bool,
}

// ============================================================================
// ViewDisplay
// ============================================================================

/// How a field value is rendered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewDisplay {
    /// Label placement
    pub label: LabelDisplay,

    /// Formatter identifier
    #[serde(rename = "type")]
    pub formatter: Formatter,

    /// Position among the entity's fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i32>,

    /// Formatter settings
    #[serde(default, skip_serializing_if = "Settings::is_empty")]
    pub settings: Settings,
}

impl ViewDisplay {
    /// Create a view display
    pub fn new(label: LabelDisplay, formatter: Formatter) -> Self {
        Self {
            label,
            formatter,
            weight: None,
            settings: Settings::new(),
        }
    }

    /// Set the weight
    pub fn with_weight(mut self, weight: i32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Add a formatter setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// FormDisplay
// ============================================================================

/// How a field value is edited
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDisplay {
    /// Widget identifier
    #[serde(rename = "type")]
    pub widget: Widget,

    /// Label placement, when the widget should override it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<LabelDisplay>,

    /// Widget settings
    #[serde(default, skip_serializing_if = "Settings::is_empty")]
    pub settings: Settings,

    /// Additional top-level display options passed through as-is
    #[serde(flatten)]
    pub options: Settings,
}

impl FormDisplay {
    /// Create a form display
    pub fn new(widget: Widget) -> Self {
        Self {
            widget,
            label: None,
            settings: Settings::new(),
            options: Settings::new(),
        }
    }

    /// Set the label placement
    pub fn with_label(mut self, label: LabelDisplay) -> Self {
        self.label = Some(label);
        self
    }

    /// Add a widget setting
    pub fn with_setting(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.settings.insert(key.into(), value.into());
        self
    }

    /// Add a top-level display option
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

// ============================================================================
// Formatter
// ============================================================================

/// Formatters referenced by view displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formatter {
    /// Plain string
    String,
    /// Plain long string with line breaks
    StringLong,
    /// Filtered formatted text
    TextDefault,
    /// Image formatter (`default`)
    #[serde(rename = "default")]
    ImageDefault,
    /// Label of the referenced entity
    EntityReferenceLabel,
    /// Formatted date
    DatetimeDefault,
}

impl Formatter {
    /// Get the formatter identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Formatter::String => "string",
            Formatter::StringLong => "string_long",
            Formatter::TextDefault => "text_default",
            Formatter::ImageDefault => "default",
            Formatter::EntityReferenceLabel => "entity_reference_label",
            Formatter::DatetimeDefault => "datetime_default",
        }
    }
}

impl std::fmt::Display for Formatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Widget
// ============================================================================

/// Widgets referenced by form displays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Widget {
    /// Single-line text input
    StringTextfield,
    /// Multi-line plain text area
    StringLong,
    /// Multi-line formatted text area
    TextTextarea,
    /// Checkboxes or radio buttons
    OptionsButtons,
    /// Select list
    OptionsSelect,
    /// Image upload
    ImageImage,
    /// Image upload with focal point selection
    ImageFocalPoint,
    /// Email input
    EmailDefault,
    /// Single checkbox
    BooleanCheckbox,
    /// Inline paragraph editor
    EntityReferenceParagraphs,
    /// Date picker
    DatetimeDefault,
    /// URI and title inputs
    LinkDefault,
    /// Media library browser
    MediaLibraryWidget,
}

impl Widget {
    /// Get the widget identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            Widget::StringTextfield => "string_textfield",
            Widget::StringLong => "string_long",
            Widget::TextTextarea => "text_textarea",
            Widget::OptionsButtons => "options_buttons",
            Widget::OptionsSelect => "options_select",
            Widget::ImageImage => "image_image",
            Widget::ImageFocalPoint => "image_focal_point",
            Widget::EmailDefault => "email_default",
            Widget::BooleanCheckbox => "boolean_checkbox",
            Widget::EntityReferenceParagraphs => "entity_reference_paragraphs",
            Widget::DatetimeDefault => "datetime_default",
            Widget::LinkDefault => "link_default",
            Widget::MediaLibraryWidget => "media_library_widget",
        }
    }
}

impl std::fmt::Display for Widget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================
