//! Field definition factories
//!
//! One function per supported field kind. Each returns a fully configured
//! [`FieldDefinition`] built from a fixed policy for that kind. Nothing is
//! validated: labels, target types and bundle names are carried through
//! untouched and left for the entity framework to check.

use crate::field::{FieldDefinition, FormDisplay, Formatter, ViewDisplay, Widget};
use entity_builder_core::{
    Cardinality, LabelDisplay, LinkType, SettingValue, Settings, StorageType, settings,
};
use indexmap::IndexSet;

/// Maximum length of short and long plain text fields
pub const TEXT_MAX_LENGTH: i64 = 254;

/// Maximum length of email fields
pub const EMAIL_MAX_LENGTH: i64 = 50;

/// Image extensions accepted by every image field
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Settings shared by the plain and formatted text kinds
fn text_settings(max_length: i64) -> Settings {
    settings([
        ("max_length", SettingValue::from(max_length)),
        ("text_processing", SettingValue::from(0)),
    ])
}

/// `{bundle: bundle}` map used to restrict reference targets
fn target_bundles<'a>(bundles: impl IntoIterator<Item = &'a str>) -> SettingValue {
    SettingValue::Map(bundles.into_iter().map(|b| (b.to_string(), b.into())).collect())
}

/// Create a short plain text field
pub fn create_field_textfield(
    label: impl Into<String>,
    required: bool,
    translatable: bool,
) -> FieldDefinition {
    FieldDefinition::new(StorageType::String, FormDisplay::new(Widget::StringTextfield))
        .with_label(label)
        .with_required(required)
        .with_translatable(translatable)
        .with_settings(text_settings(TEXT_MAX_LENGTH))
        .with_view_display(ViewDisplay::new(LabelDisplay::Hidden, Formatter::String))
        .form_configurable(true)
}

/// Create a long plain text field
pub fn create_field_textarea(
    label: impl Into<String>,
    description: Option<&str>,
    required: bool,
    translatable: bool,
) -> FieldDefinition {
    FieldDefinition::new(
        StorageType::StringLong,
        FormDisplay::new(Widget::StringLong).with_option("text_processing", 0),
    )
    .with_label(label)
    .with_description(description)
    .with_required(required)
    .with_translatable(translatable)
    .with_settings(text_settings(TEXT_MAX_LENGTH))
    .with_view_display(ViewDisplay::new(LabelDisplay::Hidden, Formatter::StringLong))
    .form_configurable(true)
}

/// Create a long formatted text field
pub fn create_field_formatted_textarea(
    label: impl Into<String>,
    description: Option<&str>,
    required: bool,
    translatable: bool,
) -> FieldDefinition {
    FieldDefinition::new(
        StorageType::TextLong,
        FormDisplay::new(Widget::TextTextarea).with_option("text_processing", 0),
    )
    .with_label(label)
    .with_description(description)
    .with_required(required)
    .with_translatable(translatable)
    .with_settings(text_settings(TEXT_MAX_LENGTH))
    .with_view_display(ViewDisplay::new(LabelDisplay::Hidden, Formatter::TextDefault))
    .form_configurable(true)
}

/// Create an integer field defaulting to zero
pub fn create_field_integer(label: impl Into<String>, required: bool) -> FieldDefinition {
    FieldDefinition::new(
        StorageType::Integer,
        FormDisplay::new(Widget::StringTextfield).with_setting("display_label", true),
    )
    .with_label(label)
    .with_required(required)
    .with_default_value(0)
    .with_view_display(ViewDisplay::new(LabelDisplay::Hidden, Formatter::String))
    .form_configurable(true)
}

/// Create a list field restricted to `options`
///
/// `options` maps stored values to display text and keeps its order. With
/// `multiple` set the field accepts any number of values and is edited with
/// buttons; otherwise it holds one value entered in a text field.
pub fn create_field_list<K, V>(
    label: impl Into<String>,
    required: bool,
    options: impl IntoIterator<Item = (K, V)>,
    multiple: bool,
) -> FieldDefinition
where
    K: Into<String>,
    V: Into<String>,
{
    let allowed_values: Settings = options
        .into_iter()
        .map(|(value, text)| (value.into(), SettingValue::String(text.into())))
        .collect();

    let widget = if multiple {
        Widget::OptionsButtons
    } else {
        Widget::StringTextfield
    };

    let field = FieldDefinition::new(StorageType::ListString, FormDisplay::new(widget))
        .with_label(label)
        .with_required(required)
        .with_setting("allowed_values", allowed_values)
        .with_view_display(ViewDisplay::new(LabelDisplay::Hidden, Formatter::String))
        .form_configurable(true);

    if multiple {
        field.with_cardinality(Cardinality::Unlimited)
    } else {
        field
    }
}

/// Create an image field without alt or title inputs
///
/// `focal_point` swaps in the focal point widget; `webp_support` adds `webp`
/// to the accepted extensions.
pub fn create_field_image(
    label: impl Into<String>,
    required: bool,
    focal_point: bool,
    webp_support: bool,
) -> FieldDefinition {
    let mut extensions = IMAGE_EXTENSIONS.to_vec();
    if webp_support {
        extensions.push("webp");
    }

    let widget = if focal_point {
        Widget::ImageFocalPoint
    } else {
        Widget::ImageImage
    };

    FieldDefinition::new(
        StorageType::Image,
        FormDisplay::new(widget).with_label(LabelDisplay::Hidden),
    )
    .with_label(label)
    .with_required(required)
    .with_settings(settings([
        ("alt_field", SettingValue::from(false)),
        ("alt_field_required", SettingValue::from(false)),
        ("title_field", SettingValue::from(false)),
        ("title_field_required", SettingValue::from(false)),
        ("file_extensions", SettingValue::from(extensions.join(" "))),
    ]))
    .with_view_display(
        ViewDisplay::new(LabelDisplay::Hidden, Formatter::ImageDefault).with_weight(0),
    )
    .form_configurable(true)
}

/// Create an email field
pub fn create_field_email(label: impl Into<String>, required: bool) -> FieldDefinition {
    FieldDefinition::new(StorageType::Email, FormDisplay::new(Widget::EmailDefault))
        .with_label(label)
        .with_required(required)
        .with_settings(text_settings(EMAIL_MAX_LENGTH))
        .with_view_display(ViewDisplay::new(LabelDisplay::Inline, Formatter::String))
        .form_configurable(true)
}

/// Create a checkbox field
///
/// No view display is suggested; the framework renders it with its default.
pub fn create_field_boolean(label: impl Into<String>) -> FieldDefinition {
    FieldDefinition::new(
        StorageType::Boolean,
        FormDisplay::new(Widget::BooleanCheckbox).with_option("checked", "checked"),
    )
    .with_label(label)
    .form_configurable(true)
}

/// Create a reference to any entity of `target_type`
pub fn create_field_entity_reference(
    label: impl Into<String>,
    target_type: &str,
    required: bool,
) -> FieldDefinition {
    FieldDefinition::new(
        StorageType::EntityReference,
        FormDisplay::new(Widget::OptionsSelect),
    )
    .with_label(label)
    .with_required(required)
    .with_setting("target_type", target_type)
    .with_setting("handler", "default")
    .with_view_display(ViewDisplay::new(
        LabelDisplay::Above,
        Formatter::EntityReferenceLabel,
    ))
    .form_configurable(true)
}

/// Create an unlimited paragraphs field limited to `bundles`
///
/// Bundles keep the order they are given in; repeats are dropped.
pub fn create_field_paragraph<B>(
    label: impl Into<String>,
    bundles: impl IntoIterator<Item = B>,
    required: bool,
    translatable: bool,
) -> FieldDefinition
where
    B: Into<String>,
{
    let bundles: IndexSet<String> = bundles.into_iter().map(Into::into).collect();
    let handler_settings = settings([
        (
            "target_bundles",
            SettingValue::List(bundles.into_iter().map(SettingValue::String).collect()),
        ),
        ("negate", SettingValue::from(0)),
    ]);

    let form = FormDisplay::new(Widget::EntityReferenceParagraphs)
        .with_setting("title", "Paragraph")
        .with_setting("title_plural", "Paragraphs")
        .with_setting("edit_mode", "open")
        .with_setting("add_mode", "dropdown")
        .with_setting("form_display_mode", "default")
        .with_setting("default_paragraph_type", "");

    FieldDefinition::new(StorageType::EntityReferenceRevisions, form)
        .with_label(label)
        .with_cardinality(Cardinality::Unlimited)
        .with_required(required)
        .with_translatable(translatable)
        .with_setting("target_type", "paragraph")
        .with_setting("handler", "default:paragraph")
        .with_setting("handler_settings", handler_settings)
        .with_view_display(ViewDisplay::new(LabelDisplay::Above, Formatter::String))
        .form_configurable(true)
}

/// Create a reference to entities of `target_type` in a single `bundle`
pub fn create_field_node_reference(
    label: impl Into<String>,
    target_type: &str,
    bundle: &str,
    required: bool,
) -> FieldDefinition {
    create_field_entity_reference(label, target_type, required).with_setting(
        "handler_settings",
        settings([("target_bundles", target_bundles([bundle]))]),
    )
}

/// Create a date-only field
pub fn create_field_datetime(label: impl Into<String>, required: bool) -> FieldDefinition {
    FieldDefinition::new(StorageType::Datetime, FormDisplay::new(Widget::DatetimeDefault))
        .with_label(label)
        .with_required(required)
        .with_setting("datetime_type", "date")
        .with_view_display(
            ViewDisplay::new(LabelDisplay::Hidden, Formatter::DatetimeDefault)
                .with_setting("format_type", "medium"),
        )
        .form_configurable(true)
}

/// Create a link field
///
/// No view display is suggested; the framework renders it with its default.
pub fn create_field_link(
    label: impl Into<String>,
    required: bool,
    translatable: bool,
    link_type: LinkType,
    title_enabled: bool,
) -> FieldDefinition {
    FieldDefinition::new(StorageType::Link, FormDisplay::new(Widget::LinkDefault))
        .with_label(label)
        .with_required(required)
        .with_translatable(translatable)
        .with_setting("link_type", link_type.flags())
        .with_setting("title", title_enabled)
        .form_configurable(true)
}

/// Create a reference to image media picked from the media library
pub fn create_field_media_image(label: impl Into<String>, required: bool) -> FieldDefinition {
    FieldDefinition::new(
        StorageType::EntityReference,
        FormDisplay::new(Widget::MediaLibraryWidget),
    )
    .with_label(label)
    .with_required(required)
    .with_setting("target_type", "media")
    .with_setting("handler", "default")
    .with_setting(
        "handler_settings",
        settings([("target_bundles", target_bundles(["image"]))]),
    )
    .with_view_display(ViewDisplay::new(
        LabelDisplay::Above,
        Formatter::EntityReferenceLabel,
    ))
    .form_configurable(true)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::DisplayConfigurable;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn all_kinds() -> Vec<FieldDefinition> {
        vec![
            create_field_textfield("Title", true, true),
            create_field_textarea("Summary", Some("Short summary"), false, true),
            create_field_formatted_textarea("Body", None, false, true),
            create_field_integer("Weight", false),
            create_field_list("Color", false, [("red", "Red")], false),
            create_field_image("Image", false, false, false),
            create_field_email("Contact", false),
            create_field_boolean("Published"),
            create_field_entity_reference("Author", "user", false),
            create_field_paragraph("Sections", ["text"], false, false),
            create_field_node_reference("Related", "node", "article", false),
            create_field_datetime("Date", false),
            create_field_link("Website", false, false, LinkType::Both, true),
            create_field_media_image("Hero", false),
        ]
    }

    #[test]
    fn test_factories_are_deterministic() {
        assert_eq!(all_kinds(), all_kinds());
    }

    #[test]
    fn test_view_display_absent_only_for_boolean_and_link() {
        for field in all_kinds() {
            let expect_view = !matches!(
                field.storage_type,
                StorageType::Boolean | StorageType::Link
            );
            assert_eq!(field.has_view_display(), expect_view, "{}", field.label);
            assert_eq!(
                field.display_configurable,
                DisplayConfigurable {
                    view: expect_view,
                    form: true
                },
                "{}",
                field.label
            );
        }
    }

    #[test]
    fn test_only_list_and_paragraph_are_multiple() {
        for field in all_kinds() {
            let expected = if field.storage_type == StorageType::EntityReferenceRevisions {
                Cardinality::Unlimited
            } else {
                Cardinality::Limited(1)
            };
            assert_eq!(field.cardinality, expected, "{}", field.label);
        }
        assert!(create_field_list("Tags", false, [("a", "A")], true).cardinality.is_multiple());
        assert!(!create_field_list("Tag", false, [("a", "A")], false).cardinality.is_multiple());
    }

    #[test]
    fn test_textfield() {
        let field = create_field_textfield("Title", true, false);
        assert_eq!(field.storage_type, StorageType::String);
        assert_eq!(field.label, "Title");
        assert!(field.required);
        assert_eq!(field.translatable, Some(false));
        assert_eq!(
            serde_json::to_value(&field.settings).unwrap(),
            json!({ "max_length": 254, "text_processing": 0 })
        );
        let view = field.view_display().unwrap();
        assert_eq!(view.label, LabelDisplay::Hidden);
        assert_eq!(view.formatter, Formatter::String);
        assert_eq!(field.form_display().widget, Widget::StringTextfield);
    }

    #[test]
    fn test_textarea_carries_description() {
        let field = create_field_textarea("Summary", Some("Shown in teasers"), false, true);
        assert_eq!(field.storage_type, StorageType::StringLong);
        assert_eq!(field.description.as_deref(), Some("Shown in teasers"));
        assert_eq!(field.view_display().unwrap().formatter, Formatter::StringLong);
        assert_eq!(
            serde_json::to_value(field.form_display()).unwrap(),
            json!({ "type": "string_long", "text_processing": 0 })
        );

        let without = create_field_textarea("Summary", None, false, true);
        assert!(without.description.is_none());
    }

    #[test]
    fn test_formatted_textarea() {
        let field = create_field_formatted_textarea("Body", None, true, true);
        assert_eq!(field.storage_type, StorageType::TextLong);
        assert_eq!(field.view_display().unwrap().formatter, Formatter::TextDefault);
        assert_eq!(field.form_display().widget, Widget::TextTextarea);
        assert_eq!(
            field.form_display().options.get("text_processing"),
            Some(&SettingValue::Int(0))
        );
    }

    #[test]
    fn test_integer() {
        let field = create_field_integer("Weight", true);
        assert_eq!(field.storage_type, StorageType::Integer);
        assert_eq!(field.default_value, Some(SettingValue::Int(0)));
        assert!(field.settings.is_empty());
        assert!(field.translatable.is_none());
        assert_eq!(
            serde_json::to_value(field.form_display()).unwrap(),
            json!({ "type": "string_textfield", "settings": { "display_label": true } })
        );
    }

    #[test]
    fn test_list_single() {
        let field = create_field_list(
            "Size",
            true,
            [("s", "Small"), ("m", "Medium"), ("l", "Large")],
            false,
        );
        assert_eq!(field.storage_type, StorageType::ListString);
        assert_eq!(field.cardinality, Cardinality::Limited(1));
        assert_eq!(field.form_display().widget, Widget::StringTextfield);

        let allowed = field.setting("allowed_values").unwrap().as_map().unwrap();
        let keys: Vec<_> = allowed.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["s", "m", "l"]);
        assert_eq!(allowed.get("m").and_then(SettingValue::as_str), Some("Medium"));
    }

    #[test]
    fn test_list_multiple() {
        let field = create_field_list("Tags", false, [("a", "A")], true);
        assert_eq!(field.cardinality, Cardinality::Unlimited);
        assert_eq!(field.form_display().widget, Widget::OptionsButtons);
    }

    #[test]
    fn test_image_plain() {
        let field = create_field_image("Image", false, false, false);
        assert_eq!(field.storage_type, StorageType::Image);
        assert_eq!(
            field.setting("file_extensions").and_then(SettingValue::as_str),
            Some("png jpg jpeg")
        );
        assert_eq!(field.form_display().widget, Widget::ImageImage);
        assert_eq!(field.form_display().label, Some(LabelDisplay::Hidden));
        for key in ["alt_field", "alt_field_required", "title_field", "title_field_required"] {
            assert_eq!(field.setting(key).and_then(SettingValue::as_bool), Some(false), "{key}");
        }
        let view = field.view_display().unwrap();
        assert_eq!(view.formatter, Formatter::ImageDefault);
        assert_eq!(view.weight, Some(0));
    }

    #[test]
    fn test_image_focal_point_and_webp() {
        let field = create_field_image("Image", true, true, true);
        assert_eq!(
            field.setting("file_extensions").and_then(SettingValue::as_str),
            Some("png jpg jpeg webp")
        );
        assert_eq!(field.form_display().widget, Widget::ImageFocalPoint);

        let webp_only = create_field_image("Image", true, false, true);
        assert_eq!(webp_only.form_display().widget, Widget::ImageImage);
    }

    #[test]
    fn test_email() {
        let field = create_field_email("Contact", false);
        assert_eq!(field.storage_type, StorageType::Email);
        assert!(!field.required);
        assert_eq!(field.setting("max_length"), Some(&SettingValue::Int(50)));
        assert_eq!(field.setting("text_processing"), Some(&SettingValue::Int(0)));
        assert_eq!(field.form_display().widget, Widget::EmailDefault);
        assert_eq!(field.view_display().unwrap().label, LabelDisplay::Inline);
    }

    #[test]
    fn test_boolean() {
        let field = create_field_boolean("Published");
        assert_eq!(field.storage_type, StorageType::Boolean);
        assert!(!field.required);
        assert!(field.view_display().is_none());
        assert_eq!(field.form_display().widget, Widget::BooleanCheckbox);
        assert_eq!(
            field.form_display().options.get("checked"),
            Some(&SettingValue::from("checked"))
        );
    }

    #[test]
    fn test_entity_reference() {
        let field = create_field_entity_reference("Author", "user", true);
        assert_eq!(field.storage_type, StorageType::EntityReference);
        assert!(field.required);
        assert_eq!(
            serde_json::to_value(&field.settings).unwrap(),
            json!({ "target_type": "user", "handler": "default" })
        );
        assert_eq!(field.view_display().unwrap().label, LabelDisplay::Above);
        assert_eq!(
            field.view_display().unwrap().formatter,
            Formatter::EntityReferenceLabel
        );
        assert_eq!(field.form_display().widget, Widget::OptionsSelect);
    }

    #[test]
    fn test_paragraph() {
        let field = create_field_paragraph("Sections", ["a", "b"], true, false);
        assert_eq!(field.storage_type, StorageType::EntityReferenceRevisions);
        assert_eq!(field.cardinality, Cardinality::Unlimited);
        assert!(field.required);
        assert_eq!(field.translatable, Some(false));
        assert_eq!(
            serde_json::to_value(&field.settings).unwrap(),
            json!({
                "target_type": "paragraph",
                "handler": "default:paragraph",
                "handler_settings": { "target_bundles": ["a", "b"], "negate": 0 }
            })
        );

        let form = field.form_display();
        assert_eq!(form.widget, Widget::EntityReferenceParagraphs);
        assert_eq!(form.settings.get("title"), Some(&SettingValue::from("Paragraph")));
        assert_eq!(
            form.settings.get("title_plural"),
            Some(&SettingValue::from("Paragraphs"))
        );
        assert_eq!(form.settings.get("edit_mode"), Some(&SettingValue::from("open")));
        assert_eq!(form.settings.get("add_mode"), Some(&SettingValue::from("dropdown")));
        assert_eq!(field.view_display().unwrap().formatter, Formatter::String);
    }

    #[test]
    fn test_paragraph_bundles_are_deduplicated_in_order() {
        let field = create_field_paragraph("Sections", ["b", "a", "b"], false, false);
        let bundles = field
            .setting("handler_settings")
            .and_then(|s| s.get("target_bundles"))
            .and_then(SettingValue::as_list)
            .unwrap();
        assert_eq!(bundles, &[SettingValue::from("b"), SettingValue::from("a")]);
    }

    #[test]
    fn test_node_reference() {
        let field = create_field_node_reference("Related", "node", "article", true);
        assert_eq!(field.storage_type, StorageType::EntityReference);
        assert!(field.required);
        assert_eq!(
            serde_json::to_value(&field.settings).unwrap(),
            json!({
                "target_type": "node",
                "handler": "default",
                "handler_settings": { "target_bundles": { "article": "article" } }
            })
        );
        assert_eq!(field.form_display().widget, Widget::OptionsSelect);
    }

    #[test]
    fn test_datetime() {
        let field = create_field_datetime("Date", true);
        assert_eq!(field.storage_type, StorageType::Datetime);
        assert_eq!(
            field.setting("datetime_type").and_then(SettingValue::as_str),
            Some("date")
        );
        let view = field.view_display().unwrap();
        assert_eq!(view.formatter, Formatter::DatetimeDefault);
        assert_eq!(
            view.settings.get("format_type"),
            Some(&SettingValue::from("medium"))
        );
        assert_eq!(field.form_display().widget, Widget::DatetimeDefault);
    }

    #[test]
    fn test_link() {
        let field = create_field_link("Website", true, true, LinkType::External, false);
        assert_eq!(field.storage_type, StorageType::Link);
        assert_eq!(field.translatable, Some(true));
        assert_eq!(
            serde_json::to_value(&field.settings).unwrap(),
            json!({ "link_type": 16, "title": false })
        );
        assert!(field.view_display().is_none());
        assert_eq!(field.form_display().widget, Widget::LinkDefault);
    }

    #[test]
    fn test_media_image() {
        let field = create_field_media_image("Hero", true);
        assert_eq!(field.storage_type, StorageType::EntityReference);
        assert_eq!(
            serde_json::to_value(&field.settings).unwrap(),
            json!({
                "target_type": "media",
                "handler": "default",
                "handler_settings": { "target_bundles": { "image": "image" } }
            })
        );
        assert_eq!(field.form_display().widget, Widget::MediaLibraryWidget);
        assert_eq!(
            field.view_display().unwrap().formatter,
            Formatter::EntityReferenceLabel
        );
    }

    #[test]
    fn test_invalid_inputs_are_carried_through() {
        let field = create_field_node_reference("", "no_such_type", "", false);
        assert_eq!(field.label, "");
        assert_eq!(
            field.setting("target_type").and_then(SettingValue::as_str),
            Some("no_such_type")
        );
    }
}
