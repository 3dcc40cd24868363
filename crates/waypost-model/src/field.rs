//! Form field model
//!
//! Fields are owned by question pages. A field is immutable once validated;
//! updates go through the owning page's operations.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// The supported form field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Textarea,
    /// Email address input
    Email,
    /// Telephone number input
    Tel,
    /// Password input
    Password,
    /// Numeric input
    Number,
    /// Date input
    Date,
    /// Radio button group (single choice)
    Radios,
    /// Checkbox group (multiple choice)
    Checkboxes,
    /// Drop-down select
    Select,
    /// File upload
    File,
    /// Hidden input
    Hidden,
}

impl FieldType {
    /// Wire name of this field type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Password => "password",
            Self::Number => "number",
            Self::Date => "date",
            Self::Radios => "radios",
            Self::Checkboxes => "checkboxes",
            Self::Select => "select",
            Self::File => "file",
            Self::Hidden => "hidden",
        }
    }

    /// Whether this type renders a fixed option list.
    #[inline]
    #[must_use]
    pub fn is_option_bearing(self) -> bool {
        matches!(self, Self::Radios | Self::Checkboxes | Self::Select)
    }

    /// Whether answers to this type are lists rather than single values.
    #[inline]
    #[must_use]
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::Checkboxes)
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a radios/checkboxes/select option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FieldOption {
    /// Submitted value
    pub value: String,
    /// Displayed text
    pub text: String,
    /// Optional hint shown under the option
    #[serde(default)]
    pub hint: Option<String>,
    /// Whether the option is disabled
    #[serde(default)]
    pub disabled: bool,
    /// Whether the option is pre-selected
    #[serde(default)]
    pub selected: bool,
}

impl FieldOption {
    /// Create an option with matching value and text.
    #[must_use]
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            text: text.into(),
            hint: None,
            disabled: false,
            selected: false,
        }
    }

    /// With a hint under the option
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// The kinds of validation rule a field can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub enum RuleType {
    /// Answer must be present
    Required,
    /// Minimum answer length
    MinLength,
    /// Maximum answer length
    MaxLength,
    /// Minimum numeric value
    Min,
    /// Maximum numeric value
    Max,
    /// Answer must match a regular expression
    Pattern,
    /// Answer must look like an email address
    Email,
}

impl RuleType {
    /// Wire name of this rule type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::MinLength => "minLength",
            Self::MaxLength => "maxLength",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pattern => "pattern",
            Self::Email => "email",
        }
    }

    /// Whether this rule needs a numeric parameter.
    #[inline]
    #[must_use]
    pub fn requires_numeric_value(self) -> bool {
        matches!(self, Self::MinLength | Self::MaxLength | Self::Min | Self::Max)
    }

    /// Whether this rule needs a string parameter.
    #[inline]
    #[must_use]
    pub fn requires_string_value(self) -> bool {
        matches!(self, Self::Pattern)
    }
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single validation rule: a type, an optional parameter, and the message
/// shown when the rule fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ValidationRule {
    /// Rule type
    #[serde(rename = "type")]
    pub rule: RuleType,
    /// Rule parameter (numeric for length/bound rules, string for pattern)
    #[serde(default)]
    pub value: Option<Value>,
    /// Message shown to the user when the rule fails
    pub message: String,
}

impl ValidationRule {
    /// Create a parameterless rule.
    #[must_use]
    pub fn new(rule: RuleType, message: impl Into<String>) -> Self {
        Self {
            rule,
            value: None,
            message: message.into(),
        }
    }

    /// Create a rule with a parameter.
    #[must_use]
    pub fn with_value(rule: RuleType, value: impl Into<Value>, message: impl Into<String>) -> Self {
        Self {
            rule,
            value: Some(value.into()),
            message: message.into(),
        }
    }
}

/// A field's default answer: a single value, or a list for checkbox fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum DefaultValue {
    /// Default for single-valued fields
    Single(String),
    /// Default for multi-valued (checkboxes) fields
    Multi(Vec<String>),
}

/// A form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Unique id, generated when the field is created
    pub id: String,
    /// Identifier-safe name, unique within the owning page
    pub name: String,
    /// Field type
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Visible label
    pub label: String,
    /// Optional hint text
    #[serde(default)]
    pub hint: Option<String>,
    /// Whether an answer is required
    #[serde(default)]
    pub required: bool,
    /// Validation rules, applied in order
    #[serde(default)]
    pub validation: Vec<ValidationRule>,
    /// Option list (required for radios/checkboxes/select)
    #[serde(default)]
    pub options: Vec<FieldOption>,
    /// Default answer
    #[serde(default)]
    pub default_value: Option<DefaultValue>,
    /// Cosmetic CSS classes
    #[serde(default)]
    pub classes: Option<String>,
    /// Cosmetic extra attributes
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

impl Field {
    /// Create a field with a fresh id and no extras.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: crate::new_id(),
            name: name.into(),
            field_type,
            label: label.into(),
            hint: None,
            required: false,
            validation: Vec::new(),
            options: Vec::new(),
            default_value: None,
            classes: None,
            attributes: BTreeMap::new(),
        }
    }

    /// With hint text
    #[must_use]
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Mark the field required
    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Append a validation rule
    #[must_use]
    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.validation.push(rule);
        self
    }

    /// Replace the option list
    #[must_use]
    pub fn with_options(mut self, options: Vec<FieldOption>) -> Self {
        self.options = options;
        self
    }

    /// Set the default answer
    #[must_use]
    pub fn with_default(mut self, default: DefaultValue) -> Self {
        self.default_value = Some(default);
        self
    }

    /// Set cosmetic CSS classes
    #[must_use]
    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    /// Add a cosmetic attribute
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn field_type_classification() {
        assert!(FieldType::Radios.is_option_bearing());
        assert!(FieldType::Select.is_option_bearing());
        assert!(!FieldType::Text.is_option_bearing());
        assert!(FieldType::Checkboxes.is_multi_valued());
        assert!(!FieldType::Radios.is_multi_valued());
    }

    #[test]
    fn rule_parameter_requirements() {
        assert!(RuleType::MinLength.requires_numeric_value());
        assert!(RuleType::Max.requires_numeric_value());
        assert!(!RuleType::Required.requires_numeric_value());
        assert!(RuleType::Pattern.requires_string_value());
        assert!(!RuleType::Email.requires_string_value());
    }

    #[test]
    fn field_builder_chain() {
        let field = Field::new("first-name", FieldType::Text, "First name")
            .with_hint("As shown on your passport")
            .with_required(true)
            .with_rule(ValidationRule::with_value(
                RuleType::MaxLength,
                100,
                "First name must be 100 characters or fewer",
            ));

        assert_eq!(field.name, "first-name");
        assert!(field.required);
        assert_eq!(field.validation.len(), 1);
        assert!(!field.id.is_empty());
    }

    #[test]
    fn field_serializes_camel_case() {
        let field = Field::new("nino", FieldType::Text, "National Insurance number")
            .with_default(DefaultValue::Single("QQ123456C".to_string()));
        let value = serde_json::to_value(&field).unwrap();

        assert_eq!(value["type"], json!("text"));
        assert_eq!(value["defaultValue"], json!("QQ123456C"));
    }

    #[test]
    fn default_value_untagged_round_trip() {
        let single: DefaultValue = serde_json::from_value(json!("yes")).unwrap();
        assert_eq!(single, DefaultValue::Single("yes".to_string()));

        let multi: DefaultValue = serde_json::from_value(json!(["a", "b"])).unwrap();
        assert_eq!(multi, DefaultValue::Multi(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn field_deserializes_with_defaults() {
        let field: Field = serde_json::from_value(json!({
            "id": "f1",
            "name": "email",
            "type": "email",
            "label": "Email address"
        }))
        .unwrap();

        assert_eq!(field.field_type, FieldType::Email);
        assert!(!field.required);
        assert!(field.validation.is_empty());
        assert!(field.options.is_empty());
    }
}
