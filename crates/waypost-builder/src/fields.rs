//! Field builders
//!
//! Thin constructors for the common field shapes. Each returns a [`Field`]
//! ready to hand to a page builder; option-bearing builders panic when given
//! an empty option list, since a choice control with nothing to choose is
//! always an authoring mistake.

use waypost_model::{Field, FieldOption, FieldType, RuleType, ValidationRule};

/// Standard message for email-format failures.
const EMAIL_FORMAT_MESSAGE: &str =
    "Enter an email address in the correct format, like name@example.com";

/// A single-line text input.
#[must_use]
pub fn text_input(name: impl Into<String>, label: impl Into<String>) -> Field {
    Field::new(name, FieldType::Text, label)
}

/// A multi-line text input.
#[must_use]
pub fn textarea_input(name: impl Into<String>, label: impl Into<String>) -> Field {
    Field::new(name, FieldType::Textarea, label)
}

/// An email input, pre-loaded with a format rule.
#[must_use]
pub fn email_input(name: impl Into<String>, label: impl Into<String>) -> Field {
    Field::new(name, FieldType::Email, label)
        .with_rule(ValidationRule::new(RuleType::Email, EMAIL_FORMAT_MESSAGE))
}

/// A numeric input.
#[must_use]
pub fn number_input(name: impl Into<String>, label: impl Into<String>) -> Field {
    Field::new(name, FieldType::Number, label)
}

/// A date input.
#[must_use]
pub fn date_input(name: impl Into<String>, label: impl Into<String>) -> Field {
    Field::new(name, FieldType::Date, label)
}

/// A file upload input.
#[must_use]
pub fn file_input(name: impl Into<String>, label: impl Into<String>) -> Field {
    Field::new(name, FieldType::File, label)
}

/// A radio button group.
///
/// # Panics
/// When `options` is empty.
#[must_use]
pub fn radio_input(
    name: impl Into<String>,
    label: impl Into<String>,
    options: Vec<FieldOption>,
) -> Field {
    assert!(!options.is_empty(), "Radio fields must have at least one option");
    Field::new(name, FieldType::Radios, label).with_options(options)
}

/// A checkbox group.
///
/// # Panics
/// When `options` is empty.
#[must_use]
pub fn checkbox_input(
    name: impl Into<String>,
    label: impl Into<String>,
    options: Vec<FieldOption>,
) -> Field {
    assert!(!options.is_empty(), "Checkbox fields must have at least one option");
    Field::new(name, FieldType::Checkboxes, label).with_options(options)
}

/// A drop-down select.
///
/// # Panics
/// When `options` is empty.
#[must_use]
pub fn select_input(
    name: impl Into<String>,
    label: impl Into<String>,
    options: Vec<FieldOption>,
) -> Field {
    assert!(!options.is_empty(), "Select fields must have at least one option");
    Field::new(name, FieldType::Select, label).with_options(options)
}
