//! Result-based validators for untrusted journey data
//!
//! Validation is data-facing and tolerant: it never panics on bad input and
//! collects every problem it can find rather than stopping at the first.
//! Each entry point runs two passes:
//!
//! 1. **Shape**: the JSON Schema derived from the model types (via
//!    `schemars`) is compiled once and run through `jsonschema`, catching
//!    missing/mistyped members with instance paths.
//! 2. **Invariants**: the rules a JSON Schema cannot express, such as name and key
//!    patterns, option uniqueness, rule parameters, registry constraints,
//!    and the three project-wide invariants (unique page ids, unique page
//!    keys, referential integrity of every page-id reference).
//!
//! The project-wide invariants surface as distinct, identifiable issues so a
//! caller can pinpoint which one failed.

use crate::condition::{Condition, MAX_DESCRIPTION_LEN};
use crate::field::{DefaultValue, Field};
use crate::page::Page;
use crate::project::Project;
use crate::registry::PageTypeRegistry;
use jsonschema::JSONSchema;
use once_cell::sync::Lazy;
use regex::Regex;
use schemars::schema_for;
use serde_json::Value;
use std::collections::{HashMap, HashSet};

/// One validation problem: where, and what.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Path into the candidate document (member names and indices)
    pub path: Vec<String>,
    /// Human-readable description
    pub message: String,
}

impl ValidationIssue {
    fn new(path: Vec<String>, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path.join("/"), self.message)
        }
    }
}

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-zA-Z][a-zA-Z0-9_-]*$").expect("field name pattern compiles"));
static KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[a-z0-9]+(-[a-z0-9]+)*$").expect("page key pattern compiles"));
static PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new("^/[a-z0-9]+(-[a-z0-9]+)*$").expect("page path pattern compiles"));

static FIELD_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| compile_schema(schema_for!(Field)));
static PAGE_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| compile_schema(schema_for!(Page)));
static PROJECT_SCHEMA: Lazy<JSONSchema> = Lazy::new(|| compile_schema(schema_for!(Project)));

fn compile_schema(schema: schemars::schema::RootSchema) -> JSONSchema {
    let value = serde_json::to_value(schema).expect("derived schema serializes");
    JSONSchema::compile(&value).expect("derived schema compiles")
}

fn schema_issues(schema: &JSONSchema, candidate: &Value) -> Vec<ValidationIssue> {
    match schema.validate(candidate) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| {
                let path = error
                    .instance_path
                    .to_string()
                    .split('/')
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect();
                ValidationIssue::new(path, error.to_string())
            })
            .collect(),
    }
}

fn deserialize<T: serde::de::DeserializeOwned>(candidate: &Value) -> Result<T, Vec<ValidationIssue>> {
    serde_json::from_value(candidate.clone())
        .map_err(|e| vec![ValidationIssue::new(Vec::new(), format!("malformed document: {e}"))])
}

fn child(base: &[String], tail: &[&str]) -> Vec<String> {
    base.iter()
        .cloned()
        .chain(tail.iter().map(ToString::to_string))
        .collect()
}

/// Validate a candidate field document.
///
/// # Errors
/// Returns every [`ValidationIssue`] found; never panics on bad input.
pub fn validate_field(candidate: &Value) -> Result<Field, Vec<ValidationIssue>> {
    let issues = schema_issues(&FIELD_SCHEMA, candidate);
    if !issues.is_empty() {
        return Err(issues);
    }
    let field: Field = deserialize(candidate)?;
    let mut issues = Vec::new();
    check_field(&field, &[], &mut issues);
    if issues.is_empty() {
        Ok(field)
    } else {
        Err(issues)
    }
}

/// Validate a candidate page document against the registry's rules.
///
/// Referential integrity of `nextPageId` and condition targets needs the
/// owning project and is checked by [`validate_project`], not here.
///
/// # Errors
/// Returns every [`ValidationIssue`] found; never panics on bad input.
pub fn validate_page(
    candidate: &Value,
    registry: &PageTypeRegistry,
) -> Result<Page, Vec<ValidationIssue>> {
    let issues = schema_issues(&PAGE_SCHEMA, candidate);
    if !issues.is_empty() {
        return Err(issues);
    }
    let page: Page = deserialize(candidate)?;
    let mut issues = Vec::new();
    check_page(&page, registry, &[], &mut issues);
    if issues.is_empty() {
        Ok(page)
    } else {
        Err(issues)
    }
}

/// Validate a candidate project document: shape, per-entity invariants, and
/// the three project-wide invariants.
///
/// # Errors
/// Returns every [`ValidationIssue`] found; never panics on bad input.
pub fn validate_project(
    candidate: &Value,
    registry: &PageTypeRegistry,
) -> Result<Project, Vec<ValidationIssue>> {
    let issues = schema_issues(&PROJECT_SCHEMA, candidate);
    if !issues.is_empty() {
        return Err(issues);
    }
    let project: Project = deserialize(candidate)?;
    let mut issues = Vec::new();

    if project.settings.service_name.trim().is_empty() {
        issues.push(ValidationIssue::new(
            child(&[], &["settings", "serviceName"]),
            "service name must not be empty",
        ));
    }

    for (index, page) in project.pages.iter().enumerate() {
        let base = child(&[], &["pages", &index.to_string()]);
        check_page(page, registry, &base, &mut issues);
    }

    check_unique_page_ids(&project, &mut issues);
    check_unique_page_keys(&project, &mut issues);
    check_referential_integrity(&project, &mut issues);

    if issues.is_empty() {
        Ok(project)
    } else {
        Err(issues)
    }
}

fn check_field(field: &Field, base: &[String], issues: &mut Vec<ValidationIssue>) {
    if !NAME_RE.is_match(&field.name) {
        issues.push(ValidationIssue::new(
            child(base, &["name"]),
            format!(
                "field name '{}' must start with a letter and contain only letters, digits, hyphens, and underscores",
                field.name
            ),
        ));
    }

    if field.label.trim().is_empty() {
        issues.push(ValidationIssue::new(
            child(base, &["label"]),
            "field label must not be empty",
        ));
    }

    if field.field_type.is_option_bearing() && field.options.is_empty() {
        issues.push(ValidationIssue::new(
            child(base, &["options"]),
            format!("{} fields must have at least one option", field.field_type),
        ));
    }

    let mut seen_values = HashSet::new();
    for (index, option) in field.options.iter().enumerate() {
        if !seen_values.insert(option.value.as_str()) {
            issues.push(ValidationIssue::new(
                child(base, &["options", &index.to_string(), "value"]),
                format!("duplicate option value: {}", option.value),
            ));
        }
    }

    for (index, rule) in field.validation.iter().enumerate() {
        let rule_base = child(base, &["validation", &index.to_string()]);
        if rule.message.trim().is_empty() {
            issues.push(ValidationIssue::new(
                child(&rule_base, &["message"]),
                "validation rule message must not be empty",
            ));
        }
        if rule.rule.requires_numeric_value() && !matches!(rule.value, Some(Value::Number(_))) {
            issues.push(ValidationIssue::new(
                child(&rule_base, &["value"]),
                format!("{} rule requires a numeric value", rule.rule),
            ));
        }
        if rule.rule.requires_string_value() {
            match &rule.value {
                Some(Value::String(pattern)) => {
                    if let Err(e) = Regex::new(pattern) {
                        issues.push(ValidationIssue::new(
                            child(&rule_base, &["value"]),
                            format!("pattern rule value is not a valid regular expression: {e}"),
                        ));
                    }
                }
                _ => issues.push(ValidationIssue::new(
                    child(&rule_base, &["value"]),
                    "pattern rule requires a string value",
                )),
            }
        }
    }

    match (&field.default_value, field.field_type.is_multi_valued()) {
        (Some(DefaultValue::Single(_)), true) => issues.push(ValidationIssue::new(
            child(base, &["defaultValue"]),
            format!("{} fields take a list default value", field.field_type),
        )),
        (Some(DefaultValue::Multi(_)), false) => issues.push(ValidationIssue::new(
            child(base, &["defaultValue"]),
            format!("{} fields take a single default value", field.field_type),
        )),
        _ => {}
    }
}

fn check_condition(condition: &Condition, base: &[String], issues: &mut Vec<ValidationIssue>) {
    if condition.to_page_id.trim().is_empty() {
        issues.push(ValidationIssue::new(
            child(base, &["toPageId"]),
            "condition target page id must not be empty",
        ));
    }

    if let Err(syntax_issues) = waypost_logic::check_syntax(&condition.expression) {
        for issue in syntax_issues {
            let mut path = child(base, &["expression"]);
            path.extend(issue.path.split('/').filter(|s| !s.is_empty()).map(String::from));
            issues.push(ValidationIssue::new(path, issue.message));
        }
    }

    if let Some(description) = &condition.description {
        if description.chars().count() > MAX_DESCRIPTION_LEN {
            issues.push(ValidationIssue::new(
                child(base, &["description"]),
                format!("condition description exceeds {MAX_DESCRIPTION_LEN} characters"),
            ));
        }
    }
}

fn check_page(page: &Page, registry: &PageTypeRegistry, base: &[String], issues: &mut Vec<ValidationIssue>) {
    if !KEY_RE.is_match(&page.key) {
        issues.push(ValidationIssue::new(
            child(base, &["key"]),
            format!("page key '{}' must be lowercase kebab-case", page.key),
        ));
    }

    if !PATH_RE.is_match(&page.path) {
        issues.push(ValidationIssue::new(
            child(base, &["path"]),
            format!("page path '{}' must be a '/'-prefixed kebab-case path", page.path),
        ));
    }

    if page.title.trim().is_empty() {
        issues.push(ValidationIssue::new(
            child(base, &["title"]),
            "page title must not be empty",
        ));
    }

    let rule = registry.rule(page.page_type);

    if rule.can_have_fields {
        if page.fields.len() < rule.constraints.min_fields {
            issues.push(ValidationIssue::new(
                child(base, &["fields"]),
                format!(
                    "{} pages must have at least {} field(s)",
                    rule.display_name, rule.constraints.min_fields
                ),
            ));
        }
        if page.fields.len() > rule.constraints.max_fields {
            issues.push(ValidationIssue::new(
                child(base, &["fields"]),
                format!(
                    "{} pages allow at most {} fields",
                    rule.display_name, rule.constraints.max_fields
                ),
            ));
        }
        for (index, field) in page.fields.iter().enumerate() {
            if !registry.is_field_type_allowed(page.page_type, field.field_type) {
                issues.push(ValidationIssue::new(
                    child(base, &["fields", &index.to_string(), "type"]),
                    format!(
                        "field type '{}' is not allowed on {} pages",
                        field.field_type, page.page_type
                    ),
                ));
            }
        }
    } else if !page.fields.is_empty() {
        issues.push(ValidationIssue::new(
            child(base, &["fields"]),
            format!("{} pages must not have fields", rule.display_name),
        ));
    }

    let mut seen_names = HashSet::new();
    for (index, field) in page.fields.iter().enumerate() {
        if !seen_names.insert(field.name.as_str()) {
            issues.push(ValidationIssue::new(
                child(base, &["fields", &index.to_string(), "name"]),
                format!("duplicate field name: {}", field.name),
            ));
        }
        check_field(field, &child(base, &["fields", &index.to_string()]), issues);
    }

    let content_len = page.content.as_deref().map_or(0, |c| c.trim().len());
    if rule.requires_content && content_len == 0 {
        issues.push(ValidationIssue::new(
            child(base, &["content"]),
            format!("{} pages must have content", rule.display_name),
        ));
    }
    if content_len > rule.constraints.max_content_length {
        issues.push(ValidationIssue::new(
            child(base, &["content"]),
            format!(
                "page content exceeds {} characters",
                rule.constraints.max_content_length
            ),
        ));
    }

    if rule.constraints.requires_next_page && page.next_page_id.is_none() {
        issues.push(ValidationIssue::new(
            child(base, &["nextPageId"]),
            format!("{} pages must have a next page ID", rule.display_name),
        ));
    }

    for (index, condition) in page.conditions.iter().enumerate() {
        check_condition(condition, &child(base, &["conditions", &index.to_string()]), issues);
    }
}

fn check_unique_page_ids(project: &Project, issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, page) in project.pages.iter().enumerate() {
        if seen.insert(page.id.as_str(), index).is_some() {
            issues.push(ValidationIssue::new(
                child(&[], &["pages", &index.to_string(), "id"]),
                format!("duplicate page id: {}", page.id),
            ));
        }
    }
}

fn check_unique_page_keys(project: &Project, issues: &mut Vec<ValidationIssue>) {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (index, page) in project.pages.iter().enumerate() {
        if seen.insert(page.key.as_str(), index).is_some() {
            issues.push(ValidationIssue::new(
                child(&[], &["pages", &index.to_string(), "key"]),
                format!("duplicate page key: {}", page.key),
            ));
        }
    }
}

fn check_referential_integrity(project: &Project, issues: &mut Vec<ValidationIssue>) {
    let known_ids: HashSet<&str> = project.pages.iter().map(|p| p.id.as_str()).collect();

    for (page_index, page) in project.pages.iter().enumerate() {
        if let Some(next) = &page.next_page_id {
            if !known_ids.contains(next.as_str()) {
                issues.push(ValidationIssue::new(
                    child(&[], &["pages", &page_index.to_string(), "nextPageId"]),
                    format!("nextPageId references unknown page id: {next}"),
                ));
            }
        }
        for (condition_index, condition) in page.conditions.iter().enumerate() {
            if !known_ids.contains(condition.to_page_id.as_str()) {
                issues.push(ValidationIssue::new(
                    child(
                        &[],
                        &[
                            "pages",
                            &page_index.to_string(),
                            "conditions",
                            &condition_index.to_string(),
                            "toPageId",
                        ],
                    ),
                    format!("toPageId references unknown page id: {}", condition.to_page_id),
                ));
            }
        }
    }
}
