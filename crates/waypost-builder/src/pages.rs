//! Page builders
//!
//! One builder per page type, all working from a shared [`PageOptions`] bag.
//! Builders derive the key from the title when no explicit key is given,
//! derive the path from the key, and panic with a descriptive message the
//! moment a structural invariant is violated. Callers own this data and are
//! expected to have shaped it correctly.

use crate::slug::{generate_key, generate_path};
use waypost_model::{Condition, Field, Page, PageMetadata, PageType, PageTypeRegistry};

/// Options bag shared by every page builder.
#[derive(Debug, Clone, Default)]
pub struct PageOptions {
    /// Page title (required)
    pub title: String,
    /// Explicit key; derived from the title when absent
    pub key: Option<String>,
    /// Optional heading distinct from the title
    pub heading: Option<String>,
    /// Page content
    pub content: Option<String>,
    /// Form fields (question pages)
    pub fields: Vec<Field>,
    /// Default successor page id
    pub next_page_id: Option<String>,
    /// Guarded routing edges
    pub conditions: Vec<Condition>,
    /// Non-structural metadata
    pub metadata: PageMetadata,
}

impl PageOptions {
    /// Options with just a title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// With an explicit key
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// With a heading
    #[must_use]
    pub fn with_heading(mut self, heading: impl Into<String>) -> Self {
        self.heading = Some(heading.into());
        self
    }

    /// With page content
    #[must_use]
    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Append a field
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Replace the field list
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    /// With a default successor
    #[must_use]
    pub fn with_next_page(mut self, next_page_id: impl Into<String>) -> Self {
        self.next_page_id = Some(next_page_id.into());
        self
    }

    /// Append a condition
    #[must_use]
    pub fn with_condition(mut self, condition: Condition) -> Self {
        self.conditions.push(condition);
        self
    }

    /// With metadata
    #[must_use]
    pub fn with_metadata(mut self, metadata: PageMetadata) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Page builders, parameterized by the registry whose rules they enforce.
#[derive(Debug, Clone, Copy)]
pub struct PageBuilders<'r> {
    registry: &'r PageTypeRegistry,
}

impl<'r> PageBuilders<'r> {
    /// Builders backed by the given registry.
    #[must_use]
    pub fn new(registry: &'r PageTypeRegistry) -> Self {
        Self { registry }
    }

    /// Build a start page.
    ///
    /// # Panics
    /// When content is empty or fields are supplied.
    #[must_use]
    pub fn start(&self, options: PageOptions) -> Page {
        self.build(PageType::Start, options)
    }

    /// Build a content page.
    ///
    /// # Panics
    /// When content is empty or fields are supplied.
    #[must_use]
    pub fn content(&self, options: PageOptions) -> Page {
        self.build(PageType::Content, options)
    }

    /// Build a question page.
    ///
    /// # Panics
    /// When the field list is empty, exceeds the registry's maximum, or
    /// contains a field type the registry does not allow on question pages.
    #[must_use]
    pub fn question(&self, options: PageOptions) -> Page {
        self.build(PageType::Question, options)
    }

    /// Build a task-list page.
    ///
    /// # Panics
    /// When fields are supplied.
    #[must_use]
    pub fn task_list(&self, options: PageOptions) -> Page {
        self.build(PageType::TaskList, options)
    }

    /// Build a check-answers page.
    ///
    /// # Panics
    /// When no next page id is given or fields are supplied.
    #[must_use]
    pub fn check_answers(&self, options: PageOptions) -> Page {
        self.build(PageType::CheckAnswers, options)
    }

    /// Build a confirmation page.
    ///
    /// # Panics
    /// When content is empty or fields are supplied.
    #[must_use]
    pub fn confirmation(&self, options: PageOptions) -> Page {
        self.build(PageType::Confirmation, options)
    }

    /// Build a page of the given type.
    ///
    /// # Panics
    /// As the type-specific builders do.
    #[must_use]
    pub fn create_page(&self, page_type: PageType, options: PageOptions) -> Page {
        self.build(page_type, options)
    }

    /// Build a page from a type name, as supplied by an editor.
    ///
    /// # Panics
    /// With `Unknown page type: X` for names outside the fixed set, then as
    /// the type-specific builders do.
    #[must_use]
    pub fn create_page_named(&self, type_name: &str, options: PageOptions) -> Page {
        match type_name.parse::<PageType>() {
            Ok(page_type) => self.build(page_type, options),
            Err(err) => panic!("{err}"),
        }
    }

    fn build(&self, page_type: PageType, options: PageOptions) -> Page {
        let rule = self.registry.rule(page_type);

        if rule.requires_content
            && options.content.as_deref().map_or(true, |c| c.trim().is_empty())
        {
            panic!("{} pages must have content", rule.display_name);
        }

        if rule.can_have_fields {
            if options.fields.is_empty() {
                panic!("{} pages must have at least one field", rule.display_name);
            }
            assert!(
                options.fields.len() <= rule.constraints.max_fields,
                "{} pages allow at most {} fields",
                rule.display_name,
                rule.constraints.max_fields
            );
            for field in &options.fields {
                assert!(
                    self.registry.is_field_type_allowed(page_type, field.field_type),
                    "Field type '{}' is not allowed on {} pages",
                    field.field_type,
                    page_type
                );
            }
        } else {
            assert!(
                options.fields.is_empty(),
                "{} pages must not have fields",
                rule.display_name
            );
        }

        if rule.constraints.requires_next_page && options.next_page_id.is_none() {
            panic!("{} pages must have a next page ID", rule.display_name);
        }

        let key = options
            .key
            .unwrap_or_else(|| generate_key(&options.title));
        assert!(!key.is_empty(), "{} pages must have a title or key", rule.display_name);
        let path = generate_path(&key);

        Page {
            id: waypost_model::new_id(),
            key,
            page_type,
            path,
            title: options.title,
            heading: options.heading,
            content: options.content,
            fields: options.fields,
            next_page_id: options.next_page_id,
            conditions: options.conditions,
            metadata: options.metadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields;
    use pretty_assertions::assert_eq;
    use waypost_model::FieldType;

    fn builders(registry: &PageTypeRegistry) -> PageBuilders<'_> {
        PageBuilders::new(registry)
    }

    #[test]
    fn question_page_derives_key_and_path() {
        let registry = PageTypeRegistry::new();
        let page = builders(&registry).question(
            PageOptions::new("What is your name?")
                .with_field(fields::text_input("full-name", "Full name")),
        );

        assert_eq!(page.page_type, PageType::Question);
        assert_eq!(page.key, "what-is-your-name");
        assert_eq!(page.path, "/what-is-your-name");
        assert_eq!(page.fields.len(), 1);
        assert!(!page.id.is_empty());
    }

    #[test]
    fn explicit_key_wins_over_derivation() {
        let registry = PageTypeRegistry::new();
        let page = builders(&registry).content(
            PageOptions::new("A very long editorial title")
                .with_key("guidance")
                .with_content("Some guidance."),
        );
        assert_eq!(page.key, "guidance");
        assert_eq!(page.path, "/guidance");
    }

    #[test]
    #[should_panic(expected = "Question pages must have at least one field")]
    fn question_page_requires_fields() {
        let registry = PageTypeRegistry::new();
        let _ = builders(&registry).question(PageOptions::new("X"));
    }

    #[test]
    #[should_panic(expected = "Field type 'hidden' is not allowed on question pages")]
    fn question_page_rejects_disallowed_field_type() {
        let registry = PageTypeRegistry::new();
        let hidden = waypost_model::Field::new("token", FieldType::Hidden, "Token");
        let _ = builders(&registry).question(PageOptions::new("X").with_field(hidden));
    }

    #[test]
    #[should_panic(expected = "Question pages allow at most 10 fields")]
    fn question_page_enforces_field_maximum() {
        let registry = PageTypeRegistry::new();
        let mut options = PageOptions::new("Big form");
        for i in 0..11 {
            options = options.with_field(fields::text_input(format!("q{i}"), format!("Q{i}")));
        }
        let _ = builders(&registry).question(options);
    }

    #[test]
    #[should_panic(expected = "Start pages must have content")]
    fn start_page_requires_content() {
        let registry = PageTypeRegistry::new();
        let _ = builders(&registry).start(PageOptions::new("Apply for a licence"));
    }

    #[test]
    #[should_panic(expected = "Confirmation pages must have content")]
    fn confirmation_page_requires_content() {
        let registry = PageTypeRegistry::new();
        let _ = builders(&registry).confirmation(PageOptions::new("Done").with_content("   "));
    }

    #[test]
    #[should_panic(expected = "Check answers pages must have a next page ID")]
    fn check_answers_requires_next_page() {
        let registry = PageTypeRegistry::new();
        let _ = builders(&registry).check_answers(PageOptions::new("Check your answers"));
    }

    #[test]
    #[should_panic(expected = "Start pages must not have fields")]
    fn start_page_rejects_fields() {
        let registry = PageTypeRegistry::new();
        let _ = builders(&registry).start(
            PageOptions::new("Start")
                .with_content("Welcome")
                .with_field(fields::text_input("x", "X")),
        );
    }

    #[test]
    fn built_page_has_camel_case_wire_shape() {
        let registry = PageTypeRegistry::new();
        let page = builders(&registry).question(
            PageOptions::new("Are you eligible?")
                .with_field(fields::text_input("eligible", "Are you eligible?"))
                .with_condition(Condition::new(
                    waypost_logic::helpers::equals("eligible", "yes"),
                    "p-yes",
                ))
                .with_next_page("p-no"),
        );

        let value = serde_json::to_value(&page).unwrap();
        assert_eq!(value["type"], serde_json::json!("question"));
        assert_eq!(value["path"], serde_json::json!("/are-you-eligible"));
        assert_eq!(value["nextPageId"], serde_json::json!("p-no"));
        assert_eq!(value["conditions"][0]["toPageId"], serde_json::json!("p-yes"));

        // the attached condition is live, not just carried along
        assert!(waypost_logic::evaluate_condition(
            &page.conditions[0].expression,
            &serde_json::json!({"eligible": "yes"}),
        ));
    }

    #[test]
    fn create_page_dispatches_by_type() {
        let registry = PageTypeRegistry::new();
        let page = builders(&registry).create_page(
            PageType::TaskList,
            PageOptions::new("Your application"),
        );
        assert_eq!(page.page_type, PageType::TaskList);
    }

    #[test]
    fn create_page_named_parses_kebab_names() {
        let registry = PageTypeRegistry::new();
        let page = builders(&registry).create_page_named(
            "check-answers",
            PageOptions::new("Check your answers").with_next_page("p-done"),
        );
        assert_eq!(page.page_type, PageType::CheckAnswers);
    }

    #[test]
    #[should_panic(expected = "Unknown page type: wizard")]
    fn create_page_named_rejects_unknown_types() {
        let registry = PageTypeRegistry::new();
        let _ = builders(&registry).create_page_named("wizard", PageOptions::new("X"));
    }
}
