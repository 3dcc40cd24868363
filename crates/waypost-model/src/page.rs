//! Page model
//!
//! Pages come in six fixed types, each with structural constraints described
//! by the [`crate::PageTypeRegistry`]. A page is owned exclusively by its
//! project; fields and conditions are updated through the page's own
//! operations.

use crate::condition::Condition;
use crate::field::Field;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six page types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    /// Service landing page with a start call to action
    Start,
    /// Static content page
    Content,
    /// Form page collecting answers
    Question,
    /// Task list overview page
    TaskList,
    /// Check-your-answers summary page
    CheckAnswers,
    /// End-of-journey confirmation page
    Confirmation,
}

impl PageType {
    /// Wire name of this page type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Content => "content",
            Self::Question => "question",
            Self::TaskList => "task-list",
            Self::CheckAnswers => "check-answers",
            Self::Confirmation => "confirmation",
        }
    }

    /// All page types, in registry order.
    #[must_use]
    pub fn all() -> [PageType; 6] {
        [
            Self::Start,
            Self::Content,
            Self::Question,
            Self::TaskList,
            Self::CheckAnswers,
            Self::Confirmation,
        ]
    }
}

impl std::fmt::Display for PageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for page-type names outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown page type: {0}")]
pub struct UnknownPageType(
    /// The rejected name
    pub String,
);

impl FromStr for PageType {
    type Err = UnknownPageType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "content" => Ok(Self::Content),
            "question" => Ok(Self::Question),
            "task-list" => Ok(Self::TaskList),
            "check-answers" => Ok(Self::CheckAnswers),
            "confirmation" => Ok(Self::Confirmation),
            other => Err(UnknownPageType(other.to_string())),
        }
    }
}

/// Non-structural page metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Whether the page sits behind authentication
    #[serde(default)]
    pub requires_auth: bool,
    /// SEO description
    #[serde(default)]
    pub seo_description: Option<String>,
    /// Cosmetic CSS classes
    #[serde(default)]
    pub css_classes: Option<String>,
}

/// A journey page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Unique id, generated when the page is created
    pub id: String,
    /// Lowercase kebab-case key, unique within the project, used for URLs
    pub key: String,
    /// Page type
    #[serde(rename = "type")]
    pub page_type: PageType,
    /// URL path, `/`-prefixed kebab-case
    pub path: String,
    /// Page title
    pub title: String,
    /// Optional heading distinct from the title
    #[serde(default)]
    pub heading: Option<String>,
    /// Markdown/HTML content (required for start, content, confirmation pages)
    #[serde(default)]
    pub content: Option<String>,
    /// Form fields (question pages only)
    #[serde(default)]
    pub fields: Vec<Field>,
    /// Default successor page id
    #[serde(default)]
    pub next_page_id: Option<String>,
    /// Guarded routing edges, evaluated first-match-wins in list order
    #[serde(default)]
    pub conditions: Vec<Condition>,
    /// Non-structural metadata
    #[serde(default)]
    pub metadata: PageMetadata,
}

impl Page {
    /// Look up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Append a field.
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Remove a field by name, returning it when present.
    pub fn remove_field(&mut self, name: &str) -> Option<Field> {
        let index = self.fields.iter().position(|f| f.name == name)?;
        Some(self.fields.remove(index))
    }

    /// Replace the condition list wholesale (conditions are never mutated in
    /// place once created).
    pub fn set_conditions(&mut self, conditions: Vec<Condition>) {
        self.conditions = conditions;
    }

    /// Set the default successor.
    pub fn set_next_page(&mut self, next_page_id: Option<String>) {
        self.next_page_id = next_page_id;
    }

    /// Whether this page has no outgoing edges.
    ///
    /// Terminal pages are a convention (usually confirmation pages), not an
    /// enforced invariant: any page may carry outgoing edges.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.next_page_id.is_none() && self.conditions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn bare_page(page_type: PageType, key: &str) -> Page {
        Page {
            id: crate::new_id(),
            key: key.to_string(),
            page_type,
            path: format!("/{key}"),
            title: key.to_string(),
            heading: None,
            content: None,
            fields: Vec::new(),
            next_page_id: None,
            conditions: Vec::new(),
            metadata: PageMetadata::default(),
        }
    }

    #[test]
    fn page_type_round_trip() {
        for page_type in PageType::all() {
            assert_eq!(page_type.as_str().parse::<PageType>().unwrap(), page_type);
        }
    }

    #[test]
    fn page_type_kebab_wire_names() {
        assert_eq!(serde_json::to_value(PageType::CheckAnswers).unwrap(), json!("check-answers"));
        assert_eq!(serde_json::to_value(PageType::TaskList).unwrap(), json!("task-list"));
    }

    #[test]
    fn unknown_page_type_message() {
        let err = "wizard".parse::<PageType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown page type: wizard");
    }

    #[test]
    fn field_operations() {
        let mut page = bare_page(PageType::Question, "about-you");
        page.add_field(Field::new("first-name", FieldType::Text, "First name"));
        page.add_field(Field::new("last-name", FieldType::Text, "Last name"));

        assert!(page.field("first-name").is_some());
        let removed = page.remove_field("first-name").unwrap();
        assert_eq!(removed.name, "first-name");
        assert!(page.field("first-name").is_none());
        assert!(page.remove_field("first-name").is_none());
    }

    #[test]
    fn terminal_is_a_convention() {
        let mut page = bare_page(PageType::Confirmation, "done");
        assert!(page.is_terminal());

        // A conventionally terminal page may still carry outgoing edges
        page.set_next_page(Some("somewhere".to_string()));
        assert!(!page.is_terminal());
    }

    #[test]
    fn page_wire_shape() {
        let mut page = bare_page(PageType::CheckAnswers, "check-answers");
        page.set_next_page(Some("confirmation-1".to_string()));
        let value = serde_json::to_value(&page).unwrap();

        assert_eq!(value["type"], json!("check-answers"));
        assert_eq!(value["nextPageId"], json!("confirmation-1"));
    }
}
