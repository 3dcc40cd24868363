//! Routing condition model
//!
//! A condition is a guarded edge in the journey graph: a JSONLogic expression
//! plus the id of the page to route to when it holds. Conditions are owned by
//! a page, evaluated in declaration order at navigation time, and replaced
//! wholesale when edited rather than mutated.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Maximum length of a condition description.
pub const MAX_DESCRIPTION_LEN: usize = 200;

/// A guarded routing edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    /// Unique id, generated when the condition is created
    pub id: String,
    /// JSONLogic expression; exactly one operator key per object node
    pub expression: Value,
    /// Target page id; must exist within the owning project
    pub to_page_id: String,
    /// Optional editor-facing description (at most 200 characters)
    #[serde(default)]
    pub description: Option<String>,
}

impl Condition {
    /// Create a condition with a fresh id.
    #[must_use]
    pub fn new(expression: Value, to_page_id: impl Into<String>) -> Self {
        Self {
            id: crate::new_id(),
            expression,
            to_page_id: to_page_id.into(),
            description: None,
        }
    }

    /// With an editor-facing description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn condition_construction() {
        let condition = Condition::new(
            waypost_logic::helpers::equals("eligibility", "yes"),
            "page-eligible",
        )
        .with_description("Route eligible applicants onwards");

        assert_eq!(condition.to_page_id, "page-eligible");
        assert!(!condition.id.is_empty());
        assert!(waypost_logic::check_syntax(&condition.expression).is_ok());
    }

    #[test]
    fn condition_wire_shape() {
        let condition = Condition::new(json!({"==": [{"var": "a"}, 1]}), "p2");
        let value = serde_json::to_value(&condition).unwrap();

        assert_eq!(value["toPageId"], json!("p2"));
        assert!(value["expression"].is_object());
    }
}
