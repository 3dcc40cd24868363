//! Answer context for navigation
//!
//! A [`JourneySession`] holds the answers a user has given so far. It is the
//! data context conditions are evaluated against; it is not owned by a
//! project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user's progress through a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneySession {
    /// Session identifier
    pub session_id: String,
    /// Answers keyed by field name
    #[serde(default)]
    pub answers: Map<String, Value>,
    /// When the session last changed
    pub last_updated: DateTime<Utc>,
    /// Page the user is currently on
    #[serde(default)]
    pub current_page_id: Option<String>,
    /// Pages the user has completed, in visit order
    #[serde(default)]
    pub completed_pages: Vec<String>,
}

impl JourneySession {
    /// Start an empty session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            session_id: crate::new_id(),
            answers: Map::new(),
            last_updated: Utc::now(),
            current_page_id: None,
            completed_pages: Vec::new(),
        }
    }

    /// Look up an answer by field name.
    #[must_use]
    pub fn answer(&self, field_name: &str) -> Option<&Value> {
        self.answers.get(field_name)
    }

    /// Record an answer.
    pub fn set_answer(&mut self, field_name: impl Into<String>, value: Value) {
        self.answers.insert(field_name.into(), value);
        self.last_updated = Utc::now();
    }

    /// Mark a page completed and move the cursor onto it.
    pub fn complete_page(&mut self, page_id: impl Into<String>) {
        let page_id = page_id.into();
        if !self.completed_pages.contains(&page_id) {
            self.completed_pages.push(page_id.clone());
        }
        self.current_page_id = Some(page_id);
        self.last_updated = Utc::now();
    }

    /// The answers as a JSON object, the shape the condition evaluator takes.
    #[must_use]
    pub fn answers_value(&self) -> Value {
        Value::Object(self.answers.clone())
    }
}

impl Default for JourneySession {
    fn default() -> Self {
        Self::new()
    }
}
