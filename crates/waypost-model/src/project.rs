//! Project aggregate root
//!
//! A project owns every page (and transitively every field and condition) in
//! a journey. Nothing is shared across projects; callers mutate a project
//! only through its own operations.

use crate::page::Page;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// The schema version this engine reads and writes.
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Service phase banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Alpha phase
    Alpha,
    /// Beta phase
    Beta,
    /// Live service
    Live,
}

/// A navigation or footer link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct NavLink {
    /// Link text
    pub text: String,
    /// Link target
    pub href: String,
}

/// Service-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSettings {
    /// Service name shown in the header
    pub service_name: String,
    /// GOV.UK Frontend version the prototype targets
    #[serde(default)]
    pub frontend_version: Option<String>,
    /// Phase banner
    #[serde(default)]
    pub phase: Option<Phase>,
    /// Feedback URL for the phase banner
    #[serde(default)]
    pub feedback_url: Option<String>,
    /// Header navigation links
    #[serde(default)]
    pub navigation_links: Vec<NavLink>,
    /// Footer links
    #[serde(default)]
    pub footer_links: Vec<NavLink>,
}

impl ServiceSettings {
    /// Settings with just a service name.
    #[must_use]
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Self::default()
        }
    }
}

/// The aggregate root of a journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique id
    pub id: String,
    /// Project name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Service-wide settings
    pub settings: ServiceSettings,
    /// Pages, in editor order
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Schema version the project was written with
    pub schema_version: String,
}

impl Project {
    /// Create an empty project at the current schema version.
    #[must_use]
    pub fn new(name: impl Into<String>, settings: ServiceSettings) -> Self {
        Self {
            id: crate::new_id(),
            name: name.into(),
            description: None,
            settings,
            pages: Vec::new(),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    /// With a description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a page.
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Remove a page by id, returning it when present.
    ///
    /// Dangling references left behind by the removal are caught by the
    /// project validator, not here.
    pub fn remove_page(&mut self, page_id: &str) -> Option<Page> {
        let index = self.pages.iter().position(|p| p.id == page_id)?;
        Some(self.pages.remove(index))
    }

    /// Mutable access to a page by id.
    pub fn page_mut(&mut self, page_id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == page_id)
    }
}
