//! Schema-version entry point
//!
//! Every stored project carries a `schemaVersion`. Only one version exists so
//! far, so "migration" means checking the version and fully validating the
//! document; future versions will hook their upgrade steps in here.

use crate::project::{Project, SCHEMA_VERSION};
use crate::registry::PageTypeRegistry;
use crate::validate::{validate_project, ValidationIssue};
use serde_json::Value;

/// Why a raw project document could not be brought up to the current schema.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// The document declares a version this engine does not read
    #[error("unsupported schema version: {found} (this engine reads {supported})")]
    UnsupportedVersion {
        /// The version the document declared
        found: String,
        /// The version this engine supports
        supported: &'static str,
    },

    /// The document failed validation at the current schema version
    #[error("project failed validation: {summary}")]
    Invalid {
        /// First few issues, joined for display
        summary: String,
        /// All issues found
        issues: Vec<ValidationIssue>,
    },
}

/// Validate a raw project document at the current schema version.
///
/// # Errors
/// [`MigrationError::UnsupportedVersion`] when the declared `schemaVersion`
/// is absent or not the supported one, [`MigrationError::Invalid`] when the
/// document fails validation.
pub fn migrate_project(raw: &Value, registry: &PageTypeRegistry) -> Result<Project, MigrationError> {
    let found = raw
        .get("schemaVersion")
        .and_then(Value::as_str)
        .unwrap_or("(absent)");
    if found != SCHEMA_VERSION {
        return Err(MigrationError::UnsupportedVersion {
            found: found.to_string(),
            supported: SCHEMA_VERSION,
        });
    }

    validate_project(raw, registry).map_err(|issues| {
        let summary = issues
            .iter()
            .take(3)
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        MigrationError::Invalid { summary, issues }
    })
}
