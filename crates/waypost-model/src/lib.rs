//! Waypost Model - journey data model and validators
//!
//! The entities a journey is made of:
//! - [`Field`] - a form input with validation rules and options
//! - [`Condition`] - a guarded routing edge (JSONLogic expression + target page)
//! - [`Page`] - one of six page types combining fields, content, and conditions
//! - [`Project`] - the aggregate root owning all pages and enforcing global invariants
//! - [`JourneySession`] - the answer context fed to navigation
//!
//! Structural rules per page type live in the immutable [`PageTypeRegistry`],
//! which is constructed once and passed to validators and builders.
//!
//! Validation is tolerant and data-facing: [`validate_project`] and friends
//! never panic on bad input, returning the full list of
//! [`ValidationIssue`]s instead. The shape pass runs the schema derived with
//! `schemars` through `jsonschema`; the invariant pass then checks everything
//! a JSON Schema cannot express (uniqueness, cross-references, registry
//! constraints).

pub mod condition;
pub mod field;
pub mod migrate;
pub mod page;
pub mod project;
pub mod registry;
pub mod session;
pub mod validate;

pub use condition::{Condition, MAX_DESCRIPTION_LEN};
pub use field::{DefaultValue, Field, FieldOption, FieldType, RuleType, ValidationRule};
pub use migrate::{migrate_project, MigrationError};
pub use page::{Page, PageMetadata, PageType, UnknownPageType};
pub use project::{NavLink, Phase, Project, ServiceSettings, SCHEMA_VERSION};
pub use registry::{PageTypeRegistry, PageTypeRule, StructuralConstraints, UseCase};
pub use session::JourneySession;
pub use validate::{validate_field, validate_page, validate_project, ValidationIssue};

/// Generate a fresh entity id.
///
/// Ids are plain strings on the wire; the engine assigns UUIDv4 values when
/// it creates entities itself.
#[must_use]
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
