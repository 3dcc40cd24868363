//! Page-type registry
//!
//! The static table of per-page-type rules: whether fields are allowed and of
//! which types, whether content is required, and the structural constraints
//! validators and builders enforce. The registry is immutable after
//! construction; build it once at startup and pass it to whatever needs it.

use crate::field::FieldType;
use crate::page::PageType;
use indexmap::IndexMap;

/// Numeric structural constraints for one page type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuralConstraints {
    /// Minimum number of fields
    pub min_fields: usize,
    /// Maximum number of fields
    pub max_fields: usize,
    /// Maximum content length in characters
    pub max_content_length: usize,
    /// Whether the page must declare a default successor
    pub requires_next_page: bool,
}

/// The rules for one page type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTypeRule {
    /// The page type this rule describes
    pub page_type: PageType,
    /// Editor-facing name
    pub display_name: &'static str,
    /// Editor-facing description
    pub description: &'static str,
    /// Whether the page may carry form fields
    pub can_have_fields: bool,
    /// Field types permitted when fields are allowed (`None` means any)
    pub allowed_field_types: Option<Vec<FieldType>>,
    /// Whether non-empty content is required
    pub requires_content: bool,
    /// Whether conditional routing is expected on this page type.
    ///
    /// Advisory only: editors use it to decide what to offer, but the
    /// validator does not reject conditions on pages whose type says
    /// otherwise. Terminality stays a convention.
    pub supports_conditions: bool,
    /// Numeric constraints
    pub constraints: StructuralConstraints,
}

/// Editor use cases mapped to recommended page types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UseCase {
    /// Collect information from the user
    CollectInfo,
    /// Show information to the user
    ShowInfo,
    /// Help the user navigate a long journey
    Navigate,
    /// Confirm what the user entered or submitted
    Confirm,
}

const QUESTION_FIELD_TYPES: [FieldType; 11] = [
    FieldType::Text,
    FieldType::Textarea,
    FieldType::Email,
    FieldType::Tel,
    FieldType::Password,
    FieldType::Number,
    FieldType::Date,
    FieldType::Radios,
    FieldType::Checkboxes,
    FieldType::Select,
    FieldType::File,
];

const MAX_CONTENT_LENGTH: usize = 50_000;
const MAX_QUESTION_FIELDS: usize = 10;

/// The immutable table of per-page-type rules.
#[derive(Debug, Clone)]
pub struct PageTypeRegistry {
    rules: IndexMap<PageType, PageTypeRule>,
}

impl PageTypeRegistry {
    /// Build the six-entry table.
    #[must_use]
    pub fn new() -> Self {
        let no_fields = StructuralConstraints {
            min_fields: 0,
            max_fields: 0,
            max_content_length: MAX_CONTENT_LENGTH,
            requires_next_page: false,
        };

        let entries = [
            PageTypeRule {
                page_type: PageType::Start,
                display_name: "Start",
                description: "Service landing page with a start call to action",
                can_have_fields: false,
                allowed_field_types: None,
                requires_content: true,
                supports_conditions: false,
                constraints: no_fields,
            },
            PageTypeRule {
                page_type: PageType::Content,
                display_name: "Content",
                description: "Static guidance or information page",
                can_have_fields: false,
                allowed_field_types: None,
                requires_content: true,
                supports_conditions: true,
                constraints: no_fields,
            },
            PageTypeRule {
                page_type: PageType::Question,
                display_name: "Question",
                description: "Form page collecting one or more answers",
                can_have_fields: true,
                allowed_field_types: Some(QUESTION_FIELD_TYPES.to_vec()),
                requires_content: false,
                supports_conditions: true,
                constraints: StructuralConstraints {
                    min_fields: 1,
                    max_fields: MAX_QUESTION_FIELDS,
                    max_content_length: MAX_CONTENT_LENGTH,
                    requires_next_page: false,
                },
            },
            PageTypeRule {
                page_type: PageType::TaskList,
                display_name: "Task list",
                description: "Overview of the tasks in a long journey",
                can_have_fields: false,
                allowed_field_types: None,
                requires_content: false,
                supports_conditions: true,
                constraints: no_fields,
            },
            PageTypeRule {
                page_type: PageType::CheckAnswers,
                display_name: "Check answers",
                description: "Summary page before submission",
                can_have_fields: false,
                allowed_field_types: None,
                requires_content: false,
                supports_conditions: false,
                constraints: StructuralConstraints {
                    requires_next_page: true,
                    ..no_fields
                },
            },
            PageTypeRule {
                page_type: PageType::Confirmation,
                display_name: "Confirmation",
                description: "End-of-journey confirmation with reference details",
                can_have_fields: false,
                allowed_field_types: None,
                requires_content: true,
                supports_conditions: false,
                constraints: no_fields,
            },
        ];

        Self {
            rules: entries.into_iter().map(|rule| (rule.page_type, rule)).collect(),
        }
    }

    /// The rule for a page type.
    #[must_use]
    pub fn rule(&self, page_type: PageType) -> &PageTypeRule {
        self.rules
            .get(&page_type)
            .expect("registry has an entry for every page type")
    }

    /// Whether the page type may carry fields.
    #[inline]
    #[must_use]
    pub fn can_have_fields(&self, page_type: PageType) -> bool {
        self.rule(page_type).can_have_fields
    }

    /// Whether a field type is permitted on a page type.
    #[must_use]
    pub fn is_field_type_allowed(&self, page_type: PageType, field_type: FieldType) -> bool {
        let rule = self.rule(page_type);
        if !rule.can_have_fields {
            return false;
        }
        rule.allowed_field_types
            .as_ref()
            .map_or(true, |allowed| allowed.contains(&field_type))
    }

    /// The field types permitted on a page type (empty when fields are not
    /// allowed at all).
    #[must_use]
    pub fn allowed_field_types(&self, page_type: PageType) -> &[FieldType] {
        let rule = self.rule(page_type);
        if !rule.can_have_fields {
            return &[];
        }
        rule.allowed_field_types
            .as_deref()
            .unwrap_or(&QUESTION_FIELD_TYPES)
    }

    /// Whether conditional routing is expected on a page type (advisory).
    #[inline]
    #[must_use]
    pub fn supports_conditions(&self, page_type: PageType) -> bool {
        self.rule(page_type).supports_conditions
    }

    /// Recommended page types for an editor use case.
    #[must_use]
    pub fn recommended_page_types(&self, use_case: UseCase) -> &'static [PageType] {
        match use_case {
            UseCase::CollectInfo => &[PageType::Question],
            UseCase::ShowInfo => &[PageType::Start, PageType::Content],
            UseCase::Navigate => &[PageType::TaskList],
            UseCase::Confirm => &[PageType::CheckAnswers, PageType::Confirmation],
        }
    }

    /// Iterate the rules in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &PageTypeRule> {
        self.rules.values()
    }
}

impl Default for PageTypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
