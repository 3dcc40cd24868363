//! Conditional routing
//!
//! A page routes forward through its conditions, evaluated in authoring order
//! against the session's answers. The first condition whose expression is
//! truthy wins; when none fires, the page's `nextPageId` is the fallback.

use crate::find::find_page_by_id;
use waypost_logic::evaluate_condition;
use waypost_model::{JourneySession, Page, Project};

/// Resolve the page a visitor on `current` goes to next.
///
/// Returns `None` when no condition fires and the page has no default
/// successor, or when the winning reference points at a page the project does
/// not contain (the validator reports the latter as an error; navigation just
/// declines to route).
#[must_use]
pub fn get_next_page<'p>(
    project: &'p Project,
    current: &Page,
    session: &JourneySession,
) -> Option<&'p Page> {
    let answers = session.answers_value();

    for condition in &current.conditions {
        if evaluate_condition(&condition.expression, &answers) {
            let target = find_page_by_id(project, &condition.to_page_id);
            if target.is_none() {
                tracing::warn!(
                    condition = %condition.id,
                    to_page_id = %condition.to_page_id,
                    "condition routes to a page the project does not contain"
                );
            }
            return target;
        }
    }

    current
        .next_page_id
        .as_deref()
        .and_then(|id| find_page_by_id(project, id))
}

/// Every page that references `page_id`, via a condition or as its default
/// successor. Used by editors to warn before a deletion leaves dangling
/// references.
#[must_use]
pub fn get_referencing_pages<'p>(project: &'p Project, page_id: &str) -> Vec<&'p Page> {
    project
        .pages
        .iter()
        .filter(|page| {
            page.next_page_id.as_deref() == Some(page_id)
                || page.conditions.iter().any(|c| c.to_page_id == page_id)
        })
        .collect()
}
