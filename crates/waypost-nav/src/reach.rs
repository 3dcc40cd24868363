//! Reachability analysis
//!
//! Navigation edges form a directed graph: `nextPageId` and every condition's
//! `toPageId` are edges. Reachability is a breadth-first walk from the start
//! page, ignoring whether any session could actually satisfy the conditions:
//! an edge that exists is an edge that might be taken.

use std::collections::{HashSet, VecDeque};
use waypost_model::{Page, PageType, Project};

/// The project's start page, when it has exactly one.
fn start_page(project: &Project) -> Option<&Page> {
    let mut starts = project.pages.iter().filter(|p| p.page_type == PageType::Start);
    let first = starts.next()?;
    if starts.next().is_some() {
        return None;
    }
    Some(first)
}

/// Ids reachable from the start page, the start page itself included.
fn reachable_ids(project: &Project) -> HashSet<&str> {
    let mut seen: HashSet<&str> = HashSet::new();
    let Some(start) = start_page(project) else {
        return seen;
    };

    let mut queue: VecDeque<&Page> = VecDeque::new();
    seen.insert(&start.id);
    queue.push_back(start);

    while let Some(page) = queue.pop_front() {
        let targets = page
            .conditions
            .iter()
            .map(|c| c.to_page_id.as_str())
            .chain(page.next_page_id.as_deref());
        for target in targets {
            if seen.insert(target) {
                if let Some(next) = project.pages.iter().find(|p| p.id == target) {
                    queue.push_back(next);
                }
            }
        }
    }
    seen
}

/// Whether any path of navigation edges leads from the start page to
/// `page_id`.
///
/// Returns `false` when the project has no start page, or more than one:
/// without a unique entry point nothing is reachable.
#[must_use]
pub fn is_page_reachable(project: &Project, page_id: &str) -> bool {
    project.pages.iter().any(|p| p.id == page_id) && reachable_ids(project).contains(page_id)
}

/// Every page no navigation path reaches, in project order. Editors surface
/// these as orphan warnings.
#[must_use]
pub fn unreachable_pages(project: &Project) -> Vec<&Page> {
    let reachable = reachable_ids(project);
    project
        .pages
        .iter()
        .filter(|p| !reachable.contains(p.id.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use waypost_model::{Condition, PageMetadata, ServiceSettings};

    fn page(id: &str, page_type: PageType, next: Option<&str>) -> Page {
        Page {
            id: id.to_string(),
            key: id.to_string(),
            page_type,
            path: format!("/{id}"),
            title: id.to_string(),
            heading: None,
            content: Some("x".to_string()),
            fields: Vec::new(),
            next_page_id: next.map(str::to_string),
            conditions: Vec::new(),
            metadata: PageMetadata::default(),
        }
    }

    fn project(pages: Vec<Page>) -> Project {
        let mut project = Project::new("Test", ServiceSettings::new("Test"));
        for p in pages {
            project.add_page(p);
        }
        project
    }

    #[test]
    fn linear_chain_is_fully_reachable() {
        let project = project(vec![
            page("p1", PageType::Start, Some("p2")),
            page("p2", PageType::Question, Some("p3")),
            page("p3", PageType::CheckAnswers, Some("p4")),
            page("p4", PageType::Confirmation, None),
        ]);

        for id in ["p1", "p2", "p3", "p4"] {
            assert!(is_page_reachable(&project, id), "{id} should be reachable");
        }
        assert!(unreachable_pages(&project).is_empty());
    }

    #[test]
    fn condition_edges_count_even_when_never_satisfiable() {
        let mut question = page("p2", PageType::Question, Some("p3"));
        question.conditions = vec![Condition::new(json!(false), "p-branch")];
        let project = project(vec![
            page("p1", PageType::Start, Some("p2")),
            question,
            page("p3", PageType::Confirmation, None),
            page("p-branch", PageType::Content, None),
            page("p-orphan", PageType::Content, None),
        ]);

        assert!(is_page_reachable(&project, "p-branch"));
        assert!(!is_page_reachable(&project, "p-orphan"));

        let orphans: Vec<&str> = unreachable_pages(&project)
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(orphans, vec!["p-orphan"]);
    }

    #[test]
    fn no_start_page_means_nothing_is_reachable() {
        let project = project(vec![
            page("p1", PageType::Content, Some("p2")),
            page("p2", PageType::Content, None),
        ]);
        assert!(!is_page_reachable(&project, "p1"));
        assert!(!is_page_reachable(&project, "p2"));
        assert_eq!(unreachable_pages(&project).len(), 2);
    }

    #[test]
    fn multiple_start_pages_mean_nothing_is_reachable() {
        let project = project(vec![
            page("p1", PageType::Start, Some("p3")),
            page("p2", PageType::Start, Some("p3")),
            page("p3", PageType::Content, None),
        ]);
        assert!(!is_page_reachable(&project, "p3"));
    }

    #[test]
    fn cycles_terminate() {
        let project = project(vec![
            page("p1", PageType::Start, Some("p2")),
            page("p2", PageType::Question, Some("p1")),
        ]);
        assert!(is_page_reachable(&project, "p2"));
        assert!(unreachable_pages(&project).is_empty());
    }

    #[test]
    fn unknown_target_is_not_reachable() {
        let project = project(vec![page("p1", PageType::Start, Some("p-ghost"))]);
        assert!(!is_page_reachable(&project, "p-missing"));
        // dangling edge target: the edge exists but the page does not
        assert!(!is_page_reachable(&project, "p-ghost"));
    }
}
