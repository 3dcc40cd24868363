//! Page lookup
//!
//! Linear scans over the project's page list. Projects top out at a few
//! hundred pages, so an index would cost more to keep coherent than it saves.

use waypost_model::{Page, Project};

/// Find a page by its id.
#[must_use]
pub fn find_page_by_id<'p>(project: &'p Project, page_id: &str) -> Option<&'p Page> {
    project.pages.iter().find(|p| p.id == page_id)
}

/// Find a page by its key.
#[must_use]
pub fn find_page_by_key<'p>(project: &'p Project, key: &str) -> Option<&'p Page> {
    project.pages.iter().find(|p| p.key == key)
}

/// Find a page by its URL path.
#[must_use]
pub fn find_page_by_path<'p>(project: &'p Project, path: &str) -> Option<&'p Page> {
    project.pages.iter().find(|p| p.path == path)
}
