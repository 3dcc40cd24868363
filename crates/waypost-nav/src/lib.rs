//! Waypost Navigation - page lookup, conditional routing, reachability
//!
//! The navigation engine answers three questions about a project: which page
//! does an identifier refer to, where does the journey go next given a
//! visitor's answers, and which pages can a visitor actually reach from the
//! start page.
//!
//! # Example
//!
//! ```rust
//! use waypost_builder::{fields, PageBuilders, PageOptions};
//! use waypost_model::{JourneySession, PageTypeRegistry, Project, ServiceSettings};
//! use waypost_nav::{get_next_page, is_page_reachable};
//!
//! let registry = PageTypeRegistry::new();
//! let builders = PageBuilders::new(&registry);
//!
//! let question = builders.question(
//!     PageOptions::new("What is your name?")
//!         .with_field(fields::text_input("full-name", "Full name")),
//! );
//! let start = builders.start(
//!     PageOptions::new("Apply")
//!         .with_content("Use this service to apply.")
//!         .with_next_page(&question.id),
//! );
//!
//! let question_id = question.id.clone();
//! let mut project = Project::new("Licence", ServiceSettings::new("Licence"));
//! project.add_page(start);
//! project.add_page(question);
//!
//! assert!(is_page_reachable(&project, &question_id));
//! let session = JourneySession::new();
//! let next = get_next_page(&project, &project.pages[0], &session).unwrap();
//! assert_eq!(next.id, question_id);
//! ```

pub mod find;
pub mod next;
pub mod reach;

pub use find::{find_page_by_id, find_page_by_key, find_page_by_path};
pub use next::{get_next_page, get_referencing_pages};
pub use reach::{is_page_reachable, unreachable_pages};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
