//! Waypost Builder - constrained constructors for pages and fields
//!
//! Builders are the programmer-facing way to assemble valid pages: they
//! consult the page-type registry and **fail fast**, panicking with a
//! descriptive message, when a structural invariant is violated. This is the
//! deliberate counterpart to the tolerant, `Result`-based validators in
//! `waypost-model`, which handle data from storage; builders handle data the
//! caller controls and is expected to have shaped correctly.
//!
//! # Example
//!
//! ```rust
//! use waypost_builder::{fields, PageBuilders, PageOptions};
//! use waypost_model::PageTypeRegistry;
//!
//! let registry = PageTypeRegistry::new();
//! let builders = PageBuilders::new(&registry);
//!
//! let page = builders.question(
//!     PageOptions::new("What is your name?")
//!         .with_field(fields::text_input("full-name", "Full name")),
//! );
//! assert_eq!(page.key, "what-is-your-name");
//! assert_eq!(page.path, "/what-is-your-name");
//! ```

pub mod fields;
pub mod pages;
pub mod slug;

pub use pages::{PageBuilders, PageOptions};
pub use slug::{generate_key, generate_path};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
