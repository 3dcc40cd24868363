//! Waypost Logic - JSONLogic expressions for journey routing
//!
//! Conditions on journey pages are JSONLogic expressions: nested JSON values
//! where every object node carries exactly one recognized operator key. This
//! crate provides:
//! - Syntax checking of candidate expressions ([`check_syntax`])
//! - Evaluation against an answer-data context ([`evaluate`])
//! - A tolerant boolean wrapper for routing decisions ([`evaluate_condition`])
//! - Helper constructors for the common comparison shapes ([`helpers`])
//!
//! Evaluation follows the reference JSONLogic semantics: loose equality for
//! `==`, JS-style numeric coercion, and falsy values `0`, `""`, `null`,
//! `false`, `NaN`, and the empty array.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use waypost_logic::{evaluate_condition, helpers};
//!
//! let rule = helpers::equals("eligibility", "yes");
//! assert!(evaluate_condition(&rule, &json!({"eligibility": "yes"})));
//! assert!(!evaluate_condition(&rule, &json!({"eligibility": "no"})));
//! ```

pub mod coerce;
pub mod error;
pub mod eval;
pub mod helpers;
pub mod syntax;

pub use coerce::{is_truthy, loose_eq, to_number};
pub use error::EvalError;
pub use eval::{evaluate, evaluate_condition};
pub use syntax::{check_syntax, is_operator, SyntaxIssue, OPERATORS};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
