//! Syntax checking for candidate expressions
//!
//! Conditions arrive from untrusted storage, so expression shape is checked
//! with a tolerant, issue-collecting pass rather than a panicking parse. The
//! single structural invariant: every object node carries exactly one key,
//! and that key is a recognized operator.

use serde_json::Value;

/// The recognized JSONLogic operator set.
pub const OPERATORS: &[&str] = &[
    "==", "!=", ">", ">=", "<", "<=", "and", "or", "!", "var", "in", "map", "filter", "some",
    "all", "cat", "substr", "+", "-", "*", "/", "%", "if", "missing", "missing_some", "to_number",
    "to_string",
];

/// Check whether a name is a recognized operator.
#[inline]
#[must_use]
pub fn is_operator(name: &str) -> bool {
    OPERATORS.contains(&name)
}

/// A single syntax problem, located by JSON pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxIssue {
    /// JSON-pointer style location within the expression (`""` is the root)
    pub path: String,
    /// Human-readable description
    pub message: String,
}

impl std::fmt::Display for SyntaxIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.path, self.message)
        }
    }
}

/// Validate expression shape without evaluating it.
///
/// Collects every problem rather than stopping at the first, so callers can
/// report all of them at once.
///
/// # Errors
/// Returns the full list of [`SyntaxIssue`]s when the expression violates the
/// one-operator-per-node invariant anywhere in the tree.
pub fn check_syntax(expr: &Value) -> Result<(), Vec<SyntaxIssue>> {
    let mut issues = Vec::new();
    walk(expr, String::new(), &mut issues);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(issues)
    }
}

fn walk(expr: &Value, path: String, issues: &mut Vec<SyntaxIssue>) {
    match expr {
        Value::Object(map) => {
            if map.len() != 1 {
                issues.push(SyntaxIssue {
                    path: path.clone(),
                    message: format!(
                        "expression node must have exactly one operator key, found {}",
                        map.len()
                    ),
                });
                return;
            }
            let (op, args) = map.iter().next().expect("map has one entry");
            if !is_operator(op) {
                issues.push(SyntaxIssue {
                    path: path.clone(),
                    message: format!("unknown operator: {op}"),
                });
                return;
            }
            walk(args, format!("{path}/{op}"), issues);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                walk(item, format!("{path}/{index}"), issues);
            }
        }
        // Primitives are literals and always valid
        _ => {}
    }
}
