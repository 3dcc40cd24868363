//! Key and path derivation
//!
//! Page keys are derived from titles: lowercase, non-alphanumerics stripped,
//! whitespace runs collapsed to single hyphens, no leading or trailing
//! hyphens. Paths are keys with a `/` prefix.

/// Derive a URL-safe key from a page title.
#[must_use]
pub fn generate_key(title: &str) -> String {
    let mut cleaned = String::with_capacity(title.len());
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            cleaned.push(c);
        } else if c.is_whitespace() || c == '-' || c == '_' {
            // separators collapse later; everything else is stripped
            cleaned.push(' ');
        }
    }
    cleaned.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Derive a URL path from a key.
#[must_use]
pub fn generate_path(key: &str) -> String {
    format!("/{key}")
}
