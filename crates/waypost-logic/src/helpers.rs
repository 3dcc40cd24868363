//! Helper constructors for common condition shapes
//!
//! Each helper returns a plain JSONLogic node ready to attach to a page
//! condition. They are conveniences, not validated types; [`crate::check_syntax`]
//! still applies to anything loaded from storage.
//!
//! Note the two distinct `in` argument orders: [`is_one_of`] puts the answer
//! first and the candidate list second ("is one of"), while [`contains`] puts
//! the candidate value first and the answer list second ("contains"). Both
//! orders are in live use and are not interchangeable.

use serde_json::{json, Value};

/// `answer(field) == value`
#[must_use]
pub fn equals(field: &str, value: impl Into<Value>) -> Value {
    json!({"==": [{"var": field}, value.into()]})
}

/// `answer(field) != value`
#[must_use]
pub fn not_equals(field: &str, value: impl Into<Value>) -> Value {
    json!({"!=": [{"var": field}, value.into()]})
}

/// `answer(field)` is one of the candidate values.
#[must_use]
pub fn is_one_of<V: Into<Value>>(field: &str, values: impl IntoIterator<Item = V>) -> Value {
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();
    json!({"in": [{"var": field}, values]})
}

/// The multi-valued `answer(field)` contains `value`.
#[must_use]
pub fn contains(field: &str, value: impl Into<Value>) -> Value {
    json!({"in": [value.into(), {"var": field}]})
}

/// All of the given conditions hold.
#[must_use]
pub fn all_of(conditions: impl IntoIterator<Item = Value>) -> Value {
    let conditions: Vec<Value> = conditions.into_iter().collect();
    json!({"and": conditions})
}

/// Any of the given conditions holds.
#[must_use]
pub fn any_of(conditions: impl IntoIterator<Item = Value>) -> Value {
    let conditions: Vec<Value> = conditions.into_iter().collect();
    json!({"or": conditions})
}

/// The given condition does not hold.
#[must_use]
pub fn negate(condition: Value) -> Value {
    json!({"!": [condition]})
}

/// `answer(field)` is absent, `null`, or the empty string.
#[must_use]
pub fn is_missing(field: &str) -> Value {
    json!({"missing": [field]})
}

/// `answer(field)` carries a value.
#[must_use]
pub fn has_value(field: &str) -> Value {
    json!({"!": [{"missing": [field]}]})
}
