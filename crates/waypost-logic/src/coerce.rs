//! Value coercion rules shared by the evaluator
//!
//! JSONLogic inherits JavaScript's loose typing. These functions centralize
//! the truthiness, numeric, and string coercions so every operator agrees on
//! them.

use serde_json::Value;

/// JSONLogic truthiness.
///
/// Falsy values: `null`, `false`, `0`, `NaN`, `""`, and the empty array.
/// Everything else (including the empty object) is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => {
            let n = n.as_f64().unwrap_or(f64::NAN);
            n != 0.0 && !n.is_nan()
        }
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(_) => true,
    }
}

/// Numeric coercion, JS `Number()` style.
///
/// Returns `NaN` for values with no numeric interpretation.
#[must_use]
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                trimmed.parse::<f64>().unwrap_or(f64::NAN)
            }
        }
        // JS: [] -> 0, [x] -> Number(x), longer arrays -> NaN
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [only] => to_number(only),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// String coercion used by `cat`, `substr`, and `to_string`.
#[must_use]
pub fn stringify(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => format_number(n.as_f64().unwrap_or(f64::NAN)),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(stringify)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Loose equality, JS `==` style.
///
/// Numbers compare by value, strings compare to numbers after parsing,
/// booleans coerce to `0`/`1`, and `null` equals only `null`. Arrays and
/// objects of the same kind compare structurally; an array compares to a
/// scalar through its string form (`[1] == 1`).
#[must_use]
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Null, _) | (_, Value::Null) => false,
        (Value::Bool(_), _) | (_, Value::Bool(_)) => num_eq(to_number(a), to_number(b)),
        (Value::Number(_), Value::Number(_)) => num_eq(to_number(a), to_number(b)),
        (Value::Number(_), Value::String(_)) | (Value::String(_), Value::Number(_)) => {
            num_eq(to_number(a), to_number(b))
        }
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Array(x), Value::Array(y)) => x == y,
        (Value::Object(x), Value::Object(y)) => x == y,
        (Value::Array(_), _) => loose_eq(&Value::String(stringify(a)), b),
        (_, Value::Array(_)) => loose_eq(a, &Value::String(stringify(b))),
        (Value::Object(_), _) | (_, Value::Object(_)) => false,
    }
}

/// Value equality for `in` lookups: numeric values compare by magnitude,
/// everything else compares structurally.
#[must_use]
pub fn same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(_), Value::Number(_)) => num_eq(to_number(a), to_number(b)),
        _ => a == b,
    }
}

/// Wrap a computed `f64` as a JSON value; non-finite results become `null`.
#[must_use]
pub fn number_value(n: f64) -> Value {
    serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
}

fn num_eq(a: f64, b: f64) -> bool {
    // NaN never equals anything, matching JS
    a == b
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.fract() == 0.0 && n.is_finite() && n.abs() < 1e15 {
        #[allow(clippy::cast_possible_truncation)]
        return format!("{}", n as i64);
    }
    format!("{n}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn truthiness_of_scalars() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!("")));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!("no")));
        assert!(is_truthy(&json!(-0.5)));
    }

    #[test]
    fn truthiness_of_composites() {
        assert!(!is_truthy(&json!([])));
        assert!(is_truthy(&json!([0])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(to_number(&json!(null)), 0.0);
        assert_eq!(to_number(&json!(true)), 1.0);
        assert_eq!(to_number(&json!("  42 ")), 42.0);
        assert_eq!(to_number(&json!("")), 0.0);
        assert!(to_number(&json!("not a number")).is_nan());
        assert_eq!(to_number(&json!([])), 0.0);
        assert_eq!(to_number(&json!(["3"])), 3.0);
        assert!(to_number(&json!([1, 2])).is_nan());
    }

    #[test]
    fn loose_equality_coerces() {
        assert!(loose_eq(&json!(1), &json!("1")));
        assert!(loose_eq(&json!(true), &json!(1)));
        assert!(loose_eq(&json!(null), &json!(null)));
        assert!(!loose_eq(&json!(null), &json!(0)));
        assert!(!loose_eq(&json!("yes"), &json!("no")));
        assert!(loose_eq(&json!([1]), &json!(1)));
    }

    #[test]
    fn stringify_values() {
        assert_eq!(stringify(&json!(null)), "");
        assert_eq!(stringify(&json!(2.0)), "2");
        assert_eq!(stringify(&json!(2.5)), "2.5");
        assert_eq!(stringify(&json!(["a", "b"])), "a,b");
    }

    #[test]
    fn number_value_handles_non_finite() {
        assert_eq!(number_value(2.0), json!(2.0));
        assert_eq!(number_value(f64::NAN), Value::Null);
        assert_eq!(number_value(f64::INFINITY), Value::Null);
    }
}
