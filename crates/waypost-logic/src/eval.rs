//! JSONLogic evaluation
//!
//! [`evaluate`] is the strict entry point and reports malformed expressions
//! as [`EvalError`]. [`evaluate_condition`] is the routing-facing wrapper:
//! conditions are best-effort hints, so evaluation failures are logged and
//! treated as "not satisfied" instead of propagating.

use crate::coerce::{is_truthy, loose_eq, number_value, same_value, stringify, to_number};
use crate::error::EvalError;
use serde_json::Value;

/// Evaluate an expression against an answer-data context.
///
/// Object nodes apply their single operator, arrays evaluate element-wise,
/// and primitives are literals.
///
/// # Errors
/// Returns [`EvalError`] when a node carries zero or multiple keys, names an
/// unknown operator, or passes an argument list an operator cannot use.
pub fn evaluate(expr: &Value, data: &Value) -> Result<Value, EvalError> {
    match expr {
        Value::Object(map) => {
            if map.len() != 1 {
                return Err(EvalError::AmbiguousNode(map.len()));
            }
            let (op, args) = map.iter().next().expect("map has one entry");
            apply_operator(op, args, data)
        }
        Value::Array(items) => items
            .iter()
            .map(|item| evaluate(item, data))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        literal => Ok(literal.clone()),
    }
}

/// Evaluate a routing condition, tolerating malformed expressions.
///
/// A condition that cannot be evaluated must not break navigation for the
/// whole journey, so errors are logged at warn level and count as `false`.
#[must_use]
pub fn evaluate_condition(expr: &Value, data: &Value) -> bool {
    match evaluate(expr, data) {
        Ok(value) => is_truthy(&value),
        Err(error) => {
            tracing::warn!(%error, "condition evaluation failed, treating as not satisfied");
            false
        }
    }
}

/// JSONLogic allows a lone argument wherever an argument array is expected.
fn arg_slice(args: &Value) -> &[Value] {
    match args {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    }
}

#[allow(clippy::too_many_lines)]
fn apply_operator(op: &str, args: &Value, data: &Value) -> Result<Value, EvalError> {
    let raw = arg_slice(args);
    match op {
        "var" => {
            let path = match raw.first() {
                Some(expr) => evaluate(expr, data)?,
                None => Value::Null,
            };
            match lookup_var(&path, data) {
                Some(value) => Ok(value),
                None => match raw.get(1) {
                    Some(default) => evaluate(default, data),
                    None => Ok(Value::Null),
                },
            }
        }
        "missing" => Ok(Value::Array(missing_keys(raw, data)?)),
        "missing_some" => {
            let (min_expr, keys_expr) = match raw {
                [a, b] => (a, b),
                _ => {
                    return Err(EvalError::ArityMismatch {
                        op: op.to_string(),
                        expected: "2",
                        got: raw.len(),
                    })
                }
            };
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let min = to_number(&evaluate(min_expr, data)?).max(0.0) as usize;
            let keys = evaluate(keys_expr, data)?;
            let missing = missing_keys(arg_slice(&keys), data)?;
            let present = arg_slice(&keys).len().saturating_sub(missing.len());
            if present >= min {
                Ok(Value::Array(Vec::new()))
            } else {
                Ok(Value::Array(missing))
            }
        }
        "if" => {
            let mut i = 0;
            while i < raw.len() {
                // Trailing lone entry is the else branch
                if i + 1 >= raw.len() {
                    return evaluate(&raw[i], data);
                }
                if is_truthy(&evaluate(&raw[i], data)?) {
                    return evaluate(&raw[i + 1], data);
                }
                i += 2;
            }
            Ok(Value::Null)
        }
        "==" => Ok(Value::Bool(loose_eq(
            &eval_at(raw, 0, data)?,
            &eval_at(raw, 1, data)?,
        ))),
        "!=" => Ok(Value::Bool(!loose_eq(
            &eval_at(raw, 0, data)?,
            &eval_at(raw, 1, data)?,
        ))),
        ">" | ">=" => {
            let a = to_number(&eval_at(raw, 0, data)?);
            let b = to_number(&eval_at(raw, 1, data)?);
            Ok(Value::Bool(if op == ">" { a > b } else { a >= b }))
        }
        "<" | "<=" => {
            let a = to_number(&eval_at(raw, 0, data)?);
            let b = to_number(&eval_at(raw, 1, data)?);
            let first = if op == "<" { a < b } else { a <= b };
            // Three-argument between form: a < b < c
            if raw.len() >= 3 {
                let c = to_number(&eval_at(raw, 2, data)?);
                let second = if op == "<" { b < c } else { b <= c };
                Ok(Value::Bool(first && second))
            } else {
                Ok(Value::Bool(first))
            }
        }
        "and" => {
            let mut last = Value::Null;
            for expr in raw {
                last = evaluate(expr, data)?;
                if !is_truthy(&last) {
                    return Ok(last);
                }
            }
            Ok(last)
        }
        "or" => {
            let mut last = Value::Null;
            for expr in raw {
                last = evaluate(expr, data)?;
                if is_truthy(&last) {
                    return Ok(last);
                }
            }
            Ok(last)
        }
        "!" => Ok(Value::Bool(!is_truthy(&eval_at(raw, 0, data)?))),
        "in" => {
            let needle = eval_at(raw, 0, data)?;
            let haystack = eval_at(raw, 1, data)?;
            match haystack {
                Value::String(s) => Ok(Value::Bool(s.contains(&stringify(&needle)))),
                Value::Array(items) => {
                    Ok(Value::Bool(items.iter().any(|item| same_value(item, &needle))))
                }
                _ => Ok(Value::Bool(false)),
            }
        }
        "cat" => {
            let mut out = String::new();
            for expr in raw {
                out.push_str(&stringify(&evaluate(expr, data)?));
            }
            Ok(Value::String(out))
        }
        "substr" => {
            if raw.len() < 2 || raw.len() > 3 {
                return Err(EvalError::ArityMismatch {
                    op: op.to_string(),
                    expected: "2 or 3",
                    got: raw.len(),
                });
            }
            let source = stringify(&evaluate(&raw[0], data)?);
            #[allow(clippy::cast_possible_truncation)]
            let start = to_number(&evaluate(&raw[1], data)?) as i64;
            #[allow(clippy::cast_possible_truncation)]
            let len = match raw.get(2) {
                Some(expr) => Some(to_number(&evaluate(expr, data)?) as i64),
                None => None,
            };
            Ok(Value::String(substring(&source, start, len)))
        }
        "+" => {
            let mut sum = 0.0;
            for expr in raw {
                sum += to_number(&evaluate(expr, data)?);
            }
            Ok(number_value(sum))
        }
        "-" => match raw {
            [only] => Ok(number_value(-to_number(&evaluate(only, data)?))),
            [a, b] => Ok(number_value(
                to_number(&evaluate(a, data)?) - to_number(&evaluate(b, data)?),
            )),
            _ => Err(EvalError::ArityMismatch {
                op: op.to_string(),
                expected: "1 or 2",
                got: raw.len(),
            }),
        },
        "*" => {
            let mut product = 1.0;
            for expr in raw {
                product *= to_number(&evaluate(expr, data)?);
            }
            Ok(number_value(product))
        }
        "/" | "%" => {
            let (a, b) = match raw {
                [a, b] => (
                    to_number(&evaluate(a, data)?),
                    to_number(&evaluate(b, data)?),
                ),
                _ => {
                    return Err(EvalError::ArityMismatch {
                        op: op.to_string(),
                        expected: "2",
                        got: raw.len(),
                    })
                }
            };
            Ok(number_value(if op == "/" { a / b } else { a % b }))
        }
        "map" | "filter" | "some" | "all" => {
            let (source, logic) = match raw {
                [a, b] => (a, b),
                _ => {
                    return Err(EvalError::ArityMismatch {
                        op: op.to_string(),
                        expected: "2",
                        got: raw.len(),
                    })
                }
            };
            let items = match evaluate(source, data)? {
                Value::Array(items) => items,
                // Non-array sources scope to nothing
                _ => Vec::new(),
            };
            match op {
                "map" => items
                    .iter()
                    .map(|item| evaluate(logic, item))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Value::Array),
                "filter" => {
                    let mut kept = Vec::new();
                    for item in items {
                        if is_truthy(&evaluate(logic, &item)?) {
                            kept.push(item);
                        }
                    }
                    Ok(Value::Array(kept))
                }
                "some" => {
                    for item in &items {
                        if is_truthy(&evaluate(logic, item)?) {
                            return Ok(Value::Bool(true));
                        }
                    }
                    Ok(Value::Bool(false))
                }
                _ => {
                    // all: vacuously false on an empty array, per reference
                    if items.is_empty() {
                        return Ok(Value::Bool(false));
                    }
                    for item in &items {
                        if !is_truthy(&evaluate(logic, item)?) {
                            return Ok(Value::Bool(false));
                        }
                    }
                    Ok(Value::Bool(true))
                }
            }
        }
        "to_number" => Ok(number_value(to_number(&eval_at(raw, 0, data)?))),
        "to_string" => Ok(Value::String(stringify(&eval_at(raw, 0, data)?))),
        other => Err(EvalError::UnknownOperator(other.to_string())),
    }
}

/// Evaluate the argument at `index`, defaulting to `null` when absent.
fn eval_at(raw: &[Value], index: usize, data: &Value) -> Result<Value, EvalError> {
    match raw.get(index) {
        Some(expr) => evaluate(expr, data),
        None => Ok(Value::Null),
    }
}

/// Resolve a `var` path against the data context.
///
/// `null` or `""` selects the whole context; dotted strings walk objects by
/// key and arrays by index; bare numbers index arrays. Returns `None` when
/// the path does not resolve.
fn lookup_var(path: &Value, data: &Value) -> Option<Value> {
    match path {
        Value::Null => Some(data.clone()),
        Value::String(s) if s.is_empty() => Some(data.clone()),
        Value::String(s) => {
            let mut current = data;
            for segment in s.split('.') {
                current = match current {
                    Value::Object(map) => map.get(segment)?,
                    Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                    _ => return None,
                };
            }
            Some(current.clone())
        }
        Value::Number(n) => {
            let index = n.as_u64()?;
            match data {
                Value::Array(items) => items.get(usize::try_from(index).ok()?).cloned(),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Keys are "missing" when they resolve to nothing, `null`, or `""`.
fn missing_keys(raw: &[Value], data: &Value) -> Result<Vec<Value>, EvalError> {
    // A single argument that evaluates to an array is the key list itself
    let evaled: Vec<Value> = raw
        .iter()
        .map(|expr| evaluate(expr, data))
        .collect::<Result<_, _>>()?;
    let keys: Vec<Value> = match evaled.as_slice() {
        [Value::Array(inner)] => inner.clone(),
        _ => evaled,
    };

    let mut missing = Vec::new();
    for key in keys {
        let absent = match lookup_var(&key, data) {
            None | Some(Value::Null) => true,
            Some(Value::String(s)) => s.is_empty(),
            Some(_) => false,
        };
        if absent {
            missing.push(key);
        }
    }
    Ok(missing)
}

/// JS-style `substr` with negative start/length handling, over characters.
fn substring(source: &str, start: i64, len: Option<i64>) -> String {
    let chars: Vec<char> = source.chars().collect();
    let total = i64::try_from(chars.len()).unwrap_or(i64::MAX);
    let begin = if start < 0 {
        (total + start).max(0)
    } else {
        start.min(total)
    };
    let end = match len {
        None => total,
        Some(l) if l < 0 => (total + l).max(begin),
        Some(l) => (begin + l).min(total),
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    chars[begin as usize..end.max(begin) as usize].iter().collect()
}
