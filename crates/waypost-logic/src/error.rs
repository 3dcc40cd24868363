//! Error types for expression evaluation

/// Errors raised while evaluating a JSONLogic expression.
///
/// These never escape routing: [`crate::evaluate_condition`] catches them and
/// treats the condition as not satisfied.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// Expression object node does not carry exactly one key
    #[error("operator node must have exactly one key, found {0}")]
    AmbiguousNode(usize),

    /// Operator key is not part of the recognized set
    #[error("unknown operator: {0}")]
    UnknownOperator(String),

    /// Operator received an argument list it cannot work with
    #[error("operator '{op}' expects {expected}, got {got} argument(s)")]
    ArityMismatch {
        /// Operator name
        op: String,
        /// Human description of the expected arity
        expected: &'static str,
        /// Number of arguments received
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eval_error_display() {
        let err = EvalError::UnknownOperator("frobnicate".to_string());
        assert!(err.to_string().contains("unknown operator"));

        let err = EvalError::AmbiguousNode(2);
        assert!(err.to_string().contains("exactly one key"));

        let err = EvalError::ArityMismatch {
            op: "substr".to_string(),
            expected: "2 or 3",
            got: 0,
        };
        assert!(err.to_string().contains("substr"));
    }
}
