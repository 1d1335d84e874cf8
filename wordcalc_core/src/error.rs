//! Failure-reason taxonomy for question validation and evaluation.
//!
//! The grammar never aborts a call: every failure is one of the fixed
//! reasons below, reported by value. Display and serde output use the wire
//! strings carried in evaluate/validate responses and the failure store.

use serde::{Deserialize, Serialize};

/// Why a question was rejected.
///
/// Variants are listed in validator priority order; the first matching
/// check wins and later checks never run.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error, Serialize, Deserialize,
)]
pub enum Reason {
    /// Missing `?` terminator, a non-numeric or signed operand, a dangling
    /// keyword, `multiplied`/`divided` without `by`, or a literal
    /// `divided by 0`.
    #[error("Invalid expression")]
    #[serde(rename = "Invalid expression")]
    InvalidExpression,

    /// Fewer than three tokens, or the question does not open with
    /// "what is".
    #[error("Non-math question")]
    #[serde(rename = "Non-math question")]
    NonMathQuestion,

    /// A token in keyword position is not one of the four operations.
    #[error("Unsupported operation")]
    #[serde(rename = "Unsupported operation")]
    UnsupportedOperation,
}

impl Reason {
    /// Wire string used in responses and the failure store.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidExpression => "Invalid expression",
            Self::NonMathQuestion => "Non-math question",
            Self::UnsupportedOperation => "Unsupported operation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_strings() {
        assert_eq!(Reason::InvalidExpression.as_str(), "Invalid expression");
        assert_eq!(Reason::NonMathQuestion.as_str(), "Non-math question");
        assert_eq!(Reason::UnsupportedOperation.as_str(), "Unsupported operation");
    }

    #[test]
    fn test_display_matches_wire_string() {
        for reason in [
            Reason::InvalidExpression,
            Reason::NonMathQuestion,
            Reason::UnsupportedOperation,
        ] {
            assert_eq!(reason.to_string(), reason.as_str());
        }
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&Reason::NonMathQuestion).unwrap();
        assert_eq!(json, "\"Non-math question\"");

        let back: Reason = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Reason::NonMathQuestion);
    }
}
