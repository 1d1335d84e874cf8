//! Token vocabulary for the question grammar.
//!
//! A question is a flat, whitespace-delimited token sequence: the grammar
//! keywords below plus non-negative integer operands. Classification happens
//! once per word here; the grammar walk only ever inspects classified tokens.

use serde::{Deserialize, Serialize};

/// Grammar keywords as they appear in a lowercased question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Keyword {
    // === QUESTION PREFIX ===
    What,
    Is,

    // === OPERATIONS ===
    Plus,
    Minus,
    Multiplied,
    Divided,

    // === OPERATION PARTICLE ===
    By,
}

impl Keyword {
    /// Exact string representation in a lowercased question.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::What => "what",
            Self::Is => "is",
            Self::Plus => "plus",
            Self::Minus => "minus",
            Self::Multiplied => "multiplied",
            Self::Divided => "divided",
            Self::By => "by",
        }
    }

    /// Parse a keyword from an already-lowercased word.
    pub fn parse(word: &str) -> Option<Self> {
        match word {
            "what" => Some(Self::What),
            "is" => Some(Self::Is),
            "plus" => Some(Self::Plus),
            "minus" => Some(Self::Minus),
            "multiplied" => Some(Self::Multiplied),
            "divided" => Some(Self::Divided),
            "by" => Some(Self::By),
            _ => None,
        }
    }

    /// Arithmetic operation named by this keyword, if any.
    ///
    /// `what`, `is`, and `by` are structural and name no operation.
    pub const fn operation(self) -> Option<Op> {
        match self {
            Self::Plus => Some(Op::Add),
            Self::Minus => Some(Op::Subtract),
            Self::Multiplied => Some(Op::Multiply),
            Self::Divided => Some(Op::Divide),
            _ => None,
        }
    }
}

/// Arithmetic operations the grammar can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Op {
    /// True when the spoken form requires an immediately following `by`.
    pub const fn needs_by(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }

    /// Apply the operation to the running accumulator.
    pub fn apply(self, accumulator: f64, operand: f64) -> f64 {
        match self {
            Self::Add => accumulator + operand,
            Self::Subtract => accumulator - operand,
            Self::Multiply => accumulator * operand,
            Self::Divide => accumulator / operand,
        }
    }
}

/// One whitespace-delimited unit of a `?`-stripped, lowercased question.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A reserved grammar word.
    Keyword(Keyword),
    /// A non-negative integer operand.
    Operand(u64),
    /// Anything else: an unknown word or a signed/malformed number.
    Word(String),
}

impl Token {
    /// Classify an already-lowercased word.
    pub fn classify(word: &str) -> Self {
        if let Some(keyword) = Keyword::parse(word) {
            return Self::Keyword(keyword);
        }
        match word.parse::<u64>() {
            Ok(value) => Self::Operand(value),
            Err(_) => Self::Word(word.to_string()),
        }
    }

    /// Numeric value when this token is an operand.
    pub fn operand(&self) -> Option<u64> {
        match self {
            Self::Operand(value) => Some(*value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_keyword_round_trip() {
        for keyword in [
            Keyword::What,
            Keyword::Is,
            Keyword::Plus,
            Keyword::Minus,
            Keyword::Multiplied,
            Keyword::Divided,
            Keyword::By,
        ] {
            assert_eq!(Keyword::parse(keyword.as_str()), Some(keyword));
        }
    }

    #[test]
    fn test_keyword_parse_rejects_unknown_and_uppercase() {
        assert_eq!(Keyword::parse("times"), None);
        assert_eq!(Keyword::parse("Plus"), None);
        assert_eq!(Keyword::parse(""), None);
    }

    #[test]
    fn test_operation_mapping() {
        assert_eq!(Keyword::Plus.operation(), Some(Op::Add));
        assert_eq!(Keyword::Minus.operation(), Some(Op::Subtract));
        assert_eq!(Keyword::Multiplied.operation(), Some(Op::Multiply));
        assert_eq!(Keyword::Divided.operation(), Some(Op::Divide));
        assert_eq!(Keyword::What.operation(), None);
        assert_eq!(Keyword::Is.operation(), None);
        assert_eq!(Keyword::By.operation(), None);
    }

    #[test]
    fn test_needs_by() {
        assert!(Op::Multiply.needs_by());
        assert!(Op::Divide.needs_by());
        assert!(!Op::Add.needs_by());
        assert!(!Op::Subtract.needs_by());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Op::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Op::Subtract.apply(2.0, 3.0), -1.0);
        assert_eq!(Op::Multiply.apply(5.0, 10.0), 50.0);
        assert_eq!(Op::Divide.apply(7.0, 2.0), 3.5);
    }

    #[test]
    fn test_classify() {
        assert_matches!(Token::classify("plus"), Token::Keyword(Keyword::Plus));
        assert_matches!(Token::classify("by"), Token::Keyword(Keyword::By));
        assert_matches!(Token::classify("42"), Token::Operand(42));
        assert_matches!(Token::classify("0"), Token::Operand(0));
        assert_matches!(Token::classify("-3"), Token::Word(_));
        assert_matches!(Token::classify("3.5"), Token::Word(_));
        assert_matches!(Token::classify("hobbits"), Token::Word(_));
    }

    #[test]
    fn test_operand_accessor() {
        assert_eq!(Token::classify("17").operand(), Some(17));
        assert_eq!(Token::classify("plus").operand(), None);
        assert_eq!(Token::classify("seventeen").operand(), None);
    }
}
