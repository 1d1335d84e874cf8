//! Grammar walk shared by validation and evaluation.
//!
//! After the "what is" prefix and the leading operand, the cursor alternates
//! between a keyword position and an operand position, with an extra `by`
//! hop for multiply/divide. Both public entry points run the same walk, so a
//! question validates if and only if it evaluates.

use crate::error::Reason;
use crate::lexical::tokenize;
use crate::tokens::{Keyword, Op, Token};

/// Outcome of a grammar check.
///
/// `reason` is `None` exactly when `valid` is true.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validation {
    pub valid: bool,
    pub reason: Option<Reason>,
}

/// Outcome of evaluating a question.
///
/// On failure `value` is `0.0` and `reason` carries the validator's reason
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub reason: Option<Reason>,
}

/// Validate a question against the grammar.
pub fn validate(expression: &str) -> Validation {
    match interpret(expression) {
        Ok(_) => Validation {
            valid: true,
            reason: None,
        },
        Err(reason) => Validation {
            valid: false,
            reason: Some(reason),
        },
    }
}

/// Evaluate a question, re-checking the grammar first.
pub fn evaluate(expression: &str) -> Evaluation {
    match interpret(expression) {
        Ok(value) => Evaluation {
            value,
            reason: None,
        },
        Err(reason) => Evaluation {
            value: 0.0,
            reason: Some(reason),
        },
    }
}

/// Tokenize and walk a question, producing its value.
///
/// Checks run in fixed priority order: terminator, question shape, leading
/// operand, then the keyword/operand pairs left to right. The first failing
/// check decides the reason.
pub fn interpret(expression: &str) -> Result<f64, Reason> {
    let tokens = tokenize(expression)?;

    if tokens.len() < 3
        || tokens[0] != Token::Keyword(Keyword::What)
        || tokens[1] != Token::Keyword(Keyword::Is)
    {
        return Err(Reason::NonMathQuestion);
    }

    let mut accumulator = tokens[2].operand().ok_or(Reason::InvalidExpression)? as f64;

    let mut index = 3;
    while index < tokens.len() {
        let op = match &tokens[index] {
            Token::Keyword(keyword) => keyword
                .operation()
                .ok_or(Reason::UnsupportedOperation)?,
            _ => return Err(Reason::UnsupportedOperation),
        };

        if op.needs_by() {
            match tokens.get(index + 1) {
                Some(Token::Keyword(Keyword::By)) => {}
                _ => return Err(Reason::InvalidExpression),
            }

            // A literal zero divisor is a grammar failure, not a runtime one.
            if op == Op::Divide {
                if let Some(divisor) = tokens.get(index + 2) {
                    if divisor.operand() == Some(0) {
                        return Err(Reason::InvalidExpression);
                    }
                }
            }

            index += 1;
        }

        let operand = tokens
            .get(index + 1)
            .and_then(Token::operand)
            .ok_or(Reason::InvalidExpression)? as f64;

        accumulator = op.apply(accumulator, operand);
        index += 2;
    }

    Ok(accumulator)
}
