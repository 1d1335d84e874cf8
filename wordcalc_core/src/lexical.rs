//! Question tokenization.
//!
//! A question must end with `?`. The terminator is stripped, the remainder
//! lowercased and split on whitespace, and every word classified into a
//! [`Token`]. Classification never fails: unknown words survive as
//! [`Token::Word`] so the grammar walk can report a positional reason.

use crate::error::Reason;
use crate::tokens::Token;

/// Split a question into classified tokens.
///
/// Fails with [`Reason::InvalidExpression`] when the input is empty or does
/// not end with `?`. Only the final `?` is consumed, so whitespace before
/// the terminator is harmless.
pub fn tokenize(expression: &str) -> Result<Vec<Token>, Reason> {
    let body = expression
        .strip_suffix('?')
        .ok_or(Reason::InvalidExpression)?;

    let lowered = body.to_lowercase();
    Ok(lowered.split_whitespace().map(Token::classify).collect())
}
