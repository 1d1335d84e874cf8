// Internal modules
pub mod error;
pub mod grammar;
pub mod lexical;
pub mod tokens;

// Re-export key types for library consumers
pub use error::Reason;
pub use grammar::{evaluate, interpret, validate, Evaluation, Validation};
pub use lexical::tokenize;
pub use tokens::{Keyword, Op, Token};
