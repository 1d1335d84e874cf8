// Internal modules
pub mod api;
pub mod config;
pub mod store;

// Re-export key types for front ends
pub use api::{
    EvaluateResponse, QuestionRequest, QuestionService, RequestError, ValidateResponse,
};
pub use config::{CliConfig, ConfigError};
pub use store::{Endpoint, FailureRecord, FailureStore};
