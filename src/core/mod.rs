pub mod analyzer;
pub mod engine;
pub mod export;
pub mod orchestrator;
pub mod pipeline;
pub mod prompt;
pub mod sections;
pub mod session;

pub use crate::domain::model::{BatchResult, ProcessedStudent, StudentRecord};
pub use crate::domain::ports::{CompletionClient, ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
