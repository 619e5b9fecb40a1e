pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod knowledge;
pub mod personality;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LlmSettings, OpenRouterClient, RetryPolicy};
pub use config::cli::LocalStorage;
pub use config::toml_config::TomlConfig;
pub use core::{
    engine::{AdvisorEngine, RunSummary},
    export::BatchExport,
    orchestrator::RecommendationOrchestrator,
    pipeline::OrientationPipeline,
    session::Session,
};
pub use knowledge::KnowledgeBase;
pub use personality::{classify, PersonalityProfile, PersonalityTallies};
pub use utils::error::{AdvisorError, LlmError, Result};
