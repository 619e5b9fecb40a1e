pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::adapters::llm::{self, LlmSettings, RetryPolicy};
#[cfg(feature = "cli")]
use crate::core::export::DEFAULT_EXPORT_PREFIX;
#[cfg(feature = "cli")]
use crate::domain::ports::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::time::Duration;

pub const DEFAULT_KNOWLEDGE_BASE: &str = "knowledge_base_benin.json";
pub const ROSTER_EXTENSIONS: [&str; 5] = ["xlsx", "csv", "tsv", "docx", "txt"];

#[cfg(feature = "cli")]
#[derive(Clone, Parser)]
#[command(name = "orientation-advisor")]
#[command(about = "Career-orientation recommendations for student rosters")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_KNOWLEDGE_BASE)]
    pub knowledge_base: String,

    #[arg(long, short, help = "Roster file (.xlsx, .csv, .tsv, .docx or .txt)")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    #[arg(long, env = "OPENROUTER_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, default_value = llm::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    #[arg(long, default_value = llm::DEFAULT_MODEL)]
    pub model: String,

    #[arg(long, default_value_t = llm::DEFAULT_RETRY_ATTEMPTS)]
    pub retry_attempts: u32,

    #[arg(long, default_value_t = llm::DEFAULT_RETRY_DELAY_SECONDS)]
    pub retry_delay_seconds: u64,

    #[arg(long, default_value_t = llm::DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    #[arg(long, help = "Personality tallies JSON, e.g. {\"EI\": {\"E\": 6, \"I\": 4}, ...}")]
    pub personality: Option<String>,

    #[arg(long, default_value = DEFAULT_EXPORT_PREFIX)]
    pub export_prefix: String,

    #[arg(long, help = "Write a ZIP with the JSON report and a CSV summary")]
    pub zip: bool,

    #[arg(long, help = "Build analyses and prompts without calling the LLM")]
    pub dry_run: bool,

    #[arg(long, help = "Send a test prompt to the LLM endpoint and exit")]
    pub check_api: bool,

    #[arg(long, default_value = "compact", value_parser = ["compact", "json"])]
    pub log_format: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl std::fmt::Debug for CliConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CliConfig")
            .field("knowledge_base", &self.knowledge_base)
            .field("input", &self.input)
            .field("output_path", &self.output_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("personality", &self.personality)
            .field("zip", &self.zip)
            .field("dry_run", &self.dry_run)
            .finish()
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn knowledge_base_path(&self) -> &str {
        &self.knowledge_base
    }

    fn input_path(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn personality_path(&self) -> Option<&str> {
        self.personality.as_deref()
    }

    fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            endpoint: self.endpoint.clone(),
            model: self.model.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
            retry: RetryPolicy::new(
                self.retry_attempts,
                Duration::from_secs(self.retry_delay_seconds),
            ),
            ..LlmSettings::new(self.api_key.clone().unwrap_or_default())
        }
    }

    fn export_prefix(&self) -> &str {
        &self.export_prefix
    }

    fn compress_export(&self) -> bool {
        self.zip
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("knowledge_base", &self.knowledge_base)?;
        validation::validate_file_extension("input", &self.input, &ROSTER_EXTENSIONS)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_url("endpoint", &self.endpoint)?;
        validation::validate_non_empty_string("model", &self.model)?;
        validation::validate_positive_number("retry_attempts", self.retry_attempts as usize, 1)?;
        validation::validate_positive_number("timeout_seconds", self.timeout_seconds as usize, 1)?;
        validation::validate_non_empty_string("export_prefix", &self.export_prefix)?;

        if let Some(personality) = &self.personality {
            validation::validate_file_extension("personality", personality, &["json"])?;
        }

        // A dry run never reaches the API.
        if !self.dry_run {
            let api_key = validation::validate_required_field("api_key", &self.api_key)?;
            validation::validate_non_empty_string("api_key", api_key)?;
        }

        Ok(())
    }
}
