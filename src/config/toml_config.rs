use crate::adapters::llm::{self, LlmSettings, RetryPolicy};
use crate::config::{DEFAULT_KNOWLEDGE_BASE, ROSTER_EXTENSIONS};
use crate::core::export::DEFAULT_EXPORT_PREFIX;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{AdvisorError, Result};
use crate::utils::logger::LOG_LEVELS;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub advisor: AdvisorConfig,
    #[serde(default)]
    pub knowledge_base: KnowledgeBaseConfig,
    pub input: InputConfig,
    pub llm: LlmConfig,
    pub export: ExportConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBaseConfig {
    pub path: String,
}

impl Default for KnowledgeBaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_KNOWLEDGE_BASE.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub roster: String,
    pub personality: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub api_key: String,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    pub output_path: String,
    pub filename_prefix: Option<String>,
    pub compression: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub log_level: Option<String>,
    pub log_format: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AdvisorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value. Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AdvisorError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn endpoint(&self) -> &str {
        self.llm.endpoint.as_deref().unwrap_or(llm::DEFAULT_ENDPOINT)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.monitoring.as_ref().and_then(|m| m.log_level.as_deref())
    }

    pub fn log_format(&self) -> &str {
        self.monitoring
            .as_ref()
            .and_then(|m| m.log_format.as_deref())
            .unwrap_or("compact")
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("advisor.name", &self.advisor.name)?;
        validation::validate_path("knowledge_base.path", &self.knowledge_base.path)?;
        validation::validate_file_extension("input.roster", &self.input.roster, &ROSTER_EXTENSIONS)?;
        if let Some(personality) = &self.input.personality {
            validation::validate_file_extension("input.personality", personality, &["json"])?;
        }

        validation::validate_url("llm.endpoint", self.endpoint())?;
        validation::validate_non_empty_string("llm.api_key", &self.llm.api_key)?;
        if self.llm.api_key.starts_with("${") {
            return Err(AdvisorError::MissingConfigError {
                field: format!("llm.api_key (unset variable {})", self.llm.api_key),
            });
        }
        if let Some(model) = &self.llm.model {
            validation::validate_non_empty_string("llm.model", model)?;
        }
        if let Some(temperature) = self.llm.temperature {
            validation::validate_range("llm.temperature", temperature, 0.0, 2.0)?;
        }
        if let Some(top_p) = self.llm.top_p {
            validation::validate_range("llm.top_p", top_p, 0.0, 1.0)?;
        }
        if let Some(max_tokens) = self.llm.max_tokens {
            validation::validate_positive_number("llm.max_tokens", max_tokens as usize, 1)?;
        }
        if let Some(attempts) = self.llm.retry_attempts {
            validation::validate_positive_number("llm.retry_attempts", attempts as usize, 1)?;
        }

        if let Some(level) = self.log_level() {
            if !LOG_LEVELS.contains(&level) {
                return Err(AdvisorError::InvalidConfigValueError {
                    field: "monitoring.log_level".to_string(),
                    value: level.to_string(),
                    reason: format!("expected one of {}", LOG_LEVELS.join(", ")),
                });
            }
        }

        validation::validate_path("export.output_path", &self.export.output_path)?;
        if let Some(prefix) = &self.export.filename_prefix {
            validation::validate_non_empty_string("export.filename_prefix", prefix)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn knowledge_base_path(&self) -> &str {
        &self.knowledge_base.path
    }

    fn input_path(&self) -> &str {
        &self.input.roster
    }

    fn output_path(&self) -> &str {
        &self.export.output_path
    }

    fn personality_path(&self) -> Option<&str> {
        self.input.personality.as_deref()
    }

    fn llm_settings(&self) -> LlmSettings {
        let defaults = LlmSettings::new(self.llm.api_key.clone());
        LlmSettings {
            endpoint: self.endpoint().to_string(),
            model: self.llm.model.clone().unwrap_or(defaults.model.clone()),
            temperature: self.llm.temperature.unwrap_or(defaults.temperature),
            max_tokens: self.llm.max_tokens.unwrap_or(defaults.max_tokens),
            top_p: self.llm.top_p.unwrap_or(defaults.top_p),
            timeout: self
                .llm
                .timeout_seconds
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
            retry: RetryPolicy::new(
                self.llm
                    .retry_attempts
                    .unwrap_or(defaults.retry.max_attempts),
                self.llm
                    .retry_delay_seconds
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.retry.delay),
            ),
            ..defaults
        }
    }

    fn export_prefix(&self) -> &str {
        self.export
            .filename_prefix
            .as_deref()
            .unwrap_or(DEFAULT_EXPORT_PREFIX)
    }

    fn compress_export(&self) -> bool {
        self.export.compression.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
