use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("LLM call failed: {0}")]
    LlmError(#[from] LlmError),

    #[error("Knowledge base file not found: {path}")]
    KnowledgeBaseNotFound { path: String },

    #[error("Knowledge base could not be parsed: {message}")]
    KnowledgeBaseParseError { message: String },

    #[error("Knowledge base not loaded")]
    KnowledgeBaseNotLoaded,

    #[error("Roster error: {message}")]
    RosterError { message: String },

    #[error("Unsupported roster format: {extension}")]
    UnsupportedFormatError { extension: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

/// Failures of the outbound chat-completion call.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid API response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("API response has no content")]
    EmptyContent,

    #[error("all {attempts} attempts failed, last error: {last}")]
    RetriesExhausted { attempts: u32, last: Box<LlmError> },
}

impl LlmError {
    /// Transport failures and non-2xx statuses are worth another attempt.
    pub fn is_retryable(&self) -> bool {
        matches!(self, LlmError::Http(_) | LlmError::Api { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    KnowledgeBase,
    Input,
    Network,
    Output,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl AdvisorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AdvisorError::ConfigError { .. }
            | AdvisorError::ConfigValidationError { .. }
            | AdvisorError::InvalidConfigValueError { .. }
            | AdvisorError::MissingConfigError { .. } => ErrorCategory::Configuration,
            AdvisorError::KnowledgeBaseNotFound { .. }
            | AdvisorError::KnowledgeBaseParseError { .. }
            | AdvisorError::KnowledgeBaseNotLoaded => ErrorCategory::KnowledgeBase,
            AdvisorError::RosterError { .. }
            | AdvisorError::UnsupportedFormatError { .. }
            | AdvisorError::CsvError(_) => ErrorCategory::Input,
            AdvisorError::LlmError(_) => ErrorCategory::Network,
            AdvisorError::ZipError(_) | AdvisorError::IoError(_) => ErrorCategory::Output,
            AdvisorError::SerializationError(_) | AdvisorError::ProcessingError { .. } => {
                ErrorCategory::Processing
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Input | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Configuration
            | ErrorCategory::KnowledgeBase
            | ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            AdvisorError::KnowledgeBaseNotFound { .. } => {
                "Check the --knowledge-base path; the analysis cannot run without it"
            }
            AdvisorError::KnowledgeBaseParseError { .. } => {
                "Fix the JSON document: every occupation, sector, skill and training needs all its fields"
            }
            AdvisorError::KnowledgeBaseNotLoaded => "Load the knowledge base before querying it",
            AdvisorError::RosterError { .. } | AdvisorError::CsvError(_) => {
                "Make sure the roster has the columns Nom, Prénom, Date de Naissance, Lieu de Naissance, Filière Actuelle, Carrière Envisagée"
            }
            AdvisorError::UnsupportedFormatError { .. } => "Use a .csv, .tsv, .txt or .docx roster",
            AdvisorError::LlmError(_) => "Check the API key and network access, then retry",
            AdvisorError::MissingConfigError { .. } => {
                "Provide the missing value on the command line, in the TOML file or via OPENROUTER_API_KEY"
            }
            AdvisorError::ConfigError { .. }
            | AdvisorError::ConfigValidationError { .. }
            | AdvisorError::InvalidConfigValueError { .. } => "Review the configuration values",
            AdvisorError::ZipError(_) | AdvisorError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            AdvisorError::SerializationError(_) | AdvisorError::ProcessingError { .. } => {
                "Run again with --verbose and inspect the logs"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::KnowledgeBase => {
                format!("The knowledge base is not available: {}", self)
            }
            ErrorCategory::Input => format!("The student roster could not be read: {}", self),
            ErrorCategory::Network => format!("The AI service could not be reached: {}", self),
            ErrorCategory::Output => format!("The report could not be written: {}", self),
            ErrorCategory::Processing => format!("Processing failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
