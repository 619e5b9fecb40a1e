use crate::adapters::llm::LlmSettings;
use crate::domain::model::{BatchResult, StudentRecord};
use crate::utils::error::{LlmError, Result};
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn knowledge_base_path(&self) -> &str;
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn personality_path(&self) -> Option<&str>;
    fn llm_settings(&self) -> LlmSettings;
    fn export_prefix(&self) -> &str;
    fn compress_export(&self) -> bool;
}

/// Turns a prompt into narrative text.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> std::result::Result<String, LlmError>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<StudentRecord>>;
    async fn transform(&self, students: Vec<StudentRecord>) -> Result<BatchResult>;
    async fn load(&self, result: BatchResult) -> Result<String>;
}
