use crate::adapters::roster::{parse_roster, RosterFormat};
use crate::core::export::BatchExport;
use crate::core::orchestrator::RecommendationOrchestrator;
use crate::core::session::Session;
use crate::domain::model::{BatchResult, StudentRecord};
use crate::domain::ports::{CompletionClient, ConfigProvider, Pipeline, Storage};
use crate::utils::error::{AdvisorError, Result};
use std::path::Path;

/// Roster file in, recommendations through the LLM, report file out.
pub struct OrientationPipeline<S: Storage, P: ConfigProvider, C: CompletionClient> {
    storage: S,
    config: P,
    orchestrator: RecommendationOrchestrator<C>,
}

impl<S: Storage, P: ConfigProvider, C: CompletionClient> OrientationPipeline<S, P, C> {
    pub fn new(storage: S, config: P, session: &Session, client: C) -> Self {
        let orchestrator = RecommendationOrchestrator::new(session.knowledge_base(), client)
            .with_personality(session.personality().cloned());

        Self {
            storage,
            config,
            orchestrator,
        }
    }

    pub fn orchestrator(&self) -> &RecommendationOrchestrator<C> {
        &self.orchestrator
    }

    fn output_file(&self, file_name: &str) -> String {
        Path::new(self.config.output_path())
            .join(file_name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, P: ConfigProvider, C: CompletionClient> Pipeline for OrientationPipeline<S, P, C> {
    async fn extract(&self) -> Result<Vec<StudentRecord>> {
        let input_path = self.config.input_path();
        let format = RosterFormat::from_path(input_path)?;

        tracing::debug!("Reading roster {} as {:?}", input_path, format);
        let bytes = self.storage.read_file(input_path).await?;
        let parsed = parse_roster(&bytes, format)?;

        if parsed.students.is_empty() {
            return Err(AdvisorError::RosterError {
                message: format!("Aucun étudiant trouvé dans {}", input_path),
            });
        }

        Ok(parsed.students)
    }

    async fn transform(&self, students: Vec<StudentRecord>) -> Result<BatchResult> {
        Ok(self.orchestrator.run_batch(students).await)
    }

    async fn load(&self, result: BatchResult) -> Result<String> {
        let export = BatchExport::from(result);
        let stem = export.file_stem(self.config.export_prefix());

        let (file_name, data) = if self.config.compress_export() {
            (format!("{}.zip", stem), export.to_zip_bundle(&stem)?)
        } else {
            (format!("{}.json", stem), export.to_json_pretty()?.into_bytes())
        };

        let output_path = self.output_file(&file_name);
        tracing::debug!("Writing report ({} bytes) to {}", data.len(), output_path);
        self.storage.write_file(&output_path, &data).await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::llm::LlmSettings;
    use crate::knowledge::KnowledgeBase;
    use crate::utils::error::LlmError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn with_file(path: &str, data: &[u8]) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), data.to_vec());
            Self {
                files: Arc::new(Mutex::new(files)),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AdvisorError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        input_path: String,
        compress: bool,
    }

    impl ConfigProvider for MockConfig {
        fn knowledge_base_path(&self) -> &str {
            "unused.json"
        }

        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn output_path(&self) -> &str {
            "out"
        }

        fn personality_path(&self) -> Option<&str> {
            None
        }

        fn llm_settings(&self) -> LlmSettings {
            LlmSettings::new("test-key")
        }

        fn export_prefix(&self) -> &str {
            "rapport"
        }

        fn compress_export(&self) -> bool {
            self.compress
        }
    }

    struct EchoClient;

    #[async_trait]
    impl CompletionClient for EchoClient {
        async fn complete(&self, _prompt: &str) -> std::result::Result<String, LlmError> {
            Ok("2. NIVEAU D'ADÉQUATION: Bonne adéquation".to_string())
        }
    }

    const ROSTER: &str = "Nom,Prénom,Date de Naissance,Lieu de Naissance,Filière Actuelle,Carrière Envisagée\n\
        Adjovi,Mireille,,Cotonou,Informatique,Développeur Web\n";

    fn session() -> Session {
        Session::new(
            KnowledgeBase::from_json_str(include_str!("../../tests/fixtures/knowledge_base.json"))
                .unwrap(),
        )
    }

    fn pipeline(storage: MockStorage, input: &str, compress: bool) -> OrientationPipeline<MockStorage, MockConfig, EchoClient> {
        let config = MockConfig {
            input_path: input.to_string(),
            compress,
        };
        OrientationPipeline::new(storage, config, &session(), EchoClient)
    }

    #[tokio::test]
    async fn test_extract_transform_load_json() {
        let storage = MockStorage::with_file("eleves.csv", ROSTER.as_bytes());
        let pipeline = pipeline(storage.clone(), "eleves.csv", false);

        let students = pipeline.extract().await.unwrap();
        let result = pipeline.transform(students).await.unwrap();
        let path = pipeline.load(result).await.unwrap();

        assert!(path.starts_with("out"));
        assert!(path.ends_with(".json"));
        let written = storage.get_file(&path).await.unwrap();
        let export = BatchExport::from_json(std::str::from_utf8(&written).unwrap()).unwrap();
        assert_eq!(export.students_analysis.len(), 1);
        let recommendation = export.students_analysis[0]
            .recommendation
            .recommendation()
            .unwrap();
        assert_eq!(recommendation.sections.adequacy_level, "Bonne adéquation");
    }

    #[tokio::test]
    async fn test_load_writes_zip_when_compressed() {
        let storage = MockStorage::with_file("eleves.csv", ROSTER.as_bytes());
        let pipeline = pipeline(storage.clone(), "eleves.csv", true);

        let students = pipeline.extract().await.unwrap();
        let result = pipeline.transform(students).await.unwrap();
        let path = pipeline.load(result).await.unwrap();

        assert!(path.ends_with(".zip"));
        assert!(storage.get_file(&path).await.is_some());
    }

    #[tokio::test]
    async fn test_extract_rejects_empty_roster() {
        let header = "Nom,Prénom,Date de Naissance,Lieu de Naissance,Filière Actuelle,Carrière Envisagée\n";
        let storage = MockStorage::with_file("vide.csv", header.as_bytes());
        let pipeline = pipeline(storage, "vide.csv", false);

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, AdvisorError::RosterError { .. }));
    }

    #[tokio::test]
    async fn test_extract_rejects_unknown_format() {
        let storage = MockStorage::with_file("eleves.pdf", b"");
        let pipeline = pipeline(storage, "eleves.pdf", false);

        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, AdvisorError::UnsupportedFormatError { .. }));
    }
}
