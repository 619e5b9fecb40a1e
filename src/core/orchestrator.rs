use crate::core::analyzer::CompatibilityAnalyzer;
use crate::core::prompt::render_prompt;
use crate::core::sections::parse_sections;
use crate::domain::model::{
    AnalysisBundle, BatchResult, ProcessedStudent, Recommendation, RecommendationMetadata,
    RecommendationOutcome, StudentRecord,
};
use crate::domain::ports::CompletionClient;
use crate::knowledge::KnowledgeBase;
use crate::personality::PersonalityProfile;
use crate::utils::error::{LlmError, Result};
use chrono::Utc;
use std::sync::Arc;

/// Analysis and prompt for one student, before the LLM is called.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub bundle: AnalysisBundle,
    pub prompt: String,
}

pub struct RecommendationOrchestrator<C: CompletionClient> {
    kb: Arc<KnowledgeBase>,
    client: C,
    personality: Option<PersonalityProfile>,
}

impl<C: CompletionClient> RecommendationOrchestrator<C> {
    pub fn new(kb: Arc<KnowledgeBase>, client: C) -> Self {
        Self {
            kb,
            client,
            personality: None,
        }
    }

    pub fn with_personality(mut self, personality: Option<PersonalityProfile>) -> Self {
        self.personality = personality;
        self
    }

    pub fn personality(&self) -> Option<&PersonalityProfile> {
        self.personality.as_ref()
    }

    pub fn prepare(&self, student: &StudentRecord) -> PreparedRequest {
        let bundle = CompatibilityAnalyzer::new(&self.kb).analyze(student);
        let prompt = render_prompt(student, &bundle, self.personality.as_ref());
        PreparedRequest { bundle, prompt }
    }

    pub async fn recommend(&self, student: &StudentRecord) -> Result<Recommendation> {
        let PreparedRequest { bundle, prompt } = self.prepare(student);
        tracing::debug!("Prompt for {} ({} chars)", student.display_name(), prompt.len());

        let narrative = self.client.complete(&prompt).await?;
        if narrative.trim().is_empty() {
            return Err(LlmError::EmptyContent.into());
        }

        Ok(Recommendation {
            sections: parse_sections(&narrative),
            full_recommendation: narrative,
            metadata: RecommendationMetadata {
                student_profile: bundle,
                generation_timestamp: Utc::now(),
            },
        })
    }

    /// Never fails: an error becomes that student's outcome.
    pub async fn process(&self, student: StudentRecord) -> ProcessedStudent {
        let recommendation = match self.recommend(&student).await {
            Ok(recommendation) => RecommendationOutcome::Generated(Box::new(recommendation)),
            Err(e) => {
                tracing::error!(
                    "❌ Recommendation failed for {}: {}",
                    student.display_name(),
                    e
                );
                RecommendationOutcome::Failed {
                    error: e.to_string(),
                }
            }
        };

        ProcessedStudent {
            student,
            recommendation,
        }
    }

    /// One student at a time, in roster order.
    pub async fn run_batch(&self, students: Vec<StudentRecord>) -> BatchResult {
        let total = students.len();
        let mut processed = Vec::with_capacity(total);

        for (index, student) in students.into_iter().enumerate() {
            tracing::info!(
                "🎯 [{}/{}] Analyse en cours pour {}",
                index + 1,
                total,
                student.display_name()
            );
            processed.push(self.process(student).await);
        }

        BatchResult {
            processed,
            generated_at: Utc::now(),
        }
    }
}
