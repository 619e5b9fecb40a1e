use crate::domain::model::{BatchResult, BatchStats, ProcessedStudent, RecommendationOutcome};
use crate::utils::error::{AdvisorError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const DEFAULT_EXPORT_PREFIX: &str = "rapport_orientation";

const SUMMARY_HEADERS: [&str; 8] = [
    "Nom",
    "Prénom",
    "Filière Actuelle",
    "Carrière Envisagée",
    "Statut",
    "Score de compatibilité",
    "Niveau d'adéquation",
    "Erreur",
];

/// The exported report: every student with its recommendation or error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchExport {
    pub students_analysis: Vec<ProcessedStudent>,
    pub generated_at: DateTime<Utc>,
}

impl From<BatchResult> for BatchExport {
    fn from(result: BatchResult) -> Self {
        Self {
            students_analysis: result.processed,
            generated_at: result.generated_at,
        }
    }
}

impl BatchExport {
    pub fn stats(&self) -> BatchStats {
        BatchStats::from_processed(&self.students_analysis)
    }

    /// `<prefix>_YYYYmmdd_HHMMSS`, without extension.
    pub fn file_stem(&self, prefix: &str) -> String {
        format!("{}_{}", prefix, self.generated_at.format("%Y%m%d_%H%M%S"))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// One row per student.
    pub fn summary_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(SUMMARY_HEADERS)?;

        for item in &self.students_analysis {
            let student = &item.student;
            let (status, score, adequacy, error) = match &item.recommendation {
                RecommendationOutcome::Generated(recommendation) => (
                    "succès",
                    recommendation
                        .metadata
                        .student_profile
                        .compatibility
                        .as_ref()
                        .map(|c| c.score.to_string())
                        .unwrap_or_default(),
                    recommendation.sections.adequacy_level.clone(),
                    String::new(),
                ),
                RecommendationOutcome::Failed { error } => {
                    ("erreur", String::new(), String::new(), error.clone())
                }
            };

            writer.write_record([
                student.last_name.as_str(),
                student.first_name.as_str(),
                student.current_field.as_str(),
                student.intended().unwrap_or_default(),
                status,
                score.as_str(),
                adequacy.as_str(),
                error.as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| AdvisorError::IoError(e.into_error()))?;
        String::from_utf8(bytes).map_err(|e| AdvisorError::ProcessingError {
            message: format!("Summary is not valid UTF-8: {}", e),
        })
    }

    /// ZIP holding `<stem>.json` and `<stem>.csv`.
    pub fn to_zip_bundle(&self, stem: &str) -> Result<Vec<u8>> {
        let json = self.to_json_pretty()?;
        let csv = self.summary_csv()?;

        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));

        zip.start_file::<_, ()>(format!("{}.json", stem), FileOptions::default())?;
        zip.write_all(json.as_bytes())?;

        zip.start_file::<_, ()>(format!("{}.csv", stem), FileOptions::default())?;
        zip.write_all(csv.as_bytes())?;

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}
