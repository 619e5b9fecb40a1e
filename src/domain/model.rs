use crate::knowledge::{CompatibilityAnalysis, Occupation, Sector};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One roster line. Field names on the wire are the roster column headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Nom", default)]
    pub last_name: String,
    #[serde(rename = "Prénom", default)]
    pub first_name: String,
    #[serde(rename = "Date de Naissance", default)]
    pub birth_date: String,
    #[serde(rename = "Lieu de Naissance", default)]
    pub birth_place: String,
    #[serde(rename = "Filière Actuelle", default)]
    pub current_field: String,
    #[serde(rename = "Carrière Envisagée", default)]
    pub intended_occupation: Option<String>,
}

impl StudentRecord {
    pub fn display_name(&self) -> String {
        format!("{} {}", self.last_name, self.first_name)
            .trim()
            .to_string()
    }

    /// A record is usable once it has a name and a current field of study.
    pub fn is_complete(&self) -> bool {
        !self.last_name.trim().is_empty() && !self.current_field.trim().is_empty()
    }

    /// The intended occupation, if one was actually given.
    pub fn intended(&self) -> Option<&str> {
        self.intended_occupation
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

/// Everything the knowledge base says about one student, as sent to the LLM.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisBundle {
    #[serde(rename = "filiere_actuelle")]
    pub current_field: String,
    #[serde(rename = "carriere_envisagee")]
    pub intended_occupation: Option<String>,
    #[serde(rename = "metier_trouve")]
    pub occupation: Option<Occupation>,
    #[serde(rename = "compatibility_analysis")]
    pub compatibility: Option<CompatibilityAnalysis>,
    pub alternative_careers: Vec<Occupation>,
    #[serde(rename = "secteur_recommendations")]
    pub sector_shortlist: Vec<Sector>,
}

/// The four labeled parts of a narrative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeSections {
    pub analysis: String,
    pub adequacy_level: String,
    pub alternative_careers: String,
    pub personalized_path: String,
}

impl NarrativeSections {
    pub fn is_empty(&self) -> bool {
        self.analysis.is_empty()
            && self.adequacy_level.is_empty()
            && self.alternative_careers.is_empty()
            && self.personalized_path.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub student_profile: AnalysisBundle,
    pub generation_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub full_recommendation: String,
    #[serde(flatten)]
    pub sections: NarrativeSections,
    pub metadata: RecommendationMetadata,
}

/// Result for one student: either a recommendation or the reason there is none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecommendationOutcome {
    Failed { error: String },
    Generated(Box<Recommendation>),
}

impl RecommendationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, RecommendationOutcome::Generated(_))
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            RecommendationOutcome::Generated(recommendation) => Some(recommendation),
            RecommendationOutcome::Failed { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RecommendationOutcome::Failed { error } => Some(error),
            RecommendationOutcome::Generated(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessedStudent {
    pub student: StudentRecord,
    pub recommendation: RecommendationOutcome,
}

/// Output of one batch run, ready to be exported.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub processed: Vec<ProcessedStudent>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchStats {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
}

impl BatchStats {
    pub fn from_processed(processed: &[ProcessedStudent]) -> Self {
        let successful = processed
            .iter()
            .filter(|item| item.recommendation.is_success())
            .count();

        Self {
            total: processed.len(),
            successful,
            failed: processed.len() - successful,
        }
    }

    /// Percentage of students with a recommendation, `None` for an empty batch.
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.successful as f64 / self.total as f64 * 100.0)
    }
}
