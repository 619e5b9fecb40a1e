use crate::knowledge::store::KnowledgeBase;
use crate::utils::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBaseSummary {
    pub total_occupations: usize,
    pub total_sectors: usize,
    pub total_skills: usize,
    pub total_trainings: usize,
    pub high_demand_occupations: usize,
    pub growth_occupations: usize,
    pub sector_names: Vec<String>,
}

/// Integrity report. Warnings never make the base unusable; errors do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub statistics: Option<KnowledgeBaseSummary>,
}

impl KnowledgeBase {
    pub fn summary(&self) -> Result<KnowledgeBaseSummary> {
        if !self.is_loaded() {
            return Err(AdvisorError::KnowledgeBaseNotLoaded);
        }

        Ok(KnowledgeBaseSummary {
            total_occupations: self.occupation_count(),
            total_sectors: self.sector_count(),
            total_skills: self.skill_count(),
            total_trainings: self.training_count(),
            high_demand_occupations: self.high_demand_occupations().len(),
            growth_occupations: self.growth_occupations().len(),
            sector_names: self.sectors().map(|sector| sector.name.clone()).collect(),
        })
    }

    pub fn validate(&self) -> ValidationReport {
        let Ok(statistics) = self.summary() else {
            return ValidationReport {
                is_valid: false,
                errors: vec![AdvisorError::KnowledgeBaseNotLoaded.to_string()],
                warnings: Vec::new(),
                statistics: None,
            };
        };

        let mut warnings = Vec::new();
        for occupation in self.occupations() {
            if occupation.description.trim().is_empty() {
                warnings.push(format!("Occupation '{}' has no description", occupation.name));
            }
            if occupation.technical_skills.is_empty() {
                warnings.push(format!(
                    "Occupation '{}' lists no technical skills",
                    occupation.name
                ));
            }
        }
        for sector in self.sectors() {
            if sector.occupations.is_empty() {
                warnings.push(format!("Sector '{}' has no associated occupations", sector.name));
            }
        }

        for warning in &warnings {
            tracing::warn!("⚠️ {}", warning);
        }

        ValidationReport {
            is_valid: true,
            errors: Vec::new(),
            warnings,
            statistics: Some(statistics),
        }
    }
}
