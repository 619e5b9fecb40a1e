use crate::domain::model::{AnalysisBundle, StudentRecord};
use crate::knowledge::KnowledgeBase;

pub const SIMILAR_LIMIT: usize = 3;
pub const SECTOR_SHORTLIST: usize = 3;

/// Gathers what the knowledge base knows about one student's plans.
pub struct CompatibilityAnalyzer<'kb> {
    kb: &'kb KnowledgeBase,
}

impl<'kb> CompatibilityAnalyzer<'kb> {
    pub fn new(kb: &'kb KnowledgeBase) -> Self {
        Self { kb }
    }

    pub fn analyze(&self, student: &StudentRecord) -> AnalysisBundle {
        let mut bundle = AnalysisBundle {
            current_field: student.current_field.clone(),
            intended_occupation: student.intended().map(str::to_string),
            // Store order, not ranked.
            sector_shortlist: self.kb.sectors().take(SECTOR_SHORTLIST).cloned().collect(),
            ..Default::default()
        };

        let Some(intended) = student.intended() else {
            return bundle;
        };

        match self.kb.find_occupation(intended) {
            Some(occupation) => {
                tracing::debug!("'{}' resolved to '{}'", intended, occupation.name);
                bundle.compatibility = Some(
                    self.kb
                        .analyze_compatibility(&student.current_field, intended),
                );
                bundle.alternative_careers = self
                    .kb
                    .similar_occupations(occupation, SIMILAR_LIMIT)
                    .into_iter()
                    .cloned()
                    .collect();
                bundle.occupation = Some(occupation.clone());
            }
            None => {
                tracing::debug!("Intended occupation '{}' not in knowledge base", intended);
            }
        }

        bundle
    }
}
