// Knowledge base of occupations, sectors, skills and training programs for
// the local labor market, plus the lookup and scoring built on top of it.

pub mod normalize;
pub mod report;
pub mod store;
pub mod types;

pub use normalize::{fold, normalize};
pub use report::{KnowledgeBaseSummary, ValidationReport};
pub use store::{similarity_score, KnowledgeBase};
pub use types::{
    CompatibilityAnalysis, DemandLevel, KnowledgeDocument, Occupation, Sector, Skill, SkillKind,
    TrainingProgram,
};
