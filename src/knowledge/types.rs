use crate::knowledge::normalize::normalize;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Labor-market demand attached to an occupation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DemandLevel {
    #[serde(rename = "élevé")]
    High,
    #[serde(rename = "moyen")]
    Medium,
    #[serde(rename = "faible")]
    Low,
}

impl DemandLevel {
    /// Reads a demand label regardless of case, accents or spacing, in French or English.
    pub fn parse(label: &str) -> Option<Self> {
        match normalize(label).as_str() {
            "eleve" | "high" => Some(DemandLevel::High),
            "moyen" | "medium" => Some(DemandLevel::Medium),
            "faible" | "low" => Some(DemandLevel::Low),
            _ => None,
        }
    }
}

impl<'de> Deserialize<'de> for DemandLevel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        DemandLevel::parse(&label).ok_or_else(|| {
            serde::de::Error::custom(format!(
                "unknown demand level '{}', expected élevé, moyen or faible",
                label
            ))
        })
    }
}

impl fmt::Display for DemandLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DemandLevel::High => "élevé",
            DemandLevel::Medium => "moyen",
            DemandLevel::Low => "faible",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillKind {
    #[serde(rename = "technique", alias = "technical")]
    Technical,
    #[serde(rename = "transversale", alias = "transversal")]
    Transversal,
    #[serde(rename = "numérique", alias = "numerique", alias = "digital")]
    Digital,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Occupation {
    #[serde(rename = "nom_metier")]
    pub name: String,
    pub description: String,
    #[serde(rename = "secteur_activite")]
    pub sector: String,
    #[serde(rename = "competences_requises_techniques")]
    pub technical_skills: Vec<String>,
    #[serde(rename = "competences_requises_transversales")]
    pub transversal_skills: Vec<String>,
    #[serde(rename = "formations_typiques")]
    pub typical_trainings: Vec<String>,
    #[serde(rename = "niveau_demande_marche")]
    pub demand: DemandLevel,
    #[serde(rename = "perspectives_croissance")]
    pub growth_outlook: bool,
    #[serde(rename = "pertinence_realites_africaines_benin")]
    pub local_relevance: String,
}

/// `occupations` holds names only; they are resolved through the store when queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    #[serde(rename = "nom_secteur")]
    pub name: String,
    pub description: String,
    #[serde(rename = "metiers_associes")]
    pub occupations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    #[serde(rename = "nom_competence")]
    pub name: String,
    #[serde(rename = "type_competence")]
    pub kind: SkillKind,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingProgram {
    #[serde(rename = "nom_formation")]
    pub name: String,
    pub description: String,
    #[serde(rename = "metiers_prepares")]
    pub prepares_for: Vec<String>,
    #[serde(rename = "institutions_references")]
    pub institutions: Vec<String>,
}

/// The on-disk document. Every collection is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    #[serde(rename = "metiers", default)]
    pub occupations: Vec<Occupation>,
    #[serde(rename = "secteurs_porteurs", default)]
    pub sectors: Vec<Sector>,
    #[serde(rename = "competences", default)]
    pub skills: Vec<Skill>,
    #[serde(rename = "formations", default)]
    pub trainings: Vec<TrainingProgram>,
}

/// Fit between a field of study and a target occupation.
///
/// `score` is always within `0..=10`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityAnalysis {
    #[serde(rename = "metier_trouve")]
    pub occupation_found: bool,
    /// Name of the resolved occupation, looked up again through the store when needed.
    #[serde(rename = "metier")]
    pub occupation: Option<String>,
    #[serde(rename = "compatibility_score")]
    pub score: u8,
    #[serde(rename = "formations_matching")]
    pub matching_trainings: Vec<String>,
    #[serde(rename = "competences_gaps")]
    pub skill_gaps: Vec<String>,
    #[serde(rename = "recommendations")]
    pub hints: Vec<String>,
}

impl CompatibilityAnalysis {
    pub fn not_found() -> Self {
        Self::default()
    }
}
