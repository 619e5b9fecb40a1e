pub mod catalog;

use crate::utils::error::{AdvisorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

pub use catalog::{LetterExplanation, ProfileDescription};

/// The four questionnaire axes, in the order their letters appear in a profile code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    EnergySource,
    Perception,
    Judgement,
    Lifestyle,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::EnergySource,
        Dimension::Perception,
        Dimension::Judgement,
        Dimension::Lifestyle,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Dimension::EnergySource => "EI",
            Dimension::Perception => "SN",
            Dimension::Judgement => "TF",
            Dimension::Lifestyle => "JP",
        }
    }

    pub fn letters(self) -> (char, char) {
        match self {
            Dimension::EnergySource => ('E', 'I'),
            Dimension::Perception => ('S', 'N'),
            Dimension::Judgement => ('T', 'F'),
            Dimension::Lifestyle => ('J', 'P'),
        }
    }
}

/// Number of checked statements per letter, grouped by axis:
/// `{"EI": {"E": 6, "I": 4}, "SN": {...}, ...}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalityTallies(BTreeMap<String, BTreeMap<String, u32>>);

impl PersonalityTallies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| AdvisorError::ConfigValidationError {
            field: "personality".to_string(),
            message: format!("Invalid personality tallies: {}", e),
        })
    }

    pub fn set(&mut self, dimension: Dimension, letter: char, count: u32) {
        self.0
            .entry(dimension.code().to_string())
            .or_default()
            .insert(letter.to_string(), count);
    }

    pub fn count(&self, dimension: Dimension, letter: char) -> u32 {
        self.0
            .get(dimension.code())
            .and_then(|letters| letters.get(letter.to_string().as_str()))
            .copied()
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A four-letter personality code such as `INTJ`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalityProfile(String);

impl PersonalityProfile {
    /// Accepts any four letters drawn from the right pair on each axis, in any case.
    pub fn parse(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        let letters: Vec<char> = code.chars().collect();
        if letters.len() != 4 {
            return None;
        }

        let valid = Dimension::ALL
            .iter()
            .zip(&letters)
            .all(|(dimension, letter)| {
                let (first, second) = dimension.letters();
                *letter == first || *letter == second
            });

        valid.then_some(Self(code))
    }

    pub fn code(&self) -> &str {
        &self.0
    }

    pub fn describe(&self) -> Option<&'static ProfileDescription> {
        catalog::description(self.code())
    }

    /// One explanation per letter, in axis order.
    pub fn explanations(&self) -> Vec<(Dimension, &'static LetterExplanation)> {
        Dimension::ALL
            .iter()
            .zip(self.0.chars())
            .filter_map(|(dimension, letter)| {
                catalog::explanation(letter).map(|explanation| (*dimension, explanation))
            })
            .collect()
    }
}

impl fmt::Display for PersonalityProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// On each axis the first letter wins only with a strictly greater count;
/// ties go to the second letter. No tallies at all yields no profile.
pub fn classify(tallies: &PersonalityTallies) -> Option<PersonalityProfile> {
    if tallies.is_empty() {
        return None;
    }

    let code: String = Dimension::ALL
        .iter()
        .map(|dimension| {
            let (first, second) = dimension.letters();
            if tallies.count(*dimension, first) > tallies.count(*dimension, second) {
                first
            } else {
                second
            }
        })
        .collect();

    Some(PersonalityProfile(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_strictly_greater_wins() {
        let tallies = PersonalityTallies::from_json_str(
            r#"{"EI": {"E": 6, "I": 4}, "SN": {"S": 3, "N": 7}, "TF": {"T": 5, "F": 5}, "JP": {"J": 8, "P": 2}}"#,
        )
        .unwrap();

        let profile = classify(&tallies).unwrap();

        // E beats I, N beats S, the T/F tie goes to F.
        assert_eq!(profile.code(), "ENFJ");
    }

    #[test]
    fn test_classify_ties_resolve_to_second_letter() {
        let mut tallies = PersonalityTallies::new();
        for dimension in Dimension::ALL {
            let (first, second) = dimension.letters();
            tallies.set(dimension, first, 5);
            tallies.set(dimension, second, 5);
        }
        assert_eq!(classify(&tallies).unwrap().code(), "INFP");
    }

    #[test]
    fn test_classify_missing_axes_count_as_zero() {
        let mut tallies = PersonalityTallies::new();
        tallies.set(Dimension::EnergySource, 'E', 1);
        tallies.set(Dimension::Judgement, 'T', 2);
        assert_eq!(classify(&tallies).unwrap().code(), "ENTP");
    }

    #[test]
    fn test_classify_empty_tallies_has_no_profile() {
        assert!(classify(&PersonalityTallies::new()).is_none());
    }

    #[test]
    fn test_parse_profile_code() {
        assert_eq!(PersonalityProfile::parse(" intj ").unwrap().code(), "INTJ");
        assert!(PersonalityProfile::parse("----").is_none());
        assert!(PersonalityProfile::parse("IXTJ").is_none());
        assert!(PersonalityProfile::parse("INT").is_none());
    }

    #[test]
    fn test_profile_description_and_explanations() {
        let profile = PersonalityProfile::parse("INTJ").unwrap();
        let description = profile.describe().unwrap();
        assert!(description.title.starts_with("INTJ"));

        let explanations = profile.explanations();
        assert_eq!(explanations.len(), 4);
        assert_eq!(explanations[0].1.label, "Introverti");
        assert_eq!(explanations[3].1.label, "Jugement");
    }
}
