use crate::knowledge::normalize::{contains_either_way, fold, normalize};
use crate::knowledge::types::{
    CompatibilityAnalysis, DemandLevel, KnowledgeDocument, Occupation, Sector, Skill,
    TrainingProgram,
};
use crate::utils::error::{AdvisorError, Result};
use std::collections::{HashMap, HashSet};
use std::path::Path;

const SAME_SECTOR_WEIGHT: f64 = 3.0;
const SHARED_TECHNICAL_WEIGHT: f64 = 1.0;
const SHARED_TRANSVERSAL_WEIGHT: f64 = 0.5;

const DESCRIPTION_KEYWORD_WEIGHT: u32 = 2;
const SKILL_KEYWORD_WEIGHT: u32 = 1;

pub const SCORE_TRAINING_MATCH: u8 = 8;
pub const SCORE_TRANSVERSAL_ONLY: u8 = 5;
pub const SCORE_WEAK: u8 = 2;

const HINT_EXCELLENT: &str = "Excellente adéquation entre votre filière et le métier envisagé.";
const HINT_ADEQUATE: &str = "Adéquation correcte. Considérez des formations complémentaires.";
const HINT_LOW: &str =
    "Faible adéquation. Explorez d'autres métiers ou formations de transition.";

/// Insertion-ordered table keyed by normalized name. Re-inserting a key
/// replaces the record but keeps its original position.
#[derive(Debug, Clone)]
struct Table<T> {
    entries: Vec<(String, T)>,
    index: HashMap<String, usize>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T> Table<T> {
    fn insert(&mut self, key: String, value: T) {
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).map(|&position| &self.entries[position].1)
    }

    fn keyed(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, value)| value)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

/// In-memory knowledge base of the local labor market.
///
/// Loaded once per session, read-only afterwards. Iteration order is the
/// order records appeared in the source document; lookups that can match
/// several records return the first one in that order.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    occupations: Table<Occupation>,
    sectors: Table<Sector>,
    skills: Table<Skill>,
    trainings: Table<TrainingProgram>,
    loaded: bool,
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut kb = Self::new();
        kb.load_file(path)?;
        Ok(kb)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let mut kb = Self::new();
        kb.load_str(content)?;
        Ok(kb)
    }

    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::error!("❌ Knowledge base file not found: {}", path.display());
            return Err(AdvisorError::KnowledgeBaseNotFound {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path)?;
        self.load_str(&content)
    }

    /// Parses the whole document before touching any table, so a malformed
    /// record aborts the load and leaves the store as it was.
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let document: KnowledgeDocument = serde_json::from_str(content).map_err(|e| {
            tracing::error!("❌ Knowledge base parsing failed: {}", e);
            AdvisorError::KnowledgeBaseParseError {
                message: e.to_string(),
            }
        })?;

        self.load_document(document);
        Ok(())
    }

    pub fn load_document(&mut self, document: KnowledgeDocument) {
        for occupation in document.occupations {
            self.occupations.insert(normalize(&occupation.name), occupation);
        }
        for sector in document.sectors {
            self.sectors.insert(normalize(&sector.name), sector);
        }
        for skill in document.skills {
            self.skills.insert(normalize(&skill.name), skill);
        }
        for training in document.trainings {
            self.trainings.insert(normalize(&training.name), training);
        }

        self.loaded = true;
        tracing::info!(
            "📚 Knowledge base loaded: {} occupations, {} sectors, {} skills, {} trainings",
            self.occupations.len(),
            self.sectors.len(),
            self.skills.len(),
            self.trainings.len()
        );
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn occupations(&self) -> impl Iterator<Item = &Occupation> {
        self.occupations.values()
    }

    /// All sectors in store order.
    pub fn sectors(&self) -> impl Iterator<Item = &Sector> {
        self.sectors.values()
    }

    pub fn skills(&self) -> impl Iterator<Item = &Skill> {
        self.skills.values()
    }

    pub fn trainings(&self) -> impl Iterator<Item = &TrainingProgram> {
        self.trainings.values()
    }

    pub fn occupation_count(&self) -> usize {
        self.occupations.len()
    }

    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn skill_count(&self) -> usize {
        self.skills.len()
    }

    pub fn training_count(&self) -> usize {
        self.trainings.len()
    }

    /// Exact match first, then containment in either direction, then any
    /// stored name containing one of the query's words.
    ///
    /// The word fallback can resolve to an unrelated occupation that merely
    /// shares a common word with the query.
    pub fn find_occupation(&self, name: &str) -> Option<&Occupation> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }

        if let Some(occupation) = self.occupations.get(&key) {
            return Some(occupation);
        }

        if let Some((_, occupation)) = self
            .occupations
            .keyed()
            .find(|(stored, _)| contains_either_way(&key, stored))
        {
            return Some(occupation);
        }

        let tokens: Vec<String> = name
            .split_whitespace()
            .map(normalize)
            .filter(|token| !token.is_empty())
            .collect();

        self.occupations
            .keyed()
            .find(|(stored, _)| tokens.iter().any(|token| stored.contains(token.as_str())))
            .map(|(_, occupation)| occupation)
    }

    pub fn find_sector(&self, name: &str) -> Option<&Sector> {
        let key = normalize(name);
        if key.is_empty() {
            return None;
        }

        if let Some(sector) = self.sectors.get(&key) {
            return Some(sector);
        }

        self.sectors
            .keyed()
            .find(|(stored, _)| contains_either_way(&key, stored))
            .map(|(_, sector)| sector)
    }

    /// Occupations referenced by a sector. References that do not resolve are dropped.
    pub fn occupations_by_sector(&self, sector_name: &str) -> Vec<&Occupation> {
        let Some(sector) = self.find_sector(sector_name) else {
            return Vec::new();
        };

        sector
            .occupations
            .iter()
            .filter_map(|name| {
                let resolved = self.find_occupation(name);
                if resolved.is_none() {
                    tracing::debug!(
                        "Sector '{}' references unknown occupation '{}'",
                        sector.name,
                        name
                    );
                }
                resolved
            })
            .collect()
    }

    pub fn high_demand_occupations(&self) -> Vec<&Occupation> {
        self.occupations()
            .filter(|occupation| occupation.demand == DemandLevel::High)
            .collect()
    }

    pub fn growth_occupations(&self) -> Vec<&Occupation> {
        self.occupations()
            .filter(|occupation| occupation.growth_outlook)
            .collect()
    }

    /// Up to `limit` occupations closest to `reference`, with their scores,
    /// best first. Equal scores keep store order.
    pub fn similar_occupations_scored(
        &self,
        reference: &Occupation,
        limit: usize,
    ) -> Vec<(&Occupation, f64)> {
        let reference_key = normalize(&reference.name);

        let mut scored: Vec<(&Occupation, f64)> = self
            .occupations
            .keyed()
            .filter(|(key, _)| *key != reference_key)
            .map(|(_, candidate)| (candidate, similarity_score(reference, candidate)))
            .filter(|(_, score)| *score > 0.0)
            .collect();

        scored.sort_by(|a, b| b.1.total_cmp(&a.1));
        scored.truncate(limit);
        scored
    }

    pub fn similar_occupations(&self, reference: &Occupation, limit: usize) -> Vec<&Occupation> {
        self.similar_occupations_scored(reference, limit)
            .into_iter()
            .map(|(occupation, _)| occupation)
            .collect()
    }

    pub fn training_programs_for(&self, occupation_name: &str) -> Vec<&TrainingProgram> {
        let key = normalize(occupation_name);
        if key.is_empty() {
            return Vec::new();
        }

        self.trainings()
            .filter(|training| {
                training
                    .prepares_for
                    .iter()
                    .any(|prepared| normalize(prepared).contains(&key))
            })
            .collect()
    }

    pub fn analyze_compatibility(&self, field: &str, occupation_name: &str) -> CompatibilityAnalysis {
        let Some(occupation) = self.find_occupation(occupation_name) else {
            tracing::debug!("No occupation matches '{}'", occupation_name);
            return CompatibilityAnalysis::not_found();
        };

        let field_key = normalize(field);
        let matching_trainings: Vec<String> = occupation
            .typical_trainings
            .iter()
            .filter(|training| contains_either_way(&field_key, &normalize(training)))
            .cloned()
            .collect();

        let score = if !matching_trainings.is_empty() {
            SCORE_TRAINING_MATCH
        } else if !occupation.transversal_skills.is_empty() {
            SCORE_TRANSVERSAL_ONLY
        } else {
            SCORE_WEAK
        };

        let skill_gaps = if matching_trainings.is_empty() {
            occupation.technical_skills.clone()
        } else {
            Vec::new()
        };

        let hint = if score >= 7 {
            HINT_EXCELLENT
        } else if score >= 5 {
            HINT_ADEQUATE
        } else {
            HINT_LOW
        };

        CompatibilityAnalysis {
            occupation_found: true,
            occupation: Some(occupation.name.clone()),
            score,
            matching_trainings,
            skill_gaps,
            hints: vec![hint.to_string()],
        }
    }

    /// Occupations mentioning the keywords, best first: a keyword found in the
    /// description counts twice, one found in a skill name counts once per skill.
    pub fn search_by_keywords<K: AsRef<str>>(&self, keywords: &[K]) -> Vec<&Occupation> {
        let keywords: Vec<String> = keywords
            .iter()
            .map(|keyword| fold(keyword.as_ref().trim()))
            .filter(|keyword| !keyword.is_empty())
            .collect();
        if keywords.is_empty() {
            return Vec::new();
        }

        let mut found: Vec<(&Occupation, u32)> = self
            .occupations()
            .map(|occupation| {
                let description = fold(&occupation.description);
                let mut score = keywords
                    .iter()
                    .filter(|keyword| description.contains(keyword.as_str()))
                    .count() as u32
                    * DESCRIPTION_KEYWORD_WEIGHT;

                for skill in occupation
                    .technical_skills
                    .iter()
                    .chain(occupation.transversal_skills.iter())
                {
                    let skill = fold(skill);
                    score += keywords
                        .iter()
                        .filter(|keyword| skill.contains(keyword.as_str()))
                        .count() as u32
                        * SKILL_KEYWORD_WEIGHT;
                }

                (occupation, score)
            })
            .filter(|(_, score)| *score > 0)
            .collect();

        found.sort_by(|a, b| b.1.cmp(&a.1));
        found.into_iter().map(|(occupation, _)| occupation).collect()
    }
}

/// Same sector is worth 3, each shared technical skill 1, each shared
/// transversal skill 0.5.
pub fn similarity_score(reference: &Occupation, candidate: &Occupation) -> f64 {
    let mut score = 0.0;

    let sector = normalize(&reference.sector);
    if !sector.is_empty() && sector == normalize(&candidate.sector) {
        score += SAME_SECTOR_WEIGHT;
    }

    score += shared_count(&reference.technical_skills, &candidate.technical_skills) as f64
        * SHARED_TECHNICAL_WEIGHT;
    score += shared_count(&reference.transversal_skills, &candidate.transversal_skills) as f64
        * SHARED_TRANSVERSAL_WEIGHT;

    score
}

fn shared_count(a: &[String], b: &[String]) -> usize {
    let left: HashSet<String> = a.iter().map(|s| normalize(s)).filter(|s| !s.is_empty()).collect();
    let right: HashSet<String> = b.iter().map(|s| normalize(s)).filter(|s| !s.is_empty()).collect();
    left.intersection(&right).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = include_str!("../../tests/fixtures/knowledge_base.json");

    fn kb() -> KnowledgeBase {
        KnowledgeBase::from_json_str(FIXTURE).unwrap()
    }

    #[test]
    fn test_load_populates_tables() {
        let kb = kb();
        assert!(kb.is_loaded());
        assert_eq!(kb.occupation_count(), 6);
        assert_eq!(kb.sector_count(), 4);
        assert_eq!(kb.skill_count(), 3);
        assert_eq!(kb.training_count(), 3);
    }

    #[test]
    fn test_malformed_record_aborts_whole_load() {
        let mut kb = KnowledgeBase::new();
        let broken = r#"{"metiers": [{"nom_metier": "Sans champs"}]}"#;

        let result = kb.load_str(broken);

        assert!(matches!(result, Err(AdvisorError::KnowledgeBaseParseError { .. })));
        assert!(!kb.is_loaded());
        assert_eq!(kb.occupation_count(), 0);
    }

    #[test]
    fn test_missing_collections_are_optional() {
        let kb = KnowledgeBase::from_json_str("{}").unwrap();
        assert!(kb.is_loaded());
        assert_eq!(kb.occupation_count(), 0);
    }

    #[test]
    fn test_missing_file_is_reported() {
        let result = KnowledgeBase::from_file("/nonexistent/knowledge_base.json");
        assert!(matches!(result, Err(AdvisorError::KnowledgeBaseNotFound { .. })));
    }

    #[test]
    fn test_duplicate_names_replace_in_place() {
        let mut kb = kb();
        let duplicate = r#"{"secteurs_porteurs": [
            {"nom_secteur": "NUMERIQUE", "description": "remplacé", "metiers_associes": []}
        ]}"#;
        kb.load_str(duplicate).unwrap();

        assert_eq!(kb.sector_count(), 4);
        let first = kb.sectors().next().unwrap();
        assert_eq!(first.description, "remplacé");
    }

    #[test]
    fn test_find_occupation_exact_ignores_case_accents_and_spaces() {
        let kb = kb();
        for query in ["Développeur Web", "  DEVELOPPEUR web ", "développeur-web"] {
            let found = kb.find_occupation(query).unwrap();
            assert_eq!(found.name, "Développeur Web", "query: {query:?}");
        }
        let analyst = kb.find_occupation("analyste de donnees").unwrap();
        assert_eq!(analyst.name, "Analyste de Données");
    }

    #[test]
    fn test_find_occupation_substring_and_blank() {
        let kb = kb();
        assert_eq!(kb.find_occupation("Développeur").unwrap().name, "Développeur Web");
        assert_eq!(
            kb.find_occupation("Guide Touristique Senior").unwrap().name,
            "Guide Touristique"
        );
        assert!(kb.find_occupation("   ").is_none());
        assert!(kb.find_occupation("Astronaute").is_none());
    }

    #[test]
    fn test_find_occupation_word_fallback_is_ambiguous() {
        // "Ingénieur Logiciel" is not in the base; the shared word "ingénieur"
        // resolves it to an unrelated occupation.
        let kb = kb();
        let found = kb.find_occupation("Ingénieur Logiciel").unwrap();
        assert_eq!(found.name, "Ingénieur Agronome");
    }

    #[test]
    fn test_find_sector() {
        let kb = kb();
        assert_eq!(kb.find_sector("numerique").unwrap().name, "Numérique");
        assert_eq!(kb.find_sector("Agro").unwrap().name, "Agro-industrie");
        assert!(kb.find_sector("Mines").is_none());
    }

    #[test]
    fn test_occupations_by_sector_drops_unresolved_references() {
        let kb = kb();
        let names: Vec<&str> = kb
            .occupations_by_sector("Numérique")
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Développeur Web", "Administrateur Réseaux", "Analyste de Données"]
        );
        assert!(kb.occupations_by_sector("Inconnu").is_empty());
    }

    #[test]
    fn test_demand_and_growth_filters() {
        let kb = kb();
        assert_eq!(kb.high_demand_occupations().len(), 3);
        assert_eq!(kb.growth_occupations().len(), 4);
    }

    #[test]
    fn test_similar_occupations_properties() {
        let kb = kb();
        let reference = kb.find_occupation("Développeur Web").unwrap();

        for limit in 0..=6 {
            let scored = kb.similar_occupations_scored(reference, limit);
            assert!(scored.len() <= limit);
            assert!(scored.iter().all(|(o, _)| o.name != reference.name));
            assert!(scored.iter().all(|(_, score)| *score > 0.0));
            assert!(scored.windows(2).all(|pair| pair[0].1 >= pair[1].1));
        }

        let scored = kb.similar_occupations_scored(reference, 3);
        let names: Vec<&str> = scored.iter().map(|(o, _)| o.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Administrateur Réseaux", "Analyste de Données", "Ingénieur Agronome"]
        );
        assert_eq!(scored[0].1, 4.5);
        assert_eq!(scored[2].1, 0.5);
    }

    #[test]
    fn test_training_programs_for() {
        let kb = kb();
        let names: Vec<&str> = kb
            .training_programs_for("Analyste de Données")
            .iter()
            .map(|t| t.name.as_str())
            .collect();
        assert_eq!(names, vec!["Licence en Informatique"]);
        assert!(kb.training_programs_for("").is_empty());
    }

    #[test]
    fn test_compatibility_with_matching_training() {
        let kb = kb();
        let analysis = kb.analyze_compatibility("Informatique", "Développeur Web");

        assert!(analysis.occupation_found);
        assert_eq!(analysis.occupation.as_deref(), Some("Développeur Web"));
        assert_eq!(analysis.score, SCORE_TRAINING_MATCH);
        assert_eq!(analysis.matching_trainings, vec!["Licence en Informatique"]);
        assert!(analysis.skill_gaps.is_empty());
        assert_eq!(analysis.hints, vec![HINT_EXCELLENT]);
    }

    #[test]
    fn test_compatibility_scores_without_training_match() {
        let kb = kb();

        let guide = kb.analyze_compatibility("Droit", "Guide Touristique");
        assert_eq!(guide.score, SCORE_TRANSVERSAL_ONLY);
        assert!(guide.skill_gaps.is_empty());
        assert_eq!(guide.hints, vec![HINT_ADEQUATE]);

        let accountant = kb.analyze_compatibility("Lettres Modernes", "Comptable");
        assert_eq!(accountant.score, SCORE_WEAK);
        assert_eq!(accountant.skill_gaps, vec!["Comptabilité", "Fiscalité"]);
        assert_eq!(accountant.hints, vec![HINT_LOW]);
    }

    #[test]
    fn test_compatibility_unknown_occupation() {
        let kb = kb();
        let analysis = kb.analyze_compatibility("Informatique", "Astronaute");

        assert!(!analysis.occupation_found);
        assert_eq!(analysis.score, 0);
        assert!(analysis.occupation.is_none());
        assert!(analysis.matching_trainings.is_empty());
        assert!(analysis.skill_gaps.is_empty());
        assert!(analysis.hints.is_empty());
    }

    #[test]
    fn test_compatibility_blank_field_never_matches() {
        let kb = kb();
        let analysis = kb.analyze_compatibility("", "Développeur Web");
        assert_eq!(analysis.score, SCORE_TRANSVERSAL_ONLY);
        assert!(analysis.matching_trainings.is_empty());
    }

    #[test]
    fn test_search_by_keywords() {
        let kb = kb();
        let names: Vec<&str> = kb
            .search_by_keywords(&["données"])
            .iter()
            .map(|o| o.name.as_str())
            .collect();
        assert_eq!(
            names,
            vec!["Analyste de Données", "Développeur Web", "Administrateur Réseaux"]
        );

        let empty: [&str; 0] = [];
        assert!(kb.search_by_keywords(&empty).is_empty());
        assert!(kb.search_by_keywords(&["  "]).is_empty());
    }
}
