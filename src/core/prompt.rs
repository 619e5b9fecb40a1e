use crate::domain::model::{AnalysisBundle, StudentRecord};
use crate::knowledge::Occupation;
use crate::personality::PersonalityProfile;

const PREVIEW_CHARS: usize = 100;

const INSTRUCTIONS: &str = "
INSTRUCTIONS:
Fournis une analyse structurée en 4 sections:

1. ÉVALUATION DU CHOIX INITIAL (2-3 phrases)
   - Évalue l'adéquation entre la filière actuelle et la carrière envisagée
   - Mentionne les opportunités et défis potentiels

2. NIVEAU D'ADÉQUATION (1-2 phrases)
   - Donne une évaluation claire: Excellente/Bonne/Moyenne/Faible adéquation
   - Justifie brièvement

3. CARRIÈRES ALTERNATIVES (si pertinent, 2-3 suggestions max)
   - Suggère des alternatives uniquement si l'adéquation est moyenne/faible
   - Privilégie les métiers à forte demande mentionnés ci-dessus

4. PARCOURS PERSONNALISÉ (5-6 points concrets)
   - Formations complémentaires spécifiques
   - Compétences clés à développer (avec emphase sur le numérique si pertinent)
   - Certifications utiles
   - Conseils pour l'insertion professionnelle au Bénin
   - Opportunités d'entrepreneuriat si applicable
   - Étapes chronologiques recommandées

Adapte tes recommandations au contexte béninois: marché local, économie numérique émergente, secteurs porteurs comme l'agro-industrie, le tourisme, et l'économie verte.
Sois concret, pratique et encourageant.
";

fn or_na(value: &str) -> &str {
    let value = value.trim();
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn preview(text: &str) -> String {
    match text.char_indices().nth(PREVIEW_CHARS) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

fn join_or(items: &[String], empty: &str) -> String {
    if items.is_empty() {
        empty.to_string()
    } else {
        items.join(", ")
    }
}

fn occupation_section(occupation: &Occupation) -> String {
    format!(
        "
MÉTIER ENVISAGÉ - {}:
- Description: {}
- Secteur: {}
- Niveau de demande: {}
- Perspectives de croissance: {}
- Compétences techniques requises: {}
- Compétences transversales: {}
- Formations typiques: {}
- Pertinence pour le Bénin: {}
",
        occupation.name,
        occupation.description,
        occupation.sector,
        occupation.demand,
        if occupation.growth_outlook {
            "Excellentes"
        } else {
            "Limitées"
        },
        occupation.technical_skills.join(", "),
        occupation.transversal_skills.join(", "),
        occupation.typical_trainings.join(", "),
        occupation.local_relevance,
    )
}

fn personality_section(profile: &PersonalityProfile) -> String {
    let mut section = format!("\nPROFIL DE PERSONNALITÉ (MBTI): {}\n", profile.code());

    if let Some(description) = profile.describe() {
        section.push_str(&format!(
            "- {} ({})\n- {}\n",
            description.title, description.group, description.summary
        ));
    }
    for (_, explanation) in profile.explanations() {
        section.push_str(&format!(
            "- {} ({}): {}\n",
            explanation.label, explanation.letter, explanation.description
        ));
    }
    section.push_str("Tiens compte de ce profil dans tes recommandations.\n");

    section
}

/// Builds the user prompt for one student. Same inputs always give the same text.
pub fn render_prompt(
    student: &StudentRecord,
    bundle: &AnalysisBundle,
    personality: Option<&PersonalityProfile>,
) -> String {
    let mut prompt = format!(
        "Tu es un conseiller en orientation professionnelle spécialisé dans le marché du travail béninois.
Analyse le profil de cet étudiant et fournis des recommandations détaillées.

PROFIL ÉTUDIANT:
- Nom: {} {}
- Date de naissance: {}
- Lieu de naissance: {}
- Filière actuelle: {}
- Carrière envisagée: {}

CONTEXTE MARCHÉ DU TRAVAIL BÉNINOIS:
",
        or_na(&student.last_name),
        or_na(&student.first_name),
        or_na(&student.birth_date),
        or_na(&student.birth_place),
        or_na(&student.current_field),
        or_na(student.intended().unwrap_or_default()),
    );

    if let Some(occupation) = &bundle.occupation {
        prompt.push_str(&occupation_section(occupation));
    }

    if let Some(compatibility) = &bundle.compatibility {
        prompt.push_str(&format!(
            "
ANALYSE DE COMPATIBILITÉ:
- Score de compatibilité: {}/10
- Formations correspondantes: {}
- Lacunes de compétences identifiées: {}
",
            compatibility.score,
            join_or(
                &compatibility.matching_trainings,
                "Aucune correspondance directe"
            ),
            join_or(&compatibility.skill_gaps, "Aucune lacune majeure"),
        ));
    }

    if !bundle.alternative_careers.is_empty() {
        prompt.push_str("\nMÉTIERS ALTERNATIFS SIMILAIRES:\n");
        for alternative in &bundle.alternative_careers {
            prompt.push_str(&format!(
                "- {}: {} (Demande: {})\n",
                alternative.name,
                preview(&alternative.description),
                alternative.demand
            ));
        }
    }

    if !bundle.sector_shortlist.is_empty() {
        prompt.push_str("\nSECTEURS PORTEURS AU BÉNIN:\n");
        for sector in &bundle.sector_shortlist {
            prompt.push_str(&format!(
                "- {}: {}\n",
                sector.name,
                preview(&sector.description)
            ));
        }
    }

    if let Some(profile) = personality {
        prompt.push_str(&personality_section(profile));
    }

    prompt.push_str(INSTRUCTIONS);
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyzer::CompatibilityAnalyzer;
    use crate::knowledge::KnowledgeBase;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::from_json_str(include_str!("../../tests/fixtures/knowledge_base.json"))
            .unwrap()
    }

    fn student() -> StudentRecord {
        StudentRecord {
            last_name: "Adjovi".to_string(),
            first_name: "Mireille".to_string(),
            birth_date: "2004-03-12".to_string(),
            birth_place: "Cotonou".to_string(),
            current_field: "Informatique".to_string(),
            intended_occupation: Some("Développeur Web".to_string()),
        }
    }

    #[test]
    fn test_prompt_embeds_analysis() {
        let kb = kb();
        let student = student();
        let bundle = CompatibilityAnalyzer::new(&kb).analyze(&student);

        let prompt = render_prompt(&student, &bundle, None);

        assert!(prompt.contains("- Nom: Adjovi Mireille"));
        assert!(prompt.contains("MÉTIER ENVISAGÉ - Développeur Web:"));
        assert!(prompt.contains("- Niveau de demande: élevé"));
        assert!(prompt.contains("- Perspectives de croissance: Excellentes"));
        assert!(prompt.contains("- Score de compatibilité: 8/10"));
        assert!(prompt.contains("- Lacunes de compétences identifiées: Aucune lacune majeure"));
        assert!(prompt.contains("- Administrateur Réseaux: "));
        assert!(prompt.contains("SECTEURS PORTEURS AU BÉNIN:\n- Numérique: "));
        assert!(!prompt.contains("PROFIL DE PERSONNALITÉ"));
        assert!(prompt.ends_with("Sois concret, pratique et encourageant.\n"));
        assert_eq!(prompt, render_prompt(&student, &bundle, None));
    }

    #[test]
    fn test_prompt_without_occupation_uses_placeholders() {
        let kb = kb();
        let student = StudentRecord {
            last_name: "Hounsa".to_string(),
            current_field: "Droit".to_string(),
            ..Default::default()
        };
        let bundle = CompatibilityAnalyzer::new(&kb).analyze(&student);

        let prompt = render_prompt(&student, &bundle, None);

        assert!(prompt.contains("- Carrière envisagée: N/A"));
        assert!(!prompt.contains("MÉTIER ENVISAGÉ"));
        assert!(!prompt.contains("ANALYSE DE COMPATIBILITÉ"));
    }

    #[test]
    fn test_prompt_includes_personality() {
        let kb = kb();
        let student = student();
        let bundle = CompatibilityAnalyzer::new(&kb).analyze(&student);
        let profile = PersonalityProfile::parse("intj").unwrap();

        let prompt = render_prompt(&student, &bundle, Some(&profile));

        assert!(prompt.contains("PROFIL DE PERSONNALITÉ (MBTI): INTJ"));
        assert!(prompt.contains("INTJ - Le Cerveau"));
        assert!(prompt.contains("- Introverti (I): "));
    }

    #[test]
    fn test_preview_truncates_on_char_boundary() {
        let long = "é".repeat(120);
        let cut = preview(&long);
        assert_eq!(cut.chars().count(), 103);
        assert!(cut.ends_with("..."));
        assert_eq!(preview("court"), "court");
    }
}
