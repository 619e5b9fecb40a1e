#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileDescription {
    pub code: &'static str,
    pub title: &'static str,
    pub group: &'static str,
    pub summary: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterExplanation {
    pub letter: char,
    pub label: &'static str,
    pub description: &'static str,
}

static DESCRIPTIONS: [ProfileDescription; 16] = [
    ProfileDescription {
        code: "ISTJ",
        title: "ISTJ - Le Contrôleur",
        group: "Les Gardiens (SJ)",
        summary: "Sérieux, réservé, et factuel (S). Il est logique, méthodique et responsable (T). Il valorise la tradition, l'ordre et la précision, et s'assure que les choses sont faites correctement et dans les règles (J).",
    },
    ProfileDescription {
        code: "ISFJ",
        title: "ISFJ - Le Protecteur",
        group: "Les Gardiens (SJ)",
        summary: "Dévoué, calme (I), et méticuleux (S). Il est loyal, fiable et profondément attentionné aux sentiments des autres (F). Il apprécie la structure et la tradition (J) et travaille en coulisses pour assurer le bien-être de son entourage.",
    },
    ProfileDescription {
        code: "INFJ",
        title: "INFJ - Le Conseiller",
        group: "Les Idéalistes (NF)",
        summary: "Perspicace, réservé (I), et orienté vers les possibilités et le sens profond (N). Il est profondément empathique et dévoué à aider les autres (F). Il est déterminé, organisé dans sa quête d'idéaux et de visions à long terme (J).",
    },
    ProfileDescription {
        code: "INTJ",
        title: "INTJ - Le Cerveau (ou Architecte)",
        group: "Les Rationnels (NT)",
        summary: "Indépendant, conceptuel (I), et visionnaire (N). Il est très logique, analytique et critique (T). Il est un excellent stratège, planificateur à long terme et déterminé à mettre en œuvre ses idées (J).",
    },
    ProfileDescription {
        code: "ISTP",
        title: "ISTP - L'Artisan",
        group: "Les Artisans (SP)",
        summary: "Observateur, calme (I), et très doué pour comprendre comment les choses fonctionnent (S). Il est logique, analytique et excellent pour le dépannage et la résolution de problèmes concrets (T). Il est flexible, indépendant et aime l'action pratique (P).",
    },
    ProfileDescription {
        code: "ISFP",
        title: "ISFP - Le Compositeur",
        group: "Les Artisans (SP)",
        summary: "Doux, sensible (I), et très attentif à son environnement et à l'esthétique (S). Il est guidé par ses valeurs profondes et son désir d'harmonie (F). Il est flexible, adaptable et préfère s'exprimer par des actions concrètes plutôt que par des mots (P).",
    },
    ProfileDescription {
        code: "INFP",
        title: "INFP - Le Guérisseur (ou Médiateur)",
        group: "Les Idéalistes (NF)",
        summary: "Idéaliste, calme (I), et en quête de sens et d'authenticité (N). Il est profondément attaché à ses valeurs et à l'harmonie (F). Il est flexible, ouvert d'esprit et cherche à vivre en accord avec ses idéaux (P).",
    },
    ProfileDescription {
        code: "INTP",
        title: "INTP - L'Architecte (concepteur de systèmes)",
        group: "Les Rationnels (NT)",
        summary: "Analytique, réservé (I), et fasciné par les théories et les concepts complexes (N). Il est extrêmement logique, précis et cherche à comprendre le fonctionnement profond des choses (T). Il est flexible, curieux et aime explorer les idées pour elles-mêmes (P).",
    },
    ProfileDescription {
        code: "ESTP",
        title: "ESTP - L'Organisateur",
        group: "Les Artisans (SP)",
        summary: "Énergique, orienté vers l'action (E) et très pragmatique (S). Il est logique, direct et doué pour résoudre les problèmes de manière inventive (T). Il est adaptable, aime les défis et sait improviser (P).",
    },
    ProfileDescription {
        code: "ESFP",
        title: "ESFP - L'Artiste Interprète",
        group: "Les Artisans (SP)",
        summary: "Enthousiaste, sociable et plein de vie (E). Il aime l'action, vit dans l'instant présent (S) et est très sensible à l'ambiance et aux émotions (F). Il est flexible, spontané et aime divertir et engager les autres (P).",
    },
    ProfileDescription {
        code: "ENFP",
        title: "ENFP - Le Défenseur (Champion/Inspirateur)",
        group: "Les Idéalistes (NF)",
        summary: "Enthousiaste, créatif (E), et plein d'idées (N). Il est motivé par ses valeurs et son désir d'aider les autres à s'épanouir (F). Il est spontané, adaptable et aime explorer de nouvelles possibilités (P).",
    },
    ProfileDescription {
        code: "ENTP",
        title: "ENTP - L'Inventeur",
        group: "Les Rationnels (NT)",
        summary: "Ingénieux, curieux (E), et toujours à la recherche de nouvelles idées et possibilités (N). Il est logique, aime débattre et remettre en question le statu quo (T). Il est flexible, adaptable et aime explorer de multiples options (P).",
    },
    ProfileDescription {
        code: "ESTJ",
        title: "ESTJ - Le Superviseur",
        group: "Les Gardiens (SJ)",
        summary: "Pragmatique, direct (E), et réaliste (S). Il est logique, organisé et aime prendre des décisions basées sur des faits objectifs (T). Il est doué pour la gestion, l'application des règles et la mise en place de structures efficaces (J).",
    },
    ProfileDescription {
        code: "ESFJ",
        title: "ESFJ - Le Soutien",
        group: "Les Gardiens (SJ)",
        summary: "Chaleureux, sociable (E), pratique et attentif aux besoins concrets des autres (S). Il est guidé par ses valeurs et son empathie (F) et aime l'ordre et l'organisation pour apporter son aide (J). C'est une personne qui aime prendre soin des autres et maintenir l'harmonie.",
    },
    ProfileDescription {
        code: "ENFJ",
        title: "ENFJ - Le Professeur",
        group: "Les Idéalistes (NF)",
        summary: "Charismatique, empathique (E), et visionnaire (N). Il est sensible aux besoins et motivations des autres (F) et aime les aider à atteindre leur potentiel. Il est organisé et doué pour mobiliser les gens autour d'une cause commune (J).",
    },
    ProfileDescription {
        code: "ENTJ",
        title: "ENTJ - Le Maréchal (ou Commandant)",
        group: "Les Rationnels (NT)",
        summary: "Assertif, visionnaire (E), et stratégique (N). Il est logique, décidé et doué pour diriger et organiser des systèmes complexes (T). Il est un leader naturel, planificateur et orienté vers les objectifs (J).",
    },
];

static EXPLANATIONS: [LetterExplanation; 8] = [
    LetterExplanation {
        letter: 'E',
        label: "Extraverti",
        description: "Vous puisez votre énergie de l'environnement extérieur, les gens, les activités et les expériences. Vous êtes plutôt actif et expressif. [ACTION]",
    },
    LetterExplanation {
        letter: 'I',
        label: "Introverti",
        description: "Vous puisez votre énergie de l'univers intérieur des idées, des souvenirs, des pensées et des émotions. Vous êtes plutôt réfléchi et réservé. [REFLEXION]",
    },
    LetterExplanation {
        letter: 'S',
        label: "Sensation",
        description: "Vous remarquez les faits, les détails et les réalités du monde qui vous entoure. Vous recueillez des informations concrètes et tangibles. Vous êtes plutôt terre-à-terre. [PRESENT]",
    },
    LetterExplanation {
        letter: 'N',
        label: "Intuition",
        description: "Vous abordez les données dans leur globalité et vous êtes davantage intéressé par leur sens, les relations entre les choses, et les possibilités, au-delà des faits directement observables. Vous recueillez des informations abstraites et intangibles. Vous êtes plutôt imaginatif. [FUTUR]",
    },
    LetterExplanation {
        letter: 'T',
        label: "Pensée",
        description: "Vous prenez des décisions en vous basant sur des critères objectifs et impersonnels. Vous êtes logique. Vous recherchez la Vérité. [RAISON]",
    },
    LetterExplanation {
        letter: 'F',
        label: "Sentiment",
        description: "Vous prenez des décisions en tenant compte de vos valeurs et de vos impressions personnelles. Vous êtes sensible. Vous recherchez l'Harmonie. [EMPATHIE]",
    },
    LetterExplanation {
        letter: 'J',
        label: "Jugement",
        description: "Vous préférez vivre dans un environnement structuré, ordonné et prévisible, que vous pouvez contrôler. Vous êtes plutôt organisé et formel. [ORGANISATION]",
    },
    LetterExplanation {
        letter: 'P',
        label: "Perception",
        description: "Vous préférez expérimenter autant que possible, vous êtes donc très ouverts aux changements. Vous êtes plutôt flexible, curieux et non conformiste. [ADAPTATION]",
    },
];

pub fn description(code: &str) -> Option<&'static ProfileDescription> {
    DESCRIPTIONS.iter().find(|entry| entry.code == code)
}

pub fn explanation(letter: char) -> Option<&'static LetterExplanation> {
    EXPLANATIONS.iter().find(|entry| entry.letter == letter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_a_description() {
        for code in [
            "ISTJ", "ISFJ", "INFJ", "INTJ", "ISTP", "ISFP", "INFP", "INTP", "ESTP", "ESFP",
            "ENFP", "ENTP", "ESTJ", "ESFJ", "ENFJ", "ENTJ",
        ] {
            let entry = description(code).unwrap();
            assert!(entry.title.starts_with(code));
        }
    }

    #[test]
    fn test_description_wording() {
        assert_eq!(
            description("INTJ").unwrap().summary,
            "Indépendant, conceptuel (I), et visionnaire (N). Il est très logique, analytique et critique (T). Il est un excellent stratège, planificateur à long terme et déterminé à mettre en œuvre ses idées (J)."
        );
        assert_eq!(
            explanation('T').unwrap().description,
            "Vous prenez des décisions en vous basant sur des critères objectifs et impersonnels. Vous êtes logique. Vous recherchez la Vérité. [RAISON]"
        );
    }
}
