use crate::domain::model::NarrativeSections;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Analysis,
    Adequacy,
    Alternatives,
    Path,
}

/// Header aliases per section, most specific first. Checked in this order.
const HEADERS: [(Section, &[&str]); 4] = [
    (
        Section::Analysis,
        &[
            "1. ÉVALUATION DU CHOIX INITIAL",
            "ÉVALUATION DU CHOIX INITIAL",
            "EVALUATION DU CHOIX INITIAL",
            "ÉVALUATION DU CHOIX",
            "EVALUATION DU CHOIX",
            "ANALYSE",
        ],
    ),
    (
        Section::Adequacy,
        &[
            "2. NIVEAU D'ADÉQUATION",
            "NIVEAU D'ADÉQUATION",
            "NIVEAU D'ADEQUATION",
            "ADÉQUATION",
            "ADEQUATION",
        ],
    ),
    (
        Section::Alternatives,
        &[
            "3. CARRIÈRES ALTERNATIVES",
            "CARRIÈRES ALTERNATIVES",
            "CARRIERES ALTERNATIVES",
            "ALTERNATIVES",
        ],
    ),
    (
        Section::Path,
        &[
            "4. PARCOURS PERSONNALISÉ",
            "PARCOURS PERSONNALISÉ",
            "PARCOURS PERSONNALISE",
            "PARCOURS",
        ],
    ),
];

fn same_char(a: char, b: char) -> bool {
    let fold = |c: char| if c == '’' { '\'' } else { c };
    fold(a).to_uppercase().eq(fold(b).to_uppercase())
}

/// `line` without a leading `prefix`, compared case-insensitively.
fn strip_prefix_ignore_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let mut rest = line.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = rest.next()?;
        if !same_char(actual, expected) {
            return None;
        }
    }
    Some(match rest.next() {
        Some((offset, _)) => &line[offset..],
        None => "",
    })
}

/// Text following the first case-insensitive occurrence of `needle` in `line`.
fn after_ignore_case<'a>(line: &'a str, needle: &str) -> Option<&'a str> {
    line.char_indices()
        .find_map(|(start, _)| strip_prefix_ignore_case(&line[start..], needle))
}

/// A line naming a section anywhere opens it; whatever follows the name is content.
fn header_content(line: &str) -> Option<(Section, &str)> {
    HEADERS.iter().find_map(|(section, aliases)| {
        aliases.iter().find_map(|alias| {
            after_ignore_case(line, alias).map(|rest| {
                let rest = rest
                    .trim_start_matches(|c: char| {
                        matches!(c, ':' | '-' | '*' | '_' | '–' | ')') || c.is_whitespace()
                    })
                    .trim_end_matches(['*', '_'])
                    .trim();
                (*section, rest)
            })
        })
    })
}

fn slot(sections: &mut NarrativeSections, section: Section) -> &mut String {
    match section {
        Section::Analysis => &mut sections.analysis,
        Section::Adequacy => &mut sections.adequacy_level,
        Section::Alternatives => &mut sections.alternative_careers,
        Section::Path => &mut sections.personalized_path,
    }
}

fn append_line(buffer: &mut String, line: &str) {
    if !buffer.is_empty() {
        buffer.push('\n');
    }
    buffer.push_str(line);
}

/// Splits a narrative into its four sections. Text before the first header is
/// dropped; a narrative with no usable header lands whole in `analysis`.
pub fn parse_sections(narrative: &str) -> NarrativeSections {
    let mut sections = NarrativeSections::default();
    let mut current: Option<Section> = None;

    for line in narrative.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some((section, rest)) = header_content(line) {
            current = Some(section);
            if !rest.is_empty() {
                append_line(slot(&mut sections, section), rest);
            }
        } else if let Some(section) = current {
            append_line(slot(&mut sections, section), line);
        }
    }

    if sections.is_empty() {
        sections.analysis = narrative.to_string();
    }

    sections
}
