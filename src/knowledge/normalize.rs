use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Comparison key for names: lower-cased, diacritics removed, and every
/// character that is not alphanumeric dropped ("Développeur Web" → "developpeurweb").
///
/// Only ever used for matching; display strings keep their original form.
pub fn normalize(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Lower-cases and strips diacritics but keeps spacing and punctuation, for
/// searching inside free text.
pub fn fold(input: &str) -> String {
    input
        .to_lowercase()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}

/// True when either normalized string contains the other. Empty keys never match.
pub(crate) fn contains_either_way(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}
