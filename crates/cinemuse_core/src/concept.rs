//! Concept normalization.
//!
//! A concept is the free-text seed idea supplied by the user. Normalization
//! derives the reusable forms the generators interpolate into their
//! templates: a lowercase form for mid-sentence use, a sentence-cased form
//! for headings, and a keyword slice for titles, subjects, and tags.

use serde::{Deserialize, Serialize};

/// Phrase substituted when the incoming concept is empty or all whitespace.
pub const FALLBACK_CONCEPT: &str = "a story waiting to be told";

/// Sample concept offered by the studio form's "Use sample" affordance.
pub const SAMPLE_CONCEPT: &str = "a synesthetic cartographer who maps human emotions";

/// Articles and connectives stripped when deriving keywords.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "of", "who", "whom", "whose", "that", "which", "with", "and", "or", "to",
    "in", "on", "at", "for", "from", "by", "their", "his", "her", "its", "is", "are", "was",
    "were", "as", "into", "through",
];

/// Normalized, immutable view of a user concept.
///
/// Invariant: every derived form is non-empty. Empty input is replaced by
/// [`FALLBACK_CONCEPT`] before any derivation, and keyword filtering falls
/// back to the unfiltered tokens when the stop-word pass would remove
/// everything.
///
/// # Examples
///
/// ```
/// use cinemuse_core::NormalizedConcept;
///
/// let concept = NormalizedConcept::normalize("  a lighthouse keeper who trades memories  ");
/// assert_eq!(concept.display(), "A lighthouse keeper who trades memories");
/// assert!(concept.keywords().contains(&"lighthouse".to_string()));
///
/// // Empty input never yields an empty concept.
/// let fallback = NormalizedConcept::normalize("   ");
/// assert_eq!(fallback.raw(), cinemuse_core::FALLBACK_CONCEPT);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters,
)]
pub struct NormalizedConcept {
    /// Trimmed concept text, or the fallback phrase
    raw: String,
    /// Lowercase form for interpolation into template sentences
    lowercase: String,
    /// Sentence-cased form for headings
    display: String,
    /// Lowercase keyword tokens with stop words removed
    keywords: Vec<String>,
}

impl NormalizedConcept {
    /// Normalize a raw concept string.
    ///
    /// Pure and deterministic; never fails. Empty and all-whitespace input
    /// is replaced with [`FALLBACK_CONCEPT`].
    pub fn normalize(concept: &str) -> Self {
        let trimmed = concept.trim();
        let raw = if trimmed.is_empty() {
            FALLBACK_CONCEPT.to_string()
        } else {
            trimmed.to_string()
        };

        let lowercase = raw.to_lowercase();
        let display = sentence_case(&raw);
        let keywords = derive_keywords(&lowercase);

        Self {
            raw,
            lowercase,
            display,
            keywords,
        }
    }

    /// The first keyword, used as the concept's anchor noun in titles and
    /// shot subjects.
    pub fn primary_keyword(&self) -> &str {
        // derive_keywords never returns an empty vec
        &self.keywords[0]
    }
}

/// Uppercase the first character, leave the rest untouched.
fn sentence_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Tokenize on non-alphanumerics and drop stop words.
///
/// Falls back to the unfiltered token list when filtering removes
/// everything, so the result is non-empty for any non-empty input.
fn derive_keywords(lowercase: &str) -> Vec<String> {
    let tokens: Vec<String> = lowercase
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();

    let filtered: Vec<String> = tokens
        .iter()
        .filter(|t| t.len() > 2 && !STOP_WORDS.contains(&t.as_str()))
        .cloned()
        .collect();

    if filtered.is_empty() { tokens } else { filtered }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_concept_falls_back() {
        let concept = NormalizedConcept::normalize("");
        assert_eq!(concept.raw(), FALLBACK_CONCEPT);
        assert!(!concept.lowercase().is_empty());
        assert!(!concept.display().is_empty());
        assert!(!concept.keywords().is_empty());
    }

    #[test]
    fn whitespace_concept_falls_back() {
        let concept = NormalizedConcept::normalize("   \t  ");
        assert_eq!(concept.raw(), FALLBACK_CONCEPT);
    }

    #[test]
    fn trims_and_sentence_cases() {
        let concept = NormalizedConcept::normalize("  a heist inside a dream  ");
        assert_eq!(concept.raw(), "a heist inside a dream");
        assert_eq!(concept.display(), "A heist inside a dream");
        assert_eq!(concept.lowercase(), "a heist inside a dream");
    }

    #[test]
    fn keywords_drop_stop_words() {
        let concept = NormalizedConcept::normalize(SAMPLE_CONCEPT);
        assert!(concept.keywords().contains(&"cartographer".to_string()));
        assert!(concept.keywords().contains(&"emotions".to_string()));
        assert!(!concept.keywords().contains(&"who".to_string()));
        assert_eq!(concept.primary_keyword(), "synesthetic");
    }

    #[test]
    fn keywords_fall_back_when_all_tokens_are_stop_words() {
        let concept = NormalizedConcept::normalize("the of an");
        assert!(!concept.keywords().is_empty());
    }

    #[test]
    fn normalization_is_deterministic() {
        let a = NormalizedConcept::normalize(SAMPLE_CONCEPT);
        let b = NormalizedConcept::normalize(SAMPLE_CONCEPT);
        assert_eq!(a, b);
    }
}
