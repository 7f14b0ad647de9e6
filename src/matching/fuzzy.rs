use rapidfuzz::distance::indel;

use super::{FuzzyMatcher, MAX_SCORE};

/// Indel-ratio matcher over normalised names.
///
/// Names are lowercased, punctuation becomes whitespace and runs of
/// whitespace collapse, so "Müller, Jan" and "müller jan" compare equal.
/// The score is the better of the plain ratio and the ratio over
/// alphabetically sorted tokens, which lets "Doe John" find "John Doe".
pub struct RatioMatcher;

impl RatioMatcher {
    pub fn new() -> Self {
        Self
    }

    fn normalize(text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { ' ' })
            .collect::<String>()
            .split_whitespace()
            .collect::<Vec<&str>>()
            .join(" ")
    }

    fn sorted_tokens(normalized: &str) -> String {
        let mut tokens: Vec<&str> = normalized.split_whitespace().collect();
        tokens.sort_unstable();
        tokens.join(" ")
    }

    fn ratio(a: &str, b: &str) -> f64 {
        indel::normalized_similarity(a.chars(), b.chars())
    }
}

impl Default for RatioMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl FuzzyMatcher for RatioMatcher {
    fn score(&self, query: &str, candidate: &str) -> u8 {
        let query = Self::normalize(query);
        let candidate = Self::normalize(candidate);

        if query == candidate {
            return MAX_SCORE;
        }

        let plain = Self::ratio(&query, &candidate);
        let sorted = Self::ratio(&Self::sorted_tokens(&query), &Self::sorted_tokens(&candidate));
        let similarity = plain.max(sorted).clamp(0.0, 1.0);

        // 100 is reserved for names that normalise identically
        ((similarity * 100.0).round() as u8).min(MAX_SCORE - 1)
    }

    fn name(&self) -> &str {
        "indel-ratio"
    }
}
