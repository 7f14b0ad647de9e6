pub mod fuzzy;

pub use fuzzy::RatioMatcher;

/// Score given to an exact (normalised) match
pub const MAX_SCORE: u8 = 100;

/// Winning candidate of a fuzzy search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FuzzyMatch<'a> {
    pub candidate: &'a str,
    pub index: usize,
    pub score: u8,
}

/// Trait for name similarity implementations
pub trait FuzzyMatcher: Send + Sync {
    /// Similarity of `candidate` to `query` in 0..=100; 100 only for an exact match
    fn score(&self, query: &str, candidate: &str) -> u8;

    /// Highest scoring candidate; equal scores keep the earliest one
    fn best<'a>(&self, query: &str, candidates: &'a [String]) -> Option<FuzzyMatch<'a>> {
        let mut best: Option<FuzzyMatch<'a>> = None;

        for (index, candidate) in candidates.iter().enumerate() {
            let score = self.score(query, candidate);
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(FuzzyMatch {
                    candidate: candidate.as_str(),
                    index,
                    score,
                });
                if score == MAX_SCORE {
                    break;
                }
            }
        }

        best
    }

    /// Matcher name for logging
    fn name(&self) -> &str;
}
