pub mod identifier;
pub mod policy;

pub use identifier::Identifier;

use log::debug;

use crate::domain::{HistoryTarget, PlayerDirectory, PlayerRecord, RatedEntry, ResolvedPlayer};
use crate::errors::{LookupError, LookupResult};
use crate::matching::{FuzzyMatcher, RatioMatcher};

/// Turns player queries into directory records
pub struct IdentifierResolver<M: FuzzyMatcher = RatioMatcher> {
    matcher: M,
}

impl IdentifierResolver<RatioMatcher> {
    pub fn new() -> Self {
        Self::with_matcher(RatioMatcher::new())
    }
}

impl Default for IdentifierResolver<RatioMatcher> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: FuzzyMatcher> IdentifierResolver<M> {
    pub fn with_matcher(matcher: M) -> Self {
        Self { matcher }
    }

    /// Single-player lookup. Unknown ids and direct ratings are `NotFound`.
    pub fn lookup(&self, directory: &PlayerDirectory, raw: &str) -> LookupResult<ResolvedPlayer> {
        let identifier = Identifier::parse(raw)?;
        self.resolve(directory, &identifier)
    }

    /// Player id and division for an external rating-history fetch
    pub fn history_target(&self, directory: &PlayerDirectory, raw: &str) -> LookupResult<HistoryTarget> {
        self.lookup(directory, raw)
            .map(|resolved| HistoryTarget::from(&resolved.record))
    }

    /// Rating lookup for team composition. A bare number that matches no
    /// player id is taken as a rating itself.
    pub fn resolve_rating(&self, directory: &PlayerDirectory, raw: &str) -> LookupResult<RatedEntry> {
        match Identifier::parse_rating(raw)? {
            Identifier::DirectRating(rating) => Ok(RatedEntry::direct(rating)),
            Identifier::NumericId(id) => match self.resolve_id(directory, id) {
                Ok(resolved) => Ok(RatedEntry::from_record(&resolved.record)),
                Err(LookupError::NotFound(_)) => {
                    debug!("No player with id {}, using it as a direct rating", id);
                    Ok(RatedEntry::direct(id))
                }
                Err(e) => Err(e),
            },
            identifier @ Identifier::Name { .. } => self
                .resolve(directory, &identifier)
                .map(|resolved| RatedEntry::from_record(&resolved.record)),
        }
    }

    pub fn resolve(&self, directory: &PlayerDirectory, identifier: &Identifier) -> LookupResult<ResolvedPlayer> {
        match identifier {
            Identifier::NumericId(id) => self.resolve_id(directory, *id),
            Identifier::Name { text, wants_open } => self.resolve_name(directory, text, *wants_open),
            Identifier::DirectRating(rating) => Err(LookupError::NotFound(format!(
                "direct rating ({}) has no player record",
                rating
            ))),
        }
    }

    fn resolve_id(&self, directory: &PlayerDirectory, id: i64) -> LookupResult<ResolvedPlayer> {
        let candidates = directory.find_by_id(id);
        policy::pick(&candidates, policy::ID_RULES)
            .map(|record| ResolvedPlayer::by_id(record.clone()))
            .ok_or_else(|| LookupError::NotFound(format!("ID {}", id)))
    }

    fn resolve_name(&self, directory: &PlayerDirectory, text: &str, wants_open: bool) -> LookupResult<ResolvedPlayer> {
        let best = self
            .matcher
            .best(text, directory.names())
            .ok_or_else(|| LookupError::NotFound(text.to_string()))?;

        debug!(
            "{} matched '{}' to '{}' with score {}",
            self.matcher.name(),
            text,
            best.candidate,
            best.score
        );

        let candidates: Vec<&PlayerRecord> = directory.find_by_name(best.candidate);
        policy::pick(&candidates, policy::name_rules(wants_open))
            .map(|record| ResolvedPlayer::by_name(record.clone(), best.score))
            .ok_or_else(|| LookupError::NotFound(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Division;
    use crate::domain::directory::tests::record;

    fn directory() -> PlayerDirectory {
        PlayerDirectory::new(
            vec![
                record("Paul Siemer", 265, Division::Open, 2100),
                record("Kim Adler", 40, Division::Open, 1950),
            ],
            vec![
                record("Kim Adler", 40, Division::Women, 1800),
                record("Lena Vogel", 12, Division::Women, 1750),
            ],
        )
        .unwrap()
    }

    #[test]
    fn numeric_id_in_one_division() {
        let resolved = IdentifierResolver::new().lookup(&directory(), "265").unwrap();
        assert_eq!(resolved.record.name, "Paul Siemer");
        assert_eq!(resolved.match_score, None);
        assert!(resolved.exact_match);
    }

    #[test]
    fn numeric_id_in_both_divisions_is_women() {
        let resolved = IdentifierResolver::new().lookup(&directory(), "40").unwrap();
        assert_eq!(resolved.record.division, Division::Women);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = IdentifierResolver::new().lookup(&directory(), "9999").unwrap_err();
        assert_eq!(err, LookupError::NotFound("ID 9999".to_string()));
    }

    #[test]
    fn shared_name_honours_open_request() {
        let resolver = IdentifierResolver::new();
        let dir = directory();

        let default = resolver.lookup(&dir, "Kim Adler").unwrap();
        assert_eq!(default.record.division, Division::Women);
        assert_eq!(default.match_score, Some(100));
        assert!(default.exact_match);

        let open = resolver.lookup(&dir, "Kim Adler (o)").unwrap();
        assert_eq!(open.record.division, Division::Open);
    }

    #[test]
    fn fuzzy_name_is_not_exact() {
        let resolved = IdentifierResolver::new().lookup(&directory(), "Lena Vogl").unwrap();
        assert_eq!(resolved.record.player_id, 12);
        assert!(resolved.match_score.unwrap() < 100);
        assert!(!resolved.exact_match);
    }

    #[test]
    fn empty_directory_has_no_name_candidates() {
        let err = IdentifierResolver::new()
            .lookup(&PlayerDirectory::default(), "Anyone")
            .unwrap_err();
        assert!(matches!(err, LookupError::NotFound(_)));
    }

    #[test]
    fn direct_rating_is_not_a_player() {
        let err = IdentifierResolver::new().lookup(&directory(), "(1972)").unwrap_err();
        assert!(matches!(err, LookupError::NotFound(_)));
    }

    #[test]
    fn rating_mode_falls_back_to_direct_rating() {
        let resolver = IdentifierResolver::new();
        let dir = directory();

        assert_eq!(resolver.resolve_rating(&dir, "265").unwrap().rating, 2100);
        assert_eq!(resolver.resolve_rating(&dir, "1972").unwrap(), RatedEntry::direct(1972));
        assert_eq!(
            resolver.resolve_rating(&dir, "(1972)").unwrap().display_name,
            "Direct RGX 1972"
        );
    }

    #[test]
    fn history_target_carries_division_index() {
        let target = IdentifierResolver::new().history_target(&directory(), "40").unwrap();
        assert_eq!(target.player_id, 40);
        assert_eq!(target.division, Division::Women);
        assert_eq!(target.division_index, 2);
    }
}
