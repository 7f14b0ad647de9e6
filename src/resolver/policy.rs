//! Tie-break rules for picking one record out of several candidates.
//!
//! Rules are tried in order and the first one that selects a record wins.
//! The defaults are deliberately asymmetric: an id present in both
//! divisions resolves to Women, and a name resolves to Open only when the
//! query asked for it.

use log::{debug, info};

use crate::domain::{Division, PlayerRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TieBreak {
    /// Division the caller explicitly asked for
    Requested(Division),
    /// Division taken by default when no request applies
    Prefer(Division),
    /// First candidate in combined directory order
    FirstInOrder,
}

impl TieBreak {
    fn select<'a>(&self, candidates: &[&'a PlayerRecord]) -> Option<&'a PlayerRecord> {
        match self {
            TieBreak::Requested(division) | TieBreak::Prefer(division) => {
                candidates.iter().find(|r| r.division == *division).copied()
            }
            TieBreak::FirstInOrder => candidates.first().copied(),
        }
    }
}

/// Rules for an id that may be ranked in both divisions
pub const ID_RULES: &[TieBreak] = &[TieBreak::Prefer(Division::Women), TieBreak::FirstInOrder];

const NAME_RULES: &[TieBreak] = &[TieBreak::Prefer(Division::Women), TieBreak::FirstInOrder];

const NAME_RULES_OPEN: &[TieBreak] = &[
    TieBreak::Requested(Division::Open),
    TieBreak::Prefer(Division::Women),
    TieBreak::FirstInOrder,
];

/// Rules for records sharing the matched name
pub fn name_rules(wants_open: bool) -> &'static [TieBreak] {
    if wants_open { NAME_RULES_OPEN } else { NAME_RULES }
}

/// Applies `rules` in order. A single candidate is taken as is.
pub fn pick<'a>(candidates: &[&'a PlayerRecord], rules: &[TieBreak]) -> Option<&'a PlayerRecord> {
    if let [only] = candidates {
        return Some(*only);
    }

    for rule in rules {
        if let Some(record) = rule.select(candidates) {
            debug!(
                "Tie-break {:?} chose {} ({}) among {} candidates",
                rule,
                record.name,
                record.division,
                candidates.len()
            );
            return Some(record);
        }

        // Open was asked for but only other divisions carry this name
        if let TieBreak::Requested(division) = rule {
            info!(
                "Requested {} record not available among {} candidates, falling back",
                division,
                candidates.len()
            );
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::directory::tests::record;

    #[test]
    fn single_candidate_wins_regardless_of_rules() {
        let open = record("Jan", 1, Division::Open, 1900);
        assert_eq!(pick(&[&open], ID_RULES), Some(&open));
        assert_eq!(pick(&[&open], name_rules(false)), Some(&open));
    }

    #[test]
    fn ids_prefer_women() {
        let open = record("Kim", 5, Division::Open, 1900);
        let women = record("Kim", 5, Division::Women, 1700);
        assert_eq!(pick(&[&open, &women], ID_RULES), Some(&women));
        assert_eq!(pick(&[&women, &open], ID_RULES), Some(&women));
    }

    #[test]
    fn names_prefer_open_only_on_request() {
        let open = record("Kim", 5, Division::Open, 1900);
        let women = record("Kim", 6, Division::Women, 1700);
        assert_eq!(pick(&[&open, &women], name_rules(true)), Some(&open));
        assert_eq!(pick(&[&open, &women], name_rules(false)), Some(&women));
    }

    #[test]
    fn requested_open_falls_back_to_women() {
        let w1 = record("Kim", 5, Division::Women, 1700);
        let w2 = record("Kim", 6, Division::Women, 1650);
        assert_eq!(pick(&[&w1, &w2], name_rules(true)), Some(&w1));
    }

    #[test]
    fn open_only_duplicates_take_first() {
        let o1 = record("Kim", 5, Division::Open, 1700);
        let o2 = record("Kim", 6, Division::Open, 1650);
        assert_eq!(pick(&[&o1, &o2], name_rules(false)), Some(&o1));
    }

    #[test]
    fn nothing_to_pick_from() {
        assert_eq!(pick(&[], ID_RULES), None);
    }
}
