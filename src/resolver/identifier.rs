use crate::errors::{LookupError, LookupResult};

/// Suffixes asking for the Open division record, e.g. "Jan Berg (o)"
const OPEN_SUFFIXES: [&str; 2] = [" (o)", " (1)"];

/// Largest rating literal accepted for team composition
pub const MAX_DIRECT_RATING: i64 = 1_000_000;

/// Typed form of a raw player query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identifier {
    NumericId(i64),
    Name { text: String, wants_open: bool },
    DirectRating(i64),
}

impl Identifier {
    /// Parses a query for player lookup. Never fails on names; a
    /// direct-rating literal too large to hold names no player either.
    pub fn parse(raw: &str) -> LookupResult<Self> {
        let text = raw.trim();

        if let Some(digits) = direct_rating_digits(text) {
            return digits
                .parse()
                .map(Identifier::DirectRating)
                .map_err(|_| LookupError::NotFound(format!("direct rating {} has no player record", text)));
        }

        let (text, wants_open) = strip_open_suffix(text);

        match text.parse::<i64>() {
            Ok(id) => Ok(Identifier::NumericId(id)),
            Err(_) => Ok(Identifier::Name {
                text: text.to_string(),
                wants_open,
            }),
        }
    }

    /// Parses a query for team composition, where any fully parenthesised
    /// query must be a rating literal that fits in `MAX_DIRECT_RATING`.
    pub fn parse_rating(raw: &str) -> LookupResult<Self> {
        let text = raw.trim();
        if text.starts_with('(') && text.ends_with(')') {
            return direct_rating_digits(text)
                .and_then(|digits| digits.parse::<i64>().ok())
                .filter(|rating| *rating <= MAX_DIRECT_RATING)
                .map(Identifier::DirectRating)
                .ok_or_else(|| {
                    LookupError::InvalidIdentifier(format!(
                        "expected a rating like (1850), got {}",
                        text
                    ))
                });
        }
        Self::parse(text)
    }
}

fn direct_rating_digits(text: &str) -> Option<&str> {
    let inner = text.strip_prefix('(')?.strip_suffix(')')?;
    if !inner.is_empty() && inner.chars().all(|c| c.is_ascii_digit()) {
        Some(inner)
    } else {
        None
    }
}

fn strip_open_suffix(text: &str) -> (&str, bool) {
    OPEN_SUFFIXES
        .iter()
        .find_map(|suffix| text.strip_suffix(suffix))
        .map(|rest| (rest.trim(), true))
        .unwrap_or((text, false))
}
