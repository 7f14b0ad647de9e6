use thiserror::Error;

use crate::domain::Division;

/// Failures surfaced by identifier resolution and match composition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No candidate at all for the query
    #[error("No player found matching {0}")]
    NotFound(String),

    /// Direct-rating literal that cannot be read as a rating
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// Wrong request shape, detected before any resolution
    #[error("Malformed request: {0}")]
    MalformedRequest(String),
}

/// Shape violations found while building a directory from a snapshot
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("Player id {player_id} appears more than once in the {division} division")]
    DuplicatePlayerId { division: Division, player_id: i64 },

    #[error("Record '{name}' is tagged {found} but was listed under {expected}")]
    DivisionMismatch {
        name: String,
        expected: Division,
        found: Division,
    },
}

pub type LookupResult<T> = std::result::Result<T, LookupError>;
