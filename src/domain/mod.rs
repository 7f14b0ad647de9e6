pub mod directory;
pub mod models;

pub use directory::{flag_cross_division, PlayerDirectory, SharedDirectory};
pub use models::{
    Division, DivisionSnapshot, HistoryTarget, MatchRequest, PlayerRecord, RatedEntry,
    ResolvedPlayer, TeamMember,
};
