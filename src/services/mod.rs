pub mod ingestion;
pub mod lookup;
pub mod server;

pub use lookup::{LookupService, MatchReport, TEAM_SIZE};
