use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the two independent ranking pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Division {
    Open,
    Women,
}

impl Division {
    /// Index used by the ranking site for this division's pages and history charts
    pub fn index(&self) -> u8 {
        match self {
            Division::Open => 1,
            Division::Women => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Division::Open => "Open",
            Division::Women => "Women",
        }
    }
}

impl fmt::Display for Division {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Player entry as published in a division ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub player_id: i64,
    pub rank: u32,
    pub club: Option<String>,
    pub city: Option<String>,
    pub games: u32,
    pub elo_rating: i64,
    pub division: Division,
    pub trend_90_days: i64,
    pub pro_status: bool,
    #[serde(default)]
    pub exists_in_both_divisions: bool,
}

/// Both division rankings as captured by one ingestion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivisionSnapshot {
    pub fetched_at: DateTime<Utc>,
    pub open: Vec<PlayerRecord>,
    pub women: Vec<PlayerRecord>,
}

/// Result of a single-player lookup
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPlayer {
    #[serde(flatten)]
    pub record: PlayerRecord,
    pub match_score: Option<u8>,
    pub exact_match: bool,
}

impl ResolvedPlayer {
    pub fn by_id(record: PlayerRecord) -> Self {
        Self {
            record,
            match_score: None,
            exact_match: true,
        }
    }

    pub fn by_name(record: PlayerRecord, score: u8) -> Self {
        Self {
            record,
            match_score: Some(score),
            exact_match: score == 100,
        }
    }
}

/// What the external history fetch needs to know about a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HistoryTarget {
    pub player_id: i64,
    pub division: Division,
    pub division_index: u8,
}

impl From<&PlayerRecord> for HistoryTarget {
    fn from(record: &PlayerRecord) -> Self {
        Self {
            player_id: record.player_id,
            division: record.division,
            division_index: record.division.index(),
        }
    }
}

/// A rating contributed to a team, with the name it is shown under
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatedEntry {
    pub rating: i64,
    pub display_name: String,
}

impl RatedEntry {
    pub fn direct(rating: i64) -> Self {
        Self {
            rating,
            display_name: format!("Direct RGX {}", rating),
        }
    }

    pub fn from_record(record: &PlayerRecord) -> Self {
        Self {
            rating: record.elo_rating,
            display_name: record.name.clone(),
        }
    }
}

/// Two teams of player queries to rate against each other
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchRequest {
    pub team1: Vec<String>,
    pub team2: Vec<String>,
}

/// A query as sent and the name it resolved to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamMember {
    pub identifier: String,
    pub resolved_name: String,
}
