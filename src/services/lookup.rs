use log::info;
use serde::Serialize;
use std::sync::Arc;

use crate::domain::{
    HistoryTarget, MatchRequest, PlayerDirectory, ResolvedPlayer, SharedDirectory, TeamMember,
};
use crate::errors::{LookupError, LookupResult};
use crate::outcome::{self, OutcomeEntry};
use crate::resolver::IdentifierResolver;

/// Players per team in a match request
pub const TEAM_SIZE: usize = 2;

/// Resolved teams, their rating sums and the outcome grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub team1: Vec<TeamMember>,
    pub team2: Vec<TeamMember>,
    pub team1_rating: i64,
    pub team2_rating: i64,
    pub outcomes: Vec<OutcomeEntry>,
}

/// Entry points the HTTP layer and the CLI share.
///
/// Each call works on the directory snapshot current when it starts.
#[derive(Clone)]
pub struct LookupService {
    directory: SharedDirectory,
    resolver: Arc<IdentifierResolver>,
}

impl LookupService {
    pub fn new(directory: SharedDirectory) -> Self {
        Self {
            directory,
            resolver: Arc::new(IdentifierResolver::new()),
        }
    }

    pub fn directory(&self) -> &SharedDirectory {
        &self.directory
    }

    pub fn player(&self, query: &str) -> LookupResult<ResolvedPlayer> {
        let directory = self.directory.current();
        self.resolver.lookup(&directory, query)
    }

    pub fn history(&self, query: &str) -> LookupResult<HistoryTarget> {
        let directory = self.directory.current();
        self.resolver.history_target(&directory, query)
    }

    pub fn compose_match(&self, request: &MatchRequest) -> LookupResult<MatchReport> {
        Self::validate(request)?;

        let directory = self.directory.current();
        let (team1, team1_rating) = self.rate_team(&directory, &request.team1)?;
        let (team2, team2_rating) = self.rate_team(&directory, &request.team2)?;

        info!("Match {} vs {} ({} vs {})", names(&team1), names(&team2), team1_rating, team2_rating);

        Ok(MatchReport {
            team1,
            team2,
            team1_rating,
            team2_rating,
            outcomes: outcome::compute(team1_rating, team2_rating),
        })
    }

    fn validate(request: &MatchRequest) -> LookupResult<()> {
        for (label, team) in [("team1", &request.team1), ("team2", &request.team2)] {
            if team.len() != TEAM_SIZE {
                return Err(LookupError::MalformedRequest(format!(
                    "{} needs exactly {} players, got {}",
                    label,
                    TEAM_SIZE,
                    team.len()
                )));
            }
        }
        Ok(())
    }

    fn rate_team(
        &self,
        directory: &PlayerDirectory,
        queries: &[String],
    ) -> LookupResult<(Vec<TeamMember>, i64)> {
        let mut members = Vec::with_capacity(queries.len());
        let mut total = 0i64;

        for query in queries {
            let entry = self.resolver.resolve_rating(directory, query)?;
            total = total.checked_add(entry.rating).ok_or_else(|| {
                LookupError::InvalidIdentifier(format!("rating of {} overflows the team total", query))
            })?;
            members.push(TeamMember {
                identifier: query.clone(),
                resolved_name: entry.display_name,
            });
        }

        Ok((members, total))
    }
}

fn names(team: &[TeamMember]) -> String {
    team.iter()
        .map(|m| m.resolved_name.as_str())
        .collect::<Vec<_>>()
        .join(" & ")
}
