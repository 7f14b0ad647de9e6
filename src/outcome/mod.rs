pub mod labels;

pub use labels::{Combination, MatchFormat, GRID};

use serde::Serialize;

/// Rating difference at which the stronger team is ten times as likely to win
pub const SCALE_D: f64 = 550.0;

/// Points at stake for a full-weight match
pub const FACTOR_K: f64 = 50.0;

/// Expected result and point delta for team 1 under one grid combination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeEntry {
    pub b: f64,
    pub p: f64,
    pub e1: f64,
    pub x1: f64,
    pub description: String,
}

/// Win probability of team 1 against team 2
pub fn expected_score(r1: i64, r2: i64) -> f64 {
    let diff = r2 as f64 - r1 as f64;
    1.0 / (1.0 + 10f64.powf(diff / SCALE_D))
}

/// Computes the full outcome grid for two summed team ratings
pub fn compute(r1: i64, r2: i64) -> Vec<OutcomeEntry> {
    let e1 = expected_score(r1, r2);

    GRID.iter()
        .map(|combination| {
            let b = combination.format.weight();
            let x1 = b * FACTOR_K * (combination.fraction - e1);
            OutcomeEntry {
                b,
                p: combination.fraction,
                e1: round4(e1),
                x1: round4(x1),
                description: combination.description(),
            }
        })
        .collect()
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
