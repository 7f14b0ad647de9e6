use serde::Serialize;

/// Match format, which sets the weight `b` of the point delta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MatchFormat {
    OneSet,
    BestOfSets,
}

impl MatchFormat {
    pub fn weight(&self) -> f64 {
        match self {
            MatchFormat::OneSet => 0.75,
            MatchFormat::BestOfSets => 1.0,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchFormat::OneSet => "One-set match",
            MatchFormat::BestOfSets => "Best-of-3 or Best-of-5 match",
        }
    }
}

/// One row of the outcome grid: a format, the fraction `p` team 1 realised
/// and how that result reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Combination {
    pub format: MatchFormat,
    pub fraction: f64,
    pub outcome: &'static str,
}

const fn combo(format: MatchFormat, fraction: f64, outcome: &'static str) -> Combination {
    Combination {
        format,
        fraction,
        outcome,
    }
}

/// Every result the calculator reports, in output order
pub const GRID: [Combination; 11] = [
    combo(MatchFormat::BestOfSets, 0.0, "Team1 lost 0:1, 0:2, or 0:3"),
    combo(MatchFormat::BestOfSets, 0.25, "Team1 lost 1:3"),
    combo(MatchFormat::BestOfSets, 0.33, "Team1 lost 1:2"),
    combo(MatchFormat::BestOfSets, 0.4, "-"),
    combo(MatchFormat::BestOfSets, 0.5, "1:1 or 2:2"),
    combo(MatchFormat::BestOfSets, 0.6, "Team1 won 3:2"),
    combo(MatchFormat::BestOfSets, 0.67, "Team1 won 2:1"),
    combo(MatchFormat::BestOfSets, 0.75, "Team1 won 3:1"),
    combo(MatchFormat::BestOfSets, 1.0, "Team1 won 1:0, 2:0, or 3:0"),
    combo(MatchFormat::OneSet, 0.0, "Team1 lost 0:1 in a 1-set match"),
    combo(MatchFormat::OneSet, 1.0, "Team1 won 1:0 in a 1-set match"),
];

impl Combination {
    pub fn description(&self) -> String {
        format!("{}: {}", self.format.label(), self.outcome)
    }
}
