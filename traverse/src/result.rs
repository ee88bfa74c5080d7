use serde::Serialize;
use std::fmt;

/// Outcome of a depth-limited search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchResult {
    /// goal reached.
    Found,
    /// at least one branch was abandoned because of the depth limit,
    /// so a deeper search might still find the goal.
    Cutoff,
    /// every branch was exhausted without hitting the depth limit.
    NotFound,
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Found => "FOUND",
            Self::Cutoff => "CUTOFF",
            Self::NotFound => "NOT_FOUND",
        })
    }
}
