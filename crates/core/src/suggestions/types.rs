use serde::{Deserialize, Serialize};

use crate::domain::club::Club;

/// How clubs without recorded shots take part in a suggestion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyHistoryPolicy {
    /// An empty history averages to `0` and competes like any other club.
    #[default]
    #[serde(alias = "zero")]
    TreatAsZero,
    /// Clubs without shots are never candidates.
    Skip,
}

impl std::str::FromStr for EmptyHistoryPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "zero" | "treat_as_zero" => Ok(Self::TreatAsZero),
            "skip" => Ok(Self::Skip),
            other => Err(format!("unsupported empty history policy `{other}` (expected zero|skip)")),
        }
    }
}

/// The chosen club together with the numbers that qualified it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Suggestion<'a> {
    pub club: &'a Club,
    pub average_distance: i64,
    pub difference: u64,
}
