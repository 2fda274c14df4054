//! Nearest-average club selection

use super::types::{EmptyHistoryPolicy, Suggestion};
use super::TOLERANCE;
use crate::domain::club::Club;

/// Returns the club whose truncated average is closest to `target_distance`,
/// provided it lies within [`TOLERANCE`]. Ties go to the club listed first.
pub fn suggest(target_distance: i64, clubs: &[Club]) -> Option<&Club> {
    SuggestionEngine::default().suggest(target_distance, clubs)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SuggestionEngine {
    tolerance: u64,
    empty_history: EmptyHistoryPolicy,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self { tolerance: TOLERANCE, empty_history: EmptyHistoryPolicy::TreatAsZero }
    }
}

impl SuggestionEngine {
    pub fn new(tolerance: u64, empty_history: EmptyHistoryPolicy) -> Self {
        Self { tolerance, empty_history }
    }

    pub fn tolerance(&self) -> u64 {
        self.tolerance
    }

    pub fn empty_history(&self) -> EmptyHistoryPolicy {
        self.empty_history
    }

    pub fn suggest<'a>(&self, target_distance: i64, clubs: &'a [Club]) -> Option<&'a Club> {
        self.evaluate(target_distance, clubs).map(|suggestion| suggestion.club)
    }

    /// Scans `clubs` in the order given. A later club only replaces the
    /// running best when strictly closer.
    pub fn evaluate<'a>(&self, target_distance: i64, clubs: &'a [Club]) -> Option<Suggestion<'a>> {
        let mut best: Option<Suggestion<'a>> = None;

        for club in clubs {
            if self.empty_history == EmptyHistoryPolicy::Skip && !club.has_history() {
                continue;
            }

            let average_distance = club.truncated_average();
            let difference = target_distance.abs_diff(average_distance);
            if difference > self.tolerance {
                continue;
            }

            if best.map_or(true, |current| difference < current.difference) {
                best = Some(Suggestion { club, average_distance, difference });
            }
        }

        best
    }
}
