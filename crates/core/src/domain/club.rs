use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClubId(pub i64);

impl fmt::Display for ClubId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A club that has not been persisted yet; the repository assigns its id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NewClub {
    pub name: String,
    pub shots: Vec<f64>,
}

impl NewClub {
    pub fn named(name: impl Into<String>) -> Self {
        Self { name: name.into(), shots: Vec::new() }
    }
}

/// A golf club and its recorded shot distances, in insertion order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Club {
    pub id: ClubId,
    pub name: String,
    pub shots: Vec<f64>,
}

impl Club {
    pub fn from_new(id: ClubId, club: NewClub) -> Self {
        Self { id, name: club.name, shots: club.shots }
    }

    /// Arithmetic mean of the recorded shots, `None` without any history.
    pub fn average_distance(&self) -> Option<f64> {
        if self.shots.is_empty() {
            return None;
        }
        Some(self.shots.iter().sum::<f64>() / self.shots.len() as f64)
    }

    /// Mean truncated toward zero. An empty history averages to `0`.
    pub fn truncated_average(&self) -> i64 {
        // NaN and out-of-range values saturate under `as`, empty maps to 0.
        self.average_distance().unwrap_or(f64::NAN) as i64
    }

    pub fn average_label(&self) -> String {
        match self.average_distance() {
            Some(average) => format!("{average:.1}"),
            None => "N/A".to_string(),
        }
    }

    pub fn record_shot(&mut self, distance: f64) {
        self.shots.push(distance);
    }

    pub fn has_history(&self) -> bool {
        !self.shots.is_empty()
    }
}
