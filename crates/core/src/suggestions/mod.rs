//! Club suggestions
//!
//! Picks the club whose average carry best matches a target distance,
//! within a fixed tolerance.

mod engine;
mod types;

pub use engine::{suggest, SuggestionEngine};
pub use types::*;

/// Maximum distance between a target and a candidate club's average.
pub const TOLERANCE: u64 = 10;
