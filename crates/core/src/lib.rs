pub mod config;
pub mod domain;
pub mod errors;
pub mod input;
pub mod suggestions;

pub use domain::club::{Club, ClubId, NewClub};
pub use errors::{ApplicationError, DomainError};
pub use input::{parse_shot_distance, parse_target_distance, validate_club_name};
pub use suggestions::{suggest, EmptyHistoryPolicy, Suggestion, SuggestionEngine, TOLERANCE};
