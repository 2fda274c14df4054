//! Parsing of raw user input before it reaches the engine or the repository.

use crate::errors::DomainError;

pub fn parse_target_distance(raw: &str) -> Result<i64, DomainError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DomainError::InvalidTargetDistance { input: raw.to_string() })
}

pub fn parse_shot_distance(raw: &str) -> Result<f64, DomainError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|distance| distance.is_finite())
        .ok_or_else(|| DomainError::InvalidShotDistance { input: raw.to_string() })
}

pub fn validate_club_name(raw: &str) -> Result<String, DomainError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(DomainError::EmptyClubName);
    }
    Ok(name.to_string())
}
