use thiserror::Error;

use crate::domain::club::ClubId;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("target distance `{input}` is not a whole number")]
    InvalidTargetDistance { input: String },
    #[error("shot distance `{input}` is not a finite number")]
    InvalidShotDistance { input: String },
    #[error("club name is empty")]
    EmptyClubName,
    #[error("club {0} was not found")]
    ClubNotFound(ClubId),
}

impl DomainError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidTargetDistance { .. } => "Please enter a valid number.",
            Self::InvalidShotDistance { .. } => "Please enter a valid shot distance.",
            Self::EmptyClubName => "Club name cannot be empty",
            Self::ClubNotFound(_) => "Club not found",
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("persistence failure: {0}")]
    Persistence(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(error) => error.user_message(),
            Self::Persistence(_) => "Your clubs could not be saved or loaded. Please try again.",
            Self::Configuration(_) => "The app is not configured correctly.",
        }
    }

    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::ClubNotFound(_)) => "not_found",
            Self::Domain(_) => "invalid_input",
            Self::Persistence(_) => "persistence",
            Self::Configuration(_) => "config_validation",
        }
    }
}
