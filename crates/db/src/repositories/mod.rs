use async_trait::async_trait;
use thiserror::Error;

use betheclub_core::domain::club::{Club, ClubId, NewClub};

pub mod club;
pub mod feed;
pub mod memory;

pub use club::SqlClubRepository;
pub use feed::ClubFeed;
pub use memory::InMemoryClubRepository;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("encode error: {0}")]
    Encode(String),
}

/// Shot distances must survive a JSON round trip; NaN and infinities would
/// be written as `null` and poison every later read of the collection.
pub(crate) fn ensure_finite_shots(shots: &[f64]) -> Result<(), RepositoryError> {
    match shots.iter().find(|shot| !shot.is_finite()) {
        Some(shot) => Err(RepositoryError::Encode(format!("shot distance `{shot}` is not finite"))),
        None => Ok(()),
    }
}

/// Storage for clubs and their shot histories.
///
/// Listings are ordered by id, which is also insertion order. Writes follow
/// last-write-wins; `update` and `delete` report whether a record matched.
#[async_trait]
pub trait ClubRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Club>, RepositoryError>;

    /// Live view of the collection, refreshed after every write.
    async fn subscribe(&self) -> Result<ClubFeed, RepositoryError>;

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, RepositoryError>;

    async fn insert(&self, club: NewClub) -> Result<Club, RepositoryError>;

    async fn update(&self, club: &Club) -> Result<bool, RepositoryError>;

    async fn delete(&self, id: &ClubId) -> Result<bool, RepositoryError>;
}
