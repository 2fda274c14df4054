use std::collections::BTreeMap;

use tokio::sync::RwLock;

use betheclub_core::domain::club::{Club, ClubId, NewClub};

use super::feed::FeedPublisher;
use super::{ensure_finite_shots, ClubFeed, ClubRepository, RepositoryError};

#[derive(Default)]
struct MemoryState {
    clubs: BTreeMap<ClubId, Club>,
    last_id: i64,
}

impl MemoryState {
    fn snapshot(&self) -> Vec<Club> {
        self.clubs.values().cloned().collect()
    }
}

#[derive(Default)]
pub struct InMemoryClubRepository {
    state: RwLock<MemoryState>,
    feed: FeedPublisher,
}

#[async_trait::async_trait]
impl ClubRepository for InMemoryClubRepository {
    async fn list_all(&self) -> Result<Vec<Club>, RepositoryError> {
        Ok(self.state.read().await.snapshot())
    }

    async fn subscribe(&self) -> Result<ClubFeed, RepositoryError> {
        let state = self.state.read().await;
        self.feed.publish(state.snapshot());
        Ok(self.feed.subscribe())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, RepositoryError> {
        Ok(self.state.read().await.clubs.get(id).cloned())
    }

    async fn insert(&self, club: NewClub) -> Result<Club, RepositoryError> {
        ensure_finite_shots(&club.shots)?;
        let mut state = self.state.write().await;
        state.last_id += 1;
        let inserted = Club::from_new(ClubId(state.last_id), club);
        state.clubs.insert(inserted.id, inserted.clone());
        self.feed.publish(state.snapshot());
        Ok(inserted)
    }

    async fn update(&self, club: &Club) -> Result<bool, RepositoryError> {
        ensure_finite_shots(&club.shots)?;
        let mut state = self.state.write().await;
        let Some(stored) = state.clubs.get_mut(&club.id) else {
            return Ok(false);
        };
        *stored = club.clone();
        self.feed.publish(state.snapshot());
        Ok(true)
    }

    async fn delete(&self, id: &ClubId) -> Result<bool, RepositoryError> {
        let mut state = self.state.write().await;
        let removed = state.clubs.remove(id).is_some();
        if removed {
            self.feed.publish(state.snapshot());
        }
        Ok(removed)
    }
}
