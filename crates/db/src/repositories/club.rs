use sqlx::{sqlite::SqliteRow, Row};
use tracing::{debug, info, warn};

use betheclub_core::domain::club::{Club, ClubId, NewClub};

use super::feed::FeedPublisher;
use super::{ensure_finite_shots, ClubFeed, ClubRepository, RepositoryError};
use crate::DbPool;

pub struct SqlClubRepository {
    pool: DbPool,
    feed: FeedPublisher,
}

impl SqlClubRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool, feed: FeedPublisher::default() }
    }

    async fn load_all(&self) -> Result<Vec<Club>, RepositoryError> {
        let rows = sqlx::query("SELECT id, name, shots FROM golf_clubs ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(club_from_row).collect()
    }

    /// Republishes the listing after a committed write. A failed reload
    /// leaves subscribers on the previous snapshot; the write still stands.
    async fn refresh_feed(&self) {
        if !self.feed.has_subscribers() {
            return;
        }
        match self.load_all().await {
            Ok(clubs) => self.feed.publish(clubs),
            Err(error) => warn!(
                event_name = "db.club.feed_refresh_failed",
                error = %error,
                "club feed was not refreshed"
            ),
        }
    }
}

#[async_trait::async_trait]
impl ClubRepository for SqlClubRepository {
    async fn list_all(&self) -> Result<Vec<Club>, RepositoryError> {
        let clubs = self.load_all().await?;
        debug!(event_name = "db.club.listed", club_count = clubs.len(), "listed clubs");
        Ok(clubs)
    }

    async fn subscribe(&self) -> Result<ClubFeed, RepositoryError> {
        let clubs = self.load_all().await?;
        self.feed.publish(clubs);
        Ok(self.feed.subscribe())
    }

    async fn find_by_id(&self, id: &ClubId) -> Result<Option<Club>, RepositoryError> {
        let row = sqlx::query("SELECT id, name, shots FROM golf_clubs WHERE id = ?")
            .bind(id.0)
            .fetch_optional(&self.pool)
            .await?;

        row.map(club_from_row).transpose()
    }

    async fn insert(&self, club: NewClub) -> Result<Club, RepositoryError> {
        let result = sqlx::query("INSERT INTO golf_clubs (name, shots) VALUES (?, ?)")
            .bind(&club.name)
            .bind(encode_shots(&club.shots)?)
            .execute(&self.pool)
            .await?;

        let inserted = Club::from_new(ClubId(result.last_insert_rowid()), club);
        info!(
            event_name = "db.club.inserted",
            club_id = inserted.id.0,
            club_name = %inserted.name,
            "club inserted"
        );

        self.refresh_feed().await;
        Ok(inserted)
    }

    async fn update(&self, club: &Club) -> Result<bool, RepositoryError> {
        let result = sqlx::query("UPDATE golf_clubs SET name = ?, shots = ? WHERE id = ?")
            .bind(&club.name)
            .bind(encode_shots(&club.shots)?)
            .bind(club.id.0)
            .execute(&self.pool)
            .await?;

        let updated = result.rows_affected() > 0;
        info!(
            event_name = "db.club.updated",
            club_id = club.id.0,
            shot_count = club.shots.len(),
            updated,
            "club update applied"
        );

        if updated {
            self.refresh_feed().await;
        }
        Ok(updated)
    }

    async fn delete(&self, id: &ClubId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM golf_clubs WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        info!(event_name = "db.club.deleted", club_id = id.0, deleted, "club delete applied");

        if deleted {
            self.refresh_feed().await;
        }
        Ok(deleted)
    }
}

fn encode_shots(shots: &[f64]) -> Result<String, RepositoryError> {
    ensure_finite_shots(shots)?;
    serde_json::to_string(shots).map_err(|error| RepositoryError::Encode(error.to_string()))
}

fn club_from_row(row: SqliteRow) -> Result<Club, RepositoryError> {
    let id = ClubId(row.try_get("id")?);
    let shots_raw = row.try_get::<String, _>("shots")?;
    let shots = serde_json::from_str::<Vec<f64>>(&shots_raw).map_err(|error| {
        RepositoryError::Decode(format!("club {id} has unreadable shots `{shots_raw}`: {error}"))
    })?;

    Ok(Club { id, name: row.try_get("name")?, shots })
}
