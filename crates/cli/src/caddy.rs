//! The host flow around the club repository and the suggestion engine.
//!
//! Raw user input is validated here before anything reaches storage or the
//! engine. Persistence calls are awaited; the engine runs synchronously on
//! the snapshot they return.

use tracing::{debug, info, warn};

use betheclub_core::domain::club::{Club, ClubId, NewClub};
use betheclub_core::errors::{ApplicationError, DomainError};
use betheclub_core::input::{parse_shot_distance, parse_target_distance, validate_club_name};
use betheclub_core::suggestions::SuggestionEngine;
use betheclub_db::{ClubRepository, RepositoryError};

#[derive(Clone, Debug, PartialEq)]
pub enum SuggestionOutcome {
    Suggested { target_distance: i64, club: Club, average_distance: i64, difference: u64 },
    NoMatch { target_distance: i64 },
}

impl SuggestionOutcome {
    pub fn message(&self) -> String {
        match self {
            Self::Suggested { club, .. } => {
                format!("Based on your input, I suggest using the {} club.", club.name)
            }
            Self::NoMatch { .. } => "No suitable club found for that distance.".to_string(),
        }
    }

    pub fn club(&self) -> Option<&Club> {
        match self {
            Self::Suggested { club, .. } => Some(club),
            Self::NoMatch { .. } => None,
        }
    }
}

pub struct Caddy<R> {
    repository: R,
    engine: SuggestionEngine,
}

impl<R: ClubRepository> Caddy<R> {
    pub fn new(repository: R, engine: SuggestionEngine) -> Self {
        Self { repository, engine }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub async fn add_club(&self, raw_name: &str) -> Result<Club, ApplicationError> {
        let name = validate_club_name(raw_name)?;
        let club = self.repository.insert(NewClub::named(name)).await.map_err(persistence)?;
        info!(event_name = "caddy.club.added", club_id = club.id.0, "club added");
        Ok(club)
    }

    pub async fn clubs(&self) -> Result<Vec<Club>, ApplicationError> {
        self.repository.list_all().await.map_err(persistence)
    }

    pub async fn club(&self, id: ClubId) -> Result<Club, ApplicationError> {
        self.repository
            .find_by_id(&id)
            .await
            .map_err(persistence)?
            .ok_or_else(|| DomainError::ClubNotFound(id).into())
    }

    pub async fn record_shot(&self, id: ClubId, raw_distance: &str) -> Result<Club, ApplicationError> {
        let distance = parse_shot_distance(raw_distance)?;
        let mut club = self.club(id).await?;
        club.record_shot(distance);

        if !self.repository.update(&club).await.map_err(persistence)? {
            warn!(event_name = "caddy.shot.lost", club_id = id.0, "club vanished before update");
            return Err(DomainError::ClubNotFound(id).into());
        }

        info!(
            event_name = "caddy.shot.recorded",
            club_id = id.0,
            distance,
            shot_count = club.shots.len(),
            "shot recorded"
        );
        Ok(club)
    }

    pub async fn remove_club(&self, id: ClubId) -> Result<Club, ApplicationError> {
        let club = self.club(id).await?;
        if !self.repository.delete(&id).await.map_err(persistence)? {
            return Err(DomainError::ClubNotFound(id).into());
        }
        info!(event_name = "caddy.club.removed", club_id = id.0, "club removed");
        Ok(club)
    }

    pub async fn suggest(&self, raw_target: &str) -> Result<SuggestionOutcome, ApplicationError> {
        let target_distance = parse_target_distance(raw_target)?;
        let clubs = self.clubs().await?;

        let outcome = match self.engine.evaluate(target_distance, &clubs) {
            Some(suggestion) => SuggestionOutcome::Suggested {
                target_distance,
                club: suggestion.club.clone(),
                average_distance: suggestion.average_distance,
                difference: suggestion.difference,
            },
            None => SuggestionOutcome::NoMatch { target_distance },
        };

        debug!(
            event_name = "caddy.suggestion.evaluated",
            target_distance,
            candidates = clubs.len(),
            club_id = outcome.club().map(|club| club.id.0),
            "suggestion evaluated"
        );
        Ok(outcome)
    }
}

fn persistence(error: RepositoryError) -> ApplicationError {
    ApplicationError::Persistence(error.to_string())
}

#[cfg(test)]
mod tests {
    use betheclub_core::domain::club::{ClubId, NewClub};
    use betheclub_core::errors::{ApplicationError, DomainError};
    use betheclub_core::suggestions::{EmptyHistoryPolicy, SuggestionEngine};
    use betheclub_db::{ClubRepository, InMemoryClubRepository};

    use super::{Caddy, SuggestionOutcome};

    fn caddy() -> Caddy<InMemoryClubRepository> {
        Caddy::new(InMemoryClubRepository::default(), SuggestionEngine::default())
    }

    async fn seed_bag(caddy: &Caddy<InMemoryClubRepository>) {
        for (name, shots) in [
            ("Club 1", vec![100.0, 105.0, 95.0]),
            ("Club 2", vec![150.0, 155.0, 145.0]),
            ("Club 3", vec![200.0, 205.0, 195.0]),
        ] {
            caddy
                .repository()
                .insert(NewClub { name: name.to_string(), shots })
                .await
                .expect("seed club");
        }
    }

    #[tokio::test]
    async fn add_club_trims_and_persists() {
        let caddy = caddy();
        let club = caddy.add_club("  Lob Wedge ").await.expect("add club");

        assert_eq!(club.name, "Lob Wedge");
        assert!(club.shots.is_empty());
        assert_eq!(caddy.clubs().await.expect("clubs"), vec![club]);
    }

    #[tokio::test]
    async fn add_club_rejects_blank_names_without_writing() {
        let caddy = caddy();
        let error = caddy.add_club("   ").await.expect_err("blank name");

        assert_eq!(error, ApplicationError::Domain(DomainError::EmptyClubName));
        assert!(caddy.clubs().await.expect("clubs").is_empty());
    }

    #[tokio::test]
    async fn record_shot_appends_to_history() {
        let caddy = caddy();
        let club = caddy.add_club("Driver").await.expect("add club");

        caddy.record_shot(club.id, "240").await.expect("first shot");
        let updated = caddy.record_shot(club.id, "251.5").await.expect("second shot");

        assert_eq!(updated.shots, vec![240.0, 251.5]);
        assert_eq!(caddy.club(club.id).await.expect("club").shots, vec![240.0, 251.5]);
    }

    #[tokio::test]
    async fn record_shot_validates_before_lookup() {
        let caddy = caddy();
        let error = caddy.record_shot(ClubId(1), "far").await.expect_err("invalid shot");

        assert!(matches!(
            error,
            ApplicationError::Domain(DomainError::InvalidShotDistance { .. })
        ));
    }

    #[tokio::test]
    async fn missing_club_is_reported_not_fatal() {
        let caddy = caddy();

        let lookup = caddy.club(ClubId(7)).await.expect_err("missing club");
        assert_eq!(lookup.user_message(), "Club not found");

        let shot = caddy.record_shot(ClubId(7), "100").await.expect_err("missing club");
        assert_eq!(shot, ApplicationError::Domain(DomainError::ClubNotFound(ClubId(7))));

        let removal = caddy.remove_club(ClubId(7)).await.expect_err("missing club");
        assert_eq!(removal.error_class(), "not_found");
    }

    #[tokio::test]
    async fn remove_club_returns_removed_record() {
        let caddy = caddy();
        let club = caddy.add_club("Putter").await.expect("add club");

        let removed = caddy.remove_club(club.id).await.expect("remove");
        assert_eq!(removed, club);
        assert!(caddy.clubs().await.expect("clubs").is_empty());
    }

    #[tokio::test]
    async fn suggest_uses_the_current_collection() {
        let caddy = caddy();
        seed_bag(&caddy).await;

        let outcome = caddy.suggest("152").await.expect("suggest");
        match &outcome {
            SuggestionOutcome::Suggested { club, average_distance, difference, .. } => {
                assert_eq!(club.name, "Club 2");
                assert_eq!(*average_distance, 150);
                assert_eq!(*difference, 2);
            }
            other => panic!("expected a suggestion, got {other:?}"),
        }
        assert_eq!(outcome.message(), "Based on your input, I suggest using the Club 2 club.");
    }

    #[tokio::test]
    async fn suggest_reports_no_match_as_a_result() {
        let caddy = caddy();
        seed_bag(&caddy).await;

        let outcome = caddy.suggest("120").await.expect("suggest");
        assert_eq!(outcome, SuggestionOutcome::NoMatch { target_distance: 120 });
        assert_eq!(outcome.message(), "No suitable club found for that distance.");
    }

    #[tokio::test]
    async fn suggest_rejects_non_numeric_targets() {
        let caddy = caddy();
        seed_bag(&caddy).await;

        let error = caddy.suggest("one fifty").await.expect_err("invalid target");
        assert_eq!(error.user_message(), "Please enter a valid number.");
    }

    #[tokio::test]
    async fn fresh_club_matches_low_targets_unless_skipped() {
        let caddy = caddy();
        caddy.add_club("New Club").await.expect("add club");
        assert!(caddy.suggest("5").await.expect("suggest").club().is_some());

        let skipping = Caddy::new(
            InMemoryClubRepository::default(),
            SuggestionEngine::new(10, EmptyHistoryPolicy::Skip),
        );
        skipping.add_club("New Club").await.expect("add club");
        assert_eq!(
            skipping.suggest("5").await.expect("suggest"),
            SuggestionOutcome::NoMatch { target_distance: 5 }
        );
    }
}
