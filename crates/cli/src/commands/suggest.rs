use betheclub_core::config::LoadOptions;
use betheclub_core::errors::ApplicationError;
use betheclub_db::ClubRepository;
use serde_json::json;

use super::{with_caddy, ClubSummary, CommandResult};
use crate::caddy::{Caddy, SuggestionOutcome};

pub fn run(options: &LoadOptions, distance: &str) -> CommandResult {
    with_caddy("suggest", options, |caddy| async move { execute(&caddy, distance).await })
}

pub async fn execute<R: ClubRepository>(
    caddy: &Caddy<R>,
    distance: &str,
) -> Result<CommandResult, ApplicationError> {
    let outcome = caddy.suggest(distance).await?;
    let data = match &outcome {
        SuggestionOutcome::Suggested { target_distance, club, average_distance, difference } => {
            json!({
                "target_distance": target_distance,
                "club": ClubSummary::from(club),
                "average_distance": average_distance,
                "difference": difference,
            })
        }
        SuggestionOutcome::NoMatch { target_distance } => {
            json!({ "target_distance": target_distance, "club": null })
        }
    };

    Ok(CommandResult::success_with_data("suggest", outcome.message(), Some(data)))
}
