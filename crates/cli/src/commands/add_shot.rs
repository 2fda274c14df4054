use betheclub_core::config::LoadOptions;
use betheclub_core::domain::club::ClubId;
use betheclub_core::errors::ApplicationError;
use betheclub_db::ClubRepository;
use serde_json::json;

use super::{with_caddy, ClubSummary, CommandResult};
use crate::caddy::Caddy;

pub fn run(options: &LoadOptions, id: i64, distance: &str) -> CommandResult {
    with_caddy("add-shot", options, |caddy| async move {
        execute(&caddy, ClubId(id), distance).await
    })
}

pub async fn execute<R: ClubRepository>(
    caddy: &Caddy<R>,
    id: ClubId,
    distance: &str,
) -> Result<CommandResult, ApplicationError> {
    let club = caddy.record_shot(id, distance).await?;
    Ok(CommandResult::success_with_data(
        "add-shot",
        format!("recorded shot for {} (Avg Distance: {})", club.name, club.average_label()),
        Some(json!({ "club": ClubSummary::from(&club), "shots": club.shots })),
    ))
}
