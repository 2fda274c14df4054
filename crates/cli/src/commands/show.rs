use betheclub_core::config::LoadOptions;
use betheclub_core::domain::club::ClubId;
use betheclub_core::errors::ApplicationError;
use betheclub_db::ClubRepository;
use serde_json::json;

use super::{with_caddy, ClubSummary, CommandResult};
use crate::caddy::Caddy;

pub fn run(options: &LoadOptions, id: i64) -> CommandResult {
    with_caddy("show", options, |caddy| async move { execute(&caddy, ClubId(id)).await })
}

pub async fn execute<R: ClubRepository>(
    caddy: &Caddy<R>,
    id: ClubId,
) -> Result<CommandResult, ApplicationError> {
    let club = caddy.club(id).await?;
    let mut lines = vec![format!("{} (Avg Distance: {})", club.name, club.average_label())];
    lines.extend(club.shots.iter().map(|shot| format!("  {shot}")));

    Ok(CommandResult::success_with_data(
        "show",
        lines.join("\n"),
        Some(json!({ "club": ClubSummary::from(&club), "shots": club.shots })),
    ))
}
