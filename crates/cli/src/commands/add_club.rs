use betheclub_core::config::LoadOptions;
use betheclub_core::errors::ApplicationError;
use betheclub_db::ClubRepository;
use serde_json::json;

use super::{with_caddy, ClubSummary, CommandResult};
use crate::caddy::Caddy;

pub fn run(options: &LoadOptions, name: &str) -> CommandResult {
    with_caddy("add-club", options, |caddy| async move { execute(&caddy, name).await })
}

pub async fn execute<R: ClubRepository>(
    caddy: &Caddy<R>,
    name: &str,
) -> Result<CommandResult, ApplicationError> {
    let club = caddy.add_club(name).await?;
    Ok(CommandResult::success_with_data(
        "add-club",
        format!("added {} with id {}", club.name, club.id),
        Some(json!({ "club": ClubSummary::from(&club) })),
    ))
}
