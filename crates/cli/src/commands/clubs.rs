use betheclub_core::config::LoadOptions;
use betheclub_core::errors::ApplicationError;
use betheclub_db::ClubRepository;
use serde_json::json;

use super::{with_caddy, ClubSummary, CommandResult};
use crate::caddy::Caddy;

pub fn run(options: &LoadOptions) -> CommandResult {
    with_caddy("clubs", options, |caddy| async move { execute(&caddy).await })
}

pub async fn execute<R: ClubRepository>(
    caddy: &Caddy<R>,
) -> Result<CommandResult, ApplicationError> {
    let clubs = caddy.clubs().await?;
    let lines: Vec<String> = clubs
        .iter()
        .map(|club| format!("{}: {} (Avg Distance: {})", club.id, club.name, club.average_label()))
        .collect();

    let message = if lines.is_empty() {
        "no clubs yet".to_string()
    } else {
        lines.join("\n")
    };
    let summaries: Vec<ClubSummary> = clubs.iter().map(ClubSummary::from).collect();

    Ok(CommandResult::success_with_data("clubs", message, Some(json!({ "clubs": summaries }))))
}
