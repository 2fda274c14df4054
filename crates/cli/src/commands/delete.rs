use betheclub_core::config::LoadOptions;
use betheclub_core::domain::club::ClubId;
use betheclub_core::errors::ApplicationError;
use betheclub_db::ClubRepository;

use super::{with_caddy, CommandResult};
use crate::caddy::Caddy;

pub fn run(options: &LoadOptions, id: i64) -> CommandResult {
    with_caddy("delete", options, |caddy| async move { execute(&caddy, ClubId(id)).await })
}

pub async fn execute<R: ClubRepository>(
    caddy: &Caddy<R>,
    id: ClubId,
) -> Result<CommandResult, ApplicationError> {
    let club = caddy.remove_club(id).await?;
    Ok(CommandResult::success("delete", format!("deleted {}", club.name)))
}
