pub mod add_club;
pub mod add_shot;
pub mod clubs;
pub mod config;
pub mod delete;
pub mod migrate;
pub mod show;
pub mod suggest;

use std::future::Future;

use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use betheclub_core::config::{AppConfig, LoadOptions};
use betheclub_core::domain::club::Club;
use betheclub_core::errors::ApplicationError;
use betheclub_db::{connect_with_settings, migrations, SqlClubRepository};

use crate::caddy::Caddy;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
}

/// List-screen view of a club.
#[derive(Debug, Serialize)]
pub struct ClubSummary {
    pub id: i64,
    pub name: String,
    pub average: String,
    pub shot_count: usize,
}

impl From<&Club> for ClubSummary {
    fn from(club: &Club) -> Self {
        Self {
            id: club.id.0,
            name: club.name.clone(),
            average: club.average_label(),
            shot_count: club.shots.len(),
        }
    }
}

impl CommandResult {
    pub fn success(command: &str, message: impl Into<String>) -> Self {
        Self::success_with_data(command, message, None)
    }

    pub fn success_with_data(
        command: &str,
        message: impl Into<String>,
        data: Option<Value>,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "ok".to_string(),
            error_class: None,
            message: message.into(),
            data,
        };
        Self { exit_code: 0, output: serialize_payload(payload) }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
            data: None,
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    /// Maps an application failure to its user-facing message and exit code.
    pub fn from_error(command: &str, error: &ApplicationError) -> Self {
        let exit_code = match error {
            ApplicationError::Domain(_) => 6,
            ApplicationError::Persistence(_) => 7,
            ApplicationError::Configuration(_) => 2,
        };
        warn!(event_name = "cli.command.failed", command, error = %error, "command failed");
        Self::failure(command, error.error_class(), error.user_message(), exit_code)
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

pub(crate) fn load_config(
    command: &str,
    options: &LoadOptions,
) -> Result<AppConfig, CommandResult> {
    AppConfig::load(options.clone()).map_err(|error| {
        CommandResult::failure(
            command,
            "config_validation",
            format!("configuration issue: {error}"),
            2,
        )
    })
}

/// Loads config, opens the migrated club store and hands a [`Caddy`] to
/// `operation` on a single-threaded runtime.
pub(crate) fn with_caddy<F, Fut>(
    command: &str,
    options: &LoadOptions,
    operation: F,
) -> CommandResult
where
    F: FnOnce(Caddy<SqlClubRepository>) -> Fut,
    Fut: Future<Output = Result<CommandResult, ApplicationError>>,
{
    let config = match load_config(command, options) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                command,
                "runtime_init",
                format!("failed to initialize async runtime: {error}"),
                3,
            );
        }
    };

    runtime.block_on(async {
        let pool = match connect_with_settings(
            &config.database.url,
            config.database.max_connections,
            config.database.timeout_secs,
        )
        .await
        {
            Ok(pool) => pool,
            Err(error) => {
                return CommandResult::failure(command, "db_connectivity", error.to_string(), 4);
            }
        };

        if let Err(error) = migrations::run_pending(&pool).await {
            pool.close().await;
            return CommandResult::failure(command, "migration", error.to_string(), 5);
        }

        let caddy =
            Caddy::new(SqlClubRepository::new(pool.clone()), config.suggestion.engine());
        let result = operation(caddy).await;
        pool.close().await;

        result.unwrap_or_else(|error| CommandResult::from_error(command, &error))
    })
}
