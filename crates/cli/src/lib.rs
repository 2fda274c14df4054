pub mod caddy;
pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use betheclub_core::config::{AppConfig, ConfigOverrides, LoadOptions, LogFormat};
use betheclub_core::suggestions::EmptyHistoryPolicy;

#[derive(Debug, Parser)]
#[command(
    name = "betheclub",
    about = "Track shot distances per club and get a club suggestion for a target distance",
    long_about = "Record how far you hit each club, then ask which club fits a target distance. \
                  A club is suggested when its average distance is within the configured \
                  tolerance (10 by default) of the target.",
    after_help = "Examples:\n  betheclub add-club \"7 Iron\"\n  betheclub add-shot 1 152\n  betheclub clubs\n  betheclub suggest 150"
)]
pub struct Cli {
    #[command(flatten)]
    global: GlobalArgs,
    #[command(subcommand)]
    command: Command,
}

/// Flags that override every other config source for a single invocation.
#[derive(Debug, Args)]
struct GlobalArgs {
    #[arg(long, global = true, value_name = "PATH", help = "Read configuration from this file")]
    config: Option<PathBuf>,
    #[arg(long, global = true, value_name = "URL", help = "SQLite database URL")]
    database_url: Option<String>,
    #[arg(long, global = true, help = "Maximum distance between a club average and the target")]
    tolerance: Option<u64>,
    #[arg(long, global = true, value_name = "zero|skip", help = "How clubs without shots compete")]
    empty_history: Option<EmptyHistoryPolicy>,
    #[arg(long, global = true, value_name = "LEVEL", help = "Log level written to stderr")]
    log_level: Option<String>,
}

impl GlobalArgs {
    /// An explicit `--config` path must exist; the default lookup stays optional.
    fn load_options(self) -> LoadOptions {
        LoadOptions {
            require_file: self.config.is_some(),
            config_path: self.config,
            overrides: ConfigOverrides {
                database_url: self.database_url,
                log_level: self.log_level,
                tolerance: self.tolerance,
                empty_history: self.empty_history,
            },
        }
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List clubs with their average distance")]
    Clubs,
    #[command(about = "Add a club with an empty shot history")]
    AddClub { name: String },
    #[command(about = "Show one club and every recorded shot")]
    Show { id: i64 },
    #[command(about = "Record a shot distance for a club")]
    AddShot {
        id: i64,
        #[arg(allow_hyphen_values = true)]
        distance: String,
    },
    #[command(about = "Delete a club and its shot history")]
    Delete { id: i64 },
    #[command(about = "Suggest the club whose average distance best fits the target")]
    Suggest {
        #[arg(allow_hyphen_values = true)]
        distance: String,
    },
    #[command(about = "Apply pending database migrations")]
    Migrate,
    #[command(about = "Inspect effective configuration values with source attribution")]
    Config,
}

fn init_logging(options: &LoadOptions) {
    use tracing::Level;

    let config = AppConfig::load(options.clone()).unwrap_or_default();
    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::WARN);
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_max_level(log_level);

    match config.logging.format {
        LogFormat::Compact => builder.compact().init(),
        LogFormat::Pretty => builder.pretty().init(),
        LogFormat::Json => builder.json().init(),
    }
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    let options = cli.global.load_options();
    init_logging(&options);

    let result = match cli.command {
        Command::Clubs => commands::clubs::run(&options),
        Command::AddClub { name } => commands::add_club::run(&options, &name),
        Command::Show { id } => commands::show::run(&options, id),
        Command::AddShot { id, distance } => commands::add_shot::run(&options, id, &distance),
        Command::Delete { id } => commands::delete::run(&options, id),
        Command::Suggest { distance } => commands::suggest::run(&options, &distance),
        Command::Migrate => commands::migrate::run(&options),
        Command::Config => commands::config::run(&options),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;

    use betheclub_core::suggestions::EmptyHistoryPolicy;

    use super::Cli;

    #[test]
    fn global_flags_become_config_overrides() {
        let cli = Cli::try_parse_from([
            "betheclub",
            "suggest",
            "150",
            "--tolerance",
            "25",
            "--empty-history",
            "skip",
            "--database-url",
            "sqlite://bag.db",
        ])
        .expect("parse");
        let options = cli.global.load_options();

        assert_eq!(options.overrides.tolerance, Some(25));
        assert_eq!(options.overrides.empty_history, Some(EmptyHistoryPolicy::Skip));
        assert_eq!(options.overrides.database_url.as_deref(), Some("sqlite://bag.db"));
        assert!(!options.require_file);
    }

    #[test]
    fn explicit_config_path_is_required() {
        let cli = Cli::try_parse_from(["betheclub", "--config", "bag.toml", "clubs"])
            .expect("parse");
        let options = cli.global.load_options();

        assert_eq!(options.config_path, Some(PathBuf::from("bag.toml")));
        assert!(options.require_file);
    }

    #[test]
    fn unknown_empty_history_policy_is_rejected() {
        assert!(Cli::try_parse_from(["betheclub", "--empty-history", "maybe", "clubs"]).is_err());
    }
}
