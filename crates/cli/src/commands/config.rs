use std::env;
use std::fs;
use std::path::Path;

use betheclub_core::config::{resolve_config_path, ConfigOverrides, LoadOptions};
use serde_json::json;
use toml::Value;

use super::{load_config, CommandResult};

pub fn run(options: &LoadOptions) -> CommandResult {
    let config = match load_config("config", options) {
        Ok(config) => config,
        Err(failure) => return failure,
    };

    let config_file_path = resolve_config_path(options.config_path.as_deref());
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_key: &str| {
        if let Some(flag) = override_flag(&options.overrides, key_path) {
            return format!("flag ({flag})");
        }
        field_source(key_path, env_key, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let entries = [
        ("database.url", config.database.url.clone(), "BETHECLUB_DATABASE_URL"),
        (
            "database.max_connections",
            config.database.max_connections.to_string(),
            "BETHECLUB_DATABASE_MAX_CONNECTIONS",
        ),
        (
            "database.timeout_secs",
            config.database.timeout_secs.to_string(),
            "BETHECLUB_DATABASE_TIMEOUT_SECS",
        ),
        (
            "suggestion.tolerance",
            config.suggestion.tolerance.to_string(),
            "BETHECLUB_SUGGESTION_TOLERANCE",
        ),
        (
            "suggestion.empty_history",
            format!("{:?}", config.suggestion.empty_history),
            "BETHECLUB_SUGGESTION_EMPTY_HISTORY",
        ),
        ("logging.level", config.logging.level.clone(), "BETHECLUB_LOGGING_LEVEL"),
        ("logging.format", format!("{:?}", config.logging.format), "BETHECLUB_LOGGING_FORMAT"),
    ];

    let sourced: Vec<(&str, &str, String)> = entries
        .iter()
        .map(|&(key, ref value, env_key)| (key, value.as_str(), source(key, env_key)))
        .collect();

    let mut lines =
        vec!["effective config (source precedence: flag > env > file > default):".to_string()];
    lines.extend(sourced.iter().map(|(key, value, source)| render_line(key, value, source)));

    let data = json!({
        "entries": sourced
            .iter()
            .map(|(key, value, source)| json!({ "key": key, "value": value, "source": source }))
            .collect::<Vec<_>>(),
    });
    CommandResult::success_with_data("config", lines.join("\n"), Some(data))
}

fn override_flag(overrides: &ConfigOverrides, key_path: &str) -> Option<&'static str> {
    let (set, flag) = match key_path {
        "database.url" => (overrides.database_url.is_some(), "--database-url"),
        "suggestion.tolerance" => (overrides.tolerance.is_some(), "--tolerance"),
        "suggestion.empty_history" => (overrides.empty_history.is_some(), "--empty-history"),
        "logging.level" => (overrides.log_level.is_some(), "--log-level"),
        _ => return None,
    };
    set.then_some(flag)
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_key: &str,
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    if env::var_os(env_key).is_some() {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: &str) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use betheclub_core::config::ConfigOverrides;
    use toml::Value;

    use super::{contains_path, field_source, override_flag, render_line};

    #[test]
    fn nested_keys_are_found_in_file_doc() {
        let doc: Value = "[suggestion]\ntolerance = 12\n".parse().expect("toml");

        assert!(contains_path(&doc, "suggestion.tolerance"));
        assert!(!contains_path(&doc, "suggestion.empty_history"));
        assert!(!contains_path(&doc, "logging.level"));
    }

    #[test]
    fn missing_everywhere_means_default() {
        let source = field_source("logging.format", "BETHECLUB_TEST_UNSET_VAR", None, None);
        assert_eq!(source, "default");
    }

    #[test]
    fn lines_name_their_source() {
        let line = render_line("suggestion.tolerance", "10", "default");
        assert_eq!(line, "- suggestion.tolerance = 10 (source: default)");
    }

    #[test]
    fn only_set_overrides_claim_a_flag() {
        let overrides = ConfigOverrides { tolerance: Some(25), ..ConfigOverrides::default() };

        assert_eq!(override_flag(&overrides, "suggestion.tolerance"), Some("--tolerance"));
        assert_eq!(override_flag(&overrides, "database.url"), None);
        assert_eq!(override_flag(&overrides, "database.max_connections"), None);
    }
}
