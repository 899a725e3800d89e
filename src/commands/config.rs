//! Configuration commands for managing triage settings.
//!
//! - `config set`: Set a configuration value
//! - `config show`: Display current configuration
//! - `config get`: Print a single configuration value

use owo_colors::OwoColorize;
use serde_json::json;

use crate::config::Config;
use crate::error::{Result, TriageError};

const VALID_KEYS: &str = "api.url, request.timeout";

/// Validate a config key and convert underscore notation to a dot notation suggestion
fn validate_config_key(key: &str) -> Result<&str> {
    // Catch underscore notation early so the error can suggest the dot form
    // (e.g. api_url -> api.url)
    if let Some(pos) = key.find('_') {
        let dot_version = format!("{}.{}", &key[..pos], &key[pos + 1..]);
        return Err(TriageError::Config(format!(
            "invalid config key '{key}'. Use dot notation: '{dot_version}'"
        )));
    }
    Ok(key)
}

/// Show current configuration
pub fn cmd_config_show(output_json: bool) -> Result<()> {
    let config = Config::load()?;
    let config_file = Config::config_path()?;

    if output_json {
        let json_output = json!({
            "api": { "url": config.api_url },
            "request": { "timeout": config.request_timeout },
            "config_file": config_file.to_string_lossy(),
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
        return Ok(());
    }

    println!("{}\n", "Configuration:".cyan().bold());
    println!("{}: {}", "api.url".cyan(), config.api_url);
    println!("{}: {}", "request.timeout".cyan(), config.request_timeout);
    println!();
    println!(
        "{}",
        format!("Config file: {}", config_file.display()).dimmed()
    );

    Ok(())
}

/// Set a configuration value
pub fn cmd_config_set(key: &str, value: &str, output_json: bool) -> Result<()> {
    validate_config_key(key)?;

    let mut config = Config::load()?;

    match key {
        "api.url" => {
            url::Url::parse(value).map_err(|e| {
                TriageError::Config(format!("invalid value '{value}' for api.url: {e}"))
            })?;
            config.set_api_url(value.to_string());
        }
        "request.timeout" => {
            let seconds = value.parse::<u64>().map_err(|_| {
                TriageError::Config(format!(
                    "invalid value '{value}' for request.timeout. Expected a number of seconds"
                ))
            })?;
            config.set_request_timeout(seconds);
        }
        _ => {
            return Err(TriageError::Config(format!(
                "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
            )));
        }
    }

    config.save()?;

    if output_json {
        let json_output = json!({
            "action": "config_set",
            "key": key,
            "value": value,
            "success": true,
        });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else {
        println!("Set {} to {}", key.cyan(), value);
    }

    Ok(())
}

/// Get a specific configuration value
pub fn cmd_config_get(key: &str, output_json: bool) -> Result<()> {
    validate_config_key(key)?;

    let config = Config::load()?;

    let value = match key {
        "api.url" => config.api_url.clone(),
        "request.timeout" => config.request_timeout.to_string(),
        _ => {
            return Err(TriageError::Config(format!(
                "unknown config key '{key}'. Valid keys: {VALID_KEYS}"
            )));
        }
    };

    if output_json {
        let json_output = json!({ "key": key, "value": value });
        println!("{}", serde_json::to_string_pretty(&json_output)?);
    } else {
        println!("{value}");
    }

    Ok(())
}
