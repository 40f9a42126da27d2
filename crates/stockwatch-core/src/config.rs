use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Split a comma-delimited URL list, trimming whitespace and dropping empty entries.
#[must_use]
pub fn split_target_urls(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Interpret a boolean flag the way the scheduler passes it: `true` in any
/// letter case enables it, everything else disables it.
fn parse_flag(raw: &str) -> bool {
    raw.trim().eq_ignore_ascii_case("true")
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the real environment so it can be tested with a `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let target_urls = split_target_urls(&require("TARGET_URL")?);
    if target_urls.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "TARGET_URL".to_string(),
            reason: "no URLs after splitting on ','".to_string(),
        });
    }

    let bot_token = require("BOT_TOKEN")?;
    let chat_id = require("CHAT_ID")?;
    let cookie = or_default("COOKIE", "");
    let mode = or_default("MODE", "realtime");
    let only_on_change = parse_flag(&or_default("ONLY_ON_CHANGE", "false"));

    let state_path = PathBuf::from(or_default("STOCKWATCH_STATE_PATH", "last_stock.json"));
    let categories_path = PathBuf::from(or_default(
        "STOCKWATCH_CATEGORIES_PATH",
        "./config/categories.yaml",
    ));
    let log_level = or_default("STOCKWATCH_LOG_LEVEL", "info");

    let fetch_timeout_secs = parse_u64("STOCKWATCH_FETCH_TIMEOUT_SECS", "20")?;
    let notify_timeout_secs = parse_u64("STOCKWATCH_NOTIFY_TIMEOUT_SECS", "10")?;
    let user_agent = or_default("STOCKWATCH_USER_AGENT", "Mozilla/5.0");
    let stock_unit = or_default("STOCKWATCH_STOCK_UNIT", "台");
    let telegram_api_base = or_default("TELEGRAM_API_BASE", "https://api.telegram.org");

    Ok(AppConfig {
        target_urls,
        cookie,
        bot_token,
        chat_id,
        mode,
        only_on_change,
        state_path,
        categories_path,
        log_level,
        fetch_timeout_secs,
        notify_timeout_secs,
        user_agent,
        stock_unit,
        telegram_api_base,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
