// Application configuration, loaded from environment variables.

use std::path::PathBuf;

use tracing::warn;

use crate::services::populate_service::PopulateOptions;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host the HTTP listener binds to.
    pub host: String,
    /// Port the HTTP listener binds to.
    pub port: u16,
    /// Path of the store file.
    pub db_path: PathBuf,
    /// Data Dragon version to populate from, e.g. `6.5.1`.
    pub game_version: String,
    /// Whether to run a population before serving.
    pub populate_on_startup: bool,
    /// Whether population also fetches each champion's splash art.
    pub fetch_splash: bool,
    /// Provider base URL.
    pub ddragon_url: String,
    /// Provider data locale.
    pub locale: String,
    /// Provider API key, if any.
    pub riot_key: Option<String>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// Environment variables:
    /// - `LOLFACTS_HOST` - listen host (default: `127.0.0.1`)
    /// - `LOLFACTS_PORT` - listen port (default: 8888)
    /// - `LOLFACTS_DB` - store file (default: `champs.db`)
    /// - `GAME_VERSION` - Data Dragon version (default: `6.5.1`)
    /// - `POPULATE_ON_STARTUP` - populate before serving (default: true)
    /// - `FETCH_SPLASH` - fetch splash art while populating (default: true)
    /// - `DDRAGON_URL` - provider base URL
    /// - `DDRAGON_LOCALE` - provider locale (default: `en_US`)
    /// - `RIOTKEY` - provider API key
    pub fn load() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        let port = match var("LOLFACTS_PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                warn!(value = %raw, "LOLFACTS_PORT is not a port number, using 8888");
                8888
            }),
            None => 8888,
        };

        Config {
            host: var("LOLFACTS_HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            db_path: var("LOLFACTS_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("champs.db")),
            game_version: var("GAME_VERSION").unwrap_or_else(|| "6.5.1".to_string()),
            populate_on_startup: Self::parse_flag(
                "POPULATE_ON_STARTUP",
                var("POPULATE_ON_STARTUP"),
                true,
            ),
            fetch_splash: Self::parse_flag("FETCH_SPLASH", var("FETCH_SPLASH"), true),
            ddragon_url: var("DDRAGON_URL")
                .unwrap_or_else(|| "https://ddragon.leagueoflegends.com".to_string()),
            locale: var("DDRAGON_LOCALE").unwrap_or_else(|| "en_US".to_string()),
            riot_key: var("RIOTKEY").filter(|key| !key.is_empty()),
        }
    }

    pub fn populate_options(&self) -> PopulateOptions {
        PopulateOptions {
            version: self.game_version.clone(),
            fetch_splash: self.fetch_splash,
        }
    }

    /// Parse a boolean variable like `true`, `0` or `yes`.
    fn parse_flag(name: &str, value: Option<String>, default: bool) -> bool {
        let Some(value) = value else {
            return default;
        };
        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => true,
            "false" | "0" | "no" => false,
            _ => {
                warn!(variable = name, value = %value, "unrecognized boolean, using default");
                default
            }
        }
    }
}
