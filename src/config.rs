// config.rs - Bot Configuration
// Reads botconfig.txt (KEY=VALUE lines, # comments) from the first of several
// candidate locations and turns it into a typed BotConfig.
//
// Used by: main.rs (composition root)

use std::collections::HashMap;
use std::fs;
use std::time::Duration;

use thiserror::Error;

use crate::pagination::menu::DEFAULT_IDLE_TIMEOUT_SECS;

pub const CONFIG_PATHS: [&str; 4] = [
    "botconfig.txt",
    "../botconfig.txt",
    "../../botconfig.txt",
    "src/botconfig.txt",
];

const TOKEN_PLACEHOLDER: &str = "YOUR_BOT_TOKEN_HERE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("No botconfig.txt file found in any expected location (., .., ../.., src/)")]
    NotFound,

    #[error("{0} not found in botconfig.txt")]
    Missing(&'static str),

    #[error("DISCORD_TOKEN in botconfig.txt is set to placeholder! Replace with your actual Discord bot token.")]
    PlaceholderToken,

    #[error("{key} has an invalid value: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub prefix: String,
    pub log_level: String,
    pub tesseract_path: String,
    pub mystbin_url: String,
    pub hastebin_url: String,
    pub xkcd_url: String,
    pub dictionary_url: String,
    pub embed_colour: u32,
    pub menu_timeout: Duration,
    pub menu_any_user: bool,
    pub http_timeout: Duration,
}

/// Parse KEY=VALUE content. Blank lines and `#` comments are skipped, a UTF-8 BOM is
/// stripped and later keys override earlier ones.
pub fn parse_config(content: &str) -> HashMap<String, String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, value)) = line.split_once('=') {
            config.insert(key.trim().to_string(), value.trim().to_string());
        }
    }

    config
}

fn parse_colour(value: &str) -> Option<u32> {
    let hex = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .or_else(|| value.strip_prefix('#'))
        .unwrap_or(value);
    u32::from_str_radix(hex, 16).ok().filter(|c| *c <= 0xFF_FF_FF)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Some(true),
        "false" | "no" | "0" | "off" => Some(false),
        _ => None,
    }
}

impl BotConfig {
    pub fn from_map(map: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| -> String {
            map.get(key)
                .filter(|v| !v.is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let token = map
            .get("DISCORD_TOKEN")
            .filter(|t| !t.is_empty())
            .cloned()
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        if token == TOKEN_PLACEHOLDER {
            return Err(ConfigError::PlaceholderToken);
        }

        let colour = get("EMBED_COLOUR", "0x7289DA");
        let embed_colour = parse_colour(&colour).ok_or(ConfigError::Invalid {
            key: "EMBED_COLOUR",
            value: colour,
        })?;

        let secs = |key: &'static str, default: u64| -> Result<Duration, ConfigError> {
            let value = get(key, &default.to_string());
            value
                .parse::<u64>()
                .ok()
                .filter(|s| *s > 0)
                .map(Duration::from_secs)
                .ok_or(ConfigError::Invalid { key, value })
        };

        let any_user = get("MENU_ANY_USER", "false");
        let menu_any_user = parse_bool(&any_user).ok_or(ConfigError::Invalid {
            key: "MENU_ANY_USER",
            value: any_user,
        })?;

        Ok(Self {
            token,
            prefix: get("PREFIX", "^"),
            log_level: get("LOG_LEVEL", "info"),
            tesseract_path: get("TESSERACT_PATH", "tesseract"),
            mystbin_url: get("MYSTBIN_URL", "https://mystb.in"),
            hastebin_url: get("HASTEBIN_URL", "https://hastebin.com"),
            xkcd_url: get("XKCD_URL", "https://xkcd.com"),
            dictionary_url: get("DICTIONARY_URL", "https://api.dictionaryapi.dev/api/v2/entries/en"),
            embed_colour,
            menu_timeout: secs("MENU_TIMEOUT_SECS", DEFAULT_IDLE_TIMEOUT_SECS)?,
            menu_any_user,
            http_timeout: secs("HTTP_TIMEOUT_SECS", 30)?,
        })
    }

    /// Load from the first botconfig.txt found in CONFIG_PATHS. Returns the path it
    /// came from so the caller can log it once logging is up.
    pub fn load() -> Result<(Self, &'static str), ConfigError> {
        Self::load_from(&CONFIG_PATHS)
    }

    pub fn load_from<'a>(paths: &[&'a str]) -> Result<(Self, &'a str), ConfigError> {
        for &path in paths {
            match fs::read_to_string(path) {
                Ok(content) => return Ok((Self::from_map(&parse_config(&content))?, path)),
                Err(_) => continue,
            }
        }
        Err(ConfigError::NotFound)
    }
}
