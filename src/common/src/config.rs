use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use chrono_tz::Tz;
use tracing::level_filters::LevelFilter;

use crate::DEFAULT_DATA_PATH;
use crate::DEFAULT_HOST;
use crate::DEFAULT_LOCALE;
use crate::DEFAULT_LOG_LEVEL;
use crate::DEFAULT_MESSAGES_PATH;
use crate::DEFAULT_PATH_PREFIX;
use crate::DEFAULT_TIMEZONE;

#[derive(Debug, Clone)]
pub struct Server {
    pub host: SocketAddr,
    /// Deployment prefix the endpoint is additionally mounted under, e.g. `/COMP4537/labs/4`.
    pub path_prefix: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Data {
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct Messages {
    pub path: PathBuf,
    pub locale: String,
}

#[derive(Debug, Clone)]
pub struct Dictionary {
    pub timezone: Tz,
}

#[derive(Debug, Clone)]
pub struct Log {
    pub level: LevelFilter,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server: Server,
    pub data: Data,
    pub messages: Messages,
    pub dictionary: Dictionary,
    pub log: Log,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: Server {
                host: SocketAddr::from_str(DEFAULT_HOST)
                    .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 8080))),
                path_prefix: Some(DEFAULT_PATH_PREFIX.to_string()),
            },
            data: Data {
                path: PathBuf::from(DEFAULT_DATA_PATH),
            },
            messages: Messages {
                path: PathBuf::from(DEFAULT_MESSAGES_PATH),
                locale: DEFAULT_LOCALE.to_string(),
            },
            dictionary: Dictionary {
                timezone: parse_timezone(DEFAULT_TIMEZONE).unwrap_or(chrono_tz::America::Los_Angeles),
            },
            log: Log {
                level: LevelFilter::from_str(DEFAULT_LOG_LEVEL).unwrap_or(LevelFilter::INFO),
            },
        }
    }
}

/// Normalizes a configured deployment prefix. Empty (or `/`) disables the prefixed mount.
pub fn normalize_path_prefix(prefix: &str) -> Option<String> {
    let trimmed = prefix.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with('/') {
        Some(trimmed.to_string())
    } else {
        Some(format!("/{trimmed}"))
    }
}

pub fn parse_timezone(name: &str) -> std::result::Result<Tz, String> {
    Tz::from_str(name).map_err(|err| format!("invalid timezone {name:?}: {err}"))
}
