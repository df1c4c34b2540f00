use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use clap::ValueEnum;
use common::config::normalize_path_prefix;
use common::config::parse_timezone;
use common::DEFAULT_DATA_PATH;
use common::DEFAULT_HOST;
use common::DEFAULT_LOCALE;
use common::DEFAULT_LOG_LEVEL;
use common::DEFAULT_MESSAGES_PATH;
use common::DEFAULT_PATH_PREFIX;
use common::DEFAULT_TIMEZONE;
use serde_derive::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing::Level;

use crate::error::Error;
use crate::error::Result;

pub const ENV_PREFIX: &str = "DICTIONARY";

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Server {
    pub host: SocketAddr,
    pub path_prefix: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Data {
    pub path: PathBuf,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Messages {
    pub path: PathBuf,
    pub locale: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Dictionary {
    pub timezone: String,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Log {
    pub level: LogLevel,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub server: Server,
    pub data: Data,
    pub messages: Messages,
    pub dictionary: Dictionary,
    pub log: Log,
}

impl Config {
    /// Builds the config from defaults, the optional file and `DICTIONARY_*` environment
    /// variables (`DICTIONARY_SERVER__HOST=...`), in that order of precedence.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = ::config::Config::builder()
            .set_default("server.host", DEFAULT_HOST)?
            .set_default("server.path_prefix", DEFAULT_PATH_PREFIX)?
            .set_default("data.path", DEFAULT_DATA_PATH)?
            .set_default("messages.path", DEFAULT_MESSAGES_PATH)?
            .set_default("messages.locale", DEFAULT_LOCALE)?
            .set_default("dictionary.timezone", DEFAULT_TIMEZONE)?
            .set_default("log.level", DEFAULT_LOG_LEVEL)?;
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path));
        }
        let config = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

impl TryFrom<Config> for common::config::Config {
    type Error = Error;

    fn try_from(cfg: Config) -> std::result::Result<Self, Self::Error> {
        let path_prefix = normalize_path_prefix(&cfg.server.path_prefix);
        if let Some(prefix) = &path_prefix {
            if prefix.ends_with(common::ENDPOINT_PATH) {
                return Err(Error::InvalidConfig(format!(
                    "path prefix {prefix:?} must not contain the endpoint path"
                )));
            }
        }

        Ok(common::config::Config {
            server: common::config::Server {
                host: cfg.server.host,
                path_prefix,
            },
            data: common::config::Data {
                path: cfg.data.path,
            },
            messages: common::config::Messages {
                path: cfg.messages.path,
                locale: cfg.messages.locale,
            },
            dictionary: common::config::Dictionary {
                timezone: parse_timezone(&cfg.dictionary.timezone).map_err(Error::InvalidConfig)?,
            },
            log: common::config::Log {
                level: cfg.log.level.into(),
            },
        })
    }
}

#[derive(Deserialize, Copy, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum LogLevel {
    #[serde(rename = "trace")]
    Trace,
    #[serde(rename = "debug")]
    Debug,
    #[serde(rename = "info")]
    Info,
    #[serde(rename = "warn")]
    Warn,
    #[serde(rename = "error")]
    Error,
}

impl From<LogLevel> for LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
        .into()
    }
}
