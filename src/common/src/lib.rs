pub mod config;
pub mod error;
pub mod http;
pub mod messages;

pub const ENDPOINT_PATH: &str = "/api/definitions";
pub const DEFAULT_HOST: &str = "0.0.0.0:8080";
pub const DEFAULT_PATH_PREFIX: &str = "/COMP4537/labs/4";
pub const DEFAULT_DATA_PATH: &str = "./dictionary.json";
pub const DEFAULT_MESSAGES_PATH: &str = "./lang/messages";
pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";
pub const MESSAGES_FILE: &str = "user.json";
