use std::result;

use common::error::CommonError;
use platform::PlatformError;
use thiserror::Error;

pub type Result<T> = result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("BadRequest: {0}")]
    BadRequest(String),
    #[error("InvalidConfig: {0}")]
    InvalidConfig(String),
    #[error("Config: {0:?}")]
    Config(#[from] ::config::ConfigError),
    #[error("StdIO: {0:?}")]
    StdIO(#[from] std::io::Error),
    #[error("Common: {0:?}")]
    Common(#[from] CommonError),
    #[error("Platform: {0:?}")]
    Platform(#[from] PlatformError),
    #[error("SetGlobalDefaultError: {0:?}")]
    SetGlobalDefaultError(tracing::subscriber::SetGlobalDefaultError),
}
