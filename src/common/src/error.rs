use std::path::PathBuf;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, CommonError>;

#[derive(Error, Debug)]
pub enum CommonError {
    #[error("can't read messages file {0:?}: {1}")]
    MessagesFile(PathBuf, std::io::Error),
    #[error("serde: {0:?}")]
    Serde(#[from] serde_json::Error),
}
