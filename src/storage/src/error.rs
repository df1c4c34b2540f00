use std::path::PathBuf;
use std::result;

use thiserror::Error;

pub type Result<T> = result::Result<T, StorageError>;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("malformed dictionary file {0:?}: {1}")]
    Malformed(PathBuf, serde_json::Error),
    #[error("io {0:?}")]
    Io(#[from] std::io::Error),
    #[error("serde {0:?}")]
    Serde(#[from] serde_json::Error),
    #[error("persist {0:?}")]
    Persist(#[from] tempfile::PersistError),
}
