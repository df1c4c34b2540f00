use std::fs;
use std::fs::OpenOptions;
use std::io;
use std::io::BufWriter;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;
use tempfile::NamedTempFile;
use tracing::debug;
use tracing::info;

use crate::error::Result;
use crate::error::StorageError;

const EMPTY_LIST: &[u8] = b"[]";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub definition: String,
}

impl Entry {
    pub fn new(word: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            definition: definition.into(),
        }
    }
}

pub trait Provider: Sync + Send {
    fn load(&self) -> Result<Vec<Entry>>;
    fn save(&self, entries: &[Entry]) -> Result<()>;
}

/// Dictionary persisted as a single pretty-printed JSON array.
pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Provider for JsonFile {
    fn load(&self) -> Result<Vec<Entry>> {
        load(&self.path)
    }

    fn save(&self, entries: &[Entry]) -> Result<()> {
        save(&self.path, entries)
    }
}

/// Reads the dictionary file. A missing file is created holding an empty list.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let path = path.as_ref();
    match fs::read(path) {
        Ok(data) => parse(path, &data),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            if create_empty(path)? {
                info!("created empty dictionary file {:?}", path);
                Ok(vec![])
            } else {
                // created concurrently by someone else
                parse(path, &fs::read(path)?)
            }
        }
        Err(err) => Err(err.into()),
    }
}

/// Replaces the dictionary file with `entries`.
///
/// The data goes to a temporary file in the same directory which is synced and then renamed over
/// the target, so readers observe either the old or the new list, never a partial write.
pub fn save(path: impl AsRef<Path>, entries: &[Entry]) -> Result<()> {
    let path = path.as_ref();
    let mut tmp = NamedTempFile::new_in(parent_dir(path))?;
    {
        let mut w = BufWriter::new(tmp.as_file_mut());
        serde_json::to_writer_pretty(&mut w, entries)?;
        w.flush()?;
    }
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    debug!("saved {} entries to {:?}", entries.len(), path);

    Ok(())
}

fn parse(path: &Path, data: &[u8]) -> Result<Vec<Entry>> {
    serde_json::from_slice(data).map_err(|err| StorageError::Malformed(path.to_path_buf(), err))
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    }
}

fn create_empty(path: &Path) -> Result<bool> {
    fs::create_dir_all(parent_dir(path))?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => return Ok(false),
        Err(err) => return Err(err.into()),
    };
    file.write_all(EMPTY_LIST)?;
    file.sync_all()?;

    Ok(true)
}
