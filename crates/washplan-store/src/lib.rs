//! Durable collection store
//!
//! One JSON file per collection, holding an ordered array of flat
//! key-value records. Reads load the whole collection; writes replace the
//! whole file. Serializing concurrent writers is the caller's job.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use washplan_types::{Error, Result};

/// Whole-collection persistence for an ordered sequence of records.
pub struct JsonCollection<T> {
    path: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Serialize + DeserializeOwned> JsonCollection<T> {
    /// Bind a collection to its backing file. The file is not touched
    /// until the first load or save.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _marker: PhantomData,
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full collection. A missing backing file is first-run
    /// bootstrap and yields an empty collection, not an error.
    pub fn load_all(&self) -> Result<Vec<T>> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(Error::Storage(format!(
                    "cannot read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| {
            Error::Storage(format!("cannot decode {}: {}", self.path.display(), e))
        })
    }

    /// Replace the full contents of the backing file. A failed write is
    /// surfaced; success is never reported for a save that did not land.
    pub fn save_all(&self, records: &[T]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                Error::Storage(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }
        let file = File::create(&self.path).map_err(|e| {
            Error::Storage(format!("cannot write {}: {}", self.path.display(), e))
        })?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, records).map_err(|e| {
            Error::Storage(format!("cannot encode {}: {}", self.path.display(), e))
        })
    }
}
