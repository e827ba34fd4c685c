use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

use super::csv::evaluation_csv;
use super::error::{StorageError, StorageResult};
use super::{EVALUATION_FILE, SUMMARIES_FILE};
use crate::pipeline::ResultRecord;

/// JSON and CSV result files under one results directory.
///
/// Writes go to a temporary file in the same directory and are renamed over
/// the target, so readers never observe a half-written file. Read-modify-write
/// operations hold an internal lock.
#[derive(Debug)]
pub struct ResultStore {
    results_dir: PathBuf,
    write_lock: Mutex<()>,
}

impl ResultStore {
    pub fn new(results_dir: impl Into<PathBuf>) -> Self {
        Self {
            results_dir: results_dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    pub fn summaries_path(&self) -> PathBuf {
        self.results_dir.join(SUMMARIES_FILE)
    }

    pub fn evaluation_path(&self) -> PathBuf {
        self.results_dir.join(EVALUATION_FILE)
    }

    /// Creates the results directory if it does not exist.
    pub fn ensure_dirs(&self) -> StorageResult<()> {
        fs::create_dir_all(&self.results_dir).map_err(|e| StorageError::io(&self.results_dir, e))
    }

    /// Reads stored records. A missing or corrupt file reads as empty.
    pub fn load(&self) -> StorageResult<Vec<ResultRecord>> {
        let path = self.summaries_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(StorageError::io(path, e)),
        };

        match serde_json::from_str(&contents) {
            Ok(records) => Ok(records),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Corrupt results file, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    /// Replaces the JSON results with `records`.
    pub fn save_all(&self, records: &[ResultRecord]) -> StorageResult<()> {
        let _guard = self.write_lock.lock();
        self.write_records(records)
    }

    /// Appends `record` to the stored results and returns the new total.
    pub fn append(&self, record: ResultRecord) -> StorageResult<usize> {
        let _guard = self.write_lock.lock();
        let mut records = self.load()?;
        records.push(record);
        self.write_records(&records)?;
        Ok(records.len())
    }

    /// Writes the tabular export of `records`.
    pub fn save_evaluation_csv(&self, records: &[ResultRecord]) -> StorageResult<()> {
        let _guard = self.write_lock.lock();
        self.ensure_dirs()?;
        let path = self.evaluation_path();
        self.write_atomic(&path, evaluation_csv(records).as_bytes())?;
        debug!(path = %path.display(), rows = records.len(), "Wrote evaluation table");
        Ok(())
    }

    fn write_records(&self, records: &[ResultRecord]) -> StorageResult<()> {
        self.ensure_dirs()?;
        let path = self.summaries_path();
        let bytes = serde_json::to_vec_pretty(records)?;
        self.write_atomic(&path, &bytes)?;
        debug!(path = %path.display(), records = records.len(), "Wrote results");
        Ok(())
    }

    fn write_atomic(&self, path: &Path, bytes: &[u8]) -> StorageResult<()> {
        let mut file =
            NamedTempFile::new_in(&self.results_dir).map_err(|e| StorageError::io(&self.results_dir, e))?;
        file.write_all(bytes).map_err(|e| StorageError::io(file.path(), e))?;
        file.as_file()
            .sync_all()
            .map_err(|e| StorageError::io(file.path(), e))?;
        file.persist(path).map_err(|e| StorageError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.error.to_string(),
        })?;
        Ok(())
    }
}
