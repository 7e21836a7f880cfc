//! JSON-file rate store.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};
use crate::models::RateTable;

use super::RateStore;

/// Rate store backed by a single JSON file.
///
/// The file is a bare object mapping employee id to rate-per-minute. A
/// missing file loads as an empty table, so a fresh deployment needs no
/// setup step; the file appears on the first save.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::store::{JsonFileRateStore, RateStore};
///
/// let store = JsonFileRateStore::new("employee_rates.json");
/// let rates = store.load()?;
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileRateStore {
    path: PathBuf,
}

impl JsonFileRateStore {
    /// Creates a store reading and writing the given file path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The file path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn failure(&self, message: impl std::fmt::Display) -> EngineError {
        EngineError::PersistenceFailure {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl RateStore for JsonFileRateStore {
    fn load(&self) -> EngineResult<RateTable> {
        if !self.path.exists() {
            return Ok(RateTable::new());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| self.failure(e))?;
        serde_json::from_str(&content).map_err(|e| self.failure(e))
    }

    fn save(&self, rates: &RateTable) -> EngineResult<()> {
        let content = serde_json::to_string_pretty(rates).map_err(|e| self.failure(e))?;
        fs::write(&self.path, content).map_err(|e| self.failure(e))
    }
}
