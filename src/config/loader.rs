//! Configuration loading functionality.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::EngineConfig;

impl EngineConfig {
    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// [`EngineError::ConfigNotFound`] when the file cannot be read, and
    /// [`EngineError::ConfigParseError`] when it is not valid YAML for
    /// [`EngineConfig`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use payroll_engine::config::EngineConfig;
    ///
    /// let config = EngineConfig::load("./config/engine.yaml")?;
    /// # Ok::<(), payroll_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
