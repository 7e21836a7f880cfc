//! Rate persistence.
//!
//! The engine itself only passes [`RateTable`](crate::models::RateTable)
//! values around; reading and writing them is the job of a store behind
//! the [`RateStore`] trait, so file, spreadsheet, or database backends are
//! interchangeable. This module ships the JSON-file backend.

mod json_file;

pub use json_file::JsonFileRateStore;

use crate::error::EngineResult;
use crate::models::RateTable;

/// A persistence backend for the per-employee rate table.
///
/// `load` is called once per calculation run; `save` whenever newly
/// discovered employees were provisioned or rates were edited. Failures
/// surface as [`EngineError::PersistenceFailure`](crate::error::EngineError)
/// with the underlying cause.
pub trait RateStore {
    /// Loads the rate table.
    fn load(&self) -> EngineResult<RateTable>;

    /// Persists the rate table.
    fn save(&self, rates: &RateTable) -> EngineResult<()>;
}
