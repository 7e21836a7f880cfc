//! Per-employee pay rate table.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Mapping from employee id to rate-per-minute.
///
/// The table is a plain value: the calculator reads it, never mutates it,
/// and auto-provisioning produces a new table for the caller to persist.
/// Unknown ids always resolve to a rate of zero, so a new employee earns
/// nothing until a rate is set explicitly.
///
/// Serializes as a bare JSON object (`{"1042": "5.0"}`), which is also the
/// on-disk format of the file-backed store.
///
/// # Example
///
/// ```
/// use payroll_engine::models::RateTable;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut rates = RateTable::new();
/// rates.set("1042", Decimal::from_str("5.0").unwrap());
/// assert_eq!(rates.get("1042"), Decimal::from_str("5.0").unwrap());
/// assert_eq!(rates.get("9999"), Decimal::ZERO);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RateTable {
    rates: BTreeMap<String, Decimal>,
}

impl RateTable {
    /// Creates an empty rate table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rate-per-minute for an employee, or zero when the id is
    /// unknown. Never an error: unpriced employees are paid nothing, not
    /// rejected.
    pub fn get(&self, employee_id: &str) -> Decimal {
        self.rates
            .get(employee_id)
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Returns whether the table contains an entry for the employee.
    pub fn contains(&self, employee_id: &str) -> bool {
        self.rates.contains_key(employee_id)
    }

    /// Sets the rate-per-minute for an employee.
    pub fn set(&mut self, employee_id: impl Into<String>, rate: Decimal) {
        self.rates.insert(employee_id.into(), rate);
    }

    /// Returns the number of employees in the table.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Returns whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over `(employee_id, rate)` entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.rates.iter().map(|(id, rate)| (id.as_str(), *rate))
    }

    /// Returns a copy of this table in which every previously unseen id is
    /// mapped to a zero rate, plus the newly added ids in first-seen order.
    ///
    /// This is the auto-provisioning policy for employees appearing in a
    /// report for the first time. The default is always zero; the engine
    /// never fabricates a non-zero rate. `self` is left untouched so the
    /// caller decides whether (and where) to persist the additions.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_engine::models::RateTable;
    /// use rust_decimal::Decimal;
    ///
    /// let rates = RateTable::new();
    /// let (provisioned, added) = rates.provisioned(["1042"]);
    /// assert_eq!(added, vec!["1042".to_string()]);
    /// assert_eq!(provisioned.get("1042"), Decimal::ZERO);
    /// assert!(rates.is_empty());
    /// ```
    pub fn provisioned<'a, I>(&self, employee_ids: I) -> (RateTable, Vec<String>)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut table = self.clone();
        let mut added = Vec::new();
        for id in employee_ids {
            if !table.contains(id) {
                table.set(id, Decimal::ZERO);
                added.push(id.to_string());
            }
        }
        (table, added)
    }

    /// Checks that every rate in the table is non-negative.
    ///
    /// Used when a replacement table is submitted through the rates API;
    /// tables loaded from the store are trusted as previously validated.
    pub fn validate(&self) -> EngineResult<()> {
        for (id, rate) in self.iter() {
            if rate < Decimal::ZERO {
                return Err(EngineError::InvalidRate {
                    employee_id: id.to_string(),
                    message: format!("rate must not be negative, got {rate}"),
                });
            }
        }
        Ok(())
    }
}

impl FromIterator<(String, Decimal)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (String, Decimal)>>(iter: T) -> Self {
        Self {
            rates: iter.into_iter().collect(),
        }
    }
}
