//! Payroll engine for biometric time-clock attendance exports
//!
//! This crate ingests the HTML report emitted by a biometric time clock,
//! reduces each employee-day to a first-in/last-out punch pair, and derives
//! worked duration, lateness, overtime, and daily pay against a configurable
//! shift window and a per-employee rate table.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod models;
pub mod store;
