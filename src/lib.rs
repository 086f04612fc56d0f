//! Vacation Balance and Monthly Work-Hour Reconciliation Engine
//!
//! This crate computes monthly work-hour summaries and annual vacation
//! balances for employees with configurable weekly contract schedules,
//! holiday calendars, and part-time work rates.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
