//! Configuration loading and management for the Leave Engine.
//!
//! This module provides functionality to load the weekly contract, holiday
//! calendar, and user entitlement settings from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Holidays loaded: {}", config.holidays().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, HolidaysConfig};
