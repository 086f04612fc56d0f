//! HTTP API module for the Leave Engine.
//!
//! This module provides the REST API endpoints for computing monthly
//! work-hour summaries and annual vacation balances.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{AnnualBalanceRequest, MonthSummaryRequest};
pub use response::ApiError;
pub use state::AppState;
