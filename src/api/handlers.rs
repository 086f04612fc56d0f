//! HTTP request handlers for the Leave Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_annual_balance, calculate_month_summary, month_days};
use crate::error::{EngineError, EngineResult};
use crate::models::{Holiday, UserSettings, VacationRecord, WeeklyContract};

use super::request::{AnnualBalanceRequest, MonthSummaryRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/summary/month", post(month_summary_handler))
        .route("/balance/annual", post(annual_balance_handler))
        .with_state(state)
}

/// Handler for the POST /summary/month endpoint.
///
/// Accepts a month summary request and returns the computed monthly
/// figures.
async fn month_summary_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthSummaryRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing month summary request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    if !(1..=12).contains(&request.month) {
        warn!(
            correlation_id = %correlation_id,
            month = request.month,
            "Month out of range"
        );
        return engine_error_response(EngineError::InvalidRequest {
            message: format!("month must be between 1 and 12, got {}", request.month),
        });
    }

    let contract = match resolve_contract(&state, request.contract.map(Into::into)) {
        Ok(contract) => contract,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid contract override");
            return engine_error_response(err);
        }
    };
    let holidays = resolve_holidays(&state, request.holidays);
    let records: Vec<VacationRecord> = request.vacations.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let days = month_days(request.year, request.month);
    let summary = calculate_month_summary(&days, &contract, &holidays, &records);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        month = request.month,
        workable_days = summary.workable_days,
        vacation_impact_hours = %summary.vacation_impact_hours,
        duration_us = duration.as_micros(),
        "Month summary computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(summary),
    )
        .into_response()
}

/// Handler for the POST /balance/annual endpoint.
///
/// Accepts an annual balance request and returns the entitlement and
/// remaining balance figures.
async fn annual_balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<AnnualBalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing annual balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let contract = match resolve_contract(&state, request.contract.map(Into::into)) {
        Ok(contract) => contract,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid contract override");
            return engine_error_response(err);
        }
    };
    let settings = match resolve_settings(&state, request.settings.map(Into::into)) {
        Ok(settings) => settings,
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Invalid settings override");
            return engine_error_response(err);
        }
    };
    let holidays = resolve_holidays(&state, request.holidays);
    let records: Vec<VacationRecord> = request.vacations.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    let balance = calculate_annual_balance(&records, &contract, &holidays, &settings, request.year);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        year = request.year,
        days_consumed = %balance.days_consumed,
        remaining = %balance.remaining_vacation_days,
        duration_us = duration.as_micros(),
        "Annual balance computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(balance),
    )
        .into_response()
}

/// Resolves the contract to use: a validated override or the loaded config.
fn resolve_contract(
    state: &AppState,
    over: Option<WeeklyContract>,
) -> EngineResult<WeeklyContract> {
    match over {
        Some(contract) => {
            contract.validate()?;
            Ok(contract)
        }
        None => Ok(state.config().contract().clone()),
    }
}

/// Resolves the settings to use: a validated override or the loaded config.
fn resolve_settings(state: &AppState, over: Option<UserSettings>) -> EngineResult<UserSettings> {
    match over {
        Some(settings) => {
            settings.validate()?;
            Ok(settings)
        }
        None => Ok(state.config().settings().clone()),
    }
}

/// Resolves the holiday list: the request override or the loaded config.
fn resolve_holidays(
    state: &AppState,
    over: Option<Vec<super::request::HolidayRequest>>,
) -> Vec<Holiday> {
    match over {
        Some(holidays) => holidays.into_iter().map(Into::into).collect(),
        None => state.config().holidays().to_vec(),
    }
}

/// Converts an engine error into a JSON error response.
fn engine_error_response(error: EngineError) -> Response {
    let api_error: ApiErrorResponse = error.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

/// Converts a JSON extraction rejection into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("VALIDATION_ERROR", body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => ApiError::new(
            "MISSING_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
