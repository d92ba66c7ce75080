//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::{Local, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_shift;
use crate::models::ShiftInput;
use crate::statistics::{filter_by_period, summarize, to_csv};

use super::request::{ShiftCalculationRequest, StatisticsRequest};
use super::response::{ApiError, ApiErrorResponse, CalculationResponse, StatisticsResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/calculate", post(calculate_handler))
        .route("/statistics", post(statistics_handler))
        .route("/statistics/csv", post(statistics_csv_handler))
        .with_state(state)
}

/// Handler for POST /shifts/calculate.
///
/// Accepts one reported shift and returns the computed pay record.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShiftCalculationRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing shift calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let input: ShiftInput = request.into();
    match compute_shift(state.config().config(), &input) {
        Ok(record) => {
            info!(
                correlation_id = %correlation_id,
                date = %record.date,
                total_hours = %record.total_hours,
                overtime_hours = %record.overtime_hours,
                total_net = record.total_net,
                "Shift calculation completed successfully"
            );
            let response = CalculationResponse {
                calculation_id: correlation_id,
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                record,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Shift calculation failed"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}

/// Handler for POST /statistics.
///
/// Filters the submitted shift records to the requested period and returns
/// the filtered set together with its summary.
async fn statistics_handler(
    payload: Result<Json<StatisticsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing statistics request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let shifts = filter_by_period(&request.shifts, request.filter, today);
    let summary = summarize(&shifts);

    info!(
        correlation_id = %correlation_id,
        total_shifts = summary.total_shifts,
        total_net = summary.total_net,
        "Statistics computed"
    );

    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(StatisticsResponse { summary, shifts }),
    )
        .into_response()
}

/// Handler for POST /statistics/csv.
///
/// Returns the period-filtered shift records as CSV text.
async fn statistics_csv_handler(
    payload: Result<Json<StatisticsRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing CSV export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let today = request.today.unwrap_or_else(|| Local::now().date_naive());
    let shifts = filter_by_period(&request.shifts, request.filter, today);
    let csv = to_csv(&shifts);

    info!(
        correlation_id = %correlation_id,
        exported_shifts = shifts.len(),
        "CSV export completed"
    );

    (StatusCode::OK, [(header::CONTENT_TYPE, "text/csv")], csv).into_response()
}

/// Maps a JSON extraction rejection to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            // Check if it's a missing field error
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
