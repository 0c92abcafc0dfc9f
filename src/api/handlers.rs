//! HTTP request handlers for the Payroll Deduction Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    calculate_payroll_with_audit, checked_calculate_payroll, settle, validate_settlement_item,
};
use crate::error::EngineError;
use crate::models::PayrollCalculationInput;

use super::request::{CalculationRequest, RatesQuery, SettlementRequest};
use super::response::{
    ApiError, ApiErrorResponse, CalculationResponse, RatesResponse, SettlementResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/settlements", post(settlements_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /calculate endpoint.
///
/// Accepts a gross pay with optional rates and returns the deduction
/// breakdown, with the audit trace when `include_audit` is set.
async fn calculate_handler(
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    let include_audit = request.include_audit;
    let input: PayrollCalculationInput = request.into();

    let start_time = Instant::now();
    let result = match checked_calculate_payroll(&input) {
        Ok(result) => result,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation rejected"
            );
            return error_response(err);
        }
    };
    let audit_trace = include_audit.then(|| calculate_payroll_with_audit(&input).1);

    info!(
        correlation_id = %correlation_id,
        gross_pay = %input.gross_pay,
        net_pay = %result.net_pay,
        include_audit,
        duration_us = start_time.elapsed().as_micros(),
        "Calculation completed successfully"
    );

    json_response(
        StatusCode::OK,
        CalculationResponse {
            calculation_id: correlation_id,
            timestamp: Utc::now(),
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            input,
            result,
            audit_trace,
        },
    )
}

/// Handler for POST /settlements endpoint.
///
/// Validates every line, resolves the rate table in force on the settlement
/// date and settles the whole batch against it.
async fn settlements_handler(
    State(state): State<AppState>,
    payload: Result<Json<SettlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing settlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return json_rejection_response(rejection, correlation_id),
    };

    if let Err(err) = request.items.iter().try_for_each(validate_settlement_item) {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Settlement line rejected"
        );
        return error_response(err);
    }

    let rates = match state.config().rates_for(request.settlement_date) {
        Ok(rates) => rates,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                settlement_date = %request.settlement_date,
                "No rate table for settlement date"
            );
            return error_response(err);
        }
    };

    let start_time = Instant::now();
    let summary = match settle(&request.items, rates) {
        Ok(summary) => summary,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Settlement rejected"
            );
            return error_response(err);
        }
    };

    info!(
        correlation_id = %correlation_id,
        workers = summary.lines.len(),
        effective_date = %rates.effective_date,
        total_net_pay = %summary.totals.total_net_pay,
        duration_us = start_time.elapsed().as_micros(),
        "Settlement completed successfully"
    );

    json_response(
        StatusCode::OK,
        SettlementResponse {
            settlement_id: correlation_id,
            settlement_date: request.settlement_date,
            effective_date: rates.effective_date,
            lines: summary.lines,
            totals: summary.totals,
        },
    )
}

/// Handler for GET /rates endpoint.
///
/// Returns the rate table in force on `date`, or the newest table when no
/// date is given.
async fn rates_handler(
    State(state): State<AppState>,
    query: Result<Query<RatesQuery>, QueryRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid rates query"
            );
            return json_response(
                StatusCode::BAD_REQUEST,
                ApiError::validation_error(rejection.body_text()),
            );
        }
    };

    let config = state.config();
    let rates = match query.date {
        Some(date) => match config.rates_for(date) {
            Ok(rates) => *rates,
            Err(err) => {
                warn!(correlation_id = %correlation_id, date = %date, "No rate table for date");
                return error_response(err);
            }
        },
        None => *config.latest(),
    };

    info!(
        correlation_id = %correlation_id,
        effective_date = %rates.effective_date,
        "Rates lookup completed"
    );

    json_response(StatusCode::OK, RatesResponse::from(rates))
}

/// Maps a JSON body rejection to a 400 response.
///
/// A missing field is a validation error; anything else about the body is
/// malformed JSON.
fn json_rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
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
        JsonRejection::MissingJsonContentType(_) => {
            warn!(correlation_id = %correlation_id, "Missing JSON content type");
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn error_response(err: EngineError) -> Response {
    ApiErrorResponse::from(err).into_response()
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}
