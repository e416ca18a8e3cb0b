//! HTTP request handlers for the Valuation Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{Trip, ValuationInput};

use super::request::{BatchValuationRequest, TripRequest, ValuationRequest};
use super::response::{
    ApiError, ApiErrorResponse, BatchValuationResponse, ENGINE_VERSION, ValuationResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/valuate", post(valuate_handler))
        .route("/valuate/batch", post(batch_handler))
        .route("/trips/valuate", post(trip_handler))
        .route("/policy", get(policy_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a body extraction failure to a 400 response.
fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's description of the problem
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::new("INVALID_INPUT", body_text)
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
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

fn failure_response(correlation_id: Uuid, err: crate::error::EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Valuation failed"
    );
    error_response(err.into())
}

/// Handler for POST /valuate endpoint.
///
/// Accepts one participation record and returns its valuation.
async fn valuate_handler(
    State(state): State<AppState>,
    payload: Result<Json<ValuationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing valuation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let outcome = ValuationInput::try_from(request).and_then(|input| state.engine().valuate(&input));

    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                speaker_id = %result.speaker_id,
                workshop_id = %result.workshop_id,
                total_contribution = %result.total_contribution,
                duration_us = start_time.elapsed().as_micros(),
                "Valuation request completed"
            );
            json_response(
                StatusCode::OK,
                ValuationResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: ENGINE_VERSION.to_string(),
                    result,
                },
            )
        }
        Err(err) => failure_response(correlation_id, err),
    }
}

/// Handler for POST /valuate/batch endpoint.
///
/// Values every record or none; the first invalid record fails the request.
async fn batch_handler(
    State(state): State<AppState>,
    payload: Result<Json<BatchValuationRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing batch valuation request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let outcome = request
        .inputs
        .into_iter()
        .map(ValuationInput::try_from)
        .collect::<EngineResult<Vec<_>>>()
        .and_then(|inputs| state.engine().valuate_all(&inputs));

    match outcome {
        Ok(results) => {
            info!(
                correlation_id = %correlation_id,
                count = results.len(),
                duration_us = start_time.elapsed().as_micros(),
                "Batch valuation request completed"
            );
            json_response(
                StatusCode::OK,
                BatchValuationResponse {
                    calculation_id: correlation_id,
                    timestamp: Utc::now(),
                    engine_version: ENGINE_VERSION.to_string(),
                    results,
                },
            )
        }
        Err(err) => failure_response(correlation_id, err),
    }
}

/// Handler for POST /trips/valuate endpoint.
async fn trip_handler(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing trip valuation request");

    let trip: Trip = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match state.engine().valuate_trip(&trip) {
        Ok(valuation) => {
            info!(
                correlation_id = %correlation_id,
                trip_id = %valuation.trip_id,
                total_travel_cost = %valuation.total_travel_cost,
                "Trip valuation request completed"
            );
            json_response(StatusCode::OK, valuation)
        }
        Err(err) => failure_response(correlation_id, err),
    }
}

/// Handler for GET /policy endpoint.
async fn policy_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.engine().policy())
}
