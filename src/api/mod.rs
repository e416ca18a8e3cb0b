//! HTTP API module for the Valuation Engine.
//!
//! This module provides the REST API endpoints for valuing speaker
//! contributions and trips against the loaded policy.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    BatchValuationRequest, ParticipationRequest, PerDiemRequest, SessionRequest, TripRequest,
    ValuationRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, BatchValuationResponse, ENGINE_VERSION, ValuationResponse,
};
pub use state::AppState;
