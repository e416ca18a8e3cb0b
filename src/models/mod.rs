//! Core data models for the valuation engine.
//!
//! This module contains all the domain models used throughout the engine.

mod category;
mod participation;
mod trip;
mod valuation_result;

pub use category::ProfessionalCategory;
pub use participation::{Session, WorkshopParticipation};
pub use trip::{PerDiemRate, Trip};
pub use valuation_result::{
    AuditStep, AuditTrace, AuditWarning, LaborBreakdown, TravelBreakdown, TravelEligibility,
    TripValuation, ValuationResult, WorkshopAllocation,
};

use serde::{Deserialize, Serialize};

/// The input record for one valuation: a participation and its linked trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValuationInput {
    /// The speaker's participation in the workshop.
    pub participation: WorkshopParticipation,
    /// The trip that brought the speaker to the workshop, if any.
    #[serde(default)]
    pub trip: Option<Trip>,
}
