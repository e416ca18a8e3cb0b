//! Travel eligibility gate.
//!
//! Travel is valued only for a linked trip that was privately funded and
//! made for the program. Labor eligibility is validated upstream and is not
//! decided here.

use crate::models::{AuditStep, TravelEligibility, Trip};

/// The travel eligibility decision and its audit step.
#[derive(Debug, Clone)]
pub struct TravelEligibilityResult {
    /// The decision.
    pub eligibility: TravelEligibility,
    /// The audit step recording this decision.
    pub audit_step: AuditStep,
}

/// Decides whether a participation's linked trip is valued.
///
/// Checks run in order: no trip, reimbursed elsewhere, primarily unrelated.
/// The first that applies decides the outcome.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::determine_travel_eligibility;
/// use valuation_engine::models::TravelEligibility;
///
/// let result = determine_travel_eligibility(None, 3);
/// assert_eq!(result.eligibility, TravelEligibility::NoTrip);
/// ```
pub fn determine_travel_eligibility(trip: Option<&Trip>, step_number: u32) -> TravelEligibilityResult {
    let eligibility = match trip {
        None => TravelEligibility::NoTrip,
        Some(t) if t.is_reimbursed_elsewhere => TravelEligibility::ReimbursedElsewhere,
        Some(t) if t.is_primarily_unrelated => TravelEligibility::PrimarilyUnrelated,
        Some(_) => TravelEligibility::Eligible,
    };

    let reasoning = match eligibility {
        TravelEligibility::NoTrip => "No trip linked to this participation - no travel contribution",
        TravelEligibility::ReimbursedElsewhere => {
            "Travel reimbursed by the USG or another donor - not valued"
        }
        TravelEligibility::PrimarilyUnrelated => {
            "Trip was primarily for unrelated purposes - not valued"
        }
        TravelEligibility::Eligible => "Privately funded travel for the program - valued",
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "travel_eligibility".to_string(),
        rule_name: "Travel Eligibility".to_string(),
        input: serde_json::json!({
            "trip_id": trip.map(|t| t.id.as_str()),
            "is_reimbursed_elsewhere": trip.map(|t| t.is_reimbursed_elsewhere),
            "is_primarily_unrelated": trip.map(|t| t.is_primarily_unrelated)
        }),
        output: serde_json::json!({
            "eligibility": eligibility,
            "eligible": eligibility.is_eligible()
        }),
        reasoning: reasoning.to_string(),
    };

    TravelEligibilityResult {
        eligibility,
        audit_step,
    }
}
