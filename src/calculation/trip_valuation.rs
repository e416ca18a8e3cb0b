//! Trip valuation functionality.
//!
//! Chains the duration, cost and allocation calculations for one trip.

use tracing::debug;

use crate::config::ValuationPolicy;
use crate::error::EngineResult;
use crate::models::{AuditStep, AuditTrace, Trip, TripValuation};

use super::currency::round_currency;
use super::{
    TravelAllocationResult, TravelCostResult, TravelDurationResult, allocate_travel_cost,
    calculate_travel_cost, calculate_travel_duration,
};

/// The intermediate results of valuing a trip.
#[derive(Debug, Clone)]
pub struct TripCalculation {
    /// Eligible days and lodging nights.
    pub duration: TravelDurationResult,
    /// Cost components and total.
    pub cost: TravelCostResult,
    /// Shares across the trip's workshops.
    pub allocation: TravelAllocationResult,
}

impl TripCalculation {
    /// Returns the three audit steps in calculation order.
    pub fn audit_steps(&self) -> Vec<AuditStep> {
        vec![
            self.duration.audit_step.clone(),
            self.cost.audit_step.clone(),
            self.allocation.audit_step.clone(),
        ]
    }
}

/// Runs duration, cost and allocation for a trip.
///
/// Audit steps are numbered consecutively from `step_number`.
///
/// # Errors
///
/// Returns `InvalidDateRange` for a trip ending before it starts, and
/// `InvalidInput` for negative airfare or rates, or an empty or
/// duplicated workshop list.
pub fn calculate_trip(
    trip: &Trip,
    policy: &ValuationPolicy,
    step_number: u32,
) -> EngineResult<TripCalculation> {
    let duration = calculate_travel_duration(&trip.id, trip.start_date, trip.end_date, step_number)?;
    let cost = calculate_travel_cost(
        &trip.id,
        &duration,
        &trip.per_diem,
        trip.airfare_estimate,
        policy.travel(),
        step_number + 1,
    )?;
    let allocation = allocate_travel_cost(
        &trip.id,
        cost.total_travel_cost,
        &trip.workshop_ids,
        step_number + 2,
    )?;

    debug!(
        trip_id = %trip.id,
        eligible_days = duration.eligible_days,
        total_travel_cost = %cost.total_travel_cost,
        workshops = allocation.allocations.len(),
        "Trip calculated"
    );

    Ok(TripCalculation {
        duration,
        cost,
        allocation,
    })
}

/// Values a trip on its own, with every workshop's share.
///
/// Eligibility flags are not consulted; this reports what the trip costs
/// and how that cost splits.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::valuate_trip;
/// use valuation_engine::config::ValuationPolicy;
/// use valuation_engine::models::{PerDiemRate, Trip};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let trip = Trip {
///     id: "trip_001".to_string(),
///     start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     origin_economy: "Chile".to_string(),
///     destination_location: "Lima, Peru".to_string(),
///     airfare_estimate: Decimal::new(900, 0),
///     per_diem: PerDiemRate {
///         location: "Lima".to_string(),
///         rate_version: None,
///         lodging_rate: Decimal::new(200, 0),
///         mie_rate: Decimal::new(100, 0),
///     },
///     is_reimbursed_elsewhere: false,
///     is_primarily_unrelated: false,
///     workshop_ids: vec!["ws_1".to_string(), "ws_2".to_string(), "ws_3".to_string()],
/// };
///
/// let valuation = valuate_trip(&trip, &ValuationPolicy::standard()).unwrap();
/// assert_eq!(valuation.total_travel_cost.to_string(), "1550.00");
/// assert_eq!(valuation.allocations.len(), 3);
/// ```
pub fn valuate_trip(trip: &Trip, policy: &ValuationPolicy) -> EngineResult<TripValuation> {
    let calculation = calculate_trip(trip, policy, 1)?;
    let audit_steps = calculation.audit_steps();

    Ok(TripValuation {
        trip_id: trip.id.clone(),
        eligible_days: calculation.duration.eligible_days,
        lodging_nights: calculation.duration.lodging_nights,
        lodging_cost: calculation.cost.lodging_cost,
        mie_travel_days_cost: calculation.cost.mie_travel_days_cost,
        mie_full_days_cost: calculation.cost.mie_full_days_cost,
        total_travel_cost: round_currency(calculation.cost.total_travel_cost),
        allocations: calculation.allocation.allocations,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings: vec![],
        },
    })
}
