//! Travel cost functionality.
//!
//! This module values a trip from its duration, the destination per diem
//! rates and the airfare estimate. A fixed number of travel days (outbound
//! and return) is valued at a reduced share of the M&IE rate; every other
//! eligible day is a full day in location.

use rust_decimal::Decimal;

use crate::config::TravelFactors;
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, PerDiemRate};

use super::TravelDurationResult;

/// The cost of a trip, broken down by component.
#[derive(Debug, Clone)]
pub struct TravelCostResult {
    /// Days valued at the travel-day M&IE share.
    pub travel_day_count: u32,
    /// Days valued at the full-day M&IE share.
    pub full_day_count: u32,
    /// Lodging nights valued at the lodging rate.
    pub lodging_cost: Decimal,
    /// M&IE for the travel days.
    pub mie_travel_days_cost: Decimal,
    /// M&IE for the full days.
    pub mie_full_days_cost: Decimal,
    /// Airfare plus lodging plus M&IE, unrounded.
    pub total_travel_cost: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the total cost of a trip.
///
/// ```text
/// lodging    = lodging_nights × lodging_rate × lodging_factor
/// travel days = min(standard_travel_days, eligible_days)
/// full days   = eligible_days − travel days
/// M&IE       = travel days × mie_rate × travel_day_factor
///            + full days × mie_rate × full_day_factor
/// total      = airfare + lodging + M&IE
/// ```
///
/// # Errors
///
/// Returns `InvalidInput` if the airfare or either per diem rate is negative,
/// if the duration has no eligible days, or if a component or the total is
/// too large for a `Decimal`.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::{calculate_travel_cost, calculate_travel_duration};
/// use valuation_engine::config::ValuationPolicy;
/// use valuation_engine::models::PerDiemRate;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let policy = ValuationPolicy::standard();
/// let duration = calculate_travel_duration(
///     "trip_001",
///     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
///     1,
/// )
/// .unwrap();
/// let per_diem = PerDiemRate {
///     location: "Lima".to_string(),
///     rate_version: None,
///     lodging_rate: Decimal::new(200, 0),
///     mie_rate: Decimal::new(100, 0),
/// };
///
/// let result = calculate_travel_cost(
///     "trip_001",
///     &duration,
///     &per_diem,
///     Decimal::new(900, 0),
///     policy.travel(),
///     2,
/// )
/// .unwrap();
/// assert_eq!(result.total_travel_cost, Decimal::new(1550, 0));
/// ```
pub fn calculate_travel_cost(
    trip_id: &str,
    duration: &TravelDurationResult,
    per_diem: &PerDiemRate,
    airfare_estimate: Decimal,
    factors: &TravelFactors,
    step_number: u32,
) -> EngineResult<TravelCostResult> {
    let non_negative = [
        ("airfare_estimate", airfare_estimate),
        ("per_diem.lodging_rate", per_diem.lodging_rate),
        ("per_diem.mie_rate", per_diem.mie_rate),
    ];
    if let Some((field, value)) = non_negative.iter().find(|(_, v)| v.is_sign_negative()) {
        return Err(EngineError::InvalidInput {
            entity_id: trip_id.to_string(),
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    if duration.eligible_days == 0 {
        return Err(EngineError::InvalidInput {
            entity_id: trip_id.to_string(),
            field: "eligible_days".to_string(),
            message: "a trip has at least one eligible day".to_string(),
        });
    }

    let travel_day_count = factors.standard_travel_days.min(duration.eligible_days);
    let full_day_count = duration.eligible_days - travel_day_count;

    let lodging_cost = Decimal::from(duration.lodging_nights)
        .checked_mul(per_diem.lodging_rate)
        .and_then(|cost| cost.checked_mul(factors.lodging_factor))
        .ok_or_else(|| EngineError::out_of_range(trip_id, "per_diem.lodging_rate"))?;
    let mie_travel_days_cost = Decimal::from(travel_day_count)
        .checked_mul(per_diem.mie_rate)
        .and_then(|cost| cost.checked_mul(factors.travel_day_mie_factor))
        .ok_or_else(|| EngineError::out_of_range(trip_id, "per_diem.mie_rate"))?;
    let mie_full_days_cost = Decimal::from(full_day_count)
        .checked_mul(per_diem.mie_rate)
        .and_then(|cost| cost.checked_mul(factors.full_day_mie_factor))
        .ok_or_else(|| EngineError::out_of_range(trip_id, "per_diem.mie_rate"))?;
    let total_travel_cost = [lodging_cost, mie_travel_days_cost, mie_full_days_cost]
        .into_iter()
        .try_fold(airfare_estimate, |total, cost| total.checked_add(cost))
        .ok_or_else(|| EngineError::out_of_range(trip_id, "total_travel_cost"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "travel_cost".to_string(),
        rule_name: "Travel Cost".to_string(),
        input: serde_json::json!({
            "trip_id": trip_id,
            "eligible_days": duration.eligible_days,
            "lodging_nights": duration.lodging_nights,
            "location": per_diem.location,
            "lodging_rate": per_diem.lodging_rate.normalize().to_string(),
            "mie_rate": per_diem.mie_rate.normalize().to_string(),
            "airfare_estimate": airfare_estimate.normalize().to_string()
        }),
        output: serde_json::json!({
            "travel_day_count": travel_day_count,
            "full_day_count": full_day_count,
            "lodging_cost": lodging_cost.normalize().to_string(),
            "mie_travel_days_cost": mie_travel_days_cost.normalize().to_string(),
            "mie_full_days_cost": mie_full_days_cost.normalize().to_string(),
            "total_travel_cost": total_travel_cost.normalize().to_string()
        }),
        reasoning: format!(
            "${} airfare + {} night(s) × ${} lodging + {} travel day(s) × ${} × {} + {} full day(s) × ${} × {} = ${}",
            airfare_estimate.normalize(),
            duration.lodging_nights,
            per_diem.lodging_rate.normalize(),
            travel_day_count,
            per_diem.mie_rate.normalize(),
            factors.travel_day_mie_factor.normalize(),
            full_day_count,
            per_diem.mie_rate.normalize(),
            factors.full_day_mie_factor.normalize(),
            total_travel_cost.normalize()
        ),
    };

    Ok(TravelCostResult {
        travel_day_count,
        full_day_count,
        lodging_cost,
        mie_travel_days_cost,
        mie_full_days_cost,
        total_travel_cost,
        audit_step,
    })
}
