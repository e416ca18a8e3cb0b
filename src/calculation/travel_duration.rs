//! Travel duration functionality.
//!
//! Converts a trip's start and end dates into eligible days and lodging nights.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The duration of a trip.
#[derive(Debug, Clone)]
pub struct TravelDurationResult {
    /// Inclusive day count: end minus start plus one.
    pub eligible_days: u32,
    /// Eligible days minus one.
    pub lodging_nights: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates eligible days and lodging nights for a trip.
///
/// A same-day trip has one eligible day and no lodging nights.
///
/// # Errors
///
/// Returns `InvalidDateRange` if `end_date` is before `start_date`.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::calculate_travel_duration;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let end = NaiveDate::from_ymd_opt(2025, 1, 3).unwrap();
///
/// let result = calculate_travel_duration("trip_001", start, end, 1).unwrap();
/// assert_eq!(result.eligible_days, 3);
/// assert_eq!(result.lodging_nights, 2);
/// ```
pub fn calculate_travel_duration(
    trip_id: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    step_number: u32,
) -> EngineResult<TravelDurationResult> {
    if end_date < start_date {
        return Err(EngineError::InvalidDateRange {
            entity_id: trip_id.to_string(),
            start_date,
            end_date,
        });
    }

    let span = (end_date - start_date).num_days() + 1;
    let eligible_days = u32::try_from(span).map_err(|_| EngineError::InvalidInput {
        entity_id: trip_id.to_string(),
        field: "end_date".to_string(),
        message: format!("trip of {} days is out of range", span),
    })?;
    let lodging_nights = eligible_days.saturating_sub(1);

    let audit_step = AuditStep {
        step_number,
        rule_id: "travel_duration".to_string(),
        rule_name: "Travel Duration".to_string(),
        input: serde_json::json!({
            "trip_id": trip_id,
            "start_date": start_date.to_string(),
            "end_date": end_date.to_string()
        }),
        output: serde_json::json!({
            "eligible_days": eligible_days,
            "lodging_nights": lodging_nights
        }),
        reasoning: format!(
            "{} to {} inclusive = {} day(s), {} lodging night(s)",
            start_date, end_date, eligible_days, lodging_nights
        ),
    };

    Ok(TravelDurationResult {
        eligible_days,
        lodging_nights,
        audit_step,
    })
}
