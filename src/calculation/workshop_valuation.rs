//! Workshop valuation functionality.
//!
//! This module combines the labor contribution and the allocated travel
//! contribution into the final per-workshop valuation, applying the travel
//! eligibility gate. It is the only place output amounts are rounded.

use tracing::debug;

use crate::config::ValuationPolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AuditTrace, LaborBreakdown, TravelBreakdown, Trip, ValuationResult, WorkshopParticipation,
};

use super::currency::round_currency;
use super::{
    calculate_labor_contribution, calculate_trip, check_data_quality,
    determine_travel_eligibility, rate_for,
};

/// Values one speaker's participation in one workshop.
///
/// # Arguments
///
/// * `participation` - The speaker's recorded participation
/// * `trip` - The trip linked to the participation, if any
/// * `policy` - The active valuation policy
///
/// # Returns
///
/// A [`ValuationResult`] whose contribution amounts are rounded to the
/// cent, with `total_contribution = labor_contribution + travel_contribution`.
///
/// # Errors
///
/// - `InvalidInput` for a negative session duration, or for hours or costs
///   too large to value
/// - For eligible travel only: `InvalidDateRange`, `InvalidInput` for
///   negative airfare or rates, an empty or duplicated workshop list, or a
///   trip that does not list the participation's workshop
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::valuate_workshop;
/// use valuation_engine::config::ValuationPolicy;
/// use valuation_engine::models::{ProfessionalCategory, Session, WorkshopParticipation};
/// use rust_decimal::Decimal;
///
/// let participation = WorkshopParticipation {
///     speaker_id: "spk_001".to_string(),
///     workshop_id: "ws_001".to_string(),
///     category: ProfessionalCategory::ExecutiveSeniorLeadership,
///     sessions: vec![Session { duration_hours: Decimal::new(4, 0) }],
///     category_rationale: None,
///     documentation_links: vec![],
/// };
///
/// let result = valuate_workshop(&participation, None, &ValuationPolicy::standard()).unwrap();
/// assert_eq!(result.labor_contribution.to_string(), "2086.00");
/// assert_eq!(result.travel_contribution.to_string(), "0.00");
/// assert_eq!(result.total_contribution.to_string(), "2086.00");
/// ```
pub fn valuate_workshop(
    participation: &WorkshopParticipation,
    trip: Option<&Trip>,
    policy: &ValuationPolicy,
) -> EngineResult<ValuationResult> {
    let entity_id = participation.entity_id();

    if let Some((index, session)) = participation
        .sessions
        .iter()
        .enumerate()
        .find(|(_, s)| s.duration_hours.is_sign_negative())
    {
        return Err(EngineError::InvalidInput {
            entity_id,
            field: format!("sessions[{}].duration_hours", index),
            message: format!("must not be negative, got {}", session.duration_hours),
        });
    }

    let mut audit_steps = Vec::new();
    let mut step_number: u32 = 1;

    // Labor is always valued; its eligibility is settled upstream
    let rate = rate_for(participation.category, policy, step_number);
    audit_steps.push(rate.audit_step);
    step_number += 1;

    let presentation_hours = participation
        .presentation_hours()
        .ok_or_else(|| EngineError::out_of_range(&entity_id, "sessions"))?;
    let labor = calculate_labor_contribution(
        &entity_id,
        presentation_hours,
        rate.rate,
        policy.labor(),
        step_number,
    )?;
    audit_steps.push(labor.audit_step);
    step_number += 1;

    let eligibility = determine_travel_eligibility(trip, step_number);
    audit_steps.push(eligibility.audit_step);
    step_number += 1;

    let travel = match trip.filter(|_| eligibility.eligibility.is_eligible()) {
        Some(trip) => {
            if !trip.serves(&participation.workshop_id) {
                return Err(EngineError::InvalidInput {
                    entity_id,
                    field: "trip.workshop_ids".to_string(),
                    message: format!(
                        "trip '{}' does not list workshop '{}'",
                        trip.id, participation.workshop_id
                    ),
                });
            }

            let calculation = calculate_trip(trip, policy, step_number)?;
            audit_steps.extend(calculation.audit_steps());

            let allocated_travel = calculation
                .allocation
                .amount_for(&participation.workshop_id)
                .ok_or_else(|| EngineError::InvalidInput {
                    entity_id: entity_id.clone(),
                    field: "trip.workshop_ids".to_string(),
                    message: format!("no allocation for workshop '{}'", participation.workshop_id),
                })?;

            Some(TravelBreakdown {
                trip_id: trip.id.clone(),
                eligible_days: calculation.duration.eligible_days,
                lodging_nights: calculation.duration.lodging_nights,
                lodging_cost: calculation.cost.lodging_cost,
                mie_travel_days_cost: calculation.cost.mie_travel_days_cost,
                mie_full_days_cost: calculation.cost.mie_full_days_cost,
                total_travel_cost: calculation.cost.total_travel_cost,
                workshops_on_trip: calculation.allocation.allocations.len() as u32,
                allocated_travel,
            })
        }
        None => None,
    };

    let warnings = check_data_quality(participation, trip, eligibility.eligibility);

    let labor_contribution = round_currency(labor.amount);
    let travel_contribution = round_currency(
        travel
            .as_ref()
            .map(|t| t.allocated_travel)
            .unwrap_or_default(),
    );
    let total_contribution = labor_contribution
        .checked_add(travel_contribution)
        .ok_or_else(|| EngineError::out_of_range(&entity_id, "total_contribution"))?;

    debug!(
        speaker_id = %participation.speaker_id,
        workshop_id = %participation.workshop_id,
        eligibility = ?eligibility.eligibility,
        labor_contribution = %labor_contribution,
        travel_contribution = %travel_contribution,
        warnings = warnings.len(),
        "Workshop valued"
    );

    Ok(ValuationResult {
        workshop_id: participation.workshop_id.clone(),
        speaker_id: participation.speaker_id.clone(),
        labor_contribution,
        travel_contribution,
        total_contribution,
        methodology_version: policy.metadata().version.clone(),
        labor: LaborBreakdown {
            category: participation.category,
            hourly_rate: rate.rate,
            presentation_hours,
            total_labor_hours: labor.total_labor_hours,
            amount: labor.amount,
        },
        travel_eligibility: eligibility.eligibility,
        travel,
        audit_trace: AuditTrace {
            steps: audit_steps,
            warnings,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::data_quality::{SINGLE_DAY_TRIP, ZERO_PRESENTATION_HOURS};
    use crate::models::{PerDiemRate, ProfessionalCategory, Session, TravelEligibility};
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_participation(
        workshop_id: &str,
        category: ProfessionalCategory,
        hours: &[&str],
    ) -> WorkshopParticipation {
        WorkshopParticipation {
            speaker_id: "spk_001".to_string(),
            workshop_id: workshop_id.to_string(),
            category,
            sessions: hours
                .iter()
                .map(|h| Session {
                    duration_hours: dec(h),
                })
                .collect(),
            category_rationale: Some("CEO of a regional logistics firm".to_string()),
            documentation_links: vec!["https://example.org/bio".to_string()],
        }
    }

    fn create_trip(workshops: &[&str]) -> Trip {
        Trip {
            id: "trip_001".to_string(),
            start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2025, 1, 3).unwrap(),
            origin_economy: "Philippines".to_string(),
            destination_location: "Lima, Peru".to_string(),
            airfare_estimate: dec("900"),
            per_diem: PerDiemRate {
                location: "Lima".to_string(),
                rate_version: None,
                lodging_rate: dec("200"),
                mie_rate: dec("100"),
            },
            is_reimbursed_elsewhere: false,
            is_primarily_unrelated: false,
            workshop_ids: workshops.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// WV-001: labor only
    #[test]
    fn test_labor_only() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::ExecutiveSeniorLeadership,
            &["1.5", "2.5"],
        );

        let result = valuate_workshop(&participation, None, &ValuationPolicy::standard()).unwrap();

        assert_eq!(result.labor_contribution, dec("2086.00"));
        assert_eq!(result.travel_contribution, Decimal::ZERO);
        assert_eq!(result.total_contribution, dec("2086.00"));
        assert_eq!(result.labor.presentation_hours, dec("4"));
        assert_eq!(result.travel_eligibility, TravelEligibility::NoTrip);
        assert!(result.travel.is_none());
        assert_eq!(result.methodology_version, "v1.0.0");
    }

    /// WV-002: labor plus single-workshop travel
    #[test]
    fn test_labor_and_travel() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1"],
        );
        let trip = create_trip(&["ws_001"]);

        let result =
            valuate_workshop(&participation, Some(&trip), &ValuationPolicy::standard()).unwrap();

        assert_eq!(result.labor_contribution, dec("458.50"));
        assert_eq!(result.travel_contribution, dec("1550.00"));
        assert_eq!(result.total_contribution, dec("2008.50"));
        assert_eq!(result.total_contribution.to_string(), "2008.50");

        let travel = result.travel.unwrap();
        assert_eq!(travel.eligible_days, 3);
        assert_eq!(travel.workshops_on_trip, 1);
    }

    /// WV-003: shared trip allocates the remainder to the last workshop
    #[test]
    fn test_shared_trip_allocation() {
        let trip = create_trip(&["ws_b", "ws_c", "ws_a"]);
        let policy = ValuationPolicy::standard();

        let totals: Vec<Decimal> = ["ws_a", "ws_b", "ws_c"]
            .iter()
            .map(|ws| {
                let participation =
                    create_participation(ws, ProfessionalCategory::SeniorSpecialist, &["1"]);
                valuate_workshop(&participation, Some(&trip), &policy)
                    .unwrap()
                    .travel_contribution
            })
            .collect();

        assert_eq!(totals, vec![dec("516.67"), dec("516.67"), dec("516.66")]);
        assert_eq!(totals.iter().copied().sum::<Decimal>(), dec("1550.00"));
    }

    /// WV-004: reimbursed travel contributes nothing
    #[test]
    fn test_reimbursed_travel_is_zero() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1"],
        );
        let mut trip = create_trip(&["ws_001"]);
        trip.is_reimbursed_elsewhere = true;

        let result =
            valuate_workshop(&participation, Some(&trip), &ValuationPolicy::standard()).unwrap();

        assert_eq!(result.travel_contribution, Decimal::ZERO);
        assert_eq!(result.total_contribution, result.labor_contribution);
        assert_eq!(
            result.travel_eligibility,
            TravelEligibility::ReimbursedElsewhere
        );
    }

    /// WV-005: ineligible trip is not validated
    #[test]
    fn test_unrelated_trip_with_bad_dates_is_ignored() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1"],
        );
        let mut trip = create_trip(&["ws_999"]);
        trip.is_primarily_unrelated = true;
        trip.end_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

        let result =
            valuate_workshop(&participation, Some(&trip), &ValuationPolicy::standard()).unwrap();

        assert_eq!(result.travel_contribution, Decimal::ZERO);
    }

    /// WV-006: eligible trip with reversed dates fails
    #[test]
    fn test_eligible_trip_with_reversed_dates_fails() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1"],
        );
        let mut trip = create_trip(&["ws_001"]);
        trip.end_date = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();

        let result = valuate_workshop(&participation, Some(&trip), &ValuationPolicy::standard());
        assert!(matches!(result, Err(EngineError::InvalidDateRange { .. })));
    }

    /// WV-007: trip must list the workshop
    #[test]
    fn test_trip_not_serving_workshop_fails() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1"],
        );
        let trip = create_trip(&["ws_002"]);

        match valuate_workshop(&participation, Some(&trip), &ValuationPolicy::standard()) {
            Err(EngineError::InvalidInput {
                entity_id, field, ..
            }) => {
                assert_eq!(entity_id, "spk_001/ws_001");
                assert_eq!(field, "trip.workshop_ids");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// WV-008: negative session rejected with its index
    #[test]
    fn test_negative_session_rejected() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1", "-0.5"],
        );

        match valuate_workshop(&participation, None, &ValuationPolicy::standard()) {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "sessions[1].duration_hours")
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// WV-010: a session too long to value is an error, not a panic
    #[test]
    fn test_oversized_session_rejected() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::ExecutiveSeniorLeadership,
            &["10000000000000000000000000000"],
        );

        match valuate_workshop(&participation, None, &ValuationPolicy::standard()) {
            Err(EngineError::InvalidInput {
                entity_id, field, ..
            }) => {
                assert_eq!(entity_id, "spk_001/ws_001");
                assert_eq!(field, "presentation_hours");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// WV-011: sessions whose sum leaves the Decimal range are rejected
    #[test]
    fn test_session_sum_overflow_rejected() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["70000000000000000000000000000", "70000000000000000000000000000"],
        );

        match valuate_workshop(&participation, None, &ValuationPolicy::standard()) {
            Err(EngineError::InvalidInput { field, .. }) => assert_eq!(field, "sessions"),
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// WV-009: zero sessions is a zero-labor valuation with a warning
    #[test]
    fn test_zero_sessions() {
        let participation =
            create_participation("ws_001", ProfessionalCategory::SeniorSpecialist, &[]);

        let result = valuate_workshop(&participation, None, &ValuationPolicy::standard()).unwrap();

        assert_eq!(result.labor_contribution.to_string(), "0.00");
        assert_eq!(result.total_contribution.to_string(), "0.00");
        assert_eq!(
            result.audit_trace.warnings[0].code,
            ZERO_PRESENTATION_HOURS
        );
    }

    #[test]
    fn test_audit_trace_order_with_travel() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1"],
        );
        let trip = create_trip(&["ws_001"]);

        let result =
            valuate_workshop(&participation, Some(&trip), &ValuationPolicy::standard()).unwrap();

        let rules: Vec<&str> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.rule_id.as_str())
            .collect();
        assert_eq!(
            rules,
            vec![
                "hourly_rate_lookup",
                "labor_valuation",
                "travel_eligibility",
                "travel_duration",
                "travel_cost",
                "travel_allocation"
            ]
        );
        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_same_day_trip_warns() {
        let participation = create_participation(
            "ws_001",
            ProfessionalCategory::SeniorSpecialist,
            &["1"],
        );
        let mut trip = create_trip(&["ws_001"]);
        trip.end_date = trip.start_date;

        let result =
            valuate_workshop(&participation, Some(&trip), &ValuationPolicy::standard()).unwrap();

        // 900 + 0 lodging + 1 × 100 × 0.75
        assert_eq!(result.travel_contribution, dec("975.00"));
        assert!(
            result
                .audit_trace
                .warnings
                .iter()
                .any(|w| w.code == SINGLE_DAY_TRIP)
        );
    }

    #[test]
    fn test_identical_inputs_give_identical_results() {
        let participation = create_participation(
            "ws_a",
            ProfessionalCategory::ExecutiveSeniorLeadership,
            &["0.75", "1.25"],
        );
        let trip = create_trip(&["ws_a", "ws_b", "ws_c"]);
        let policy = ValuationPolicy::standard();

        let first = valuate_workshop(&participation, Some(&trip), &policy).unwrap();
        let second = valuate_workshop(&participation, Some(&trip), &policy).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
