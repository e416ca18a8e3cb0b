//! Multi-workshop travel allocation functionality.
//!
//! A trip that served several workshops has its cost split evenly across
//! them. Shares are settled to the cent: workshops are ordered by id, every
//! workshop but the last receives the even share rounded half away from zero,
//! and the last receives whatever remains of the cent-rounded total. When the
//! rounded shares would leave the last workshop below zero, the others are
//! truncated to the cent instead. The shares therefore sum to the rounded
//! total exactly and none is negative.

use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, WorkshopAllocation};

use super::currency::{round_currency, truncate_currency};

/// The split of one trip's cost across its workshops.
#[derive(Debug, Clone)]
pub struct TravelAllocationResult {
    /// The unrounded even share, `travel_cost / n`.
    pub share: Decimal,
    /// The cent-rounded cost that was split.
    pub allocated_total: Decimal,
    /// One entry per workshop, sorted by workshop id.
    pub allocations: Vec<WorkshopAllocation>,
    /// The audit step recording this allocation.
    pub audit_step: AuditStep,
}

impl TravelAllocationResult {
    /// Returns the amount allocated to a workshop, if it is on the trip.
    pub fn amount_for(&self, workshop_id: &str) -> Option<Decimal> {
        self.allocations
            .iter()
            .find(|a| a.workshop_id == workshop_id)
            .map(|a| a.amount)
    }
}

/// Splits a trip's travel cost evenly across the workshops it served.
///
/// # Errors
///
/// Returns `InvalidInput` if the cost is negative, if no workshop is given,
/// if a workshop id appears more than once, or if the cost is too large for
/// a `Decimal`.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::allocate_travel_cost;
/// use rust_decimal::Decimal;
///
/// let workshops = vec!["ws_c".to_string(), "ws_a".to_string(), "ws_b".to_string()];
/// let result = allocate_travel_cost("trip_001", Decimal::new(1550, 0), &workshops, 1).unwrap();
///
/// let amounts: Vec<String> = result.allocations.iter().map(|a| a.amount.to_string()).collect();
/// assert_eq!(amounts, vec!["516.67", "516.67", "516.66"]);
/// assert_eq!(result.allocations[2].workshop_id, "ws_c");
/// ```
pub fn allocate_travel_cost(
    trip_id: &str,
    travel_cost: Decimal,
    workshop_ids: &[String],
    step_number: u32,
) -> EngineResult<TravelAllocationResult> {
    if travel_cost.is_sign_negative() {
        return Err(EngineError::InvalidInput {
            entity_id: trip_id.to_string(),
            field: "travel_cost".to_string(),
            message: format!("must not be negative, got {}", travel_cost),
        });
    }
    if workshop_ids.is_empty() {
        return Err(EngineError::InvalidInput {
            entity_id: trip_id.to_string(),
            field: "workshop_ids".to_string(),
            message: "a trip must serve at least one workshop".to_string(),
        });
    }

    let ordered: BTreeSet<&str> = workshop_ids.iter().map(String::as_str).collect();
    if ordered.len() != workshop_ids.len() {
        return Err(EngineError::InvalidInput {
            entity_id: trip_id.to_string(),
            field: "workshop_ids".to_string(),
            message: "workshop ids must be unique".to_string(),
        });
    }

    let count = Decimal::from(ordered.len());
    let share = travel_cost / count;
    let allocated_total = round_currency(travel_cost);
    let others_count = count - Decimal::ONE;
    let rounded_share = round_currency(share);
    let settled_share = match rounded_share.checked_mul(others_count) {
        Some(others) if others <= allocated_total => rounded_share,
        _ => truncate_currency(share),
    };

    let mut allocations: Vec<WorkshopAllocation> = ordered
        .iter()
        .map(|id| WorkshopAllocation {
            workshop_id: id.to_string(),
            amount: settled_share,
        })
        .collect();

    // Remainder goes to the last workshop in id order
    let others = settled_share
        .checked_mul(others_count)
        .ok_or_else(|| EngineError::out_of_range(trip_id, "travel_cost"))?;
    if let Some(last) = allocations.last_mut() {
        last.amount = allocated_total - others;
    }

    let audit_step = AuditStep {
        step_number,
        rule_id: "travel_allocation".to_string(),
        rule_name: "Multi-Workshop Travel Allocation".to_string(),
        input: serde_json::json!({
            "trip_id": trip_id,
            "travel_cost": travel_cost.normalize().to_string(),
            "workshop_ids": ordered.iter().collect::<Vec<_>>()
        }),
        output: serde_json::json!({
            "share": share.to_string(),
            "allocations": allocations
                .iter()
                .map(|a| serde_json::json!({
                    "workshop_id": a.workshop_id,
                    "amount": a.amount.to_string()
                }))
                .collect::<Vec<_>>()
        }),
        reasoning: format!(
            "${} ÷ {} workshop(s) = ${} each; remainder settled on '{}'",
            allocated_total,
            ordered.len(),
            settled_share,
            allocations
                .last()
                .map(|a| a.workshop_id.as_str())
                .unwrap_or_default()
        ),
    };

    Ok(TravelAllocationResult {
        share,
        allocated_total,
        allocations,
        audit_step,
    })
}
