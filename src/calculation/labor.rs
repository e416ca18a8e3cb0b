//! Labor valuation functionality.
//!
//! This module converts presentation hours and a standardized hourly rate
//! into a labor contribution. Total labor hours count presentation time once,
//! preparation at twice presentation time and follow-up at half presentation time.

use rust_decimal::Decimal;

use crate::config::LaborFactors;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

/// The result of a labor valuation, including the amounts and audit step.
#[derive(Debug, Clone)]
pub struct LaborValuationResult {
    /// Presentation plus preparation plus follow-up hours.
    pub total_labor_hours: Decimal,
    /// Unrounded labor contribution.
    pub amount: Decimal,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates the labor contribution for a participation.
///
/// `amount = presentation_hours × total_multiplier × hourly_rate`. Zero hours
/// is valid and values to zero.
///
/// # Arguments
///
/// * `entity_id` - The participation being valued, for error context
/// * `presentation_hours` - Hours presented or moderated, summed across sessions
/// * `hourly_rate` - The standardized rate for the speaker's category
/// * `factors` - The labor factors of the active policy
/// * `step_number` - The step number for audit trail sequencing
///
/// # Errors
///
/// Returns `InvalidInput` if `presentation_hours` or `hourly_rate` is negative,
/// or if the amount is too large for a `Decimal`.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::calculate_labor_contribution;
/// use valuation_engine::config::ValuationPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = ValuationPolicy::standard();
/// let result = calculate_labor_contribution(
///     "spk_001/ws_001",
///     Decimal::new(4, 0),
///     Decimal::new(14900, 2),
///     policy.labor(),
///     1,
/// )
/// .unwrap();
/// assert_eq!(result.amount, Decimal::new(2086, 0));
/// ```
pub fn calculate_labor_contribution(
    entity_id: &str,
    presentation_hours: Decimal,
    hourly_rate: Decimal,
    factors: &LaborFactors,
    step_number: u32,
) -> EngineResult<LaborValuationResult> {
    if presentation_hours.is_sign_negative() {
        return Err(EngineError::InvalidInput {
            entity_id: entity_id.to_string(),
            field: "presentation_hours".to_string(),
            message: format!("must not be negative, got {}", presentation_hours),
        });
    }
    if hourly_rate.is_sign_negative() {
        return Err(EngineError::InvalidInput {
            entity_id: entity_id.to_string(),
            field: "hourly_rate".to_string(),
            message: format!("must not be negative, got {}", hourly_rate),
        });
    }

    let multiplier = factors.total_multiplier();
    let total_labor_hours = presentation_hours
        .checked_mul(multiplier)
        .ok_or_else(|| EngineError::out_of_range(entity_id, "presentation_hours"))?;
    let amount = total_labor_hours
        .checked_mul(hourly_rate)
        .ok_or_else(|| EngineError::out_of_range(entity_id, "presentation_hours"))?;

    let audit_step = AuditStep {
        step_number,
        rule_id: "labor_valuation".to_string(),
        rule_name: "Labor Valuation".to_string(),
        input: serde_json::json!({
            "presentation_hours": presentation_hours.normalize().to_string(),
            "hourly_rate": hourly_rate.normalize().to_string(),
            "presentation_factor": factors.presentation.normalize().to_string(),
            "preparation_factor": factors.preparation.normalize().to_string(),
            "follow_up_factor": factors.follow_up.normalize().to_string()
        }),
        output: serde_json::json!({
            "total_labor_hours": total_labor_hours.normalize().to_string(),
            "amount": amount.normalize().to_string()
        }),
        reasoning: format!(
            "{}h × {} = {}h total labor; {}h × ${} = ${}",
            presentation_hours.normalize(),
            multiplier.normalize(),
            total_labor_hours.normalize(),
            total_labor_hours.normalize(),
            hourly_rate.normalize(),
            amount.normalize()
        ),
    };

    Ok(LaborValuationResult {
        total_labor_hours,
        amount,
        audit_step,
    })
}
