//! Hourly rate lookup functionality.
//!
//! This module maps a professional category to its standardized hourly rate.

use rust_decimal::Decimal;

use crate::config::ValuationPolicy;
use crate::models::{AuditStep, ProfessionalCategory};

/// The result of a rate lookup, including the rate and audit step.
#[derive(Debug, Clone)]
pub struct RateLookupResult {
    /// The standardized hourly rate.
    pub rate: Decimal,
    /// The audit step recording this lookup.
    pub audit_step: AuditStep,
}

/// Determines the hourly rate for a professional category.
///
/// The lookup is total over [`ProfessionalCategory`]: values outside the
/// enumeration are rejected when the category is parsed, never here.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::rate_for;
/// use valuation_engine::config::ValuationPolicy;
/// use valuation_engine::models::ProfessionalCategory;
/// use rust_decimal::Decimal;
///
/// let policy = ValuationPolicy::standard();
/// let result = rate_for(ProfessionalCategory::SeniorSpecialist, &policy, 1);
/// assert_eq!(result.rate, Decimal::new(13100, 2));
/// ```
pub fn rate_for(
    category: ProfessionalCategory,
    policy: &ValuationPolicy,
    step_number: u32,
) -> RateLookupResult {
    let rate = policy.rate_for(category);

    let audit_step = AuditStep {
        step_number,
        rule_id: "hourly_rate_lookup".to_string(),
        rule_name: "Hourly Rate Lookup".to_string(),
        input: serde_json::json!({
            "category": category.code(),
            "methodology_version": policy.metadata().version
        }),
        output: serde_json::json!({
            "hourly_rate": rate.to_string()
        }),
        reasoning: format!("Standardized rate for '{}': ${}", category.label(), rate),
    };

    RateLookupResult { rate, audit_step }
}
