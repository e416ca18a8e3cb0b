//! Valuation result models.
//!
//! This module contains the [`ValuationResult`] type and its associated structures
//! that capture all outputs from a workshop valuation, including the labor and
//! travel breakdowns, the travel allocation and the audit trace.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProfessionalCategory;

/// Why a participation did or did not receive a travel contribution.
///
/// # Example
///
/// ```
/// use valuation_engine::models::TravelEligibility;
///
/// assert!(TravelEligibility::Eligible.is_eligible());
/// assert!(!TravelEligibility::ReimbursedElsewhere.is_eligible());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TravelEligibility {
    /// No trip is linked to the participation.
    NoTrip,
    /// The trip was reimbursed by the USG or another donor.
    ReimbursedElsewhere,
    /// The trip was primarily for unrelated purposes.
    PrimarilyUnrelated,
    /// The trip was privately funded and is valued.
    Eligible,
}

impl TravelEligibility {
    /// Returns true if travel is valued.
    pub fn is_eligible(&self) -> bool {
        matches!(self, TravelEligibility::Eligible)
    }
}

/// The labor side of a valuation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborBreakdown {
    /// The category the labor was valued under.
    pub category: ProfessionalCategory,
    /// The standardized hourly rate for the category.
    pub hourly_rate: Decimal,
    /// Hours spent presenting or moderating.
    pub presentation_hours: Decimal,
    /// Presentation plus preparation plus follow-up hours.
    pub total_labor_hours: Decimal,
    /// Unrounded labor contribution.
    pub amount: Decimal,
}

/// One workshop's share of a trip's travel cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkshopAllocation {
    /// The workshop receiving the share.
    pub workshop_id: String,
    /// The allocated amount in USD, to the cent.
    pub amount: Decimal,
}

/// The travel side of a valuation.
///
/// Costs are unrounded; `allocated_travel` is the cent-exact share
/// that becomes the travel contribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelBreakdown {
    /// The trip that was valued.
    pub trip_id: String,
    /// Inclusive day count of the trip.
    pub eligible_days: u32,
    /// Nights of lodging.
    pub lodging_nights: u32,
    /// Lodging nights valued at the lodging rate.
    pub lodging_cost: Decimal,
    /// M&IE for the outbound and return travel days.
    pub mie_travel_days_cost: Decimal,
    /// M&IE for full days in location.
    pub mie_full_days_cost: Decimal,
    /// Airfare plus lodging plus M&IE.
    pub total_travel_cost: Decimal,
    /// Number of workshops the trip cost is split across.
    pub workshops_on_trip: u32,
    /// This workshop's share of the trip cost.
    pub allocated_travel: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A data-quality warning generated during valuation.
///
/// Warnings never block a valuation but flag records a reviewer
/// should look at before entering them in the system of record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a valuation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during valuation.
    pub warnings: Vec<AuditWarning>,
}

/// The valuation of one speaker's participation in one workshop.
///
/// The three contribution amounts are rounded to the cent and
/// `total_contribution` is always `labor_contribution + travel_contribution`.
///
/// # Example
///
/// ```
/// use valuation_engine::models::{
///     AuditTrace, LaborBreakdown, ProfessionalCategory, TravelEligibility, ValuationResult,
/// };
/// use rust_decimal::Decimal;
///
/// let result = ValuationResult {
///     workshop_id: "ws_001".to_string(),
///     speaker_id: "spk_001".to_string(),
///     labor_contribution: Decimal::new(208600, 2),
///     travel_contribution: Decimal::new(0, 2),
///     total_contribution: Decimal::new(208600, 2),
///     methodology_version: "v1.0.0".to_string(),
///     labor: LaborBreakdown {
///         category: ProfessionalCategory::ExecutiveSeniorLeadership,
///         hourly_rate: Decimal::new(14900, 2),
///         presentation_hours: Decimal::new(4, 0),
///         total_labor_hours: Decimal::new(140, 1),
///         amount: Decimal::new(2086000, 3),
///     },
///     travel_eligibility: TravelEligibility::NoTrip,
///     travel: None,
///     audit_trace: AuditTrace::default(),
/// };
/// assert_eq!(result.total_contribution, result.labor_contribution + result.travel_contribution);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationResult {
    /// The workshop the contribution is attributed to.
    pub workshop_id: String,
    /// The speaker who made the contribution.
    pub speaker_id: String,
    /// Labor contribution in USD.
    pub labor_contribution: Decimal,
    /// Allocated travel contribution in USD.
    pub travel_contribution: Decimal,
    /// Labor plus travel in USD.
    pub total_contribution: Decimal,
    /// The methodology version the valuation was made under.
    pub methodology_version: String,
    /// Labor calculation details.
    pub labor: LaborBreakdown,
    /// The travel eligibility decision.
    pub travel_eligibility: TravelEligibility,
    /// Travel calculation details, present only for eligible travel.
    pub travel: Option<TravelBreakdown>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

/// The valuation of a trip on its own, with every workshop's share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripValuation {
    /// The trip that was valued.
    pub trip_id: String,
    /// Inclusive day count of the trip.
    pub eligible_days: u32,
    /// Nights of lodging.
    pub lodging_nights: u32,
    /// Lodging nights valued at the lodging rate.
    pub lodging_cost: Decimal,
    /// M&IE for the outbound and return travel days.
    pub mie_travel_days_cost: Decimal,
    /// M&IE for full days in location.
    pub mie_full_days_cost: Decimal,
    /// Airfare plus lodging plus M&IE, rounded to the cent.
    pub total_travel_cost: Decimal,
    /// Shares sorted by workshop id; they sum to `total_travel_cost`.
    pub allocations: Vec<WorkshopAllocation>,
    /// Audit trace of the trip calculation.
    pub audit_trace: AuditTrace,
}
