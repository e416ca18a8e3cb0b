//! Configuration types for the valuation policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML policy files, and the [`ValuationPolicy`]
//! that the engine is constructed with.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::ProfessionalCategory;

use super::constants;

/// Metadata about the methodology a policy implements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodologyMetadata {
    /// The methodology version (e.g., "v1.0.0").
    pub version: String,
    /// Path or URL of the methodology document.
    pub document: String,
    /// The date the methodology took effect.
    #[serde(default)]
    pub effective_date: Option<NaiveDate>,
}

/// Standardized hourly rates by professional category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyRates {
    /// Rate for Executive / Senior Leadership.
    pub executive_senior_leadership: Decimal,
    /// Rate for Senior Specialist.
    pub senior_specialist: Decimal,
}

impl HourlyRates {
    /// Returns the hourly rate for a category.
    pub fn rate_for(&self, category: ProfessionalCategory) -> Decimal {
        match category {
            ProfessionalCategory::ExecutiveSeniorLeadership => self.executive_senior_leadership,
            ProfessionalCategory::SeniorSpecialist => self.senior_specialist,
        }
    }
}

/// Rates configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    /// Hourly rates by category.
    pub hourly_rates: HourlyRates,
}

/// Labor time scaling factors, each a multiple of presentation hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaborFactors {
    /// Presentation time.
    pub presentation: Decimal,
    /// Preparation time.
    pub preparation: Decimal,
    /// Follow-up time.
    pub follow_up: Decimal,
}

impl LaborFactors {
    /// Total labor hours per presentation hour.
    pub fn total_multiplier(&self) -> Decimal {
        self.presentation + self.preparation + self.follow_up
    }
}

/// Travel valuation factors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelFactors {
    /// Travel days assumed per trip.
    pub standard_travel_days: u32,
    /// Share of the M&IE rate paid on a travel day.
    pub travel_day_mie_factor: Decimal,
    /// Share of the M&IE rate paid on a full day in location.
    pub full_day_mie_factor: Decimal,
    /// Share of the lodging rate paid per night.
    pub lodging_factor: Decimal,
}

/// Multipliers configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct MultipliersConfig {
    /// Labor time scaling.
    pub labor: LaborFactors,
    /// Travel assumptions.
    pub travel: TravelFactors,
}

/// The complete, immutable valuation policy.
///
/// The engine is constructed with one policy and never mutates it.
///
/// # Example
///
/// ```
/// use valuation_engine::config::ValuationPolicy;
/// use valuation_engine::models::ProfessionalCategory;
/// use rust_decimal::Decimal;
///
/// let policy = ValuationPolicy::standard();
/// assert_eq!(
///     policy.rate_for(ProfessionalCategory::ExecutiveSeniorLeadership),
///     Decimal::new(14900, 2)
/// );
/// assert_eq!(policy.labor().total_multiplier(), Decimal::new(35, 1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValuationPolicy {
    metadata: MethodologyMetadata,
    hourly_rates: HourlyRates,
    labor: LaborFactors,
    travel: TravelFactors,
}

impl ValuationPolicy {
    /// Creates a policy from its component parts, rejecting unusable values.
    pub fn new(
        metadata: MethodologyMetadata,
        hourly_rates: HourlyRates,
        labor: LaborFactors,
        travel: TravelFactors,
    ) -> EngineResult<Self> {
        let policy = Self {
            metadata,
            hourly_rates,
            labor,
            travel,
        };
        policy.validate()?;
        Ok(policy)
    }

    /// The policy built from the methodology constants.
    pub fn standard() -> Self {
        Self {
            metadata: MethodologyMetadata {
                version: constants::METHODOLOGY_VERSION.to_string(),
                document: constants::METHODOLOGY_DOC.to_string(),
                effective_date: None,
            },
            hourly_rates: HourlyRates {
                executive_senior_leadership: constants::EXECUTIVE_SENIOR_LEADERSHIP_HOURLY_RATE,
                senior_specialist: constants::SENIOR_SPECIALIST_HOURLY_RATE,
            },
            labor: LaborFactors {
                presentation: constants::PRESENTATION_FACTOR,
                preparation: constants::PREPARATION_FACTOR,
                follow_up: constants::FOLLOW_UP_FACTOR,
            },
            travel: TravelFactors {
                standard_travel_days: constants::STANDARD_TRAVEL_DAYS,
                travel_day_mie_factor: constants::TRAVEL_DAY_MIE_FACTOR,
                full_day_mie_factor: constants::FULL_DAY_MIE_FACTOR,
                lodging_factor: constants::LODGING_FACTOR,
            },
        }
    }

    /// Returns the methodology metadata.
    pub fn metadata(&self) -> &MethodologyMetadata {
        &self.metadata
    }

    /// Returns the hourly rate table.
    pub fn hourly_rates(&self) -> &HourlyRates {
        &self.hourly_rates
    }

    /// Returns the hourly rate for a category.
    pub fn rate_for(&self, category: ProfessionalCategory) -> Decimal {
        self.hourly_rates.rate_for(category)
    }

    /// Returns the labor factors.
    pub fn labor(&self) -> &LaborFactors {
        &self.labor
    }

    /// Returns the travel factors.
    pub fn travel(&self) -> &TravelFactors {
        &self.travel
    }

    fn validate(&self) -> EngineResult<()> {
        let decimals = [
            (
                "hourly_rates.executive_senior_leadership",
                self.hourly_rates.executive_senior_leadership,
            ),
            (
                "hourly_rates.senior_specialist",
                self.hourly_rates.senior_specialist,
            ),
            ("labor.presentation", self.labor.presentation),
            ("labor.preparation", self.labor.preparation),
            ("labor.follow_up", self.labor.follow_up),
            (
                "travel.travel_day_mie_factor",
                self.travel.travel_day_mie_factor,
            ),
            ("travel.full_day_mie_factor", self.travel.full_day_mie_factor),
            ("travel.lodging_factor", self.travel.lodging_factor),
        ];

        if let Some((field, value)) = decimals.iter().find(|(_, v)| v.is_sign_negative()) {
            return Err(EngineError::InvalidPolicy {
                field: field.to_string(),
                message: format!("must not be negative, got {}", value),
            });
        }

        let labor_total = self
            .labor
            .presentation
            .checked_add(self.labor.preparation)
            .and_then(|total| total.checked_add(self.labor.follow_up));
        if labor_total.is_none() {
            return Err(EngineError::InvalidPolicy {
                field: "labor".to_string(),
                message: "factors are too large to sum".to_string(),
            });
        }

        if self.travel.standard_travel_days == 0 {
            return Err(EngineError::InvalidPolicy {
                field: "travel.standard_travel_days".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

impl Default for ValuationPolicy {
    fn default() -> Self {
        Self::standard()
    }
}
