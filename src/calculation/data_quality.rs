//! Data-quality checks on valuation inputs.
//!
//! None of these checks stop a valuation. They flag records a reviewer
//! should confirm before the values go into the system of record.

use rust_decimal::Decimal;

use crate::models::{AuditWarning, TravelEligibility, Trip, WorkshopParticipation};

/// Warning code for a participation with no presentation time.
pub const ZERO_PRESENTATION_HOURS: &str = "ZERO_PRESENTATION_HOURS";
/// Warning code for eligible travel with no airfare.
pub const ZERO_AIRFARE: &str = "ZERO_AIRFARE";
/// Warning code for eligible travel that starts and ends on the same day.
pub const SINGLE_DAY_TRIP: &str = "SINGLE_DAY_TRIP";
/// Warning code for a category assignment without a rationale.
pub const MISSING_CATEGORY_RATIONALE: &str = "MISSING_CATEGORY_RATIONALE";
/// Warning code for a participation without documentation links.
pub const MISSING_DOCUMENTATION: &str = "MISSING_DOCUMENTATION";

fn warning(code: &str, message: &str, severity: &str) -> AuditWarning {
    AuditWarning {
        code: code.to_string(),
        message: message.to_string(),
        severity: severity.to_string(),
    }
}

/// Checks a participation and its trip for incomplete or suspicious data.
///
/// Trip checks only run for travel that is actually valued.
pub fn check_data_quality(
    participation: &WorkshopParticipation,
    trip: Option<&Trip>,
    eligibility: TravelEligibility,
) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if participation.presentation_hours() == Some(Decimal::ZERO) {
        warnings.push(warning(
            ZERO_PRESENTATION_HOURS,
            "Presentation hours are zero.",
            "medium",
        ));
    }

    if let Some(trip) = trip.filter(|_| eligibility.is_eligible()) {
        if trip.airfare_estimate == Decimal::ZERO {
            warnings.push(warning(
                ZERO_AIRFARE,
                "Travel marked eligible but airfare is zero.",
                "medium",
            ));
        }
        if trip.is_same_day() {
            warnings.push(warning(
                SINGLE_DAY_TRIP,
                "Trip duration is one day; verify travel dates.",
                "low",
            ));
        }
    }

    let has_rationale = participation
        .category_rationale
        .as_deref()
        .is_some_and(|r| !r.trim().is_empty());
    if !has_rationale {
        warnings.push(warning(
            MISSING_CATEGORY_RATIONALE,
            "Category assignment rationale is missing.",
            "high",
        ));
    }

    if participation
        .documentation_links
        .iter()
        .all(|link| link.trim().is_empty())
    {
        warnings.push(warning(
            MISSING_DOCUMENTATION,
            "Documentation links are missing.",
            "high",
        ));
    }

    warnings
}
