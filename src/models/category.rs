//! Professional category model.
//!
//! Category assignment is a staff determination made outside the engine;
//! the engine only consumes the assigned value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// The professional category a speaker is valued under.
///
/// Each category maps to exactly one standardized hourly rate in the
/// active [`ValuationPolicy`](crate::config::ValuationPolicy).
///
/// # Example
///
/// ```
/// use valuation_engine::models::ProfessionalCategory;
///
/// let category: ProfessionalCategory = "Senior Specialist".parse().unwrap();
/// assert_eq!(category, ProfessionalCategory::SeniorSpecialist);
/// assert_eq!(category.code(), "senior_specialist");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfessionalCategory {
    /// Executive / Senior Leadership.
    ExecutiveSeniorLeadership,
    /// Senior Specialist.
    SeniorSpecialist,
}

impl ProfessionalCategory {
    /// All categories, in rate-table order.
    pub const ALL: [ProfessionalCategory; 2] = [
        ProfessionalCategory::ExecutiveSeniorLeadership,
        ProfessionalCategory::SeniorSpecialist,
    ];

    /// Returns the machine code used in requests and policy files.
    pub fn code(&self) -> &'static str {
        match self {
            ProfessionalCategory::ExecutiveSeniorLeadership => "executive_senior_leadership",
            ProfessionalCategory::SeniorSpecialist => "senior_specialist",
        }
    }

    /// Returns the label used on the valuation form.
    pub fn label(&self) -> &'static str {
        match self {
            ProfessionalCategory::ExecutiveSeniorLeadership => "Executive / Senior Leadership",
            ProfessionalCategory::SeniorSpecialist => "Senior Specialist",
        }
    }
}

impl fmt::Display for ProfessionalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ProfessionalCategory {
    type Err = EngineError;

    /// Accepts either the machine code or the form label.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ProfessionalCategory::ALL
            .into_iter()
            .find(|c| c.code() == trimmed || c.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EngineError::UnknownCategory {
                value: s.to_string(),
            })
    }
}
