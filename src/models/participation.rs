//! Workshop participation model and related types.
//!
//! This module defines the Session and WorkshopParticipation structs for
//! representing one speaker's recorded involvement in one workshop.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::ProfessionalCategory;

/// A single presentation or moderation slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Length of the slot in hours.
    pub duration_hours: Decimal,
}

/// One speaker's involvement in one workshop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkshopParticipation {
    /// Identifier of the speaker or moderator.
    pub speaker_id: String,
    /// Identifier of the workshop.
    pub workshop_id: String,
    /// The staff-assigned professional category.
    pub category: ProfessionalCategory,
    /// Sessions presented or moderated, in agenda order.
    #[serde(default)]
    pub sessions: Vec<Session>,
    /// Brief justification for the category assignment.
    #[serde(default)]
    pub category_rationale: Option<String>,
    /// Agenda, profile, fare and per diem source links.
    #[serde(default)]
    pub documentation_links: Vec<String>,
}

impl WorkshopParticipation {
    /// Returns the identifier used in error and audit context.
    ///
    /// # Examples
    ///
    /// ```
    /// use valuation_engine::models::{ProfessionalCategory, WorkshopParticipation};
    ///
    /// let participation = WorkshopParticipation {
    ///     speaker_id: "spk_001".to_string(),
    ///     workshop_id: "ws_001".to_string(),
    ///     category: ProfessionalCategory::SeniorSpecialist,
    ///     sessions: vec![],
    ///     category_rationale: None,
    ///     documentation_links: vec![],
    /// };
    /// assert_eq!(participation.entity_id(), "spk_001/ws_001");
    /// ```
    pub fn entity_id(&self) -> String {
        format!("{}/{}", self.speaker_id, self.workshop_id)
    }

    /// Total time spent presenting or moderating, summed across sessions.
    ///
    /// A participation with no sessions has zero presentation hours. Returns
    /// `None` if the sum does not fit in a `Decimal`.
    pub fn presentation_hours(&self) -> Option<Decimal> {
        self.sessions
            .iter()
            .try_fold(Decimal::ZERO, |total, s| total.checked_add(s.duration_hours))
    }
}
