//! Request types for the Valuation Engine API.
//!
//! This module defines the JSON request structures for the valuation
//! endpoints. Categories arrive as free text and are parsed on conversion.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{PerDiemRate, Session, Trip, ValuationInput, WorkshopParticipation};

/// Request body for the `/valuate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValuationRequest {
    /// The speaker's participation in one workshop.
    pub participation: ParticipationRequest,
    /// The trip linked to the participation, if any.
    #[serde(default)]
    pub trip: Option<TripRequest>,
}

/// Request body for the `/valuate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchValuationRequest {
    /// The records to value, in order.
    pub inputs: Vec<ValuationRequest>,
}

/// Participation information in a valuation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipationRequest {
    /// Identifier of the speaker.
    pub speaker_id: String,
    /// Identifier of the workshop.
    pub workshop_id: String,
    /// The professional category, as a code (e.g., "senior_specialist") or label.
    pub category: String,
    /// Delivered sessions.
    #[serde(default)]
    pub sessions: Vec<SessionRequest>,
    /// Why the category was assigned.
    #[serde(default)]
    pub category_rationale: Option<String>,
    /// Supporting documentation links.
    #[serde(default)]
    pub documentation_links: Vec<String>,
}

/// Session information in a valuation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Delivered time in hours.
    pub duration_hours: Decimal,
}

/// Trip information in a valuation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Unique identifier for the trip.
    pub id: String,
    /// First day of travel.
    pub start_date: NaiveDate,
    /// Last day of travel.
    pub end_date: NaiveDate,
    /// The economy the speaker travelled from.
    pub origin_economy: String,
    /// Where the workshops were held.
    pub destination_location: String,
    /// Estimated round-trip airfare.
    pub airfare_estimate: Decimal,
    /// Per diem rates for the destination.
    pub per_diem: PerDiemRequest,
    /// Whether the trip was paid for by the USG or another donor.
    #[serde(default)]
    pub is_reimbursed_elsewhere: bool,
    /// Whether the trip was mainly for unrelated business.
    #[serde(default)]
    pub is_primarily_unrelated: bool,
    /// The workshops this trip served.
    pub workshop_ids: Vec<String>,
}

/// Per diem information in a valuation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerDiemRequest {
    /// The per diem location.
    pub location: String,
    /// The published rate table version.
    #[serde(default)]
    pub rate_version: Option<String>,
    /// Maximum lodging rate per night.
    pub lodging_rate: Decimal,
    /// Meals and incidental expenses rate per day.
    pub mie_rate: Decimal,
}

impl TryFrom<ValuationRequest> for ValuationInput {
    type Error = EngineError;

    fn try_from(req: ValuationRequest) -> EngineResult<Self> {
        Ok(ValuationInput {
            participation: req.participation.try_into()?,
            trip: req.trip.map(Into::into),
        })
    }
}

impl TryFrom<ParticipationRequest> for WorkshopParticipation {
    type Error = EngineError;

    fn try_from(req: ParticipationRequest) -> EngineResult<Self> {
        Ok(WorkshopParticipation {
            category: req.category.parse()?,
            speaker_id: req.speaker_id,
            workshop_id: req.workshop_id,
            sessions: req
                .sessions
                .into_iter()
                .map(|s| Session {
                    duration_hours: s.duration_hours,
                })
                .collect(),
            category_rationale: req.category_rationale,
            documentation_links: req.documentation_links,
        })
    }
}

impl From<TripRequest> for Trip {
    fn from(req: TripRequest) -> Self {
        Trip {
            id: req.id,
            start_date: req.start_date,
            end_date: req.end_date,
            origin_economy: req.origin_economy,
            destination_location: req.destination_location,
            airfare_estimate: req.airfare_estimate,
            per_diem: req.per_diem.into(),
            is_reimbursed_elsewhere: req.is_reimbursed_elsewhere,
            is_primarily_unrelated: req.is_primarily_unrelated,
            workshop_ids: req.workshop_ids,
        }
    }
}

impl From<PerDiemRequest> for PerDiemRate {
    fn from(req: PerDiemRequest) -> Self {
        PerDiemRate {
            location: req.location,
            rate_version: req.rate_version,
            lodging_rate: req.lodging_rate,
            mie_rate: req.mie_rate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProfessionalCategory;

    const REQUEST_JSON: &str = r#"{
        "participation": {
            "speaker_id": "spk_001",
            "workshop_id": "ws_001",
            "category": "Executive / Senior Leadership",
            "sessions": [{"duration_hours": "1.5"}, {"duration_hours": "2.5"}]
        },
        "trip": {
            "id": "trip_001",
            "start_date": "2025-01-01",
            "end_date": "2025-01-03",
            "origin_economy": "Japan",
            "destination_location": "Lima, Peru",
            "airfare_estimate": "900",
            "per_diem": {"location": "Lima", "lodging_rate": "200", "mie_rate": "100"},
            "workshop_ids": ["ws_001"]
        }
    }"#;

    #[test]
    fn test_deserialize_valuation_request() {
        let request: ValuationRequest = serde_json::from_str(REQUEST_JSON).unwrap();

        assert_eq!(request.participation.speaker_id, "spk_001");
        assert_eq!(request.participation.sessions.len(), 2);
        let trip = request.trip.unwrap();
        assert!(!trip.is_reimbursed_elsewhere);
        assert!(trip.per_diem.rate_version.is_none());
    }

    #[test]
    fn test_conversion_parses_category_label() {
        let request: ValuationRequest = serde_json::from_str(REQUEST_JSON).unwrap();
        let input: ValuationInput = request.try_into().unwrap();

        assert_eq!(
            input.participation.category,
            ProfessionalCategory::ExecutiveSeniorLeadership
        );
        assert_eq!(input.participation.presentation_hours(), Some(Decimal::new(4, 0)));
        assert_eq!(input.trip.unwrap().id, "trip_001");
    }

    #[test]
    fn test_conversion_rejects_unknown_category() {
        let mut request: ValuationRequest = serde_json::from_str(REQUEST_JSON).unwrap();
        request.participation.category = "Junior Analyst".to_string();

        let result: EngineResult<ValuationInput> = request.try_into();
        match result {
            Err(EngineError::UnknownCategory { value }) => assert_eq!(value, "Junior Analyst"),
            other => panic!("Expected UnknownCategory, got {:?}", other),
        }
    }
}
