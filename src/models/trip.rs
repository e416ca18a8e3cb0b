//! Trip model and related types.
//!
//! A trip is one continuous travel event by a speaker. It may serve several
//! workshops; the caller resolves that link before valuation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Per diem rates for the trip destination, supplied by an external lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerDiemRate {
    /// The location the rates were looked up for.
    pub location: String,
    /// The rate table version or effective date, if the source has one.
    #[serde(default)]
    pub rate_version: Option<String>,
    /// Lodging rate per night (USD).
    pub lodging_rate: Decimal,
    /// Meals and incidental expenses rate per day (USD).
    pub mie_rate: Decimal,
}

/// One continuous travel event covering one or more workshops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Unique identifier for the trip.
    pub id: String,
    /// First day of travel (inclusive).
    pub start_date: NaiveDate,
    /// Last day of travel (inclusive).
    pub end_date: NaiveDate,
    /// Economy the speaker travelled from.
    pub origin_economy: String,
    /// Location the speaker travelled to.
    pub destination_location: String,
    /// Estimated round-trip airfare (USD).
    pub airfare_estimate: Decimal,
    /// Per diem rates for the destination.
    pub per_diem: PerDiemRate,
    /// Travel was reimbursed by the USG or another donor.
    #[serde(default)]
    pub is_reimbursed_elsewhere: bool,
    /// The trip was primarily for purposes unrelated to the program.
    #[serde(default)]
    pub is_primarily_unrelated: bool,
    /// Every workshop this trip served.
    pub workshop_ids: Vec<String>,
}

impl Trip {
    /// Returns true if the trip served the given workshop.
    pub fn serves(&self, workshop_id: &str) -> bool {
        self.workshop_ids.iter().any(|id| id == workshop_id)
    }

    /// Returns true if the trip starts and ends on the same day.
    pub fn is_same_day(&self) -> bool {
        self.start_date == self.end_date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_trip(start: (i32, u32, u32), end: (i32, u32, u32)) -> Trip {
        Trip {
            id: "trip_001".to_string(),
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            origin_economy: "Viet Nam".to_string(),
            destination_location: "Lima, Peru".to_string(),
            airfare_estimate: Decimal::new(900, 0),
            per_diem: PerDiemRate {
                location: "Lima".to_string(),
                rate_version: None,
                lodging_rate: Decimal::new(200, 0),
                mie_rate: Decimal::new(100, 0),
            },
            is_reimbursed_elsewhere: false,
            is_primarily_unrelated: false,
            workshop_ids: vec!["ws_001".to_string(), "ws_002".to_string()],
        }
    }

    #[test]
    fn test_serves_linked_workshop() {
        let trip = create_trip((2025, 1, 1), (2025, 1, 3));
        assert!(trip.serves("ws_002"));
        assert!(!trip.serves("ws_003"));
    }

    #[test]
    fn test_is_same_day() {
        assert!(create_trip((2025, 1, 1), (2025, 1, 1)).is_same_day());
        assert!(!create_trip((2025, 1, 1), (2025, 1, 2)).is_same_day());
    }

    #[test]
    fn test_deserialize_trip_flags_default_to_false() {
        let json = r#"{
            "id": "trip_007",
            "start_date": "2025-05-12",
            "end_date": "2025-05-15",
            "origin_economy": "Chile",
            "destination_location": "Seoul, Korea",
            "airfare_estimate": "1840.00",
            "per_diem": {
                "location": "Seoul",
                "lodging_rate": "251",
                "mie_rate": "128"
            },
            "workshop_ids": ["ws_010"]
        }"#;

        let trip: Trip = serde_json::from_str(json).unwrap();
        assert_eq!(trip.id, "trip_007");
        assert!(!trip.is_reimbursed_elsewhere);
        assert!(!trip.is_primarily_unrelated);
        assert!(trip.per_diem.rate_version.is_none());
        assert_eq!(trip.airfare_estimate, Decimal::new(184000, 2));
    }
}
