//! Calculation logic for the valuation engine.
//!
//! This module contains all the calculation functions for valuing a
//! speaker's contribution: hourly rate lookup, labor valuation, travel
//! eligibility, travel duration, travel cost, multi-workshop allocation,
//! data-quality checks, and the per-workshop aggregation that ties them together.

mod allocation;
mod currency;
pub mod data_quality;
mod labor;
mod rate_table;
mod travel_cost;
mod travel_duration;
mod travel_eligibility;
mod trip_valuation;
mod workshop_valuation;

pub use allocation::{TravelAllocationResult, allocate_travel_cost};
pub use currency::{CURRENCY_DECIMAL_PLACES, round_currency};
pub use data_quality::check_data_quality;
pub use labor::{LaborValuationResult, calculate_labor_contribution};
pub use rate_table::{RateLookupResult, rate_for};
pub use travel_cost::{TravelCostResult, calculate_travel_cost};
pub use travel_duration::{TravelDurationResult, calculate_travel_duration};
pub use travel_eligibility::{TravelEligibilityResult, determine_travel_eligibility};
pub use trip_valuation::{TripCalculation, calculate_trip, valuate_trip};
pub use workshop_valuation::valuate_workshop;
