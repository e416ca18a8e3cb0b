//! Fixed policy constants of the OT5 / PSE-4 valuation methodology.
//!
//! These values are established by the approved methodology and remain
//! fixed for the duration of the project unless formally revised. A revision
//! is made here (for the built-in policy) or in a new policy directory.

use rust_decimal::Decimal;

/// Version of the methodology the built-in policy implements.
pub const METHODOLOGY_VERSION: &str = "v1.0.0";

/// Document describing the methodology.
pub const METHODOLOGY_DOC: &str = "docs/ot5_methodology.md";

/// Hourly rate for Executive / Senior Leadership (USD 149.00).
pub const EXECUTIVE_SENIOR_LEADERSHIP_HOURLY_RATE: Decimal =
    Decimal::from_parts(14900, 0, 0, false, 2);

/// Hourly rate for Senior Specialist (USD 131.00).
pub const SENIOR_SPECIALIST_HOURLY_RATE: Decimal = Decimal::from_parts(13100, 0, 0, false, 2);

/// Presentation time counted once.
pub const PRESENTATION_FACTOR: Decimal = Decimal::from_parts(10, 0, 0, false, 1);

/// Preparation time as a multiple of presentation time.
pub const PREPARATION_FACTOR: Decimal = Decimal::from_parts(20, 0, 0, false, 1);

/// Follow-up time as a multiple of presentation time.
pub const FOLLOW_UP_FACTOR: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// Total labor hours per presentation hour (presentation + preparation + follow-up).
///
/// Derived from the three factors above and kept as a reference value for
/// the built-in policy. Valuation always uses `LaborFactors::total_multiplier`,
/// so a loaded policy with revised factors is not held to this number.
pub const TOTAL_LABOR_HOURS_MULTIPLIER: Decimal = Decimal::from_parts(35, 0, 0, false, 1);

/// Travel days assumed per trip (outbound + return).
pub const STANDARD_TRAVEL_DAYS: u32 = 2;

/// Share of the M&IE rate paid on a travel day.
pub const TRAVEL_DAY_MIE_FACTOR: Decimal = Decimal::from_parts(75, 0, 0, false, 2);

/// Share of the M&IE rate paid on a full day in location.
pub const FULL_DAY_MIE_FACTOR: Decimal = Decimal::from_parts(100, 0, 0, false, 2);

/// Share of the lodging rate paid per night.
pub const LODGING_FACTOR: Decimal = Decimal::from_parts(100, 0, 0, false, 2);
