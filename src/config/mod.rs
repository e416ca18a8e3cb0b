//! Valuation policy configuration.
//!
//! This module provides the immutable [`ValuationPolicy`] the engine runs
//! under, the named methodology constants it is built from, and a loader
//! for policy versions stored as YAML files.
//!
//! # Example
//!
//! ```no_run
//! use valuation_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/ot5").unwrap();
//! println!("Methodology: {}", loader.policy().metadata().version);
//! ```

pub mod constants;
mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{
    HourlyRates, LaborFactors, MethodologyMetadata, MultipliersConfig, RatesConfig,
    TravelFactors, ValuationPolicy,
};
