//! Valuation Engine for OT5 Private Sector Engagement reporting
//!
//! This crate computes the USD value of a private-sector speaker's in-kind
//! contribution to a capacity-building workshop: labor valued from an hourly
//! rate table and presentation time, plus privately funded travel valued from
//! airfare and per diem and split across the workshops a trip served.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
