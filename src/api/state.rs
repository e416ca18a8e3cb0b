//! Application state for the Valuation Engine API.

use crate::engine::ValuationEngine;

/// Shared application state.
///
/// Holds the engine, and through it the policy loaded at startup.
#[derive(Clone)]
pub struct AppState {
    engine: ValuationEngine,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: ValuationEngine) -> Self {
        Self { engine }
    }

    /// Returns a reference to the engine.
    pub fn engine(&self) -> &ValuationEngine {
        &self.engine
    }
}
