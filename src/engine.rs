//! The valuation engine entry point.
//!
//! [`ValuationEngine`] owns an immutable [`ValuationPolicy`] and exposes the
//! per-workshop, batch and per-trip valuations. It holds no other state, so
//! one engine can be shared freely across threads.

use std::sync::Arc;

use tracing::info;

use crate::calculation::{valuate_trip, valuate_workshop};
use crate::config::ValuationPolicy;
use crate::error::EngineResult;
use crate::models::{Trip, TripValuation, ValuationInput, ValuationResult};

/// Values speaker contributions against a fixed policy.
#[derive(Debug, Clone)]
pub struct ValuationEngine {
    policy: Arc<ValuationPolicy>,
}

impl ValuationEngine {
    /// Creates an engine for the given policy.
    pub fn new(policy: ValuationPolicy) -> Self {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// Returns the policy this engine values against.
    pub fn policy(&self) -> &ValuationPolicy {
        &self.policy
    }

    /// Values one participation and its linked trip.
    ///
    /// # Examples
    ///
    /// ```
    /// use valuation_engine::config::ValuationPolicy;
    /// use valuation_engine::engine::ValuationEngine;
    /// use valuation_engine::models::{
    ///     ProfessionalCategory, Session, ValuationInput, WorkshopParticipation,
    /// };
    /// use rust_decimal::Decimal;
    ///
    /// let engine = ValuationEngine::new(ValuationPolicy::standard());
    /// let input = ValuationInput {
    ///     participation: WorkshopParticipation {
    ///         speaker_id: "spk_001".to_string(),
    ///         workshop_id: "ws_001".to_string(),
    ///         category: ProfessionalCategory::SeniorSpecialist,
    ///         sessions: vec![Session { duration_hours: Decimal::new(2, 0) }],
    ///         category_rationale: None,
    ///         documentation_links: vec![],
    ///     },
    ///     trip: None,
    /// };
    ///
    /// let result = engine.valuate(&input).unwrap();
    /// assert_eq!(result.total_contribution.to_string(), "917.00");
    /// ```
    pub fn valuate(&self, input: &ValuationInput) -> EngineResult<ValuationResult> {
        let result = valuate_workshop(&input.participation, input.trip.as_ref(), &self.policy)?;

        info!(
            speaker_id = %result.speaker_id,
            workshop_id = %result.workshop_id,
            total_contribution = %result.total_contribution,
            "Valuation completed"
        );

        Ok(result)
    }

    /// Values each input independently, in order.
    ///
    /// Fails on the first invalid input; no partial results are returned.
    pub fn valuate_all(&self, inputs: &[ValuationInput]) -> EngineResult<Vec<ValuationResult>> {
        let results = inputs
            .iter()
            .map(|input| self.valuate(input))
            .collect::<EngineResult<Vec<_>>>()?;

        info!(count = results.len(), "Batch valuation completed");
        Ok(results)
    }

    /// Values a trip and reports every workshop's share.
    pub fn valuate_trip(&self, trip: &Trip) -> EngineResult<TripValuation> {
        let valuation = valuate_trip(trip, &self.policy)?;

        info!(
            trip_id = %valuation.trip_id,
            total_travel_cost = %valuation.total_travel_cost,
            workshops = valuation.allocations.len(),
            "Trip valuation completed"
        );

        Ok(valuation)
    }
}

impl Default for ValuationEngine {
    fn default() -> Self {
        Self::new(ValuationPolicy::standard())
    }
}
