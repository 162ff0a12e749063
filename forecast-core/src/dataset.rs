//! One-shot assembly of the immutable observation snapshot.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde_json::Value;
use tracing::info;

use crate::error::PipelineError;
use crate::ingest::{ingest, normalize};
use crate::model::Observation;

/// The process-wide forecast snapshot.
///
/// Built exactly once per session from the raw payload and never
/// mutated afterward; a fresh fetch builds a whole new `Dataset`
/// rather than patching this one. Derivation functions borrow it
/// freely, there is no writer to synchronize with.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    observations: Vec<Observation>,
    cities: Vec<String>,
}

impl Dataset {
    /// Fold the normalizer over the ingested payload.
    ///
    /// `cities` is derived as the distinct city names in order of
    /// first appearance, which is also the order the selection
    /// control displays them in. A repeated `(city, timestamp)` pair
    /// is a data-quality failure and aborts assembly.
    pub fn assemble(payload: &Value) -> Result<Self, PipelineError> {
        let rows = ingest(payload)?;

        let mut observations = Vec::with_capacity(rows.len());
        let mut cities: Vec<String> = Vec::new();
        let mut seen: HashSet<(String, NaiveDateTime)> = HashSet::new();

        for row in rows {
            let obs = normalize(row)?;

            if !seen.insert((obs.city.clone(), obs.timestamp)) {
                return Err(PipelineError::DuplicateObservation {
                    city: obs.city.clone(),
                    timestamp: obs.formatted_time(),
                });
            }

            if !cities.iter().any(|c| c == &obs.city) {
                cities.push(obs.city.clone());
            }

            observations.push(obs);
        }

        info!(
            observations = observations.len(),
            cities = cities.len(),
            "assembled forecast dataset"
        );

        Ok(Self { observations, cities })
    }

    /// All observations in payload order.
    #[must_use]
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Distinct city names in first-seen order.
    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Whether `city` is a member of the closed city set.
    #[must_use]
    pub fn has_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }
}
