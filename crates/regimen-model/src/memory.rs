//! In-memory observation source
//!
//! A complete `ObservationSource` over a plain observation list. Filtering,
//! ordering and the evaluation-date cutoff are applied locally, matching
//! the contract a database-backed source would honor. Used by tests and by
//! the CLI's JSON-file mode.

use crate::source::{FetchOrdering, ObservationFilter, ObservationSource, SourceResult};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use log::debug;
use parking_lot::RwLock;
use regimen_types::{Observation, PatientId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One patient's observations, as loaded from a fixture file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Patient the observations belong to
    pub patient: PatientId,
    /// Observations in any order; the source orders them per fetch
    pub observations: Vec<Observation>,
}

/// Observation source backed by an in-process map.
#[derive(Debug, Default)]
pub struct InMemorySource {
    records: RwLock<HashMap<PatientId, Vec<Observation>>>,
}

impl InMemorySource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a source from patient records.
    pub fn from_records(records: impl IntoIterator<Item = PatientRecord>) -> Self {
        let source = Self::new();
        for record in records {
            for obs in record.observations {
                source.add(record.patient, obs);
            }
        }
        source
    }

    /// Add one observation for a patient.
    pub fn add(&self, patient: PatientId, obs: Observation) {
        self.records.write().entry(patient).or_default().push(obs);
    }

    /// Patients with at least one observation.
    pub fn patients(&self) -> Vec<PatientId> {
        let mut patients: Vec<PatientId> = self.records.read().keys().copied().collect();
        patients.sort();
        patients
    }
}

#[async_trait]
impl ObservationSource for InMemorySource {
    async fn patient_observations(
        &self,
        patient: PatientId,
        filter: &ObservationFilter,
        cutoff: NaiveDateTime,
    ) -> SourceResult<Vec<Observation>> {
        let records = self.records.read();
        let mut matched: Vec<(NaiveDateTime, Observation)> = records
            .get(&patient)
            .map(|observations| {
                observations
                    .iter()
                    .filter(|obs| filter.concepts.contains(&obs.concept))
                    .filter_map(|obs| {
                        // undated under this basis: not orderable, not part of the stream
                        let date = filter.basis.of(obs)?;
                        (date <= cutoff).then(|| (date, obs.clone()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        matched.sort_by_key(|(date, _)| *date);
        if filter.ordering == FetchOrdering::Descending {
            matched.reverse();
        }
        if let Some(max) = filter.max_results {
            matched.truncate(max);
        }

        debug!(
            "fetched {} observations for {} across {} concepts",
            matched.len(),
            patient,
            filter.concepts.len()
        );

        Ok(matched.into_iter().map(|(_, obs)| obs).collect())
    }
}
