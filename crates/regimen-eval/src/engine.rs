//! Episode evaluation engine
//!
//! `EpisodeEngine` wires the pipeline stages to an injected observation
//! source: fetch the start and stop streams, deduplicate, merge, format.
//! One evaluation is one patient, one rule, one evaluation date in, one
//! cell string out.

use crate::dedup::dedup;
use crate::error::EvalResult;
use crate::format::join_cell;
use crate::merge::merge;
use crate::rules::RegimenRule;
use chrono::NaiveDateTime;
use log::debug;
use regimen_model::{ObservationFilter, ObservationSource};
use regimen_types::{ConceptId, EpisodeRange, Observation, PatientId};
use std::sync::Arc;

/// The episode evaluation engine.
///
/// Holds the observation source; rules arrive per call, so one engine
/// serves every regimen. Evaluations share no mutable state and may run
/// concurrently.
pub struct EpisodeEngine {
    source: Arc<dyn ObservationSource>,
}

impl EpisodeEngine {
    /// Create an engine over an observation source.
    pub fn new(source: Arc<dyn ObservationSource>) -> Self {
        Self { source }
    }

    /// Evaluate one rule for one patient up to the evaluation date.
    ///
    /// Returns the formatted report-cell string; the empty string means no
    /// episodes were found. Fetch failures surface as errors, never as an
    /// empty cell.
    pub async fn evaluate(
        &self,
        rule: &RegimenRule,
        patient: PatientId,
        evaluation_date: NaiveDateTime,
    ) -> EvalResult<String> {
        let starts = self
            .fetch(patient, &rule.start_concepts, rule, evaluation_date)
            .await?;
        let stops = self
            .fetch(patient, &rule.stop_concepts, rule, evaluation_date)
            .await?;

        let episodes = self.reconstruct(rule, &starts, &stops);
        debug!(
            "{}: {} episodes for {} from {} starts / {} stops",
            rule.name,
            episodes.len(),
            patient,
            starts.len(),
            stops.len()
        );

        Ok(join_cell(&episodes))
    }

    /// Run the synchronous pipeline stages over already-fetched streams.
    pub fn reconstruct(
        &self,
        rule: &RegimenRule,
        starts: &[Observation],
        stops: &[Observation],
    ) -> Vec<EpisodeRange> {
        let starts = dedup(starts, rule.basis);
        let stops = dedup(stops, rule.basis);
        merge(
            &starts,
            &stops,
            rule.basis,
            |obs| (rule.validate_start)(obs),
            |obs| (rule.validate_stop)(obs),
        )
    }

    /// Evaluate one rule across a cohort, concurrently.
    ///
    /// Per-patient evaluations are independent; results come back in input
    /// order, each carrying its own outcome.
    pub async fn evaluate_cohort(
        &self,
        rule: &RegimenRule,
        patients: &[PatientId],
        evaluation_date: NaiveDateTime,
    ) -> Vec<(PatientId, EvalResult<String>)> {
        let evaluations = patients.iter().map(|&patient| async move {
            (patient, self.evaluate(rule, patient, evaluation_date).await)
        });
        futures::future::join_all(evaluations).await
    }

    async fn fetch(
        &self,
        patient: PatientId,
        concepts: &[ConceptId],
        rule: &RegimenRule,
        cutoff: NaiveDateTime,
    ) -> EvalResult<Vec<Observation>> {
        let filter = ObservationFilter::ascending(concepts.to_vec()).with_basis(rule.basis);
        let stream = self
            .source
            .patient_observations(patient, &filter, cutoff)
            .await?;
        Ok(stream)
    }
}
