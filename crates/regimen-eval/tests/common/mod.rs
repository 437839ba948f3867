//! Shared test fixtures
//!
//! Date helpers, observation builders, a populated concept dictionary, and
//! a source that always fails, for exercising the engine's error path.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use regimen_model::{
    ConceptDictionary, ObservationFilter, ObservationSource, SourceError, SourceResult, concepts,
};
use regimen_types::{ConceptId, Observation, PatientId};

pub const PATIENT: PatientId = PatientId(5);
pub const START: ConceptId = ConceptId(100);
pub const STOP: ConceptId = ConceptId(200);

/// A datetime on the given day of October 1975.
pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1975, 10, d)
        .unwrap()
        .and_hms_opt(9, 0, 0)
        .unwrap()
}

pub fn start_obs(d: u32) -> Observation {
    Observation::new(START, day(d))
}

pub fn stop_obs(d: u32) -> Observation {
    Observation::new(STOP, day(d))
}

/// Dictionary resolving every concept name the built-in rules need.
pub fn dictionary() -> ConceptDictionary {
    let names = [
        concepts::CRYPTOCOCCAL_TREATMENT_PLAN,
        concepts::CRYPTOCOCCUS_TREATMENT_STARTED,
        concepts::START_DRUGS,
        concepts::STOP_ALL,
        concepts::FLUCONAZOLE,
        concepts::TUBERCULOSIS_TREATMENT_STARTED,
        concepts::TUBERCULOSIS_TREATMENT_COMPLETED_DATE,
        concepts::PCP_PROPHYLAXIS_STARTED,
        concepts::CURRENT_MEDICATIONS,
        concepts::PATIENT_REPORTED_CURRENT_PCP_PROPHYLAXIS,
        concepts::REASON_PCP_PROPHYLAXIS_STOPPED,
        concepts::TRIMETHOPRIM_AND_SULFAMETHOXAZOLE,
    ];
    ConceptDictionary::from_entries(
        names
            .into_iter()
            .enumerate()
            .map(|(id, name)| (name, ConceptId(1000 + id as i32))),
    )
}

/// Source whose every fetch fails.
pub struct FailingSource;

#[async_trait]
impl ObservationSource for FailingSource {
    async fn patient_observations(
        &self,
        _patient: PatientId,
        _filter: &ObservationFilter,
        _cutoff: NaiveDateTime,
    ) -> SourceResult<Vec<Observation>> {
        Err(SourceError::fetch_failed("backing store offline"))
    }
}
