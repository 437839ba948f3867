//! Built-in regimen rule behavior
//!
//! Exercises each built-in rule end to end through the engine and an
//! in-memory source: which observations count as starts and stops, and
//! which date field the rule compares.

mod common;

use common::{PATIENT, day, dictionary};
use pretty_assertions::assert_eq;
use regimen_eval::{EpisodeEngine, RegimenRule, rules};
use regimen_model::{InMemorySource, concepts};
use regimen_types::{ConceptId, Observation};
use std::sync::Arc;

const OTHER_ANSWER: ConceptId = ConceptId(9999);

/// Evaluate a rule over the given observations as of end of October 1975.
async fn evaluate(rule: &RegimenRule, observations: Vec<Observation>) -> String {
    let source = InMemorySource::new();
    for obs in observations {
        source.add(PATIENT, obs);
    }
    let engine = EpisodeEngine::new(Arc::new(source));
    engine.evaluate(rule, PATIENT, day(31)).await.unwrap()
}

fn concept(name: &str) -> ConceptId {
    dictionary().resolve(name).unwrap()
}

fn coded(concept_name: &str, answer: ConceptId, d: u32) -> Observation {
    Observation::new(concept(concept_name), day(d)).with_value_coded(answer)
}

// === Fluconazole ===

#[tokio::test]
async fn fluconazole_starts_on_treatment_plan_start_drugs() {
    let rule = rules::fluconazole(&dictionary()).unwrap();
    let obs = coded(concepts::CRYPTOCOCCAL_TREATMENT_PLAN, concept(concepts::START_DRUGS), 16);

    assert_eq!(evaluate(&rule, vec![obs]).await, "16/10/1975 - Unknown");
}

#[tokio::test]
async fn fluconazole_starts_on_treatment_started_fluconazole() {
    let rule = rules::fluconazole(&dictionary()).unwrap();
    let obs = coded(
        concepts::CRYPTOCOCCUS_TREATMENT_STARTED,
        concept(concepts::FLUCONAZOLE),
        16,
    );

    assert_eq!(evaluate(&rule, vec![obs]).await, "16/10/1975 - Unknown");
}

#[tokio::test]
async fn fluconazole_stops_on_treatment_plan_stop_all() {
    let rule = rules::fluconazole(&dictionary()).unwrap();
    let obs = coded(concepts::CRYPTOCOCCAL_TREATMENT_PLAN, concept(concepts::STOP_ALL), 16);

    assert_eq!(evaluate(&rule, vec![obs]).await, "Unknown - 16/10/1975");
}

#[tokio::test]
async fn fluconazole_pairs_start_and_stop_answers() {
    let rule = rules::fluconazole(&dictionary()).unwrap();
    let observations = vec![
        coded(concepts::CRYPTOCOCCAL_TREATMENT_PLAN, concept(concepts::START_DRUGS), 12),
        coded(concepts::CRYPTOCOCCAL_TREATMENT_PLAN, concept(concepts::STOP_ALL), 16),
    ];

    assert_eq!(evaluate(&rule, observations).await, "12/10/1975 - 16/10/1975");
}

#[tokio::test]
async fn fluconazole_ignores_unrelated_answers() {
    let rule = rules::fluconazole(&dictionary()).unwrap();
    let obs = coded(concepts::CRYPTOCOCCAL_TREATMENT_PLAN, OTHER_ANSWER, 16);

    assert_eq!(evaluate(&rule, vec![obs]).await, "");
}

// === Tuberculosis ===

#[tokio::test]
async fn tuberculosis_compares_value_dates_not_recorded_dates() {
    let rule = rules::tuberculosis(&dictionary()).unwrap();
    // recorded within one visit; the value payloads carry the real dates
    let observations = vec![
        Observation::new(concept(concepts::TUBERCULOSIS_TREATMENT_STARTED), day(1))
            .with_value_datetime(day(12)),
        Observation::new(concept(concepts::TUBERCULOSIS_TREATMENT_COMPLETED_DATE), day(1))
            .with_value_datetime(day(16)),
    ];

    assert_eq!(evaluate(&rule, observations).await, "12/10/1975 - 16/10/1975");
}

#[tokio::test]
async fn tuberculosis_skips_observations_without_a_value_date() {
    let rule = rules::tuberculosis(&dictionary()).unwrap();
    let observations = vec![
        Observation::new(concept(concepts::TUBERCULOSIS_TREATMENT_STARTED), day(1)),
        Observation::new(concept(concepts::TUBERCULOSIS_TREATMENT_COMPLETED_DATE), day(2))
            .with_value_datetime(day(16)),
    ];

    assert_eq!(evaluate(&rule, observations).await, "Unknown - 16/10/1975");
}

// === Cotrimoxazole ===

#[tokio::test]
async fn cotrimoxazole_starts_on_prophylaxis_started_with_any_answer() {
    let rule = rules::cotrimoxazole(&dictionary()).unwrap();
    let obs = coded(concepts::PCP_PROPHYLAXIS_STARTED, OTHER_ANSWER, 16);

    assert_eq!(evaluate(&rule, vec![obs]).await, "16/10/1975 - Unknown");
}

#[tokio::test]
async fn cotrimoxazole_does_not_start_on_unanswered_prophylaxis_started() {
    let rule = rules::cotrimoxazole(&dictionary()).unwrap();
    let obs = Observation::new(concept(concepts::PCP_PROPHYLAXIS_STARTED), day(17));

    assert_eq!(evaluate(&rule, vec![obs]).await, "");
}

#[tokio::test]
async fn cotrimoxazole_starts_on_current_medications_tmp_smx() {
    let rule = rules::cotrimoxazole(&dictionary()).unwrap();
    let obs = coded(
        concepts::CURRENT_MEDICATIONS,
        concept(concepts::TRIMETHOPRIM_AND_SULFAMETHOXAZOLE),
        20,
    );

    assert_eq!(evaluate(&rule, vec![obs]).await, "20/10/1975 - Unknown");
}

#[tokio::test]
async fn cotrimoxazole_does_not_start_on_other_current_medications() {
    let rule = rules::cotrimoxazole(&dictionary()).unwrap();
    let obs = coded(concepts::CURRENT_MEDICATIONS, OTHER_ANSWER, 20);

    assert_eq!(evaluate(&rule, vec![obs]).await, "");
}

#[tokio::test]
async fn cotrimoxazole_starts_on_patient_reported_tmp_smx() {
    let rule = rules::cotrimoxazole(&dictionary()).unwrap();
    let obs = coded(
        concepts::PATIENT_REPORTED_CURRENT_PCP_PROPHYLAXIS,
        concept(concepts::TRIMETHOPRIM_AND_SULFAMETHOXAZOLE),
        21,
    );

    assert_eq!(evaluate(&rule, vec![obs]).await, "21/10/1975 - Unknown");
}

#[tokio::test]
async fn cotrimoxazole_stops_on_answered_reason_stopped() {
    let rule = rules::cotrimoxazole(&dictionary()).unwrap();
    let obs = coded(concepts::REASON_PCP_PROPHYLAXIS_STOPPED, OTHER_ANSWER, 18);

    assert_eq!(evaluate(&rule, vec![obs]).await, "Unknown - 18/10/1975");
}

#[tokio::test]
async fn cotrimoxazole_does_not_stop_on_unanswered_reason_stopped() {
    let rule = rules::cotrimoxazole(&dictionary()).unwrap();
    let obs = Observation::new(concept(concepts::REASON_PCP_PROPHYLAXIS_STOPPED), day(19));

    assert_eq!(evaluate(&rule, vec![obs]).await, "");
}
