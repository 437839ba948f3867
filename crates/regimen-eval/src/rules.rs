//! Regimen rule configuration
//!
//! A regimen is a configuration value, not a type: the concept sets that
//! mark starts and stops, the date basis, and a pair of validator
//! predicates. The built-in rules cover the regimens the clinical report
//! tracks; a host can define its own the same way.

use once_cell::sync::Lazy;
use regimen_model::concepts;
use regimen_model::{ConceptDictionary, DictionaryError};
use regimen_types::{ConceptId, DateBasis, Observation};
use std::fmt;
use std::sync::Arc;

/// A rule-supplied event predicate.
pub type Validator = Arc<dyn Fn(&Observation) -> bool + Send + Sync>;

/// The pass-through validator: every event counts.
pub fn pass_through() -> Validator {
    Arc::new(|_| true)
}

/// Errors raised while building or resolving a rule.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    /// A concept name the rule needs is not in the dictionary
    #[error(transparent)]
    UnknownConcept(#[from] DictionaryError),

    /// No built-in rule under that name
    #[error("Unknown rule: {0}")]
    UnknownRule(String),
}

/// Configuration of one regimen's episode reconstruction.
#[derive(Clone)]
pub struct RegimenRule {
    /// Display name of the regimen
    pub name: String,
    /// Concepts whose observations can mark a start
    pub start_concepts: Vec<ConceptId>,
    /// Concepts whose observations can mark a stop
    pub stop_concepts: Vec<ConceptId>,
    /// Date field that orders and compares this rule's events
    pub basis: DateBasis,
    /// Predicate deciding whether a fetched event counts as a start
    pub validate_start: Validator,
    /// Predicate deciding whether a fetched event counts as a stop
    pub validate_stop: Validator,
}

impl RegimenRule {
    /// A rule with pass-through validators on the recorded-date basis.
    pub fn new(
        name: impl Into<String>,
        start_concepts: Vec<ConceptId>,
        stop_concepts: Vec<ConceptId>,
    ) -> Self {
        Self {
            name: name.into(),
            start_concepts,
            stop_concepts,
            basis: DateBasis::Recorded,
            validate_start: pass_through(),
            validate_stop: pass_through(),
        }
    }

    /// Select the date basis.
    pub fn with_basis(mut self, basis: DateBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Set the start validator.
    pub fn with_start_validator(mut self, validator: Validator) -> Self {
        self.validate_start = validator;
        self
    }

    /// Set the stop validator.
    pub fn with_stop_validator(mut self, validator: Validator) -> Self {
        self.validate_stop = validator;
        self
    }
}

impl fmt::Debug for RegimenRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegimenRule")
            .field("name", &self.name)
            .field("start_concepts", &self.start_concepts)
            .field("stop_concepts", &self.stop_concepts)
            .field("basis", &self.basis)
            .finish_non_exhaustive()
    }
}

/// Fluconazole (cryptococcal treatment).
///
/// Starts when CRYPTOCOCCAL TREATMENT PLAN answers START DRUGS or
/// CRYPTOCOCCUS TREATMENT STARTED answers FLUCONAZOLE; stops when
/// CRYPTOCOCCAL TREATMENT PLAN answers STOP ALL.
pub fn fluconazole(dictionary: &ConceptDictionary) -> Result<RegimenRule, RuleError> {
    let plan = dictionary.require(concepts::CRYPTOCOCCAL_TREATMENT_PLAN)?;
    let treatment_started = dictionary.require(concepts::CRYPTOCOCCUS_TREATMENT_STARTED)?;
    let start_drugs = dictionary.require(concepts::START_DRUGS)?;
    let stop_all = dictionary.require(concepts::STOP_ALL)?;
    let fluconazole = dictionary.require(concepts::FLUCONAZOLE)?;

    Ok(
        RegimenRule::new("fluconazole", vec![plan, treatment_started], vec![plan])
            .with_start_validator(Arc::new(move |obs| {
                (obs.concept == plan && obs.answers_with(start_drugs))
                    || (obs.concept == treatment_started && obs.answers_with(fluconazole))
            }))
            .with_stop_validator(Arc::new(move |obs| {
                obs.concept == plan && obs.answers_with(stop_all)
            })),
    )
}

/// Tuberculosis treatment.
///
/// Starts on TUBERCULOSIS TREATMENT STARTED, stops on TUBERCULOSIS
/// TREATMENT COMPLETED DATE. Both carry the clinically relevant date as
/// their value, so the rule compares value dates.
pub fn tuberculosis(dictionary: &ConceptDictionary) -> Result<RegimenRule, RuleError> {
    let started = dictionary.require(concepts::TUBERCULOSIS_TREATMENT_STARTED)?;
    let completed = dictionary.require(concepts::TUBERCULOSIS_TREATMENT_COMPLETED_DATE)?;

    Ok(RegimenRule::new("tuberculosis", vec![started], vec![completed]).with_basis(DateBasis::Value))
}

/// Cotrimoxazole (PCP prophylaxis).
///
/// Starts when PCP PROPHYLAXIS STARTED carries any coded answer, or when
/// CURRENT MEDICATIONS or PATIENT REPORTED CURRENT PCP PROPHYLAXIS answer
/// TRIMETHOPRIM AND SULFAMETHOXAZOLE; stops when REASON PCP PROPHYLAXIS
/// STOPPED carries any coded answer.
pub fn cotrimoxazole(dictionary: &ConceptDictionary) -> Result<RegimenRule, RuleError> {
    let prophylaxis_started = dictionary.require(concepts::PCP_PROPHYLAXIS_STARTED)?;
    let current_medications = dictionary.require(concepts::CURRENT_MEDICATIONS)?;
    let patient_reported = dictionary.require(concepts::PATIENT_REPORTED_CURRENT_PCP_PROPHYLAXIS)?;
    let reason_stopped = dictionary.require(concepts::REASON_PCP_PROPHYLAXIS_STOPPED)?;
    let tmp_smx = dictionary.require(concepts::TRIMETHOPRIM_AND_SULFAMETHOXAZOLE)?;

    Ok(RegimenRule::new(
        "cotrimoxazole",
        vec![prophylaxis_started, current_medications, patient_reported],
        vec![reason_stopped],
    )
    .with_start_validator(Arc::new(move |obs| {
        (obs.concept == prophylaxis_started && obs.value_coded.is_some())
            || (obs.concept == current_medications && obs.answers_with(tmp_smx))
            || (obs.concept == patient_reported && obs.answers_with(tmp_smx))
    }))
    .with_stop_validator(Arc::new(move |obs| {
        obs.concept == reason_stopped && obs.value_coded.is_some()
    })))
}

/// Constructor for a built-in rule over a host dictionary.
pub type RuleConstructor = fn(&ConceptDictionary) -> Result<RegimenRule, RuleError>;

static BUILTIN_RULES: Lazy<Vec<(&'static str, RuleConstructor)>> = Lazy::new(|| {
    vec![
        ("fluconazole", fluconazole as RuleConstructor),
        ("tuberculosis", tuberculosis as RuleConstructor),
        ("cotrimoxazole", cotrimoxazole as RuleConstructor),
    ]
});

/// Build a built-in rule by name.
pub fn builtin(name: &str, dictionary: &ConceptDictionary) -> Result<RegimenRule, RuleError> {
    BUILTIN_RULES
        .iter()
        .find(|(rule_name, _)| *rule_name == name)
        .ok_or_else(|| RuleError::UnknownRule(name.to_string()))
        .and_then(|(_, constructor)| constructor(dictionary))
}

/// Names of the built-in rules.
pub fn builtin_names() -> Vec<&'static str> {
    BUILTIN_RULES.iter().map(|(name, _)| *name).collect()
}
