//! Observation value types
//!
//! An `Observation` is one recorded clinical fact as delivered by the host
//! EMR: the concept that was asked, when it was recorded, and the answer
//! payloads a rule's validators may consult.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier for a clinical concept.
///
/// Concept names are resolved to ids by the host-owned dictionary; the
/// episode pipeline only ever compares ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConceptId(pub i32);

impl fmt::Display for ConceptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "concept#{}", self.0)
    }
}

/// Opaque identifier for a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatientId(pub i32);

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "patient#{}", self.0)
    }
}

/// One recorded clinical observation.
///
/// Observations are immutable once built; the pipeline never writes back
/// to them. `value_datetime` carries the secondary date used by
/// value-based rules, `value_coded` and `value_text` carry the answer a
/// validator may inspect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Concept this observation answers
    pub concept: ConceptId,
    /// Datetime the observation was recorded
    pub timestamp: NaiveDateTime,
    /// Date carried as the observation's value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_datetime: Option<NaiveDateTime>,
    /// Coded answer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_coded: Option<ConceptId>,
    /// Free-text answer, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_text: Option<String>,
}

impl Observation {
    /// Create an observation with only a concept and recorded datetime.
    pub fn new(concept: ConceptId, timestamp: NaiveDateTime) -> Self {
        Self {
            concept,
            timestamp,
            value_datetime: None,
            value_coded: None,
            value_text: None,
        }
    }

    /// Set the value datetime payload.
    pub fn with_value_datetime(mut self, value: NaiveDateTime) -> Self {
        self.value_datetime = Some(value);
        self
    }

    /// Set the coded answer.
    pub fn with_value_coded(mut self, value: ConceptId) -> Self {
        self.value_coded = Some(value);
        self
    }

    /// Set the free-text answer.
    pub fn with_value_text(mut self, value: impl Into<String>) -> Self {
        self.value_text = Some(value.into());
        self
    }

    /// Check whether the coded answer equals the given concept.
    pub fn answers_with(&self, concept: ConceptId) -> bool {
        self.value_coded == Some(concept)
    }
}
