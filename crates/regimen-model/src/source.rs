//! Observation source trait and fetch restrictions

use async_trait::async_trait;
use chrono::NaiveDateTime;
use regimen_types::{ConceptId, DateBasis, Observation, PatientId};
use serde::{Deserialize, Serialize};

/// Result type for source operations
pub type SourceResult<T> = Result<T, SourceError>;

/// Errors raised by an observation source.
///
/// A source must fail loudly: an empty stream means "no data", never
/// "the fetch broke".
#[derive(Debug, Clone, thiserror::Error)]
pub enum SourceError {
    /// The backing store could not be queried
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// The patient is unknown to the backing store
    #[error("Unknown patient: {0}")]
    UnknownPatient(PatientId),

    /// Internal error
    #[error("Internal source error: {0}")]
    Internal(String),
}

impl SourceError {
    /// Create a fetch failure error
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::FetchFailed(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

/// Ordering of a fetched observation stream by comparison date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchOrdering {
    /// Oldest first
    #[default]
    Ascending,
    /// Newest first
    Descending,
}

/// Restriction applied to an observation fetch.
///
/// The filter names the concepts of interest, the date basis that orders
/// the stream (and that the cutoff applies to), and an optional cap on the
/// number of results.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationFilter {
    /// Concepts the observations must answer
    pub concepts: Vec<ConceptId>,
    /// Date field used for ordering and the cutoff
    pub basis: DateBasis,
    /// Stream ordering
    pub ordering: FetchOrdering,
    /// Maximum number of observations to return
    pub max_results: Option<usize>,
}

impl ObservationFilter {
    /// An ascending, uncapped filter on the given concepts with the
    /// recorded-date basis.
    pub fn ascending(concepts: Vec<ConceptId>) -> Self {
        Self {
            concepts,
            basis: DateBasis::Recorded,
            ordering: FetchOrdering::Ascending,
            max_results: None,
        }
    }

    /// Select the date basis.
    pub fn with_basis(mut self, basis: DateBasis) -> Self {
        self.basis = basis;
        self
    }

    /// Cap the number of results.
    pub fn with_max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }
}

/// Trait for fetching a patient's observations from a backing store.
///
/// Implementations must return streams ordered by the filter's comparison
/// date and restricted to observations at or before the cutoff.
/// Observations with no comparison date under the filter's basis are not
/// part of the stream.
#[async_trait]
pub trait ObservationSource: Send + Sync {
    /// Fetch observations for one patient under the given restriction.
    async fn patient_observations(
        &self,
        patient: PatientId,
        filter: &ObservationFilter,
        cutoff: NaiveDateTime,
    ) -> SourceResult<Vec<Observation>>;
}

/// NoOp observation source for testing
pub struct NoOpSource;

impl NoOpSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ObservationSource for NoOpSource {
    async fn patient_observations(
        &self,
        _patient: PatientId,
        _filter: &ObservationFilter,
        _cutoff: NaiveDateTime,
    ) -> SourceResult<Vec<Observation>> {
        Ok(vec![])
    }
}
