//! Observation source boundary and concept dictionary
//!
//! This crate is the seam between the episode pipeline and whatever system
//! actually stores observations. It provides:
//!
//! - `ObservationSource`: the injected, async data-access trait
//! - `ObservationFilter` / `FetchOrdering`: the query restriction surface
//! - `ConceptDictionary`: the host-populated name-to-id lookup
//! - `InMemorySource`: a complete in-process implementation used by tests
//!   and the CLI's file mode
//!
//! The pipeline itself never talks to a database or a global service
//! registry; it receives an `Arc<dyn ObservationSource>` and asks it for
//! ordered streams.

pub mod concepts;
pub mod dictionary;
pub mod memory;
pub mod source;

pub use dictionary::{ConceptDictionary, DictionaryError};
pub use memory::{InMemorySource, PatientRecord};
pub use source::{FetchOrdering, NoOpSource, ObservationFilter, ObservationSource, SourceError, SourceResult};
