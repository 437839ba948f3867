//! Treatment episode reconstruction for clinical reports
//!
//! This crate reconciles a patient's start-marking and stop-marking
//! observation streams into treatment episodes and renders them as a
//! single report-cell string:
//!
//! - Deduplication of same-calendar-day re-entries
//! - Rule-specific validation of individual events
//! - A two-cursor merge that tolerates every start/stop asymmetry
//! - Fixed `DD/MM/YYYY` formatting with `Unknown` placeholders
//!
//! # Example
//!
//! ```ignore
//! use regimen::{EpisodeEngine, rules};
//!
//! let engine = EpisodeEngine::new(source);
//! let rule = rules::cotrimoxazole(&dictionary)?;
//! let cell = engine.evaluate(&rule, patient, evaluation_date).await?;
//! ```

// Re-export all public APIs from internal crates
pub use regimen_eval as eval;
pub use regimen_model as model;
pub use regimen_types as types;

// Convenience re-exports
pub use regimen_eval::rules;
pub use regimen_eval::{EpisodeEngine, EvalError, EvalResult, RegimenRule};
pub use regimen_model::{ConceptDictionary, InMemorySource, ObservationSource};
pub use regimen_types::{DateBasis, EpisodeRange, Observation, PatientId};
