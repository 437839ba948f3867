//! Treatment episode reconstruction pipeline
//!
//! This crate reconciles two independently recorded observation streams,
//! one of events that can mark the start of a regimen and one of events
//! that can mark its stop, into chronologically coherent episode ranges
//! and renders them for a tabular clinical report:
//!
//! - **Deduplication**: consecutive same-calendar-day events collapse to one
//! - **Validation**: rule-specific predicates decide which events count
//! - **Merge**: a two-cursor walk pairs starts with stops, handling every
//!   asymmetry (extra starts, extra stops, out-of-order dates, episodes
//!   never closed on paper)
//! - **Formatting**: `DD/MM/YYYY` bounds, `"Unknown"` placeholders, one
//!   episode per line in a single report cell
//!
//! # Example
//!
//! ```ignore
//! use regimen_eval::{EpisodeEngine, rules};
//!
//! let engine = EpisodeEngine::new(source);
//! let rule = rules::fluconazole(&dictionary)?;
//! let cell = engine.evaluate(&rule, patient, evaluation_date).await?;
//! ```
//!
//! # Architecture
//!
//! The pipeline stages (`dedup`, `merge`, `format`) are synchronous pure
//! functions, directly unit-testable without any rule or data source.
//! `EpisodeEngine` wires them to an injected `ObservationSource` and a
//! `RegimenRule` configuration value; each regimen is a configuration, not
//! a type.

pub mod dedup;
pub mod engine;
pub mod error;
pub mod format;
pub mod merge;
pub mod rules;

// Re-export main types
pub use dedup::dedup;
pub use engine::EpisodeEngine;
pub use error::{EvalError, EvalResult};
pub use format::{format_range, join_cell};
pub use merge::merge;
pub use rules::{RegimenRule, RuleError, Validator, pass_through};
