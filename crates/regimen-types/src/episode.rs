//! Episode ranges
//!
//! An `EpisodeRange` is one treatment period as reconstructed by the merge:
//! a start bound, a stop bound, or both. A range with neither bound cannot
//! be built; the constructors enforce it.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A treatment period delimited by a start and/or stop datetime.
///
/// The merge deliberately emits half-open ranges: a start with no stop is a
/// regimen still running (or never closed on paper), a stop with no start
/// is a stop recorded with no plausible preceding start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRange {
    start: Option<NaiveDateTime>,
    stop: Option<NaiveDateTime>,
}

impl EpisodeRange {
    /// A range with a known start and no stop.
    pub fn open_ended(start: NaiveDateTime) -> Self {
        Self { start: Some(start), stop: None }
    }

    /// A range with a known stop and no start.
    pub fn unknown_start(stop: NaiveDateTime) -> Self {
        Self { start: None, stop: Some(stop) }
    }

    /// A range with both bounds known.
    pub fn closed(start: NaiveDateTime, stop: NaiveDateTime) -> Self {
        Self { start: Some(start), stop: Some(stop) }
    }

    /// Start bound, if known.
    pub fn start(&self) -> Option<NaiveDateTime> {
        self.start
    }

    /// Stop bound, if known.
    pub fn stop(&self) -> Option<NaiveDateTime> {
        self.stop
    }

    /// Whether both bounds are known.
    pub fn is_closed(&self) -> bool {
        self.start.is_some() && self.stop.is_some()
    }
}
