//! Comparison-date selection and calendar-day helpers

use crate::observation::Observation;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Which date field of an observation orders and compares it.
///
/// Most rules compare observations by the datetime they were recorded.
/// Value-based rules (e.g. "treatment completed date") carry the clinically
/// relevant date inside the observation's value payload instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateBasis {
    /// Compare by the recorded observation datetime
    #[default]
    Recorded,
    /// Compare by the datetime carried as the observation's value
    Value,
}

impl DateBasis {
    /// The comparison date of an observation under this basis.
    ///
    /// `Value` basis yields `None` when the observation carries no value
    /// datetime; such observations are dropped before merging.
    pub fn of(&self, obs: &Observation) -> Option<NaiveDateTime> {
        match self {
            Self::Recorded => Some(obs.timestamp),
            Self::Value => obs.value_datetime,
        }
    }
}

/// Whether two datetimes fall on the same calendar day.
pub fn same_calendar_day(a: NaiveDateTime, b: NaiveDateTime) -> bool {
    a.date() == b.date()
}
