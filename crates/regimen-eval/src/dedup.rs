//! Stream deduplication
//!
//! Observation forms are often re-entered within a visit, producing several
//! same-day copies of the same fact. The merge wants at most one event per
//! calendar day, so each stream is collapsed before pairing.

use regimen_types::{DateBasis, Observation, same_calendar_day};

/// Collapse consecutive same-calendar-day observations to one.
///
/// Walks the (already date-ordered) stream keeping a last-accepted cursor;
/// an observation on the same calendar day as the last accepted one is
/// dropped. Because the input is ordered, the result has no two
/// observations sharing a day.
///
/// Observations with no comparison date under `basis` are dropped: they
/// cannot be placed on the timeline at all. Idempotent; empty input yields
/// empty output.
pub fn dedup(stream: &[Observation], basis: DateBasis) -> Vec<Observation> {
    let mut kept: Vec<Observation> = Vec::with_capacity(stream.len());
    let mut last = None;

    for obs in stream {
        let Some(date) = basis.of(obs) else { continue };
        if let Some(prev) = last {
            if same_calendar_day(prev, date) {
                continue;
            }
        }
        last = Some(date);
        kept.push(obs.clone());
    }

    kept
}
