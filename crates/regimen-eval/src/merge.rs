//! Interval merge
//!
//! The core of the pipeline: a two-cursor walk over the deduplicated start
//! and stop streams that emits episode ranges in resolution order. The
//! pairing is greedy: each start is closed by the nearest subsequent stop
//! unless another start intervenes first. It is deliberately permissive,
//! turning extra starts into open-ended ranges and extra stops into ranges
//! with an unknown start. Every combination of inputs produces some range
//! list; the merge never errors.

use regimen_types::{DateBasis, EpisodeRange, Observation};

/// Advance `idx` to the next observation that passes `validate` and has a
/// comparison date under `basis`, or to `stream.len()` if none remains.
fn next_valid<F>(stream: &[Observation], mut idx: usize, basis: DateBasis, validate: &F) -> usize
where
    F: Fn(&Observation) -> bool + ?Sized,
{
    while idx < stream.len() {
        let obs = &stream[idx];
        if validate(obs) && basis.of(obs).is_some() {
            break;
        }
        idx += 1;
    }
    idx
}

/// Merge validated start and stop streams into episode ranges.
///
/// Both streams must already be deduplicated and ascending by their
/// comparison date; the merge does not re-sort. Resolution rules, per
/// loop turn over the current valid events:
///
/// - stops exhausted: the start opens an episode that never closes
/// - starts exhausted, or the stop falls strictly before the start: the
///   stop is an orphan, emitted with an unknown start
/// - a further valid start falls strictly before the stop: the current
///   start is emitted open-ended and the intervening start takes over
/// - otherwise the start and stop pair up
///
/// A stop dated exactly on the next start pairs with the current start; it
/// does not take the interrupted branch.
pub fn merge<FS, FP>(
    starts: &[Observation],
    stops: &[Observation],
    basis: DateBasis,
    validate_start: FS,
    validate_stop: FP,
) -> Vec<EpisodeRange>
where
    FS: Fn(&Observation) -> bool,
    FP: Fn(&Observation) -> bool,
{
    let mut ranges = Vec::new();
    let mut start_idx = 0;
    let mut stop_idx = 0;

    loop {
        start_idx = next_valid(starts, start_idx, basis, &validate_start);
        stop_idx = next_valid(stops, stop_idx, basis, &validate_stop);

        let start_date = starts.get(start_idx).and_then(|obs| basis.of(obs));
        let stop_date = stops.get(stop_idx).and_then(|obs| basis.of(obs));

        match (start_date, stop_date) {
            (None, None) => break,

            // no more stops: the episode never closes
            (Some(start), None) => {
                ranges.push(EpisodeRange::open_ended(start));
                start_idx += 1;
            }

            // orphan stop: no start at all, or the start postdates it
            (None, Some(stop)) => {
                ranges.push(EpisodeRange::unknown_start(stop));
                stop_idx += 1;
            }
            (Some(start), Some(stop)) if stop < start => {
                ranges.push(EpisodeRange::unknown_start(stop));
                stop_idx += 1;
            }

            (Some(start), Some(stop)) => {
                let next_idx = next_valid(starts, start_idx + 1, basis, &validate_start);
                let next_start = starts.get(next_idx).and_then(|obs| basis.of(obs));

                match next_start {
                    // another start intervenes before this stop: the
                    // current episode is left open and the stop is kept
                    // for the next turn
                    Some(next) if stop > next => {
                        ranges.push(EpisodeRange::open_ended(start));
                    }
                    _ => {
                        ranges.push(EpisodeRange::closed(start, stop));
                        stop_idx += 1;
                    }
                }
                start_idx = next_idx;
            }
        }
    }

    ranges
}
