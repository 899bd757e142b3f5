//! Gap filling between scheduled broadcasts.
//!
//! Games are sparse; between two broadcasts there can be days of dead air.
//! Guide consumers handle that badly, so any gap long enough not to be a
//! normal pre/post-game span gets tiled with one-hour filler blocks. The
//! walk is purely sequential and deterministic: it never reads the wall
//! clock, and running it twice over the same input yields the same output.

use chrono::{DateTime, Duration, Utc};

use super::event::{FillerEvent, RealEvent};

/// Length of one filler block.
pub const INCREMENT_MS: i64 = 3_600_000;

/// Minimum gap length, in whole increments (rounded up), that gets filled.
/// Anything shorter counts as a normal intermission between broadcasts.
pub const MIN_GAP_INCREMENTS: i64 = 12;

/// Produces filler blocks for the gaps in an ordered broadcast sequence.
pub struct GapFiller {
    title: String,
    image: Option<String>,
}

impl GapFiller {
    pub fn new(title: impl Into<String>, image: Option<String>) -> Self {
        Self {
            title: title.into(),
            image,
        }
    }

    /// Generate fillers for every eligible gap in `events`.
    ///
    /// `events` must already be sorted by start time (fetch order provides
    /// this). Events with unknown `stop` are dropped from the pairwise walk
    /// up front, so adjacency is computed over fully-known events only and
    /// a stop-less event never suppresses gap analysis around it. Nothing
    /// is generated before the first or after the last event.
    pub fn fill(&self, events: &[RealEvent]) -> Vec<FillerEvent> {
        let known: Vec<(&RealEvent, DateTime<Utc>)> = events
            .iter()
            .filter_map(|e| e.stop.map(|stop| (e, stop)))
            .collect();

        let mut fillers = Vec::new();
        for pair in known.windows(2) {
            let (current, current_stop) = &pair[0];
            let (next, _) = &pair[1];

            let gap_ms = (next.start - *current_stop).num_milliseconds();
            if gap_ms <= 0 {
                continue;
            }
            // Whole increments, rounded up: a 11.9h gap counts as 12
            let increments = (gap_ms + INCREMENT_MS - 1) / INCREMENT_MS;
            if increments < MIN_GAP_INCREMENTS {
                continue;
            }

            for index in 0..increments {
                let start = *current_stop + Duration::milliseconds(index * INCREMENT_MS);
                let stop = (*current_stop + Duration::milliseconds((index + 1) * INCREMENT_MS))
                    .min(next.start);
                fillers.push(FillerEvent {
                    start,
                    stop,
                    episode: current.episode.filler(index as u32),
                    title: self.title.clone(),
                    image: self.image.clone(),
                });
            }
        }

        fillers
    }
}
