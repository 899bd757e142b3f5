//! Guide synthesis: normalization, gap filling and numbering.
//!
//! One pass turns a fetched schedule window into the final programme
//! sequence: real broadcasts in fetch order, then filler blocks in
//! generation order, exactly as the serializer expects them. The result is
//! built once and handed off; nothing here mutates after the pass.

mod event;
mod gapfill;
mod normalize;
mod numbering;

pub use event::{FillerEvent, LocalizedText, Programme, RealEvent};
pub use gapfill::{GapFiller, INCREMENT_MS, MIN_GAP_INCREMENTS};
pub use normalize::{Normalizer, BROADCAST_HOURS, LEAD_IN_MINUTES};
pub use numbering::EpisodeNum;

use crate::artwork::ArtworkTable;
use crate::error::ValidationError;
use crate::schedule::GameDay;

/// Build the combined programme sequence for a schedule window.
///
/// Day groupings must be in chronological order with a stable game order
/// per day (the fetch loop provides both). The artwork table is optional;
/// a missing table or a lookup miss just means no extra backdrops.
///
/// # Errors
/// Propagates normalization failures; a malformed record aborts the run
/// so a partially-numbered guide is never produced.
pub fn synthesize(
    days: &[GameDay],
    normalizer: &Normalizer,
    gap_filler: &GapFiller,
    artwork: Option<&ArtworkTable>,
) -> Result<Vec<Programme>, ValidationError> {
    let mut events = Vec::new();
    for day in days {
        for game in &day.games {
            let Some(mut event) = normalizer.normalize(game)? else {
                continue;
            };
            if let Some(table) = artwork {
                event.images = table
                    .lookup(
                        &game.home_team.full_name(),
                        &game.away_team.full_name(),
                        day.date,
                    )
                    .to_vec();
            }
            events.push(event);
        }
    }

    let fillers = gap_filler.fill(&events);

    let mut programmes: Vec<Programme> = events.into_iter().map(Programme::from).collect();
    programmes.extend(fillers.into_iter().map(Programme::from));
    Ok(programmes)
}
