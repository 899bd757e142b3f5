//! Guide entry types.
//!
//! A [`RealEvent`] is one normalized game broadcast; a [`FillerEvent`] is a
//! synthetic block covering unscheduled air time between two games. Both
//! flatten into the [`Programme`] shape the XMLTV writer consumes. All three
//! are built once during a synthesis pass and never mutated afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::numbering::EpisodeNum;

/// A piece of display text with an optional language tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub value: String,
    pub lang: Option<String>,
}

impl LocalizedText {
    pub fn new(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: Some(lang.into()),
        }
    }

    pub fn plain(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            lang: None,
        }
    }
}

/// One actual scheduled game broadcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RealEvent {
    /// Broadcast start (nominal puck drop minus the lead-in)
    pub start: DateTime<Utc>,
    /// Broadcast end; `None` when the source lacked duration info, which
    /// excludes the event from gap analysis
    pub stop: Option<DateTime<Utc>>,
    pub episode: EpisodeNum,
    /// Channel-level titles (typically one per language)
    pub title: Vec<LocalizedText>,
    /// Matchup line, e.g. "vs Boston Bruins, Jan 9"
    pub sub_title: Option<LocalizedText>,
    pub desc: Option<LocalizedText>,
    /// Logo shown for the entry (opponent or special-event logo)
    pub icon: Option<String>,
    /// Extra backdrop artwork from the side-table
    pub images: Vec<String>,
}

/// A synthetic block covering one hour (or less, at a gap's tail) of
/// unscheduled time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FillerEvent {
    pub start: DateTime<Utc>,
    pub stop: DateTime<Utc>,
    /// Derived from the preceding game's number plus the hour index
    pub episode: EpisodeNum,
    pub title: String,
    pub image: Option<String>,
}

/// The generic programme shape handed to the serializer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Programme {
    pub start: DateTime<Utc>,
    pub stop: Option<DateTime<Utc>>,
    pub episode: EpisodeNum,
    pub title: Vec<LocalizedText>,
    pub sub_title: Option<LocalizedText>,
    pub desc: Option<LocalizedText>,
    pub icon: Option<String>,
    pub images: Vec<String>,
}

impl From<RealEvent> for Programme {
    fn from(event: RealEvent) -> Self {
        Self {
            start: event.start,
            stop: event.stop,
            episode: event.episode,
            title: event.title,
            sub_title: event.sub_title,
            desc: event.desc,
            icon: event.icon,
            images: event.images,
        }
    }
}

impl From<FillerEvent> for Programme {
    fn from(event: FillerEvent) -> Self {
        Self {
            start: event.start,
            stop: Some(event.stop),
            episode: event.episode,
            title: vec![LocalizedText::plain(event.title)],
            sub_title: None,
            desc: None,
            icon: None,
            images: event.image.into_iter().collect(),
        }
    }
}
