//! # puckguide Core Library
//!
//! This library builds an XMLTV guide feed for a single team's broadcast
//! channel. It fetches the public schedule API for a forward window,
//! keeps the tracked team's games, tiles long dead-air gaps with filler
//! blocks and renders everything as one XMLTV document. The CLI binary is
//! a thin layer over this crate.
//!
//! ## Key Components
//!
//! - [`ScheduleClient`]: paginating client for the schedule API
//! - [`Normalizer`]: raw games to normalized broadcast entries
//! - [`GapFiller`]: deterministic filler synthesis for long gaps
//! - [`GuideBuilder`]: the end-to-end pipeline the CLI drives

pub mod artwork;
pub mod build;
pub mod config;
pub mod error;
pub mod guide;
pub mod schedule;
pub mod xmltv;

pub use artwork::ArtworkTable;
pub use build::GuideBuilder;
pub use config::Config;
pub use error::{ConfigError, CoreError, FetchError, ValidationError};
pub use guide::{EpisodeNum, FillerEvent, GapFiller, LocalizedText, Normalizer, Programme, RealEvent};
pub use schedule::{Game, GameDay, ScheduleClient, ScheduleResponse};
pub use xmltv::Channel;
