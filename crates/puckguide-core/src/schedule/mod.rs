//! Upstream schedule supplier: wire types and HTTP client.

mod client;
mod types;

pub use client::ScheduleClient;
pub use types::{Game, GameDay, GameTeam, LocalizedName, ScheduleResponse, SpecialEvent, TvBroadcast};
