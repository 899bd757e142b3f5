//! Wire types for the public schedule API.
//!
//! Only the fields the guide actually reads are modeled; the API sends a
//! lot more (standings links, ticket links, period descriptors) that serde
//! simply ignores.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// A localized string; the API nests these as `{ "default": "...", "fr": "..." }`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocalizedName {
    pub default: String,
    #[serde(default)]
    pub fr: Option<String>,
}

/// One participant in a game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameTeam {
    pub id: u32,
    pub common_name: LocalizedName,
    pub place_name: LocalizedName,
    pub abbrev: String,
    #[serde(default)]
    pub dark_logo: Option<String>,
}

impl GameTeam {
    /// Full display name, e.g. "Boston Bruins".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.place_name.default, self.common_name.default)
    }
}

/// A national or regional TV broadcast listed on a game.
///
/// Unreliable for deciding whether the game airs on the tracked channel;
/// used only for the description footer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TvBroadcast {
    pub network: String,
    pub country_code: String,
}

/// Special-event branding (outdoor games, all-star, etc.).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialEvent {
    pub name: LocalizedName,
    pub light_logo_url: LocalizedName,
}

/// One scheduled game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: u64,
    #[serde(rename = "startTimeUTC")]
    pub start_time_utc: DateTime<Utc>,
    pub venue: LocalizedName,
    #[serde(default)]
    pub tv_broadcasts: Vec<TvBroadcast>,
    pub away_team: GameTeam,
    pub home_team: GameTeam,
    #[serde(default)]
    pub special_event: Option<SpecialEvent>,
}

/// One day grouping inside a schedule response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDay {
    pub date: NaiveDate,
    #[serde(default)]
    pub games: Vec<Game>,
}

/// Response of `GET /v1/schedule/{date}`: roughly one week of days.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    #[serde(default)]
    pub game_week: Option<Vec<GameDay>>,
}
