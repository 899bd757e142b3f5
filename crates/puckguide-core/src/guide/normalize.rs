//! Event normalization: raw schedule records to guide entries.
//!
//! Decides which games belong on the channel and turns each one into a
//! [`RealEvent`] with broadcast-window times and a structured episode
//! number. Relevance is decided purely by participant identity; the
//! broadcast list on the record does not reliably say whether a game airs
//! on the channel, so it is never consulted for inclusion.

use chrono::Duration;

use super::event::{LocalizedText, RealEvent};
use super::numbering::EpisodeNum;
use crate::error::ValidationError;
use crate::schedule::Game;

/// Lead-in before nominal start time (pre-game coverage).
pub const LEAD_IN_MINUTES: i64 = 30;

/// Fixed broadcast duration from nominal start time.
pub const BROADCAST_HOURS: i64 = 3;

/// Turns raw games into normalized guide entries for one tracked team.
pub struct Normalizer {
    team_id: u32,
    titles: Vec<LocalizedText>,
}

impl Normalizer {
    pub fn new(team_id: u32, titles: Vec<LocalizedText>) -> Self {
        Self { team_id, titles }
    }

    /// Normalize one raw game record.
    ///
    /// Returns `Ok(None)` when the tracked team is neither participant.
    ///
    /// # Errors
    /// Returns [`ValidationError::BadGameId`] if the game id cannot be
    /// split into an episode number.
    pub fn normalize(&self, game: &Game) -> Result<Option<RealEvent>, ValidationError> {
        let is_away = game.away_team.id == self.team_id;
        let is_home = game.home_team.id == self.team_id;
        if !is_home && !is_away {
            return Ok(None);
        }

        let symbol = if is_away { "at" } else { "vs" };
        let opponent = if is_away {
            &game.home_team
        } else {
            &game.away_team
        };

        let episode = EpisodeNum::from_game_id(game.id)?;

        let start = game.start_time_utc - Duration::minutes(LEAD_IN_MINUTES);
        let stop = game.start_time_utc + Duration::hours(BROADCAST_HOURS);

        let sub_title = LocalizedText::new(
            format!(
                "{} {}, {}",
                symbol,
                opponent.full_name(),
                game.start_time_utc.format("%b %-d"),
            ),
            "en",
        );

        let networks: Vec<String> = game
            .tv_broadcasts
            .iter()
            .map(|b| format!("{} ({})", b.network, b.country_code))
            .collect();
        let footer = format!("<br/><br/>TV: {}", networks.join(" \u{2022} "));

        let (desc, icon) = match &game.special_event {
            Some(special) => (
                format!(
                    "{} at {}. {}",
                    special.name.default, game.venue.default, footer
                ),
                Some(special.light_logo_url.default.clone()),
            ),
            None => (
                format!("At {}. {}", game.venue.default, footer),
                opponent.dark_logo.clone(),
            ),
        };

        Ok(Some(RealEvent {
            start,
            stop: Some(stop),
            episode,
            title: self.titles.clone(),
            sub_title: Some(sub_title),
            desc: Some(LocalizedText::new(desc, "en")),
            icon,
            images: Vec::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ScheduleResponse;
    use chrono::{TimeZone, Utc};

    fn sample_game(home_id: u32, away_id: u32) -> Game {
        let body = format!(
            r#"{{
                "id": 2023020573,
                "venue": {{ "default": "Amalie Arena" }},
                "startTimeUTC": "2024-01-09T00:00:00Z",
                "tvBroadcasts": [
                    {{ "network": "ESPN", "countryCode": "US" }},
                    {{ "network": "SN", "countryCode": "CA" }}
                ],
                "awayTeam": {{
                    "id": {away_id},
                    "commonName": {{ "default": "Bruins" }},
                    "placeName": {{ "default": "Boston" }},
                    "abbrev": "BOS",
                    "darkLogo": "https://example.com/bos_dark.svg"
                }},
                "homeTeam": {{
                    "id": {home_id},
                    "commonName": {{ "default": "Lightning" }},
                    "placeName": {{ "default": "Tampa Bay" }},
                    "abbrev": "TBL",
                    "darkLogo": "https://example.com/tbl_dark.svg"
                }}
            }}"#
        );
        serde_json::from_str(&body).unwrap()
    }

    fn normalizer() -> Normalizer {
        Normalizer::new(
            14,
            vec![
                LocalizedText::new("Tampa Bay Lightning", "en"),
                LocalizedText::new("Lightning de Tampa Bay", "fr"),
            ],
        )
    }

    #[test]
    fn test_irrelevant_game_skipped() {
        let game = sample_game(7, 6);
        assert!(normalizer().normalize(&game).unwrap().is_none());
    }

    #[test]
    fn test_home_game_times_and_subtitle() {
        let game = sample_game(14, 6);
        let event = normalizer().normalize(&game).unwrap().unwrap();

        // 30 minute lead-in, 3 hour broadcast window
        assert_eq!(event.start, Utc.with_ymd_and_hms(2024, 1, 8, 23, 30, 0).unwrap());
        assert_eq!(
            event.stop,
            Some(Utc.with_ymd_and_hms(2024, 1, 9, 3, 0, 0).unwrap())
        );

        assert_eq!(event.sub_title.unwrap().value, "vs Boston Bruins, Jan 9");
        assert_eq!(event.icon.as_deref(), Some("https://example.com/bos_dark.svg"));
        assert_eq!(event.episode.xmltv_ns(), "2023.020573.");
    }

    #[test]
    fn test_away_game_uses_at_symbol() {
        let game = sample_game(6, 14);
        let event = normalizer().normalize(&game).unwrap().unwrap();
        let sub = event.sub_title.unwrap().value;
        assert!(sub.starts_with("at "), "got: {sub}");
        // Opponent is the home side for away games
        assert_eq!(event.icon.as_deref(), Some("https://example.com/tbl_dark.svg"));
    }

    #[test]
    fn test_description_lists_broadcasts() {
        let game = sample_game(14, 6);
        let event = normalizer().normalize(&game).unwrap().unwrap();
        let desc = event.desc.unwrap().value;
        assert!(desc.starts_with("At Amalie Arena."), "got: {desc}");
        assert!(desc.contains("ESPN (US) \u{2022} SN (CA)"), "got: {desc}");
    }

    #[test]
    fn test_special_event_branding() {
        let mut game = sample_game(14, 6);
        game.special_event = serde_json::from_str(
            r#"{
                "name": { "default": "Winter Classic" },
                "lightLogoUrl": { "default": "https://example.com/wc.svg" }
            }"#,
        )
        .ok();
        let event = normalizer().normalize(&game).unwrap().unwrap();
        assert!(event.desc.unwrap().value.starts_with("Winter Classic at Amalie Arena."));
        assert_eq!(event.icon.as_deref(), Some("https://example.com/wc.svg"));
    }

    #[test]
    fn test_short_id_is_validation_error() {
        let mut game = sample_game(14, 6);
        game.id = 999;
        assert!(normalizer().normalize(&game).is_err());
    }

    // Keeps the wire-type tests honest: a full response deserializes and
    // each contained game normalizes without touching the network.
    #[test]
    fn test_normalize_from_full_response() {
        let body = r#"{
            "gameWeek": [{
                "date": "2024-01-08",
                "games": [{
                    "id": 2023020600,
                    "venue": { "default": "TD Garden" },
                    "startTimeUTC": "2024-01-09T00:00:00Z",
                    "awayTeam": {
                        "id": 14,
                        "commonName": { "default": "Lightning" },
                        "placeName": { "default": "Tampa Bay" },
                        "abbrev": "TBL"
                    },
                    "homeTeam": {
                        "id": 6,
                        "commonName": { "default": "Bruins" },
                        "placeName": { "default": "Boston" },
                        "abbrev": "BOS"
                    }
                }]
            }]
        }"#;
        let resp: ScheduleResponse = serde_json::from_str(body).unwrap();
        let day = &resp.game_week.unwrap()[0];
        let event = normalizer().normalize(&day.games[0]).unwrap().unwrap();
        assert_eq!(event.episode.onscreen(), "S2023E020600");
    }
}
