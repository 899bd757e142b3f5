//! Episode numbering for games and filler blocks.
//!
//! The schedule API identifies games with a numeric id whose first four
//! digits are the season year and whose remainder is the sequence number
//! (game-type code included). Fillers derive their number from the game
//! that precedes the gap plus a zero-based hour index. The composite is
//! kept structured here and only flattened to strings at the XMLTV
//! boundary, so a filler index can never collide with a game sequence.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Structured episode number for a programme entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpisodeNum {
    /// Four-digit season year segment of the game id
    pub season: String,
    /// Remaining digits of the game id (includes the game-type code)
    pub sequence: String,
    /// Hour index for filler entries; `None` for real games
    pub filler_index: Option<u32>,
}

impl EpisodeNum {
    /// Split a game id into season + sequence segments.
    ///
    /// # Errors
    /// Returns [`ValidationError::BadGameId`] if the id has fewer than five
    /// digits, since then there is nothing left for the sequence segment.
    pub fn from_game_id(id: u64) -> Result<Self, ValidationError> {
        let digits = id.to_string();
        if digits.len() < 5 {
            return Err(ValidationError::BadGameId {
                id: digits,
                message: "expected at least 5 digits (4-digit season year + sequence)".into(),
            });
        }
        let (season, sequence) = digits.split_at(4);
        Ok(Self {
            season: season.to_string(),
            sequence: sequence.to_string(),
            filler_index: None,
        })
    }

    /// Derive the episode number for the filler at `index` hours into a gap
    /// that follows this game.
    pub fn filler(&self, index: u32) -> Self {
        Self {
            season: self.season.clone(),
            sequence: self.sequence.clone(),
            filler_index: Some(index),
        }
    }

    /// Format for the `xmltv_ns` episode-num system.
    ///
    /// Games render as `"{season}.{sequence}."`; fillers append the decimal
    /// index, so indices sort in time order within one gap.
    pub fn xmltv_ns(&self) -> String {
        match self.filler_index {
            Some(index) => format!("{}.{}.{}", self.season, self.sequence, index),
            None => format!("{}.{}.", self.season, self.sequence),
        }
    }

    /// Format for the `onscreen` episode-num system.
    ///
    /// Fillers carry the source game's onscreen tag unchanged.
    pub fn onscreen(&self) -> String {
        format!("S{}E{}", self.season, self.sequence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_game_id() {
        let ep = EpisodeNum::from_game_id(2024020573).unwrap();
        assert_eq!(ep.season, "2024");
        assert_eq!(ep.sequence, "020573");
        assert_eq!(ep.filler_index, None);
    }

    #[test]
    fn test_short_game_id_rejected() {
        assert!(EpisodeNum::from_game_id(2024).is_err());
        assert!(EpisodeNum::from_game_id(999).is_err());
        // Five digits is the minimum: one digit of sequence remains
        assert!(EpisodeNum::from_game_id(20240).is_ok());
    }

    #[test]
    fn test_xmltv_ns_formats() {
        let ep = EpisodeNum::from_game_id(2024020573).unwrap();
        assert_eq!(ep.xmltv_ns(), "2024.020573.");
        assert_eq!(ep.filler(0).xmltv_ns(), "2024.020573.0");
        assert_eq!(ep.filler(17).xmltv_ns(), "2024.020573.17");
    }

    #[test]
    fn test_onscreen_ignores_filler_index() {
        let ep = EpisodeNum::from_game_id(2024020573).unwrap();
        assert_eq!(ep.onscreen(), "S2024E020573");
        assert_eq!(ep.filler(3).onscreen(), "S2024E020573");
    }

    #[test]
    fn test_filler_tokens_distinct() {
        let ep = EpisodeNum::from_game_id(2024020573).unwrap();
        let tokens: Vec<String> = (0..36).map(|i| ep.filler(i).xmltv_ns()).collect();
        for (i, a) in tokens.iter().enumerate() {
            assert_ne!(*a, ep.xmltv_ns());
            for b in tokens.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
