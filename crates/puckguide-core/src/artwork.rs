//! Matchup artwork side-table.
//!
//! A small CSV file maps a matchup plus a date to extra backdrop images:
//!
//! ```text
//! home,away,date,url
//! Tampa Bay Lightning,Boston Bruins,2024-01-09,https://example.com/a.jpg
//! ```
//!
//! Lookups are order-independent in the two participant names and
//! case-insensitive. A miss is not an error; the entry just gets no extra
//! artwork.

use std::collections::HashMap;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{CoreError, ValidationError};

type MatchupKey = (String, String, NaiveDate);

/// In-memory artwork lookup table.
#[derive(Debug, Default)]
pub struct ArtworkTable {
    entries: HashMap<MatchupKey, Vec<String>>,
}

/// Normalized, order-independent key for a matchup.
fn matchup_key(a: &str, b: &str, date: NaiveDate) -> MatchupKey {
    let a = a.trim().to_lowercase();
    let b = b.trim().to_lowercase();
    if a <= b {
        (a, b, date)
    } else {
        (b, a, date)
    }
}

impl ArtworkTable {
    /// Load a table from a CSV file.
    ///
    /// # Errors
    /// Returns an IO error if the file cannot be read, or
    /// [`ValidationError::BadArtworkRow`] for rows without exactly four
    /// columns or with an unparseable date.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    /// Parse CSV content. `path` is only used for error messages.
    pub fn parse(content: &str, path: &Path) -> Result<Self, CoreError> {
        let mut entries: HashMap<MatchupKey, Vec<String>> = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // Header row
            if idx == 0 && line.eq_ignore_ascii_case("home,away,date,url") {
                continue;
            }

            let fields: Vec<&str> = line.split(',').collect();
            if fields.len() != 4 {
                return Err(ValidationError::BadArtworkRow {
                    path: path.to_path_buf(),
                    line: idx + 1,
                    message: format!("expected 4 columns, found {}", fields.len()),
                }
                .into());
            }

            let date: NaiveDate =
                fields[2]
                    .trim()
                    .parse()
                    .map_err(|_| ValidationError::BadArtworkRow {
                        path: path.to_path_buf(),
                        line: idx + 1,
                        message: format!("cannot parse date '{}'", fields[2].trim()),
                    })?;

            entries
                .entry(matchup_key(fields[0], fields[1], date))
                .or_default()
                .push(fields[3].trim().to_string());
        }

        Ok(Self { entries })
    }

    /// Look up artwork for a matchup on a date. Participant order does not
    /// matter. Returns an empty slice on a miss.
    pub fn lookup(&self, home: &str, away: &str, date: NaiveDate) -> &[String] {
        self.entries
            .get(&matchup_key(home, away, date))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
