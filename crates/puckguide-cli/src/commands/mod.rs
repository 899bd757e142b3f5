pub mod build;
pub mod config;
pub mod preview;

use chrono::{Duration, NaiveDate, Utc};

/// Resolve the window start date: an explicit `--from` override, or one
/// day before today. Starting a day early can pick up a game that would
/// otherwise be missed if the guide is generated at exactly the wrong time.
pub fn window_start(from: Option<&str>) -> Result<NaiveDate, Box<dyn std::error::Error>> {
    match from {
        Some(s) => Ok(s
            .parse()
            .map_err(|_| format!("cannot parse '{s}' as a date (expected YYYY-MM-DD)"))?),
        None => Ok((Utc::now() - Duration::days(1)).date_naive()),
    }
}
