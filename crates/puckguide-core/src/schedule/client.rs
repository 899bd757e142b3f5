//! Schedule API client.
//!
//! Fetches forward schedule windows from the public schedule API one week
//! at a time. The endpoint is `GET {base}/v1/schedule/{YYYY-MM-DD}` and
//! each response covers the week starting at that date, grouped by day.
//! Any failed or malformed response aborts the whole window: gap analysis
//! needs a complete, ordered input, so partial windows are never returned.

use chrono::{Days, NaiveDate};
use reqwest::Client;

use super::types::{GameDay, ScheduleResponse};
use crate::error::FetchError;

/// Client for the public schedule API.
pub struct ScheduleClient {
    http: Client,
    base_url: String,
}

impl ScheduleClient {
    /// Create a client against the given API base, e.g.
    /// `https://api-web.nhle.com`. Trailing slashes are tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: Client::new(),
            base_url,
        }
    }

    /// Fetch the schedule week starting at `date`.
    pub async fn fetch_week(&self, date: NaiveDate) -> Result<ScheduleResponse, FetchError> {
        let url = format!("{}/v1/schedule/{}", self.base_url, date.format("%Y-%m-%d"));
        let resp = self.http.get(&url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::BadStatus {
                date,
                status: status.as_u16(),
            });
        }

        resp.json::<ScheduleResponse>()
            .await
            .map_err(|e| FetchError::MalformedBody {
                date,
                message: e.to_string(),
            })
    }

    /// Fetch `weeks` consecutive schedule weeks starting at `first_date`
    /// and return their day groupings in chronological order.
    ///
    /// The cursor advances to the day after the last day seen, so weeks
    /// chain without overlap regardless of how many days the API returns
    /// per response. Stops early if a response carries no week at all
    /// (season is over).
    pub async fn fetch_window(
        &self,
        first_date: NaiveDate,
        weeks: u32,
    ) -> Result<Vec<GameDay>, FetchError> {
        let mut days = Vec::new();
        let mut next_date = first_date;

        for _ in 0..weeks {
            let resp = self.fetch_week(next_date).await?;
            let Some(week) = resp.game_week else {
                break;
            };
            if week.is_empty() {
                break;
            }
            for day in week {
                next_date = day.date + Days::new(1);
                days.push(day);
            }
        }

        Ok(days)
    }
}
