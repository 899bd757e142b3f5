//! End-to-end guide build pipeline.
//!
//! Wires config, fetch, synthesis and serialization together so the CLI
//! stays a thin layer. The caller supplies the window start date; nothing
//! below this point reads the wall clock, which keeps a build reproducible
//! for a fixed window.

use chrono::NaiveDate;
use std::path::Path;

use crate::artwork::ArtworkTable;
use crate::config::Config;
use crate::error::{CoreError, FetchError, ValidationError};
use crate::guide::{self, GapFiller, LocalizedText, Normalizer, Programme};
use crate::schedule::{GameDay, ScheduleClient};
use crate::xmltv::{self, Channel};

/// Builds a guide document from a configuration.
pub struct GuideBuilder {
    config: Config,
}

impl GuideBuilder {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Channel header for the output document.
    pub fn channel(&self) -> Channel {
        Channel {
            id: self.config.channel.id.clone(),
            display_name: self.config.channel.name.clone(),
            icon: self.config.channel.icon.clone(),
            url: self.config.channel.url.clone(),
        }
    }

    fn normalizer(&self) -> Normalizer {
        let mut titles = vec![LocalizedText::new(self.config.team.title_en.clone(), "en")];
        if let Some(fr) = &self.config.team.title_fr {
            titles.push(LocalizedText::new(fr.clone(), "fr"));
        }
        Normalizer::new(self.config.team.id, titles)
    }

    fn gap_filler(&self) -> GapFiller {
        GapFiller::new(
            self.config.filler.title.clone(),
            self.config.filler.image.clone(),
        )
    }

    /// Load the artwork side-table if one is configured.
    pub fn load_artwork(&self) -> Result<Option<ArtworkTable>, CoreError> {
        match &self.config.output.artwork_csv {
            Some(path) => Ok(Some(ArtworkTable::load(Path::new(path))?)),
            None => Ok(None),
        }
    }

    /// Fetch the configured schedule window starting at `first_date`.
    pub async fn fetch_days(&self, first_date: NaiveDate) -> Result<Vec<GameDay>, FetchError> {
        let client = ScheduleClient::new(&self.config.fetch.base_url);
        client.fetch_window(first_date, self.config.fetch.weeks).await
    }

    /// Synthesize the programme sequence for already-fetched days.
    pub fn programmes(
        &self,
        days: &[GameDay],
        artwork: Option<&ArtworkTable>,
    ) -> Result<Vec<Programme>, ValidationError> {
        guide::synthesize(days, &self.normalizer(), &self.gap_filler(), artwork)
    }

    /// Full pipeline: fetch, synthesize, render. Any failure aborts before
    /// a document exists, so the caller never writes a partial guide.
    pub async fn build(&self, first_date: NaiveDate) -> Result<String, CoreError> {
        let artwork = self.load_artwork()?;
        let days = self.fetch_days(first_date).await?;
        let programmes = self.programmes(&days, artwork.as_ref())?;
        Ok(xmltv::write_guide(&self.channel(), &programmes))
    }
}
