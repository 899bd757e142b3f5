//! Preview subcommand: print the programme table without writing XML.

use clap::Args;
use puckguide_core::{Config, GuideBuilder};

#[derive(Args)]
pub struct PreviewArgs {
    /// Number of schedule weeks to fetch (defaults to fetch.weeks)
    #[arg(long)]
    pub weeks: Option<u32>,
    /// Window start date, YYYY-MM-DD (defaults to yesterday)
    #[arg(long)]
    pub from: Option<String>,
    /// Print entries as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PreviewArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    if let Some(weeks) = args.weeks {
        config.fetch.weeks = weeks;
    }
    let first_date = super::window_start(args.from.as_deref())?;

    let builder = GuideBuilder::new(config);
    let runtime = tokio::runtime::Runtime::new()?;
    let artwork = builder.load_artwork()?;
    let days = runtime.block_on(builder.fetch_days(first_date))?;
    let programmes = builder.programmes(&days, artwork.as_ref())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&programmes)?);
        return Ok(());
    }

    for p in &programmes {
        let stop = p
            .stop
            .map(|s| s.to_rfc3339())
            .unwrap_or_else(|| "(unknown)".into());
        let label = p
            .sub_title
            .as_ref()
            .map(|s| s.value.clone())
            .or_else(|| p.title.first().map(|t| t.value.clone()))
            .unwrap_or_default();
        println!(
            "{}  {}  {:<14}  {}",
            p.start.to_rfc3339(),
            stop,
            p.episode.xmltv_ns(),
            label
        );
    }
    println!("{} programme(s)", programmes.len());
    Ok(())
}
