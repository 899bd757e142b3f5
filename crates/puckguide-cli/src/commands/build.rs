//! Build subcommand: fetch, synthesize, write the guide file.

use clap::Args;
use puckguide_core::{Config, GuideBuilder};

#[derive(Args)]
pub struct BuildArgs {
    /// Output path (defaults to the configured output.path)
    #[arg(long)]
    pub out: Option<String>,
    /// Number of schedule weeks to fetch (defaults to fetch.weeks)
    #[arg(long)]
    pub weeks: Option<u32>,
    /// Window start date, YYYY-MM-DD (defaults to yesterday)
    #[arg(long)]
    pub from: Option<String>,
}

pub fn run(args: BuildArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = Config::load_or_default();
    if let Some(weeks) = args.weeks {
        config.fetch.weeks = weeks;
    }
    let out = args.out.unwrap_or_else(|| config.output.path.clone());
    let first_date = super::window_start(args.from.as_deref())?;

    println!(
        "fetching {} week(s) of schedule starting {first_date}",
        config.fetch.weeks
    );

    let builder = GuideBuilder::new(config);
    let runtime = tokio::runtime::Runtime::new()?;
    // The document only exists once the whole run succeeded, so a fatal
    // fetch or validation error leaves no partial guide behind.
    let xml = runtime.block_on(builder.build(first_date))?;
    std::fs::write(&out, xml)?;

    println!("wrote {out}");
    Ok(())
}
