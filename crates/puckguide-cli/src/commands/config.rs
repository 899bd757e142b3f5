//! Configuration subcommand.

use clap::Subcommand;
use puckguide_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Get a value by dotted path, e.g. fetch.weeks
    Get {
        /// Dotted config key
        key: String,
    },
    /// Set a value by dotted path
    Set {
        /// Dotted config key
        key: String,
        /// New value
        value: String,
    },
    /// Show the full configuration
    List,
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load_or_default();
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            config.save()?;
            println!("{key} updated");
        }
        ConfigAction::List => {
            let config = Config::load_or_default();
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
