use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "puckguide", version, about = "XMLTV guide builder for a team broadcast channel")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the schedule window and write the guide XML
    Build(commands::build::BuildArgs),
    /// Fetch the schedule window and print the programme table
    Preview(commands::preview::PreviewArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Build(args) => commands::build::run(args),
        Commands::Preview(args) => commands::preview::run(args),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
