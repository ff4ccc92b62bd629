//! Entry point for the kireme binary

use clap::Parser;
use kireme_cli::commands::{self, Commands};

/// Rule-based sentence segmentation and terminology extraction
#[derive(Debug, Parser)]
#[command(name = "kireme", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn run(cli: Cli) -> kireme_cli::CliResult<()> {
    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::Extract(args) => args.execute(),
        Commands::Validate(args) => args.execute(),
        Commands::List { subcommand } => {
            match subcommand {
                commands::ListCommands::Languages => commands::list_languages(),
            }
            Ok(())
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }
}
