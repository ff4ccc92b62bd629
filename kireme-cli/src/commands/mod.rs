//! CLI command implementations

use clap::Subcommand;

pub mod extract;
pub mod segment;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment raw text lines into sentences
    Segment(segment::SegmentArgs),

    /// Extract ranked terminology from tagged text
    Extract(extract::ExtractArgs),

    /// Validate a segmentation rule file
    Validate(validate::ValidateArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List embedded language rule sets
    Languages,
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(log_level),
    )
    .try_init();
}

/// Execute the `list languages` subcommand
pub fn list_languages() {
    for code in kireme_core::list_builtin_languages() {
        println!("{code}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Languages,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Languages"));
    }

    #[test]
    fn test_init_logging_is_idempotent() {
        // A second init must not panic even though the global logger is
        // already set.
        init_logging(1, false);
        init_logging(2, false);
        init_logging(0, true);
    }
}
