//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short = 'r', long, value_name = "FILE", required = true)]
    pub rules: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rule file: {}", self.rules.display());

        match kireme_core::load_rules(&self.rules) {
            Ok(rule_sets) => {
                println!("✓ Rule file is valid!");
                let mut codes: Vec<&String> = rule_sets.keys().collect();
                codes.sort();
                for code in codes {
                    let rules = &rule_sets[code];
                    println!(
                        "  {} ({}): {} rules",
                        rules.code(),
                        rules.name(),
                        rules.rules().len()
                    );
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule file is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
