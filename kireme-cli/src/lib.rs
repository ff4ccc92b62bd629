//! Kireme CLI library
//!
//! Command-line surface over `kireme-core`: batch sentence segmentation
//! and tag-pattern terminology extraction.

pub mod commands;
pub mod error;
pub mod input;
pub mod output;

pub use error::{CliError, CliResult};
