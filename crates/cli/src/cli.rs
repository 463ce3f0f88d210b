//! Command-line argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "entity-builder")]
#[command(version)]
#[command(about = "Build content entity field definitions from a TOML manifest")]
#[command(long_about = "
entity-builder turns a TOML field manifest into the JSON field definitions
an entity type registers as its base fields.

Example usage:
  entity-builder build article.toml                 # Print definitions as JSON
  entity-builder build article.toml -o article.json # Write them to a file
  entity-builder validate article.toml              # Check a manifest
  entity-builder kinds                              # List supported field kinds
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build field definitions from a manifest
    Build {
        /// Path to the TOML manifest
        #[arg(env = "ENTITY_BUILDER_MANIFEST")]
        manifest: PathBuf,

        /// Write JSON to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Check a manifest without building output
    Validate {
        /// Path to the TOML manifest
        #[arg(env = "ENTITY_BUILDER_MANIFEST")]
        manifest: PathBuf,
    },

    /// List the supported field kinds
    Kinds {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}
