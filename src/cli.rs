//! Command-line interface, clap based.
//!
//! Defines the [`Cli`] struct with subcommands [`Command`] (validate, show,
//! demo) and global flags (--strict, --verbose).

use clap::{Parser, Subcommand};

/// remedian — remediation plan validation and inspection.
#[derive(Debug, Parser)]
#[command(name = "remedian", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Reject unknown fields during validation (overrides remedian.toml).
    #[arg(long, global = true, default_value_t = false)]
    pub strict: bool,

    /// Enable verbose output.
    #[arg(long, short, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a remediation document (JSON or TOML).
    Validate {
        /// Path to the document.
        file: String,
    },

    /// Show a summary of a remediation document, tolerating malformed input.
    Show {
        /// Path to the document.
        file: String,

        /// Emit the summary as JSON instead of styled text.
        #[arg(long)]
        json: bool,
    },

    /// Run the built-in sample plan through validation and reporting.
    Demo,
}
