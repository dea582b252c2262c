//! Defines the command-line arguments and subcommands for the Mars Rover CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "mars-rover",
    version,
    about = "A line-oriented mission interpreter and plateau simulator for autonomous rovers."
)]
pub struct RoverArgs {
    #[command(subcommand)]
    pub command: Command,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Full pipeline: interpret the mission file, run every rover, and
    /// print one final state per line.
    Run {
        /// The path to the mission file to run.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Print the parsed instruction records as JSON without executing.
    Interpret {
        /// The path to the mission file to interpret.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Run the full pipeline and report ok or the first diagnostic.
    Validate {
        /// The path to the mission file to validate.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Run the canonical two-rover example mission.
    Demo,
}
