//! The Mars Rover command-line interface.
//!
//! This module is the main entry point for all CLI commands and orchestrates
//! the core library functions.

use std::path::Path;
use std::process;

use clap::Parser;

use crate::cli::args::{Command, RoverArgs};
use crate::engine::RoverService;
use crate::errors::{RoverError, SourceContext, ValidationContext};
use crate::interpreter;

pub mod args;
pub mod output;

/// The canonical two-rover mission used by the `demo` subcommand.
const DEMO_MISSION: &str = "5 5\n1 2 N\nLMLMLMLMM\n3 3 E\nMMRMMRMRRM";

/// The main entry point for the CLI.
pub fn run() {
    let args = RoverArgs::parse();

    let result = match args.command {
        Command::Run { file } => handle_run(&file),
        Command::Interpret { file } => handle_interpret(&file),
        Command::Validate { file } => handle_validate(&file),
        Command::Demo => handle_demo(),
    };

    if let Err(e) = result {
        output::print_diagnostic(e);
        process::exit(1);
    }
}

/// Handles the `run` subcommand.
fn handle_run(path: &Path) -> Result<(), RoverError> {
    let input = RoverService::read_file(path)?;
    let results = RoverService::new().process(&input, &path.to_string_lossy())?;
    output::print_results(&results);
    Ok(())
}

/// Handles the `interpret` subcommand: parse only, no execution.
fn handle_interpret(path: &Path) -> Result<(), RoverError> {
    let input = RoverService::read_file(path)?;
    let source = SourceContext::from_input(path.to_string_lossy(), input.as_str());
    let ctx = ValidationContext::new(source, "interpret");
    let instructions = interpreter::interpret(&input, &ctx)?;
    output::print_instructions(&instructions);
    Ok(())
}

/// Handles the `validate` subcommand.
fn handle_validate(path: &Path) -> Result<(), RoverError> {
    let input = RoverService::read_file(path)?;
    let source_name = path.to_string_lossy();
    RoverService::new().process(&input, &source_name)?;
    output::print_ok(&source_name);
    Ok(())
}

/// Handles the `demo` subcommand.
fn handle_demo() -> Result<(), RoverError> {
    let results = RoverService::new().process(DEMO_MISSION, "demo")?;

    println!("INPUT");
    for line in DEMO_MISSION.lines() {
        println!("{}", line);
    }
    println!();
    println!("OUTPUT");
    output::print_results(&results);
    Ok(())
}
