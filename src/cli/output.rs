//! Handles all user-facing output for the CLI.
//!
//! This module is responsible for colorizing results, serializing parsed
//! instructions to JSON, and formatting errors. Centralizing output logic
//! here keeps the user experience consistent across all commands.

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::errors::{print_error, RoverError};
use crate::interpreter::Instruction;

/// Color only when stdout is a terminal.
fn color_choice() -> ColorChoice {
    if atty::is(atty::Stream::Stdout) {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    }
}

/// Prints the final rover states, one per line, in input order.
pub fn print_results(results: &[String]) {
    let mut stdout = StandardStream::stdout(color_choice());
    for state in results {
        let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
        println!("{}", state);
        let _ = stdout.reset();
    }
}

/// Prints parsed instruction records as pretty JSON.
pub fn print_instructions(instructions: &[Instruction]) {
    match serde_json::to_string_pretty(instructions) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: could not serialize instructions: {}", e),
    }
}

/// Prints a validation success marker.
pub fn print_ok(source_name: &str) {
    let mut stdout = StandardStream::stdout(color_choice());
    let _ = stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true));
    println!("ok: {}", source_name);
    let _ = stdout.reset();
}

/// Prints a RoverError with full miette diagnostics to stderr.
pub fn print_diagnostic(error: RoverError) {
    print_error(error);
}
