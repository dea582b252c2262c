//! Mission pipeline: interpret, then build and run one rover per
//! instruction, in input order.
//!
//! This is the single entry point external callers use. The batch is
//! atomic: the first error from any stage aborts the whole call with no
//! partial output.

use std::path::Path;

use crate::errors::{ErrorReporting, RoverError, SourceContext, ValidationContext};
use crate::interpreter;
use crate::rover::Rover;

/// Orchestrates the interpret -> execute -> render pipeline.
#[derive(Debug, Default)]
pub struct RoverService;

impl RoverService {
    pub fn new() -> Self {
        Self
    }

    /// Processes a full mission program and returns one rendered final
    /// state per rover, in the order the rovers appear in the input.
    ///
    /// `source_name` is only used for diagnostics (the file path, "stdin",
    /// and so on).
    pub fn process(&self, input: &str, source_name: &str) -> Result<Vec<String>, RoverError> {
        let source = SourceContext::from_input(source_name, input);

        let interpret_ctx = ValidationContext::new(source.clone(), "interpret");
        let instructions = interpreter::interpret(input, &interpret_ctx)?;

        let execute_ctx = ValidationContext::new(source, "execute");
        let mut output = Vec::with_capacity(instructions.len());
        for instruction in &instructions {
            let mut rover = Rover::from_instruction(instruction, &execute_ctx)?;
            rover.execute(&instruction.commands, &execute_ctx)?;
            output.push(rover.to_string());
        }

        Ok(output)
    }

    /// Reads a mission file with standardized error handling.
    pub fn read_file(path: &Path) -> Result<String, RoverError> {
        let filename = path.to_string_lossy();
        std::fs::read_to_string(path).map_err(|error| {
            let context = ValidationContext::new(
                SourceContext::fallback("RoverService::read_file"),
                "file-system",
            );
            context.input_not_valid(
                &format!("cannot read '{}' ({})", filename, error),
                crate::errors::unspanned(),
            )
        })
    }
}
