//! The rover state machine: a position and a heading, driven by commands.

use std::fmt;

use crate::errors::{ErrorReporting, RoverError};
use crate::heading::Heading;
use crate::interpreter::{CommandLine, Instruction};
use crate::position::{parse_coordinates, parse_dimensions, Position};

/// One atomic instruction in a rover's program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Left,
    Right,
    Move,
}

impl Command {
    /// Parses a single command character; `None` for anything outside
    /// L, R, M.
    pub fn parse(ch: char) -> Option<Command> {
        match ch {
            'L' => Some(Command::Left),
            'R' => Some(Command::Right),
            'M' => Some(Command::Move),
            _ => None,
        }
    }
}

/// A rover on the plateau. Both fields are replaced, never mutated in
/// place: turns and moves produce fresh `Heading` and `Position` values.
#[derive(Debug, Clone)]
pub struct Rover {
    position: Position,
    heading: Heading,
}

impl Rover {
    /// Builds a rover from a parsed instruction, validating the raw tokens
    /// in the order the mission format defines them: plateau bounds, then
    /// coordinates, then heading. Any invalid token fails construction with
    /// the corresponding error kind.
    pub fn from_instruction(
        instruction: &Instruction,
        ctx: &impl ErrorReporting,
    ) -> Result<Self, RoverError> {
        let (x_max, y_max) = parse_dimensions(&instruction.plateau, ctx)?;
        let (x, y) = parse_coordinates(&instruction.x, &instruction.y, ctx)?;

        let position = Position::new(x, y, x_max, y_max, ctx, instruction.position_span())?;
        let heading = Heading::parse(&instruction.heading.text, ctx, instruction.heading.span())?;

        Ok(Self { position, heading })
    }

    /// Applies the command line strictly in order. The first unrecognized
    /// character fails with its exact source span and aborts the remaining
    /// commands; callers must treat the whole instruction as failed.
    pub fn execute(
        &mut self,
        commands: &CommandLine,
        ctx: &impl ErrorReporting,
    ) -> Result<(), RoverError> {
        for (i, ch) in commands.text.char_indices() {
            match Command::parse(ch) {
                Some(Command::Left) => self.heading = self.heading.turn_left(),
                Some(Command::Right) => self.heading = self.heading.turn_right(),
                Some(Command::Move) => self.position = self.position.move_to(self.heading),
                None => return Err(ctx.command_not_valid(ch, commands.span_at(i, ch))),
            }
        }
        Ok(())
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }
}

impl fmt::Display for Rover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position, self.heading)
    }
}
