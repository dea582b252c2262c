//! Cardinal headings and the turn algebra.
//!
//! A heading is one of exactly four values; turning is a pure function over
//! the enum, never a mutation of shared state.

use std::fmt;

use miette::SourceSpan;
use serde::Serialize;

use crate::errors::{ErrorReporting, RoverError};

/// One of the four cardinal directions a rover can face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

/// Cyclic order used for turns: a right turn steps forward through this
/// array, a left turn steps backward.
const ORDER: [Heading; 4] = [
    Heading::North,
    Heading::East,
    Heading::South,
    Heading::West,
];

impl Heading {
    /// Parses a heading token from the mission program.
    pub fn parse(
        token: &str,
        ctx: &impl ErrorReporting,
        span: SourceSpan,
    ) -> Result<Self, RoverError> {
        match token {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            _ => Err(ctx.direction_not_valid(token, span)),
        }
    }

    /// Returns the heading 90 degrees counter-clockwise from this one.
    pub fn turn_left(self) -> Heading {
        ORDER[(self.index() + 3) % 4]
    }

    /// Returns the heading 90 degrees clockwise from this one.
    pub fn turn_right(self) -> Heading {
        ORDER[(self.index() + 1) % 4]
    }

    /// The single-letter code used by the mission format.
    pub fn code(self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::East => "E",
            Heading::South => "S",
            Heading::West => "W",
        }
    }

    fn index(self) -> usize {
        ORDER.iter().position(|h| *h == self).unwrap_or(0)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
