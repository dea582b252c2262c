//! Bounded plateau coordinates and the clamp-at-boundary movement policy.
//!
//! A `Position` carries its plateau limits with it, so every position derived
//! from a valid one stays on the same plateau. A move that would leave the
//! plateau returns the position unchanged: rovers never fall off the edge,
//! they stop and keep accepting later commands.

use std::fmt;

use miette::SourceSpan;

use crate::errors::{ErrorReporting, RoverError};
use crate::heading::Heading;
use crate::interpreter::{Plateau, Token};

/// A coordinate pair bounded by `[0, x_max] x [0, y_max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    x: i64,
    y: i64,
    x_max: i64,
    y_max: i64,
}

impl Position {
    /// Validates limits first, then coordinates, matching the mission
    /// format's error surface: bad bounds are a plateau-dimension failure
    /// even when the coordinates are also bad.
    pub fn new(
        x: i64,
        y: i64,
        x_max: i64,
        y_max: i64,
        ctx: &impl ErrorReporting,
        span: SourceSpan,
    ) -> Result<Self, RoverError> {
        if x_max < 0 || y_max < 0 {
            return Err(ctx.plateau_dimension_not_valid(
                &x_max.to_string(),
                &y_max.to_string(),
                span,
            ));
        }
        if x < 0 || y < 0 || x > x_max || y > y_max {
            return Err(ctx.position_not_valid(&x.to_string(), &y.to_string(), span));
        }
        Ok(Self { x, y, x_max, y_max })
    }

    /// Returns the position one step in `heading`, clamped at the plateau
    /// edge: a blocked move yields the same coordinates, not an error and
    /// not a wraparound.
    pub fn move_to(self, heading: Heading) -> Position {
        match heading {
            Heading::North if self.y < self.y_max => Position {
                y: self.y + 1,
                ..self
            },
            Heading::South if self.y > 0 => Position {
                y: self.y - 1,
                ..self
            },
            Heading::East if self.x < self.x_max => Position {
                x: self.x + 1,
                ..self
            },
            Heading::West if self.x > 0 => Position {
                x: self.x - 1,
                ..self
            },
            _ => self,
        }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Parses the plateau bound tokens. A token that is not an integer is a
/// plateau-dimension failure, the same kind `Position::new` raises for
/// negative bounds; the span points at the failing token.
pub fn parse_dimensions(
    plateau: &Plateau,
    ctx: &impl ErrorReporting,
) -> Result<(i64, i64), RoverError> {
    let fail = |token: &Token| {
        ctx.plateau_dimension_not_valid(&plateau.width.text, &plateau.height.text, token.span())
    };
    let width = plateau.width.text.parse::<i64>().map_err(|_| fail(&plateau.width))?;
    let height = plateau.height.text.parse::<i64>().map_err(|_| fail(&plateau.height))?;
    Ok((width, height))
}

/// Parses the coordinate tokens. Non-numeric coordinates are a position
/// failure, the same kind `Position::new` raises for out-of-bounds values.
pub fn parse_coordinates(
    x: &Token,
    y: &Token,
    ctx: &impl ErrorReporting,
) -> Result<(i64, i64), RoverError> {
    let fail = |token: &Token| ctx.position_not_valid(&x.text, &y.text, token.span());
    let x_val = x.text.parse::<i64>().map_err(|_| fail(x))?;
    let y_val = y.text.parse::<i64>().map_err(|_| fail(y))?;
    Ok((x_val, y_val))
}
