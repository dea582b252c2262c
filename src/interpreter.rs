//! Mars Rover mission interpreter - clean, minimal implementation
//!
//! Converts the raw mission program into structured per-rover instructions
//! with source location tracking. This stage is purely structural: plateau
//! bounds, coordinates, headings, and command characters are carried as raw
//! tokens and validated later, when each rover is built and run. Deferring
//! validation keeps error ordering faithful to execution order: a bad command
//! on rover one surfaces before a bad heading on rover two.

use miette::SourceSpan;
use serde::Serialize;

use crate::errors::{ErrorReporting, RoverError};

// ============================================================================
// INSTRUCTION RECORDS
// ============================================================================

/// A raw token with its byte offset into the mission program.
///
/// A missing token is represented as an empty token at the end of its line;
/// it fails the same downstream validation a malformed token would.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub text: String,
    pub offset: usize,
}

impl Token {
    pub fn span(&self) -> SourceSpan {
        (self.offset..self.offset + self.text.len()).into()
    }
}

/// The plateau bounds line, shared by every instruction in one program.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plateau {
    pub width: Token,
    pub height: Token,
}

/// One rover's command line, kept as raw text; each character is validated
/// during execution, not here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandLine {
    pub text: String,
    pub offset: usize,
}

impl CommandLine {
    /// Span of the single command character at `index` (a byte index into
    /// `text`, as produced by `char_indices`).
    pub fn span_at(&self, index: usize, ch: char) -> SourceSpan {
        let start = self.offset + index;
        (start..start + ch.len_utf8()).into()
    }
}

/// The parsed record for one rover: plateau bounds, starting position and
/// heading tokens, and the command sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    pub plateau: Plateau,
    pub x: Token,
    pub y: Token,
    pub heading: Token,
    pub commands: CommandLine,
}

impl Instruction {
    /// Span covering the rover's position line tokens, used for start-state
    /// validation errors.
    pub fn position_span(&self) -> SourceSpan {
        let start = self.x.offset;
        let end = self.heading.offset + self.heading.text.len();
        (start..end.max(start)).into()
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses a mission program into one instruction per rover.
///
/// The program is one plateau line followed by pairs of position and command
/// lines. Anything else - empty input, fewer than three lines, an even line
/// count - is a structural failure.
pub fn interpret(
    input: &str,
    ctx: &impl ErrorReporting,
) -> Result<Vec<Instruction>, RoverError> {
    let lines = split_lines(input);

    if lines.len() < 3 || lines.len() % 2 == 0 {
        return Err(ctx.input_not_valid(
            &format!(
                "expected a plateau line followed by position/command line pairs, found {} line(s)",
                lines.len()
            ),
            (0..input.len()).into(),
        ));
    }

    let plateau = parse_plateau(&lines[0]);

    let mut instructions = Vec::with_capacity((lines.len() - 1) / 2);
    for pair in lines[1..].chunks_exact(2) {
        let (position_line, command_line) = (&pair[0], &pair[1]);
        let tokens = tokenize(position_line);

        instructions.push(Instruction {
            plateau: plateau.clone(),
            x: token_at(&tokens, 0, position_line),
            y: token_at(&tokens, 1, position_line),
            heading: token_at(&tokens, 2, position_line),
            commands: CommandLine {
                text: command_line.text.clone(),
                offset: command_line.offset,
            },
        });
    }

    Ok(instructions)
}

// ============================================================================
// LINE AND TOKEN SCANNING
// ============================================================================

/// A trimmed line with the byte offset of its first character in the
/// original input.
#[derive(Debug, Clone)]
struct Line {
    text: String,
    offset: usize,
}

/// Splits the outer-trimmed input into trimmed lines, preserving byte
/// offsets into the original text. Interior blank lines are kept: they count
/// toward the structural line total and fail it, by the oddness rule.
fn split_lines(input: &str) -> Vec<Line> {
    let body_start = input.len() - input.trim_start().len();
    let body = input.trim();

    let mut lines = Vec::new();
    let mut offset = body_start;
    for raw in body.split('\n') {
        let leading = raw.len() - raw.trim_start().len();
        lines.push(Line {
            text: raw.trim().to_string(),
            offset: offset + leading,
        });
        offset += raw.len() + 1;
    }
    lines
}

fn parse_plateau(line: &Line) -> Plateau {
    let tokens = tokenize(line);
    Plateau {
        width: token_at(&tokens, 0, line),
        height: token_at(&tokens, 1, line),
    }
}

/// Splits a line into whitespace-separated tokens with absolute offsets.
fn tokenize(line: &Line) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start = None;

    for (i, ch) in line.text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    text: line.text[s..i].to_string(),
                    offset: line.offset + s,
                });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: line.text[s..].to_string(),
            offset: line.offset + s,
        });
    }

    tokens
}

/// The `idx`-th token of a line, or an empty token at the line's end when
/// the line has fewer tokens. Extra tokens are ignored.
fn token_at(tokens: &[Token], idx: usize, line: &Line) -> Token {
    tokens.get(idx).cloned().unwrap_or(Token {
        text: String::new(),
        offset: line.offset + line.text.len(),
    })
}
