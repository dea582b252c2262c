//! Mars Rover error handling - unified encapsulated API
//!
//! One error type, five kinds, one per violated rule of the mission format.
//! All failures are deterministic consequences of malformed input; nothing
//! here is retryable.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};
use thiserror::Error;

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Source context for error reporting: the mission program text and the name
/// it was loaded under (file path, "stdin", "demo", ...).
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from the real program text.
    pub fn from_input(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a fallback when no program text is available (I/O failures).
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("# {}", context),
        }
    }

    /// Convert to NamedSource for use with miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

/// The single error type - no wrapper, no nesting, just essential data.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct RoverError {
    /// What went wrong (kind-specific data)
    pub kind: ErrorKind,
    /// Where it happened in the mission program
    pub source_info: SourceInfo,
    /// How to help (auto-populated based on context)
    pub diagnostic_info: DiagnosticInfo,
}

/// The five validation-failure kinds of the mission format.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErrorKind {
    /// Malformed overall structure: empty input, fewer than three lines, or
    /// an even line count (one plateau line plus position/command pairs).
    #[error("invalid input: {reason}")]
    InputNotValid { reason: String },

    /// Non-numeric or negative plateau bounds.
    #[error("invalid plateau dimensions '{width} {height}'")]
    PlateauDimensionNotValid { width: String, height: String },

    /// Initial position non-numeric, negative, or outside the plateau.
    #[error("invalid position '{x} {y}'")]
    PositionNotValid { x: String, y: String },

    /// Heading token other than N, E, S, W.
    #[error("invalid direction '{token}'")]
    DirectionNotValid { token: String },

    /// Command character other than L, R, M.
    #[error("invalid command '{command}'")]
    CommandNotValid { command: char },
}

/// Context-specific source information.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// Context-aware error creation - each context knows how to create
/// appropriately coded and sourced errors.
pub trait ErrorReporting {
    /// Create an error with context-appropriate enhancements.
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> RoverError;

    fn input_not_valid(&self, reason: &str, span: SourceSpan) -> RoverError {
        self.report(
            ErrorKind::InputNotValid {
                reason: reason.into(),
            },
            span,
        )
    }

    fn plateau_dimension_not_valid(&self, width: &str, height: &str, span: SourceSpan) -> RoverError {
        self.report(
            ErrorKind::PlateauDimensionNotValid {
                width: width.into(),
                height: height.into(),
            },
            span,
        )
    }

    fn position_not_valid(&self, x: &str, y: &str, span: SourceSpan) -> RoverError {
        self.report(
            ErrorKind::PositionNotValid {
                x: x.into(),
                y: y.into(),
            },
            span,
        )
    }

    fn direction_not_valid(&self, token: &str, span: SourceSpan) -> RoverError {
        self.report(
            ErrorKind::DirectionNotValid {
                token: token.into(),
            },
            span,
        )
    }

    fn command_not_valid(&self, command: char, span: SourceSpan) -> RoverError {
        self.report(ErrorKind::CommandNotValid { command }, span)
    }
}

impl ErrorKind {
    /// Get the error category for test assertions.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InputNotValid { .. } => ErrorCategory::Parse,

            Self::PlateauDimensionNotValid { .. }
            | Self::PositionNotValid { .. }
            | Self::DirectionNotValid { .. } => ErrorCategory::Validation,

            Self::CommandNotValid { .. } => ErrorCategory::Execution,
        }
    }

    /// Get error code suffix for diagnostic codes.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::InputNotValid { .. } => "input_not_valid",
            Self::PlateauDimensionNotValid { .. } => "plateau_dimension_not_valid",
            Self::PositionNotValid { .. } => "position_not_valid",
            Self::DirectionNotValid { .. } => "direction_not_valid",
            Self::CommandNotValid { .. } => "command_not_valid",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Validation,
    Execution,
}

impl Diagnostic for RoverError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl RoverError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::InputNotValid { .. } => "malformed program structure".into(),
            ErrorKind::PlateauDimensionNotValid { .. } => "invalid plateau bounds".into(),
            ErrorKind::PositionNotValid { .. } => "position malformed or off the plateau".into(),
            ErrorKind::DirectionNotValid { .. } => "unrecognized heading".into(),
            ErrorKind::CommandNotValid { .. } => "unrecognized command".into(),
        }
    }
}

/// Creates a placeholder span for errors not tied to a specific location in
/// the program, such as I/O failures. Makes the intent of an empty span
/// explicit and searchable.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// General-purpose error creation context: a source program plus the pipeline
/// phase currently working on it ("interpret", "execute", "file-system").
pub struct ValidationContext {
    pub source: SourceContext,
    pub phase: String,
}

impl ValidationContext {
    pub fn new(source: SourceContext, phase: impl Into<String>) -> Self {
        Self {
            source,
            phase: phase.into(),
        }
    }
}

impl ErrorReporting for ValidationContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> RoverError {
        let error_code = format!("rover::{}::{}", self.phase, kind.code_suffix());

        RoverError {
            kind,
            source_info: SourceInfo {
                source: self.source.to_named_source(),
                primary_span: span,
                phase: self.phase.clone(),
            },
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code,
            },
        }
    }
}

/// Prints a RoverError with full miette diagnostics.
///
/// This provides rich error formatting with source spans and context. Use
/// this for user-facing error display in the CLI.
pub fn print_error(error: RoverError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
