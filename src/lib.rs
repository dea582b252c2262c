pub use crate::errors::{
    ErrorCategory, ErrorKind, ErrorReporting, RoverError, SourceContext, ValidationContext,
};

pub mod cli;
pub mod engine;
pub mod errors;
pub mod heading;
pub mod interpreter;
pub mod position;
pub mod rover;
