use std::io;

use thiserror::Error;

use crate::construct::Row;

#[derive(Error, Debug)]
pub enum SetcalError {
    #[error("Usage error: {0}")]
    Usage(String),
    #[error("File error: cannot open '{path}': {source}")]
    File { path: String, #[source] source: io::Error },
    #[error("Format error on line {line}: {message}")]
    Format { message: String, line: usize },
    #[error("Syntax error on line {line}: {message}")]
    Syntax { message: String, line: usize },
    #[error("Reserved word on line {line}: '{token}' cannot be used as an element")]
    ReservedWord { token: String, line: usize },
    #[error("Membership error on line {line}: '{token}' is not an element of the universe")]
    Membership { token: String, line: usize },
    #[error("Duplicate error on line {line}: {message}")]
    Duplicate { message: String, line: usize },
    #[error("Reference error on line {line}: {kind} on row {row} doesn't exist")]
    Reference { kind: &'static str, row: String, line: usize },
    #[error("Arity error on line {line}: too {problem} arguments for '{command}'")]
    Arity { command: &'static str, problem: &'static str, line: usize },
    #[error("Unknown command on line {line}: command '{command}' doesn't exist")]
    UnknownCommand { command: String, line: usize },
    #[error("Allocation error: {0}")]
    Allocation(String),
    #[error("Config error: {0}")]
    Config(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SetcalError>;

// Helper constructors, used throughout the parsers
impl SetcalError {
    pub fn format(message: impl Into<String>, line: usize) -> Self {
        Self::Format { message: message.into(), line }
    }
    pub fn syntax(message: impl Into<String>, line: usize) -> Self {
        Self::Syntax { message: message.into(), line }
    }
    pub fn duplicate(message: impl Into<String>, line: usize) -> Self {
        Self::Duplicate { message: message.into(), line }
    }
    pub fn reference(kind: &'static str, row: Row, line: usize) -> Self {
        Self::Reference { kind, row: row.to_string(), line }
    }
    /// The physical input line the error was raised on, if it came from the input.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. }
            | Self::Syntax { line, .. }
            | Self::ReservedWord { line, .. }
            | Self::Membership { line, .. }
            | Self::Duplicate { line, .. }
            | Self::Reference { line, .. }
            | Self::Arity { line, .. }
            | Self::UnknownCommand { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<::config::ConfigError> for SetcalError {
    fn from(e: ::config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
