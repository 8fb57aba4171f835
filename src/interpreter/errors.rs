//! Error types for the interpreter
//!
//! This module defines [`EngineError`], the single error type every command,
//! stack item and the runner return.
//!
//! Two variants are not failures in the usual sense:
//! - [`EngineError::UnknownCharacter`] may be swallowed by the runner's
//!   [`UnknownCharPolicy`](crate::interpreter::engine::UnknownCharPolicy)
//! - [`EngineError::RunOver`] is the termination signal emitted by a halting
//!   command; once seen, the run refuses further characters
//!
//! [`EngineError::EmptyStack`] always points at a defect in the loop controller
//! and cannot be triggered by a program.

use crate::memory::{OutOfBounds, Position};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum EngineError {
    /// The head was moved outside the tape
    OutOfBounds { position: Position, capacity: usize },

    /// No command is registered for this character in the active context
    UnknownCharacter(char),

    /// The context stack was empty (or missing an item) when the loop
    /// controller needed it
    EmptyStack,

    /// The byte source or sink failed
    Io(io::Error),

    /// The run was ended deliberately (internal signal, not a real error)
    RunOver,
}

impl EngineError {
    pub fn is_run_over(&self) -> bool {
        matches!(self, EngineError::RunOver)
    }

    /// The offending character of an [`EngineError::UnknownCharacter`]
    pub fn unknown_char(&self) -> Option<char> {
        match self {
            EngineError::UnknownCharacter(ch) => Some(*ch),
            _ => None,
        }
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::OutOfBounds { position, capacity } => {
                write!(f, "{}", OutOfBounds { position: *position, capacity: *capacity })
            }
            EngineError::UnknownCharacter(ch) => {
                write!(f, "there is no such command char in command map: {:?}", ch)
            }
            EngineError::EmptyStack => {
                write!(f, "context stack is empty")
            }
            EngineError::Io(err) => {
                write!(f, "I/O error: {}", err)
            }
            EngineError::RunOver => {
                write!(f, "run is over")
            }
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<OutOfBounds> for EngineError {
    fn from(err: OutOfBounds) -> Self {
        EngineError::OutOfBounds {
            position: err.position,
            capacity: err.capacity,
        }
    }
}

impl From<io::Error> for EngineError {
    fn from(err: io::Error) -> Self {
        EngineError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_keeps_cause() {
        let err = EngineError::from(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        assert!(err.source().is_some());
        assert_eq!(err.to_string(), "I/O error: closed");
    }

    #[test]
    fn test_out_of_bounds_message() {
        let err = EngineError::from(OutOfBounds {
            position: -1,
            capacity: 30000,
        });
        assert_eq!(
            err.to_string(),
            "head position -1 is out of memory bounds [0, 29999]"
        );
        assert!(err.source().is_none());
    }

    #[test]
    fn test_unknown_char_accessor() {
        assert_eq!(EngineError::UnknownCharacter('x').unknown_char(), Some('x'));
        assert_eq!(EngineError::RunOver.unknown_char(), None);
        assert!(EngineError::RunOver.is_run_over());
    }
}
