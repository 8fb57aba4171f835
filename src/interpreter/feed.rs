//! Driving a runner over a character stream.
//!
//! The runner itself does not know where it is in the source. [`run_chars`]
//! counts positions so failures can name the offending character.

use crate::interpreter::engine::Runner;
use crate::interpreter::errors::EngineError;
use std::fmt;

/// How a feed ended without error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOutcome {
    /// Characters handed to the runner, including the one that halted it
    pub consumed: usize,
    /// Whether a command ended the run before the input did
    pub halted: bool,
}

/// An engine error together with where in the feed it happened
#[derive(Debug)]
pub struct FeedError {
    /// Zero-based character index in the feed
    pub position: usize,
    pub ch: char,
    pub error: EngineError,
}

impl fmt::Display for FeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "execution failed at position {} on command {:?}: {}",
            self.position, self.ch, self.error
        )
    }
}

impl std::error::Error for FeedError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Feed `chars` to `runner` in order, stopping at the end of the input or
/// when the run is over.
pub fn run_chars<I>(runner: &mut Runner, chars: I) -> Result<FeedOutcome, FeedError>
where
    I: IntoIterator<Item = char>,
{
    let mut consumed = 0;
    for (position, ch) in chars.into_iter().enumerate() {
        consumed = position + 1;
        match runner.execute(ch) {
            Ok(()) => {}
            Err(EngineError::RunOver) => {
                return Ok(FeedOutcome {
                    consumed,
                    halted: true,
                })
            }
            Err(error) => {
                return Err(FeedError {
                    position,
                    ch,
                    error,
                })
            }
        }
    }
    Ok(FeedOutcome {
        consumed,
        halted: false,
    })
}
