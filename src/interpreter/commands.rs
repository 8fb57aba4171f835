//! Command registry
//!
//! A [`CommandMap`] maps command characters to [`Command`]s. The registry
//! returned by [`default_commands`] is built once and handed to the runner;
//! every stack item that needs its own view of the mapping receives a copy.
//!
//! | char | command | effect |
//! |------|---------|--------|
//! | `>` | [`Command::MoveRight`] | head + 1, fails past the last cell |
//! | `<` | [`Command::MoveLeft`] | head - 1, fails before cell 0 |
//! | `+` | [`Command::Increment`] | cell + 1, wrapping |
//! | `-` | [`Command::Decrement`] | cell - 1, wrapping |
//! | `.` | [`Command::Output`] | write the cell's low byte |
//! | `,` | [`Command::Input`] | read a byte; end of input leaves the cell alone |
//! | `[` | [`Command::EnterLoop`] | see [`loops`](crate::interpreter::loops) |
//!
//! `]` is not in the root mapping. It only gains a meaning inside a loop
//! context, so a stray `]` at the top level is an unknown character.

use crate::interpreter::constants::*;
use crate::interpreter::engine::InterpreterState;
use crate::interpreter::errors::EngineError;
use crate::interpreter::loops;
use crate::memory::Cell;
use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

/// Signature of a user-supplied command
pub type CommandFn = dyn Fn(&mut InterpreterState) -> Result<(), EngineError>;

/// Mapping from command character to behavior
pub type CommandMap = FxHashMap<char, Command>;

/// The effect of one command character
#[derive(Clone)]
pub enum Command {
    MoveRight,
    MoveLeft,
    Increment,
    Decrement,
    Output,
    Input,

    /// Open a loop closed by `exit`
    EnterLoop { exit: char },

    /// End the run with [`EngineError::RunOver`]
    Halt,

    Custom(Rc<CommandFn>),
}

impl Command {
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&mut InterpreterState) -> Result<(), EngineError> + 'static,
    {
        Command::Custom(Rc::new(f))
    }

    /// Run the command against `state`.
    ///
    /// `ch` is the character that selected this command. `scope` is the index
    /// of the recording context the command runs in, if any; loops opened
    /// from inside a recording forward their characters to it.
    pub(crate) fn invoke(
        &self,
        state: &mut InterpreterState,
        ch: char,
        scope: Option<usize>,
    ) -> Result<(), EngineError> {
        match self {
            Command::MoveRight => {
                let head = state.tape.head();
                state.tape.move_head(head + 1)?;
            }
            Command::MoveLeft => {
                let head = state.tape.head();
                state.tape.move_head(head - 1)?;
            }
            Command::Increment => {
                let value = state.tape.read();
                state.tape.write(value.wrapping_add(1));
            }
            Command::Decrement => {
                let value = state.tape.read();
                state.tape.write(value.wrapping_sub(1));
            }
            Command::Output => {
                let value = state.tape.read();
                state.output.write_byte(value as u8)?;
            }
            Command::Input => {
                if let Some(byte) = state.input.read_byte()? {
                    state.tape.write(byte as Cell);
                }
            }
            Command::EnterLoop { exit } => {
                loops::enter_loop(state, ch, *exit, scope)?;
            }
            Command::Halt => return Err(EngineError::RunOver),
            Command::Custom(f) => (**f)(state)?,
        }
        Ok(())
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::MoveRight => write!(f, "MoveRight"),
            Command::MoveLeft => write!(f, "MoveLeft"),
            Command::Increment => write!(f, "Increment"),
            Command::Decrement => write!(f, "Decrement"),
            Command::Output => write!(f, "Output"),
            Command::Input => write!(f, "Input"),
            Command::EnterLoop { exit } => write!(f, "EnterLoop {{ exit: {:?} }}", exit),
            Command::Halt => write!(f, "Halt"),
            Command::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

/// The standard eight-command registry (`]` is bound by loop contexts)
pub fn default_commands() -> CommandMap {
    let mut commands = CommandMap::default();
    commands.insert(MOVE_RIGHT_CHAR, Command::MoveRight);
    commands.insert(MOVE_LEFT_CHAR, Command::MoveLeft);
    commands.insert(INCREMENT_CHAR, Command::Increment);
    commands.insert(DECREMENT_CHAR, Command::Decrement);
    commands.insert(OUTPUT_CHAR, Command::Output);
    commands.insert(INPUT_CHAR, Command::Input);
    commands.insert(
        LOOP_ENTER_CHAR,
        Command::EnterLoop {
            exit: LOOP_EXIT_CHAR,
        },
    );
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_contents() {
        let commands = default_commands();
        assert_eq!(commands.len(), 7);
        assert!(matches!(commands.get(&'+'), Some(Command::Increment)));
        assert!(matches!(
            commands.get(&'['),
            Some(Command::EnterLoop { exit: ']' })
        ));
        assert!(!commands.contains_key(&']'));
    }

    #[test]
    fn test_copies_are_independent() {
        let original = default_commands();
        let mut copy = original.clone();
        copy.insert('!', Command::Halt);
        copy.remove(&'+');

        assert!(!original.contains_key(&'!'));
        assert!(original.contains_key(&'+'));
    }
}
