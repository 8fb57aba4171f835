//! Loop controller for `[` and `]`.
//!
//! The interpreter never sees more than one character at a time, so it cannot
//! jump back to a loop's opening bracket. Instead a loop is learned on its
//! first pass and replayed from memory:
//!
//! 1. **Entry with a zero cell**: a [`SkipContext`] is pushed. It swallows every
//!    recognised character, counting nested brackets, and pops itself on the
//!    matching close. Nothing inside is executed.
//! 2. **Entry with a non-zero cell**: a [`RecordingContext`] is pushed. The body
//!    runs normally while its characters are appended to a recording.
//! 3. **Close**: recording stops and the body is replayed, one character at a
//!    time through whatever context is on top, until the cell under the head
//!    reads zero. Then the loop's context is popped.
//!
//! Loops opened inside a recording forward their characters to the enclosing
//! recording, skipped loops included, so the outer body is captured verbatim.
//!
//! An empty loop (`[]`) entered on a non-zero cell records nothing and spins
//! forever, exactly as the reference semantics of the language require.

use crate::interpreter::context::{execute_item, RecordingContext, SkipContext, StackItem};
use crate::interpreter::engine::InterpreterState;
use crate::interpreter::errors::EngineError;
use crate::memory::MIN_CELL;

/// Open a loop with `enter` and `exit` as its brackets.
///
/// `parent` is the recording context active when `enter` was read, if the
/// loop is nested inside one.
pub(crate) fn enter_loop(
    state: &mut InterpreterState,
    enter: char,
    exit: char,
    parent: Option<usize>,
) -> Result<(), EngineError> {
    let commands = state
        .stack
        .top()
        .ok_or(EngineError::EmptyStack)?
        .copy_commands();

    let item = if state.tape.read() == MIN_CELL {
        StackItem::Skip(SkipContext::new(commands, enter, exit, parent))
    } else {
        StackItem::Recording(RecordingContext::new(commands, exit, parent))
    };
    state.stack.push(item)
}

/// Close the recording loop at `index` and replay its body until the guard
/// cell reads zero.
pub(crate) fn exit_loop(state: &mut InterpreterState, index: usize) -> Result<(), EngineError> {
    let body = match state.stack.get_mut(index) {
        Some(StackItem::Recording(recording)) => recording.stop_recording(),
        _ => return Err(EngineError::EmptyStack),
    };

    // The guard is re-read every pass; the body may have moved the head.
    while state.tape.read() != MIN_CELL {
        for &ch in &body {
            let top = state.stack.top_index().ok_or(EngineError::EmptyStack)?;
            execute_item(state, top, ch)?;
        }
    }

    state.stack.pop()?;
    Ok(())
}
