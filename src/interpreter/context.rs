//! Execution context stack
//!
//! The interpreter decides what a character means by asking the item on top
//! of a stack of contexts. Each loop nesting level owns one item:
//!
//! - [`PlainContext`]: a command mapping; the root of every run
//! - [`RecordingContext`]: a loop running its first pass, recording its body
//! - [`SkipContext`]: a loop whose guard was zero, counting brackets until its
//!   matching close
//!
//! # Recording
//!
//! A recording context handles a character in two steps. The save step appends
//! it to the recorded body while recording is open and, only when it was
//! appended, forwards it to the enclosing recording context so that an outer
//! loop still learns the full text of its own body. The effect step runs the
//! command, but only when the item is on top of the stack; a parent that
//! receives a forwarded character records it and does nothing else.
//!
//! Items refer to their parent by stack index. A parent is always below its
//! child, so the index stays valid for the child's whole lifetime.

use crate::interpreter::commands::{Command, CommandMap};
use crate::interpreter::engine::InterpreterState;
use crate::interpreter::errors::EngineError;
use crate::interpreter::loops;

/// One level of the context stack
#[derive(Debug, Clone)]
pub enum StackItem {
    Plain(PlainContext),
    Recording(RecordingContext),
    Skip(SkipContext),
}

impl StackItem {
    /// Copy of the mapping a loop opened inside this item starts from
    pub fn copy_commands(&self) -> CommandMap {
        match self {
            StackItem::Plain(plain) => plain.commands.clone(),
            StackItem::Recording(recording) => recording.commands.clone(),
            StackItem::Skip(skip) => skip.commands.clone(),
        }
    }

    pub fn summary(&self) -> ContextSummary {
        match self {
            StackItem::Plain(plain) => ContextSummary::Plain {
                commands: plain.commands.len(),
            },
            StackItem::Recording(recording) => ContextSummary::Recording {
                recorded: recording.recorded.len(),
                open: recording.recording_open,
            },
            StackItem::Skip(skip) => ContextSummary::Skip { depth: skip.depth },
        }
    }
}

/// Read-only description of a stack item, for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextSummary {
    Plain { commands: usize },
    Recording { recorded: usize, open: bool },
    Skip { depth: usize },
}

#[derive(Debug, Clone)]
pub struct PlainContext {
    commands: CommandMap,
}

impl PlainContext {
    pub fn new(commands: CommandMap) -> Self {
        PlainContext { commands }
    }

    fn lookup(&self, ch: char) -> Result<Command, EngineError> {
        self.commands
            .get(&ch)
            .cloned()
            .ok_or(EngineError::UnknownCharacter(ch))
    }
}

/// What a recording context does with a character once it is saved
enum Effect {
    Invoke(Command),
    Replay,
}

/// A loop on its first pass
#[derive(Debug, Clone)]
pub struct RecordingContext {
    commands: CommandMap,
    exit: char,
    recorded: Vec<char>,
    recording_open: bool,
    parent: Option<usize>,
}

impl RecordingContext {
    pub fn new(commands: CommandMap, exit: char, parent: Option<usize>) -> Self {
        RecordingContext {
            commands,
            exit,
            recorded: Vec::new(),
            recording_open: true,
            parent,
        }
    }

    /// The body recorded so far
    pub fn recorded(&self) -> &[char] {
        &self.recorded
    }

    pub fn is_recording(&self) -> bool {
        self.recording_open
    }

    /// Save step. Returns the parent to forward `ch` to and the effect to
    /// run if this item is on top.
    fn save(&mut self, ch: char) -> Result<(Option<usize>, Effect), EngineError> {
        let effect = if ch == self.exit {
            Effect::Replay
        } else {
            let command = self
                .commands
                .get(&ch)
                .cloned()
                .ok_or(EngineError::UnknownCharacter(ch))?;
            Effect::Invoke(command)
        };

        if !self.recording_open {
            return Ok((None, effect));
        }
        self.recorded.push(ch);
        Ok((self.parent, effect))
    }

    /// Close the recording and return the loop body.
    ///
    /// The exit character that triggered the close was saved just before and
    /// is dropped here.
    pub(crate) fn stop_recording(&mut self) -> Vec<char> {
        if self.recording_open {
            self.recording_open = false;
            self.recorded.pop();
        }
        self.recorded.clone()
    }
}

/// A loop whose guard was zero on entry
#[derive(Debug, Clone)]
pub struct SkipContext {
    commands: CommandMap,
    enter: char,
    exit: char,
    depth: usize,
    parent: Option<usize>,
}

impl SkipContext {
    pub fn new(commands: CommandMap, enter: char, exit: char, parent: Option<usize>) -> Self {
        SkipContext {
            commands,
            enter,
            exit,
            depth: 1,
            parent,
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    fn recognizes(&self, ch: char) -> bool {
        ch == self.enter || ch == self.exit || self.commands.contains_key(&ch)
    }

    /// Track bracket depth; true once the matching close has been seen
    fn count(&mut self, ch: char) -> bool {
        if ch == self.enter {
            self.depth += 1;
        } else if ch == self.exit {
            self.depth -= 1;
        }
        self.depth == 0
    }
}

/// Handle `ch` with the stack item at `index`.
///
/// Only the top item applies effects; lower items reached through forwarding
/// just record.
pub(crate) fn execute_item(
    state: &mut InterpreterState,
    index: usize,
    ch: char,
) -> Result<(), EngineError> {
    let is_top = state.stack.top_index() == Some(index);
    let item = state.stack.get_mut(index).ok_or(EngineError::EmptyStack)?;

    match item {
        StackItem::Plain(plain) => {
            let command = plain.lookup(ch)?;
            command.invoke(state, ch, None)
        }
        StackItem::Recording(recording) => {
            let (forward_to, effect) = recording.save(ch)?;
            if let Some(parent) = forward_to {
                execute_item(state, parent, ch)?;
            }
            if !is_top {
                return Ok(());
            }
            match effect {
                Effect::Invoke(command) => command.invoke(state, ch, Some(index)),
                Effect::Replay => loops::exit_loop(state, index),
            }
        }
        StackItem::Skip(skip) => {
            if !skip.recognizes(ch) {
                return Err(EngineError::UnknownCharacter(ch));
            }
            let forward_to = skip.parent;
            if let Some(parent) = forward_to {
                execute_item(state, parent, ch)?;
            }
            if !is_top {
                return Ok(());
            }
            let closed = match state.stack.get_mut(index) {
                Some(StackItem::Skip(skip)) => skip.count(ch),
                _ => return Err(EngineError::EmptyStack),
            };
            if closed {
                state.stack.pop()?;
            }
            Ok(())
        }
    }
}

/// Ordered storage for stack items.
///
/// The runner pushes the root context at construction, so the stack is never
/// empty while a run is alive.
pub trait ContextStack {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, item: StackItem) -> Result<(), EngineError>;

    /// Remove the top item; [`EngineError::EmptyStack`] if there is none
    fn pop(&mut self) -> Result<StackItem, EngineError>;

    fn get(&self, index: usize) -> Option<&StackItem>;

    fn get_mut(&mut self, index: usize) -> Option<&mut StackItem>;

    fn top_index(&self) -> Option<usize> {
        self.len().checked_sub(1)
    }

    fn top(&self) -> Option<&StackItem> {
        self.top_index().and_then(|index| self.get(index))
    }
}

/// Vector-backed [`ContextStack`]
#[derive(Debug, Clone, Default)]
pub struct VecStack {
    items: Vec<StackItem>,
}

impl VecStack {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContextStack for VecStack {
    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, item: StackItem) -> Result<(), EngineError> {
        self.items.push(item);
        Ok(())
    }

    fn pop(&mut self) -> Result<StackItem, EngineError> {
        self.items.pop().ok_or(EngineError::EmptyStack)
    }

    fn get(&self, index: usize) -> Option<&StackItem> {
        self.items.get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut StackItem> {
        self.items.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::commands::default_commands;

    #[test]
    fn test_pop_empty_stack_fails() {
        let mut stack = VecStack::new();
        assert!(matches!(stack.pop(), Err(EngineError::EmptyStack)));
        assert_eq!(stack.top_index(), None);
    }

    #[test]
    fn test_push_pop_order() {
        let mut stack = VecStack::new();
        stack
            .push(StackItem::Plain(PlainContext::new(default_commands())))
            .unwrap();
        stack
            .push(StackItem::Skip(SkipContext::new(
                default_commands(),
                '[',
                ']',
                None,
            )))
            .unwrap();

        assert_eq!(stack.len(), 2);
        assert_eq!(stack.top_index(), Some(1));
        assert!(matches!(stack.pop(), Ok(StackItem::Skip(_))));
        assert!(matches!(stack.top(), Some(StackItem::Plain(_))));
    }

    #[test]
    fn test_recording_drops_closing_char() {
        let mut recording = RecordingContext::new(default_commands(), ']', None);
        for ch in ['-', '>', '+', ']'] {
            recording.save(ch).unwrap();
        }

        let body = recording.stop_recording();
        assert_eq!(body, vec!['-', '>', '+']);
        assert!(!recording.is_recording());

        // closed recordings neither grow nor forward
        let (forward_to, _) = recording.save('+').unwrap();
        assert_eq!(forward_to, None);
        assert_eq!(recording.recorded(), &['-', '>', '+']);
    }

    #[test]
    fn test_recording_rejects_unknown_without_saving() {
        let mut recording = RecordingContext::new(default_commands(), ']', Some(0));
        assert!(matches!(
            recording.save(' '),
            Err(EngineError::UnknownCharacter(' '))
        ));
        assert!(recording.recorded().is_empty());

        let (forward_to, _) = recording.save('+').unwrap();
        assert_eq!(forward_to, Some(0));
    }

    #[test]
    fn test_skip_counts_nested_brackets() {
        let mut skip = SkipContext::new(default_commands(), '[', ']', None);
        assert!(!skip.count('['));
        assert_eq!(skip.depth(), 2);
        assert!(!skip.count('+'));
        assert!(!skip.count(']'));
        assert!(skip.count(']'));
    }
}
