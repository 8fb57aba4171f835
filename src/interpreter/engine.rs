// Runner for the streaming interpreter

use crate::interpreter::commands::{default_commands, CommandMap};
use crate::interpreter::context::{
    execute_item, ContextStack, ContextSummary, PlainContext, StackItem, VecStack,
};
use crate::interpreter::errors::EngineError;
use crate::interpreter::feed::{self, FeedError, FeedOutcome};
use crate::memory::{tape::FixedTape, Tape};
use crate::streams::{ByteSink, ByteSource};
use std::fmt;
use std::str::FromStr;

/// Everything a command may touch
pub struct InterpreterState {
    pub tape: Box<dyn Tape>,
    pub stack: Box<dyn ContextStack>,
    pub input: Box<dyn ByteSource>,
    pub output: Box<dyn ByteSink>,
}

/// What to do with characters that have no command in the active context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCharPolicy {
    /// Every unknown character is an error
    ZeroTolerance,
    /// Whitespace is skipped, anything else is an error
    #[default]
    IgnoreWhitespace,
    /// Unknown characters are skipped, so the source may contain comments
    IgnoreUnknown,
}

impl UnknownCharPolicy {
    pub fn tolerates(self, ch: char) -> bool {
        match self {
            UnknownCharPolicy::ZeroTolerance => false,
            UnknownCharPolicy::IgnoreWhitespace => ch.is_whitespace(),
            UnknownCharPolicy::IgnoreUnknown => true,
        }
    }
}

impl FromStr for UnknownCharPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "zero" => Ok(UnknownCharPolicy::ZeroTolerance),
            "whitespace" => Ok(UnknownCharPolicy::IgnoreWhitespace),
            "unknown" => Ok(UnknownCharPolicy::IgnoreUnknown),
            other => Err(format!(
                "unknown policy '{}' (expected zero, whitespace or unknown)",
                other
            )),
        }
    }
}

impl fmt::Display for UnknownCharPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnknownCharPolicy::ZeroTolerance => "zero",
            UnknownCharPolicy::IgnoreWhitespace => "whitespace",
            UnknownCharPolicy::IgnoreUnknown => "unknown",
        };
        write!(f, "{}", name)
    }
}

/// Construction options for [`Runner`]; unset parts fall back to defaults
#[derive(Default)]
pub struct RunnerConfig {
    tape: Option<Box<dyn Tape>>,
    stack: Option<Box<dyn ContextStack>>,
    commands: Option<CommandMap>,
    policy: UnknownCharPolicy,
}

impl RunnerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tape(mut self, tape: impl Tape + 'static) -> Self {
        self.tape = Some(Box::new(tape));
        self
    }

    pub fn with_stack(mut self, stack: impl ContextStack + 'static) -> Self {
        self.stack = Some(Box::new(stack));
        self
    }

    /// Replace the root command mapping
    pub fn with_commands(mut self, commands: CommandMap) -> Self {
        self.commands = Some(commands);
        self
    }

    pub fn with_policy(mut self, policy: UnknownCharPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Executes a program fed one character at a time
pub struct Runner {
    state: InterpreterState,

    policy: UnknownCharPolicy,

    /// Set once a command ends the run; never cleared
    finished: bool,
}

impl Runner {
    /// Create a runner with the default tape, stack, commands and policy
    pub fn new(
        input: impl ByteSource + 'static,
        output: impl ByteSink + 'static,
    ) -> Result<Self, EngineError> {
        Self::with_config(input, output, RunnerConfig::default())
    }

    pub fn with_config(
        input: impl ByteSource + 'static,
        output: impl ByteSink + 'static,
        config: RunnerConfig,
    ) -> Result<Self, EngineError> {
        let tape = config
            .tape
            .unwrap_or_else(|| Box::new(FixedTape::new()));
        let mut stack = config.stack.unwrap_or_else(|| Box::new(VecStack::new()));
        let commands = config.commands.unwrap_or_else(default_commands);

        stack.push(StackItem::Plain(PlainContext::new(commands)))?;

        Ok(Runner {
            state: InterpreterState {
                tape,
                stack,
                input: Box::new(input),
                output: Box::new(output),
            },
            policy: config.policy,
            finished: false,
        })
    }

    /// Execute the next source character.
    ///
    /// Returns [`EngineError::RunOver`] once the run has ended; the caller
    /// should stop feeding characters at that point.
    pub fn execute(&mut self, ch: char) -> Result<(), EngineError> {
        if self.finished {
            return Err(EngineError::RunOver);
        }

        let top = self
            .state
            .stack
            .top_index()
            .ok_or(EngineError::EmptyStack)?;

        match execute_item(&mut self.state, top, ch) {
            Ok(()) => Ok(()),
            Err(EngineError::RunOver) => {
                self.finished = true;
                Err(EngineError::RunOver)
            }
            Err(EngineError::UnknownCharacter(unknown)) if self.policy.tolerates(unknown) => {
                Ok(())
            }
            Err(err) => Err(err),
        }
    }

    /// Feed a whole source string, see [`feed::run_chars`]
    pub fn run_source(&mut self, source: &str) -> Result<FeedOutcome, FeedError> {
        feed::run_chars(self, source.chars())
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn policy(&self) -> UnknownCharPolicy {
        self.policy
    }

    pub fn tape(&self) -> &dyn Tape {
        self.state.tape.as_ref()
    }

    /// Number of contexts on the stack, the root included
    pub fn stack_depth(&self) -> usize {
        self.state.stack.len()
    }

    /// Contexts from the root (first) to the active one (last)
    pub fn contexts(&self) -> Vec<ContextSummary> {
        (0..self.state.stack.len())
            .filter_map(|index| self.state.stack.get(index))
            .map(StackItem::summary)
            .collect()
    }

    pub fn flush(&mut self) -> Result<(), EngineError> {
        self.state.output.flush()?;
        Ok(())
    }
}
