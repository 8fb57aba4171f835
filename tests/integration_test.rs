// Integration tests for the streaming interpreter

use brainstream::interpreter::commands::{default_commands, Command};
use brainstream::interpreter::engine::{Runner, RunnerConfig, UnknownCharPolicy};
use brainstream::interpreter::errors::EngineError;
use brainstream::memory::{sparse::SparseTape, Tape};
use brainstream::streams::OutputCapture;
use std::io::{self, Cursor, Write};

fn runner_with(input: &[u8], config: RunnerConfig) -> (Runner, OutputCapture) {
    let output = OutputCapture::new();
    let runner = Runner::with_config(Cursor::new(input.to_vec()), output.clone(), config)
        .expect("Runner creation failed");
    (runner, output)
}

fn run(source: &str, input: &[u8]) -> (Runner, OutputCapture) {
    let (mut runner, output) = runner_with(input, RunnerConfig::default());
    runner.run_source(source).expect("Execution failed");
    (runner, output)
}

#[test]
fn test_countdown_echo() {
    let (runner, output) = run(",[.-]", &[3]);

    assert_eq!(output.bytes(), vec![3, 2, 1]);
    assert_eq!(runner.tape().read(), 0);
    assert_eq!(runner.stack_depth(), 1);
}

#[test]
fn test_move_idiom() {
    let (mut runner, _) = runner_with(&[], RunnerConfig::default());
    runner.run_source("+++++").unwrap();
    runner.run_source("[->+<]").unwrap();

    assert_eq!(runner.tape().cell_at(0), Some(0));
    assert_eq!(runner.tape().cell_at(1), Some(5));
    assert_eq!(runner.tape().head(), 0);
}

#[test]
fn test_hello_world() {
    let source = "++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.>>.<-.<.+++.------.--------.>>+.>++.";
    let (_, output) = run(source, &[]);

    assert_eq!(output.text(), "Hello World!\n");
}

#[test]
fn test_echo_round_trip() {
    let (_, output) = run(",.,.,.", b"abc");
    assert_eq!(output.bytes(), b"abc".to_vec());

    let (_, output) = run("", b"abc");
    assert!(output.is_empty());
}

#[test]
fn test_input_exhaustion_leaves_cell() {
    let (runner, _) = run("+++,", &[]);
    assert_eq!(runner.tape().read(), 3);
}

#[test]
fn test_output_writes_low_byte() {
    let source = "+".repeat(256 + 65) + ".";
    let (runner, output) = run(&source, &[]);

    assert_eq!(runner.tape().read(), 321);
    assert_eq!(output.text(), "A");
}

#[test]
fn test_cells_wrap() {
    let (runner, _) = run("-", &[]);
    assert_eq!(runner.tape().read(), 65535);

    let (runner, _) = run("-+", &[]);
    assert_eq!(runner.tape().read(), 0);
}

#[test]
fn test_move_left_of_start_fails() {
    let (mut runner, _) = runner_with(&[], RunnerConfig::default());
    let err = runner.execute('<').unwrap_err();

    assert!(matches!(
        err,
        EngineError::OutOfBounds {
            position: -1,
            capacity: 30000
        }
    ));
    assert_eq!(runner.tape().head(), 0);
}

#[test]
fn test_move_past_end_fails_at_crossing_step() {
    let source = ">".repeat(30000);
    let (mut runner, _) = runner_with(&[], RunnerConfig::default());
    let err = runner.run_source(&source).unwrap_err();

    assert_eq!(err.position, 29999);
    assert_eq!(err.ch, '>');
    assert!(matches!(err.error, EngineError::OutOfBounds { position: 30000, .. }));
    assert_eq!(runner.tape().head(), 29999);
}

#[test]
fn test_feed_error_reports_position() {
    let config = RunnerConfig::new().with_policy(UnknownCharPolicy::ZeroTolerance);
    let (mut runner, _) = runner_with(&[], config);
    let err = runner.run_source("++x+").unwrap_err();

    assert_eq!(err.position, 2);
    assert_eq!(err.ch, 'x');
    assert!(matches!(err.error, EngineError::UnknownCharacter('x')));
    assert_eq!(
        err.to_string(),
        "execution failed at position 2 on command 'x': there is no such command char in command map: 'x'"
    );
    assert_eq!(runner.tape().read(), 2);
}

#[test]
fn test_stray_close_bracket_is_unknown() {
    let (mut runner, _) = runner_with(&[], RunnerConfig::default());
    let err = runner.execute(']').unwrap_err();
    assert!(matches!(err, EngineError::UnknownCharacter(']')));
}

#[test]
fn test_whitespace_policy() {
    let (runner, _) = run("+ +\n\t+", &[]);
    assert_eq!(runner.tape().read(), 3);

    let config = RunnerConfig::new().with_policy(UnknownCharPolicy::ZeroTolerance);
    let (mut runner, _) = runner_with(&[], config);
    let err = runner.run_source("+ +").unwrap_err();
    assert_eq!(err.position, 1);
    assert!(matches!(err.error, EngineError::UnknownCharacter(' ')));
}

#[test]
fn test_ignore_unknown_policy_allows_comments() {
    let source = "add one + and another +";

    let config = RunnerConfig::new().with_policy(UnknownCharPolicy::IgnoreUnknown);
    let (mut runner, _) = runner_with(&[], config);
    runner.run_source(source).expect("Execution failed");
    assert_eq!(runner.tape().read(), 2);

    let (mut runner, _) = runner_with(&[], RunnerConfig::default());
    let err = runner.run_source(source).unwrap_err();
    assert_eq!(err.position, 0);
    assert_eq!(err.ch, 'a');
}

#[test]
fn test_halt_command_ends_run() {
    let mut commands = default_commands();
    commands.insert('!', Command::Halt);
    let (mut runner, _) = runner_with(&[], RunnerConfig::new().with_commands(commands));

    let outcome = runner.run_source("+!+").unwrap();
    assert!(outcome.halted);
    assert_eq!(outcome.consumed, 2);
    assert_eq!(runner.tape().read(), 1);
    assert!(runner.is_finished());

    // The run stays over
    assert!(matches!(runner.execute('+'), Err(EngineError::RunOver)));
    assert_eq!(runner.tape().read(), 1);
}

#[test]
fn test_custom_command_is_replayed() {
    let mut commands = default_commands();
    commands.insert(
        '*',
        Command::custom(|state| {
            let value = state.tape.read();
            state.tape.write(value.wrapping_mul(2));
            Ok(())
        }),
    );
    let (mut runner, _) = runner_with(&[], RunnerConfig::new().with_commands(commands));

    runner.run_source("+++**").unwrap();
    assert_eq!(runner.tape().read(), 12);

    runner.run_source(">>+<++[>*<-]").unwrap();
    assert_eq!(runner.tape().cell_at(2), Some(4));
}

#[test]
fn test_sparse_tape() {
    let config = RunnerConfig::new().with_tape(SparseTape::with_capacity(100_000));
    let (mut runner, _) = runner_with(&[], config);
    let source = ">".repeat(50_000) + "++";
    runner.run_source(&source).unwrap();

    assert_eq!(runner.tape().head(), 50_000);
    assert_eq!(runner.tape().read(), 2);
    assert_eq!(runner.tape().capacity(), 100_000);
}

struct BrokenSink;

impl Write for BrokenSink {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_sink_error_propagates() {
    let mut runner = Runner::new(io::empty(), BrokenSink).unwrap();
    let err = runner.run_source("+.").unwrap_err();

    assert_eq!(err.position, 1);
    assert!(matches!(err.error, EngineError::Io(_)));
    assert!(!runner.is_finished());
}
