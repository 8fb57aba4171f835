// brainstream: streaming tape-language interpreter with a terminal stepper

use std::fs;
use std::io::{self, BufWriter, Cursor, Read};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use brainstream::interpreter::engine::{Runner, RunnerConfig, UnknownCharPolicy};
use brainstream::streams::OutputCapture;
use brainstream::ui::App;

/// Parsed command line
struct Options {
    file: String,
    input: Option<String>,
    policy: UnknownCharPolicy,
    step: bool,
}

fn usage(program_name: &str) {
    eprintln!(
        "Usage: {} <file> [--input TEXT] [--policy zero|whitespace|unknown] [--step]",
        program_name
    );
    eprintln!();
    eprintln!("  --input TEXT   bytes for the ',' command (default: stdin)");
    eprintln!("  --policy P     how to treat non-command characters (default: whitespace)");
    eprintln!("  --step         open the terminal stepper instead of running to the end");
}

fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut file = None;
    let mut input = None;
    let mut policy = UnknownCharPolicy::default();
    let mut step = false;

    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--input" => {
                input = Some(iter.next().ok_or("--input needs a value")?.clone());
            }
            "--policy" => {
                policy = iter.next().ok_or("--policy needs a value")?.parse()?;
            }
            "--step" => step = true,
            other if other.starts_with("--") => {
                return Err(format!("unknown option '{}'", other));
            }
            other => {
                if file.is_some() {
                    return Err(format!("unexpected argument '{}'", other));
                }
                file = Some(other.to_string());
            }
        }
    }

    Ok(Options {
        file: file.ok_or("no input file provided")?,
        input,
        policy,
        step,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("brainstream");

    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("Error: {}", message);
            eprintln!();
            usage(program_name);
            std::process::exit(1);
        }
    };

    if !Path::new(&options.file).exists() {
        eprintln!("Error: File '{}' not found", options.file);
        usage(program_name);
        std::process::exit(1);
    }

    let source = fs::read_to_string(&options.file)?;
    let config = RunnerConfig::new().with_policy(options.policy);

    if options.step {
        return run_stepper(&source, options, config);
    }

    let input: Box<dyn Read> = match options.input {
        Some(text) => Box::new(Cursor::new(text.into_bytes())),
        None => Box::new(io::stdin()),
    };
    let output = BufWriter::new(io::stdout());
    let mut runner = Runner::with_config(input, output, config)?;

    let result = runner.run_source(&source);
    runner.flush()?;

    match result {
        Ok(outcome) => {
            if outcome.halted {
                eprintln!("Run halted after {} characters.", outcome.consumed);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!();
            eprintln!("Runtime error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run_stepper(
    source: &str,
    options: Options,
    config: RunnerConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = Cursor::new(options.input.unwrap_or_default().into_bytes());
    let output = OutputCapture::new();
    let runner = Runner::with_config(input, output.clone(), config)?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(runner, source, output);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
