//! # Introduction
//!
//! brainstream runs programs in the eight-command tape language
//! (`> < + - . , [ ]`) one character at a time. It never sees the whole
//! program: loops are recorded on their first pass and replayed from memory,
//! so a host can feed source from any stream and stop at any point.
//!
//! ## Execution pipeline
//!
//! ```text
//! char → Runner → top context → command → tape / byte I/O / context stack
//! ```
//!
//! 1. [`interpreter`] — the [`Runner`](interpreter::engine::Runner), command
//!    registry, context stack and loop controller.
//! 2. [`memory`] — the [`Tape`](memory::Tape) abstraction with a fixed-size and a
//!    sparse implementation.
//! 3. [`streams`] — byte source and sink traits plus an in-memory capture sink.
//! 4. [`ui`] — ratatui-based stepper; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use brainstream::interpreter::engine::Runner;
//! use brainstream::streams::OutputCapture;
//!
//! let output = OutputCapture::new();
//! let mut runner = Runner::new(&b"\x03"[..], output.clone()).unwrap();
//! runner.run_source(",[.-]").unwrap();
//! assert_eq!(output.bytes(), vec![3, 2, 1]);
//! ```

pub mod interpreter;
pub mod memory;
pub mod streams;
pub mod ui;
