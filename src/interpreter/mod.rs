//! Streaming interpreter engine
//!
//! This module provides the execution machinery:
//! - [`engine`]: [`Runner`](engine::Runner), the tolerance policy and configuration
//! - [`commands`]: the command registry
//! - [`context`]: the execution context stack and its three item kinds
//! - [`loops`]: the record-and-replay loop controller
//! - [`feed`]: driving a runner over a whole source with position tracking
//! - [`errors`]: the error type shared by all of the above
//!
//! # Execution Model
//!
//! ```text
//! Runner::execute(ch) → top stack item → command lookup → command effect
//! ```
//!
//! A command may read or write the tape, talk to the byte handles, or push and
//! pop stack items (loop entry and exit). Control returns to the caller after
//! every character; nothing runs in the background.

pub mod commands;
pub mod constants;
pub mod context;
pub mod engine;
pub mod errors;
pub mod feed;
pub mod loops;
