//! Tape memory for the interpreter
//!
//! This module provides the tape abstraction the engine runs against:
//! - [`Tape`]: the four-operation capability set (head, move, read, write)
//! - [`tape::FixedTape`]: the default zero-initialised array of cells
//! - [`sparse::SparseTape`]: a hash-backed tape that only stores touched cells
//!
//! # Cells
//!
//! Cells are unsigned 16-bit counters. Arithmetic on them wraps modulo 2^16;
//! [`MIN_CELL`] and [`MAX_CELL`] describe the range but are never used to clamp.
//!
//! # Bounds
//!
//! The head is a signed [`Position`] so that moving left of cell 0 can be
//! expressed and rejected. Every implementation must refuse a move outside
//! `0..capacity` with [`OutOfBounds`] and leave the head where it was.

pub mod sparse;
pub mod tape;

use std::fmt;

/// A single tape cell
pub type Cell = u16;

/// Index of a cell on the tape
pub type Position = i64;

pub const MIN_CELL: Cell = Cell::MIN;
pub const MAX_CELL: Cell = Cell::MAX;

/// The head was asked to move outside the tape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfBounds {
    pub position: Position,
    pub capacity: usize,
}

impl fmt::Display for OutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "head position {} is out of memory bounds [0, {}]",
            self.position,
            self.capacity as i64 - 1
        )
    }
}

impl std::error::Error for OutOfBounds {}

/// Linear memory the interpreter reads and writes through its head.
///
/// The engine only ever calls [`head`](Tape::head), [`move_head`](Tape::move_head),
/// [`read`](Tape::read) and [`write`](Tape::write). The remaining methods exist
/// for hosts that want to display the tape.
pub trait Tape {
    fn head(&self) -> Position;

    fn move_head(&mut self, position: Position) -> Result<(), OutOfBounds>;

    /// Value under the head
    fn read(&self) -> Cell;

    fn write(&mut self, value: Cell);

    /// Number of addressable cells
    fn capacity(&self) -> usize;

    /// Value of an arbitrary cell, `None` outside the tape
    fn cell_at(&self, position: Position) -> Option<Cell>;
}

/// Check `position` against `0..capacity`
pub(crate) fn check_bounds(position: Position, capacity: usize) -> Result<usize, OutOfBounds> {
    if position < 0 || position as u64 >= capacity as u64 {
        return Err(OutOfBounds { position, capacity });
    }
    Ok(position as usize)
}
