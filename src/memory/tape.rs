//! Fixed-size tape
//!
//! [`FixedTape`] is the default memory: a boxed slice of cells allocated once
//! for the whole run, zero-initialised, with the head starting on cell 0.

use super::{check_bounds, Cell, OutOfBounds, Position, Tape};
use crate::interpreter::constants::DEFAULT_TAPE_CAPACITY;

#[derive(Debug, Clone)]
pub struct FixedTape {
    cells: Box<[Cell]>,
    head: usize,
}

impl FixedTape {
    /// Create a tape with the default capacity of 30000 cells
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_TAPE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        FixedTape {
            cells: vec![0; capacity].into_boxed_slice(),
            head: 0,
        }
    }
}

impl Default for FixedTape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape for FixedTape {
    fn head(&self) -> Position {
        self.head as Position
    }

    fn move_head(&mut self, position: Position) -> Result<(), OutOfBounds> {
        self.head = check_bounds(position, self.cells.len())?;
        Ok(())
    }

    fn read(&self) -> Cell {
        self.cells[self.head]
    }

    fn write(&mut self, value: Cell) {
        self.cells[self.head] = value;
    }

    fn capacity(&self) -> usize {
        self.cells.len()
    }

    fn cell_at(&self, position: Position) -> Option<Cell> {
        check_bounds(position, self.cells.len())
            .ok()
            .map(|index| self.cells[index])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed_at_head_zero() {
        let tape = FixedTape::new();
        assert_eq!(tape.head(), 0);
        assert_eq!(tape.read(), 0);
        assert_eq!(tape.capacity(), 30000);
        assert_eq!(tape.cell_at(29999), Some(0));
        assert_eq!(tape.cell_at(30000), None);
    }

    #[test]
    fn test_move_and_write() {
        let mut tape = FixedTape::with_capacity(8);
        tape.write(7);
        tape.move_head(5).unwrap();
        tape.write(9);

        assert_eq!(tape.head(), 5);
        assert_eq!(tape.read(), 9);
        assert_eq!(tape.cell_at(0), Some(7));
    }

    #[test]
    fn test_move_out_of_bounds_keeps_head() {
        let mut tape = FixedTape::with_capacity(4);
        tape.move_head(3).unwrap();

        let err = tape.move_head(4).unwrap_err();
        assert_eq!(
            err,
            OutOfBounds {
                position: 4,
                capacity: 4
            }
        );
        assert_eq!(tape.head(), 3);

        assert!(tape.move_head(-1).is_err());
        assert_eq!(tape.head(), 3);
    }
}
