//! Hash-backed tape
//!
//! [`SparseTape`] stores only cells that have been written with a non-zero
//! value, so very large capacities cost nothing until they are used.

use super::{check_bounds, Cell, OutOfBounds, Position, Tape};
use crate::interpreter::constants::DEFAULT_TAPE_CAPACITY;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone)]
pub struct SparseTape {
    cells: FxHashMap<Position, Cell>,
    head: Position,
    capacity: usize,
}

impl SparseTape {
    pub fn with_capacity(capacity: usize) -> Self {
        SparseTape {
            cells: FxHashMap::default(),
            head: 0,
            capacity,
        }
    }

    /// Number of cells currently holding a non-zero value
    pub fn occupied(&self) -> usize {
        self.cells.len()
    }
}

impl Default for SparseTape {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TAPE_CAPACITY)
    }
}

impl Tape for SparseTape {
    fn head(&self) -> Position {
        self.head
    }

    fn move_head(&mut self, position: Position) -> Result<(), OutOfBounds> {
        check_bounds(position, self.capacity)?;
        self.head = position;
        Ok(())
    }

    fn read(&self) -> Cell {
        self.cells.get(&self.head).copied().unwrap_or(0)
    }

    fn write(&mut self, value: Cell) {
        if value == 0 {
            self.cells.remove(&self.head);
        } else {
            self.cells.insert(self.head, value);
        }
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn cell_at(&self, position: Position) -> Option<Cell> {
        check_bounds(position, self.capacity).ok()?;
        Some(self.cells.get(&position).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_non_zero_cells_are_stored() {
        let mut tape = SparseTape::with_capacity(1_000_000);
        tape.move_head(999_999).unwrap();
        tape.write(42);
        assert_eq!(tape.occupied(), 1);

        tape.write(0);
        assert_eq!(tape.occupied(), 0);
        assert_eq!(tape.read(), 0);
    }

    #[test]
    fn test_bounds_match_capacity() {
        let mut tape = SparseTape::with_capacity(2);
        assert!(tape.move_head(1).is_ok());
        assert!(tape.move_head(2).is_err());
        assert_eq!(tape.head(), 1);
        assert_eq!(tape.cell_at(-1), None);
    }
}
