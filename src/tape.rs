//! The memory tape.
//!
//! Starts as a single zero cell and grows to the right one cell at a time,
//! only when the data pointer steps past the last cell. It never shrinks.

use crate::error::TapeError;

/// A right-growable tape of wrapping `u8` cells with a data pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tape {
    cells: Vec<u8>,
    position: usize,
}

impl Default for Tape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape {
    pub fn new() -> Self {
        Self {
            cells: vec![0],
            position: 0,
        }
    }

    /// Move one cell right, appending a zero cell when standing on the last one.
    pub fn move_right(&mut self) {
        if self.position == self.cells.len() - 1 {
            self.cells.push(0);
        }
        self.position += 1;
    }

    /// Move one cell left. Fails at cell 0.
    pub fn move_left(&mut self) -> Result<(), TapeError> {
        self.move_left_by(1)
    }

    /// Move `n` cells left as one step. Either the whole move happens or
    /// nothing does.
    pub fn move_left_by(&mut self, n: usize) -> Result<(), TapeError> {
        if n > self.position {
            return Err(TapeError::OutOfBounds {
                position: self.position,
                requested: n,
            });
        }
        self.position -= n;
        Ok(())
    }

    pub fn increment(&mut self) {
        self.add(1);
    }

    pub fn decrement(&mut self) {
        self.subtract(1);
    }

    /// Add `delta` to the current cell, wrapping modulo 256.
    pub fn add(&mut self, delta: u8) {
        let cell = &mut self.cells[self.position];
        *cell = cell.wrapping_add(delta);
    }

    /// Subtract `delta` from the current cell, wrapping modulo 256.
    pub fn subtract(&mut self, delta: u8) {
        let cell = &mut self.cells[self.position];
        *cell = cell.wrapping_sub(delta);
    }

    pub fn current_value(&self) -> u8 {
        self.cells[self.position]
    }

    pub fn set_current(&mut self, value: u8) {
        self.cells[self.position] = value;
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false; the tape holds at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }
}
