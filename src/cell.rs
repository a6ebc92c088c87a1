//! A single binary-state cell.

use std::fmt;

/// One lattice site, either alive or dead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub fn new(alive: bool) -> Self {
        Cell { alive }
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Kill the cell. Idempotent.
    pub fn die(&mut self) {
        self.alive = false;
    }

    /// Revive the cell. Idempotent.
    pub fn live(&mut self) {
        self.alive = true;
    }

    /// `'1'` for a live cell, `'0'` for a dead one.
    pub fn print(&self) -> char {
        if self.alive {
            '1'
        } else {
            '0'
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print())
    }
}
