//! The cubic world of cells.

use tracing::debug;

use crate::automaton::{count_neighbors, in_bounds, index_of, step_cells, step_cells_par};
use crate::cell::Cell;
use crate::error::{LifeError, LifeResult};

/// A fixed-size cube of `size³` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    size: i16,
    cells: Vec<Cell>,
    generation: u64,
}

impl World {
    /// Create a world with edge length `size`, every cell dead.
    pub fn new(size: i16) -> LifeResult<Self> {
        if size < 0 {
            return Err(LifeError::NegativeSize(size));
        }

        let side = size as usize;
        Ok(World {
            size,
            cells: vec![Cell::default(); side * side * side],
            generation: 0,
        })
    }

    /// Edge length of the cube.
    pub fn size(&self) -> i16 {
        self.size
    }

    /// Number of generations computed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// All cells in `x + y*size + z*size*size` order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    fn checked_index(&self, x: i16, y: i16, z: i16) -> LifeResult<usize> {
        if !in_bounds(self.size, x, y, z) {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                z,
                size: self.size,
            });
        }
        Ok(index_of(self.size, x, y, z))
    }

    /// Bring the cell at the given coordinate to life.
    pub fn populate(&mut self, x: i16, y: i16, z: i16) -> LifeResult<()> {
        let idx = self.checked_index(x, y, z)?;
        self.cells[idx].live();
        Ok(())
    }

    /// Kill the cell at the given coordinate.
    pub fn kill(&mut self, x: i16, y: i16, z: i16) -> LifeResult<()> {
        let idx = self.checked_index(x, y, z)?;
        self.cells[idx].die();
        Ok(())
    }

    pub fn inspect(&self, x: i16, y: i16, z: i16) -> LifeResult<&Cell> {
        let idx = self.checked_index(x, y, z)?;
        Ok(&self.cells[idx])
    }

    /// Count alive cells among the in-bounds members of the 26-cell Moore
    /// neighborhood of `(x, y, z)`.
    pub fn count_alive_neighbors(&self, x: i16, y: i16, z: i16) -> LifeResult<u8> {
        self.checked_index(x, y, z)?;
        Ok(count_neighbors(self.size, &self.cells, x, y, z))
    }

    /// Advance one generation.
    ///
    /// Every cell's next state is computed from the current generation, then
    /// the whole grid is replaced at once.
    pub fn next_generation(&mut self) {
        let next = step_cells(self.size, &self.cells);
        self.replace_cells(next);
    }

    /// Advance one generation, spreading the per-cell work over `pool`.
    pub fn next_generation_in(&mut self, pool: &rayon::ThreadPool) {
        let next = step_cells_par(self.size, &self.cells, pool);
        self.replace_cells(next);
    }

    fn replace_cells(&mut self, next: Vec<Cell>) {
        debug_assert_eq!(next.len(), self.cells.len());
        self.cells = next;
        self.generation += 1;
        debug!(
            generation = self.generation,
            alive = self.alive_count(),
            "generation complete"
        );
    }
}
