//! Generation stepping with the survival-only rule.
//!
//! Rule, per cell, using the 26-cell Moore neighborhood:
//! - Survival: an alive cell with exactly 2 or 3 alive neighbors stays alive
//! - Death: every other cell is dead in the next generation
//!
//! Dead cells are never born, whatever their neighbor count.
//!
//! Every step reads only the generation-N slice and writes a fresh
//! generation-N+1 buffer, so the update is simultaneous for all cells.

use rayon::prelude::*;
use tracing::trace;

use super::grid::{coords_of, count_neighbors};
use crate::cell::Cell;

/// Next state of a single cell given its current state and live neighbor count.
#[inline]
pub fn next_state(cell: Cell, neighbors: u8) -> Cell {
    Cell::new(cell.is_alive() && (neighbors == 2 || neighbors == 3))
}

fn next_cell(size: i16, cells: &[Cell], idx: usize) -> Cell {
    let (x, y, z) = coords_of(size, idx);
    let current = cells[idx];
    let neighbors = count_neighbors(size, cells, x, y, z);
    let next = next_state(current, neighbors);

    if next.is_alive() {
        trace!(x, y, z, neighbors, "cell survives");
    } else if current.is_alive() {
        trace!(x, y, z, neighbors, "cell dies");
    }

    next
}

/// Compute the next generation of `cells` into a new buffer.
pub fn step_cells(size: i16, cells: &[Cell]) -> Vec<Cell> {
    (0..cells.len())
        .map(|idx| next_cell(size, cells, idx))
        .collect()
}

/// Compute the next generation of `cells` on the given thread pool.
///
/// Workers share the read-only snapshot and each produces its own slots of
/// the output, so the result is identical to [`step_cells`].
pub fn step_cells_par(size: i16, cells: &[Cell], pool: &rayon::ThreadPool) -> Vec<Cell> {
    pool.install(|| {
        (0..cells.len())
            .into_par_iter()
            .map(|idx| next_cell(size, cells, idx))
            .collect()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::grid::index_of;

    fn cube_with(size: i16, alive: &[(i16, i16, i16)]) -> Vec<Cell> {
        let side = size as usize;
        let mut cells = vec![Cell::default(); side * side * side];
        for &(x, y, z) in alive {
            cells[index_of(size, x, y, z)].live();
        }
        cells
    }

    fn two_thread_pool() -> rayon::ThreadPool {
        rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_next_state_rule() {
        let alive = Cell::new(true);
        let dead = Cell::new(false);

        for n in 0..=26u8 {
            let survives = n == 2 || n == 3;
            assert_eq!(next_state(alive, n).is_alive(), survives, "alive with {n}");
            assert!(!next_state(dead, n).is_alive(), "dead with {n}");
        }
    }

    #[test]
    fn test_step_line_of_three() {
        // Line along z: middle has 2 neighbors, ends have 1
        let cells = cube_with(3, &[(1, 1, 0), (1, 1, 1), (1, 1, 2)]);
        let next = step_cells(3, &cells);

        assert!(next[index_of(3, 1, 1, 1)].is_alive());
        assert!(!next[index_of(3, 1, 1, 0)].is_alive());
        assert!(!next[index_of(3, 1, 1, 2)].is_alive());
        assert_eq!(next.iter().filter(|c| c.is_alive()).count(), 1);
    }

    #[test]
    fn test_step_does_not_touch_input() {
        let cells = cube_with(3, &[(1, 1, 1)]);
        let next = step_cells(3, &cells);

        assert!(cells[index_of(3, 1, 1, 1)].is_alive());
        assert!(!next[index_of(3, 1, 1, 1)].is_alive());
    }

    #[test]
    fn test_step_empty_grid_stays_empty() {
        let cells = cube_with(4, &[]);
        let next = step_cells(4, &cells);
        assert_eq!(next.len(), 64);
        assert!(next.iter().all(|c| !c.is_alive()));

        assert!(step_cells(0, &[]).is_empty());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let cells = cube_with(
            5,
            &[
                (0, 0, 0),
                (1, 0, 0),
                (1, 1, 0),
                (2, 2, 2),
                (2, 3, 2),
                (3, 2, 2),
                (3, 3, 3),
                (4, 4, 4),
                (4, 3, 4),
            ],
        );
        let pool = two_thread_pool();

        assert_eq!(step_cells_par(5, &cells, &pool), step_cells(5, &cells));
    }
}
