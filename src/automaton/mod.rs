//! Core automaton logic over a dense cube of cells.
//!
//! `World` owns the cells; these functions do the indexing, neighbor
//! counting and generation stepping on the raw slice.

pub mod grid;
pub mod stepping;

pub use grid::{coords_of, count_neighbors, in_bounds, index_of};
pub use stepping::{next_state, step_cells, step_cells_par};
