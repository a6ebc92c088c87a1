//! Voxel Life - Conway's Game of Life on a 3D cube.
//!
//! A [`World`] is a fixed-size cube of [`Cell`]s. [`God`] advances it one
//! generation at a time; [`ParallelStepper`] does the same on a rayon pool.
//!
//! Each generation is computed from the previous one as a whole: an alive
//! cell with 2 or 3 alive neighbors (out of its 26-cell Moore neighborhood,
//! clipped at the cube's faces) survives, every other cell is dead.

pub mod automaton;
pub mod cell;
pub mod config;
pub mod error;
pub mod god;
pub mod world;


pub use cell::Cell;
pub use config::{ParallelStepper, StepConfig};
pub use error::{LifeError, LifeResult};
pub use god::God;
pub use world::World;
