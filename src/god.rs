//! The stateless simulation driver.

use crate::world::World;

/// Advances a [`World`] one generation per call. Holds no state.
#[derive(Clone, Copy, Debug, Default)]
pub struct God;

impl God {
    pub fn new() -> Self {
        God
    }

    /// Let one unit of time pass in `world`.
    pub fn turn_time(&self, world: &mut World) {
        world.next_generation();
    }
}
