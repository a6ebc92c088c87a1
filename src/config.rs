//! Parallel stepping configuration and driver.

use tracing::debug;

use crate::error::LifeResult;
use crate::world::World;

/// Settings for [`ParallelStepper`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepConfig {
    /// Worker threads in the stepping pool. 0 is treated as 1.
    pub num_threads: u8,
}

impl Default for StepConfig {
    fn default() -> Self {
        StepConfig { num_threads: 1 }
    }
}

impl StepConfig {
    pub fn with_threads(num_threads: u8) -> Self {
        StepConfig { num_threads }
    }

    fn effective_threads(&self) -> usize {
        if self.num_threads == 0 {
            1
        } else {
            self.num_threads as usize
        }
    }
}

/// Advances a [`World`] one generation per call on a private rayon pool.
///
/// Produces exactly the same generations as [`crate::God`]; only the
/// per-cell work is distributed.
pub struct ParallelStepper {
    thread_pool: rayon::ThreadPool,
}

impl ParallelStepper {
    pub fn new(config: StepConfig) -> LifeResult<Self> {
        let num_threads = config.effective_threads();
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()?;

        debug!(num_threads, "parallel stepper ready");
        Ok(ParallelStepper { thread_pool })
    }

    pub fn num_threads(&self) -> usize {
        self.thread_pool.current_num_threads()
    }

    /// Let one unit of time pass in `world`.
    pub fn turn_time(&self, world: &mut World) {
        world.next_generation_in(&self.thread_pool);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(StepConfig::default().num_threads, 1);
    }

    #[test]
    fn test_zero_threads_means_one() {
        let stepper = ParallelStepper::new(StepConfig::with_threads(0)).unwrap();
        assert_eq!(stepper.num_threads(), 1);
    }

    #[test]
    fn test_thread_count() {
        let stepper = ParallelStepper::new(StepConfig::with_threads(3)).unwrap();
        assert_eq!(stepper.num_threads(), 3);
    }

    #[test]
    fn test_turn_time_advances_once() {
        let stepper = ParallelStepper::new(StepConfig::default()).unwrap();
        let mut world = World::new(3).unwrap();
        world.populate(1, 1, 1).unwrap();

        stepper.turn_time(&mut world);
        assert_eq!(world.generation(), 1);
        assert_eq!(world.alive_count(), 0);
    }
}
