use tracing::debug;

use crate::domain::{Algorithm, World};

/// Simulation drives a world forward and counts generations.
/// This is the application layer that coordinates domain logic.
#[derive(Clone, Debug)]
pub struct Simulation {
    pub world: World,
    pub algorithm: Algorithm,
    pub generation: u64,
}

impl Simulation {
    pub fn new(world: World) -> Self {
        Self {
            world,
            algorithm: Algorithm::default(),
            generation: 0,
        }
    }

    /// Set the evolution strategy (builder pattern)
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Advance by one generation
    pub fn tick(mut self) -> Self {
        self.world = self.world.evolve_with(self.algorithm);
        self.generation += 1;
        debug!(
            generation = self.generation,
            population = self.world.population(),
            "tick"
        );
        self
    }

    /// Advance by `generations` generations
    pub fn run(self, generations: u64) -> Self {
        (0..generations).fold(self, |s, _| s.tick())
    }

    /// Iterator over every upcoming generation, starting with the current one
    pub fn generations(self) -> impl Iterator<Item = Simulation> {
        std::iter::successors(Some(self), |s| Some(s.clone().tick()))
    }

    /// Smallest period in `1..=max` after which the current world repeats.
    /// Still lifes have period 1; `None` when nothing repeats within `max`.
    pub fn period(&self, max: u64) -> Option<u64> {
        let start = &self.world;
        let mut world = start.clone();
        for generation in 1..=max {
            world = world.evolve_with(self.algorithm);
            if &world == start {
                debug!(period = generation, "world repeats");
                return Some(generation);
            }
        }
        None
    }
}
