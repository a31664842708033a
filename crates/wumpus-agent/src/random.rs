use wumpus_core::{Action, DeterministicRng, Percept, SplitMix64};

use crate::{Agent, ThinkError};

/// Forward is listed twice so the baseline actually wanders.
const CHOICES: [Action; 6] = [
    Action::Shoot,
    Action::Grab,
    Action::Left,
    Action::Right,
    Action::Forward,
    Action::Forward,
];

/// Baseline that ignores every percept. Seeded, so runs are reproducible.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    seed: u64,
    rng: SplitMix64,
}

impl RandomAgent {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SplitMix64::new(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn init(&mut self, _grid_size: usize) {
        self.rng = SplitMix64::new(self.seed);
    }

    fn think(&mut self, _percept: Percept) -> Result<Action, ThinkError> {
        Ok(*self.rng.choose(&CHOICES))
    }
}
