use std::sync::{Mutex, PoisonError};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Uniform draw over the eligible question ids.
pub struct QuestionPicker {
    rng: Mutex<StdRng>,
}

impl QuestionPicker {
    pub fn from_entropy() -> Self {
        QuestionPicker {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Same seed, same sequence of draws.
    pub fn seeded(seed: u64) -> Self {
        QuestionPicker {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::seeded)
    }

    pub fn pick(&self, ids: &[i32]) -> Option<i32> {
        // A panic mid-draw leaves the rng usable.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        ids.choose(&mut *rng).copied()
    }
}
