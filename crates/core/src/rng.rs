//! RNG module - uniform random piece selection
//!
//! Each spawn draws one of the seven kinds with equal probability; there is no bag and
//! no history. Seeded construction gives reproducible sequences for tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::PieceKind;

#[derive(Debug, Clone)]
pub struct PieceRandomizer {
    rng: StdRng,
}

impl PieceRandomizer {
    /// Create a randomizer with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a randomizer seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Draw the next piece kind
    pub fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())]
    }
}

impl Default for PieceRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
