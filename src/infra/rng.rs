use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::equity::RandomSource;

/// Боевой RNG: свой генератор на каждый вызов, seed из энтропии ОС.
///
/// Глобального состояния нет, поэтому параллельные симуляции
/// не мешают друг другу.
#[derive(Clone, Debug)]
pub struct SystemRng {
    inner: StdRng,
}

impl Default for SystemRng {
    fn default() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SystemRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же симуляции при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn gen_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..upper)
    }
}
