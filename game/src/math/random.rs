use nanorand::{Rng, WyRand};

pub struct Random {
    generator: WyRand,
}

impl Random {
    pub fn new() -> Self {
        Self {
            generator: WyRand::new(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            generator: WyRand::new_seed(seed),
        }
    }

    /// Uniform value in `min..=max`, `min` when the range is empty.
    pub fn between(&mut self, min: u8, max: u8) -> u8 {
        if max <= min {
            min
        } else {
            self.generator.generate_range(min..=max)
        }
    }
}

impl Default for Random {
    fn default() -> Self {
        Self::new()
    }
}
