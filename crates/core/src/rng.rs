//! RNG module - injectable random source
//!
//! Every random decision in the game (word sampling, placement probing, letter
//! fill, theme and quote choice) goes through [`RandomSource`], so a seeded
//! source reproduces a puzzle exactly under test.
//!
//! Also provides a simple LCG as the default source.

/// A source of uniformly distributed random numbers.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the generator output (multiply-shift), which are
    /// the well-distributed ones for an LCG. Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((u64::from(self.next_u32()) * u64::from(max)) >> 32) as u32
    }

    /// Random index into a collection of `len` items.
    fn choose_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the wall clock, for per-run variety.
    pub fn from_clock() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(1);
        // Fold the 128-bit nanos down so both halves contribute.
        let folded = (nanos as u64) ^ ((nanos >> 64) as u64);
        Self::new((folded as u32) ^ ((folded >> 32) as u32))
    }

    /// Current generator state (reseeding with it continues the sequence)
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;

    /// Replays a fixed script of raw values, then repeats the last one.
    pub struct ScriptedRng {
        values: Vec<u32>,
        pos: usize,
    }

    impl ScriptedRng {
        pub fn new(values: Vec<u32>) -> Self {
            Self { values, pos: 0 }
        }
    }

    impl RandomSource for ScriptedRng {
        fn next_u32(&mut self) -> u32 {
            let v = self
                .values
                .get(self.pos)
                .or(self.values.last())
                .copied()
                .unwrap_or(0);
            self.pos += 1;
            v
        }

        fn next_range(&mut self, max: u32) -> u32 {
            if max == 0 {
                return 0;
            }
            self.next_u32() % max
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let v1 = rng1.next_u32();
        let v2 = rng2.next_u32();
        assert_ne!(v1, v2);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).seed(), 1);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in [1u32, 2, 8, 26, 200] {
            for _ in 0..500 {
                assert!(rng.next_range(max) < max);
            }
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_next_range_covers_all_buckets() {
        let mut rng = SimpleRng::new(99);
        let mut seen = [false; 8];
        for _ in 0..1000 {
            seen[rng.next_range(8) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(3);
        let mut v: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
