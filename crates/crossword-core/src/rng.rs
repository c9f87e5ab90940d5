//! Mulberry32 pseudo-random stream
//!
//! A 32-bit generator whose output is a pure function of the seed and the
//! number of draws. Every shuffle in the pipeline is driven by one of these
//! streams, so two runs with the same seed make identical choices on every
//! platform.

/// Increment added to the state before every draw
const GOLDEN_GAMMA: u32 = 0x6D2B79F5;

/// 2^32 as a float, for mapping a `u32` into `[0, 1)`
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Deterministic float stream seeded by a `u32`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let t = self.state;
        let mut r = (t ^ (t >> 15)).wrapping_mul(t | 1);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(r | 61));
        r ^ (r >> 14)
    }

    /// Next float in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// `floor(next_f64() * bound)`, a value in `0..bound`
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }

    /// Shuffle a slice in place using Fisher-Yates, from the last index down to 1
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_index(i + 1);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_sequence_for_seed_42() {
        let mut rng = Mulberry32::new(42);
        let draws: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
        assert_eq!(
            draws,
            vec![
                0.6011037519201636,
                0.44829055899754167,
                0.8524657934904099,
                0.6697340414393693,
                0.17481389874592423,
            ]
        );
    }

    #[test]
    fn test_seed_zero_is_not_degenerate() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(rng.next_f64(), 0.26642920868471265);
        assert_eq!(rng.next_f64(), 0.0003297457005828619);
    }

    #[test]
    fn test_adjacent_seeds_diverge() {
        for seed in 0..64u32 {
            let a: Vec<f64> = {
                let mut rng = Mulberry32::new(seed);
                (0..5).map(|_| rng.next_f64()).collect()
            };
            let b: Vec<f64> = {
                let mut rng = Mulberry32::new(seed + 1);
                (0..5).map(|_| rng.next_f64()).collect()
            };
            assert_ne!(a, b, "seeds {} and {} collided", seed, seed + 1);
        }
    }

    #[test]
    fn test_wraps_at_u32_max() {
        let mut rng = Mulberry32::new(u32::MAX);
        let x = rng.next_f64();
        assert!((0.0..1.0).contains(&x));
    }

    #[test]
    fn test_next_index_in_range() {
        let mut rng = Mulberry32::new(7);
        for bound in 1..50 {
            assert!(rng.next_index(bound) < bound);
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = Mulberry32::new(2024);
        let mut values: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut values);

        let mut sorted = values.clone();
        sorted.sort();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_single_element_draws_nothing() {
        let mut a = Mulberry32::new(5);
        let b = Mulberry32::new(5);
        let mut one = [1];
        a.shuffle(&mut one);
        assert_eq!(a, b);
    }
}
