//! A simple pseudorandom number generator.
//!
//! Specifically, a translation of the *really* minimal C PCG32 implementation from <https://www.pcg-random.org/>, implemented to satisfy the [RngCore] trait.
//!
//! PCG(32) is the default source of (pseudo)random numbers as it is simple, fast, and has some nice supporting documentation.
//!
//! Each [context](crate::context) stores a source of rng, used for random decisions and initial polarities.
//! The [generic context](crate::context::GenericContext) is paramaterised to anything which satisfies the [Rng](rand::Rng) trait, and the [context](crate::context::Context) fixes [MinimalPCG32].

use rand_core::{RngCore, SeedableRng, impls};

/// State and increment
#[derive(Clone, Debug)]
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

/// Entirely unmotivated.
const INCREMENT: u64 = 3215534235932367345;

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::from_seed(0_u64.to_le_bytes())
    }
}

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc | 1);

        let xorshifted = (((old_state >> 18) ^ old_state) >> 27) as u32;
        let rot = (old_state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut rng = Self {
            state: 0,
            inc: INCREMENT,
        };
        rng.next_u32();
        rng.state = rng.state.wrapping_add(u64::from_le_bytes(seed));
        rng.next_u32();
        rng
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn seeds_repeat() {
        let mut a = MinimalPCG32::seed_from_u64(73);
        let mut b = MinimalPCG32::seed_from_u64(73);
        for _ in 0..32 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn seeds_differ() {
        let mut two_seed = MinimalPCG32::from_seed(2u64.to_le_bytes());
        let mut three_seed = MinimalPCG32::from_seed(3u64.to_le_bytes());

        let two = (0..8).map(|_| two_seed.next_u32()).collect::<Vec<_>>();
        let three = (0..8).map(|_| three_seed.next_u32()).collect::<Vec<_>>();
        assert_ne!(two, three);
    }

    #[test]
    fn bits_spread() {
        let mut rng = MinimalPCG32::default();
        let mut ones = 0;
        for _ in 0..1024 {
            ones += rng.next_u32().count_ones();
        }
        // 1024 * 32 bits, roughly half set.
        assert!((14_000..19_000).contains(&ones));
    }
}
