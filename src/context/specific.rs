use crate::{config::Config, generic::random::MinimalPCG32};

use rand::SeedableRng;

use super::GenericContext;

/// A context which uses [MinimalPCG32] as a source of randomness.
pub type Context = GenericContext<MinimalPCG32>;

impl Context {
    /// Creates a context from some given configuration.
    pub fn from_config(config: Config) -> Self {
        Self::from_config_and_rng(config, MinimalPCG32::from_seed(0_u64.to_le_bytes()))
    }

    /// Creates a context from some given configuration, with a source of randomness from the given seed.
    pub fn from_config_with_seed(config: Config, seed: u64) -> Self {
        Self::from_config_and_rng(config, MinimalPCG32::seed_from_u64(seed))
    }
}
