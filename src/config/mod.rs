/*!
Configuration of a context.

All configuration for a context is contained within a [Config], and some databases clone the relevant part of the configuration on creation.
For example, the [clause database](crate::db::clause) keeps a [ClauseDBConfig] whose bump grows during a solve.

The default configuration follows the parameters of MiniSAT 1.14 where a comparable parameter exists.

```rust
# use minnow_sat::config::{Config, Minimization};
let mut config = Config::default();
assert_eq!(config.minimization.value, Minimization::Recursive);

assert!(config.restart_inc.set_checked(1.5));
assert!(!config.polarity_lean.set_checked(2.0));
```
*/

use dbs::{AtomDBConfig, ClauseDBConfig};

mod config_option;
pub use config_option::ConfigOption;

pub mod dbs;

mod minimization;
pub use minimization::Minimization;

/// Representation used for activity of atoms and clauses.
pub type Activity = f64;

/// Representation used for the probability of choosing a positive polarity.
pub type PolarityLean = f64;

/// Representation used for the probability of a random decision.
pub type RandomDecisionBias = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Configuration of the atom database.
    pub atom_db: AtomDBConfig,

    /// Configuration of the clause database.
    pub clause_db: ClauseDBConfig,

    /// The limit on conflicts during a solve, with zero for no limit.
    pub conflict_limit: ConfigOption<usize>,

    /// Which minimization to apply to learnt clauses.
    pub minimization: ConfigOption<Minimization>,

    /// Default to the last set value of a atom when choosing a value for the atom, otherwise decide with [polarity_lean](Config::polarity_lean).
    pub phase_saving: ConfigOption<bool>,

    /// The probability of assigning positive polarity to a atom when freely choosing a atom.
    pub polarity_lean: ConfigOption<PolarityLean>,

    /// The probability of making a random decision, as opposed to a decision on the most active atom.
    pub random_decision_bias: ConfigOption<RandomDecisionBias>,

    /// Permit (scheduled) restarts.
    pub restart: ConfigOption<bool>,

    /// The count of conflicts before the first restart.
    pub restart_first: ConfigOption<u32>,

    /// The base of the luby sequence which scales the count of conflicts between restarts.
    pub restart_inc: ConfigOption<f64>,

    /// Permit simplification of the clause database when no decision has been made.
    pub simplify: ConfigOption<bool>,
}

impl Default for Config {
    /// The default context is configured to provide quick, deterministic, results.
    fn default() -> Self {
        Config {
            atom_db: AtomDBConfig::default(),
            clause_db: ClauseDBConfig::default(),

            conflict_limit: ConfigOption {
                name: "conflict_limit",
                min: 0,
                max: usize::MAX,
                value: 0,
            },

            minimization: ConfigOption {
                name: "minimization",
                min: Minimization::MIN,
                max: Minimization::MAX,
                value: Minimization::Recursive,
            },

            phase_saving: ConfigOption {
                name: "phase_saving",
                min: false,
                max: true,
                value: true,
            },

            polarity_lean: ConfigOption {
                name: "polarity_lean",
                min: 0.0,
                max: 1.0,
                value: 1.0,
            },

            random_decision_bias: ConfigOption {
                name: "random_decision_bias",
                min: 0.0,
                max: 1.0,
                value: 0.0,
            },

            restart: ConfigOption {
                name: "restart",
                min: false,
                max: true,
                value: true,
            },

            restart_first: ConfigOption {
                name: "restart_first",
                min: 1,
                max: u32::MAX,
                value: 100,
            },

            restart_inc: ConfigOption {
                name: "restart_inc",
                min: 1.0,
                max: f64::MAX,
                value: 2.0,
            },

            simplify: ConfigOption {
                name: "simplify",
                min: false,
                max: true,
                value: true,
            },
        }
    }
}
