//! Configuration of databases, typically derived from the configuration of a context.

use super::{Activity, ConfigOption};

/// Configuration for the atom database.
#[derive(Clone, Debug)]
pub struct AtomDBConfig {
    /// The activity added to an atom on each bump.
    pub bump: ConfigOption<Activity>,

    /// The factor by which the activity of every atom is multiplied on each decay.
    pub decay_factor: ConfigOption<Activity>,

    /// The count of decisions between each decay of atom activity.
    pub decay_interval: ConfigOption<usize>,
}

impl Default for AtomDBConfig {
    fn default() -> Self {
        AtomDBConfig {
            bump: ConfigOption {
                name: "atom_bump",
                min: Activity::MIN_POSITIVE,
                max: 1e100,
                value: 1.0,
            },

            decay_factor: ConfigOption {
                name: "atom_decay",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 0.25,
            },

            decay_interval: ConfigOption {
                name: "atom_decay_interval",
                min: 1,
                max: usize::MAX,
                value: 256,
            },
        }
    }
}

/// Configuration for the clause database.
#[derive(Clone, Debug)]
pub struct ClauseDBConfig {
    /// The activity with which the next clause bumped will be bumped by, dynamically adjusted.
    ///
    /// The maximum is the bound on any activity, at which point all activities are rescaled.
    pub bump: ConfigOption<Activity>,

    /// The decay to the activity of a clause each conflict.
    /// In detail, after each conflict the bump is divided by the decay.
    pub decay: ConfigOption<Activity>,

    /// The initial limit on learnt clauses, as a factor of the count of original clauses.
    pub learntsize_factor: ConfigOption<f64>,

    /// The growth of the limit on learnt clauses, applied at each adjustment.
    pub learntsize_inc: ConfigOption<f64>,

    /// The count of conflicts before the first adjustment to the limit on learnt clauses.
    pub learntsize_adjust_start: ConfigOption<f64>,

    /// The growth of the count of conflicts between adjustments to the limit on learnt clauses.
    pub learntsize_adjust_inc: ConfigOption<f64>,
}

impl Default for ClauseDBConfig {
    fn default() -> Self {
        ClauseDBConfig {
            bump: ConfigOption {
                name: "clause_bump",
                min: Activity::MIN_POSITIVE,
                max: 1e20,
                value: 1.0,
            },

            decay: ConfigOption {
                name: "clause_decay",
                min: Activity::MIN_POSITIVE,
                max: 1.0,
                value: 0.999,
            },

            learntsize_factor: ConfigOption {
                name: "learntsize_factor",
                min: 0.0,
                max: f64::MAX,
                value: 1.0 / 3.0,
            },

            learntsize_inc: ConfigOption {
                name: "learntsize_inc",
                min: 1.0,
                max: f64::MAX,
                value: 1.1,
            },

            learntsize_adjust_start: ConfigOption {
                name: "learntsize_adjust_start",
                min: 1.0,
                max: f64::MAX,
                value: 100.0,
            },

            learntsize_adjust_inc: ConfigOption {
                name: "learntsize_adjust_inc",
                min: 1.0,
                max: f64::MAX,
                value: 1.5,
            },
        }
    }
}
