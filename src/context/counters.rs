use std::time::Duration;

use crate::generic::luby::Luby;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every conflict seen.
    pub conflicts: usize,

    /// A count of conflicts seen since the last restart.
    pub fresh_conflicts: usize,

    /// A count of all decisions made.
    pub decisions: usize,

    /// A count of all literals assigned, excluding decisions.
    pub propagations: usize,

    /// The number of restarts.
    pub restarts: usize,

    /// A count of literals in learnt clauses before minimization.
    pub max_literals: usize,

    /// A count of literals in learnt clauses after minimization.
    pub tot_literals: usize,

    /// The time taken during solves.
    pub time: Duration,

    /// The current element in the luby sequence.
    pub luby: Luby,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            conflicts: 0,
            fresh_conflicts: 0,

            decisions: 0,
            propagations: 0,

            restarts: 0,

            max_literals: 0,
            tot_literals: 0,

            time: Duration::from_secs(0),

            luby: Luby::default(),
        }
    }
}
