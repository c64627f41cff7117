/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, always with one of the [targets].
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
The cli installs [env_logger](https://docs.rs/env_logger), so for example `RUST_LOG=analysis=trace` shows each learnt clause.
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [BCP](crate::procedures::bcp)
    pub const PROPAGATION: &str = "propagation";

    /// Logs related to [analysis](crate::procedures::analysis)
    pub const ANALYSIS: &str = "analysis";

    /// Logs related to [minimization](crate::procedures::minimization)
    pub const MINIMIZATION: &str = "minimization";

    /// Logs related to [reduction](crate::procedures::reduction)
    pub const REDUCTION: &str = "reduction";

    /// Logs related to [simplification](crate::procedures::simplify)
    pub const SIMPLIFY: &str = "simplify";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to a valuation
    pub const VALUATION: &str = "valuation";

    /// Logs related to [backjumping](crate::procedures::backjump)
    pub const BACKJUMP: &str = "backjump";

    /// Logs related to [decisions](crate::procedures::decision)
    pub const DECISION: &str = "decision";

    /// Logs related to restarts and the [solve](crate::procedures::solve) loop.
    pub const SOLVE: &str = "solve";

    /// Logs related to [assumptions](crate::procedures::core)
    pub const ASSUMPTION: &str = "assumption";

    /// Logs related to the [incremental](crate::incremental) interface.
    pub const INCREMENTAL: &str = "incremental";

    /// Logs related to [subsumption tracking](crate::incremental::subsumption)
    pub const SUBSUMPTION: &str = "subsumption";

    /// Logs related to parsing.
    pub const PARSE: &str = "parse";
}
