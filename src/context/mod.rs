/*!
The context, to which formulas are added and within which solves take place.

Strictly, a [GenericContext] and a [Context].

The generic context is generic over the source of randomness.
[from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
# use minnow_sat::reports::Report;
# use minnow_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());

let p = the_context.fresh_or_max_atom();
let q = the_context.fresh_or_max_atom();

let p_q_clause = vec![CLiteral::new(p, true), CLiteral::new(q, true)];
assert!(the_context.add_clause(p_q_clause).is_ok());

let not_p = CLiteral::new(p, false);

assert!(the_context.add_clause(not_p).is_ok());
assert!(the_context.solve().is_ok());
assert_eq!(the_context.report(), Report::Satisfiable);

assert_eq!(the_context.model().unwrap()[p as usize], false);
assert_eq!(the_context.model().unwrap()[q as usize], true);
```
*/

pub mod callbacks;
mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input, and no solve has taken place.
    Input,

    /// A solve is in progress.
    Solving,

    /// The formula is satisfiable, and the last solve found a model.
    Satisfiable,

    /// The formula is unsatisfiable.
    ///
    /// This state is permanent.
    Unsatisfiable,

    /// The formula is unsatisfiable given the assumptions of the last solve.
    ///
    /// The [failed assumptions](GenericContext::failed_assumptions) are those responsible.
    FailedAssumptions,

    /// The last solve ended without a result, e.g. due to a conflict limit.
    Unknown,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Solving => write!(f, "Solving"),
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::FailedAssumptions => write!(f, "FailedAssumptions"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
