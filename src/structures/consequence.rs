//! Reasons for the value of an atom, and conflicts found during propagation.
//!
//! Binary clauses are never stored as clause objects.
//! So, a binary clause which propagates a literal *l* is recorded as the *other* literal of the clause, which is false at the time of propagation.
//! Likewise, a binary clause which conflicts with the current valuation is recorded as the pair of (false) literals.

use crate::{db::ClauseKey, structures::literal::CLiteral};

/// The reason for the value of an atom, derived by propagation.
///
/// Decisions, assumptions, and unit clauses have no reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// A binary clause, recorded as the literal of the clause other than the propagated literal.
    Binary(CLiteral),

    /// A long clause, whose first literal is the propagated literal.
    Long(ClauseKey),
}

/// A clause which is false on the current valuation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conflict {
    /// A binary clause, recorded as the pair of literals in the clause.
    Binary(CLiteral, CLiteral),

    /// A long clause.
    Long(ClauseKey),
}

impl std::fmt::Display for Reason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(other) => write!(f, "Binary({other})"),
            Self::Long(key) => write!(f, "{key}"),
        }
    }
}

impl std::fmt::Display for Conflict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Binary(a, b) => write!(f, "Binary({a} {b})"),
            Self::Long(key) => write!(f, "{key}"),
        }
    }
}
