/*!
Reports for the context.

A [Report] is a high-level summary of the state of a context, with a [code](Report::code) matching the exit codes used by SAT solvers.
*/

use crate::context::ContextState;

/// The code of an unknown result.
pub const UNKNOWN: i32 = 0;

/// The code of a satisfiable result.
pub const SATISFIABLE: i32 = 10;

/// The code of an unsatisfiable result.
pub const UNSATISFIABLE: i32 = 20;

/// High-level reports regarding a solve.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Report {
    /// The formula of the context is satisfiable (given any assumptions).
    Satisfiable,

    /// The formula of the context is unsatisfiable (given any assumptions).
    Unsatisfiable,

    /// Satisfiability of the formula of the context is unknown, for some reason.
    Unknown,
}

impl Report {
    /// The status code of the report.
    pub fn code(&self) -> i32 {
        match self {
            Self::Satisfiable => SATISFIABLE,
            Self::Unsatisfiable => UNSATISFIABLE,
            Self::Unknown => UNKNOWN,
        }
    }
}

impl From<&ContextState> for Report {
    fn from(value: &ContextState) -> Self {
        match value {
            ContextState::Input | ContextState::Solving | ContextState::Unknown => Self::Unknown,
            ContextState::Satisfiable => Self::Satisfiable,
            ContextState::Unsatisfiable | ContextState::FailedAssumptions => Self::Unsatisfiable,
        }
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "Satisfiable"),
            Self::Unsatisfiable => write!(f, "Unsatisfiable"),
            Self::Unknown => write!(f, "Unknown"),
        }
    }
}
