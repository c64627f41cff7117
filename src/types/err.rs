//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use, and indicate some corruption of the databases of a context.
//! - Some are external, e.g. a [ParseError] when reading a malformed DIMACS file, or a [ClauseDBError::DecisionMade] when attempting to add a clause while a decision is active.
//!
//! Unsatisfiability is *not* an error.
//! An unsatisfiable formula, or set of assumptions, is communicated through a [Report](crate::reports::Report), and the context may continue to be queried.
//!
//! Names of the error enums, for the most part, overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::consequence::Conflict;

/// The general error type of the library, wrapping specific errors.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Analysis(AnalysisError),
    AtomDB(AtomDBError),
    BCP(BCPError),
    Build(BuildError),
    ClauseDB(ClauseDBError),
    Parse(ParseError),

    /// A method was called in a state which does not support the method.
    /// For example, asking for a model before a satisfiable solve.
    InvalidState,
}

/// Noted errors during conflict analysis.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnalysisError {
    /// The trail was exhausted before a unique implication point was found.
    NoAssertion,

    /// Some literal in a conflict had no level, or had a level above the current level.
    CorruptLevel,
}

impl From<AnalysisError> for ErrorKind {
    fn from(e: AnalysisError) -> Self {
        ErrorKind::Analysis(e)
    }
}

/// Errors in the atom database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors during boolean constraint propagation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BCPError {
    /// A conflict was found.
    /// This is expected from time to time, and a learning opportunity.
    Conflict(Conflict),

    /// Some corruption in the watched literals of a clause.
    /// This is unexpected.
    CorruptWatch,
}

impl From<BCPError> for ErrorKind {
    fn from(e: BCPError) -> Self {
        ErrorKind::BCP(e)
    }
}

/// Noted errors when building a context.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// An assumption was made on an atom unknown to the context.
    UnknownAssumption,
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors in the clause database.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClauseDBError {
    /// A key to a learnt clause whose slot is empty, or holds a later clause.
    Missing,

    /// An invalid key token.
    InvalidKeyToken,

    /// All possible keys have been used.
    StorageExhausted,

    /// A clause contains an atom unknown to the context.
    UnknownAtom,

    /// A clause was added after some decision has been made.
    DecisionMade,

    /// A unit or binary clause was found where a long clause is required.
    NotLong,
}

impl From<ClauseDBError> for ErrorKind {
    fn from(e: ClauseDBError) -> Self {
        ErrorKind::ClauseDB(e)
    }
}

/// Errors during parsing.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// Some issue with the problem specification in a DIMACS input.
    ProblemSpecification,

    /// Some unspecific problem at a specific line.
    Line(usize),

    /// A token which is not a literal at a specific line.
    Literal(usize),

    /// A clause was not terminated by `0` before the end of the input.
    UnterminatedClause,
}

impl From<ParseError> for ErrorKind {
    fn from(e: ParseError) -> Self {
        ErrorKind::Parse(e)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Analysis(e) => write!(f, "Analysis error: {e:?}"),
            Self::AtomDB(e) => write!(f, "Atom database error: {e:?}"),
            Self::BCP(e) => write!(f, "BCP error: {e:?}"),
            Self::Build(e) => write!(f, "Build error: {e:?}"),
            Self::ClauseDB(e) => write!(f, "Clause database error: {e:?}"),
            Self::Parse(e) => write!(f, "Parse error: {e:?}"),
            Self::InvalidState => write!(f, "Invalid state"),
        }
    }
}

impl std::error::Error for ErrorKind {}
