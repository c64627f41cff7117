//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use minnow_sat::structures::literal::{CLiteral, Literal};
//! # use minnow_sat::structures::clause::Clause;
//! let clause = vec![CLiteral::new(23, true),
//!                   CLiteral::new(41, false),
//!                   CLiteral::new(3,  false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "24 -42 -4 0");
//!
//! let mut model = vec![true; 42];
//! model[23] = false;
//! assert!(!clause.satisfied_by(&model));
//!
//! model[3] = false;
//! assert!(clause.satisfied_by(&model));
//! ```
//!
//! - The empty clause is always false (never true).
//! - Single literals are identified with the clause containing that literal (aka. a 'unit' clause).

use crate::structures::{
    atom::Atom,
    literal::{CLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = &CLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause.
    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.literals().map(|literal| literal.atom())
    }

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;

    /// Whether some literal of the clause is true on a complete valuation indexed by atoms.
    ///
    /// Atoms outside of the valuation are treated as having no value.
    fn satisfied_by(&self, model: &[bool]) -> bool {
        self.literals().any(|literal| {
            model
                .get(literal.atom() as usize)
                .is_some_and(|value| *value == literal.polarity())
        })
    }
}

/// The canonical implementation of a clause.
pub type CClause = Vec<CLiteral>;

fn dimacs_string<'a>(literals: impl Iterator<Item = &'a CLiteral>, zero: bool) -> String {
    let mut the_string = literals
        .map(|literal| literal.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if zero {
        if !the_string.is_empty() {
            the_string.push(' ');
        }
        the_string.push('0');
    }
    the_string
}

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        dimacs_string(self.iter(), zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl Clause for &[CLiteral] {
    fn as_dimacs(&self, zero: bool) -> String {
        dimacs_string(self.iter(), zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn canonical(self) -> CClause {
        self.to_vec()
    }
}

impl Clause for CLiteral {
    fn as_dimacs(&self, zero: bool) -> String {
        dimacs_string(std::iter::once(self), zero)
    }

    fn literals(&self) -> impl Iterator<Item = &CLiteral> {
        std::iter::once(self)
    }

    fn size(&self) -> usize {
        1
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
