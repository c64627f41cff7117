/*!
Methods to build a formula in a context.

- Atoms are obtained through [fresh_atom](GenericContext::fresh_atom) and variants.
- Clauses are added through [add_clause](GenericContext::add_clause), which accepts anything implementing [Clause].
- A formula may be read from a DIMACS input through [read_dimacs](GenericContext::read_dimacs).

Clauses may only be added when no decision has been made.
On addition a clause is put in a canonical form:
- Duplicate literals are removed, and a clause containing a literal and its negation is ignored.
- A clause containing a literal true at level zero is ignored, and literals false at level zero are removed.

The remaining clause is stored according to the count of literals:
- An empty clause makes the formula unsatisfiable.
- A unit clause is assigned at level zero and propagated.
- A binary clause is stored in the watch lists of the two literals.
- A long clause is stored in the clause database.
*/

mod dimacs;
pub use dimacs::DimacsInfo;

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{
        atom::{ATOM_MAX, Atom},
        clause::Clause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Ok results of adding a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClauseOk {
    /// The clause was added.
    Added,

    /// The clause contains some literal and the negation of the literal, and was ignored.
    Tautology,

    /// The clause contains some literal true at level zero, and was ignored.
    Satisfied,

    /// The formula is unsatisfiable, either before or on the addition of the clause.
    Unsatisfiable,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Returns a fresh atom, or an error if the atom limit has been reached.
    ///
    /// The previous value of the atom is drawn with probability [polarity_lean](crate::config::Config::polarity_lean) of being true.
    pub fn fresh_atom(&mut self) -> Result<Atom, err::AtomDBError> {
        let previous_value = self.rng.random_bool(self.config.polarity_lean.value);
        let atom = self.atom_db.fresh_atom(previous_value)?;

        self.watches.fresh_atom();
        self.analysis_buffer.fresh_atom();

        Ok(atom)
    }

    /// Returns a fresh atom, or the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_atom](GenericContext::fresh_atom), by defaulting to the maximum limit of an atom.
    /// And, as exhausting the atom limit is unlikely in many applications, this may be preferred.
    pub fn fresh_or_max_atom(&mut self) -> Atom {
        match self.fresh_atom() {
            Ok(atom) => atom,
            Err(err::AtomDBError::AtomsExhausted) => ATOM_MAX,
        }
    }

    /// Returns the positive literal of a fresh atom, or of the maximum atom.
    pub fn fresh_or_max_literal(&mut self) -> CLiteral {
        CLiteral::new(self.fresh_or_max_atom(), true)
    }

    /// Returns a vector containing `count` literals with either a fresh atom or the maximum atom and valued true.
    pub fn fresh_or_max_literals(&mut self, count: usize) -> Vec<CLiteral> {
        (0..count).map(|_| self.fresh_or_max_literal()).collect()
    }

    /// Adds a clause to the formula of the context.
    ///
    /// For documentation, see [builder](crate::builder).
    ///
    /// ```rust
    /// # use minnow_sat::context::Context;
    /// # use minnow_sat::config::Config;
    /// # use minnow_sat::builder::ClauseOk;
    /// let mut the_context = Context::from_config(Config::default());
    /// let p = the_context.fresh_or_max_literal();
    /// let q = the_context.fresh_or_max_literal();
    ///
    /// assert_eq!(the_context.add_clause(vec![p, -p]), Ok(ClauseOk::Tautology));
    /// assert_eq!(the_context.add_clause(vec![p, q]), Ok(ClauseOk::Added));
    /// assert_eq!(the_context.add_clause(-q), Ok(ClauseOk::Added));
    /// assert_eq!(the_context.value_of_literal(p), Some(true));
    /// assert_eq!(the_context.add_clause(vec![p, q, -q]), Ok(ClauseOk::Tautology));
    /// assert_eq!(the_context.add_clause(vec![-p]), Ok(ClauseOk::Unsatisfiable));
    /// ```
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<ClauseOk, ErrorKind> {
        if self.state == ContextState::Unsatisfiable {
            return Ok(ClauseOk::Unsatisfiable);
        }
        if self.trail.level() > 0 {
            return Err(err::ClauseDBError::DecisionMade.into());
        }

        let mut clause = clause.canonical();
        if clause
            .iter()
            .any(|literal| literal.atom() as usize >= self.atom_db.count())
        {
            return Err(err::ClauseDBError::UnknownAtom.into());
        }

        clause.sort_unstable();
        clause.dedup();

        // As literals are ordered by atom, a literal and its negation are adjacent.
        if clause.windows(2).any(|pair| pair[0].atom() == pair[1].atom()) {
            return Ok(ClauseOk::Tautology);
        }

        if clause.iter().any(|literal| self.is_true(*literal)) {
            return Ok(ClauseOk::Satisfied);
        }

        clause.retain(|literal| !self.atom_db.is_false(*literal));

        if self.state != ContextState::Input {
            self.state = ContextState::Input;
        }

        log::trace!(target: targets::CLAUSE_DB, "Adding {}", clause.as_dimacs(false));

        match clause.as_slice() {
            [] => {
                self.state = ContextState::Unsatisfiable;
                Ok(ClauseOk::Unsatisfiable)
            }

            [literal] => {
                self.assign(*literal, None);
                match self.bcp() {
                    Ok(()) => Ok(ClauseOk::Added),
                    Err(err::BCPError::Conflict(_)) => {
                        self.state = ContextState::Unsatisfiable;
                        Ok(ClauseOk::Unsatisfiable)
                    }
                    Err(e) => Err(e.into()),
                }
            }

            [a, b] => {
                self.watches.watch_binary(*a, *b);
                Ok(ClauseOk::Added)
            }

            _ => {
                self.store_long(clause, false)?;
                Ok(ClauseOk::Added)
            }
        }
    }
}
