//! Databases for holding information relevant to a solve.
//!
//! - [The atom database](crate::db::atom)
//!   + Properties of atoms, indexed by atom.
//!     * The current valuation, and the previous value of each atom (for phase saving).
//!     * The level at which each atom was valued, and the reason for the value.
//!     * An activity heap, on which any atom without a value is active.
//! - [The clause database](crate::db::clause)
//!   + A collection of long clauses (containing three or more literals), each accessed by a [ClauseKey]. \
//!     There are two kinds of clause:
//!     * Original clauses \
//!       Clauses added to the context from some external source (e.g. directly or through some DIMACS file).
//!     * Addition clauses \
//!       Clauses learnt through conflict analysis.
//!       Every addition clause is a consequence of the original clauses.
//! - [Watch lists](crate::db::watches)
//!   + For each literal, the binary clauses and long clauses watching the literal.
//!     Binary clauses are only stored in the watch lists.
//! - [The trail](crate::db::trail)
//!   + The literals which have been assigned a value, in order of assignment, together with the start of each level.

pub mod atom;
pub mod clause;
mod keys;
pub use keys::*;
pub mod trail;
pub mod watches;

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        consequence::Reason,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The index of a decision level.
pub type LevelIndex = u32;

/// Canonical methods to record assignments and long clauses to the context.
impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Values the atom of `literal` to match the polarity of `literal` at the current level, records the literal on the trail, and notes `reason` as the reason for the value.
    ///
    /// # Soundness
    /// Assumes the atom of `literal` has no value.
    pub(crate) fn assign(&mut self, literal: CLiteral, reason: Option<Reason>) {
        log::trace!(target: targets::VALUATION, "Assigned {literal} at level {}", self.trail.level());

        self.atom_db.set_value(literal, self.trail.level(), reason);
        self.trail.store_assignment(literal);
        self.newly_implied_dirty = true;

        if let Some(callback) = &mut self.callback_enqueue {
            callback(&literal);
        }
    }

    /// Assigns `literal`, if the atom of the literal has no value.
    ///
    /// Returns false if the atom of `literal` has a value which conflicts with `literal`, and true otherwise.
    pub(crate) fn enqueue(&mut self, literal: CLiteral, reason: Option<Reason>) -> bool {
        match self.atom_db.value_of(literal.atom()) {
            None => {
                self.assign(literal, reason);
                true
            }
            Some(value) => value == literal.polarity(),
        }
    }

    /// Stores a long clause in the clause database and watches the first two literals of the clause.
    ///
    /// # Soundness
    /// For the clause to be watched correctly, the first two literals must be watch candidates on the current valuation.
    pub(crate) fn store_long(
        &mut self,
        clause: Vec<CLiteral>,
        addition: bool,
    ) -> Result<ClauseKey, err::ClauseDBError> {
        if clause.len() < 3 {
            return Err(err::ClauseDBError::NotLong);
        }
        let watched = [clause[0], clause[1]];

        let key = match addition {
            true => self.clause_db.store_addition(clause)?,
            false => self.clause_db.store_original(clause)?,
        };

        for literal in watched {
            self.watches.watch_long(literal, key);
        }

        Ok(key)
    }

    /// Removes a long clause from the clause database, and from the watch lists of the first two literals of the clause.
    pub(crate) fn remove_long(&mut self, key: ClauseKey) -> Result<(), err::ClauseDBError> {
        let clause = self.clause_db.remove(&key)?;
        self.watches.unwatch_long(clause[0], &key);
        self.watches.unwatch_long(clause[1], &key);
        Ok(())
    }

    /// Whether the long clause with the given key is the reason for the value of the first literal of the clause.
    ///
    /// Such a clause is *locked*, and may not be removed.
    pub fn locked(&self, key: ClauseKey) -> bool {
        match self.clause_db.get(&key) {
            Ok(clause) => {
                let first = clause[0];
                self.atom_db.value_of(first.atom()) == Some(first.polarity())
                    && self.atom_db.reason_of(first.atom()) == Some(Reason::Long(key))
            }
            Err(_) => false,
        }
    }
}
