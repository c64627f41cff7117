/*!
A clause together with some metadata, as stored in the clause database.

The first two literals of a [dbClause] are *watched*.
So long as the clause is not satisfied on the current valuation, neither watched literal is false unless every other literal of the clause is also false.
*/

use std::ops::Deref;

use crate::{
    config::Activity,
    db::{atom::AtomDB, ClauseKey},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
};

/// A clause together with some metadata.
#[allow(non_camel_case_types)]
#[derive(Clone, Debug)]
pub struct dbClause {
    /// The key used to access the clause.
    key: ClauseKey,

    /// The clause.
    clause: CClause,

    /// The activity of the clause, bumped on use during analysis.
    pub activity: Activity,
}

impl Deref for dbClause {
    type Target = [CLiteral];

    fn deref(&self) -> &Self::Target {
        &self.clause
    }
}

impl dbClause {
    /// A new [dbClause] from the given key, clause, and activity.
    pub fn new(key: ClauseKey, clause: CClause, activity: Activity) -> Self {
        dbClause {
            key,
            clause,
            activity,
        }
    }

    /// The key of the clause.
    pub fn key(&self) -> ClauseKey {
        self.key
    }

    /// The clause.
    pub fn clause(&self) -> &CClause {
        &self.clause
    }

    /// Swaps the literals at the given indicies.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.clause.swap(a, b);
    }

    /// Finds a literal from index two onward which is not false on the current valuation and swaps the literal into index one.
    ///
    /// Returns the new watched literal, if one is found.
    pub fn replace_second_watch(&mut self, atom_db: &AtomDB) -> Option<CLiteral> {
        for index in 2..self.clause.len() {
            let literal = self.clause[index];
            if !atom_db.is_false(literal) {
                self.clause.swap(1, index);
                return Some(literal);
            }
        }
        None
    }

    /// Whether some literal in the clause is true at level zero.
    pub fn satisfied_at_root(&self, atom_db: &AtomDB) -> bool {
        self.clause.iter().any(|literal| {
            atom_db.value_of_literal(*literal) == Some(true) && atom_db.level_or_zero(literal.atom()) == 0
        })
    }

    /// Removes every literal false at level zero from the clause, returning a count of the literals removed.
    ///
    /// # Soundness
    /// Assumes the clause is not satisfied at level zero, and the watched literals are not false at level zero.
    pub fn strip_root_false(&mut self, atom_db: &AtomDB) -> usize {
        let before = self.clause.len();
        self.clause.retain(|literal| {
            !(atom_db.is_false(*literal) && atom_db.level_or_zero(literal.atom()) == 0)
        });
        before - self.clause.len()
    }
}
