/*!
Simplification of the clause database with respect to the valuation at level zero.

See [GenericContext::simplify] for the relevant context method.

# Overview
At level zero every value is a consequence of the formula, and so:
- Any clause containing a literal true at level zero may be removed.
- Any literal false at level zero may be removed from a clause.

Binary clauses containing a true literal are removed from the watch lists of both literals.
Long clauses (original and learnt) containing a true literal are removed from the clause database, unless the clause is the reason for the value of the first literal of the clause.
Otherwise, literals false at level zero are removed from each long clause, and a long clause which is reduced to two literals is replaced by a binary clause.

As the watched literals of a clause which is not satisfied are not false after propagation, removing false literals never removes a watched literal.

# Scheduling
Simplification is skipped if no literal has been assigned at level zero since the last simplification, or if fewer propagations have been made since the last simplification than there were literals in the clause database after the last simplification.
*/

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Simplifies the clause database with respect to the valuation at level zero.
    ///
    /// For documentation, see [procedures::simplify](crate::procedures::simplify).
    ///
    /// Returns an error if some decision has been made.
    /// If the formula is found to be unsatisfiable the state of the context is updated to note this, and Ok is returned.
    pub fn simplify(&mut self) -> Result<(), ErrorKind> {
        if self.trail.level() > 0 {
            return Err(err::ClauseDBError::DecisionMade.into());
        }
        if self.state == ContextState::Unsatisfiable {
            return Ok(());
        }

        match self.bcp() {
            Ok(()) => {}
            Err(err::BCPError::Conflict(_)) => {
                log::info!(target: targets::SIMPLIFY, "Conflict at level zero");
                self.state = ContextState::Unsatisfiable;
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        }

        if self.simp_assigns == Some(self.trail.len()) || self.simp_props > 0 {
            return Ok(());
        }

        let mut binary_removed = 0;
        for index in 0..self.trail.len() {
            let literal = self.trail.literals[index];
            binary_removed += self.watches.remove_binary_clauses_of(literal);
        }

        let mut long_removed = 0;
        let mut shortened = 0;
        let keys = self
            .clause_db
            .original_keys()
            .into_iter()
            .chain(self.clause_db.addition_keys());

        for key in keys {
            let clause = self.clause_db.get_mut(&key)?;

            if clause.satisfied_at_root(&self.atom_db) {
                if !self.locked(key) {
                    self.remove_long(key)?;
                    long_removed += 1;
                }
                continue;
            }

            let removed = clause.strip_root_false(&self.atom_db);
            if removed == 0 {
                continue;
            }

            let (length, first, second) = (clause.len(), clause[0], clause[1]);
            self.clause_db.note_literals_removed(&key, removed);
            shortened += 1;

            if length == 2 {
                self.remove_long(key)?;
                self.watches.watch_binary(first, second);
            }
        }

        log::debug!(target: targets::SIMPLIFY, "Removed {binary_removed} binary and {long_removed} long clauses, shortened {shortened}");

        self.simp_assigns = Some(self.trail.len());
        self.simp_props = (self.clause_db.original_literal_count()
            + self.clause_db.addition_literal_count()
            + 2 * self.watches.binary_count()) as i64;

        Ok(())
    }
}
