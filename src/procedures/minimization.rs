/*!
Minimization of a clause learnt through [analysis](crate::procedures::analysis).

A literal of a learnt clause is redundant if the negation of the literal is implied by the negation of other literals in the clause (together with literals valued at level zero).
Removing redundant literals preserves the clause as a consequence of the formula, and the asserting literal is never removed.

Two methods are available, set by [config.minimization](crate::config::Config::minimization):
- [Cheap](crate::config::Minimization::Cheap): a literal is removed if each other literal in the reason for the value of the atom of the literal is in the clause or valued at level zero.
- [Recursive](crate::config::Minimization::Recursive): reasons are followed transitively.
  The search is pruned by an abstraction of the levels of the clause, as a literal valued at a level absent from the clause cannot be implied by the clause.

Both methods rely on the `seen` marks made during analysis, which are set for exactly the atoms of the clause (other than the asserting literal) on entry.
*/

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        consequence::Reason,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

/// An abstraction of a level, as a single bit of a 32 bit mask.
fn abstract_level(level: LevelIndex) -> u32 {
    1 << (level & 31)
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Removes each literal from `clause` whose reason is contained in the clause, ignoring literals valued at level zero.
    pub fn minimize_cheap(&mut self, clause: &mut CClause) -> Result<(), ErrorKind> {
        let before = clause.len();
        let mut keep = 1;

        for index in 1..clause.len() {
            let literal = clause[index];
            let redundant = match self.atom_db.reason_of(literal.atom()) {
                None => false,

                Some(Reason::Binary(partner)) => self.implied_by_marks(partner),

                Some(Reason::Long(key)) => {
                    let reason = self.clause_db.get(&key)?;
                    reason.iter().all(|other| {
                        other.atom() == literal.atom()
                            || self.analysis_buffer.seen[other.atom() as usize]
                            || self.atom_db.level_or_zero(other.atom()) == 0
                    })
                }
            };

            if !redundant {
                clause[keep] = literal;
                keep += 1;
            }
        }

        clause.truncate(keep);
        log::trace!(target: targets::MINIMIZATION, "Cheap minimization removed {} literals", before - keep);
        Ok(())
    }

    /// Removes each literal from `clause` which is implied by other literals of the clause, following reasons transitively.
    pub fn minimize_recursive(&mut self, clause: &mut CClause) -> Result<(), ErrorKind> {
        let before = clause.len();

        let levels = clause
            .iter()
            .skip(1)
            .fold(0, |mask, literal| {
                mask | abstract_level(self.atom_db.level_or_zero(literal.atom()))
            });

        let mut keep = 1;
        for index in 1..clause.len() {
            let literal = clause[index];
            let redundant = match self.atom_db.reason_of(literal.atom()) {
                None => false,
                Some(_) => self.literal_redundant(literal, levels)?,
            };

            if !redundant {
                clause[keep] = literal;
                keep += 1;
            }
        }

        clause.truncate(keep);
        log::trace!(target: targets::MINIMIZATION, "Recursive minimization removed {} literals", before - keep);
        Ok(())
    }

    /// Whether the partner of a binary reason is in the clause or valued at level zero.
    fn implied_by_marks(&self, partner: CLiteral) -> bool {
        self.analysis_buffer.seen[partner.atom() as usize]
            || self.atom_db.level_or_zero(partner.atom()) == 0
    }

    /// Whether `literal` is implied by the literals marked as seen, following reasons.
    ///
    /// Every atom marked during the search is noted to be cleared after analysis.
    /// On failure, marks made during the search are cleared immediately.
    fn literal_redundant(&mut self, literal: CLiteral, levels: u32) -> Result<bool, ErrorKind> {
        self.analysis_buffer.stack.clear();
        self.analysis_buffer.stack.push(literal);
        let top = self.analysis_buffer.to_clear.len();

        while let Some(implied) = self.analysis_buffer.stack.pop() {
            let mut antecedent = std::mem::take(&mut self.analysis_buffer.antecedent);
            antecedent.clear();

            match self.atom_db.reason_of(implied.atom()) {
                Some(Reason::Binary(partner)) => antecedent.push(partner),
                Some(Reason::Long(key)) => antecedent.extend_from_slice(self.clause_db.get(&key)?),
                None => {}
            }

            let mut redundant = true;
            for other in antecedent.iter().copied() {
                let atom = other.atom();
                if atom == implied.atom() {
                    continue;
                }

                let level = self.atom_db.level_or_zero(atom);
                if self.analysis_buffer.seen[atom as usize] || level == 0 {
                    continue;
                }

                if self.atom_db.reason_of(atom).is_some() && (abstract_level(level) & levels) != 0 {
                    self.analysis_buffer.seen[atom as usize] = true;
                    self.analysis_buffer.stack.push(other);
                    self.analysis_buffer.to_clear.push(other);
                } else {
                    redundant = false;
                    break;
                }
            }

            self.analysis_buffer.antecedent = antecedent;

            if !redundant {
                let marked = self.analysis_buffer.to_clear.split_off(top);
                self.clear_seen(&marked);
                return Ok(false);
            }
        }

        Ok(true)
    }
}
