/*!
Analysis of a conflict in terms of assumptions.

When a solve given assumptions fails, the *failed assumptions* are a subset of the assumptions which (together with the formula) are unsatisfiable.
These are found by marking the atoms of a conflict and walking the trail backward from the most recent assignment to the first assignment above level zero.
Each marked atom with a reason has the atoms of the reason marked in turn, while each marked atom without a reason is an assumption and the negation of the literal on the trail is recorded.

Atoms valued at level zero are never marked, as these are consequences of the formula alone.
So, if no assumption has been made the failed assumptions are empty.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        consequence::{Conflict, Reason},
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// The negation of each assumption responsible for `conflict`.
    pub fn analyze_final_conflict(&mut self, conflict: Conflict) -> Result<Vec<CLiteral>, ErrorKind> {
        let literals = match conflict {
            Conflict::Binary(a, b) => vec![a, b],
            Conflict::Long(key) => self.clause_db.get(&key)?.to_vec(),
        };
        self.analyze_final(&literals)
    }

    /// The negation of each assumption responsible for `assumption` being false, together with the negation of `assumption`.
    pub fn analyze_final_assumption(&mut self, assumption: CLiteral) -> Result<Vec<CLiteral>, ErrorKind> {
        let mut failed = match self.atom_db.reason_of(assumption.atom()) {
            None => Vec::default(),
            Some(Reason::Binary(partner)) => self.analyze_final(&[partner])?,
            Some(Reason::Long(key)) => {
                let literals: Vec<CLiteral> = self
                    .clause_db
                    .get(&key)?
                    .iter()
                    .filter(|literal| literal.atom() != assumption.atom())
                    .copied()
                    .collect();
                self.analyze_final(&literals)?
            }
        };
        failed.push(assumption.negate());
        Ok(failed)
    }

    /// The negation of each decision on the trail responsible for the value of `literals`.
    ///
    /// Empty if the root level is zero.
    fn analyze_final(&mut self, literals: &[CLiteral]) -> Result<Vec<CLiteral>, ErrorKind> {
        let mut failed = Vec::default();
        if self.trail.root_level == 0 {
            return Ok(failed);
        }

        for literal in literals {
            if self.atom_db.level_or_zero(literal.atom()) > 0 {
                self.analysis_buffer.seen[literal.atom() as usize] = true;
            }
        }

        let bottom = self.trail.level_start(1);
        for index in (bottom..self.trail.len()).rev() {
            let literal = self.trail.literals[index];
            let atom = literal.atom();
            if !self.analysis_buffer.seen[atom as usize] {
                continue;
            }

            match self.atom_db.reason_of(atom) {
                None => {
                    if self.atom_db.level_or_zero(atom) > 0 {
                        failed.push(literal.negate());
                    }
                }

                Some(Reason::Binary(partner)) => {
                    if self.atom_db.level_or_zero(partner.atom()) > 0 {
                        self.analysis_buffer.seen[partner.atom() as usize] = true;
                    }
                }

                Some(Reason::Long(key)) => {
                    let clause = self.clause_db.get(&key)?;
                    for other in clause.iter() {
                        if other.atom() != atom && self.atom_db.level_or_zero(other.atom()) > 0 {
                            self.analysis_buffer.seen[other.atom() as usize] = true;
                        }
                    }
                }
            }

            self.analysis_buffer.seen[atom as usize] = false;
        }

        log::trace!(target: targets::ASSUMPTION, "Failed assumptions: {failed:?}");
        Ok(failed)
    }
}
