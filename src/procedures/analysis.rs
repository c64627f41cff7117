/*!
A context method to analyse a conflict and learn a clause.

See [GenericContext::conflict_analysis] for the relevant context method.

# Overview
Analysis takes a conflict, given as a clause whose literals are all false on the current valuation, and derives an *asserting* clause by resolution.

The trail is walked backward from the most recent assignment.
Each atom of the current clause which was valued at the current level and has not been examined is counted, while literals valued at a lower level (though above level zero) are added to the learnt clause.
When the count of unexamined current level atoms reaches one, the remaining atom is the *first unique implication point* and the negation of the literal of the atom on the trail is placed at index zero of the learnt clause.

Every atom examined has its activity bumped, as does every learnt clause used in resolution.

After resolution the learnt clause may be [minimized](crate::procedures::minimization).
The learnt clause is then arranged so the literal at index one has the greatest level of any literal other than the asserting literal, and this level is the *backjump level*.
After a backjump to this level, the learnt clause asserts the negation of the unique implication point.

# Complications
The `seen` marks of the [AnalysisBuffer] are shared with minimization.
On return every mark is cleared.
*/

use crate::{
    config::Minimization,
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        consequence::{Conflict, Reason},
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// Scratch space for analysis, indexed by atom where relevant.
#[derive(Default)]
pub struct AnalysisBuffer {
    /// Whether an atom has been examined.
    pub(crate) seen: Vec<bool>,

    /// Literals pending examination during minimization.
    pub(crate) stack: Vec<CLiteral>,

    /// Literals whose `seen` mark should be cleared after analysis.
    pub(crate) to_clear: Vec<CLiteral>,

    /// The literals of the clause being resolved.
    pub(crate) antecedent: Vec<CLiteral>,
}

impl AnalysisBuffer {
    /// Extends the buffer to cover a fresh atom.
    pub fn fresh_atom(&mut self) {
        self.seen.push(false);
    }
}

/// A clause learnt through analysis, together with the level the clause asserts at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearntClause {
    /// The learnt clause, with the asserting literal at index zero.
    pub clause: CClause,

    /// The greatest level of any literal in the clause other than the asserting literal, or zero.
    pub level: LevelIndex,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation, see [procedures::analysis](crate::procedures::analysis).
    ///
    /// # Soundness
    /// Assumes the conflict was found at a level above zero, and propagation has been halted at the conflict.
    pub fn conflict_analysis(&mut self, conflict: Conflict) -> Result<LearntClause, ErrorKind> {
        log::trace!(target: targets::ANALYSIS, "Analysis of {conflict} at level {}", self.trail.level());

        let current_level = self.trail.level();
        let mut antecedent = std::mem::take(&mut self.analysis_buffer.antecedent);
        antecedent.clear();

        match conflict {
            Conflict::Binary(a, b) => antecedent.extend([a, b]),
            Conflict::Long(key) => {
                antecedent.extend_from_slice(self.clause_db.get(&key)?);
                self.clause_db.bump_activity(&key);
            }
        }

        // Index zero is reserved for the asserting literal.
        let mut learnt: CClause = vec![CLiteral::new(0, true)];
        let mut path_count: usize = 0;
        let mut index = self.trail.len();
        let mut resolved: Option<CLiteral> = None;

        loop {
            for literal in antecedent.iter().copied() {
                let atom = literal.atom();
                if resolved.is_some_and(|p| p.atom() == atom) {
                    continue;
                }

                let level = self.atom_db.level_or_zero(atom);
                if self.analysis_buffer.seen[atom as usize] || level == 0 {
                    continue;
                }

                self.atom_db.bump_activity(atom);
                self.analysis_buffer.seen[atom as usize] = true;

                match level.cmp(&current_level) {
                    std::cmp::Ordering::Less => learnt.push(literal),
                    std::cmp::Ordering::Equal => path_count += 1,
                    std::cmp::Ordering::Greater => {
                        log::error!(target: targets::ANALYSIS, "{literal} valued above the current level");
                        self.reset_seen();
                        return Err(err::AnalysisError::CorruptLevel.into());
                    }
                }
            }

            let next = loop {
                match index.checked_sub(1) {
                    Some(previous) => {
                        index = previous;
                        let literal = self.trail.literals[index];
                        if self.analysis_buffer.seen[literal.atom() as usize] {
                            break Some(literal);
                        }
                    }
                    None => break None,
                }
            };

            let Some(p) = next else {
                self.reset_seen();
                return Err(err::AnalysisError::NoAssertion.into());
            };

            self.analysis_buffer.seen[p.atom() as usize] = false;
            path_count -= 1;
            resolved = Some(p);

            if path_count == 0 {
                learnt[0] = p.negate();
                break;
            }

            antecedent.clear();
            match self.atom_db.reason_of(p.atom()) {
                Some(Reason::Binary(partner)) => antecedent.push(partner),
                Some(Reason::Long(key)) => {
                    antecedent.extend_from_slice(self.clause_db.get(&key)?);
                    self.clause_db.bump_activity(&key);
                }
                None => {
                    self.reset_seen();
                    return Err(err::AnalysisError::NoAssertion.into());
                }
            }
        }

        self.analysis_buffer.antecedent = antecedent;

        self.counters.max_literals += learnt.len();

        self.analysis_buffer.to_clear.clear();
        self.analysis_buffer
            .to_clear
            .extend_from_slice(&learnt[1..]);

        match self.config.minimization.value {
            Minimization::None => {}
            Minimization::Cheap => self.minimize_cheap(&mut learnt)?,
            Minimization::Recursive => self.minimize_recursive(&mut learnt)?,
        }

        self.counters.tot_literals += learnt.len();

        let to_clear = std::mem::take(&mut self.analysis_buffer.to_clear);
        self.clear_seen(&to_clear);
        self.analysis_buffer.to_clear = to_clear;

        let level = match learnt.len() {
            1 => 0,
            _ => {
                let mut max_index = 1;
                let mut max_level = self.atom_db.level_or_zero(learnt[1].atom());
                for (index, literal) in learnt.iter().enumerate().skip(2) {
                    let level = self.atom_db.level_or_zero(literal.atom());
                    if level > max_level {
                        max_index = index;
                        max_level = level;
                    }
                }
                learnt.swap(1, max_index);
                max_level
            }
        };

        log::trace!(target: targets::ANALYSIS, "Learnt {learnt:?} asserting at level {level}");
        self.make_callback_learnt(&learnt);

        Ok(LearntClause {
            clause: learnt,
            level,
        })
    }

    /// Clears every `seen` mark.
    fn reset_seen(&mut self) {
        self.analysis_buffer.seen.iter_mut().for_each(|mark| *mark = false);
    }

    /// Clears the `seen` mark of the atom of each literal.
    pub(crate) fn clear_seen(&mut self, literals: &[CLiteral]) {
        for literal in literals {
            self.analysis_buffer.seen[literal.atom() as usize] = false;
        }
    }
}
