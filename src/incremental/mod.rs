/*!
An incremental interface of decisions and backtracking, for use by an external search.

The interface exposes the decision level, conflict analysis, and clause learning of a context to an external search, such as a top-down compiler of a formula to decomposable negation normal form.
The external search decides literals one at a time, inspects the literals each decision implies, and undoes decisions as it sees fit.

# Decisions
[decide](GenericContext::decide) opens a fresh level, assigns the given literal, and propagates.
If propagation finds a conflict, the conflict is analysed and the learnt clause is held as a *pending assertion*, together with the level the clause asserts at.
The learnt clause is not added to the context until the external search has undone decisions back to the assertion level and [asserted](Assertion::assert_cd_literal) the clause.

# Assertions
At the assertion level an [Assertion] may be obtained, and consumed to add the learnt clause, assign the asserting literal, and propagate.
If propagation finds a further conflict, a fresh pending assertion is made.
And, if the conflict is at level zero, the formula is unsatisfiable.

# Example
```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
# use minnow_sat::structures::literal::{CLiteral, Literal};
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();
let r = the_context.fresh_or_max_literal();

assert!(the_context.add_clause(vec![-p, q]).is_ok());
assert!(the_context.add_clause(vec![-p, -q]).is_ok());
assert!(the_context.add_clause(vec![r, q, p]).is_ok());

// Deciding p leads to a conflict.
assert_eq!(the_context.decide(-r), Ok(true));
assert_eq!(the_context.decide(p), Ok(false));
assert!(!the_context.at_assertion_level());

// The learnt clause -p asserts at level zero.
the_context.undo_decide(p);
the_context.undo_decide(-r);
assert!(the_context.at_assertion_level());

let assertion = the_context.assertion().unwrap();
assert_eq!(assertion.assert_cd_literal(), Ok(true));
assert_eq!(the_context.value_of_literal(p), Some(false));
```
*/

pub mod drivers;
pub mod subsumption;

use crate::{
    context::{ContextState, GenericContext},
    db::LevelIndex,
    misc::log::targets::{self},
    structures::{
        clause::CClause,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

/// A clause learnt from a conflict following a decision, and the level the clause asserts at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingAssertion {
    /// The learnt clause, with the asserting literal at index zero.
    pub clause: CClause,

    /// The level at which the clause asserts the literal at index zero.
    pub level: LevelIndex,
}

/// A pending assertion, available only when the context is at the level of the assertion.
///
/// Obtained through [assertion](GenericContext::assertion).
pub struct Assertion<'ctx, R: rand::Rng + std::default::Default> {
    context: &'ctx mut GenericContext<R>,
}

impl<R: rand::Rng + std::default::Default> Assertion<'_, R> {
    /// The learnt clause of the assertion.
    pub fn clause(&self) -> &[CLiteral] {
        match &self.context.pending_assertion {
            Some(pending) => &pending.clause,
            None => &[],
        }
    }

    /// Adds the learnt clause of the assertion to the context, assigns the asserting literal, and propagates.
    ///
    /// Returns Ok(false) if propagation leads to a conflict, in which case a fresh assertion may be pending.
    pub fn assert_cd_literal(self) -> Result<bool, ErrorKind> {
        let pending = match self.context.pending_assertion.take() {
            Some(pending) => pending,
            None => return Err(ErrorKind::InvalidState),
        };

        log::trace!(target: targets::INCREMENTAL, "Asserting {:?} at level {}", pending.clause, pending.level);
        self.context.learn(pending.clause)?;
        self.context.propagate_decision()
    }
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Decides `literal` on a fresh level and propagates.
    ///
    /// Returns Ok(false) if the formula is unsatisfiable, or if propagation leads to a conflict.
    /// In the latter case the clause learnt from the conflict is pending, see [at_assertion_level](GenericContext::at_assertion_level).
    ///
    /// # Panics
    /// If the atom of `literal` has a value.
    pub fn decide(&mut self, literal: CLiteral) -> Result<bool, ErrorKind> {
        if self.state == ContextState::Unsatisfiable {
            return Ok(false);
        }

        if self.atom_db.value_of(literal.atom()).is_some() {
            panic!("! Decision on {literal}, which has a value");
        }

        self.pending_assertion = None;
        self.decide_literal(literal);
        self.propagate_decision()
    }

    /// Undoes the decision of `literal`, and every decision made after, by backjumping to the level before the level of `literal`.
    ///
    /// Clears the note read by [take_newly_implied_dirty](GenericContext::take_newly_implied_dirty).
    ///
    /// # Panics
    /// If the atom of `literal` has no value, or was valued at level zero.
    pub fn undo_decide(&mut self, literal: CLiteral) {
        let level = match self.atom_db.level_of(literal.atom()) {
            None => panic!("! Undo of {literal}, which has no value"),
            Some(0) => panic!("! Undo of {literal}, which was valued at level zero"),
            Some(level) => level,
        };

        log::trace!(target: targets::INCREMENTAL, "Undo {literal} at level {level}");
        self.backjump(level - 1);
        self.newly_implied_dirty = false;
    }

    /// Whether a clause learnt from a conflict is pending, and asserts at the current level.
    pub fn at_assertion_level(&self) -> bool {
        self.pending_assertion
            .as_ref()
            .is_some_and(|pending| pending.level == self.trail.level())
    }

    /// The pending assertion, if the context is at the level of the assertion.
    pub fn assertion(&mut self) -> Option<Assertion<'_, R>> {
        match self.at_assertion_level() {
            true => Some(Assertion { context: self }),
            false => None,
        }
    }

    /// Adds the pending learnt clause to the context, assigns the asserting literal, and propagates.
    ///
    /// Returns Ok(false) if propagation leads to a conflict.
    ///
    /// # Panics
    /// If the context is not at the assertion level.
    pub fn assert_cd_literal(&mut self) -> Result<bool, ErrorKind> {
        match self.assertion() {
            Some(assertion) => assertion.assert_cd_literal(),
            None => panic!("! Assertion away from the assertion level"),
        }
    }

    /// The literals implied by the decision of the current level, excluding the decision.
    ///
    /// At level zero, every literal on the trail.
    pub fn newly_implied(&self) -> &[CLiteral] {
        let start = match self.trail.level() {
            0 => 0,
            level => std::cmp::min(self.trail.level_start(level) + 1, self.trail.len()),
        };
        &self.trail.literals[start..]
    }

    /// Whether some literal has been assigned since the last call or the last undone decision, and clears the note.
    pub fn take_newly_implied_dirty(&mut self) -> bool {
        std::mem::take(&mut self.newly_implied_dirty)
    }

    /// Propagates after a decision or assertion, and on a conflict makes an assertion pending.
    fn propagate_decision(&mut self) -> Result<bool, ErrorKind> {
        match self.bcp() {
            Ok(()) => Ok(true),

            Err(err::BCPError::Conflict(conflict)) => {
                self.counters.conflicts += 1;

                match self.trail.level() {
                    0 => {
                        log::info!(target: targets::INCREMENTAL, "Conflict at level zero");
                        self.failed_assumptions = self.analyze_final_conflict(conflict)?;
                        self.state = ContextState::Unsatisfiable;
                        self.pending_assertion = None;
                    }

                    _ => {
                        let learnt = self.conflict_analysis(conflict)?;
                        self.pending_assertion = Some(PendingAssertion {
                            clause: learnt.clause,
                            level: learnt.level,
                        });
                    }
                }

                Ok(false)
            }

            Err(e) => Err(e.into()),
        }
    }
}
