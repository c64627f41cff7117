//! Determines the satisfiability of the formula in a context, optionally given some assumptions.
//!
//! # Overview
//!
//! A solve is a sequence of searches, each bounded by a count of conflicts.
//! Between searches the context *restarts*, by backjumping to the root level (the level of the last assumption, or zero).
//! The bound on each search follows the [luby](crate::generic::luby) sequence, scaled by [restart_first](crate::config::Config::restart_first) with base [restart_inc](crate::config::Config::restart_inc).
//!
//! Each search loops:
//! - Propagate.
//!   + On a conflict at level zero, the formula is unsatisfiable.
//!   + On a conflict at the root level, the assumptions are unsatisfiable, and the [failed assumptions](crate::procedures::core) are noted.
//!   + On any other conflict, [analyse](crate::procedures::analysis) the conflict, backjump to the level the learnt clause asserts at (or the root level) and add the learnt clause.
//! - Otherwise:
//!   + If the conflict bound of the search has been reached, backjump to the root level and return.
//!   + If at level zero, [simplify](crate::procedures::simplify).
//!   + If there are too many learnt clauses, [reduce](crate::procedures::reduction).
//!   + [Decide](crate::procedures::decision) on the value of some atom, or note the formula is satisfiable if every atom has a value.
//!
//! ```none
//!                 +----------+
//!   +-------------| decision |<--------------------+
//!   |             +----------+                     |
//!   |                                              | no conflict
//!   ⌄     +-----+                                  |
//! --+---->| bcp |----------------------------------+
//!   ⌃     +-----+             |
//!   |                         | conflict
//!   |                         ⌄
//!   |    +----------+   +----------+
//!   +----| backjump |<--| analysis |
//!        +----------+   +----------+
//! ```
//!
//! Assumptions are made before the first search, each on a fresh level.
//! An assumption which is already true opens an empty level, while an assumption which is already false fails.
//!
//! Unit clauses learnt while some assumption is made are assigned at the root level, with level zero noted as the level of the assignment, and are assigned again after the solve returns to level zero.
//!
//! # Example
//!
//! ```rust
//! # use minnow_sat::context::Context;
//! # use minnow_sat::config::Config;
//! # use minnow_sat::reports::Report;
//! # use minnow_sat::structures::literal::{CLiteral, Literal};
//! let mut the_context = Context::from_config(Config::default());
//!
//! let p = the_context.fresh_or_max_literal();
//! let q = the_context.fresh_or_max_literal();
//!
//! assert!(the_context.add_clause(vec![p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//!
//! assert_eq!(the_context.solve_given(vec![-q]), Ok(Report::Unsatisfiable));
//! assert_eq!(the_context.failed_assumptions(), &[q]);
//!
//! assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
//! ```

use std::time::Instant;

use crate::{
    context::{ContextState, GenericContext},
    generic::luby::Luby,
    misc::log::targets::{self},
    reports::Report,
    structures::{
        clause::CClause,
        consequence::Reason,
        literal::{CLiteral, Literal},
    },
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Determines the satisfiability of the formula of the context.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve(&mut self) -> Result<Report, ErrorKind> {
        self.solve_given(Vec::default())
    }

    /// Determines the satisfiability of the formula of the context given the assumptions.
    ///
    /// For documentation, see [procedures::solve](crate::procedures::solve).
    pub fn solve_given(&mut self, assumptions: Vec<CLiteral>) -> Result<Report, ErrorKind> {
        let start = Instant::now();

        self.model.clear();
        self.failed_assumptions.clear();
        self.pending_assertion = None;

        if self.state == ContextState::Unsatisfiable {
            return Ok(Report::Unsatisfiable);
        }

        if assumptions
            .iter()
            .any(|assumption| assumption.atom() as usize >= self.atom_db.count())
        {
            return Err(err::BuildError::UnknownAssumption.into());
        }

        self.backjump(0);
        self.state = ContextState::Solving;

        let result = self.solve_from_root(&assumptions);

        self.backjump(0);
        self.trail.root_level = 0;
        self.assign_pending_units();

        self.counters.time += start.elapsed();

        let state = result?;
        if self.state != ContextState::Unsatisfiable {
            self.state = state;
        }
        if self.state != ContextState::FailedAssumptions {
            self.failed_assumptions.clear();
        }

        log::info!(target: targets::SOLVE, "Solve complete: {}", self.state);
        Ok(self.report())
    }

    fn solve_from_root(&mut self, assumptions: &[CLiteral]) -> Result<ContextState, ErrorKind> {
        if self.config.simplify.value {
            self.simplify()?;
        } else if let Err(err::BCPError::Conflict(_)) = self.bcp() {
            self.state = ContextState::Unsatisfiable;
        }
        if self.state == ContextState::Unsatisfiable {
            return Ok(ContextState::Unsatisfiable);
        }

        let clause_db_config = &self.config.clause_db;
        let clause_count = self.clause_db.original_count() + self.watches.binary_count();
        self.max_learnts = clause_count as f64 * clause_db_config.learntsize_factor.value;
        self.learntsize_adjust_confl = clause_db_config.learntsize_adjust_start.value;
        self.learntsize_adjust_cnt = self.learntsize_adjust_confl as i64;

        if let Some(failed) = self.make_assumptions(assumptions)? {
            return Ok(failed);
        }

        self.counters.luby = Luby::with_base(self.config.restart_inc.value);
        let conflicts_at_start = self.counters.conflicts;

        loop {
            let budget = match self.config.restart.value {
                true => {
                    let element = self.counters.luby.next().unwrap_or(1.0);
                    (element * self.config.restart_first.value as f64) as usize
                }
                false => usize::MAX,
            };

            let budget = match self.config.conflict_limit.value {
                0 => budget,
                limit => {
                    let spent = self.counters.conflicts - conflicts_at_start;
                    if spent >= limit {
                        log::info!(target: targets::SOLVE, "Conflict limit reached");
                        return Ok(ContextState::Unknown);
                    }
                    std::cmp::min(budget, limit - spent)
                }
            };

            match self.search(budget)? {
                ContextState::Unknown => {
                    self.counters.restarts += 1;
                    if self.check_callback_terminate() {
                        log::info!(target: targets::SOLVE, "Solve terminated by callback");
                        return Ok(ContextState::Unknown);
                    }
                }
                state => return Ok(state),
            }
        }
    }

    /// Makes each assumption on a fresh level, propagating after each.
    ///
    /// Returns the state of the context if some assumption fails.
    fn make_assumptions(&mut self, assumptions: &[CLiteral]) -> Result<Option<ContextState>, ErrorKind> {
        self.trail.root_level = assumptions.len() as _;

        for assumption in assumptions.iter().copied() {
            match self.atom_db.value_of_literal(assumption) {
                Some(true) => {
                    log::trace!(target: targets::ASSUMPTION, "Assumption {assumption} already holds");
                    self.trail.new_level();
                }

                Some(false) => {
                    log::trace!(target: targets::ASSUMPTION, "Assumption {assumption} failed");
                    self.failed_assumptions = self.analyze_final_assumption(assumption)?;
                    return Ok(Some(ContextState::FailedAssumptions));
                }

                None => {
                    self.trail.new_level();
                    self.assign(assumption, None);

                    match self.bcp() {
                        Ok(()) => {}
                        Err(err::BCPError::Conflict(conflict)) => {
                            self.counters.conflicts += 1;
                            self.failed_assumptions = self.analyze_final_conflict(conflict)?;
                            return Ok(Some(ContextState::FailedAssumptions));
                        }
                        Err(e) => return Err(e.into()),
                    }
                }
            }
        }

        Ok(None)
    }

    /// Searches for a model, or a proof of unsatisfiability, until `budget` conflicts have been found.
    ///
    /// Returns [ContextState::Unknown] if the budget is exhausted, at which point the context has backjumped to the root level.
    pub fn search(&mut self, budget: usize) -> Result<ContextState, ErrorKind> {
        let root_level = self.trail.root_level;
        self.counters.fresh_conflicts = 0;

        loop {
            match self.bcp() {
                Err(err::BCPError::Conflict(conflict)) => {
                    self.counters.conflicts += 1;
                    self.counters.fresh_conflicts += 1;

                    let level = self.trail.level();
                    if level == 0 {
                        log::info!(target: targets::SOLVE, "Conflict at level zero");
                        return Ok(ContextState::Unsatisfiable);
                    }

                    if level <= root_level {
                        self.failed_assumptions = self.analyze_final_conflict(conflict)?;
                        return Ok(ContextState::FailedAssumptions);
                    }

                    let learnt = self.conflict_analysis(conflict)?;
                    self.backjump(std::cmp::max(learnt.level, root_level));
                    self.learn(learnt.clause)?;

                    self.clause_db.decay_activity();

                    self.learntsize_adjust_cnt -= 1;
                    if self.learntsize_adjust_cnt <= 0 {
                        let config = &self.config.clause_db;
                        self.learntsize_adjust_confl *= config.learntsize_adjust_inc.value;
                        self.learntsize_adjust_cnt = self.learntsize_adjust_confl as i64;
                        self.max_learnts *= config.learntsize_inc.value;
                    }
                }

                Err(e) => return Err(e.into()),

                Ok(()) => {
                    if self.counters.fresh_conflicts >= budget {
                        log::trace!(target: targets::SOLVE, "Restart after {} conflicts", self.counters.fresh_conflicts);
                        self.backjump(root_level);
                        return Ok(ContextState::Unknown);
                    }

                    if self.trail.level() == 0 && self.config.simplify.value {
                        self.simplify()?;
                        if self.state == ContextState::Unsatisfiable {
                            return Ok(ContextState::Unsatisfiable);
                        }
                    }

                    let learnt_excess =
                        self.clause_db.addition_count() as f64 - self.trail.len() as f64;
                    if learnt_excess >= self.max_learnts {
                        self.reduce()?;
                    }

                    match self.make_decision() {
                        Some(literal) => self.decide_literal(literal),

                        None => {
                            self.model = self
                                .atom_db
                                .valuation()
                                .iter()
                                .map(|value| value.unwrap_or(false))
                                .collect();
                            self.backjump(root_level);
                            return Ok(ContextState::Satisfiable);
                        }
                    }
                }
            }
        }
    }

    /// Adds a clause learnt through analysis and assigns the asserting literal of the clause.
    ///
    /// # Soundness
    /// Assumes the context is at the level the clause asserts at, or the root level.
    pub(crate) fn learn(&mut self, clause: CClause) -> Result<(), ErrorKind> {
        match clause.as_slice() {
            [] => Err(err::AnalysisError::NoAssertion.into()),

            [literal] => {
                let literal = *literal;
                self.assign(literal, None);
                self.atom_db.set_level(literal.atom(), 0);
                if self.trail.level() > 0 {
                    self.pending_units.push(literal);
                }
                Ok(())
            }

            [first, second] => {
                let (first, second) = (*first, *second);
                self.watches.watch_binary(first, second);
                self.assign(first, Some(Reason::Binary(second)));
                Ok(())
            }

            _ => {
                let first = clause[0];
                let key = self.store_long(clause, true)?;
                self.assign(first, Some(Reason::Long(key)));
                Ok(())
            }
        }
    }

    /// Assigns each unit clause learnt above level zero, and propagates.
    ///
    /// # Soundness
    /// Assumes the context is at level zero.
    fn assign_pending_units(&mut self) {
        let units = std::mem::take(&mut self.pending_units);
        for literal in units {
            if !self.enqueue(literal, None) {
                self.state = ContextState::Unsatisfiable;
            }
        }

        if let Err(err::BCPError::Conflict(_)) = self.bcp() {
            self.state = ContextState::Unsatisfiable;
        }
    }
}
