use crate::{
    config::Config,
    db::{LevelIndex, atom::AtomDB, clause::ClauseDB, trail::Trail, watches::Watches},
    incremental::PendingAssertion,
    procedures::analysis::AnalysisBuffer,
    reports::Report,
    structures::{
        atom::Atom,
        consequence::Reason,
        literal::{CLiteral, Literal},
    },
    types::err::ErrorKind,
};

use super::{
    ContextState, Counters,
    callbacks::{CallbackOnClause, CallbackOnLiteral, CallbackTerminate},
};

/// A generic context, parameratised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// [Default] is used when making a decision to appease the borrow checker, and may be relaxed with a different implementation.
///
/// # Example
///
/// ```rust
/// # use minnow_sat::context::GenericContext;
/// # use minnow_sat::generic::random::MinimalPCG32;
/// # use minnow_sat::config::Config;
/// let context = GenericContext::<MinimalPCG32>::from_config(Config::default());
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of a context.
    pub config: Config,

    /// Counters related to a context/solve.
    pub counters: Counters,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The clause database.
    /// See [db::clause](crate::db::clause) for details.
    pub clause_db: ClauseDB,

    /// Binary and long watch lists for each literal.
    /// See [db::watches](crate::db::watches) for details.
    pub watches: Watches,

    /// The trail of assignments.
    /// See [db::trail](crate::db::trail) for details.
    pub trail: Trail,

    /// The status of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,

    /// Scratch space for conflict analysis.
    pub(crate) analysis_buffer: AnalysisBuffer,

    /// The model found by the last satisfiable solve.
    pub(crate) model: Vec<bool>,

    /// The negation of the assumptions responsible for the last failed solve.
    pub(crate) failed_assumptions: Vec<CLiteral>,

    /// A clause learnt from a conflict following a decision, not yet asserted.
    pub(crate) pending_assertion: Option<PendingAssertion>,

    /// Whether some literal has been assigned since the flag was last taken, or a decision was last undone.
    pub(crate) newly_implied_dirty: bool,

    /// Unit clauses learnt above level zero, to be assigned on return to level zero.
    pub(crate) pending_units: Vec<CLiteral>,

    /// The length of the trail at the last simplification, if any.
    pub(crate) simp_assigns: Option<usize>,

    /// Propagations remaining before simplification is worthwhile.
    pub(crate) simp_props: i64,

    /// The limit on learnt clauses, before a reduction.
    pub(crate) max_learnts: f64,

    /// The count of conflicts between adjustments to the limit on learnt clauses.
    pub(crate) learntsize_adjust_confl: f64,

    /// Conflicts remaining before the next adjustment to the limit on learnt clauses.
    pub(crate) learntsize_adjust_cnt: i64,

    pub(crate) callback_enqueue: Option<Box<CallbackOnLiteral>>,

    pub(crate) callback_unassign: Option<Box<CallbackOnLiteral>>,

    pub(crate) callback_learnt: Option<Box<CallbackOnClause>>,

    pub(crate) callback_terminate: Option<Box<CallbackTerminate>>,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Creates a context from some given configuration and source of randomness.
    pub fn from_config_and_rng(config: Config, rng: R) -> Self {
        Self {
            atom_db: AtomDB::new(&config.atom_db),
            clause_db: ClauseDB::new(&config.clause_db),
            watches: Watches::default(),
            trail: Trail::default(),

            config,
            counters: Counters::default(),

            state: ContextState::Input,
            rng,

            analysis_buffer: AnalysisBuffer::default(),

            model: Vec::default(),
            failed_assumptions: Vec::default(),
            pending_assertion: None,
            newly_implied_dirty: false,
            pending_units: Vec::default(),

            simp_assigns: None,
            simp_props: 0,

            max_learnts: 0.0,
            learntsize_adjust_confl: 0.0,
            learntsize_adjust_cnt: 0,

            callback_enqueue: None,
            callback_unassign: None,
            callback_learnt: None,
            callback_terminate: None,
        }
    }

    /// A report on the state of the context.
    pub fn report(&self) -> Report {
        Report::from(&self.state)
    }

    /// Whether the formula of the context is known to be unsatisfiable, regardless of assumptions.
    pub fn is_unsatisfiable(&self) -> bool {
        self.state == ContextState::Unsatisfiable
    }

    /// The model found by the last solve, indexed by atom.
    ///
    /// Returns an error unless the last solve found the formula satisfiable.
    pub fn model(&self) -> Result<&[bool], ErrorKind> {
        match self.state {
            ContextState::Satisfiable => Ok(&self.model),
            _ => Err(ErrorKind::InvalidState),
        }
    }

    /// The negation of each assumption responsible for the last failed solve given assumptions.
    ///
    /// Empty if the last solve did not fail due to assumptions, or if the formula is unsatisfiable without any assumption.
    pub fn failed_assumptions(&self) -> &[CLiteral] {
        &self.failed_assumptions
    }

    /// The current value of `atom`, if any.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.atom_db.value_of(atom)
    }

    /// The current value of `literal`, if any.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.atom_db.value_of_literal(literal)
    }

    /// The level at which `atom` was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.atom_db.level_of(atom)
    }

    /// The reason for the value of `atom`, if the value was obtained by propagation.
    pub fn reason_of(&self, atom: Atom) -> Option<Reason> {
        self.atom_db.reason_of(atom)
    }

    /// The current decision level.
    pub fn decision_level(&self) -> LevelIndex {
        self.trail.level()
    }

    /// The assigned literals, in order of assignment.
    pub fn trail(&self) -> &[CLiteral] {
        &self.trail.literals
    }

    /// Whether every atom in the context has a value.
    pub fn fully_assigned(&self) -> bool {
        self.trail.len() == self.atom_db.count()
    }

    /// The first atom without a value, if any.
    pub fn first_unassigned_atom(&self) -> Option<Atom> {
        self.atom_db
            .valuation()
            .iter()
            .position(|value| value.is_none())
            .map(|index| index as Atom)
    }

    /// Whether the literal is true on the current valuation.
    pub(crate) fn is_true(&self, literal: CLiteral) -> bool {
        self.atom_db.value_of(literal.atom()) == Some(literal.polarity())
    }
}
