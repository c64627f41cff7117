/*!
Methods for choosing the value of an atom.

# Overview

A decision is to value some atom *a* with value *v*, represented as the literal with atom *a* and polarity *v*.
Each decision opens a new level on the trail, and the decided literal is the first literal of the level.

# Activity

Atoms are selected by activity, and the [atom database](crate::db::atom) keeps every atom without a value active on a max activity heap.
Atoms with a value may also be active, as these are only removed when popped, and so the heap is popped until an atom without a value is found.

With probability [random_decision_bias](crate::config::Config::random_decision_bias) an atom is instead chosen at random, and used if the atom has no value.

# Phase saving

If phase saving is enabled the chosen atom is valued as the atom was most recently valued.
Otherwise, the value is true with probability [polarity_lean](crate::config::Config::polarity_lean).
Before the first value of an atom, the previous value of an atom is drawn with the same probability.
*/

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        literal::{CLiteral, Literal},
    },
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A literal to decide on, if some atom has no value.
    ///
    /// For documentation, see [procedures::decision](crate::procedures::decision).
    pub fn make_decision(&mut self) -> Option<CLiteral> {
        self.atom_db.note_decision();

        let atom = self.random_atom().or_else(|| self.most_active_atom())?;

        let value = match self.config.phase_saving.value {
            true => self.atom_db.previous_value_of(atom),
            false => self.rng.random_bool(self.config.polarity_lean.value),
        };

        Some(CLiteral::new(atom, value))
    }

    /// Opens a fresh level and assigns `literal` as a decision.
    pub fn decide_literal(&mut self, literal: CLiteral) {
        log::trace!(target: targets::DECISION, "Decision {literal} at level {}", self.trail.level() + 1);
        self.counters.decisions += 1;
        self.trail.new_level();
        self.assign(literal, None);
    }

    fn random_atom(&mut self) -> Option<Atom> {
        let count = self.atom_db.count();
        if count == 0 || !self.rng.random_bool(self.config.random_decision_bias.value) {
            return None;
        }

        let atom = self.rng.random_range(0..count) as Atom;
        match self.atom_db.value_of(atom) {
            None => Some(atom),
            Some(_) => None,
        }
    }

    fn most_active_atom(&mut self) -> Option<Atom> {
        while let Some(atom) = self.atom_db.heap_pop_most_active() {
            if self.atom_db.value_of(atom).is_none() {
                return Some(atom);
            }
        }
        None
    }
}
