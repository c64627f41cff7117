/*!
A database of 'atom related' things, accessed via fields on an [AtomDB] struct.

Things include:
- A current (often partial) valuation and the previous value of each atom (or some randomised value).
- An [IndexHeap] recording the activty of atoms, where any atom without a value is 'active' on the heap.
- A record of which level an atom was valued on, and the reason for the value.

Each of these is a vector indexed by atoms, so the record of an atom is spread across the vectors rather than stored as a single struct.
Likewise, the activity heap stores atoms (as indicies) and tracks the position of each atom on the heap.
*/

mod activity;

use crate::{
    config::{Activity, dbs::AtomDBConfig},
    db::LevelIndex,
    generic::index_heap::IndexHeap,
    misc::log::targets::{self},
    structures::{
        atom::{ATOM_MAX, Atom},
        consequence::Reason,
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

/// The atom database.
pub struct AtomDB {
    /// A current (often partial) valuation.
    valuation: Vec<Option<bool>>,

    /// The previous value of each atom (or some randomised value).
    previous_valuation: Vec<bool>,

    /// The level on which each atom was valued, if valued.
    levels: Vec<Option<LevelIndex>>,

    /// The reason for the value of each atom, if valued by propagation.
    reasons: Vec<Option<Reason>>,

    /// An [IndexHeap] recording the activty of atoms, where any atom without a value is 'active' on the heap.
    activity_heap: IndexHeap<Activity>,

    /// A count of decisions since the last decay of activity.
    decisions_since_decay: usize,

    /// A local configuration, typically derived from the configuration of a context.
    pub config: AtomDBConfig,
}

impl AtomDB {
    /// A new [AtomDB] with local configuration options derived from `config`.
    pub fn new(config: &AtomDBConfig) -> Self {
        AtomDB {
            valuation: Vec::default(),
            previous_valuation: Vec::default(),
            levels: Vec::default(),
            reasons: Vec::default(),
            activity_heap: IndexHeap::default(),
            decisions_since_decay: 0,
            config: config.clone(),
        }
    }

    /// A count of atoms in the [AtomDB].
    pub fn count(&self) -> usize {
        self.valuation.len()
    }

    /// The current valuation.
    pub fn valuation(&self) -> &[Option<bool>] {
        &self.valuation
    }

    /// A fresh atom, with `previous_value` as the value to use for the atom on a first decision (given phase saving).
    ///
    /// On Ok the atom is part of the language of the context, and is active on the activity heap.
    pub fn fresh_atom(&mut self, previous_value: bool) -> Result<Atom, err::AtomDBError> {
        let atom: Atom = match self.valuation.len().try_into() {
            Ok(atom) if atom <= ATOM_MAX => atom,
            _ => {
                log::error!(target: targets::VALUATION, "Atoms exhausted");
                return Err(err::AtomDBError::AtomsExhausted);
            }
        };

        self.activity_heap.add(atom as usize, 0.0);
        self.activity_heap.activate(atom as usize);

        self.valuation.push(None);
        self.previous_valuation.push(previous_value);
        self.levels.push(None);
        self.reasons.push(None);

        Ok(atom)
    }

    /// The value of `atom`, if it has a value.
    ///
    /// # Panics
    /// If the atom is not part of the database.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.valuation[atom as usize]
    }

    /// The value of `literal` on the current valuation.
    ///
    /// Some(true) if the polarity of the literal matches the value of the atom of the literal, Some(false) if the polarity differs, and None if the atom has no value.
    pub fn value_of_literal(&self, literal: CLiteral) -> Option<bool> {
        self.value_of(literal.atom())
            .map(|value| value == literal.polarity())
    }

    /// Whether `literal` is false on the current valuation.
    pub fn is_false(&self, literal: CLiteral) -> bool {
        self.value_of_literal(literal) == Some(false)
    }

    /// The level on which `atom` was valued, if valued.
    pub fn level_of(&self, atom: Atom) -> Option<LevelIndex> {
        self.levels[atom as usize]
    }

    /// The level on which `atom` was valued, or zero if the atom has no value.
    ///
    /// Useful during analysis, where each atom examined has a value.
    pub fn level_or_zero(&self, atom: Atom) -> LevelIndex {
        self.levels[atom as usize].unwrap_or(0)
    }

    /// The reason for the value of `atom`, if the atom was valued by propagation.
    pub fn reason_of(&self, atom: Atom) -> Option<Reason> {
        self.reasons[atom as usize]
    }

    /// The previous value of `atom`, or the value to use if the atom has not been valued.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_valuation[atom as usize]
    }

    /// Values the atom of `literal` to match the polarity of `literal`, with a note of the level of the value and the reason for the value.
    ///
    /// The atom remains on the activity heap, if present, and is skipped when the heap is used to make a decision.
    pub fn set_value(&mut self, literal: CLiteral, level: LevelIndex, reason: Option<Reason>) {
        let atom = literal.atom() as usize;
        self.valuation[atom] = Some(literal.polarity());
        self.levels[atom] = Some(level);
        self.reasons[atom] = reason;
    }

    /// Revises the level of an (assigned) atom.
    pub fn set_level(&mut self, atom: Atom, level: LevelIndex) {
        self.levels[atom as usize] = Some(level);
    }

    /// Clears the value of an atom, notes the value as the previous value of the atom, and activates the atom on the activity heap.
    ///
    /// If `deferred` the heap property is not restored when activating the atom.
    pub fn drop_value(&mut self, atom: Atom, deferred: bool) {
        log::trace!(target: targets::VALUATION, "Cleared atom: {atom}");
        let index = atom as usize;
        if let Some(value) = self.valuation[index].take() {
            self.previous_valuation[index] = value;
        }
        self.levels[index] = None;
        self.reasons[index] = None;

        match deferred {
            true => self.activity_heap.activate_deferred(index),
            false => self.activity_heap.activate(index),
        };
    }

    /// A count of atoms active on the activity heap.
    ///
    /// Atoms on the heap may have a value, as atoms are only removed from the heap when popped.
    pub fn heap_active_count(&self) -> usize {
        self.activity_heap.active_count()
    }
}
