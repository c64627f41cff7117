//! Recovery from a conflict, and the end of a solve.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone.
//!
//! Each atom unvalued by a backjump:
//! - Has the value noted as the previous value of the atom, for phase saving.
//! - Loses the level and reason for the value.
//! - Is activated on the activity heap.
//!
//! If the count of atoms unvalued is at least the count of atoms active on the heap, the heap property is restored once after every atom is activated, rather than after each activation.
//!
//! For sound application the target level must be equal to or lower than the current level.
//! Still, passing a target level greater than the current level is safe, as nothing will happen.
//!
//! # Example
//!
//! ```rust,ignore
//! let learnt = self.conflict_analysis(conflict)?;
//! self.backjump(std::cmp::max(learnt.level, self.trail.root_level));
//! ```

use crate::{
    context::GenericContext,
    db::LevelIndex,
    misc::log::targets::{self},
    structures::literal::Literal,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        let start = self.trail.level_start(target + 1);
        let popped = self.trail.literals.split_off(start);
        let deferred = popped.len() >= self.atom_db.heap_active_count();

        for literal in popped.iter().rev() {
            self.atom_db.drop_value(literal.atom(), deferred);

            if let Some(callback) = &mut self.callback_unassign {
                callback(literal);
            }
        }

        self.trail.level_indices.truncate(target as usize);
        self.trail.q_head = self.trail.len();
    }
}
