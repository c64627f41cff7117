use crate::{
    config::Activity,
    db::atom::AtomDB,
    misc::log::targets::{self},
    structures::atom::Atom,
};

/// Methods for inspecting and mutating the activity of atoms.
///
/// Activity follows the classic VSIDS scheme.
/// Each atom examined during conflict analysis has the (fixed) bump added to its activity, and after every [decay_interval](crate::config::dbs::AtomDBConfig::decay_interval) decisions the activity of every atom is scaled by the [decay factor](crate::config::dbs::AtomDBConfig::decay_factor).
impl AtomDB {
    /// Bumps the activity of an atom and updates it's position on the activity heap, if the atom is on the activity heap.
    ///
    /// If the bumped activity would be greater than the maximum allowed activity, the activity of every atom is rescored first.
    pub fn bump_activity(&mut self, atom: Atom) {
        if self.activity_of(atom) + self.config.bump.value > self.config.bump.max {
            self.rescore_activity()
        }

        self.activity_heap.revalue(
            atom as usize,
            self.activity_of(atom) + self.config.bump.value,
        );
        self.activity_heap.heapify_if_active(atom as usize);
    }

    /// The activity of an atom, regardless of whether it is on the activity heap.
    pub fn activity_of(&self, atom: Atom) -> Activity {
        *self.activity_heap.value_at(atom as usize)
    }

    /// Notes a decision, and decays the activity of every atom if the decay interval has been reached.
    pub fn note_decision(&mut self) {
        self.decisions_since_decay += 1;
        if self.decisions_since_decay >= self.config.decay_interval.value {
            self.decisions_since_decay = 0;
            self.decay_activity();
        }
    }

    /// Scales the activity of every atom by the decay factor.
    pub fn decay_activity(&mut self) {
        let factor = self.config.decay_factor.value;
        log::trace!(target: targets::VALUATION, "Decay of atom activity by {factor}");
        // Uniform scaling preserves the order of the heap.
        self.activity_heap.apply_to_all(|activity| activity * factor);
    }

    /// Rescores the activity of all atoms to avoid overflow.
    pub fn rescore_activity(&mut self) {
        let factor = 1.0 / self.config.bump.max;
        log::debug!(target: targets::VALUATION, "Rescoring atom activity");
        self.activity_heap.apply_to_all(|activity| activity * factor);
    }

    /// Pops the most active atom from the activity heap.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }
}

#[cfg(test)]
mod activity_tests {
    use crate::{config::dbs::AtomDBConfig, db::atom::AtomDB};

    #[test]
    fn order_after_decay() {
        let mut config = AtomDBConfig::default();
        config.decay_interval.value = 1;
        let mut atom_db = AtomDB::new(&config);

        for _ in 0..8 {
            assert!(atom_db.fresh_atom(true).is_ok());
        }
        for atom in 0..8 {
            for _ in 0..=(atom * 3) % 8 {
                atom_db.bump_activity(atom);
            }
            atom_db.note_decision();
        }
        atom_db.rescore_activity();

        let mut previous = f64::MAX;
        while let Some(atom) = atom_db.heap_pop_most_active() {
            let activity = atom_db.activity_of(atom);
            assert!(activity <= previous);
            previous = activity;
        }
    }
}
