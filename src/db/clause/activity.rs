use crate::{config::Activity, db::ClauseKey, misc::log::targets::{self}};

use super::ClauseDB;

/// Methods for the activity of addition clauses.
///
/// The bump applied to a clause is held as the value of the bump option of the database configuration, and grows on each [decay](ClauseDB::decay_activity).
/// If the activity of any clause exceeds the maximum of the bump option, the activity of every addition clause and the bump are rescaled.
impl ClauseDB {
    /// Bumps the activity of the addition clause with the given key.
    ///
    /// Original clauses have no activity, and so a bump to an original clause is ignored.
    pub fn bump_activity(&mut self, key: &ClauseKey) {
        if !key.is_addition() {
            return;
        }

        let bump = self.config.bump.value;
        let rescale = match self.get_mut(key) {
            Ok(clause) => {
                clause.activity += bump;
                clause.activity > self.config.bump.max
            }
            Err(_) => false,
        };

        if rescale {
            self.rescale_activity();
        }
    }

    /// Decays the activity of every addition clause, by increasing the bump applied to future bumps.
    pub fn decay_activity(&mut self) {
        self.config.bump.value /= self.config.decay.value;
        if self.config.bump.value > self.config.bump.max {
            self.rescale_activity();
        }
    }

    /// The current bump.
    pub fn current_bump(&self) -> Activity {
        self.config.bump.value
    }

    fn rescale_activity(&mut self) {
        log::trace!(target: targets::CLAUSE_DB, "Rescaling clause activity");
        let factor = 1.0 / self.config.bump.max;

        for clause in self.addition.iter_mut().flatten() {
            clause.activity *= factor;
        }
        self.config.bump.value *= factor;
    }
}
