use crate::{
    db::{ClauseKey, FormulaIndex, clause::db_clause::dbClause},
    misc::log::targets::{self},
    structures::clause::CClause,
    types::err::{self},
};

use super::ClauseDB;

/// Methods for storing clauses.
///
/// As key generation is local, these methods are the only way to obtain a key.
/// Though, note, as keys use a [index](FormulaIndex) which may be smaller than [usize] a check is made to ensure it will be possible to generate the key.
impl ClauseDB {
    /// Stores an original clause, returning the key to the clause.
    pub fn store_original(&mut self, clause: CClause) -> Result<ClauseKey, err::ClauseDBError> {
        let key = self.fresh_original_key()?;
        log::trace!(target: targets::CLAUSE_DB, "{key}: {clause:?}");

        self.original_count += 1;
        self.original_literals += clause.len();
        self.original.push(Some(dbClause::new(key, clause, 0.0)));
        Ok(key)
    }

    /// Stores an addition clause with an activity of the current bump, returning the key to the clause.
    pub fn store_addition(&mut self, clause: CClause) -> Result<ClauseKey, err::ClauseDBError> {
        let key = self.fresh_addition_key()?;
        log::trace!(target: targets::CLAUSE_DB, "{key}: {clause:?}");

        self.addition_count += 1;
        self.addition_literals += clause.len();

        let db_clause = dbClause::new(key, clause, 0.0);
        match key.index() {
            index if index < self.addition.len() => self.addition[index] = Some(db_clause),
            _ => self.addition.push(Some(db_clause)),
        }
        self.bump_activity(&key);

        Ok(key)
    }

    fn fresh_original_key(&mut self) -> Result<ClauseKey, err::ClauseDBError> {
        match FormulaIndex::try_from(self.original.len()) {
            Ok(index) => Ok(ClauseKey::Original(index)),
            Err(_) => Err(err::ClauseDBError::StorageExhausted),
        }
    }

    /// A key to the first empty index, or to a fresh index.
    ///
    /// An empty index whose tokens are exhausted is abandoned.
    fn fresh_addition_key(&mut self) -> Result<ClauseKey, err::ClauseDBError> {
        while let Some(key) = self.empty_keys.pop() {
            match key.retoken() {
                Ok(key) => return Ok(key),
                Err(_) => {
                    log::trace!(target: targets::CLAUSE_DB, "Tokens exhausted for {key}");
                }
            }
        }

        match FormulaIndex::try_from(self.addition.len()) {
            Ok(index) => Ok(ClauseKey::Addition(index, 0)),
            Err(_) => Err(err::ClauseDBError::StorageExhausted),
        }
    }
}

#[cfg(test)]
mod store_tests {
    use crate::{
        config::dbs::ClauseDBConfig,
        db::{ClauseKey, FormulaToken, clause::ClauseDB},
        structures::literal::{CLiteral, Literal},
    };

    fn clause(atoms: [u32; 3]) -> Vec<CLiteral> {
        atoms.iter().map(|atom| CLiteral::new(*atom, true)).collect()
    }

    #[test]
    fn index_reuse() {
        let mut clause_db = ClauseDB::new(&ClauseDBConfig::default());
        let first = clause_db.store_addition(clause([0, 1, 2])).expect("store");
        assert_eq!(first, ClauseKey::Addition(0, 0));

        assert!(clause_db.remove(&first).is_ok());
        let second = clause_db.store_addition(clause([1, 2, 3])).expect("store");
        assert_eq!(second, ClauseKey::Addition(0, 1));
        assert!(clause_db.get(&first).is_err());
        assert!(clause_db.get(&second).is_ok());
    }

    #[test]
    fn exhausted_tokens() {
        let mut clause_db = ClauseDB::new(&ClauseDBConfig::default());
        let mut key = clause_db.store_addition(clause([0, 1, 2])).expect("store");

        while let ClauseKey::Addition(_, token) = key {
            if token == FormulaToken::MAX {
                break;
            }
            assert!(clause_db.remove(&key).is_ok());
            key = clause_db.store_addition(clause([0, 1, 2])).expect("store");
        }
        assert_eq!(key, ClauseKey::Addition(0, FormulaToken::MAX));

        assert!(clause_db.remove(&key).is_ok());
        let fresh = clause_db.store_addition(clause([0, 1, 2])).expect("store");
        assert_eq!(fresh, ClauseKey::Addition(1, 0));
        assert_eq!(clause_db.addition_count(), 1);
    }
}
