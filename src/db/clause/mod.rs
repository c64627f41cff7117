/*!
A database of long clauses.

Clauses with three or more literals are stored as [dbClause]s and accessed by [ClauseKey]s.
Unit clauses are values on the trail at level zero, and binary clauses are pairs in the [watch lists](crate::db::watches), so neither is stored here.

Original clauses are stored in order of addition and each key is used once.
Addition clauses are stored at the first free index, and keys to a reused index are distinguished by a [token](crate::db::FormulaToken).

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

mod activity;
pub mod db_clause;
mod store;

use db_clause::dbClause;

use crate::{
    config::dbs::ClauseDBConfig,
    db::keys::ClauseKey,
    types::err::{self},
};

/// The clause database.
pub struct ClauseDB {
    /// Clause database specific configuration parameters.
    pub config: ClauseDBConfig,

    /// Original clauses, with `None` for clauses removed by simplification.
    original: Vec<Option<dbClause>>,

    /// Addition clauses, with `None` for free indicies.
    addition: Vec<Option<dbClause>>,

    /// A stack of keys for addition clauses whose indices are empty.
    empty_keys: Vec<ClauseKey>,

    /// A count of original clauses in the database.
    original_count: usize,

    /// A count of addition clauses in the database.
    // This can't be inferred from the addition vec, as indices may be empty.
    addition_count: usize,

    /// A count of literals in original clauses in the database.
    original_literals: usize,

    /// A count of literals in addition clauses in the database.
    addition_literals: usize,
}

impl ClauseDB {
    /// A new [ClauseDB] with local configuration options derived from `config`.
    pub fn new(config: &ClauseDBConfig) -> Self {
        ClauseDB {
            config: config.clone(),

            original: Vec::default(),
            addition: Vec::default(),
            empty_keys: Vec::default(),

            original_count: 0,
            addition_count: 0,
            original_literals: 0,
            addition_literals: 0,
        }
    }

    /// Returns Ok(clause) corresponding to the given key, or an Err(issue) otherwise.
    pub fn get(&self, key: &ClauseKey) -> Result<&dbClause, err::ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(index) => self.original.get(*index as usize),
            ClauseKey::Addition(index, _) => self.addition.get(*index as usize),
        };
        match slot {
            Some(Some(clause)) if clause.key() == *key => Ok(clause),
            Some(Some(_)) => Err(err::ClauseDBError::InvalidKeyToken),
            _ => Err(err::ClauseDBError::Missing),
        }
    }

    /// Returns Ok(mutable clause) corresponding to the given key, or an Err(issue) otherwise.
    pub fn get_mut(&mut self, key: &ClauseKey) -> Result<&mut dbClause, err::ClauseDBError> {
        let slot = match key {
            ClauseKey::Original(index) => self.original.get_mut(*index as usize),
            ClauseKey::Addition(index, _) => self.addition.get_mut(*index as usize),
        };
        match slot {
            Some(Some(clause)) if clause.key() == *key => Ok(clause),
            Some(Some(_)) => Err(err::ClauseDBError::InvalidKeyToken),
            _ => Err(err::ClauseDBError::Missing),
        }
    }

    /// Removes the clause with the given key from the database, returning the clause.
    ///
    /// Watches of the clause are not removed, see [remove_long](crate::context::GenericContext::remove_long).
    pub fn remove(&mut self, key: &ClauseKey) -> Result<dbClause, err::ClauseDBError> {
        self.get(key)?;

        match key {
            ClauseKey::Original(index) => match self.original[*index as usize].take() {
                Some(clause) => {
                    self.original_count -= 1;
                    self.original_literals -= clause.len();
                    Ok(clause)
                }
                None => Err(err::ClauseDBError::Missing),
            },

            ClauseKey::Addition(index, _) => match self.addition[*index as usize].take() {
                Some(clause) => {
                    self.addition_count -= 1;
                    self.addition_literals -= clause.len();
                    self.empty_keys.push(*key);
                    Ok(clause)
                }
                None => Err(err::ClauseDBError::Missing),
            },
        }
    }

    /// Keys to every original clause in the database.
    pub fn original_keys(&self) -> Vec<ClauseKey> {
        self.original.iter().flatten().map(|clause| clause.key()).collect()
    }

    /// Keys to every addition clause in the database.
    pub fn addition_keys(&self) -> Vec<ClauseKey> {
        self.addition.iter().flatten().map(|clause| clause.key()).collect()
    }

    /// An iterator over all clauses in the database, original clauses first.
    pub fn all_clauses(&self) -> impl Iterator<Item = &dbClause> {
        self.original.iter().chain(self.addition.iter()).flatten()
    }

    /// A count of original clauses in the database.
    pub fn original_count(&self) -> usize {
        self.original_count
    }

    /// A count of addition clauses in the database.
    pub fn addition_count(&self) -> usize {
        self.addition_count
    }

    /// A count of literals in original clauses in the database.
    pub fn original_literal_count(&self) -> usize {
        self.original_literals
    }

    /// A count of literals in addition clauses in the database.
    pub fn addition_literal_count(&self) -> usize {
        self.addition_literals
    }

    /// Notes literals removed from the clause with the given key.
    pub(crate) fn note_literals_removed(&mut self, key: &ClauseKey, count: usize) {
        match key {
            ClauseKey::Original(_) => self.original_literals -= count,
            ClauseKey::Addition(_, _) => self.addition_literals -= count,
        }
    }
}
