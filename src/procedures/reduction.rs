/*!
Removal of inactive learnt clauses.

See [GenericContext::reduce] for the relevant context method.

# Overview
Learnt clauses are ordered by activity, and:
- Each clause in the less active half is removed.
- Each clause in the more active half whose activity is below the current bump divided by the count of learnt clauses is removed.

In either case, a clause which is the reason for the value of the first literal of the clause is *locked* and kept.

Reduction is triggered when the count of learnt clauses (less the count of assigned literals) exceeds a limit, which grows as conflicts are found.
Binary clauses are never removed, as they are not stored in the clause database.
*/

use crate::{
    config::Activity,
    context::GenericContext,
    db::ClauseKey,
    misc::log::targets::{self},
    types::err::ErrorKind,
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Removes inactive learnt clauses.
    ///
    /// For documentation, see [procedures::reduction](crate::procedures::reduction).
    pub fn reduce(&mut self) -> Result<(), ErrorKind> {
        let count = self.clause_db.addition_count();
        if count == 0 {
            return Ok(());
        }
        let activity_limit = self.clause_db.current_bump() / count as Activity;

        let mut learnt: Vec<(ClauseKey, Activity)> = Vec::with_capacity(count);
        for key in self.clause_db.addition_keys() {
            learnt.push((key, self.clause_db.get(&key)?.activity));
        }
        learnt.sort_unstable_by(|a, b| a.1.total_cmp(&b.1));

        let half = learnt.len() / 2;
        let mut removed = 0;
        for (index, (key, activity)) in learnt.into_iter().enumerate() {
            if self.locked(key) {
                continue;
            }
            if index < half || activity < activity_limit {
                self.remove_long(key)?;
                removed += 1;
            }
        }

        log::debug!(target: targets::REDUCTION, "Removed {removed} of {count} learnt clauses");
        Ok(())
    }
}

#[cfg(test)]
mod reduction_tests {
    use crate::{
        config::Config,
        context::Context,
        db::ClauseKey,
        reports::Report,
        structures::{
            consequence::Reason,
            literal::{CLiteral, Literal},
        },
    };

    fn watched(context: &Context, key: ClauseKey) -> bool {
        (0..context.atom_db.count() as u32)
            .flat_map(|atom| [CLiteral::new(atom, true), CLiteral::new(atom, false)])
            .any(|literal| context.watches.long(literal).iter().any(|watch| watch.key == key))
    }

    #[test]
    fn locked_clauses_survive() {
        let mut the_context = Context::from_config(Config::default());
        let [a, b, c, d, e, f] = *the_context.fresh_or_max_literals(6).as_slice() else {
            panic!("! Literals")
        };

        let reason = the_context.store_long(vec![a, -b, -c], true).expect("store");
        let inactive = the_context.store_long(vec![d, e, f], true).expect("store");
        let also_inactive = the_context.store_long(vec![-d, e, -f], true).expect("store");
        let active = the_context.store_long(vec![d, -e, f], true).expect("store");

        // b and c are decided, and a is propagated by the first clause.
        the_context.trail.new_level();
        the_context.assign(b, None);
        the_context.trail.new_level();
        the_context.assign(c, None);
        the_context.assign(a, Some(Reason::Long(reason)));
        assert!(the_context.locked(reason));
        assert!(!the_context.locked(inactive));

        for key in [reason, inactive, also_inactive] {
            the_context.clause_db.get_mut(&key).expect("clause").activity = 0.0;
        }
        the_context.clause_db.get_mut(&active).expect("clause").activity = 10.0;

        assert!(the_context.reduce().is_ok());

        assert_eq!(the_context.clause_db.addition_count(), 2);
        assert!(the_context.clause_db.get(&inactive).is_err());
        assert!(the_context.clause_db.get(&also_inactive).is_err());
        assert!(!watched(&the_context, inactive));
        assert!(!watched(&the_context, also_inactive));

        assert!(the_context.clause_db.get(&active).is_ok());
        assert!(watched(&the_context, active));

        match the_context.reason_of(a.atom()) {
            Some(Reason::Long(key)) => {
                let clause = the_context.clause_db.get(&key).expect("reason");
                assert_eq!(clause[0], a);
                assert!(watched(&the_context, key));
            }
            _ => panic!("! Reason"),
        }
    }

    #[test]
    fn reduction_while_solving() {
        let mut config = Config::default();
        config.clause_db.learntsize_factor.value = 0.0;

        let mut the_context = Context::from_config(config);
        let (pigeons, holes) = (5, 4);
        let atoms = the_context.fresh_or_max_literals(pigeons * holes);
        let pigeon_in = |pigeon: usize, hole: usize| atoms[pigeon * holes + hole];

        for pigeon in 0..pigeons {
            let clause = (0..holes).map(|hole| pigeon_in(pigeon, hole)).collect::<Vec<_>>();
            assert!(the_context.add_clause(clause).is_ok());
        }
        for hole in 0..holes {
            for p in 0..pigeons {
                for q in (p + 1)..pigeons {
                    let clause = vec![-pigeon_in(p, hole), -pigeon_in(q, hole)];
                    assert!(the_context.add_clause(clause).is_ok());
                }
            }
        }

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }
}
