mod common;

use minnow_sat::{
    config::Config,
    context::Context,
    reports::Report,
    structures::{
        consequence::Reason,
        literal::{CLiteral, Literal},
    },
};

type AtomRecord = (Option<bool>, Option<u32>, Option<Reason>);

fn snapshot(ctx: &Context) -> (Vec<CLiteral>, Vec<AtomRecord>) {
    let records = (0..ctx.atom_db.count() as u32)
        .map(|atom| (ctx.value_of(atom), ctx.level_of(atom), ctx.reason_of(atom)))
        .collect();
    (ctx.trail().to_vec(), records)
}

mod incremental {
    use super::*;

    #[test]
    fn root_conflict_is_permanent() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.decide(p), Ok(false));
        assert!(!ctx.at_assertion_level());

        ctx.undo_decide(p);
        assert_eq!(ctx.decision_level(), 0);
        assert!(ctx.at_assertion_level());

        assert_eq!(ctx.assert_cd_literal(), Ok(false));
        assert!(ctx.is_unsatisfiable());
        assert!(!ctx.at_assertion_level());

        assert_eq!(ctx.decide(r), Ok(false));
        assert_eq!(ctx.decide(-r), Ok(false));
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.decide(q), Ok(false));
    }

    #[test]
    fn decide_and_undo() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, r, s]).is_ok());

        assert_eq!(ctx.decide(p), Ok(true));
        assert_eq!(ctx.decision_level(), 1);
        assert_eq!(ctx.value_of_literal(q), Some(true));
        assert_eq!(ctx.level_of(q.atom()), Some(1));
        assert_eq!(ctx.reason_of(q.atom()), Some(Reason::Binary(-p)));

        assert_eq!(ctx.decide(-r), Ok(true));
        assert_eq!(ctx.value_of_literal(s), Some(true));
        assert!(matches!(ctx.reason_of(s.atom()), Some(Reason::Long(_))));

        ctx.undo_decide(p);
        assert_eq!(ctx.decision_level(), 0);
        assert!(ctx.trail().is_empty());
        for literal in [p, q, r, s] {
            assert_eq!(ctx.value_of_literal(literal), None);
            assert_eq!(ctx.reason_of(literal.atom()), None);
        }
    }

    #[test]
    fn backtracking_is_exact() {
        for seed in 0..24 {
            let formula = common::random_formula(seed, 8, 20, 3);
            let mut ctx = common::context_with(8, &formula);
            if ctx.is_unsatisfiable() {
                continue;
            }

            let mut decisions = Vec::default();
            let mut snapshots = Vec::default();

            while let Some(atom) = ctx.first_unassigned_atom() {
                let literal = CLiteral::new(atom, seed % 2 == 0);
                snapshots.push(snapshot(&ctx));
                decisions.push(literal);
                if !ctx.decide(literal).expect("decide") {
                    break;
                }
            }

            while let Some(literal) = decisions.pop() {
                ctx.undo_decide(literal);
                assert_eq!(Some(snapshot(&ctx)), snapshots.pop(), "seed {seed}");
            }
            assert_eq!(ctx.decision_level(), 0);
        }
    }

    #[test]
    fn newly_implied() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r, s, t] = *ctx.fresh_or_max_literals(5).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(t).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, r]).is_ok());

        assert_eq!(ctx.newly_implied(), &[t]);
        assert!(ctx.take_newly_implied_dirty());
        assert!(!ctx.take_newly_implied_dirty());

        assert_eq!(ctx.decide(p), Ok(true));
        assert!(ctx.take_newly_implied_dirty());
        assert_eq!(ctx.newly_implied(), &[q, r]);

        assert_eq!(ctx.decide(s), Ok(true));
        assert!(ctx.take_newly_implied_dirty());
        assert!(ctx.newly_implied().is_empty());

        ctx.undo_decide(s);
        assert!(!ctx.take_newly_implied_dirty());
        assert_eq!(ctx.newly_implied(), &[q, r]);

        // Undoing a decision clears the note, even when the note was not taken.
        assert_eq!(ctx.decide(s), Ok(true));
        ctx.undo_decide(s);
        assert!(!ctx.take_newly_implied_dirty());

        ctx.undo_decide(p);
        assert!(!ctx.take_newly_implied_dirty());
        assert_eq!(ctx.newly_implied(), &[t]);
    }

    #[test]
    fn assertion_guard() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![-p, -s, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -s, -q]).is_ok());

        assert!(ctx.assertion().is_none());

        assert_eq!(ctx.decide(p), Ok(true));
        assert_eq!(ctx.decide(r), Ok(true));
        assert_eq!(ctx.decide(s), Ok(false));
        assert!(ctx.assertion().is_none());

        ctx.undo_decide(s);
        assert!(ctx.assertion().is_none());

        ctx.undo_decide(r);
        let assertion = ctx.assertion().expect("assertion at level one");
        let mut clause = assertion.clause().to_vec();
        clause.sort();
        assert_eq!(clause, vec![-p, -s]);

        assert_eq!(assertion.assert_cd_literal(), Ok(true));
        assert_eq!(ctx.value_of_literal(s), Some(false));
        assert_eq!(ctx.reason_of(s.atom()), Some(Reason::Binary(-p)));
        assert!(ctx.assertion().is_none());

        ctx.undo_decide(p);
        assert_eq!(ctx.value_of_literal(s), None);
        assert_eq!(ctx.decide(p), Ok(true));
        assert_eq!(ctx.value_of_literal(s), Some(false));
    }

    #[test]
    #[should_panic]
    fn assertion_away_from_level() {
        let mut ctx = Context::from_config(Config::default());
        let _ = ctx.fresh_or_max_literal();
        let _ = ctx.assert_cd_literal();
    }

    #[test]
    #[should_panic]
    fn decide_on_valued_atom() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());
        let _ = ctx.decide(-p);
    }

    #[test]
    #[should_panic]
    fn undo_root_value() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();
        assert!(ctx.add_clause(p).is_ok());
        ctx.undo_decide(p);
    }

    #[test]
    #[should_panic]
    fn undo_unvalued() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();
        ctx.undo_decide(p);
    }
}
