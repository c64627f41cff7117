use minnow_sat::{
    builder::ClauseOk,
    config::Config,
    context::Context,
    reports::{self, Report},
    structures::literal::{CLiteral, Literal},
};

mod basic {
    use super::*;

    #[test]
    fn one_literal() {
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_or_max_literal();

        assert_eq!(the_context.add_clause(p), Ok(ClauseOk::Added));
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.model().map(|model| model[0]), Ok(true));
    }

    #[test]
    fn literal_and_negation() {
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_or_max_literal();

        assert!(the_context.add_clause(p).is_ok());
        assert_eq!(the_context.add_clause(-p), Ok(ClauseOk::Unsatisfiable));

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
        assert_eq!(the_context.report().code(), reports::UNSATISFIABLE);
    }

    #[test]
    fn binary_with_both_negated() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q] = *the_context.fresh_or_max_literals(2).as_slice() else {
            panic!("! Literals")
        };

        assert!(the_context.add_clause(vec![p, q]).is_ok());
        assert!(the_context.add_clause(-p).is_ok());
        assert!(the_context.add_clause(-q).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn single_binary() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q] = *the_context.fresh_or_max_literals(2).as_slice() else {
            panic!("! Literals")
        };

        assert!(the_context.add_clause(vec![p, q]).is_ok());
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert_eq!(the_context.report().code(), reports::SATISFIABLE);

        let model = the_context.model().expect("model");
        assert!(model[p.atom() as usize] || model[q.atom() as usize]);
    }

    #[test]
    fn exactly_one_of_three() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q, r] = *the_context.fresh_or_max_literals(3).as_slice() else {
            panic!("! Literals")
        };

        assert!(the_context.add_clause(vec![p, q, r]).is_ok());
        assert!(the_context.add_clause(vec![-p, -q]).is_ok());
        assert!(the_context.add_clause(vec![-q, -r]).is_ok());
        assert!(the_context.add_clause(vec![-p, -r]).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));

        let model = the_context.model().expect("model");
        assert_eq!(model.iter().filter(|value| **value).count(), 1);
    }

    #[test]
    fn model_before_solve() {
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_or_max_literal();
        assert!(the_context.add_clause(p).is_ok());

        assert!(the_context.model().is_err());
        assert_eq!(the_context.report(), Report::Unknown);
    }

    #[test]
    fn duplicates_and_tautologies() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q, r] = *the_context.fresh_or_max_literals(3).as_slice() else {
            panic!("! Literals")
        };

        assert_eq!(the_context.add_clause(vec![p, q, q]), Ok(ClauseOk::Added));
        assert_eq!(the_context.watches.binary_count(), 1);
        assert_eq!(the_context.clause_db.original_count(), 0);

        assert_eq!(
            the_context.add_clause(vec![p, q, -p, r]),
            Ok(ClauseOk::Tautology)
        );
        assert_eq!(the_context.add_clause(vec![p, q, r]), Ok(ClauseOk::Added));
        assert_eq!(the_context.clause_db.original_count(), 1);
    }

    #[test]
    fn unknown_atom() {
        let mut the_context = Context::from_config(Config::default());
        let p = the_context.fresh_or_max_literal();
        let stranger = CLiteral::new(p.atom() + 1, true);

        assert!(the_context.add_clause(vec![p, stranger]).is_err());
    }

    #[test]
    fn clause_after_decision() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q] = *the_context.fresh_or_max_literals(2).as_slice() else {
            panic!("! Literals")
        };

        assert_eq!(the_context.decide(p), Ok(true));
        assert!(the_context.add_clause(vec![p, q]).is_err());

        the_context.undo_decide(p);
        assert!(the_context.add_clause(vec![p, q]).is_ok());
    }

    #[test]
    fn determinism() {
        let mut the_context = Context::from_config(Config::default());
        let literals = the_context.fresh_or_max_literals(6);

        for window in literals.windows(3) {
            assert!(the_context.add_clause(window.to_vec()).is_ok());
            let negated = window.iter().map(|literal| -*literal).collect::<Vec<_>>();
            assert!(the_context.add_clause(negated).is_ok());
        }

        let first = the_context.solve();
        assert_eq!(first, Ok(Report::Satisfiable));
        for _ in 0..4 {
            assert_eq!(the_context.solve(), first);
        }
    }

    #[test]
    fn simplify_is_idempotent() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q, r, s] = *the_context.fresh_or_max_literals(4).as_slice() else {
            panic!("! Literals")
        };

        assert!(the_context.add_clause(vec![p, q, r, s]).is_ok());
        assert!(the_context.add_clause(vec![-p, q, s]).is_ok());
        assert!(the_context.add_clause(vec![-q, r]).is_ok());
        assert!(the_context.add_clause(vec![r, s, -p]).is_ok());
        assert!(the_context.add_clause(vec![p, -s, q]).is_ok());
        assert!(the_context.add_clause(vec![-r]).is_ok());
        assert_eq!(the_context.value_of_literal(q), Some(false));

        let snapshot = |context: &Context| {
            (
                context.clause_db.original_count(),
                context.clause_db.addition_count(),
                context.clause_db.original_literal_count(),
                context.watches.binary_count(),
                context.trail().to_vec(),
            )
        };

        assert!(the_context.simplify().is_ok());
        let once = snapshot(&the_context);

        assert!(the_context.simplify().is_ok());
        let twice = snapshot(&the_context);

        assert_eq!(once, twice);
        assert_eq!(once.0, 0);
        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn counters_after_solve() {
        let mut the_context = Context::from_config(Config::default());
        let [p, q, r] = *the_context.fresh_or_max_literals(3).as_slice() else {
            panic!("! Literals")
        };

        assert!(the_context.add_clause(vec![p, q, r]).is_ok());
        assert!(the_context.add_clause(vec![-p, q]).is_ok());

        assert_eq!(the_context.solve(), Ok(Report::Satisfiable));
        assert!(the_context.counters.decisions > 0);
        assert_eq!(the_context.decision_level(), 0);
    }
}
