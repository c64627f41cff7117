use minnow_sat::{
    config::Config,
    context::{Context, ContextState},
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

fn negated(literals: &[CLiteral]) -> Vec<CLiteral> {
    literals.iter().map(|literal| literal.negate()).collect()
}

mod assumptions {
    use super::*;

    #[test]
    fn contradicts_unit() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(-p).is_ok());

        let assumptions = vec![q, p];
        assert_eq!(ctx.solve_given(assumptions.clone()), Ok(Report::Unsatisfiable));
        assert_eq!(ctx.state, ContextState::FailedAssumptions);

        let failed = ctx.failed_assumptions();
        assert!(!failed.is_empty());
        assert!(failed.iter().all(|literal| negated(&assumptions).contains(literal)));
        assert!(failed.contains(&-p));

        assert!(!ctx.is_unsatisfiable());
        assert_eq!(ctx.decision_level(), 0);
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn small_chain() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r, s, t] = *ctx.fresh_or_max_literals(5).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-q, r]).is_ok());
        assert!(ctx.add_clause(vec![-r, -s]).is_ok());

        let assumptions = vec![p, t, s];
        assert_eq!(ctx.solve_given(assumptions.clone()), Ok(Report::Unsatisfiable));

        let mut failed = ctx.failed_assumptions().to_vec();
        failed.sort();
        let mut expected = vec![-p, -s];
        expected.sort();
        assert_eq!(failed, expected);

        assert_eq!(ctx.solve_given(vec![p, t]), Ok(Report::Satisfiable));
        assert!(ctx.failed_assumptions().is_empty());
    }

    #[test]
    fn conflict_after_propagation() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r, s] = *ctx.fresh_or_max_literals(4).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![-p, -q, r]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q, -r]).is_ok());
        assert!(ctx.add_clause(vec![p, q, s]).is_ok());

        let assumptions = vec![s, p, q];
        assert_eq!(ctx.solve_given(assumptions.clone()), Ok(Report::Unsatisfiable));

        let failed = ctx.failed_assumptions();
        assert!(failed.iter().all(|literal| negated(&assumptions).contains(literal)));
        assert!(failed.contains(&-p));
        assert!(failed.contains(&-q));
        assert!(!failed.contains(&-s));

        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));
    }

    #[test]
    fn satisfiable_under_assumptions() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q, r] = *ctx.fresh_or_max_literals(3).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![p, q, r]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.solve_given(vec![-r, -q]), Ok(Report::Satisfiable));

        let model = ctx.model().expect("model");
        assert!(model[p.atom() as usize]);
        assert!(!model[q.atom() as usize]);
        assert!(!model[r.atom() as usize]);
    }

    #[test]
    fn assumption_already_true() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(p).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());

        assert_eq!(ctx.solve_given(vec![p, q]), Ok(Report::Satisfiable));
    }

    #[test]
    fn unknown_assumption() {
        let mut ctx = Context::from_config(Config::default());
        let p = ctx.fresh_or_max_literal();
        let stranger = CLiteral::new(p.atom() + 3, false);

        assert!(ctx.solve_given(vec![p, stranger]).is_err());
    }

    #[test]
    fn unsatisfiable_without_assumptions() {
        let mut ctx = Context::from_config(Config::default());
        let [p, q] = *ctx.fresh_or_max_literals(2).as_slice() else {
            panic!("! Literals")
        };

        assert!(ctx.add_clause(vec![p, q]).is_ok());
        assert!(ctx.add_clause(vec![p, -q]).is_ok());
        assert!(ctx.add_clause(vec![-p, q]).is_ok());
        assert!(ctx.add_clause(vec![-p, -q]).is_ok());

        assert_eq!(ctx.solve_given(vec![p]), Ok(Report::Unsatisfiable));
        assert!(ctx.failed_assumptions().iter().all(|literal| *literal == -p));

        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
        assert!(ctx.is_unsatisfiable());
        assert_eq!(ctx.solve_given(vec![-p]), Ok(Report::Unsatisfiable));
        assert!(ctx.failed_assumptions().is_empty());
    }
}
