use std::{cell::Cell, rc::Rc};

use minnow_sat::{
    config::Config,
    context::Context,
    incremental::drivers::count_models,
    reports::Report,
    structures::literal::{CLiteral, Literal},
};

/// The pigeonhole formula of `pigeons` pigeons in `holes` holes, in DIMACS form.
fn pigeonhole(pigeons: usize, holes: usize) -> String {
    let atom = |pigeon: usize, hole: usize| (pigeon * holes + hole + 1) as isize;
    let mut clauses = Vec::default();

    for pigeon in 0..pigeons {
        let some_hole = (0..holes).map(|hole| atom(pigeon, hole).to_string());
        clauses.push(some_hole.collect::<Vec<_>>().join(" "));
    }

    for hole in 0..holes {
        for a in 0..pigeons {
            for b in (a + 1)..pigeons {
                clauses.push(format!("-{} -{}", atom(a, hole), atom(b, hole)));
            }
        }
    }

    let mut dimacs = format!("c pigeonhole {pigeons} {holes}\np cnf {} {}\n", pigeons * holes, clauses.len());
    for clause in clauses {
        dimacs.push_str(&clause);
        dimacs.push_str(" 0\n");
    }
    dimacs
}

mod dimacs {
    use super::*;

    #[test]
    fn pigeonhole_unsatisfiable() {
        for holes in 1..6 {
            let mut ctx = Context::from_config(Config::default());
            let info = ctx.read_dimacs(pigeonhole(holes + 1, holes).as_bytes()).expect("read");

            assert_eq!(info.expected_atoms, Some((holes + 1) * holes));
            assert_eq!(Some(info.clauses), info.expected_clauses);
            assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable), "holes {holes}");
        }
    }

    #[test]
    fn pigeonhole_satisfiable() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.read_dimacs(pigeonhole(4, 4).as_bytes()).is_ok());
        assert_eq!(ctx.solve(), Ok(Report::Satisfiable));

        let model = ctx.model().expect("model").to_vec();
        for pigeon in 0..4 {
            assert_eq!((0..4).filter(|hole| model[pigeon * 4 + hole]).count(), 1);
        }
    }

    #[test]
    fn pigeonhole_permutations() {
        let mut ctx = Context::from_config(Config::default());
        assert!(ctx.read_dimacs(pigeonhole(3, 3).as_bytes()).is_ok());

        // Each pigeon takes exactly one of the three holes.
        assert_eq!(count_models(&mut ctx), Ok(6));
    }

    #[test]
    fn conflict_limit() {
        let mut config = Config::default();
        config.conflict_limit.value = 3;

        let mut ctx = Context::from_config(config);
        assert!(ctx.read_dimacs(pigeonhole(7, 6).as_bytes()).is_ok());

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert!(ctx.counters.conflicts >= 3);
        assert_eq!(ctx.decision_level(), 0);

        ctx.config.conflict_limit.value = 0;
        assert_eq!(ctx.solve(), Ok(Report::Unsatisfiable));
    }

    #[test]
    fn terminate_on_restart() {
        let mut config = Config::default();
        config.restart_first.value = 1;

        let mut ctx = Context::from_config(config);
        assert!(ctx.read_dimacs(pigeonhole(7, 6).as_bytes()).is_ok());

        let calls = Rc::new(Cell::new(0));
        let count = calls.clone();
        ctx.set_callback_terminate(Box::new(move || {
            count.set(count.get() + 1);
            true
        }));

        assert_eq!(ctx.solve(), Ok(Report::Unknown));
        assert_eq!(calls.get(), 1);
        assert_eq!(ctx.counters.restarts, 1);
        assert!(!ctx.is_unsatisfiable());
    }

    #[test]
    fn external_names() {
        let mut ctx = Context::from_config(Config::default());
        let info = ctx
            .read_dimacs(b"p cnf 5 2\n-3 0\n 2 -5 0\n".as_slice())
            .expect("read");

        assert_eq!(info.atoms, 5);
        assert_eq!(ctx.value_of_literal(CLiteral::new(2, false)), Some(true));
        assert_eq!(ctx.value_of(4), None);

        let literal = CLiteral::from(-3);
        assert_eq!(literal.atom(), 2);
        assert_eq!(literal.code(), 5);
    }
}
