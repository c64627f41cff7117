mod common;

use std::{cell::RefCell, rc::Rc};

use minnow_sat::{
    config::{Config, Minimization},
    incremental::drivers::{count_models, recursive_solve},
    reports::Report,
    structures::literal::CLiteral,
};

mod properties {
    use super::*;

    #[test]
    fn soundness() {
        let _ = env_logger::builder().is_test(true).try_init();

        for seed in 0..48 {
            let atoms = 10;
            let formula = common::random_formula(seed, atoms, 42, 3);
            let mut ctx = common::context_with(atoms, &formula);

            let expected = match common::brute_force_count(atoms, &formula) {
                0 => Report::Unsatisfiable,
                _ => Report::Satisfiable,
            };
            assert_eq!(ctx.solve(), Ok(expected), "seed {seed}");

            if expected == Report::Satisfiable {
                let model = ctx.model().expect("model");
                assert!(common::satisfies(model, &formula), "seed {seed}");
            }
        }
    }

    #[test]
    fn learnt_clauses_are_entailed() {
        for seed in 0..32 {
            let atoms = 12;
            let formula = common::random_formula(seed, atoms, 56, 3);
            let mut ctx = common::context_with(atoms, &formula);

            let learnt = Rc::new(RefCell::new(Vec::<Vec<CLiteral>>::default()));
            let record = learnt.clone();
            ctx.set_callback_learnt(Box::new(move |clause: &[CLiteral]| {
                record.borrow_mut().push(clause.to_vec())
            }));

            assert!(ctx.solve().is_ok());

            for clause in learnt.borrow().iter() {
                assert!(
                    common::entails(atoms, &formula, clause),
                    "seed {seed}: {clause:?}"
                );
            }
        }
    }

    #[test]
    fn minimization_variants_agree() {
        for seed in 0..24 {
            let atoms = 30;
            let formula = common::random_formula(100 + seed, atoms, 128, 3);

            let mut reports = Vec::default();
            for minimization in [Minimization::None, Minimization::Cheap, Minimization::Recursive] {
                let mut config = Config::default();
                config.minimization.value = minimization;
                config.restart_first.value = 4;

                let mut ctx = common::context_with_config(config, atoms, &formula);
                let report = ctx.solve().expect("solve");
                if report == Report::Satisfiable {
                    let model = ctx.model().expect("model");
                    assert!(common::satisfies(model, &formula), "seed {seed}");
                }
                reports.push(report);
            }

            assert!(reports.windows(2).all(|pair| pair[0] == pair[1]), "seed {seed}");
        }
    }

    #[test]
    fn random_decisions() {
        for seed in 0..16 {
            let atoms = 10;
            let formula = common::random_formula(seed, atoms, 40, 3);
            let expected = common::brute_force_count(atoms, &formula) > 0;

            let mut config = Config::default();
            config.random_decision_bias.value = 0.5;
            config.polarity_lean.value = 0.5;
            config.phase_saving.value = false;

            let mut ctx = common::context_with_config(config, atoms, &formula);
            let report = ctx.solve().expect("solve");
            assert_eq!(report == Report::Satisfiable, expected, "seed {seed}");
        }
    }

    #[test]
    fn model_counts() {
        for seed in 0..32 {
            let atoms = 8;
            let formula = common::random_formula(seed, atoms, 14, 3);
            let mut ctx = common::context_with(atoms, &formula);

            assert_eq!(
                count_models(&mut ctx),
                Ok(common::brute_force_count(atoms, &formula)),
                "seed {seed}"
            );
            assert_eq!(ctx.decision_level(), 0);
        }
    }

    #[test]
    fn recursive_solve_agrees() {
        for seed in 0..48 {
            let atoms = 10;
            let formula = common::random_formula(seed, atoms, 42, 3);

            let mut ctx = common::context_with(atoms, &formula);
            let learnt = Rc::new(RefCell::new(Vec::<Vec<CLiteral>>::default()));
            let record = learnt.clone();
            ctx.set_callback_learnt(Box::new(move |clause: &[CLiteral]| {
                record.borrow_mut().push(clause.to_vec())
            }));

            let satisfiable = recursive_solve(&mut ctx).expect("recursive solve");
            assert_eq!(
                satisfiable,
                common::brute_force_count(atoms, &formula) > 0,
                "seed {seed}"
            );

            if satisfiable {
                let valuation = (0..atoms)
                    .map(|atom| ctx.value_of(atom).expect("complete valuation"))
                    .collect::<Vec<_>>();
                assert!(common::satisfies(&valuation, &formula), "seed {seed}");
            }

            for clause in learnt.borrow().iter() {
                assert!(common::entails(atoms, &formula, clause), "seed {seed}");
            }

            let mut fresh = common::context_with(atoms, &formula);
            let report = fresh.solve().expect("solve");
            assert_eq!(report == Report::Satisfiable, satisfiable, "seed {seed}");
        }
    }
}
