mod common;

use minnow_sat::{
    incremental::subsumption::SubsumptionTracker,
    structures::literal::{CLiteral, Literal},
};

fn directly_subsumed(valuation: &[Option<bool>], clause: &[CLiteral]) -> bool {
    clause
        .iter()
        .any(|literal| valuation[literal.atom() as usize] == Some(literal.polarity()))
}

mod subsumption {
    use super::*;

    #[test]
    fn agrees_with_valuation() {
        for seed in 0..16 {
            let atoms = 9;
            let formula = common::random_formula(seed, atoms, 24, 3);
            let mut ctx = common::context_with(atoms, &[]);

            let tracker = SubsumptionTracker::attach(&mut ctx);
            for clause in &formula {
                tracker.borrow_mut().register(clause, ctx.atom_db.valuation());
                assert!(ctx.add_clause(clause.clone()).is_ok());
            }
            if ctx.is_unsatisfiable() {
                continue;
            }

            let check = |ctx: &minnow_sat::context::Context| {
                let valuation = ctx.atom_db.valuation();
                let expected = formula
                    .iter()
                    .enumerate()
                    .filter(|(_, clause)| directly_subsumed(valuation, clause))
                    .map(|(index, _)| index)
                    .collect::<Vec<_>>();
                assert_eq!(tracker.borrow().subsumed_clauses(), expected, "seed {seed}");
                assert_eq!(tracker.borrow().subsumed_count(), expected.len(), "seed {seed}");
            };

            check(&ctx);

            let mut decisions = Vec::default();
            while let Some(atom) = ctx.first_unassigned_atom() {
                let literal = CLiteral::new(atom, seed % 3 != 0);
                decisions.push(literal);
                let ok = ctx.decide(literal).expect("decide");
                check(&ctx);
                if !ok {
                    break;
                }
            }

            while let Some(literal) = decisions.pop() {
                ctx.undo_decide(literal);
                check(&ctx);
            }
        }
    }
}
