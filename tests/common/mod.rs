#![allow(dead_code)]

use minnow_sat::{
    config::Config,
    context::Context,
    generic::random::MinimalPCG32,
    structures::literal::{CLiteral, Literal},
};
use rand::{Rng, SeedableRng};

/// A random formula over `atoms` atoms of `clauses` clauses, each with between two and `width` literals.
pub fn random_formula(seed: u64, atoms: u32, clauses: usize, width: usize) -> Vec<Vec<CLiteral>> {
    let mut rng = MinimalPCG32::seed_from_u64(seed);
    (0..clauses)
        .map(|_| {
            let length = rng.random_range(2..=width);
            (0..length)
                .map(|_| CLiteral::new(rng.random_range(0..atoms), rng.random_bool(0.5)))
                .collect()
        })
        .collect()
}

/// A context with `atoms` atoms and each clause of `formula` added.
pub fn context_with(atoms: u32, formula: &[Vec<CLiteral>]) -> Context {
    context_with_config(Config::default(), atoms, formula)
}

/// As [context_with], from the given configuration.
pub fn context_with_config(config: Config, atoms: u32, formula: &[Vec<CLiteral>]) -> Context {
    let mut ctx = Context::from_config(config);
    for _ in 0..atoms {
        ctx.fresh_or_max_atom();
    }
    for clause in formula {
        assert!(ctx.add_clause(clause.clone()).is_ok());
    }
    ctx
}

/// The valuation of `atoms` atoms given by the bits of `bits`.
pub fn valuation_from_bits(atoms: u32, bits: u64) -> Vec<bool> {
    (0..atoms).map(|atom| (bits >> atom) & 1 == 1).collect()
}

/// Whether `valuation` satisfies `clause`.
pub fn satisfies_clause(valuation: &[bool], clause: &[CLiteral]) -> bool {
    clause
        .iter()
        .any(|literal| valuation[literal.atom() as usize] == literal.polarity())
}

/// Whether `valuation` satisfies every clause of `formula`.
pub fn satisfies(valuation: &[bool], formula: &[Vec<CLiteral>]) -> bool {
    formula
        .iter()
        .all(|clause| satisfies_clause(valuation, clause))
}

/// A count of the valuations of `atoms` atoms which satisfy `formula`.
pub fn brute_force_count(atoms: u32, formula: &[Vec<CLiteral>]) -> u128 {
    (0..(1_u64 << atoms))
        .filter(|bits| satisfies(&valuation_from_bits(atoms, *bits), formula))
        .count() as u128
}

/// Whether every valuation of `atoms` atoms which satisfies `formula` also satisfies `clause`.
pub fn entails(atoms: u32, formula: &[Vec<CLiteral>], clause: &[CLiteral]) -> bool {
    (0..(1_u64 << atoms)).all(|bits| {
        let valuation = valuation_from_bits(atoms, bits);
        !satisfies(&valuation, formula) || satisfies_clause(&valuation, clause)
    })
}
