/*!
Reference drivers of the [incremental](crate::incremental) interface.

- [recursive_solve] determines satisfiability by a recursive search over decisions, asserting learnt clauses as the search unwinds.
- [count_models] counts the complete valuations which satisfy the formula, by exhaustive branching.

Both drivers use only public methods of a context, and are useful as oracles when testing the interface.
*/

use crate::{
    context::GenericContext,
    structures::literal::{CLiteral, Literal},
    types::err::ErrorKind,
};

/// Whether the formula of the context is satisfiable, by a recursive search over decisions.
///
/// The first atom without a value is decided true, and the search continues below the decision.
/// If the search below fails the decision is undone, and if the failure led to a clause which asserts at the level, the clause is asserted and the search continues.
///
/// On Ok(true) the context holds a satisfying valuation.
///
/// ```rust
/// # use minnow_sat::context::Context;
/// # use minnow_sat::config::Config;
/// # use minnow_sat::incremental::drivers::recursive_solve;
/// let mut the_context = Context::from_config(Config::default());
/// let p = the_context.fresh_or_max_literal();
/// let q = the_context.fresh_or_max_literal();
///
/// assert!(the_context.add_clause(vec![-p, q]).is_ok());
/// assert!(the_context.add_clause(vec![-p, -q]).is_ok());
///
/// assert_eq!(recursive_solve(&mut the_context), Ok(true));
/// assert_eq!(the_context.value_of_literal(p), Some(false));
/// ```
pub fn recursive_solve<R: rand::Rng + std::default::Default>(
    context: &mut GenericContext<R>,
) -> Result<bool, ErrorKind> {
    if context.is_unsatisfiable() {
        return Ok(false);
    }

    let Some(atom) = context.first_unassigned_atom() else {
        return Ok(true);
    };

    let literal = CLiteral::new(atom, true);
    if context.decide(literal)? && recursive_solve(context)? {
        return Ok(true);
    }

    context.undo_decide(literal);

    match context.assertion() {
        Some(assertion) => Ok(assertion.assert_cd_literal()? && recursive_solve(context)?),
        None => Ok(false),
    }
}

/// A count of the complete valuations which satisfy the formula of the context, given the current valuation.
///
/// The context is returned to the current level on Ok.
///
/// ```rust
/// # use minnow_sat::context::Context;
/// # use minnow_sat::config::Config;
/// # use minnow_sat::incremental::drivers::count_models;
/// let mut the_context = Context::from_config(Config::default());
/// let p = the_context.fresh_or_max_literal();
/// let q = the_context.fresh_or_max_literal();
/// let _r = the_context.fresh_or_max_literal();
///
/// assert!(the_context.add_clause(vec![p, q]).is_ok());
///
/// assert_eq!(count_models(&mut the_context), Ok(6));
/// ```
pub fn count_models<R: rand::Rng + std::default::Default>(
    context: &mut GenericContext<R>,
) -> Result<u128, ErrorKind> {
    if context.is_unsatisfiable() {
        return Ok(0);
    }

    let Some(atom) = context.first_unassigned_atom() else {
        return Ok(1);
    };

    let mut count = 0;
    for polarity in [true, false] {
        let literal = CLiteral::new(atom, polarity);
        if context.decide(literal)? {
            count += count_models(context)?;
        }
        context.undo_decide(literal);
    }

    Ok(count)
}
