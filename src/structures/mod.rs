//! Key structures, such as literals and clauses.
//!
//! Most structures are made of a trait to capture the key features of the structure and a 'canonical' implementation of the trait.
//!
//! ## Formulas
//!
//! A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses.
//! The clauses stored in a [context](crate::context) are always entailed by the clauses given to the context, though the two may differ due to simplification or learning.
//!
//! ## Valuations
//!
//! The value of an atom is an `Option<bool>`, with `None` standing for an atom without a value.
//! A complete valuation, obtained after a satisfiable solve, is a `Vec<bool>` indexed by atoms.

pub mod atom;
pub mod clause;
pub mod consequence;
pub mod literal;
