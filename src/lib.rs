//! A library for determining the satisfiability of boolean formulas written in conjunctive normal form, with an incremental interface of decisions for top-down knowledge compilation.
//!
//! minnow_sat is a conflict-driven clause-learning solver in the style of MiniSAT, together with a thin layer which exposes the decision level of the solver to an external search.
//! The layer supports deciding a literal, inspecting the literals the decision implies, undoing decisions, and asserting the clauses learnt from conflicts.
//! Such a layer is the core of a top-down compiler from conjunctive normal form to decomposable negation normal form.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context].
//!
//! Contexts are built with a configuration.
//! Clauses may be added though the [DIMACS](crate::context::GenericContext::read_dimacs) representation of a formula or [programatically](crate::context::GenericContext::add_clause).
//!
//! Internally, and at a high-level, a solve is viewed in terms of manipulation of, and relationships between, a handful of [databases](crate::db):
//! - Long clauses are stored in a clause database, and binary clauses in watch lists.
//! - A valuation is stored in an atom database.
//! - The order of assignments is stored on a trail.
//!
//! Useful starting points, then, may be:
//! - The high-level [solve procedure](crate::procedures::solve) to inspect the dynamics of a solve.
//! - The [incremental](crate::incremental) interface, and the [reference drivers](crate::incremental::drivers) of the interface.
//! - The [database module](crate::db) to inspect the data considered during a solve.
//! - The [structures] to familiarise yourself with the abstract elements of a solve and their representation (literals, clauses, etc.)
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Find (a count of) all valuations of some collection of atoms.
//!
//! ```rust
//! # use minnow_sat::config::Config;
//! # use minnow_sat::context::Context;
//! # use minnow_sat::reports::Report;
//! # use minnow_sat::structures::atom::Atom;
//! use minnow_sat::structures::literal::{CLiteral, Literal};
//!
//! let mut the_context: Context = Context::from_config(Config::default());
//! let characters = "model".chars().collect::<Vec<_>>();
//! for _ in &characters {
//!     assert!(the_context.fresh_atom().is_ok())
//! }
//!
//! let mut count = 0;
//!
//! loop {
//!     match the_context.solve() {
//!         Ok(Report::Satisfiable) => {}
//!         _ => break,
//!     };
//!
//!     count += 1;
//!
//!     let clause = the_context
//!         .model()
//!         .unwrap()
//!         .iter()
//!         .enumerate()
//!         .map(|(atom, value)| CLiteral::new(atom as Atom, !value))
//!         .collect::<Vec<_>>();
//!
//!     assert!(the_context.add_clause(clause).is_ok());
//! }
//!
//! assert_eq!(count, 2_usize.pow(characters.len().try_into().unwrap()));
//! ```
//!
//! + Parse and solve a DIMACS formula.
//!
//! ```rust
//! # use minnow_sat::context::Context;
//! # use minnow_sat::config::Config;
//! # use minnow_sat::reports::Report;
//! # use std::io::Write;
//! let mut the_context = Context::from_config(Config::default());
//!
//! let mut dimacs = vec![];
//! let _ = dimacs.write(b"
//!  1  2 0
//! -1  2 0
//! -1 -2 0
//!  1 -2 0
//! ");
//!
//! assert!(the_context.read_dimacs(dimacs.as_slice()).is_ok());
//! assert!(the_context.solve().is_ok());
//! assert_eq!(the_context.report(), Report::Unsatisfiable);
//! ```
//!
//! + Count the models of a formula through the incremental interface.
//!
//! ```rust
//! # use minnow_sat::context::Context;
//! # use minnow_sat::config::Config;
//! # use minnow_sat::incremental::drivers::count_models;
//! let mut the_context = Context::from_config(Config::default());
//! let p = the_context.fresh_or_max_literal();
//! let q = the_context.fresh_or_max_literal();
//! let r = the_context.fresh_or_max_literal();
//!
//! assert!(the_context.add_clause(vec![-p, q]).is_ok());
//! assert!(the_context.add_clause(vec![-q, r]).is_ok());
//!
//! assert_eq!(count_models(&mut the_context), Ok(4));
//! ```
//!
//! # Logs
//!
//! To help diagnose issues (somewhat) detailed calls to [log!](log) are made, and a variety of targets are defined in order to help narrow output to relevant parts of the library.
//!
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to [the clause database](crate::db::clause) can be filtered with `RUST_LOG=clause_db …` or,
//! - Logs of reduction counts can be found with `RUST_LOG=reduction=debug …`

#![allow(clippy::single_match)]
#![allow(clippy::collapsible_else_if)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod generic;

pub mod db;

pub mod incremental;

pub mod misc;

pub mod reports;
