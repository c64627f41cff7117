/*!
Tracking of clauses satisfied on the current valuation.

A top-down compiler may note a clause *subsumed* when some literal of the clause is true, as the clause then places no constraint on the remaining search.

A [SubsumptionTracker] keeps, for each registered clause, a count of the literals of the clause which are true on the current valuation.
The tracker is updated through the enqueue and unassign callbacks of a context, and so is shared with the context through an `Rc<RefCell<_>>`.

# Example
```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
# use minnow_sat::incremental::subsumption::SubsumptionTracker;
let mut the_context = Context::from_config(Config::default());
let p = the_context.fresh_or_max_literal();
let q = the_context.fresh_or_max_literal();
let r = the_context.fresh_or_max_literal();

let tracker = SubsumptionTracker::attach(&mut the_context);

let clauses = vec![vec![p, q, r], vec![-p, q, -r]];
for clause in clauses {
    tracker.borrow_mut().register(&clause, the_context.atom_db.valuation());
    assert!(the_context.add_clause(clause).is_ok());
}

assert_eq!(the_context.decide(p), Ok(true));
assert!(tracker.borrow().is_subsumed(0));
assert!(!tracker.borrow().is_subsumed(1));

the_context.undo_decide(p);
assert_eq!(tracker.borrow().subsumed_count(), 0);
```
*/

use std::{cell::RefCell, rc::Rc};

use crate::{
    context::GenericContext,
    misc::log::targets::{self},
    structures::literal::{CLiteral, Literal},
};

/// Counts of true literals in registered clauses.
#[derive(Default)]
pub struct SubsumptionTracker {
    /// The indicies of the registered clauses containing a literal, indexed by the code of the literal.
    occurrences: Vec<Vec<usize>>,

    /// A count of the true literals of each registered clause.
    true_counts: Vec<usize>,

    /// A count of registered clauses with some true literal.
    subsumed: usize,
}

impl SubsumptionTracker {
    /// A fresh tracker, attached to the enqueue and unassign callbacks of the context.
    ///
    /// Any callbacks previously set on the context are replaced.
    pub fn attach<R: rand::Rng + std::default::Default>(
        context: &mut GenericContext<R>,
    ) -> Rc<RefCell<Self>> {
        let tracker = Rc::new(RefCell::new(Self::default()));

        let on_enqueue = tracker.clone();
        context.set_callback_enqueue(Box::new(move |literal: &CLiteral| {
            on_enqueue.borrow_mut().assigned(*literal)
        }));

        let on_unassign = tracker.clone();
        context.set_callback_unassign(Box::new(move |literal: &CLiteral| {
            on_unassign.borrow_mut().unassigned(*literal)
        }));

        tracker
    }

    /// Registers a clause, with a count of true literals taken from `valuation`, and returns the index of the clause.
    pub fn register(&mut self, clause: &[CLiteral], valuation: &[Option<bool>]) -> usize {
        let index = self.true_counts.len();
        let mut true_count = 0;

        for literal in clause {
            let code = literal.code();
            if self.occurrences.len() <= code {
                self.occurrences.resize_with(code + 1, Vec::default);
            }
            self.occurrences[code].push(index);

            if valuation.get(literal.atom() as usize) == Some(&Some(literal.polarity())) {
                true_count += 1;
            }
        }

        if true_count > 0 {
            self.subsumed += 1;
        }
        self.true_counts.push(true_count);

        log::trace!(target: targets::SUBSUMPTION, "Registered clause {index} with {true_count} true literals");
        index
    }

    /// Notes `literal` is true.
    pub fn assigned(&mut self, literal: CLiteral) {
        if let Some(clauses) = self.occurrences.get(literal.code()) {
            for index in clauses {
                self.true_counts[*index] += 1;
                if self.true_counts[*index] == 1 {
                    self.subsumed += 1;
                }
            }
        }
    }

    /// Notes `literal` is no longer true.
    pub fn unassigned(&mut self, literal: CLiteral) {
        if let Some(clauses) = self.occurrences.get(literal.code()) {
            for index in clauses {
                self.true_counts[*index] -= 1;
                if self.true_counts[*index] == 0 {
                    self.subsumed -= 1;
                }
            }
        }
    }

    /// Whether the clause registered with `index` has some true literal.
    pub fn is_subsumed(&self, index: usize) -> bool {
        self.true_counts.get(index).is_some_and(|count| *count > 0)
    }

    /// A count of registered clauses with some true literal.
    pub fn subsumed_count(&self) -> usize {
        self.subsumed
    }

    /// The indicies of registered clauses with some true literal.
    pub fn subsumed_clauses(&self) -> Vec<usize> {
        self.true_counts
            .iter()
            .enumerate()
            .filter(|(_, count)| **count > 0)
            .map(|(index, _)| index)
            .collect()
    }
}
