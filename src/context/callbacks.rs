/*!
Callbacks associated with a context.

Callbacks may be mutable functions.
Still, information passed from the context is non-mutable, and a callback should not attempt to use the context it is attached to.

A callback which needs to share state with the caller may capture an `Rc<RefCell<_>>`, as in [SubsumptionTracker](crate::incremental::subsumption::SubsumptionTracker).

# Example

```rust
# use minnow_sat::context::Context;
# use minnow_sat::config::Config;
# use minnow_sat::structures::literal::{CLiteral, Literal};
# use std::{cell::RefCell, rc::Rc};
let mut the_context = Context::from_config(Config::default());
let assigned = Rc::new(RefCell::new(Vec::default()));

let log = assigned.clone();
the_context.set_callback_enqueue(Box::new(move |literal: &CLiteral| {
    log.borrow_mut().push(*literal)
}));

let p = the_context.fresh_or_max_atom();
assert!(the_context.add_clause(CLiteral::new(p, false)).is_ok());
assert_eq!(assigned.borrow().as_slice(), &[CLiteral::new(p, false)]);
```
*/

use crate::structures::literal::CLiteral;

use super::GenericContext;

/// A callback on a literal, used on assignment and unassignment.
pub type CallbackOnLiteral = dyn FnMut(&CLiteral);

/// A callback on a clause, used for each learnt clause.
pub type CallbackOnClause = dyn FnMut(&[CLiteral]);

/// A callback to terminate a solve, checked at each restart.
pub type CallbackTerminate = dyn FnMut() -> bool;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Sets a callback made after every assignment of a literal.
    pub fn set_callback_enqueue(&mut self, callback: Box<CallbackOnLiteral>) {
        self.callback_enqueue = Some(callback);
    }

    /// Sets a callback made for every literal unassigned by a backjump.
    pub fn set_callback_unassign(&mut self, callback: Box<CallbackOnLiteral>) {
        self.callback_unassign = Some(callback);
    }

    /// Sets a callback made for every clause learnt through analysis.
    pub fn set_callback_learnt(&mut self, callback: Box<CallbackOnClause>) {
        self.callback_learnt = Some(callback);
    }

    /// Sets a callback which terminates a solve, if true.
    pub fn set_callback_terminate(&mut self, callback: Box<CallbackTerminate>) {
        self.callback_terminate = Some(callback);
    }

    /// Makes the terminate callback, if set, and false otherwise.
    pub fn check_callback_terminate(&mut self) -> bool {
        if let Some(callback) = &mut self.callback_terminate {
            callback()
        } else {
            false
        }
    }

    /// Makes the learnt callback on `clause`, if set.
    pub(crate) fn make_callback_learnt(&mut self, clause: &[CLiteral]) {
        if let Some(callback) = &mut self.callback_learnt {
            callback(clause);
        }
    }
}
