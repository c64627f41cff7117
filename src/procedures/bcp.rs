/*!
A context method for boolean constraint propagation.

See [GenericContext::bcp] for the relevant context method.

# Overview
Each literal on the trail from the propagation head onward is propagated, by examining the clauses watching the negation of the literal (which has just become false).

Propagation happens in two steps, distinguished by clause length:
- First, with respect to binary clauses.
  The other literal of the clause is assigned, if unvalued, and a conflict is found if the other literal is false.
- Second, with respect to long clauses.
  The false literal is moved to index 1 of the clause.
  If the literal at index 0 is true, the watch is kept.
  Otherwise, a replacement watch is searched for from index 2 onward, and if none exists the literal at index 0 is assigned or the clause is a conflict.

# Complications
The long watch list of the false literal is taken from the watch database while examined and is compacted in place.
As the literal is false, no clause moves a watch to the literal and so the taken list is complete when restored.

On a conflict any watches not yet examined are kept, and the propagation head is moved to the end of the trail.

# Example

```rust,ignore
match self.bcp() {
    Err(err::BCPError::Conflict(conflict)) => {
        let analysis = self.conflict_analysis(conflict)?;
        ...
    }
    Ok(()) => {
        match self.make_decision() {
            ...
        }
    }
}
```
*/

use crate::{
    context::GenericContext,
    db::watches::LongWatch,
    misc::log::targets::{self},
    structures::{
        consequence::{Conflict, Reason},
        literal::{CLiteral, Literal},
    },
    types::err::{self},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// For documentation see [procedures::bcp](crate::procedures::bcp).
    pub fn bcp(&mut self) -> Result<(), err::BCPError> {
        while let Some(literal) = self.trail.literals.get(self.trail.q_head).copied() {
            self.trail.q_head += 1;
            self.simp_props -= 1;

            let false_literal = literal.negate();

            if let Err(e) = self.propagate_binary(false_literal) {
                self.trail.q_head = self.trail.len();
                return Err(e);
            }

            if let Err(e) = self.propagate_long(false_literal) {
                self.trail.q_head = self.trail.len();
                return Err(e);
            }
        }

        Ok(())
    }

    fn propagate_binary(&mut self, false_literal: CLiteral) -> Result<(), err::BCPError> {
        let mut index = 0;
        while let Some(watch) = self.watches.binary(false_literal).get(index).copied() {
            index += 1;

            match self.atom_db.value_of_literal(watch.partner) {
                Some(true) => {}

                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Binary conflict: {false_literal} {}", watch.partner);
                    return Err(err::BCPError::Conflict(Conflict::Binary(
                        false_literal,
                        watch.partner,
                    )));
                }

                None => {
                    self.counters.propagations += 1;
                    self.assign(watch.partner, Some(Reason::Binary(false_literal)));
                }
            }
        }
        Ok(())
    }

    fn propagate_long(&mut self, false_literal: CLiteral) -> Result<(), err::BCPError> {
        let mut list = self.watches.take_long(false_literal);

        let mut keep = 0;
        let mut index = 0;
        let mut result = Ok(());

        while index < list.len() {
            let watch = list[index];
            index += 1;

            let clause = match self.clause_db.get_mut(&watch.key) {
                Ok(clause) => clause,
                Err(_) => {
                    log::error!(target: targets::PROPAGATION, "Watch on missing clause {}", watch.key);
                    result = Err(err::BCPError::CorruptWatch);
                    Self::keep_remaining(&mut list, &mut keep, &mut index);
                    break;
                }
            };

            if clause[0] == false_literal {
                clause.swap(0, 1);
            }
            let first = clause[0];

            if self.atom_db.value_of_literal(first) == Some(true) {
                list[keep] = watch;
                keep += 1;
                continue;
            }

            if let Some(replacement) = clause.replace_second_watch(&self.atom_db) {
                self.watches.watch_long(replacement, watch.key);
                continue;
            }

            list[keep] = watch;
            keep += 1;

            match self.atom_db.value_of_literal(first) {
                Some(false) => {
                    log::trace!(target: targets::PROPAGATION, "Long conflict: {}", watch.key);
                    result = Err(err::BCPError::Conflict(Conflict::Long(watch.key)));
                    Self::keep_remaining(&mut list, &mut keep, &mut index);
                    break;
                }

                _ => {
                    self.counters.propagations += 1;
                    self.assign(first, Some(Reason::Long(watch.key)));
                }
            }
        }

        list.truncate(keep);
        self.watches.restore_long(false_literal, list);

        result
    }

    fn keep_remaining(list: &mut [LongWatch], keep: &mut usize, index: &mut usize) {
        while *index < list.len() {
            list[*keep] = list[*index];
            *keep += 1;
            *index += 1;
        }
    }
}
