/*!
Watch lists, indexed by literal.

The watch lists of a literal are the clauses which must be examined when the literal becomes false.
In other words, the clauses in which the literal is a watched literal.

- Every binary clause *a ∨ b* is stored as a [BinaryWatch] in the list of *a* with partner *b*, and in the list of *b* with partner *a*.
  As both literals of a binary clause are always watched, the binary lists are not mutated during [BCP](crate::procedures::bcp).
- Every long clause is stored as a [LongWatch] in the lists of the literals at index 0 and 1 of the clause.
  Long lists are compacted in place during [BCP](crate::procedures::bcp), as watches move from literal to literal.

Lists are accessed by the [code](crate::structures::literal::PackedLiteral::code) of a literal.
*/

use crate::{
    db::ClauseKey,
    misc::log::targets::{self},
    structures::literal::CLiteral,
};

/// A watch on a binary clause, noting the other literal of the clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BinaryWatch {
    /// The other literal of the clause.
    pub partner: CLiteral,
}

/// A watch on a long clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LongWatch {
    /// The key of the watched clause.
    pub key: ClauseKey,
}

/// Binary and long watch lists for each literal.
#[derive(Default)]
pub struct Watches {
    binary: Vec<Vec<BinaryWatch>>,
    long: Vec<Vec<LongWatch>>,
}

impl Watches {
    /// Extends the watch lists to cover both literals of a fresh atom.
    pub fn fresh_atom(&mut self) {
        for _ in 0..2 {
            self.binary.push(Vec::default());
            self.long.push(Vec::default());
        }
    }

    /// Watches the binary clause `a ∨ b`.
    pub fn watch_binary(&mut self, a: CLiteral, b: CLiteral) {
        self.binary[a.code()].push(BinaryWatch { partner: b });
        self.binary[b.code()].push(BinaryWatch { partner: a });
    }

    fn remove_first(list: &mut Vec<BinaryWatch>, watch: BinaryWatch) -> bool {
        match list.iter().position(|w| *w == watch) {
            Some(index) => {
                list.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Adds the long clause with `key` to the watch list of `literal`.
    pub fn watch_long(&mut self, literal: CLiteral, key: ClauseKey) {
        self.long[literal.code()].push(LongWatch { key });
    }

    /// Removes the long clause with `key` from the watch list of `literal`.
    /*
    If there's a guarantee keys appear at most once, the swap remove on keys could break early.
    Note also, as this shuffles the list any heuristics on traversal order of watches is void.
     */
    pub fn unwatch_long(&mut self, literal: CLiteral, key: &ClauseKey) {
        let list = &mut self.long[literal.code()];

        let mut index = 0;
        let mut limit = list.len();

        while index < limit {
            if &list[index].key == key {
                list.swap_remove(index);
                limit -= 1;
            } else {
                index += 1;
            }
        }
    }

    /// The binary clauses watching `literal`.
    pub fn binary(&self, literal: CLiteral) -> &[BinaryWatch] {
        &self.binary[literal.code()]
    }

    /// Takes the binary watch list of `literal`, leaving an empty list.
    pub fn take_binary(&mut self, literal: CLiteral) -> Vec<BinaryWatch> {
        std::mem::take(&mut self.binary[literal.code()])
    }

    /// The long clauses watching `literal`.
    pub fn long(&self, literal: CLiteral) -> &[LongWatch] {
        &self.long[literal.code()]
    }

    /// Takes the long watch list of `literal`, leaving an empty list, to be used in conjunction with [restore_long](Watches::restore_long).
    ///
    /// As the literal is false whenever the list is taken, the literal is never a candidate for a new watch and the (empty) list is not extended while taken.
    pub fn take_long(&mut self, literal: CLiteral) -> Vec<LongWatch> {
        std::mem::take(&mut self.long[literal.code()])
    }

    /// Sets the long watch list of `literal` to `list`.
    pub fn restore_long(&mut self, literal: CLiteral, list: Vec<LongWatch>) {
        let slot = &mut self.long[literal.code()];
        if !slot.is_empty() {
            log::error!(target: targets::PROPAGATION, "Watch list of {literal} extended while taken");
            let mut list = list;
            list.append(slot);
            *slot = list;
        } else {
            *slot = list;
        }
    }

    /// Removes every binary clause containing `literal`, returning a count of the clauses removed.
    pub fn remove_binary_clauses_of(&mut self, literal: CLiteral) -> usize {
        let list = self.take_binary(literal);
        for watch in &list {
            Self::remove_first(
                &mut self.binary[watch.partner.code()],
                BinaryWatch { partner: literal },
            );
        }
        list.len()
    }

    /// A count of binary clauses, from the size of each binary list.
    pub fn binary_count(&self) -> usize {
        self.binary.iter().map(|list| list.len()).sum::<usize>() / 2
    }
}
