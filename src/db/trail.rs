/*!
The trail of assignments.

Literals are recorded in the order of assignment, and the start of each decision level is recorded as an index into the trail.
So, the decision level of the context is the count of level indices, and the literals of level *l* (for *l* > 0) are those from `level_indices[l - 1]` up to the start of the next level.

Literals from the [propagation head](Trail::q_head) onward have been assigned but not yet propagated.
*/

use crate::{db::LevelIndex, structures::literal::CLiteral};

/// The trail of assignments.
#[derive(Default)]
pub struct Trail {
    /// Assigned literals, in order of assignment.
    pub literals: Vec<CLiteral>,

    /// The index of the first literal of each level above zero.
    pub level_indices: Vec<usize>,

    /// The index of the next literal to propagate.
    pub q_head: usize,

    /// The level of the last assumption, during a solve given assumptions.
    pub root_level: LevelIndex,
}

impl Trail {
    /// The current decision level.
    pub fn level(&self) -> LevelIndex {
        self.level_indices.len() as LevelIndex
    }

    /// Records `literal` on the trail.
    pub fn store_assignment(&mut self, literal: CLiteral) {
        self.literals.push(literal);
    }

    /// Opens a new decision level, starting at the end of the trail.
    pub fn new_level(&mut self) {
        self.level_indices.push(self.literals.len());
    }

    /// The index of the first literal of `level`.
    ///
    /// Level zero starts at index zero, and any level above the current level starts at the end of the trail.
    pub fn level_start(&self, level: LevelIndex) -> usize {
        match level {
            0 => 0,
            _ => match self.level_indices.get(level as usize - 1) {
                Some(index) => *index,
                None => self.literals.len(),
            },
        }
    }

    /// The decision literal of the current level, if a decision has been made.
    pub fn top_decision(&self) -> Option<CLiteral> {
        self.level_indices
            .last()
            .and_then(|index| self.literals.get(*index).copied())
    }

    /// The literals assigned at the current level.
    pub fn top_level_literals(&self) -> &[CLiteral] {
        &self.literals[self.level_start(self.level())..]
    }

    /// Whether every assigned literal has been propagated.
    pub fn propagated(&self) -> bool {
        self.q_head >= self.literals.len()
    }

    /// The count of assigned literals.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether no literal is assigned.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

#[cfg(test)]
mod trail_tests {
    use super::*;
    use crate::structures::literal::Literal;

    #[test]
    fn levels() {
        let mut trail = Trail::default();
        trail.store_assignment(CLiteral::new(0, true));
        assert_eq!(trail.level(), 0);

        trail.new_level();
        trail.store_assignment(CLiteral::new(1, false));
        trail.store_assignment(CLiteral::new(2, true));
        assert_eq!(trail.level(), 1);
        assert_eq!(trail.level_start(1), 1);
        assert_eq!(trail.top_decision(), Some(CLiteral::new(1, false)));
        assert_eq!(trail.top_level_literals().len(), 2);

        trail.new_level();
        assert_eq!(trail.top_decision(), None);
        assert_eq!(trail.level_start(3), trail.len());
    }
}
