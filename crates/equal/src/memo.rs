//! Visited-pair memo for cycle detection.
//!
//! Two identity→position maps track the object pairs on the *active*
//! comparison path. Entries are pushed before descending into a pair's
//! children and popped when the subtree comparison returns. The memo never
//! outlives the path that created it, so two unrelated cyclic substructures
//! compared at sibling positions cannot contaminate each other.
//!
//! A pair already present in both maps is a cycle closure: it compares equal
//! precisely when both sides entered the path at the same position.

use std::collections::HashMap;

use deep_assert_value::ObjectId;

#[derive(Debug, Default)]
pub(crate) struct Memo {
    val1: HashMap<ObjectId, u32>,
    val2: HashMap<ObjectId, u32>,
    position: u32,
}

pub(crate) enum MemoStep {
    /// The pair recurs on the active path; carry this verdict instead of
    /// descending.
    Cycle(bool),
    /// The pair was registered; descend, then call [`Memo::leave`].
    Descend,
}

impl Memo {
    pub fn enter(&mut self, id1: ObjectId, id2: ObjectId) -> MemoStep {
        if let Some(position1) = self.val1.get(&id1) {
            if let Some(position2) = self.val2.get(&id2) {
                return MemoStep::Cycle(position1 == position2);
            }
        }
        self.position += 1;
        self.val1.insert(id1, self.position);
        self.val2.insert(id2, self.position);
        MemoStep::Descend
    }

    pub fn leave(&mut self, id1: ObjectId, id2: ObjectId) {
        self.val1.remove(&id1);
        self.val2.remove(&id2);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.val1.is_empty() && self.val2.is_empty()
    }
}
