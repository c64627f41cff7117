/*!
A heap on some subset of elements with fixed indicies.

In other words, a heap backed by a vector with a companion vector which tracks the current location of the initial index of a heap element in the heap.

Further, the backing vector stays constant, allowing the heap to act as a store of values which may be moved onto (activated) or off (removed from) the heap.

For example, [IndexHeap] is used as a store of the activity of [atoms](crate::structures::atom), where any atom without a value is active on the heap.

# Deferred mutation

Activation and removal may be *deferred*, in which case an index is placed on (or taken off) the heap without restoring the heap property.
Deferred mutation is O(1), and is useful when many indicies are placed on the heap at once, e.g. when backjumping over many levels.

After a deferred mutation the heap is marked as pending a restore, and the next call to [pop_max](IndexHeap::pop_max) (or an explicit call to [heapify](IndexHeap::heapify)) restores the heap property bottom-up in O(n).

```rust
# use minnow_sat::generic::index_heap::IndexHeap;
let mut test_heap = IndexHeap::default();

test_heap.add(600, 10);
test_heap.add(0, 70);

test_heap.activate(600);
test_heap.activate_deferred(0);

assert_eq!(test_heap.count(), 601);
assert_eq!(test_heap.value_at(5), &i32::default());
assert!(test_heap.restore_pending());

assert_eq!(test_heap.pop_max(), Some(0));
assert_eq!(test_heap.pop_max(), Some(600));

assert!(test_heap.pop_max().is_none());
```
*/

use std::cmp::Ordering;

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// Values, indexed by value index.
    values: Vec<V>,

    /// Where a value index is on the heap, if it is on the heap.
    position_in_heap: Vec<Option<usize>>,

    /// The heap of value indicies, valid up to `limit`.
    heap: Vec<usize>,

    /// The count of value indicies on the heap.
    limit: usize,

    /// Whether the heap property may not hold due to a deferred mutation.
    restore_pending: bool,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position_in_heap: Vec::default(),
            heap: Vec::default(),
            limit: 0,
            restore_pending: false,
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Index `value` with `value_index`.
    /// Returns true if `value_index` was a fresh index, false otherwise.
    /// To *activate* `value_index` on the heap [activate]([IndexHeap::activate]) should be called after this method.
    ///
    /// Note, the method grows the structure to the size required for `value_index` to be a (transparent) index.
    pub fn add(&mut self, value_index: usize, value: V) -> bool {
        if self.values.len() <= value_index {
            let required = (value_index - self.values.len()) + 1;
            self.values.resize_with(value_index + 1, V::default);
            self.position_in_heap.resize(value_index + 1, None);
            self.heap.resize(self.heap.len() + required, usize::MAX);
            self.values[value_index] = value;
            true
        } else {
            self.revalue(value_index, value);
            false
        }
    }

    /// Whether `value_index` is on the heap.
    pub fn contains(&self, value_index: usize) -> bool {
        matches!(self.position_in_heap.get(value_index), Some(Some(_)))
    }

    /// Activate the value on the heap at `index`.
    /// Returns true if the index was placed on the heap, false if the index was already on the heap.
    pub fn activate(&mut self, value_index: usize) -> bool {
        match self.heap_index(value_index) {
            None => {
                let heap_index = self.push_to_limit(value_index);
                if !self.restore_pending {
                    self.heapify_up(heap_index);
                }
                true
            }
            Some(heap_index) => {
                if !self.restore_pending {
                    self.heapify_up(heap_index);
                    self.heapify_down(heap_index);
                }
                false
            }
        }
    }

    /// Activate the value on the heap at `index` without restoring the heap property.
    pub fn activate_deferred(&mut self, value_index: usize) -> bool {
        match self.heap_index(value_index) {
            None => {
                self.push_to_limit(value_index);
                self.restore_pending = true;
                true
            }
            Some(_) => false,
        }
    }

    /// Remove `value_index` from the heap, if present.
    /// Returns true if `value_index` was removed, false otherwise.
    pub fn remove(&mut self, value_index: usize) -> bool {
        match self.take_from_heap(value_index) {
            Some(heap_index) => {
                if heap_index < self.limit && !self.restore_pending {
                    self.heapify_up(heap_index);
                    self.heapify_down(heap_index);
                }
                true
            }
            None => false,
        }
    }

    /// Remove `value_index` from the heap, if present, without restoring the heap property.
    pub fn remove_deferred(&mut self, value_index: usize) -> bool {
        match self.take_from_heap(value_index) {
            Some(heap_index) => {
                if heap_index < self.limit {
                    self.restore_pending = true;
                }
                true
            }
            None => false,
        }
    }

    /// Heapify (ensure invariants of the heap are upheld) if `value_index` is active.
    ///
    /// Nothing happens while a restore is pending, as the restore will place the index.
    pub fn heapify_if_active(&mut self, value_index: usize) {
        if self.restore_pending {
            return;
        }
        if let Some(heap_index) = self.heap_index(value_index) {
            self.heapify_down(heap_index);
            self.heapify_up(heap_index);
        }
    }

    /// Pop the maximum index off the heap, restoring the heap property first if required.
    pub fn pop_max(&mut self) -> Option<usize> {
        if self.restore_pending {
            self.heapify();
        }
        match self.limit {
            0 => None,
            _ => {
                let max_value_index = self.heap[0];
                self.remove(max_value_index);
                Some(max_value_index)
            }
        }
    }

    /// Heapify (ensure invariants of the heap are upheld) the heap, bottom-up.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.limit / 2).rev() {
            self.heapify_down(heap_index)
        }
        self.restore_pending = false;
    }

    /// Whether some deferred mutation has been made since the heap property was last restored.
    pub fn restore_pending(&self) -> bool {
        self.restore_pending
    }

    /// Return the value indexed by `value_index`.
    ///
    /// # Panics
    /// If `value_index` has not been [added](IndexHeap::add).
    pub fn value_at(&self, value_index: usize) -> &V {
        &self.values[value_index]
    }

    /// Apply `f` to all (indexed) values.
    ///
    /// The heap property is not restored, see [heapify](IndexHeap::heapify).
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// Set the value of `value_index` to `value`.
    ///
    /// The heap property is not restored, see [heapify_if_active](IndexHeap::heapify_if_active).
    pub fn revalue(&mut self, value_index: usize, value: V) {
        self.values[value_index] = value
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of indicies currently on the heap.
    pub fn active_count(&self) -> usize {
        self.limit
    }

    /// True if no index is on the heap, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Where `value_index` is stored on the heap, if present.
    fn heap_index(&self, value_index: usize) -> Option<usize> {
        self.position_in_heap[value_index]
    }

    /// Places `value_index` at the end of the heap, returning the heap index used.
    fn push_to_limit(&mut self, value_index: usize) -> usize {
        let heap_index = self.limit;
        self.heap[heap_index] = value_index;
        self.position_in_heap[value_index] = Some(heap_index);
        self.limit += 1;
        heap_index
    }

    /// Takes `value_index` off the heap by a swap with the last index on the heap.
    /// Returns the heap index `value_index` was at, if it was on the heap.
    fn take_from_heap(&mut self, value_index: usize) -> Option<usize> {
        let heap_index = self.heap_index(value_index)?;
        self.limit -= 1;
        if heap_index != self.limit {
            let last_value_index = self.heap[self.limit];
            self.heap.swap(heap_index, self.limit);
            self.position_in_heap[last_value_index] = Some(heap_index);
        }
        self.position_in_heap[value_index] = None;
        Some(heap_index)
    }

    /// The (heap) index of the left child of `heap_index`.
    fn heap_left(heap_index: usize) -> usize {
        (2 * heap_index) + 1
    }

    /// The (heap) index of the right child of `heap_index`.
    fn heap_right(heap_index: usize) -> usize {
        (2 * heap_index) + 2
    }

    /// The (heap) index of the parent of `heap_index`.
    fn heap_parent(heap_index: usize) -> usize {
        heap_index.saturating_sub(1) / 2
    }

    /// The value of the index at `heap_index`.
    fn heap_value(&self, heap_index: usize) -> &V {
        &self.values[self.heap[heap_index]]
    }

    /// Swaps two positions on the heap, and updates the recorded positions to match.
    fn swap_heap_positions(&mut self, a: usize, b: usize) {
        self.position_in_heap.swap(self.heap[a], self.heap[b]);
        self.heap.swap(a, b);
    }

    /// Shuffles the index down into the heap, if required.
    ///
    /// For any trio of an index, the left child of the index, and the right child, the largest of the three is identified and, if needed, swapped with the index.
    fn heapify_down(&mut self, mut heap_index: usize) {
        loop {
            let left_index = Self::heap_left(heap_index);
            if left_index >= self.limit {
                break;
            }

            let mut update_index = heap_index;
            if self.heap_value(left_index) > self.heap_value(update_index) {
                update_index = left_index;
            }

            let right_index = Self::heap_right(heap_index);
            if right_index < self.limit
                && self.heap_value(right_index) > self.heap_value(update_index)
            {
                update_index = right_index;
            }

            if update_index == heap_index {
                break;
            }
            self.swap_heap_positions(heap_index, update_index);
            heap_index = update_index;
        }
    }

    /// Shuffles the index up from the heap, if required.
    ///
    /// Swaps the index with it's parent in the heap, if the parent is smaller.
    fn heapify_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent_index = Self::heap_parent(heap_index);

            match self
                .heap_value(parent_index)
                .partial_cmp(self.heap_value(heap_index))
            {
                Some(Ordering::Less) => {
                    self.swap_heap_positions(heap_index, parent_index);
                    heap_index = parent_index;
                }
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_heap(heap: &IndexHeap<i32>) -> bool {
        (1..heap.limit).all(|i| heap.heap_value(IndexHeap::<i32>::heap_parent(i)) >= heap.heap_value(i))
    }

    #[test]
    fn heap_simple() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(5, 20);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 5, 4, 1, 0] {
            test_heap.activate(index);
        }

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), None);
    }

    #[test]
    fn heap_update() {
        let mut test_heap = IndexHeap::default();
        test_heap.add(6, 10);
        test_heap.add(4, 30);
        test_heap.add(1, 60);
        test_heap.add(0, 70);
        for index in [6, 4, 1, 0] {
            test_heap.activate(index);
        }

        test_heap.revalue(0, 0);
        test_heap.revalue(1, 1);
        test_heap.revalue(4, 4);
        test_heap.revalue(6, 6);

        test_heap.heapify();

        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_increase() {
        let mut test_heap = IndexHeap::default();
        for index in 0..10 {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        test_heap.revalue(3, 100);
        test_heap.heapify_if_active(3);
        assert!(is_heap(&test_heap));

        assert_eq!(test_heap.pop_max(), Some(3));
        assert_eq!(test_heap.pop_max(), Some(9));
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = IndexHeap::default();
        for index in 0..10 {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        assert!(test_heap.remove(9));
        assert!(test_heap.remove(4));
        assert!(!test_heap.remove(4));
        assert!(!test_heap.contains(4));
        assert!(is_heap(&test_heap));

        let popped = std::iter::from_fn(|| test_heap.pop_max()).collect::<Vec<_>>();
        assert_eq!(popped, vec![8, 7, 6, 5, 3, 2, 1, 0]);
    }

    #[test]
    fn heap_deferred() {
        let mut test_heap = IndexHeap::default();
        for index in 0..32 {
            test_heap.add(index, ((index * 7) % 32) as i32);
        }

        for index in 0..32 {
            assert!(test_heap.activate_deferred(index));
        }
        assert!(!test_heap.activate_deferred(5));
        assert!(test_heap.restore_pending());

        assert!(test_heap.remove_deferred(0));
        assert!(test_heap.remove_deferred(31));
        assert_eq!(test_heap.active_count(), 30);

        let mut previous = i32::MAX;
        while let Some(index) = test_heap.pop_max() {
            assert!(!test_heap.restore_pending());
            let value = *test_heap.value_at(index);
            assert!(value <= previous);
            previous = value;
        }
        assert!(test_heap.is_empty());
    }

    #[test]
    fn heap_positions_track() {
        let mut test_heap = IndexHeap::default();
        for index in 0..16 {
            test_heap.add(index, (index % 5) as i32);
            test_heap.activate(index);
        }
        for index in (0..16).step_by(3) {
            test_heap.remove(index);
        }
        for index in 0..test_heap.limit {
            let value_index = test_heap.heap[index];
            assert_eq!(test_heap.position_in_heap[value_index], Some(index));
        }
    }
}
