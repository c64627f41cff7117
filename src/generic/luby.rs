/*!
The luby sequence, used to schedule restarts.

See <https://oeis.org/A182105> for details on the luby sequence.

The sequence is generalised to powers of some base `y`, as is common in solvers of the MiniSAT family.
With `y` as 2 the generalised sequence is the luby sequence.

The implementation finds the finite subsequence containing the index of interest, and the position of the index within that subsequence, rather than generating each element in turn.
So, the *n*th element is available in O(log n) without an iterator.
Still, [Luby] provides an iterator for those who prefer one.

```rust
# use minnow_sat::generic::luby::luby;
assert_eq!(luby(2.0, 6), 4.0);
assert_eq!(luby(3.0, 6), 9.0);
```
*/

/// Representation used for the index of an element in a luby sequence.
pub type LubyRepresentation = u32;

/// The `index`th element (from zero) of the luby sequence with base `y`.
pub fn luby(y: f64, index: LubyRepresentation) -> f64 {
    // Find the finite subsequence that contains the index, and the size of that subsequence.
    let mut size: u64 = 1;
    let mut sequence: i32 = 0;
    let mut index = index as u64;

    while size < index + 1 {
        sequence += 1;
        size = 2 * size + 1;
    }

    while size - 1 != index {
        size = (size - 1) >> 1;
        sequence -= 1;
        index %= size;
    }

    y.powi(sequence)
}

/// An iterator over the luby sequence with some base.
pub struct Luby {
    base: f64,
    index: LubyRepresentation,
}

impl Luby {
    /// An iterator over the luby sequence with the given base, from the first element.
    pub fn with_base(base: f64) -> Self {
        Luby { base, index: 0 }
    }
}

impl Default for Luby {
    fn default() -> Self {
        Luby::with_base(2.0)
    }
}

impl Iterator for Luby {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        let element = luby(self.base, self.index);
        self.index = self.index.checked_add(1)?;
        Some(element)
    }
}
