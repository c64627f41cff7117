/*!
(The internal representation of) an atom (aka. a 'variable').

Each atom is a u32 *u* such that either:
- *u* is 0, or:
- *u - 1* is an atom.

In other words, the atoms of a context are [0..*m*) for some *m*, and are allocated by growth only.

```rust
# use minnow_sat::structures::atom::Atom;
let atoms = (0..97).collect::<Vec<Atom>>();
assert_eq!(atoms.last(), Some(&96));
```

This representation allows atoms to be used as the indicies of a structure without taking too much space.

# DIMACS
The external (DIMACS) name of atom *u* is *u + 1*, as zero terminates a clause in the DIMACS format.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The maximum instance of an atom.
///
/// Limited by the encoding of [literals](crate::structures::literal::CLiteral), which doubles the atom and uses the low bit for polarity.
pub const ATOM_MAX: Atom = (Atom::MAX >> 1) - 1;
