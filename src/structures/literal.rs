//! Literals are atoms paired with a (boolean) polarity.
//!
//! Or, rather, anything which has methods for returning an atom and a polarity (and a few other useful things).
//!
//! The 'canonical' implementation of the literal trait is [CLiteral], a packed integer `2 * atom + polarity_bit`.
//! The polarity bit is clear for positive literals and set for negative literals, so:
//! - Negation flips the low bit.
//! - The atom of a literal is the literal shifted right by one.
//! - The [code](PackedLiteral::code) of a literal may be used directly as an index, e.g. into watch lists.
//!
//! ```rust
//! # use minnow_sat::structures::literal::{CLiteral, Literal};
//! let literal = CLiteral::new(79, true);
//!
//! assert!(literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.code(), 158);
//!
//! assert!(!literal.negate().polarity());
//! assert_eq!(-literal, CLiteral::new(79, false));
//! assert_eq!(literal.negate().code(), 159);
//! ```
//!
//! Integer literals follow the DIMACS convention, where atom *a* is written as *a + 1* and the sign gives the polarity.
//!
//! ```rust
//! # use minnow_sat::structures::literal::{CLiteral, IntLiteral, Literal};
//! let literal = CLiteral::from(-3 as IntLiteral);
//! assert_eq!(literal.atom(), 2);
//! assert_eq!(literal.code(), 5);
//! assert_eq!(literal.as_int(), -3);
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in it's canonical form.
    fn canonical(&self) -> CLiteral;

    /// The literal in it's (DIMACS) integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// A literal packed into a single integer, `2 * atom + polarity_bit`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PackedLiteral(u32);

/// The canonical implementation of a literal.
pub type CLiteral = PackedLiteral;

/// The representation of a literal as a (DIMACS) integer.
pub type IntLiteral = i32;

impl PackedLiteral {
    /// The packed representation of the literal, suitable for use as an index.
    pub const fn code(&self) -> usize {
        self.0 as usize
    }

    /// The literal with the given packed representation.
    pub const fn from_code(code: u32) -> Self {
        PackedLiteral(code)
    }
}

impl Literal for PackedLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        PackedLiteral((atom << 1) | (!polarity as u32))
    }

    fn negate(&self) -> Self {
        PackedLiteral(self.0 ^ 1)
    }

    fn atom(&self) -> Atom {
        self.0 >> 1
    }

    fn polarity(&self) -> bool {
        self.0 & 1 == 0
    }

    fn canonical(&self) -> CLiteral {
        *self
    }

    fn as_int(&self) -> isize {
        let external = self.atom() as isize + 1;
        match self.polarity() {
            true => external,
            false => -external,
        }
    }
}

impl std::ops::Neg for PackedLiteral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for PackedLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_int())
    }
}

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        let external = atom as IntLiteral + 1;
        match polarity {
            true => external,
            false => -external,
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs() - 1
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn canonical(&self) -> CLiteral {
        CLiteral::new(self.atom(), self.polarity())
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

impl From<IntLiteral> for PackedLiteral {
    /// # Panics
    /// Zero is not a literal.
    fn from(value: IntLiteral) -> Self {
        assert_ne!(value, 0, "zero is not a literal");
        value.canonical()
    }
}

impl From<PackedLiteral> for IntLiteral {
    fn from(value: PackedLiteral) -> Self {
        IntLiteral::new(value.atom(), value.polarity())
    }
}
