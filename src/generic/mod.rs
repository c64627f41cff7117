//! Generic structures, not tied to any particular part of a context.

pub mod index_heap;
pub mod luby;
pub mod random;
