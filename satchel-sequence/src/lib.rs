//! Generic ordered sequences and the two custom operators layered on top of
//! them: predicate-driven deduplication and a converter-seeded fold.
//!
//! A [`Sequence`] is finite, ordered, and materialized; traversal is lazy
//! and never mutates the sequence. The operators live in the `ops` module
//! as inherent methods on [`Sequence`].

mod error;
mod ops;
mod sequence;

pub use error::{Error, Result};
pub use sequence::{Iter, Sequence};
