//! A set of elements backed by a growable array.
//!
//! Membership is a linear scan and `add` never checks for an existing equal element, so an
//! [`ArraySet`] behaves as an insertion-ordered multiset. Appending is amortized O(1) because
//! the backing `Vec` doubles its capacity whenever it fills up.

mod arrayset;
mod error;

pub use arrayset::ArraySet;
pub use error::{ArraySetError, Result};
