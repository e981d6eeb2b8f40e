//! Open-addressing hash table with pluggable probing and collision
//! instrumentation.
//!
//! The table resolves collisions by probing alternate slots of a single
//! prime-sized array. Which slots get probed is the job of a
//! [`Prober`](policy::Prober): linear, quadratic, and double-hashing
//! policies ship with the crate, and the table counts every collision and
//! reports per-query probe lengths so the policies can be compared.
//!
//! # Architecture
//!
//! - [`policy`] -- the probing-policy seam and the three stock policies
//! - [`table`] -- the table itself: probe search, growth, instrumentation

pub mod policy;
pub mod table;

pub use policy::{
    DEFAULT_STEP_MODULUS, DoubleHashProber, LinearProber, ProbeSeq, Prober, QuadraticProber,
};
pub use table::{DEFAULT_CAPACITY, Lookup, ProbeTable, Slot};

/// Table probed one slot at a time.
pub type LinearTable<T> = ProbeTable<T, LinearProber>;

/// Table probed at quadratically growing offsets.
pub type QuadraticTable<T> = ProbeTable<T, QuadraticProber>;

/// Table probed at a per-key step from a secondary hash.
pub type DoubleHashTable<T> = ProbeTable<T, DoubleHashProber>;
