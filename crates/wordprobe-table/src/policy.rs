// Probing policies: per-strategy step computation for the probe search.

use std::hash::{BuildHasher, Hash};

use hashbrown::DefaultHashBuilder;

/// Default modulus for the double-hashing step (the `R` in
/// `R - (hash2(x) mod R)`). Prime, and independent of any capacity the
/// sizing layer produces.
pub const DEFAULT_STEP_MODULUS: usize = 89;

/// Per-search probe state: yields the offset to add at each probe step.
///
/// A sequence is created by [`Prober::begin`] once per search and consumed
/// step by step while the search walks the table.
pub trait ProbeSeq {
    /// Offset to add to the current position for the next probe.
    fn advance(&mut self) -> usize;
}

/// A collision-resolution strategy.
///
/// `begin` computes whatever per-key state the strategy needs -- for double
/// hashing, the secondary-hash step -- exactly once per search; the returned
/// [`ProbeSeq`] then produces one offset per probe step.
pub trait Prober<T: ?Sized> {
    /// Per-search state type.
    type Seq: ProbeSeq;

    /// Start a probe sequence for `key` against a table of `capacity` slots.
    fn begin(&self, key: &T, capacity: usize) -> Self::Seq;
}

// ---------------------------------------------------------------------------
// Linear probing
// ---------------------------------------------------------------------------

/// Linear probing: the i-th probe lands i slots past the home slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProber;

/// Sequence for [`LinearProber`]; every step advances by one slot.
#[derive(Debug)]
pub struct LinearSeq;

impl ProbeSeq for LinearSeq {
    fn advance(&mut self) -> usize {
        1
    }
}

impl<T: ?Sized> Prober<T> for LinearProber {
    type Seq = LinearSeq;

    fn begin(&self, _key: &T, _capacity: usize) -> LinearSeq {
        LinearSeq
    }
}

// ---------------------------------------------------------------------------
// Quadratic probing
// ---------------------------------------------------------------------------

/// Quadratic probing: the i-th probe lands i squared slots past the home
/// slot. Consecutive squares differ by `2i - 1`, so the sequence adds
/// 1, 3, 5, ... to the running position instead of recomputing squares.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuadraticProber;

/// Sequence for [`QuadraticProber`]; tracks the probe index.
#[derive(Debug)]
pub struct QuadraticSeq {
    i: usize,
}

impl ProbeSeq for QuadraticSeq {
    fn advance(&mut self) -> usize {
        let step = 2 * self.i - 1;
        self.i += 1;
        step
    }
}

impl<T: ?Sized> Prober<T> for QuadraticProber {
    type Seq = QuadraticSeq;

    fn begin(&self, _key: &T, _capacity: usize) -> QuadraticSeq {
        QuadraticSeq { i: 1 }
    }
}

// ---------------------------------------------------------------------------
// Double hashing
// ---------------------------------------------------------------------------

/// Double hashing: every probe of a search advances by the same per-key
/// step `R - (hash2(x) mod R)`.
///
/// The step comes from an independent secondary hasher and always lies in
/// `[1, R]`. It is additionally reduced modulo the table capacity with a
/// floor of 1, so a step that happens to be a multiple of a small capacity
/// cannot pin the search to a single slot.
#[derive(Debug, Clone)]
pub struct DoubleHashProber<S = DefaultHashBuilder> {
    modulus: usize,
    hash_builder: S,
}

impl DoubleHashProber {
    /// Prober with the given step modulus and a default secondary hasher.
    pub fn new(modulus: usize) -> Self {
        Self::with_hasher(modulus, DefaultHashBuilder::default())
    }
}

impl Default for DoubleHashProber {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_MODULUS)
    }
}

impl<S> DoubleHashProber<S> {
    /// Prober with an explicit secondary hasher.
    ///
    /// The secondary hasher must be independent of the table's primary
    /// hasher; sharing one defeats the point of double hashing.
    pub fn with_hasher(modulus: usize, hash_builder: S) -> Self {
        assert!(modulus > 0, "step modulus must be positive");
        Self {
            modulus,
            hash_builder,
        }
    }

    /// The step modulus `R`.
    pub fn modulus(&self) -> usize {
        self.modulus
    }
}

/// Sequence for [`DoubleHashProber`]; the same per-key step every time.
#[derive(Debug)]
pub struct FixedSeq {
    step: usize,
}

impl ProbeSeq for FixedSeq {
    fn advance(&mut self) -> usize {
        self.step
    }
}

impl<T, S> Prober<T> for DoubleHashProber<S>
where
    T: Hash + ?Sized,
    S: BuildHasher,
{
    type Seq = FixedSeq;

    fn begin(&self, key: &T, capacity: usize) -> FixedSeq {
        let h2 = self.hash_builder.hash_one(key) as usize;
        let raw = self.modulus - (h2 % self.modulus);
        let step = match raw % capacity {
            0 => 1,
            s => s,
        };
        FixedSeq { step }
    }
}
