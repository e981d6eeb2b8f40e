// The open-addressing table: shared probe skeleton, growth, instrumentation.

use std::hash::{BuildHasher, Hash};

use hashbrown::DefaultHashBuilder;
use wordprobe_core::prime::next_prime;

use crate::policy::{ProbeSeq, Prober};

/// Default requested capacity; sized up to the next prime on construction.
pub const DEFAULT_CAPACITY: usize = 101;

/// One table slot.
///
/// `Deleted` is a tombstone: it holds no value, never matches a key, and
/// never stops a probe sequence. Searches scan through tombstones until
/// they reach an `Empty` slot or the key itself, and insertion does not
/// reuse them.
#[derive(Debug)]
pub enum Slot<T> {
    /// Never used.
    Empty,
    /// Previously held a value that was since removed.
    Deleted,
    /// Holds a live value.
    Active(T),
}

/// Result of a membership query: whether the key was found, and how many
/// probe steps the search took (at least 1, even on an immediate hit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup {
    pub found: bool,
    pub probes: usize,
}

fn empty_slots<T>(capacity: usize) -> Box<[Slot<T>]> {
    std::iter::repeat_with(|| Slot::Empty).take(capacity).collect()
}

/// An open-addressing hash table with pluggable probing and collision
/// instrumentation.
///
/// The capacity is always prime. When an insertion pushes the number of
/// active entries past half the capacity, the table rehashes into the next
/// prime at least double the old size.
///
/// The cumulative collision counter advances on every probe step past the
/// first, across *all* searches -- [`contains`](Self::contains) included --
/// and is reset only by a rehash. That instrumentation side effect is why
/// every operation takes `&mut self`.
pub struct ProbeTable<T, P, S = DefaultHashBuilder> {
    slots: Box<[Slot<T>]>,
    len: usize,
    collisions: u64,
    prober: P,
    hash_builder: S,
}

impl<T, P, S> ProbeTable<T, P, S> {
    /// Number of active entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no entries are active.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total number of slots. Always prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Cumulative probe collisions across every search since construction
    /// or the last rehash.
    pub fn collisions(&self) -> u64 {
        self.collisions
    }

    /// Ratio of active entries to capacity.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.slots.len() as f64
    }

    /// Reset every slot to empty. The collision counter is deliberately
    /// kept; only a rehash resets it.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::Empty;
        }
        self.len = 0;
    }
}

impl<T, P> ProbeTable<T, P>
where
    T: Eq + Hash,
    P: Prober<T>,
{
    /// Table with the default capacity request.
    pub fn new(prober: P) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, prober)
    }

    /// Table sized to the next prime >= `capacity`.
    pub fn with_capacity(capacity: usize, prober: P) -> Self {
        Self::with_capacity_and_hasher(capacity, prober, DefaultHashBuilder::default())
    }
}

impl<T, P, S> ProbeTable<T, P, S>
where
    T: Eq + Hash,
    P: Prober<T>,
    S: BuildHasher,
{
    /// Table sized to the next prime >= `capacity`, hashing with
    /// `hash_builder`.
    pub fn with_capacity_and_hasher(capacity: usize, prober: P, hash_builder: S) -> Self {
        Self {
            slots: empty_slots(next_prime(capacity)),
            len: 0,
            collisions: 0,
            prober,
            hash_builder,
        }
    }

    /// Look up `key`.
    ///
    /// Not a pure read: every probe step past the first adds to the shared
    /// collision counter.
    pub fn contains(&mut self, key: &T) -> Lookup {
        let (pos, probes) = self.find_pos(key);
        Lookup {
            found: matches!(self.slots[pos], Slot::Active(_)),
            probes,
        }
    }

    /// Insert `value`.
    ///
    /// Returns false without mutating if an equal value is already active.
    /// May grow the table before returning, which replaces the entire
    /// backing storage.
    pub fn insert(&mut self, value: T) -> bool {
        let (pos, _) = self.find_pos(&value);
        if matches!(self.slots[pos], Slot::Active(_)) {
            return false;
        }
        self.slots[pos] = Slot::Active(value);
        self.len += 1;
        if self.len > self.slots.len() / 2 {
            self.rehash();
        }
        true
    }

    /// Remove `key`, leaving a tombstone in its slot.
    ///
    /// Returns false if `key` is not active. Never shrinks the table and
    /// never touches the collision counter.
    pub fn remove(&mut self, key: &T) -> bool {
        let (pos, _) = self.find_pos(key);
        if !matches!(self.slots[pos], Slot::Active(_)) {
            return false;
        }
        self.slots[pos] = Slot::Deleted;
        self.len -= 1;
        true
    }

    /// Shared probe search.
    ///
    /// Returns the slot where the scan stopped -- either the key's active
    /// slot or the first empty slot on the probe sequence -- and the number
    /// of probes taken. Tombstones and mismatched active slots keep the
    /// scan going; only `Empty` or the key itself stop it.
    fn find_pos(&mut self, key: &T) -> (usize, usize) {
        let capacity = self.slots.len();
        let mut pos = (self.hash_builder.hash_one(key) as usize) % capacity;
        let mut seq = self.prober.begin(key, capacity);
        let mut probes = 1;
        loop {
            match &self.slots[pos] {
                Slot::Empty => return (pos, probes),
                Slot::Active(value) if *value == *key => return (pos, probes),
                _ => {
                    pos = (pos + seq.advance()) % capacity;
                    probes += 1;
                    self.collisions += 1;
                }
            }
        }
    }

    /// Grow to the next prime at least double the current capacity and
    /// reinsert every active entry in array order.
    ///
    /// Resets the collision counter, so post-rehash collision counts
    /// reflect only the redistribution, not history. Tombstones are not
    /// carried over. The new capacity leaves the table under half full, so
    /// reinsertion cannot trigger a nested rehash.
    fn rehash(&mut self) {
        let new_capacity = next_prime(2 * self.slots.len());
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity));
        self.len = 0;
        self.collisions = 0;
        for slot in old.into_vec() {
            if let Slot::Active(value) = slot {
                self.insert(value);
            }
        }
    }
}
