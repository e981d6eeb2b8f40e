// Table statistics reported after the insertion phase.

use std::fmt;

use wordprobe_table::ProbeTable;

/// Snapshot of a table's fill and collision counters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    /// Number of active entries.
    pub elements: usize,
    /// Table capacity (always prime).
    pub capacity: usize,
    /// `elements / capacity`.
    pub load_factor: f64,
    /// Cumulative collisions since construction or the last rehash.
    pub collisions: u64,
    /// `collisions / elements`; 0 for an empty table.
    pub avg_collisions: f64,
}

impl TableStats {
    /// Snapshot `table`'s counters.
    pub fn from_table<T, P, S>(table: &ProbeTable<T, P, S>) -> Self {
        let elements = table.len();
        let collisions = table.collisions();
        TableStats {
            elements,
            capacity: table.capacity(),
            load_factor: table.load_factor(),
            collisions,
            avg_collisions: if elements == 0 {
                0.0
            } else {
                collisions as f64 / elements as f64
            },
        }
    }
}

impl fmt::Display for TableStats {
    /// The classic five-line report, ratios fixed to six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "number_of_elements: {}", self.elements)?;
        writeln!(f, "size_of_table: {}", self.capacity)?;
        writeln!(f, "load_factor: {:.6}", self.load_factor)?;
        writeln!(f, "collisions: {}", self.collisions)?;
        write!(f, "avg_collisions: {:.6}", self.avg_collisions)
    }
}
