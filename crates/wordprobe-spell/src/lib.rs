//! Spell-checking layer over the probing table.
//!
//! - [`dictionary`] -- whitespace-delimited word sources feeding a table
//! - [`stats`] -- the fill/collision report printed after ingestion
//! - [`corrector`] -- single-edit candidate generators and the checker
//!   that vets them against the dictionary

pub mod corrector;
pub mod dictionary;
pub mod stats;

pub use corrector::{Correction, SpellChecker, Verdict};
pub use dictionary::SpellError;
pub use stats::TableStats;
