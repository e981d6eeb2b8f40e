// Single-edit correction candidates and the spell checker that vets them.

use std::hash::BuildHasher;

use hashbrown::{DefaultHashBuilder, HashSet};

use wordprobe_core::enums::CorrectionCase;
use wordprobe_core::word::clean_word;
use wordprobe_table::{DEFAULT_CAPACITY, DoubleHashProber, ProbeTable, Prober};

// ---------------------------------------------------------------------------
// Edit generators
// ---------------------------------------------------------------------------

/// A single-edit candidate generator.
///
/// Each implementation applies one family of edits to a word and pushes
/// every candidate it produces; vetting the candidates against the
/// dictionary is the caller's job.
pub trait EditGenerator {
    /// Which correction family this generator reports as.
    fn case(&self) -> CorrectionCase;

    /// Push every candidate for `word` onto `out`.
    fn generate(&self, word: &str, out: &mut Vec<String>);
}

/// Insert one of `a`-`z` at every position, both ends included.
pub struct Insertion;

impl EditGenerator for Insertion {
    fn case(&self) -> CorrectionCase {
        CorrectionCase::Insertion
    }

    fn generate(&self, word: &str, out: &mut Vec<String>) {
        let chars: Vec<char> = word.chars().collect();
        for i in 0..=chars.len() {
            for letter in 'a'..='z' {
                let mut candidate: Vec<char> = Vec::with_capacity(chars.len() + 1);
                candidate.extend_from_slice(&chars[..i]);
                candidate.push(letter);
                candidate.extend_from_slice(&chars[i..]);
                out.push(candidate.into_iter().collect());
            }
        }
    }
}

/// Drop the character at every position.
pub struct Deletion;

impl EditGenerator for Deletion {
    fn case(&self) -> CorrectionCase {
        CorrectionCase::Deletion
    }

    fn generate(&self, word: &str, out: &mut Vec<String>) {
        let chars: Vec<char> = word.chars().collect();
        for i in 0..chars.len() {
            let mut candidate: Vec<char> = Vec::with_capacity(chars.len() - 1);
            candidate.extend_from_slice(&chars[..i]);
            candidate.extend_from_slice(&chars[i + 1..]);
            out.push(candidate.into_iter().collect());
        }
    }
}

/// Swap every pair of adjacent characters.
pub struct Transposition;

impl EditGenerator for Transposition {
    fn case(&self) -> CorrectionCase {
        CorrectionCase::Transposition
    }

    fn generate(&self, word: &str, out: &mut Vec<String>) {
        let chars: Vec<char> = word.chars().collect();
        for i in 0..chars.len().saturating_sub(1) {
            let mut candidate = chars.clone();
            candidate.swap(i, i + 1);
            out.push(candidate.into_iter().collect());
        }
    }
}

// ---------------------------------------------------------------------------
// Checker
// ---------------------------------------------------------------------------

/// One accepted correction candidate and the family that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    pub word: String,
    pub case: CorrectionCase,
}

/// Outcome of checking one document word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// The cleaned form of the word that was checked.
    pub word: String,
    pub correct: bool,
    pub corrections: Vec<Correction>,
}

/// Spell checker backed by an instrumented probe table.
///
/// The default configuration is a double-hashing dictionary with the stock
/// step modulus. Corrections consult only the boolean side of the table's
/// lookups; probe counts play no part here.
pub struct SpellChecker<P = DoubleHashProber, S = DefaultHashBuilder> {
    dictionary: ProbeTable<String, P, S>,
    generators: Vec<Box<dyn EditGenerator>>,
}

impl SpellChecker {
    /// Checker with an empty double-hashing dictionary.
    pub fn new() -> Self {
        Self::with_table(ProbeTable::with_capacity(
            DEFAULT_CAPACITY,
            DoubleHashProber::default(),
        ))
    }
}

impl Default for SpellChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, S> SpellChecker<P, S>
where
    P: Prober<String>,
    S: BuildHasher,
{
    /// Checker over an existing dictionary table.
    pub fn with_table(dictionary: ProbeTable<String, P, S>) -> Self {
        SpellChecker {
            dictionary,
            generators: vec![
                Box::new(Insertion),
                Box::new(Deletion),
                Box::new(Transposition),
            ],
        }
    }

    /// The dictionary table, for bulk ingestion or statistics.
    pub fn table_mut(&mut self) -> &mut ProbeTable<String, P, S> {
        &mut self.dictionary
    }

    /// Add one word to the dictionary, cleaned.
    ///
    /// Returns false for duplicates and for tokens that clean to nothing.
    pub fn learn(&mut self, raw: &str) -> bool {
        let word = clean_word(raw);
        if word.is_empty() {
            return false;
        }
        self.dictionary.insert(word)
    }

    /// Check one document word.
    ///
    /// Returns `None` if the word cleans to nothing (digits, bare
    /// punctuation). For a misspelled word, the three edit families run in
    /// case order A, B, C; a candidate already produced by an earlier
    /// family is not re-reported by a later one.
    pub fn check(&mut self, raw: &str) -> Option<Verdict> {
        let word = clean_word(raw);
        if word.is_empty() {
            return None;
        }
        if self.dictionary.contains(&word).found {
            return Some(Verdict {
                word,
                correct: true,
                corrections: Vec::new(),
            });
        }

        let mut corrections = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut candidates = Vec::new();
        for generator in &self.generators {
            candidates.clear();
            generator.generate(&word, &mut candidates);
            for candidate in candidates.drain(..) {
                if !seen.insert(candidate.clone()) {
                    continue;
                }
                if self.dictionary.contains(&candidate).found {
                    corrections.push(Correction {
                        word: candidate,
                        case: generator.case(),
                    });
                }
            }
        }
        Some(Verdict {
            word,
            correct: false,
            corrections,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(generator: &dyn EditGenerator, word: &str) -> Vec<String> {
        let mut out = Vec::new();
        generator.generate(word, &mut out);
        out
    }

    #[test]
    fn insertion_covers_every_position_and_letter() {
        let out = candidates(&Insertion, "cat");
        assert_eq!(out.len(), 4 * 26);
        assert!(out.contains(&"scat".to_string()));
        assert!(out.contains(&"cart".to_string()));
        assert!(out.contains(&"cats".to_string()));
    }

    #[test]
    fn deletion_drops_each_position() {
        let out = candidates(&Deletion, "cat");
        assert_eq!(out, vec!["at", "ct", "ca"]);
    }

    #[test]
    fn transposition_swaps_each_adjacent_pair() {
        let out = candidates(&Transposition, "cat");
        assert_eq!(out, vec!["act", "cta"]);
        assert!(candidates(&Transposition, "a").is_empty());
    }

    #[test]
    fn known_word_is_correct() {
        let mut checker = SpellChecker::new();
        assert!(checker.learn("cat"));
        let verdict = checker.check("Cat!").unwrap();
        assert!(verdict.correct);
        assert_eq!(verdict.word, "cat");
        assert!(verdict.corrections.is_empty());
    }

    #[test]
    fn families_are_tagged_by_case() {
        let mut checker = SpellChecker::new();
        for word in ["cat", "cats", "at"] {
            assert!(checker.learn(word));
        }

        // One letter short: insertion repairs it (case A).
        let verdict = checker.check("ct").unwrap();
        assert!(!verdict.correct);
        assert!(verdict.corrections.contains(&Correction {
            word: "cat".to_string(),
            case: CorrectionCase::Insertion,
        }));

        // One letter extra: deletion repairs it (case B), and dropping the
        // leading letter reaches "at" too.
        let verdict = checker.check("caat").unwrap();
        let words: Vec<_> = verdict
            .corrections
            .iter()
            .map(|c| (c.word.as_str(), c.case))
            .collect();
        assert!(words.contains(&("cat", CorrectionCase::Deletion)));

        // Swapped letters: transposition repairs it (case C).
        let verdict = checker.check("act").unwrap();
        assert!(verdict.corrections.contains(&Correction {
            word: "cat".to_string(),
            case: CorrectionCase::Transposition,
        }));
    }

    #[test]
    fn duplicate_candidates_reported_once() {
        let mut checker = SpellChecker::new();
        assert!(checker.learn("cat"));

        // Deleting either `a` of "caat" yields "cat"; the second hit is a
        // duplicate and must not be reported twice.
        let verdict = checker.check("caat").unwrap();
        let cat_hits = verdict
            .corrections
            .iter()
            .filter(|c| c.word == "cat")
            .count();
        assert_eq!(cat_hits, 1);
        assert_eq!(verdict.corrections[0].case, CorrectionCase::Deletion);
    }

    #[test]
    fn unfixable_word_reports_no_corrections() {
        let mut checker = SpellChecker::new();
        checker.learn("cat");
        let verdict = checker.check("zzzzzz").unwrap();
        assert!(!verdict.correct);
        assert!(verdict.corrections.is_empty());
    }

    #[test]
    fn tokens_without_letters_are_skipped() {
        let mut checker = SpellChecker::new();
        checker.learn("cat");
        assert!(checker.check("1234").is_none());
        assert!(checker.check("...").is_none());
        assert!(!checker.learn("42"));
    }
}
