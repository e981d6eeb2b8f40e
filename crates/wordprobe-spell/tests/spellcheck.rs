//! End-to-end tests over the full pipeline: dictionary build, statistics,
//! and correction generation, across all three probing strategies.

use std::io::Cursor;

use wordprobe_core::enums::CorrectionCase;
use wordprobe_spell::corrector::SpellChecker;
use wordprobe_spell::dictionary;
use wordprobe_spell::stats::TableStats;
use wordprobe_table::{DoubleHashProber, LinearProber, ProbeTable, Prober, QuadraticProber};

#[test]
fn fruit_statistics_report() {
    let mut table = ProbeTable::with_capacity(101, LinearProber);
    let inserted =
        dictionary::insert_tokens(&mut table, Cursor::new("apple banana cherry")).unwrap();
    assert_eq!(inserted, 3);
    assert_eq!(table.len(), 3);
    assert_eq!(table.capacity(), 101);

    let apple = table.contains(&"apple".to_string());
    assert!(apple.found);
    assert!(apple.probes >= 1);
    assert!(!table.contains(&"grape".to_string()).found);

    let report = TableStats::from_table(&table).to_string();
    assert!(report.contains("number_of_elements: 3"));
    assert!(report.contains("size_of_table: 101"));
    assert!(report.contains("load_factor: 0.029703"));
}

#[test]
fn cta_is_reported_as_a_transposition() {
    let mut checker = SpellChecker::new();
    assert!(checker.learn("cat"));
    assert!(checker.learn("cats"));

    // "cta" is wrong; swapping positions 1-2 repairs it, swapping 0-1
    // ("tca") does not.
    let verdict = checker.check("cta").unwrap();
    assert!(!verdict.correct);
    assert_eq!(verdict.corrections.len(), 1);
    assert_eq!(verdict.corrections[0].word, "cat");
    assert_eq!(verdict.corrections[0].case, CorrectionCase::Transposition);

    assert!(checker.check("cat").unwrap().correct);
}

#[test]
fn every_strategy_survives_growth() {
    fn exercise<P: Prober<String>>(mut table: ProbeTable<String, P>) {
        let words: Vec<String> = (0..40).map(|i| format!("word{i:02}")).collect();
        for word in &words {
            assert!(table.insert(word.clone()));
        }

        // Growth from 11 is count-driven, so the trajectory is the same
        // for every strategy: 11 -> 23 -> 47 -> 97.
        assert_eq!(table.capacity(), 97);
        assert_eq!(table.len(), 40);

        for word in &words {
            let lookup = table.contains(word);
            assert!(lookup.found, "{word} lost in a rehash");
            assert!(lookup.probes >= 1);
        }
        assert!(!table.contains(&"missing".to_string()).found);
    }

    exercise(ProbeTable::with_capacity(11, LinearProber));
    exercise(ProbeTable::with_capacity(11, QuadraticProber));
    exercise(ProbeTable::with_capacity(11, DoubleHashProber::default()));
}

#[test]
fn removal_keeps_the_rest_reachable() {
    let mut table = ProbeTable::with_capacity(101, DoubleHashProber::default());
    dictionary::insert_tokens(&mut table, Cursor::new("alpha beta gamma delta")).unwrap();

    assert!(table.remove(&"beta".to_string()));
    assert!(!table.remove(&"beta".to_string()));
    assert_eq!(table.len(), 3);

    for word in ["alpha", "gamma", "delta"] {
        assert!(table.contains(&word.to_string()).found);
    }
    assert!(!table.contains(&"beta".to_string()).found);
}

#[test]
fn checker_over_a_file_shaped_dictionary() {
    let mut checker = SpellChecker::new();
    dictionary::insert_cleaned(
        checker.table_mut(),
        Cursor::new("The quick brown Fox jumps over the lazy Dog.\n"),
    )
    .unwrap();

    assert!(checker.check("fox").unwrap().correct);
    assert!(checker.check("Dog,").unwrap().correct);

    // "quick" with a dropped letter is repaired by insertion.
    let verdict = checker.check("quck").unwrap();
    assert!(!verdict.correct);
    assert!(
        verdict
            .corrections
            .iter()
            .any(|c| c.word == "quick" && c.case == CorrectionCase::Insertion)
    );
}
