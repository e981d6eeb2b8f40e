// wordprobe-check: spell-check a document against a dictionary word list.
//
// Every document word is reported as CORRECT or INCORRECT. For misspelled
// words, dictionary hits among the single-edit candidates are listed as
//   ** <word> -> <candidate> ** case A|B|C
// where case A is one inserted character, case B one deleted character,
// and case C one swapped adjacent pair.
//
// Usage:
//   wordprobe-check <document-file> <dictionary-file>

use std::io::{self, BufWriter, Write};
use std::path::Path;

use wordprobe_spell::corrector::SpellChecker;
use wordprobe_spell::dictionary;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordprobe_cli::wants_help(&args) {
        print_usage();
        return;
    }
    if args.len() != 2 {
        print_usage();
        std::process::exit(1);
    }

    let document_path = Path::new(&args[0]);
    let dictionary_path = Path::new(&args[1]);

    let mut checker = SpellChecker::new();
    if let Err(e) = dictionary::insert_cleaned_from_path(checker.table_mut(), dictionary_path) {
        wordprobe_cli::fatal(&e.to_string());
    }

    let document = match std::fs::read_to_string(document_path) {
        Ok(text) => text,
        Err(e) => wordprobe_cli::fatal(&format!(
            "failed to read {}: {e}",
            document_path.display()
        )),
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for token in document.split_whitespace() {
        // Tokens without letters clean to nothing and are skipped.
        let Some(verdict) = checker.check(token) else {
            continue;
        };
        if verdict.correct {
            let _ = writeln!(out, "{} is CORRECT", verdict.word);
        } else {
            let _ = writeln!(out, "{} is INCORRECT", verdict.word);
            for correction in &verdict.corrections {
                let _ = writeln!(
                    out,
                    "** {} -> {} ** {}",
                    verdict.word, correction.word, correction.case
                );
            }
        }
    }
}

fn print_usage() {
    println!("wordprobe-check: spell-check a document against a dictionary word list.");
    println!();
    println!("Usage: wordprobe-check <document-file> <dictionary-file>");
    println!();
    println!("Both files are read as whitespace-delimited words; punctuation is");
    println!("stripped and letters are lowercased before any comparison.");
}
