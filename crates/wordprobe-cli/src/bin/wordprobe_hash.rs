// wordprobe-hash: build a probing hash table from a word list and replay
// membership queries against it.
//
// Words are inserted exactly as they appear in the word file; the query
// phase reports each token as Found or Not_Found along with the number of
// probes the lookup took. Between the two phases the tool prints the
// table-statistics block.
//
// Usage:
//   wordprobe-hash <words-file> <query-file> <flag> [r-value]
//
//   <flag>      probing strategy: linear, quadratic, or double
//   [r-value]   step modulus for double hashing (default 89)

use std::io::{self, BufWriter, Write};
use std::path::Path;

use wordprobe_core::enums::ProbeKind;
use wordprobe_spell::dictionary;
use wordprobe_spell::stats::TableStats;
use wordprobe_table::{
    DEFAULT_CAPACITY, DEFAULT_STEP_MODULUS, DoubleHashProber, LinearProber, ProbeTable, Prober,
    QuadraticProber,
};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if wordprobe_cli::wants_help(&args) {
        print_usage();
        return;
    }
    if args.len() < 3 || args.len() > 4 {
        print_usage();
        std::process::exit(1);
    }

    let words_path = Path::new(&args[0]);
    let query_path = Path::new(&args[1]);
    let kind: ProbeKind = args[2]
        .parse()
        .unwrap_or_else(|e| wordprobe_cli::fatal(&format!("{e}")));

    let modulus = match args.get(3) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(r) if r > 0 => r,
            _ => wordprobe_cli::fatal(&format!(
                "invalid r-value `{raw}`: expected a positive integer"
            )),
        },
        None => DEFAULT_STEP_MODULUS,
    };

    let result = match kind {
        ProbeKind::Linear => run(
            ProbeTable::with_capacity(DEFAULT_CAPACITY, LinearProber),
            words_path,
            query_path,
        ),
        ProbeKind::Quadratic => run(
            ProbeTable::with_capacity(DEFAULT_CAPACITY, QuadraticProber),
            words_path,
            query_path,
        ),
        ProbeKind::Double => {
            println!("r_value: {modulus}");
            run(
                ProbeTable::with_capacity(DEFAULT_CAPACITY, DoubleHashProber::new(modulus)),
                words_path,
                query_path,
            )
        }
    };

    if let Err(msg) = result {
        wordprobe_cli::fatal(&msg);
    }
}

/// Insert every word, print the statistics block, then replay the queries.
fn run<P>(
    mut table: ProbeTable<String, P>,
    words_path: &Path,
    query_path: &Path,
) -> Result<(), String>
where
    P: Prober<String>,
{
    dictionary::insert_tokens_from_path(&mut table, words_path).map_err(|e| e.to_string())?;

    let queries = std::fs::read_to_string(query_path)
        .map_err(|e| format!("failed to read {}: {e}", query_path.display()))?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let _ = writeln!(out, "{}", TableStats::from_table(&table));
    let _ = writeln!(out);

    for word in queries.split_whitespace() {
        let lookup = table.contains(&word.to_string());
        let verdict = if lookup.found { "Found" } else { "Not_Found" };
        let _ = writeln!(out, "{word} {verdict} {}", lookup.probes);
    }
    Ok(())
}

fn print_usage() {
    println!("wordprobe-hash: build a probing hash table from a word list and test queries.");
    println!();
    println!("Usage: wordprobe-hash <words-file> <query-file> <flag> [r-value]");
    println!();
    println!("  <words-file>   whitespace-delimited words, inserted as-is");
    println!("  <query-file>   whitespace-delimited words to look up");
    println!("  <flag>         probing strategy: linear, quadratic, or double");
    println!("  [r-value]      step modulus for double hashing (default 89)");
    println!();
    println!("Output: the statistics block, a blank line, then one line per");
    println!("query token: \"<word> Found <probes>\" or \"<word> Not_Found <probes>\".");
}
