// Dictionary ingestion: whitespace-delimited word sources feeding a table.

use std::fs::File;
use std::hash::BuildHasher;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use wordprobe_core::word::clean_word;
use wordprobe_table::{ProbeTable, Prober};

/// Errors from reading word sources.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SpellError {
    fn io(path: &Path, source: io::Error) -> Self {
        SpellError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Insert every whitespace-delimited token of `reader` into `table` as-is.
///
/// Case and punctuation handling are the caller's concern here; see
/// [`insert_cleaned`] for the normalizing variant. Returns how many tokens
/// actually went in (duplicates count once).
pub fn insert_tokens<P, S, R>(
    table: &mut ProbeTable<String, P, S>,
    reader: R,
) -> io::Result<usize>
where
    P: Prober<String>,
    S: BuildHasher,
    R: BufRead,
{
    let mut inserted = 0;
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            if table.insert(token.to_string()) {
                inserted += 1;
            }
        }
    }
    Ok(inserted)
}

/// Insert tokens after ASCII cleanup.
///
/// Tokens that clean to the empty string (digits, bare punctuation) are
/// skipped. Returns how many cleaned words actually went in.
pub fn insert_cleaned<P, S, R>(
    table: &mut ProbeTable<String, P, S>,
    reader: R,
) -> io::Result<usize>
where
    P: Prober<String>,
    S: BuildHasher,
    R: BufRead,
{
    let mut inserted = 0;
    for line in reader.lines() {
        for token in line?.split_whitespace() {
            let word = clean_word(token);
            if word.is_empty() {
                continue;
            }
            if table.insert(word) {
                inserted += 1;
            }
        }
    }
    Ok(inserted)
}

/// Read `path` and insert its tokens as-is.
pub fn insert_tokens_from_path<P, S>(
    table: &mut ProbeTable<String, P, S>,
    path: &Path,
) -> Result<usize, SpellError>
where
    P: Prober<String>,
    S: BuildHasher,
{
    let file = File::open(path).map_err(|e| SpellError::io(path, e))?;
    insert_tokens(table, BufReader::new(file)).map_err(|e| SpellError::io(path, e))
}

/// Read `path` and insert its tokens after ASCII cleanup.
pub fn insert_cleaned_from_path<P, S>(
    table: &mut ProbeTable<String, P, S>,
    path: &Path,
) -> Result<usize, SpellError>
where
    P: Prober<String>,
    S: BuildHasher,
{
    let file = File::open(path).map_err(|e| SpellError::io(path, e))?;
    insert_cleaned(table, BufReader::new(file)).map_err(|e| SpellError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use wordprobe_table::LinearProber;

    #[test]
    fn raw_tokens_go_in_verbatim() {
        let mut table = ProbeTable::with_capacity(101, LinearProber);
        let n = insert_tokens(&mut table, Cursor::new("Apple banana Apple\ncherry")).unwrap();
        assert_eq!(n, 3);
        assert!(table.contains(&"Apple".to_string()).found);
        assert!(!table.contains(&"apple".to_string()).found);
    }

    #[test]
    fn cleaned_tokens_are_normalized_and_folded() {
        let mut table = ProbeTable::with_capacity(101, LinearProber);
        let n = insert_cleaned(&mut table, Cursor::new("Apple, BANANA!! 123 banana")).unwrap();
        assert_eq!(n, 2);
        assert!(table.contains(&"apple".to_string()).found);
        assert!(table.contains(&"banana".to_string()).found);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let mut table = ProbeTable::with_capacity(101, LinearProber);
        let err =
            insert_tokens_from_path(&mut table, Path::new("/no/such/wordlist.txt")).unwrap_err();
        assert!(err.to_string().contains("/no/such/wordlist.txt"));
    }
}
