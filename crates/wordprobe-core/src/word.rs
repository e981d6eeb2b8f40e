// ASCII word normalization for the spell-check pipeline.

/// Strip everything but ASCII letters and lowercase the rest.
///
/// The correction alphabet is `a`-`z`, so the dictionary and the document
/// words are normalized to that range before they ever reach a table. A
/// token made of digits or punctuation cleans to the empty string; callers
/// decide whether to skip it.
pub fn clean_word(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
