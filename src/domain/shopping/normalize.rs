//! Canonical matching key for free-text item names.

/// Derives the normalized name used to match items across lists.
///
/// Trims the input, collapses every whitespace run into one separator,
/// uppercases each character and joins the words with dashes:
/// `"  sweet  potato  "` becomes `"SWEET-POTATO"`.
pub fn normalize(name: &str) -> String {
    name.split_whitespace()
        .map(|word| word.chars().map(to_upper_invariant).collect::<String>())
        .collect::<Vec<_>>()
        .join("-")
}

/// Simple case mapping: a character whose uppercase form is longer than one
/// character (`ß`, `ŉ`) is kept as is.
fn to_upper_invariant(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}
