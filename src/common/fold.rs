//! Case-folding comparisons.
//!
//! Every title comparison in the crate (insert, delete, lookup) and every
//! keyword match goes through these helpers, so "Apple" and "apple" are the
//! same key everywhere.

use std::cmp::Ordering;

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars().flat_map(char::to_lowercase)
}

/// Lexicographic order of the lowercased strings.
pub fn fold_cmp(a: &str, b: &str) -> Ordering {
    folded(a).cmp(folded(b))
}

pub fn eq_folded(a: &str, b: &str) -> bool {
    fold_cmp(a, b) == Ordering::Equal
}

/// Substring test ignoring case on both sides.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    contains_prefolded(haystack, &needle.to_lowercase())
}

/// Same as [`contains_folded`] for a needle that is already lowercased, so a
/// scan folds its keyword once instead of once per record.
pub(crate) fn contains_prefolded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle)
}
