//! Keyword list merging.

use rustc_hash::FxHashSet;

/// Concatenate keyword groups, dropping blanks and repeats.
///
/// Order is preserved and the first occurrence wins; comparison is on the
/// trimmed text.
pub fn merge_keywords<'a, I>(keywords: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = FxHashSet::default();
    keywords
        .into_iter()
        .map(str::trim)
        .filter(|k| !k.is_empty() && seen.insert(*k))
        .map(str::to_owned)
        .collect()
}
