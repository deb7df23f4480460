//! String helpers unrelated to the heap core.

use rustc_hash::FxHashSet;

/// Returns `s` with every character after its first occurrence removed.
///
/// Order of first occurrences is preserved. Comparison is per `char`, so
/// case matters.
///
/// # Example
///
/// ```
/// use heapkit::text::remove_duplicates;
///
/// assert_eq!(remove_duplicates("helloh"), "helo");
/// assert_eq!(remove_duplicates("Hello, my friend liam"), "Helo, myfrinda");
/// ```
pub fn remove_duplicates(s: &str) -> String {
    let mut seen = FxHashSet::default();
    s.chars().filter(|c| seen.insert(*c)).collect()
}
