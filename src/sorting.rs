//! # Result Sorting Module
//!
//! Three independent orderings over search results. Each takes a slice and
//! returns a freshly ordered `Vec`, leaving the input untouched.
//!
//! | Key          | Algorithm  | Order                       | Stable |
//! |--------------|------------|-----------------------------|--------|
//! | `Time`       | quicksort  | shortest first              | no     |
//! | `Complexity` | shell sort | light → medium → hard       | no     |
//! | `Match`      | merge sort | highest percentage first    | yes    |

use log::debug;
use std::fmt;

use crate::search::MatchResult;

/// Which ordering to apply to a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    Time,
    Complexity,
    #[default]
    Match,
}

impl SortKey {
    /// Interpret a user-supplied sort key
    ///
    /// Never fails: anything unrecognised selects [`SortKey::Match`].
    ///
    /// ```rust
    /// use recipe_finder::sorting::SortKey;
    ///
    /// assert_eq!(SortKey::parse("time"), SortKey::Time);
    /// assert_eq!(SortKey::parse("Complexity"), SortKey::Complexity);
    /// assert_eq!(SortKey::parse("alphabetical"), SortKey::Match);
    /// ```
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "time" | "время" => SortKey::Time,
            "complexity" | "сложность" => SortKey::Complexity,
            "match" | "percentage" | "совпадение" => SortKey::Match,
            other => {
                debug!("Unrecognised sort key '{}', sorting by match percentage", other);
                SortKey::Match
            }
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Time => "time",
            SortKey::Complexity => "complexity",
            SortKey::Match => "match",
        };
        f.pad(name)
    }
}

/// Order results with the algorithm selected by `key`
pub fn sort_results(results: &[MatchResult], key: SortKey) -> Vec<MatchResult> {
    debug!("Sorting {} results by {}", results.len(), key);
    match key {
        SortKey::Time => quick_sort_by_time(results),
        SortKey::Complexity => shell_sort_by_complexity(results),
        SortKey::Match => merge_sort_by_match(results),
    }
}

/// Quicksort by preparation time, ascending
///
/// The pivot is the time of the middle element. Elements are split into
/// strictly-less, equal and strictly-greater groups; only the outer groups
/// are sorted further. Recursion depth is bounded by the number of distinct
/// times.
pub fn quick_sort_by_time(results: &[MatchResult]) -> Vec<MatchResult> {
    if results.len() <= 1 {
        return results.to_vec();
    }

    let pivot = results[results.len() / 2].time;
    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for result in results {
        match result.time.total_cmp(&pivot) {
            std::cmp::Ordering::Less => less.push(result.clone()),
            std::cmp::Ordering::Equal => equal.push(result.clone()),
            std::cmp::Ordering::Greater => greater.push(result.clone()),
        }
    }

    let mut sorted = quick_sort_by_time(&less);
    sorted.extend(equal);
    sorted.extend(quick_sort_by_time(&greater));
    sorted
}

/// Shell sort by complexity rank, light first
///
/// Gap sequence starts at half the length and halves down to 1.
pub fn shell_sort_by_complexity(results: &[MatchResult]) -> Vec<MatchResult> {
    let mut sorted = results.to_vec();
    let n = sorted.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            let mut j = i;
            while j >= gap && sorted[j - gap].complexity.rank() > sorted[j].complexity.rank() {
                sorted.swap(j, j - gap);
                j -= gap;
            }
        }
        gap /= 2;
    }

    sorted
}

/// Merge sort by match percentage, descending
///
/// Stable: on equal percentages the element from the left half wins, so
/// equal results keep their input order.
pub fn merge_sort_by_match(results: &[MatchResult]) -> Vec<MatchResult> {
    if results.len() <= 1 {
        return results.to_vec();
    }

    let mid = results.len() / 2;
    let left = merge_sort_by_match(&results[..mid]);
    let right = merge_sort_by_match(&results[mid..]);
    merge_descending(left, right)
}

fn merge_descending(left: Vec<MatchResult>, right: Vec<MatchResult>) -> Vec<MatchResult> {
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.percentage >= r.percentage,
            _ => break,
        };
        let next = if take_left { left.next() } else { right.next() };
        merged.extend(next);
    }

    merged.extend(left);
    merged.extend(right);
    merged
}
