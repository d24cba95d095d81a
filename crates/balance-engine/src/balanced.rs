//! Longest balanced (zero-sum) span search.
//!
//! Both searches share one tie-break: among zero-sum spans of maximal
//! length, the one starting at the highest index wins.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::span::Span;

/// Replaces `best` when `[begin, end)` is at least as long.
///
/// Using `>=` rather than `>` makes later candidates win ties.
fn keep_longer_or_later(best: &mut Option<(usize, usize)>, begin: usize, end: usize) {
    let replace = match *best {
        None => true,
        Some((b, e)) => end - begin >= e - b,
    };
    if replace {
        *best = Some((begin, end));
    }
}

/// Finds the longest contiguous span of `values` summing to zero.
///
/// Single pass over the prefix sums, remembering the first position at which
/// each prefix sum occurs. `[begin, end)` sums to zero exactly when the prefix
/// sums at `begin` and `end` agree.
///
/// A maximal-length span always starts at the first occurrence of its prefix
/// sum (an earlier occurrence would give a longer span), so scanning `end`
/// upwards and accepting ties leaves the maximal span with the greatest end,
/// which is also the one with the greatest start.
///
/// Returns `None` for an empty sequence or one with no zero-sum span.
#[must_use]
pub fn longest_balanced_span(values: &[i32]) -> Option<Span<'_>> {
    let mut first_seen: HashMap<i64, usize> = HashMap::with_capacity(values.len() + 1);
    first_seen.insert(0, 0);

    let mut prefix = 0i64;
    let mut best = None;
    for (index, &value) in values.iter().enumerate() {
        prefix += i64::from(value);
        let end = index + 1;
        match first_seen.entry(prefix) {
            Entry::Occupied(entry) => keep_longer_or_later(&mut best, *entry.get(), end),
            Entry::Vacant(entry) => {
                entry.insert(end);
            }
        }
    }

    best.map(|(begin, end)| Span::new(values, begin, end))
}

/// Reference search over every candidate span, O(n²).
///
/// Starts and ends are enumerated in increasing order with a running sum per
/// start, so each candidate costs O(1). Kept as the oracle for
/// [`longest_balanced_span`] and as a timing baseline.
#[must_use]
pub fn longest_balanced_span_by_scan(values: &[i32]) -> Option<Span<'_>> {
    let mut best = None;
    for begin in 0..values.len() {
        let mut sum = 0i64;
        for (offset, &value) in values[begin..].iter().enumerate() {
            sum += i64::from(value);
            if sum == 0 {
                keep_longer_or_later(&mut best, begin, begin + offset + 1);
            }
        }
    }

    best.map(|(begin, end)| Span::new(values, begin, end))
}
