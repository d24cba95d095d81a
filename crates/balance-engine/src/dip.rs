//! Dip detection.
//!
//! A dip is three consecutive elements `(a, b, c)` where `a == c` and the
//! middle element is strictly smaller, e.g. `8, 5, 8`.

/// Number of elements in a dip.
pub const DIP_LEN: usize = 3;

/// Returns true if `(a, b, c)` forms a dip.
#[must_use]
pub fn is_dip(a: i32, b: i32, c: i32) -> bool {
    a == c && b < a
}

/// Returns the start index of the last dip in `values`.
///
/// When there is no dip (including every input shorter than three elements)
/// the result is `values.len()`, the one-past-the-end position.
///
/// Every window is examined and later matches overwrite earlier ones, so
/// overlapping dips are each considered and the highest index wins.
#[must_use]
pub fn find_dip(values: &[i32]) -> usize {
    let mut found = values.len();
    for (index, window) in values.windows(DIP_LEN).enumerate() {
        if is_dip(window[0], window[1], window[2]) {
            found = index;
        }
    }
    found
}

/// [`find_dip`] with the past-the-end sentinel mapped to `None`.
#[must_use]
pub fn find_last_dip(values: &[i32]) -> Option<usize> {
    let index = find_dip(values);
    (index < values.len()).then_some(index)
}
