//! Reproducible input sequences for tests, benchmarks and the timing harness.

use std::ops::RangeInclusive;

/// Seeded linear congruential generator.
///
/// Not suitable for anything but generating repeatable workloads.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    state: u64,
}

impl SequenceRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.state
    }

    /// Draws a value from `range`, inclusive at both ends.
    ///
    /// # Panics
    /// Panics if the range is empty.
    pub fn in_range(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (lo, hi) = (*range.start(), *range.end());
        assert!(lo <= hi, "empty value range {lo}..={hi}");
        let width = (i64::from(hi) - i64::from(lo) + 1) as u64;
        // low bits of an LCG cycle quickly; draw from the high half
        let offset = (self.next_u64() >> 32) % width;
        (i64::from(lo) + offset as i64) as i32
    }
}

/// Generates `size` values drawn uniformly from `range`.
pub fn random_sequence(size: usize, seed: u64, range: RangeInclusive<i32>) -> Vec<i32> {
    let mut rng = SequenceRng::new(seed);
    (0..size).map(|_| rng.in_range(range.clone())).collect()
}

/// Repeats `pattern` until `size` values have been produced.
///
/// # Panics
/// Panics if `pattern` is empty and `size` is not zero.
pub fn repeating_sequence(pattern: &[i32], size: usize) -> Vec<i32> {
    assert!(
        size == 0 || !pattern.is_empty(),
        "cannot repeat an empty pattern"
    );
    pattern.iter().copied().cycle().take(size).collect()
}
