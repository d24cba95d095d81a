use std::ops::Range;

/// A non-empty index range `[begin, end)` into a borrowed sequence.
///
/// Spans never copy the elements they cover: the borrow ties every span to
/// the sequence it was cut from, so it cannot outlive or observe a mutation
/// of that sequence.
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
    values: &'a [i32],
    begin: usize,
    end: usize,
}

impl<'a> Span<'a> {
    /// Creates a span over `values[begin..end]`.
    ///
    /// # Panics
    /// Panics unless `begin < end <= values.len()`.
    pub fn new(values: &'a [i32], begin: usize, end: usize) -> Self {
        assert!(
            begin < end,
            "span begin ({begin}) must come before end ({end})"
        );
        assert!(
            end <= values.len(),
            "span end ({end}) out of bounds (sequence len: {})",
            values.len()
        );
        Self { values, begin, end }
    }

    /// Inclusive start index.
    #[must_use]
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Exclusive end index.
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.begin..self.end
    }

    /// Number of elements covered, always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Always false; kept alongside `len` for slice-like ergonomics.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The covered elements, borrowed from the original sequence.
    #[must_use]
    pub fn as_slice(&self) -> &'a [i32] {
        &self.values[self.begin..self.end]
    }

    /// Sum of the covered elements, widened so it cannot overflow.
    #[must_use]
    pub fn sum(&self) -> i64 {
        self.as_slice().iter().map(|&v| i64::from(v)).sum()
    }
}

/// Spans are equal when they view the same sequence at the same positions.
impl PartialEq for Span<'_> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.values, other.values)
            && self.begin == other.begin
            && self.end == other.end
    }
}

impl Eq for Span<'_> {}
