//! # balance-engine
//!
//! Two read-only scans over integer sequences:
//!
//! - [`find_dip`] locates the last "dip", three consecutive elements
//!   `a, b, a` with `b < a`.
//! - [`longest_balanced_span`] locates the longest contiguous run summing to
//!   zero, preferring the latest one on ties.
//!
//! ```
//! use balance_engine::{find_dip, longest_balanced_span};
//!
//! let values = [3, 2, -2, 3, -4, 4, 3];
//! assert_eq!(find_dip(&values), values.len());
//!
//! let span = longest_balanced_span(&values).unwrap();
//! assert_eq!(span.range(), 4..6);
//! assert_eq!(span.as_slice(), &[-4, 4]);
//! ```

pub mod balanced;
pub mod dip;
pub mod input;
pub mod span;

// Re-export key types for easier usage
pub use balanced::{longest_balanced_span, longest_balanced_span_by_scan};
pub use dip::{find_dip, find_last_dip, is_dip};
pub use span::Span;
