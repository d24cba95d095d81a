// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
use balance_engine::input::{random_sequence, repeating_sequence};

pub const SEED: u64 = 0;

#[allow(dead_code)]
pub fn random_input(size: usize) -> Vec<i32> {
    random_sequence(size, SEED, -100..=100)
}

/// Small values make zero-sum spans and dips frequent.
#[allow(dead_code)]
pub fn dense_input(size: usize) -> Vec<i32> {
    random_sequence(size, SEED, -3..=3)
}

#[allow(dead_code)]
pub fn dip_free_input(size: usize) -> Vec<i32> {
    repeating_sequence(&[2, 4, 6, 8], size)
}
