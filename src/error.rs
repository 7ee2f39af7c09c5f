//! HARMONIA's two error kinds: argument misuse at the call site, and
//! self-test mismatch. Both are small, closed sets, so they're defined with
//! `thiserror` rather than a hand-rolled `impl Error`.

use thiserror::Error;

/// Argument misuse: the only error kind the core compression/framing logic
/// can produce. The compression and framing algorithms themselves are
/// total and cannot fail on their own.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("output buffer too small: need at least {needed} bytes, got {got}")]
    BufferTooSmall { needed: usize, got: usize },

    #[error("batch4 inputs must all have equal length, got lengths {0:?}")]
    LengthMismatch([usize; 4]),
}

/// Reported by `self_test()` when a computed digest does not match the
/// embedded reference vector for a given input.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("self-test mismatch for input {input:?}: expected {expected}, got {actual}")]
pub struct SelfTestError {
    pub input: Vec<u8>,
    pub expected: String,
    pub actual: String,
}

impl SelfTestError {
    pub fn new(input: &[u8], expected: &str, actual: &str) -> Self {
        let truncated: Vec<u8> = input.iter().copied().take(64).collect();
        SelfTestError {
            input: truncated,
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
