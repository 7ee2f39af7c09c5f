//! NG's 4-way batch interface: hash four equal-length messages and return
//! four digests, semantically identical to four independent `oneshot`
//! calls.
//!
//! The natural home for this is a SIMD implementation (NEON/AVX2) with a
//! portable scalar fallback that acts as the source of truth. This module
//! ships only that scalar fallback, processing the four lanes
//! independently rather than interleaved — observably identical to a
//! lane-vectorized implementation, just without the throughput gain.

use crate::error::Error;
use crate::primitives::Digest;

use super::oneshot;

/// Hashes four equal-length messages, failing fast if their lengths differ.
pub fn batch4(msgs: [&[u8]; 4]) -> Result<[Digest; 4], Error> {
    let lens = [msgs[0].len(), msgs[1].len(), msgs[2].len(), msgs[3].len()];
    if lens.iter().any(|&l| l != lens[0]) {
        return Err(Error::LengthMismatch(lens));
    }

    Ok([
        Digest::new(oneshot(msgs[0])),
        Digest::new(oneshot(msgs[1])),
        Digest::new(oneshot(msgs[2])),
        Digest::new(oneshot(msgs[3])),
    ])
}
