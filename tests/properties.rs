//! Chunking-invariant determinism, universally quantified over partitions,
//! and an avalanche sanity check. `proptest`-based.

use harmonia::{ng, v2};
use proptest::prelude::*;

/// Splits `data` into pieces whose lengths are given by `cuts` (each taken
/// modulo the remaining length), covering arbitrary partitions rather than a
/// fixed chunk size.
fn split_by_cuts(data: &[u8], cuts: &[usize]) -> Vec<Vec<u8>> {
    let mut pieces = Vec::new();
    let mut rest = data;
    for &cut in cuts {
        if rest.is_empty() {
            break;
        }
        let take = (cut % rest.len()) + 1;
        let (piece, remainder) = rest.split_at(take);
        pieces.push(piece.to_vec());
        rest = remainder;
    }
    if !rest.is_empty() {
        pieces.push(rest.to_vec());
    }
    pieces
}

proptest! {
    /// For any partition of `data` into contiguous pieces, the incremental
    /// result equals the oneshot result.
    #[test]
    fn p1_chunking_invariance_v2(
        data in proptest::collection::vec(any::<u8>(), 0..2000),
        cuts in proptest::collection::vec(1usize..64, 0..40),
    ) {
        let whole = v2::oneshot(&data);

        let mut ctx = v2::Context::init();
        for piece in split_by_cuts(&data, &cuts) {
            ctx.update(&piece);
        }
        prop_assert_eq!(whole, ctx.finalize());
    }

    #[test]
    fn p1_chunking_invariance_ng(
        data in proptest::collection::vec(any::<u8>(), 0..2000),
        cuts in proptest::collection::vec(1usize..64, 0..40),
    ) {
        let whole = ng::oneshot(&data);

        let mut ctx = ng::Context::init();
        for piece in split_by_cuts(&data, &cuts) {
            ctx.update(&piece);
        }
        prop_assert_eq!(whole, ctx.finalize());
    }
}

/// Smoke test, not a security claim: mean Hamming distance between digests
/// of single-bit-flipped 64-byte messages should sit near 128/256 bits. Uses
/// a size a unit test can afford (64 messages x 64 flips) and widens the
/// tolerance accordingly, since the point is catching a badly broken
/// diffusion step, not estimating the true mean precisely.
#[test]
fn p6_avalanche_sanity_v2() {
    use rand::{Rng, SeedableRng};
    use rand::rngs::StdRng;

    let mut rng = StdRng::seed_from_u64(0xC0FF_EE42);
    let mut total_distance: u64 = 0;
    let mut samples: u64 = 0;

    for _ in 0..64 {
        let mut msg = [0u8; 64];
        rng.fill(&mut msg);
        let base = v2::oneshot(&msg);

        for bit in 0..64 {
            let mut flipped = msg;
            flipped[bit / 8] ^= 1 << (bit % 8);
            let other = v2::oneshot(&flipped);
            total_distance += hamming_distance(&base, &other);
            samples += 1;
        }
    }

    let mean = total_distance as f64 / samples as f64;
    assert!(
        (96.0..=160.0).contains(&mean),
        "avalanche mean Hamming distance {mean} outside sanity range"
    );
}

fn hamming_distance(a: &[u8; 32], b: &[u8; 32]) -> u64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x ^ y).count_ones() as u64)
        .sum()
}
