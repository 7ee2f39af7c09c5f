//! HARMONIA-NG: the 32-round, fixed-rotation, ChaCha-style variant, plus
//! its 4-way batch interface.

pub mod batch;

use crate::framing::{self, Compressor, Context as GenericContext, DualState};
use crate::mixing::quarter_round;
use crate::primitives::parse_block_be;
use crate::structural::{cross_stream_diffusion, edge_protect_fixed};
use crate::tables::{FIBONACCI, NG_INITIAL_C, NG_INITIAL_G, NG_ROUND_ROTATIONS, PHI_CONSTANTS, RECIPROCAL_CONSTANTS};

/// Marker type selecting the NG compression function for `framing::Context`.
pub struct NG;

/// The 32-round incremental context for this variant.
pub type Context = GenericContext<NG>;

pub(crate) fn build_schedule(block: &[u8; 64]) -> [u32; 32] {
    let mut w = [0u32; 32];
    parse_block_be(block, &mut w[..16]);

    for i in 16..32usize {
        let r1 = 7 + (i % 5) as u32;
        let r2 = 17 + (i % 4) as u32;

        let s0 = w[i - 15].rotate_right(r1) ^ w[i - 15].rotate_right(r1 + 11) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(r2) ^ w[i - 2].rotate_right(r2 + 2) ^ (w[i - 2] >> 10);

        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1)
            .wrapping_add(FIBONACCI[i % 12]);
    }

    w
}

/// One round of the NG round function, applied identically to `g` and `c`:
/// four quarter-rounds, columns then diagonals.
pub(crate) fn round(s: &mut [u32; 8], rot: [u32; 4]) {
    quarter_round(s, 0, 1, 2, 3, rot);
    quarter_round(s, 4, 5, 6, 7, rot);
    quarter_round(s, 0, 5, 2, 7, rot);
    quarter_round(s, 4, 1, 6, 3, rot);
}

pub(crate) fn compress_with(state: &mut DualState, block: &[u8; 64]) {
    let w = build_schedule(block);
    let mut g = state.g;
    let mut c = state.c;

    for r in 0..32usize {
        g[0] = g[0].wrapping_add(w[r]);
        c[0] = c[0].wrapping_add(w[31 - r]);

        g[4] ^= PHI_CONSTANTS[r & 15];
        c[4] ^= RECIPROCAL_CONSTANTS[r & 15];

        let rot = NG_ROUND_ROTATIONS[r];
        round(&mut g, rot);
        round(&mut c, rot);

        if (r + 1) % 4 == 0 {
            cross_stream_diffusion(&mut g, &mut c);
        }
        if (r + 1) % 8 == 0 {
            edge_protect_fixed(&mut g, r as u32);
            edge_protect_fixed(&mut c, r as u32);
        }
    }

    for idx in 0..8 {
        state.g[idx] = state.g[idx].wrapping_add(g[idx]);
        state.c[idx] = state.c[idx].wrapping_add(c[idx]);
    }
}

pub(crate) fn finalize_from(state: &DualState) -> [u8; 32] {
    let mut g = state.g;
    let mut c = state.c;

    edge_protect_fixed(&mut g, 32);
    edge_protect_fixed(&mut c, 33);

    let mut out = [0u8; 32];
    for i in 0..8usize {
        let rot = ((i as u32 * 3 + 5) % 16) + 1;
        let fused = g[i].rotate_right(rot) ^ c[i].rotate_left(rot);
        let fused = fused.wrapping_add(PHI_CONSTANTS[i]);
        out[i * 4..i * 4 + 4].copy_from_slice(&fused.to_be_bytes());
    }
    out
}

impl Compressor for NG {
    const SCHEDULE_WORDS: usize = 32;

    fn initial_state() -> DualState {
        DualState {
            g: NG_INITIAL_G,
            c: NG_INITIAL_C,
        }
    }

    fn compress(state: &mut DualState, block: &[u8; 64]) {
        compress_with(state, block);
    }

    fn finalize(state: &DualState) -> [u8; 32] {
        finalize_from(state)
    }
}

/// Hashes `data` and returns the raw 32-byte digest.
pub fn oneshot(data: &[u8]) -> [u8; 32] {
    framing::oneshot::<NG>(data)
}

/// Hashes `data` and returns the lowercase hex digest.
pub fn hex(data: &[u8]) -> String {
    framing::hex::<NG>(data)
}

/// `hex` written into a caller buffer, specialized to NG.
pub fn hex_into(data: &[u8], out: &mut [u8]) -> Result<(), crate::error::Error> {
    framing::hex_into::<NG>(data, out)
}
