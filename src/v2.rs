//! HARMONIA v2.2: the original 64-round, variable-quasicrystal-rotation
//! construction.

use crate::framing::{self, Compressor, Context as GenericContext, DualState};
use crate::mixing::{complementary_mix, golden_mix};
use crate::primitives::parse_block_be;
use crate::quasiperiodic::{penrose_index, qc_rot};
use crate::structural::{edge_protect_v2, exchange_quasi_periodic};
use crate::tables::{FIBONACCI, FIBONACCI_WORD, PHI_CONSTANTS, RECIPROCAL_CONSTANTS};

/// Marker type selecting the V2 compression function for `framing::Context`.
pub struct V2;

/// The 64-round incremental context for this variant.
pub type Context = GenericContext<V2>;

fn build_schedule(block: &[u8; 64]) -> [u32; 64] {
    let mut w = [0u32; 64];
    parse_block_be(block, &mut w[..16]);

    for i in 16..64u32 {
        let idx = i as usize;
        w[idx] = w[idx - 2].rotate_right(qc_rot(i, 0))
            ^ w[idx - 7].rotate_left(qc_rot(i, 1))
            ^ (w[idx - 15] >> ((penrose_index(i) & 0xF) + 1))
            ^ w[idx - 16];
    }

    w
}

impl Compressor for V2 {
    const SCHEDULE_WORDS: usize = 64;

    fn initial_state() -> DualState {
        let mut g = [0u32; 8];
        let mut c = [0u32; 8];
        g.copy_from_slice(&PHI_CONSTANTS[..8]);
        c.copy_from_slice(&RECIPROCAL_CONSTANTS[..8]);
        DualState { g, c }
    }

    fn compress(state: &mut DualState, block: &[u8; 64]) {
        let w = build_schedule(block);
        let mut g = state.g;
        let mut c = state.c;

        for r in 0..64u32 {
            let rr = r as usize;
            let t = FIBONACCI_WORD[rr];
            let i = (r & 7) as usize;
            let j = ((r.wrapping_add(FIBONACCI[rr % 12])) & 7) as usize;

            let idx_i = i as u32;
            let idx_j = j as u32;

            if t == 1 {
                let (ga, gb) = golden_mix(g[i], g[j], PHI_CONSTANTS[(r & 15) as usize], r, idx_i);
                g[i] = ga;
                g[j] = gb;
                g[i] = g[i].wrapping_add(w[rr]);

                let (ca, cb) = golden_mix(
                    c[i],
                    c[j],
                    RECIPROCAL_CONSTANTS[(r & 15) as usize],
                    r,
                    idx_i,
                );
                c[i] = ca;
                c[j] = cb;
                c[j] = c[j].wrapping_add(w[63 - rr]);
            } else {
                let (ga, gb) =
                    complementary_mix(g[i], g[j], PHI_CONSTANTS[(r & 15) as usize], r, idx_i);
                g[i] = ga;
                g[j] = gb;
                g[j] = g[j].wrapping_add(w[rr]);

                let (cb, ca) = complementary_mix(
                    c[j],
                    c[i],
                    RECIPROCAL_CONSTANTS[(r & 15) as usize],
                    r,
                    idx_j,
                );
                c[j] = cb;
                c[i] = ca;
                c[i] = c[i].wrapping_add(w[63 - rr]);
            }

            exchange_quasi_periodic(&mut g, &mut c, r, t);

            if (r & 7) == 7 {
                edge_protect_v2(&mut g, r);
                edge_protect_v2(&mut c, r);
            }
        }

        for idx in 0..8 {
            state.g[idx] = state.g[idx].wrapping_add(g[idx]);
            state.c[idx] = state.c[idx].wrapping_add(c[idx]);
        }
    }

    fn finalize(state: &DualState) -> [u8; 32] {
        let mut g = state.g;
        let mut c = state.c;

        edge_protect_v2(&mut g, 64);
        edge_protect_v2(&mut c, 65);

        let mut out = [0u8; 32];
        for i in 0..8u32 {
            let idx = i as usize;
            let rot = qc_rot(i, i);
            let mut fused = g[idx].rotate_right(rot) ^ c[idx].rotate_left(rot);
            fused = fused
                .wrapping_add(PHI_CONSTANTS[idx])
                .wrapping_add(penrose_index(i).wrapping_mul(0x0101_0101));
            out[idx * 4..idx * 4 + 4].copy_from_slice(&fused.to_be_bytes());
        }
        out
    }
}

/// Hashes `data` and returns the raw 32-byte digest.
pub fn oneshot(data: &[u8]) -> [u8; 32] {
    framing::oneshot::<V2>(data)
}

/// Hashes `data` and returns the lowercase hex digest.
pub fn hex(data: &[u8]) -> String {
    framing::hex::<V2>(data)
}

/// Hashes `data` and writes the lowercase hex digest, NUL-terminated, into
/// a caller-supplied buffer.
pub fn hex_into(data: &[u8], out: &mut [u8]) -> Result<(), crate::error::Error> {
    framing::hex_into::<V2>(data, out)
}
