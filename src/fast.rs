//! HARMONIA-Fast: the reduced, 32-round variant. Combines V2's initial
//! chaining value and golden/complementary mixing with NG's message
//! schedule and per-round structural steps, run for 32 rounds instead of
//! 64.

use crate::framing::{self, Compressor, Context as GenericContext, DualState};
use crate::mixing::{complementary_mix, golden_mix};
use crate::ng::build_schedule;
use crate::structural::{cross_stream_diffusion, edge_protect_fixed};
use crate::tables::{FIBONACCI, FIBONACCI_WORD, PHI_CONSTANTS, RECIPROCAL_CONSTANTS};

/// Marker type selecting the Fast compression function for
/// `framing::Context`.
pub struct Fast;

/// The 32-round incremental context for this variant.
pub type Context = GenericContext<Fast>;

impl Compressor for Fast {
    const SCHEDULE_WORDS: usize = 32;

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

        for r in 0..32u32 {
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
                c[j] = c[j].wrapping_add(w[31 - rr]);
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
                c[i] = c[i].wrapping_add(w[31 - rr]);
            }

            if (r + 1) % 4 == 0 {
                cross_stream_diffusion(&mut g, &mut c);
            }
            if (r + 1) % 8 == 0 {
                edge_protect_fixed(&mut g, r);
                edge_protect_fixed(&mut c, r);
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
}

/// Hashes `data` and returns the raw 32-byte digest.
pub fn oneshot(data: &[u8]) -> [u8; 32] {
    framing::oneshot::<Fast>(data)
}

/// Hashes `data` and returns the lowercase hex digest.
pub fn hex(data: &[u8]) -> String {
    framing::hex::<Fast>(data)
}

/// `hex` written into a caller buffer, specialized to Fast.
pub fn hex_into(data: &[u8], out: &mut [u8]) -> Result<(), crate::error::Error> {
    framing::hex_into::<Fast>(data, out)
}
