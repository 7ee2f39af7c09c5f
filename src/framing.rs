//! Shared Merkle–Damgård / Davies–Meyer scaffolding.
//!
//! A single generic context differs between variants only in its
//! compression function and constant tables. `Compressor` is that seam —
//! each variant module (`v2`, `fast`, `ng`) implements it once, and
//! `Context<C>` supplies the buffering, padding, and one-shot/hex
//! convenience identically for all three, instead of duplicating the
//! Merkle–Damgård plumbing by hand in each variant.

use core::marker::PhantomData;

use crate::error::Error;
use crate::primitives::Digest;

/// The dual 8-word state stream: `g` ("golden") and `c` ("complementary").
/// 512 bits of total internal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DualState {
    pub g: [u32; 8],
    pub c: [u32; 8],
}

/// The per-variant seam: a compression function plus its initial chaining
/// value and finalization/fusion step. `BLOCK_WORDS` is the message
/// schedule length (64 for V2, 32 for Fast/NG) — it has no effect on
/// framing itself, but each variant records it here since it is otherwise
/// only visible inside `compress`.
pub trait Compressor {
    const SCHEDULE_WORDS: usize;

    /// Initial chaining value.
    fn initial_state() -> DualState;

    /// Davies–Meyer compression of one 64-byte block into `state`: expand
    /// the message schedule, run the round function, and add the old state
    /// back into the new one.
    fn compress(state: &mut DualState, block: &[u8; 64]);

    /// Fuse the two streams into the final 32-byte big-endian digest.
    fn finalize(state: &DualState) -> [u8; 32];
}

/// The incremental hashing context. Buffers at most one block; `update`/
/// `finalize` never allocate.
pub struct Context<C: Compressor> {
    state: DualState,
    buffer: [u8; 64],
    buffer_len: usize,
    total_len: u64,
    _variant: PhantomData<C>,
}

impl<C: Compressor> Context<C> {
    /// Chaining set to the variant IV, buffer cleared, `total_len` zeroed.
    pub fn init() -> Self {
        Context {
            state: C::initial_state(),
            buffer: [0u8; 64],
            buffer_len: 0,
            total_len: 0,
            _variant: PhantomData,
        }
    }

    /// Appends `data` to the absorbed stream. Never fails — the algorithm
    /// is total.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);

        if self.buffer_len > 0 {
            let need = 64 - self.buffer_len;
            let take = need.min(data.len());
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(&data[..take]);
            self.buffer_len += take;
            data = &data[take..];

            if self.buffer_len == 64 {
                let block = self.buffer;
                C::compress(&mut self.state, &block);
                self.buffer_len = 0;
            }
        }

        while data.len() >= 64 {
            let block: [u8; 64] = data[..64].try_into().expect("slice is exactly 64 bytes");
            C::compress(&mut self.state, &block);
            data = &data[64..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffer_len = data.len();
        }
    }

    /// Classic Merkle–Damgård padding (0x80, zeros, big-endian 64-bit bit
    /// length), then writes the 32-byte digest into `out`. After this call
    /// the context is logically consumed.
    pub fn finalize_into(self, out: &mut [u8]) -> Result<(), Error> {
        if out.len() < 32 {
            return Err(Error::BufferTooSmall {
                needed: 32,
                got: out.len(),
            });
        }

        let mut state = self.state;
        let rem = self.buffer_len;
        let bit_len = self.total_len.wrapping_mul(8);

        let mut block = [0u8; 64];
        block[..rem].copy_from_slice(&self.buffer[..rem]);
        block[rem] = 0x80;

        if rem > 55 {
            C::compress(&mut state, &block);
            let mut tail = [0u8; 64];
            tail[56..64].copy_from_slice(&bit_len.to_be_bytes());
            C::compress(&mut state, &tail);
        } else {
            block[56..64].copy_from_slice(&bit_len.to_be_bytes());
            C::compress(&mut state, &block);
        }

        let digest = C::finalize(&state);
        out[..32].copy_from_slice(&digest);
        Ok(())
    }

    /// Convenience over `finalize_into` that returns the digest directly;
    /// cannot fail since the destination is a fixed-size array.
    pub fn finalize(self) -> [u8; 32] {
        let mut out = [0u8; 32];
        self.finalize_into(&mut out)
            .expect("a 32-byte buffer always satisfies finalize_into");
        out
    }
}

/// Equivalent to `init` + `update` + `finalize`.
pub fn oneshot<C: Compressor>(data: &[u8]) -> [u8; 32] {
    let mut ctx = Context::<C>::init();
    ctx.update(data);
    ctx.finalize()
}

/// 64 lowercase hex characters, as an owned `String`. See `hex_into` for the
/// caller-buffer form (64 hex chars plus a trailing NUL).
pub fn hex<C: Compressor>(data: &[u8]) -> String {
    Digest::new(oneshot::<C>(data)).to_hex()
}

/// Writes 64 lowercase hex characters followed by a NUL terminator into
/// `out`, which must be at least 65 bytes.
pub fn hex_into<C: Compressor>(data: &[u8], out: &mut [u8]) -> Result<(), Error> {
    if out.len() < 65 {
        return Err(Error::BufferTooSmall {
            needed: 65,
            got: out.len(),
        });
    }
    let s = hex::<C>(data);
    out[..64].copy_from_slice(s.as_bytes());
    out[64] = 0;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl Compressor for Identity {
        const SCHEDULE_WORDS: usize = 16;

        fn initial_state() -> DualState {
            DualState {
                g: [0; 8],
                c: [0; 8],
            }
        }

        fn compress(state: &mut DualState, block: &[u8; 64]) {
            for (i, word) in block.chunks_exact(4).enumerate().take(8) {
                state.g[i] ^= u32::from_be_bytes(word.try_into().unwrap());
            }
            for (i, word) in block.chunks_exact(4).enumerate().skip(8).take(8) {
                state.c[i - 8] ^= u32::from_be_bytes(word.try_into().unwrap());
            }
        }

        fn finalize(state: &DualState) -> [u8; 32] {
            let mut out = [0u8; 32];
            for (i, w) in state.g.iter().enumerate() {
                out[i * 4..i * 4 + 4].copy_from_slice(&w.to_be_bytes());
            }
            out
        }
    }

    #[test]
    fn chunking_does_not_change_the_result() {
        let data: Vec<u8> = (0u8..200).collect();

        let whole = oneshot::<Identity>(&data);

        let mut ctx = Context::<Identity>::init();
        for chunk in data.chunks(7) {
            ctx.update(chunk);
        }
        let chunked = ctx.finalize();

        assert_eq!(whole, chunked);
    }

    #[test]
    fn finalize_into_rejects_short_buffer() {
        let ctx = Context::<Identity>::init();
        let mut out = [0u8; 16];
        assert_eq!(
            ctx.finalize_into(&mut out),
            Err(Error::BufferTooSmall {
                needed: 32,
                got: 16
            })
        );
    }

    #[test]
    fn hex_into_rejects_short_buffer() {
        let mut out = [0u8; 10];
        assert_eq!(
            hex_into::<Identity>(b"abc", &mut out),
            Err(Error::BufferTooSmall {
                needed: 65,
                got: 10
            })
        );
    }

    #[test]
    fn hex_into_nul_terminates() {
        let mut out = [0xFFu8; 65];
        hex_into::<Identity>(b"abc", &mut out).unwrap();
        assert_eq!(out[64], 0);
        assert!(out[..64].iter().all(|b| b.is_ascii_hexdigit()));
    }
}
