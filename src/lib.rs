//! HARMONIA: a golden-ratio / quasicrystal family of 256-bit hash
//! constructions.
//!
//! Three related Merkle–Damgård / Davies–Meyer constructions share the same
//! scaffolding but differ in round count, rotation schedule, and message
//! schedule:
//!
//! - [`v2`] — HARMONIA v2.2, the original 64-round construction with
//!   variable quasicrystal rotations.
//! - [`fast`] — HARMONIA-Fast, a reduced 32-round construction that keeps
//!   v2's golden/complementary mixing but NG's per-round structural steps.
//! - [`ng`] — HARMONIA-NG, 32 rounds of fixed-rotation, ChaCha-style
//!   quarter-rounds, with a 4-way batch API ([`ng::batch`]).
//!
//! # Module overview
//!
//! - `primitives`
//!   Fixed-width rotation helpers, big-endian block parsing, and the
//!   [`primitives::Digest`] output type. No heap allocation, no
//!   variant-specific logic.
//!
//! - `tables`
//!   All compile-time constant tables (Fibonacci numbers, φ-derived round
//!   constants, the Fibonacci word, the quasicrystal rotation table, NG's
//!   rotation schedule, and the NG initial chaining values).
//!
//! - `quasiperiodic`
//!   `penrose_index` and the quasicrystal-rotation accessor `qc_rot`, built
//!   on top of `tables`.
//!
//! - `mixing`
//!   The golden mix, complementary mix, and ChaCha-style quarter-round ARX
//!   primitives shared by the variants.
//!
//! - `structural`
//!   Per-block structural steps that sit around the per-round mixing:
//!   exchange-quasi-periodic (V2), cross-stream diffusion (Fast/NG), and
//!   edge protection (all three).
//!
//! - `framing`
//!   The generic incremental [`framing::Context`], parameterized by a
//!   per-variant [`framing::Compressor`]: buffering, Merkle–Damgård
//!   padding, and one-shot/hex convenience, written once for all three
//!   variants.
//!
//! - `error`
//!   The two error kinds the library can produce (argument misuse,
//!   self-test mismatch).
//!
//! - `selftest`
//!   Embedded reference-vector self-tests, one entry point per variant.
//!
//! # Design goals
//!
//! - No heap allocation on the `update`/`final` hot path.
//! - Constant tables as compile-time rodata, never runtime-generated.
//! - Each variant differs from the others only in its `Compressor` impl and
//!   constant tables — the buffering, padding, and finalization plumbing is
//!   shared.
//!
//! This library reproduces the HARMONIA algorithm family; it makes no formal
//! cryptographic security claims.

pub mod error;
pub mod fast;
pub mod framing;
pub mod mixing;
pub mod ng;
pub mod primitives;
pub mod quasiperiodic;
pub mod selftest;
pub mod structural;
pub mod tables;
pub mod v2;
