//! Constant tables shared by (or specific to) the HARMONIA variants.
//!
//! These values are effectively part of the wire format: changing any of
//! them changes every digest this crate produces. They live as plain
//! `static` arrays, placed at compile time rather than generated at
//! startup, next to the round logic that consumes them.
//!
//! The exact derivation of `QUASICRYSTAL_ROTATIONS`, `PHI_CONSTANTS`,
//! `RECIPROCAL_CONSTANTS` and the NG rotation schedule is not reproduced
//! from an external reference here; see `DESIGN.md` for how each was
//! generated. `PENROSE_TABLE` is the one table whose values follow directly
//! from a closed-form definition (`floor(n*phi) xor floor(n*phi^2) mod
//! 32`), so it is reproduced exactly, precomputed into a lookup table (see
//! `quasiperiodic::penrose_index`) rather than computed with
//! floating-point at call time.

/// First 12 Fibonacci numbers, `FIBONACCI[0] == 1`. Indexed modulo 12 by
/// the message schedule, structural steps, and compression rounds.
pub static FIBONACCI: [u32; 12] = [1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144];

/// Golden-ratio-derived round constants, one set per round (indexed modulo
/// 16) for the golden stream.
pub static PHI_CONSTANTS: [u32; 16] = [
    0x9E37_79B9, 0x3C6E_F372, 0xDAA6_6D2C, 0x78DD_E6E5, 0x1715_609F, 0xB54C_DA58, 0x5384_5412,
    0xF1BB_CDCB, 0x8FF3_4785, 0x2E2A_C13E, 0xCC62_3AF8, 0x6A99_B4B1, 0x08D1_2E6B, 0xA708_A824,
    0x4540_21DE, 0xE377_9B97,
];

/// 1/phi-derived constants for the complementary stream. Derived as the
/// bitwise complement of `PHI_CONSTANTS` — see `DESIGN.md` for why a direct
/// `1/phi` scaling collides with `PHI_CONSTANTS` (since `phi = 1 + 1/phi`,
/// `frac(n*phi)` and `frac(n/phi)` are identical for integer `n`).
pub static RECIPROCAL_CONSTANTS: [u32; 16] = [
    0x61C8_8646, 0xC391_0C8D, 0x2559_92D3, 0x8722_191A, 0xE8EA_9F60, 0x4AB3_25A7, 0xAC7B_ABED,
    0x0E44_3234, 0x700C_B87A, 0xD1D5_3EC1, 0x339D_C507, 0x9566_4B4E, 0xF72E_D194, 0x58F7_57DB,
    0xBABF_DE21, 0x1C88_6468,
];

/// The Fibonacci word (substitution A -> AB, B -> A, starting from "A"),
/// truncated to 64 symbols; `1` encodes `A` (golden/"t=1" round), `0`
/// encodes `B` (complementary/"t=0" round).
pub static FIBONACCI_WORD: [u8; 64] = [
    1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1,
    1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1, 0, 1, 1, 0, 1, 0, 1, 1,
];

/// Penrose-index lookup table, covering every `n` the message schedule,
/// exchange-quasi-periodic step and finalization ever query (`n` stays
/// below 96 across all three variants).
pub static PENROSE_TABLE: [u8; 128] = [
    0, 3, 6, 3, 12, 5, 6, 25, 24, 25, 10, 13, 12, 23, 18, 31, 16, 23, 18, 15, 20, 23, 26, 25, 24,
    9, 14, 13, 4, 5, 30, 3, 0, 3, 14, 3, 4, 27, 30, 25, 8, 9, 14, 21, 20, 29, 18, 23, 16, 15, 18,
    23, 28, 31, 26, 23, 8, 9, 10, 5, 28, 29, 6, 1, 0, 3, 6, 3, 28, 27, 6, 11, 8, 9, 22, 29, 28, 21,
    18, 17, 16, 23, 18, 31, 28, 23, 10, 15, 8, 25, 26, 29, 4, 5, 14, 1, 0, 1, 30, 3, 4, 11, 14, 11,
    24, 27, 30, 21, 20, 13, 14, 17, 16, 17, 18, 23, 20, 15, 10, 23, 24, 31, 26, 5, 12, 13, 2, 1,
];

/// Quasicrystal rotation table, `QUASICRYSTAL_ROTATIONS[r % 66][i % 10]`,
/// values in `1..=21`. A compile-time constant rather than something
/// generated at run time, so every rotation amount is reproducible bit for
/// bit regardless of host floating-point behavior.
pub static QUASICRYSTAL_ROTATIONS: [[u8; 10]; 66] = [
    [13, 5, 18, 10, 2, 15, 7, 20, 12, 4],
    [17, 9, 1, 14, 6, 19, 11, 3, 16, 8],
    [21, 13, 5, 18, 10, 2, 15, 7, 20, 12],
    [4, 17, 9, 1, 14, 6, 19, 11, 3, 16],
    [8, 21, 13, 5, 18, 10, 1, 14, 6, 19],
    [11, 3, 16, 8, 21, 13, 5, 18, 10, 2],
    [15, 7, 20, 12, 4, 17, 9, 1, 14, 6],
    [19, 11, 3, 16, 8, 21, 13, 5, 18, 10],
    [2, 15, 7, 20, 12, 4, 17, 9, 1, 14],
    [6, 19, 11, 2, 15, 7, 20, 12, 4, 17],
    [9, 1, 14, 6, 19, 11, 3, 16, 8, 21],
    [13, 5, 18, 10, 2, 15, 7, 20, 12, 4],
    [17, 9, 1, 14, 6, 19, 11, 3, 16, 8],
    [21, 13, 5, 18, 10, 2, 15, 7, 20, 12],
    [3, 16, 8, 21, 13, 5, 18, 10, 2, 15],
    [7, 20, 12, 4, 17, 9, 1, 14, 6, 19],
    [11, 3, 16, 8, 21, 13, 5, 18, 10, 2],
    [15, 7, 20, 12, 4, 17, 9, 1, 14, 6],
    [19, 11, 3, 16, 8, 21, 13, 4, 17, 9],
    [1, 14, 6, 19, 11, 3, 16, 8, 21, 13],
    [5, 18, 10, 2, 15, 7, 20, 12, 4, 17],
    [9, 1, 14, 6, 19, 11, 3, 16, 8, 21],
    [13, 5, 18, 10, 2, 15, 7, 20, 12, 4],
    [17, 9, 1, 14, 5, 18, 10, 2, 15, 7],
    [20, 12, 4, 17, 9, 1, 14, 6, 19, 11],
    [3, 16, 8, 21, 13, 5, 18, 10, 2, 15],
    [7, 20, 12, 4, 17, 9, 1, 14, 6, 19],
    [11, 3, 16, 8, 21, 13, 5, 18, 10, 2],
    [15, 6, 19, 11, 3, 16, 8, 21, 13, 5],
    [18, 10, 2, 15, 7, 20, 12, 4, 17, 9],
    [1, 14, 6, 19, 11, 3, 16, 8, 21, 13],
    [5, 18, 10, 2, 15, 7, 20, 12, 4, 17],
    [9, 1, 14, 6, 19, 11, 3, 16, 7, 20],
    [12, 4, 17, 9, 1, 14, 6, 19, 11, 3],
    [16, 8, 21, 13, 5, 18, 10, 2, 15, 7],
    [20, 12, 4, 17, 9, 1, 14, 6, 19, 11],
    [3, 16, 8, 21, 13, 5, 18, 10, 2, 15],
    [7, 20, 12, 4, 17, 8, 21, 13, 5, 18],
    [10, 2, 15, 7, 20, 12, 4, 17, 9, 1],
    [14, 6, 19, 11, 3, 16, 8, 21, 13, 5],
    [18, 10, 2, 15, 7, 20, 12, 4, 17, 9],
    [1, 14, 6, 19, 11, 3, 16, 8, 21, 13],
    [5, 18, 9, 1, 14, 6, 19, 11, 3, 16],
    [8, 21, 13, 5, 18, 10, 2, 15, 7, 20],
    [12, 4, 17, 9, 1, 14, 6, 19, 11, 3],
    [16, 8, 21, 13, 5, 18, 10, 2, 15, 7],
    [20, 12, 4, 17, 9, 1, 14, 6, 19, 10],
    [2, 15, 7, 20, 12, 4, 17, 9, 1, 14],
    [6, 19, 11, 3, 16, 8, 21, 13, 5, 18],
    [10, 2, 15, 7, 20, 12, 4, 17, 9, 1],
    [14, 6, 19, 11, 3, 16, 8, 21, 13, 5],
    [18, 10, 2, 15, 7, 20, 11, 3, 16, 8],
    [21, 13, 5, 18, 10, 2, 15, 7, 20, 12],
    [4, 17, 9, 1, 14, 6, 19, 11, 3, 16],
    [8, 21, 13, 5, 18, 10, 2, 15, 7, 20],
    [12, 4, 17, 9, 1, 14, 6, 19, 11, 3],
    [16, 8, 21, 12, 4, 17, 9, 1, 14, 6],
    [19, 11, 3, 16, 8, 21, 13, 5, 18, 10],
    [2, 15, 7, 20, 12, 4, 17, 9, 1, 14],
    [6, 19, 11, 3, 16, 8, 21, 13, 5, 18],
    [10, 2, 15, 7, 20, 12, 4, 17, 9, 1],
    [13, 5, 18, 10, 2, 15, 7, 20, 12, 4],
    [17, 9, 1, 14, 6, 19, 11, 3, 16, 8],
    [21, 13, 5, 18, 10, 2, 15, 7, 20, 12],
    [4, 17, 9, 1, 14, 6, 19, 11, 3, 16],
    [8, 21, 13, 5, 18, 10, 2, 14, 6, 19],
];

/// NG round rotation schedule, `NG_ROUND_ROTATIONS[r]` = 4 quarter-round
/// rotation amounts, each in `5..=16`, one entry per round.
pub static NG_ROUND_ROTATIONS: [[u32; 4]; 32] = [
    [11, 7, 14, 10],
    [5, 12, 8, 15],
    [11, 6, 13, 9],
    [5, 12, 7, 14],
    [10, 6, 13, 8],
    [15, 11, 7, 14],
    [9, 5, 12, 8],
    [15, 10, 6, 13],
    [9, 5, 11, 7],
    [14, 10, 6, 12],
    [8, 15, 11, 7],
    [13, 9, 5, 12],
    [8, 14, 10, 6],
    [13, 9, 15, 11],
    [7, 14, 10, 5],
    [12, 8, 15, 11],
    [6, 13, 9, 5],
    [12, 7, 14, 10],
    [6, 13, 8, 15],
    [11, 7, 14, 9],
    [5, 12, 8, 15],
    [10, 6, 13, 9],
    [5, 11, 7, 14],
    [10, 6, 12, 8],
    [15, 11, 7, 13],
    [9, 5, 12, 8],
    [14, 10, 6, 13],
    [9, 15, 11, 7],
    [14, 10, 5, 12],
    [8, 15, 11, 6],
    [13, 9, 5, 11],
    [7, 14, 10, 6],
];

/// NG initial chaining value, golden stream: fractional parts of the square
/// roots of the first 8 primes, the same IV construction SHA-256 uses.
pub static NG_INITIAL_G: [u32; 8] = [
    0x6A09_E667, 0xBB67_AE85, 0x3C6E_F372, 0xA54F_F53A, 0x510E_527F, 0x9B05_688C, 0x1F83_D9AB,
    0x5BE0_CD19,
];

/// NG initial chaining value, complementary stream.
pub static NG_INITIAL_C: [u32; 8] = [
    0x9E37_79B9, 0x7F4A_7C15, 0xF39C_C060, 0x5CED_C834, 0x2FE1_2A6D, 0x4786_B47C, 0xC8A5_E2F0,
    0x3A8D_6B7F,
];
