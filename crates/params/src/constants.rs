// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Constants for the scheme presets
//!
//! This module contains all hardcoded values used by the measurement
//! routines. Centralizing these values keeps the per-scheme setups in one
//! place; the Paillier setup has no tunables beyond its security level and
//! carries its literal in the routine itself.

/// CKKS preset (approximate arithmetic, packed vectors)
pub mod ckks {
    /// Polynomial modulus degree. A single ciphertext packs up to
    /// `DEGREE / 2` slots, which covers the full cardinality sweep.
    pub const DEGREE: usize = 8192;

    /// RNS coefficient-modulus chain targeting [60, 40, 40, 60] bits.
    /// All primes satisfy p ≡ 1 (mod 2·DEGREE) so negacyclic NTTs exist.
    pub const COEFF_MODULUS: &[u64] = &[
        0x0fff_ffff_fffc_0001, // 60-bit
        0x00ff_ffe8_0001,      // 40-bit
        0x00ff_ffc4_0001,      // 40-bit
        0x0fff_ffff_ff84_0001, // 60-bit
    ];

    /// Global scale is 2^SCALE_BITS.
    pub const SCALE_BITS: u32 = 40;

    /// Secret key Hamming weight.
    pub const HAMMING_WEIGHT: usize = 64;

    /// Standard deviation of the encryption error distribution.
    pub const ERROR_STD: f64 = 3.2;
}

/// BGV preset (exact arithmetic, 128-bit security)
pub mod bgv {
    /// Ring dimension (2^13).
    pub const DEGREE: usize = 8192;

    /// Plaintext modulus t = 2^16 + 1, NTT-friendly for this ring.
    pub const PLAINTEXT_MODULUS: u64 = 65537;

    /// Number of ciphertext modulus levels.
    pub const LEVELS: usize = 3;

    /// Bit size of each ciphertext modulus limb.
    pub const MODULUS_BITS: u8 = 50;

    /// Error distribution mean and standard deviation.
    pub const MU: f64 = 0.0;
    pub const SIGMA: f64 = 3.19;
}

/// BFV preset (exact arithmetic, ring dimension 2^14)
pub mod bfv {
    /// Ring dimension (2^14).
    pub const DEGREE: usize = 16384;

    /// 20-bit plaintext modulus 3·2^18 + 1, NTT-friendly for this ring.
    pub const PLAINTEXT_MODULUS: u64 = 786_433;

    /// Bit sizes of the ciphertext coefficient moduli.
    pub const MODULI_SIZES: &[usize] = &[62, 62, 62, 62];
}
