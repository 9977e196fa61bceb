// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::constants::bfv;
use crate::errors::PresetError;
use fhe::bfv::{BfvParameters, BfvParametersBuilder};
use std::sync::Arc;

/// Builds BFV parameters from explicit values.
///
/// # Arguments
///
/// * `degree` - Ring dimension, must be a power of two.
/// * `plaintext_modulus` - Plaintext modulus t.
/// * `moduli_sizes` - Bit sizes of the ciphertext coefficient moduli.
pub fn build_bfv_params(
    degree: usize,
    plaintext_modulus: u64,
    moduli_sizes: &[usize],
) -> Result<BfvParameters, PresetError> {
    if !degree.is_power_of_two() {
        return Err(PresetError::InvalidPreset {
            message: format!("degree {degree} is not a power of two"),
        });
    }

    Ok(BfvParametersBuilder::new()
        .set_degree(degree)
        .set_plaintext_modulus(plaintext_modulus)
        .set_moduli_sizes(moduli_sizes)
        .build()?)
}

/// Builds BFV parameters from explicit values, wrapped in an `Arc`.
pub fn build_bfv_params_arc(
    degree: usize,
    plaintext_modulus: u64,
    moduli_sizes: &[usize],
) -> Result<Arc<BfvParameters>, PresetError> {
    Ok(Arc::new(build_bfv_params(
        degree,
        plaintext_modulus,
        moduli_sizes,
    )?))
}

/// Builds the BFV preset used by the benchmark sweep.
pub fn preset_bfv_params_arc() -> Result<Arc<BfvParameters>, PresetError> {
    build_bfv_params_arc(bfv::DEGREE, bfv::PLAINTEXT_MODULUS, bfv::MODULI_SIZES)
}
