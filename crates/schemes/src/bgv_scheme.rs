// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! BGV backend (exact arithmetic, per-value encode/encrypt).

use crate::data::synthetic_integers;
use crate::errors::SchemeError;
use crate::measure::{millis_since, Measurement, SchemeKind};
use crate::progress::ProgressMeter;
use crate::scheme::SchemeBench;
use crate::size::shallow_size_of_vec;
use ::bgv::BGV;
use hebench_params::constants::bgv;
use std::time::Instant;
use tracing::debug;

/// Measures BGV through the `bgv` crate.
///
/// The library packs a full ring's worth of slots per ciphertext; to match
/// the per-value contract each input value is placed in slot zero of its
/// own message vector.
pub struct BgvScheme;

impl BgvScheme {
    fn context() -> BGV {
        BGV::new(
            bgv::DEGREE,
            bgv::LEVELS,
            bgv::MODULUS_BITS,
            bgv::MU,
            bgv::SIGMA,
            bgv::PLAINTEXT_MODULUS,
        )
    }
}

impl SchemeBench for BgvScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Bgv
    }

    fn measure(&self, n: usize) -> Result<Measurement, SchemeError> {
        let context = Self::context();
        let keys = context.key_gen();

        let data = synthetic_integers(n);
        let plaintext_bytes = shallow_size_of_vec(&data);

        let meter = ProgressMeter::new("BGV", "encrypt", n);
        let start = Instant::now();
        let mut ciphertexts = Vec::with_capacity(n);
        for (i, &value) in data.iter().enumerate() {
            let mut message = vec![0u64; bgv::DEGREE];
            message[0] = value;
            ciphertexts.push(context.encrypt(&message, &keys.pk));
            meter.tick(i + 1);
        }
        let encrypt_ms = millis_since(start);

        let ciphertext_bytes = shallow_size_of_vec(&ciphertexts);

        let meter = ProgressMeter::new("BGV", "decrypt", n);
        let start = Instant::now();
        let mut decrypted = Vec::with_capacity(n);
        for (i, ciphertext) in ciphertexts.iter().enumerate() {
            let message = context.decrypt(ciphertext, &keys.sk);
            decrypted.push(message[0]);
            meter.tick(i + 1);
        }
        let decrypt_ms = millis_since(start);

        debug!(
            "BGV decrypted head: {:?}",
            &decrypted[..decrypted.len().min(5)]
        );

        Ok(Measurement {
            encrypt_ms,
            decrypt_ms,
            plaintext_bytes,
            ciphertext_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_spot_check() {
        // Decrypt(Encrypt(x)) == x on a small test-sized ring
        let context = BGV::new(
            1024,
            bgv::LEVELS,
            bgv::MODULUS_BITS,
            bgv::MU,
            bgv::SIGMA,
            bgv::PLAINTEXT_MODULUS,
        );
        let keys = context.key_gen();

        let mut message = vec![0u64; 1024];
        message[0] = 42;
        let ciphertext = context.encrypt(&message, &keys.pk);
        let decrypted = context.decrypt(&ciphertext, &keys.sk);
        assert_eq!(decrypted[0], 42);
    }
}
