// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! BFV backend (exact arithmetic, per-value encode/encrypt).

use crate::data::synthetic_integers;
use crate::errors::SchemeError;
use crate::measure::{millis_since, Measurement, SchemeKind};
use crate::progress::ProgressMeter;
use crate::scheme::SchemeBench;
use crate::size::shallow_size_of_vec;
use fhe::bfv::{Ciphertext, Encoding, Plaintext, PublicKey, SecretKey};
use fhe_traits::{FheDecoder, FheDecrypter, FheEncoder, FheEncrypter};
use hebench_params::preset_bfv_params_arc;
use rand::rngs::OsRng;
use rand::thread_rng;
use std::time::Instant;
use tracing::debug;

/// Measures BFV through `fhe`.
///
/// A fresh parameter set and keypair are generated per call; every value
/// is encoded into its own plaintext and encrypted individually.
pub struct BfvScheme;

impl SchemeBench for BfvScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Bfv
    }

    fn measure(&self, n: usize) -> Result<Measurement, SchemeError> {
        let params = preset_bfv_params_arc().map_err(SchemeError::backend)?;
        let secret_key = SecretKey::random(&params, &mut OsRng);
        let public_key = PublicKey::new(&secret_key, &mut thread_rng());

        let data = synthetic_integers(n);
        let plaintext_bytes = shallow_size_of_vec(&data);

        let meter = ProgressMeter::new("BFV", "encrypt", n);
        let start = Instant::now();
        let mut ciphertexts: Vec<Ciphertext> = Vec::with_capacity(n);
        for (i, &value) in data.iter().enumerate() {
            let plaintext = Plaintext::try_encode(&[value][..], Encoding::poly(), &params)
                .map_err(SchemeError::backend)?;
            ciphertexts.push(
                public_key
                    .try_encrypt(&plaintext, &mut thread_rng())
                    .map_err(SchemeError::backend)?,
            );
            meter.tick(i + 1);
        }
        let encrypt_ms = millis_since(start);

        let ciphertext_bytes = shallow_size_of_vec(&ciphertexts);

        let meter = ProgressMeter::new("BFV", "decrypt", n);
        let start = Instant::now();
        let mut decrypted = Vec::with_capacity(n);
        for (i, ciphertext) in ciphertexts.iter().enumerate() {
            let plaintext = secret_key
                .try_decrypt(ciphertext)
                .map_err(SchemeError::backend)?;
            let values =
                Vec::<u64>::try_decode(&plaintext, Encoding::poly()).map_err(SchemeError::backend)?;
            decrypted.push(values[0]);
            meter.tick(i + 1);
        }
        let decrypt_ms = millis_since(start);

        debug!(
            "BFV decrypted head: {:?}",
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
