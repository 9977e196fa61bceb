// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Paillier backend (additively homomorphic, per-value encryption).

use crate::data::synthetic_integers;
use crate::errors::SchemeError;
use crate::measure::{millis_since, Measurement, SchemeKind};
use crate::progress::ProgressMeter;
use crate::scheme::SchemeBench;
use crate::size::shallow_size_of_vec;
use rand_core::OsRng;
use rug::Integer;
use scicrypt_he::cryptosystems::paillier::Paillier;
use scicrypt_traits::cryptosystems::{AsymmetricCryptosystem, DecryptionKey, EncryptionKey};
use scicrypt_traits::randomness::GeneralRng;
use scicrypt_traits::security::BitsOfSecurity;
use std::time::Instant;
use tracing::debug;

/// Measures Paillier through `scicrypt`.
///
/// Keys target AES-128 equivalent strength (2048-bit modulus). Each value
/// is encrypted individually; the ciphertext container is the unit of the
/// shallow size measurement.
pub struct PaillierScheme;

impl SchemeBench for PaillierScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Paillier
    }

    fn measure(&self, n: usize) -> Result<Measurement, SchemeError> {
        let mut rng = GeneralRng::new(OsRng);
        let system = Paillier::setup(&BitsOfSecurity::AES128);
        let (public_key, secret_key) = system.generate_keys(&mut rng);

        let data = synthetic_integers(n);
        let plaintext_bytes = shallow_size_of_vec(&data);

        let meter = ProgressMeter::new("Paillier", "encrypt", n);
        let start = Instant::now();
        let mut ciphertexts = Vec::with_capacity(n);
        for (i, &value) in data.iter().enumerate() {
            ciphertexts.push(public_key.encrypt(&Integer::from(value), &mut rng));
            meter.tick(i + 1);
        }
        let encrypt_ms = millis_since(start);

        let ciphertext_bytes = shallow_size_of_vec(&ciphertexts);

        let meter = ProgressMeter::new("Paillier", "decrypt", n);
        let start = Instant::now();
        let mut decrypted = Vec::with_capacity(n);
        for (i, ciphertext) in ciphertexts.iter().enumerate() {
            decrypted.push(secret_key.decrypt(ciphertext));
            meter.tick(i + 1);
        }
        let decrypt_ms = millis_since(start);

        debug!(
            "Paillier decrypted head: {:?}",
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
    use std::mem;

    #[test]
    fn test_round_trip_spot_check() {
        // Decrypt(Encrypt(x)) == x for an in-range value
        let mut rng = GeneralRng::new(OsRng);
        let system = Paillier::setup(&BitsOfSecurity::AES128);
        let (public_key, secret_key) = system.generate_keys(&mut rng);

        let ciphertext = public_key.encrypt(&Integer::from(42u64), &mut rng);
        assert_eq!(secret_key.decrypt(&ciphertext), Integer::from(42u64));
    }

    #[test]
    fn test_measure_hundred_values() {
        let measurement = PaillierScheme.measure(100).unwrap();

        assert!(measurement.encrypt_ms > 0.0);
        assert!(measurement.decrypt_ms > 0.0);
        assert!(measurement.ciphertext_bytes > 0);
        // Plaintext size is exactly the shallow size of a 100-element
        // u64 container
        assert_eq!(
            measurement.plaintext_bytes,
            mem::size_of::<Vec<u64>>() + 100 * mem::size_of::<u64>()
        );
    }
}
