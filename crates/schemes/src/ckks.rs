// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! CKKS backend (approximate arithmetic, one packed ciphertext).

use crate::data::synthetic_reals;
use crate::errors::SchemeError;
use crate::measure::{millis_since, Measurement, SchemeKind};
use crate::progress::ProgressMeter;
use crate::scheme::SchemeBench;
use crate::size::{shallow_size_of_val, shallow_size_of_vec};
use hebench_params::constants::ckks;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use std::sync::Arc;
use std::time::Instant;
use toy_heaan_ckks::{
    decode, decrypt, encode, encrypt, EncodingParams, PublicKey, PublicKeyParams, RnsBasisBuilder,
    RnsPolyRing, SecretKey, SecretKeyParams,
};
use tracing::debug;

const DEGREE: usize = ckks::DEGREE;

/// Measures CKKS through `toy-heaan-ckks`.
///
/// All `n` values are packed into a single ciphertext, so encryption and
/// decryption are one-shot operations rather than per-value loops.
pub struct CkksScheme;

impl SchemeBench for CkksScheme {
    fn kind(&self) -> SchemeKind {
        SchemeKind::Ckks
    }

    fn measure(&self, n: usize) -> Result<Measurement, SchemeError> {
        let basis = Arc::new(
            RnsBasisBuilder::new(DEGREE)
                .with_custom_primes(ckks::COEFF_MODULUS.to_vec())
                .build()
                .map_err(SchemeError::backend)?,
        );
        let mut rng = ChaCha20Rng::from_entropy();

        let sk_params: SecretKeyParams<DEGREE> = SecretKeyParams {
            basis: basis.clone(),
            hamming_weight: ckks::HAMMING_WEIGHT,
        };
        let secret_key = SecretKey::generate(&sk_params, &mut rng).map_err(SchemeError::backend)?;

        let pk_params = PublicKeyParams {
            basis: basis.clone(),
            error_std: ckks::ERROR_STD,
        };
        let public_key =
            PublicKey::generate(&secret_key, &pk_params, &mut rng).map_err(SchemeError::backend)?;

        let encoding_params =
            EncodingParams::new(DEGREE, ckks::SCALE_BITS).map_err(SchemeError::backend)?;
        let scale = (1u64 << ckks::SCALE_BITS) as f64;

        let data = synthetic_reals(n);
        debug!("CKKS generated head: {:?}", &data[..n.min(5)]);
        let plaintext_bytes = shallow_size_of_vec(&data);

        let meter = ProgressMeter::new("CKKS", "encrypt", n);
        let start = Instant::now();
        let coeffs = encode(&data, &encoding_params).map_err(SchemeError::backend)?;
        let poly = RnsPolyRing::from_i64_slice(&coeffs, basis.clone());
        let ciphertext = encrypt(&poly, &public_key, scale, &mut rng);
        let encrypt_ms = millis_since(start);
        meter.complete();

        let ciphertext_bytes = shallow_size_of_val(&ciphertext);

        let meter = ProgressMeter::new("CKKS", "decrypt", n);
        let start = Instant::now();
        let decrypted_poly = decrypt(&ciphertext, &secret_key);
        let decrypted = decode(&decrypted_poly.to_i64_coefficients(), &encoding_params)
            .map_err(SchemeError::backend)?;
        let decrypt_ms = millis_since(start);
        meter.complete();

        debug!(
            "CKKS decrypted head: {:?}",
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
    use crate::measure::MeasurementOutcome;
    use crate::scheme::measure_guarded;

    #[test]
    fn test_guarded_measure_never_escapes() {
        // Whether or not the library accepts the preset at runtime, the
        // guard must return an outcome rather than unwinding
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let outcome = measure_guarded(&CkksScheme, 10);
        std::panic::set_hook(hook);

        match outcome {
            MeasurementOutcome::Measured(measurement) => {
                assert!(measurement.plaintext_bytes > 0);
            }
            MeasurementOutcome::Unavailable => {}
        }
    }
}
