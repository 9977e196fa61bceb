// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Measurement data model.

use std::fmt;
use std::time::Instant;

/// Fractional milliseconds since `start`.
pub(crate) fn millis_since(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1_000.0
}

/// The four benchmarked schemes, in sweep order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemeKind {
    Paillier,
    Ckks,
    Bgv,
    Bfv,
}

impl SchemeKind {
    /// Stable display name used in logs and table headers.
    pub fn name(&self) -> &'static str {
        match self {
            SchemeKind::Paillier => "Paillier",
            SchemeKind::Ckks => "CKKS",
            SchemeKind::Bgv => "BGV",
            SchemeKind::Bfv => "BFV",
        }
    }

    /// All schemes in sweep order.
    pub fn all() -> [SchemeKind; 4] {
        [
            SchemeKind::Paillier,
            SchemeKind::Ckks,
            SchemeKind::Bgv,
            SchemeKind::Bfv,
        ]
    }
}

impl fmt::Display for SchemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One completed measurement for one scheme at one cardinality.
///
/// Sizes are shallow in-memory representation sizes, not serialized byte
/// counts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement {
    /// Wall-clock time to encode and encrypt all values, in milliseconds.
    pub encrypt_ms: f64,
    /// Wall-clock time to decrypt all values, in milliseconds.
    pub decrypt_ms: f64,
    /// Shallow size of the plaintext container, in bytes.
    pub plaintext_bytes: usize,
    /// Shallow size of the ciphertext representation, in bytes.
    pub ciphertext_bytes: usize,
}

/// Result of a guarded measurement: either a full set of numbers or an
/// unavailability sentinel covering all four fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeasurementOutcome {
    Measured(Measurement),
    Unavailable,
}

impl MeasurementOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, MeasurementOutcome::Measured(_))
    }

    pub fn measurement(&self) -> Option<&Measurement> {
        match self {
            MeasurementOutcome::Measured(m) => Some(m),
            MeasurementOutcome::Unavailable => None,
        }
    }
}
