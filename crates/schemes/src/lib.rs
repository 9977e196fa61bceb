// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Measurable encryption scheme backends.
//!
//! Each backend wraps an external encryption library behind the
//! [`SchemeBench`] trait: generate `n` synthetic values, time encryption
//! and decryption, and report shallow plaintext/ciphertext sizes. The
//! backends perform no cryptographic work of their own.
//!
//! Failures never cross the trait boundary twice: [`measure_guarded`]
//! converts any backend error or panic into
//! [`MeasurementOutcome::Unavailable`] so one broken scheme cannot take
//! down a sweep.

mod bfv;
mod bgv_scheme;
mod ckks;
mod data;
mod errors;
mod measure;
mod paillier;
mod progress;
mod scheme;
mod size;

pub use bfv::BfvScheme;
pub use bgv_scheme::BgvScheme;
pub use ckks::CkksScheme;
pub use errors::SchemeError;
pub use measure::{Measurement, MeasurementOutcome, SchemeKind};
pub use paillier::PaillierScheme;
pub use progress::ProgressMeter;
pub use scheme::{default_schemes, measure_guarded, SchemeBench};
pub use size::{shallow_size_of_val, shallow_size_of_vec};
