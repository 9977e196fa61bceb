// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Synthetic input generation.

use rand::distributions::Uniform;
use rand::{thread_rng, Rng};

/// `n` uniform integers in [0, 100], the input domain of the exact schemes.
pub(crate) fn synthetic_integers(n: usize) -> Vec<u64> {
    let between = Uniform::from(0..=100u64);
    let mut rng = thread_rng();
    (0..n).map(|_| rng.sample(between)).collect()
}

/// `n` uniform reals in [0, 1), the input domain of the approximate scheme.
pub(crate) fn synthetic_reals(n: usize) -> Vec<f64> {
    let mut rng = thread_rng();
    (0..n).map(|_| rng.gen::<f64>()).collect()
}
