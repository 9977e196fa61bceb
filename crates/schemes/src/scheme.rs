// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The common measurement contract and its guarded boundary.

use crate::errors::SchemeError;
use crate::measure::{Measurement, MeasurementOutcome, SchemeKind};
use crate::{BfvScheme, BgvScheme, CkksScheme, PaillierScheme};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::error;

/// A scheme that can be measured at a given cardinality.
///
/// `measure` runs the full routine: fresh context and keys (untimed),
/// synthetic data generation, timed encrypt, timed decrypt, shallow size
/// capture. Implementations hold no state between calls.
pub trait SchemeBench {
    fn kind(&self) -> SchemeKind;

    fn measure(&self, n: usize) -> Result<Measurement, SchemeError>;
}

/// Runs one measurement with full failure isolation.
///
/// Both error returns and panics out of the underlying library are caught
/// here, logged, and collapsed into [`MeasurementOutcome::Unavailable`].
/// The caller can always continue with the next scheme or cardinality.
pub fn measure_guarded(scheme: &dyn SchemeBench, n: usize) -> MeasurementOutcome {
    let kind = scheme.kind();

    match panic::catch_unwind(AssertUnwindSafe(|| scheme.measure(n))) {
        Ok(Ok(measurement)) => MeasurementOutcome::Measured(measurement),
        Ok(Err(err)) => {
            error!("{} error: {}", kind.name(), err);
            MeasurementOutcome::Unavailable
        }
        Err(payload) => {
            let err = SchemeError::Panic(panic_message(payload.as_ref()));
            error!("{} error: {}", kind.name(), err);
            MeasurementOutcome::Unavailable
        }
    }
}

/// The four production backends, in sweep order.
pub fn default_schemes() -> Vec<Box<dyn SchemeBench>> {
    vec![
        Box::new(PaillierScheme),
        Box::new(CkksScheme),
        Box::new(BgvScheme),
        Box::new(BfvScheme),
    ]
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "opaque panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingScheme;

    impl SchemeBench for FailingScheme {
        fn kind(&self) -> SchemeKind {
            SchemeKind::Ckks
        }

        fn measure(&self, _n: usize) -> Result<Measurement, SchemeError> {
            Err(SchemeError::backend("unsupported parameter combination"))
        }
    }

    struct PanickingScheme;

    impl SchemeBench for PanickingScheme {
        fn kind(&self) -> SchemeKind {
            SchemeKind::Bgv
        }

        fn measure(&self, _n: usize) -> Result<Measurement, SchemeError> {
            panic!("index out of bounds inside the library");
        }
    }

    #[test]
    fn test_error_becomes_unavailable() {
        let outcome = measure_guarded(&FailingScheme, 100);
        assert_eq!(outcome, MeasurementOutcome::Unavailable);
    }

    #[test]
    fn test_panic_becomes_unavailable() {
        // Silence the default panic hook for the duration of the test
        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let outcome = measure_guarded(&PanickingScheme, 100);
        std::panic::set_hook(hook);

        assert_eq!(outcome, MeasurementOutcome::Unavailable);
    }

    #[test]
    fn test_default_schemes_in_sweep_order() {
        let schemes = default_schemes();
        let kinds: Vec<SchemeKind> = schemes.iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, SchemeKind::all());
    }
}
