// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use hebench_driver::{run_sweep, SweepConfig, SweepReport};
use hebench_schemes::{
    Measurement, MeasurementOutcome, SchemeBench, SchemeError, SchemeKind,
};

/// A scheme stub that measures instantly, or fails every call.
struct StubScheme {
    kind: SchemeKind,
    fail: bool,
}

impl SchemeBench for StubScheme {
    fn kind(&self) -> SchemeKind {
        self.kind
    }

    fn measure(&self, n: usize) -> Result<Measurement, SchemeError> {
        if self.fail {
            return Err(SchemeError::backend("unsupported parameter combination"));
        }
        Ok(Measurement {
            encrypt_ms: 2.0,
            decrypt_ms: 1.0,
            plaintext_bytes: n * 8,
            ciphertext_bytes: n * 256,
        })
    }
}

#[test]
fn test_sweep_to_table() -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let subscriber = fmt()
        .with_env_filter(EnvFilter::new("info"))
        .with_test_writer()
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let schemes: Vec<Box<dyn SchemeBench>> = vec![
        Box::new(StubScheme {
            kind: SchemeKind::Paillier,
            fail: false,
        }),
        Box::new(StubScheme {
            kind: SchemeKind::Ckks,
            fail: true,
        }),
        Box::new(StubScheme {
            kind: SchemeKind::Bgv,
            fail: false,
        }),
        Box::new(StubScheme {
            kind: SchemeKind::Bfv,
            fail: false,
        }),
    ];

    let rows = run_sweep(&schemes, &SweepConfig::default())?;
    assert_eq!(rows.len(), 10);

    // Plaintext sizes grow with n within every scheme column
    for column in 0..4 {
        let sizes: Vec<Option<usize>> = rows
            .iter()
            .map(|row| {
                row.results[column]
                    .outcome
                    .measurement()
                    .map(|m| m.plaintext_bytes)
            })
            .collect();
        assert!(sizes
            .windows(2)
            .all(|w| match (w[0], w[1]) {
                (Some(a), Some(b)) => a <= b,
                _ => true,
            }));
    }

    let report = SweepReport::new(rows);
    let rendered = report.to_string();

    // Header, rule, and one line per cardinality
    assert_eq!(rendered.lines().count(), 12);
    // The failing scheme renders N/A across its four columns in every row
    assert_eq!(rendered.matches("N/A").count(), 40);

    Ok(())
}
