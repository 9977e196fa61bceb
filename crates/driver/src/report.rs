// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Comparison table rendering.

use crate::sweep::SweepRow;
use hebench_schemes::{MeasurementOutcome, SchemeKind};
use std::fmt;

const N_WIDTH: usize = 10;
const CELL_WIDTH: usize = 18;

/// The final pipe-delimited comparison table.
///
/// One row per cardinality; four columns per scheme (encrypt ms,
/// decrypt ms, shallow plaintext bytes, shallow ciphertext bytes).
/// Unavailable schemes render as `N/A` in all four columns.
pub struct SweepReport {
    rows: Vec<SweepRow>,
}

impl SweepReport {
    pub fn new(rows: Vec<SweepRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[SweepRow] {
        &self.rows
    }

    fn scheme_order(&self) -> Vec<SchemeKind> {
        match self.rows.first() {
            Some(row) => row.results.iter().map(|r| r.kind).collect(),
            None => SchemeKind::all().to_vec(),
        }
    }
}

impl fmt::Display for SweepReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = format!("{:<N_WIDTH$}", "n");
        for kind in self.scheme_order() {
            for column in ["enc (ms)", "dec (ms)", "ptxt (B)", "ctxt (B)"] {
                header.push_str(" | ");
                header.push_str(&format!("{:<CELL_WIDTH$}", format!("{kind} {column}")));
            }
        }
        writeln!(f, "{header}")?;
        writeln!(f, "{}", "-".repeat(header.len()))?;

        for row in &self.rows {
            write!(f, "{:<N_WIDTH$}", row.cardinality)?;
            for result in &row.results {
                match result.outcome {
                    MeasurementOutcome::Measured(m) => {
                        write!(f, " | {:<CELL_WIDTH$.6}", m.encrypt_ms)?;
                        write!(f, " | {:<CELL_WIDTH$.6}", m.decrypt_ms)?;
                        write!(f, " | {:<CELL_WIDTH$}", m.plaintext_bytes)?;
                        write!(f, " | {:<CELL_WIDTH$}", m.ciphertext_bytes)?;
                    }
                    MeasurementOutcome::Unavailable => {
                        for _ in 0..4 {
                            write!(f, " | {:<CELL_WIDTH$}", "N/A")?;
                        }
                    }
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::SchemeResult;
    use hebench_schemes::Measurement;

    fn sample_rows() -> Vec<SweepRow> {
        vec![SweepRow {
            cardinality: 100,
            results: vec![
                SchemeResult {
                    kind: SchemeKind::Paillier,
                    outcome: MeasurementOutcome::Measured(Measurement {
                        encrypt_ms: 12.5,
                        decrypt_ms: 3.25,
                        plaintext_bytes: 824,
                        ciphertext_bytes: 4096,
                    }),
                },
                SchemeResult {
                    kind: SchemeKind::Ckks,
                    outcome: MeasurementOutcome::Unavailable,
                },
            ],
        }]
    }

    #[test]
    fn test_unavailable_renders_as_na() {
        let rendered = SweepReport::new(sample_rows()).to_string();
        assert_eq!(rendered.matches("N/A").count(), 4);
    }

    #[test]
    fn test_rows_are_pipe_delimited() {
        let rendered = SweepReport::new(sample_rows()).to_string();
        let data_line = rendered.lines().nth(2).unwrap();
        // 1 cardinality column + 4 columns for each of the 2 schemes
        assert_eq!(data_line.matches(" | ").count(), 8);
        assert!(data_line.starts_with("100"));
        assert!(data_line.contains("12.5"));
        assert!(data_line.contains("824"));
    }

    #[test]
    fn test_header_names_schemes() {
        let rendered = SweepReport::new(sample_rows()).to_string();
        let header = rendered.lines().next().unwrap();
        assert!(header.contains("Paillier enc (ms)"));
        assert!(header.contains("CKKS ctxt (B)"));
    }

    #[test]
    fn test_empty_report_renders_full_header() {
        let rendered = SweepReport::new(Vec::new()).to_string();
        let header = rendered.lines().next().unwrap();
        for kind in SchemeKind::all() {
            assert!(header.contains(kind.name()));
        }
    }
}
