// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! The cardinality sweep.

use anyhow::{ensure, Result};
use hebench_schemes::{measure_guarded, MeasurementOutcome, SchemeBench, SchemeKind};
use tracing::info;

/// Inclusive cardinality range walked by the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    pub start: usize,
    pub end: usize,
    pub step: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            start: 100,
            end: 1000,
            step: 100,
        }
    }
}

impl SweepConfig {
    /// The cardinalities visited, in increasing order.
    pub fn cardinalities(&self) -> impl Iterator<Item = usize> + '_ {
        (self.start..=self.end).step_by(self.step)
    }

    fn validate(&self) -> Result<()> {
        ensure!(self.start >= 1, "cardinality start must be at least 1");
        ensure!(self.step >= 1, "cardinality step must be at least 1");
        ensure!(
            self.end >= self.start,
            "cardinality range end must not precede its start"
        );
        Ok(())
    }
}

/// One scheme's guarded result at one cardinality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SchemeResult {
    pub kind: SchemeKind,
    pub outcome: MeasurementOutcome,
}

/// All scheme results at one cardinality, in scheme order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRow {
    pub cardinality: usize,
    pub results: Vec<SchemeResult>,
}

/// Runs every scheme at every cardinality, strictly sequentially.
///
/// A scheme failure is absorbed by the guard and recorded as unavailable;
/// the sweep itself only fails on an invalid configuration.
pub fn run_sweep(
    schemes: &[Box<dyn SchemeBench>],
    config: &SweepConfig,
) -> Result<Vec<SweepRow>> {
    config.validate()?;

    let mut rows = Vec::new();
    for n in config.cardinalities() {
        info!("testing n = {n}");

        let results = schemes
            .iter()
            .map(|scheme| SchemeResult {
                kind: scheme.kind(),
                outcome: measure_guarded(scheme.as_ref(), n),
            })
            .collect();

        rows.push(SweepRow {
            cardinality: n,
            results,
        });
    }

    Ok(rows)
}
