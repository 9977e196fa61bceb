// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Benchmark driver: sweep the schemes across a cardinality range and
//! tabulate the results.

mod report;
mod sweep;

pub use report::SweepReport;
pub use sweep::{run_sweep, SchemeResult, SweepConfig, SweepRow};
