// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Parameter presets for the benchmarked encryption schemes.
//!
//! Every preset is a set of constant literals; contexts and keys built from
//! them are regenerated on each measurement, never cached across runs.

mod builder;
pub mod constants;
mod errors;

pub use builder::{build_bfv_params, build_bfv_params_arc, preset_bfv_params_arc};
pub use errors::PresetError;
