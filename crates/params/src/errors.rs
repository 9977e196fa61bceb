// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error types for preset construction.

use thiserror::Error;

/// Errors that can occur while materializing a parameter preset.
#[derive(Debug, Error)]
pub enum PresetError {
    /// The underlying library rejected the preset values
    #[error("building BFV parameters failed: {0}")]
    Build(#[from] fhe::Error),

    /// A preset constant is out of the range the builder accepts
    #[error("invalid preset: {message}")]
    InvalidPreset { message: String },
}
