// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Error type for scheme measurement routines.

use thiserror::Error;

/// A failure inside one scheme's measurement routine.
///
/// There is a single taxonomy: the underlying library call failed, for
/// whatever reason. The guarded boundary converts this into an
/// `Unavailable` outcome; it is never re-raised past the driver.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// The encryption library returned an error
    #[error("{0}")]
    Backend(String),

    /// The encryption library panicked
    #[error("library panicked: {0}")]
    Panic(String),
}

impl SchemeError {
    /// Wraps any library error into the backend variant.
    pub fn backend(err: impl std::fmt::Display) -> Self {
        Self::Backend(err.to_string())
    }
}
