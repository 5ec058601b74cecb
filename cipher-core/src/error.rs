// File:    error.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Error types shared by every cipher and by the configuration layer.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors produced while validating input or running a cipher.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// The message is empty or contains characters the cipher does not accept.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// A pair of digits does not name any cell of the 5x5 grid.
    #[error("Malformed grid code '{code}': both digits must be between 1 and 5")]
    MalformedCode {
        /// The offending digits, as written.
        code: String,
    },

    /// A digit stream with an odd number of digits cannot be regrouped into codes.
    #[error("Digit stream has {count} digits, which cannot be split into pairs")]
    OddDigitCount {
        /// Number of digits in the stream.
        count: usize,
    },

    /// The key or cipher parameters are unusable.
    #[error("Invalid key: {reason}")]
    InvalidKey {
        /// What was wrong with the key.
        reason: String,
    },
}

impl CipherError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }
}

/// Errors produced while reading or writing a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid configuration JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used throughout the cipher modules.
pub type Result<T> = std::result::Result<T, CipherError>;
