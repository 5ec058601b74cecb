// File:    square.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The plain Polybius square substitution, letters to coordinate digits.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::fractionation::{DigitStream, fractionate, recontract};
use super::grid::Grid;
use crate::error::{CipherError, Result};
use crate::message::Message;

/// Writes each letter as its two grid digits, without any transposition.
///
/// `SOMETEXT` becomes `3443235144513544` on the canonical grid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolybiusSquare {
    grid: Grid,
}

impl PolybiusSquare {
    /// Creates the substitution over `grid`.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// The grid acting as the key.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Encodes a validated message as a digit string.
    #[must_use]
    pub fn encode(&self, message: &Message) -> String {
        fractionate(&self.grid, message).to_string()
    }

    /// Decodes a digit string; whitespace between digits is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] for empty input or non-digit
    /// characters, [`CipherError::OddDigitCount`] when a digit is left over
    /// and [`CipherError::MalformedCode`] for a pair outside the grid.
    pub fn decode(&self, digits: &str) -> Result<String> {
        let stream: DigitStream = digits.parse()?;
        if stream.is_empty() {
            return Err(CipherError::invalid_input("message is empty"));
        }
        recontract(&self.grid, &stream)
    }
}
