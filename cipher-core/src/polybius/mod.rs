// File:    mod.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The fractionating Polybius (bifid-style) cipher pipeline.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Polybius square ciphers.
//!
//! [`PolybiusCipher`] chains the stages
//!
//! ```text
//! encrypt: letters -> fractionate -> transpose   -> recontract -> letters
//! decrypt: letters -> fractionate -> untranspose -> recontract -> letters
//! ```
//!
//! using one shared [`Grid`]. [`PolybiusSquare`] exposes the plain
//! letter-to-coordinates substitution on its own.
//!
//! ```
//! use cipher_core::polybius::PolybiusCipher;
//!
//! let cipher = PolybiusCipher::default();
//! let message = "SOMETEXT".parse().unwrap();
//! assert_eq!(cipher.encrypt_message(&message).unwrap(), "IUPTNQVO");
//! ```

/// Letter to digit expansion and digit to letter regrouping.
pub mod fractionation;
/// The 5x5 alphabet grid.
pub mod grid;
/// The plain coordinate cipher.
pub mod square;
/// Digit stream rearrangements.
pub mod transposition;

pub use fractionation::{DigitStream, fractionate, recontract};
pub use grid::{Code, Grid, MergedPair};
pub use square::PolybiusSquare;
pub use transposition::{transpose, untranspose};

use crate::error::Result;
use crate::message::Message;
use log::debug;

/// The fractionating substitution-transposition cipher.
///
/// Decryption must use a grid equal to the one used for encryption. A
/// different grid is not detected: it silently yields different text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolybiusCipher {
    grid: Grid,
}

impl PolybiusCipher {
    /// Creates a cipher over `grid`.
    #[must_use]
    pub const fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// The grid acting as the key.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Encrypts a validated message. The ciphertext has the same length.
    ///
    /// # Errors
    ///
    /// Only fails if re-contraction meets an invalid code, which a correctly
    /// built grid never produces.
    pub fn encrypt_message(&self, message: &Message) -> Result<String> {
        let stream = fractionate(&self.grid, message);
        let ciphertext = recontract(&self.grid, &transpose(&stream))?;
        debug!(
            "Polybius encrypted {} letters with grid '{}'",
            message.len(),
            self.grid.layout()
        );
        Ok(ciphertext)
    }

    /// Decrypts a validated ciphertext.
    ///
    /// Positions that held the merged pair's alias come back as its
    /// representative.
    ///
    /// # Errors
    ///
    /// Only fails if re-contraction meets an invalid code, which a correctly
    /// built grid never produces.
    pub fn decrypt_message(&self, ciphertext: &Message) -> Result<String> {
        let stream = fractionate(&self.grid, ciphertext);
        let plaintext = recontract(&self.grid, &untranspose(&stream))?;
        debug!(
            "Polybius decrypted {} letters with grid '{}'",
            ciphertext.len(),
            self.grid.layout()
        );
        Ok(plaintext)
    }
}
