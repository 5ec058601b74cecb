// File:    scytale.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The Scytale columnar transposition, keyed by the number of rows.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The Scytale cipher.
//!
//! The message is written row by row into a matrix with `rows` rows and read
//! back column by column. With `PLAINTEXTMESSAGE` and four rows:
//!
//! ```text
//! P L A I
//! N T E X     ->  PNTS LTMA AEEG IXSE
//! T M E S
//! S A G E
//! ```
//!
//! When the length is not a multiple of `rows`, the tail of the last row
//! stays empty and empty cells are skipped, so no padding is added.

use crate::error::{CipherError, Result};
use crate::message::Message;
use log::debug;

/// Default number of rows.
pub const DEFAULT_ROWS: usize = 4;

/// Columnar transposition over a matrix of `rows` rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scytale {
    rows: usize,
}

impl Scytale {
    /// Creates the cipher.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if `rows` is zero.
    pub fn new(rows: usize) -> Result<Self> {
        if rows == 0 {
            return Err(CipherError::invalid_key("scytale needs at least one row"));
        }
        Ok(Self { rows })
    }

    /// The number of rows, which is the key.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Encrypts a validated message.
    #[must_use]
    pub fn encrypt_message(&self, message: &Message) -> String {
        let letters = message.as_bytes();
        let order = self.read_order(letters.len());
        debug!(
            "Scytale encrypting {} letters over {} rows",
            letters.len(),
            self.rows
        );
        order.iter().map(|&i| letters[i] as char).collect()
    }

    /// Decrypts a validated ciphertext.
    #[must_use]
    pub fn decrypt_message(&self, ciphertext: &Message) -> String {
        let letters = ciphertext.as_bytes();
        let order = self.read_order(letters.len());
        let mut plain = vec![0u8; letters.len()];
        for (&target, &letter) in order.iter().zip(letters) {
            plain[target] = letter;
        }
        debug!(
            "Scytale decrypting {} letters over {} rows",
            letters.len(),
            self.rows
        );
        plain.into_iter().map(char::from).collect()
    }

    /// Row-major indices of the filled cells, in column-major order.
    ///
    /// Rows at or past `len` are always empty, so at most `len` rows are visited.
    fn read_order(&self, len: usize) -> Vec<usize> {
        let rows = self.rows.min(len);
        let columns = len.div_ceil(self.rows);
        let mut order = Vec::with_capacity(len);
        for column in 0..columns {
            for row in 0..rows {
                let index = row * columns + column;
                if index < len {
                    order.push(index);
                }
            }
        }
        order
    }
}

impl Default for Scytale {
    fn default() -> Self {
        Self { rows: DEFAULT_ROWS }
    }
}
