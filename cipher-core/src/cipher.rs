// File:    cipher.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The common text-in, text-out interface implemented by every cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::atbash::Atbash;
use crate::error::{CipherError, Result};
use crate::message::Message;
use crate::polybius::{PolybiusCipher, PolybiusSquare};
use crate::scytale::Scytale;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A cipher that turns raw user text into ciphertext and back.
///
/// Implementations validate their input first, so callers may pass
/// unnormalized text. Every implementation is immutable and can be shared
/// between threads.
pub trait Cipher: Send + Sync {
    /// Short lowercase name of the algorithm.
    fn name(&self) -> &'static str;

    /// The key material in a canonical textual form, empty for keyless
    /// ciphers. Two instances that agree on this string are interchangeable.
    fn parameters(&self) -> String;

    /// Encrypts `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] if the text is rejected by
    /// validation.
    fn encrypt(&self, text: &str) -> Result<String>;

    /// Decrypts `text`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] if the text is rejected by
    /// validation, or a code error for malformed digit input.
    fn decrypt(&self, text: &str) -> Result<String>;
}

/// Selects one of the available algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    /// Reversed alphabet.
    Atbash,
    /// Fractionating Polybius cipher with transposition.
    #[default]
    Polybius,
    /// Plain Polybius coordinates.
    Square,
    /// Columnar transposition.
    Scytale,
}

impl CipherKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 4] = [Self::Atbash, Self::Polybius, Self::Square, Self::Scytale];

    /// The lowercase name used on the command line and in JSON.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Atbash => "atbash",
            Self::Polybius => "polybius",
            Self::Square => "square",
            Self::Scytale => "scytale",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherKind {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CipherError::invalid_key(format!(
                    "unknown cipher '{s}', expected one of: atbash, polybius, square, scytale"
                ))
            })
    }
}

impl Cipher for Atbash {
    fn name(&self) -> &'static str {
        CipherKind::Atbash.as_str()
    }

    fn parameters(&self) -> String {
        String::new()
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Self::apply(text)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Self::apply(text)
    }
}

impl Cipher for PolybiusCipher {
    fn name(&self) -> &'static str {
        CipherKind::Polybius.as_str()
    }

    fn parameters(&self) -> String {
        grid_parameters(self.grid())
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        self.encrypt_message(&Message::parse(text)?)
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        self.decrypt_message(&Message::parse(text)?)
    }
}

impl Cipher for PolybiusSquare {
    fn name(&self) -> &'static str {
        CipherKind::Square.as_str()
    }

    fn parameters(&self) -> String {
        grid_parameters(self.grid())
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.encode(&Message::parse(text)?))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        self.decode(text)
    }
}

impl Cipher for Scytale {
    fn name(&self) -> &'static str {
        CipherKind::Scytale.as_str()
    }

    fn parameters(&self) -> String {
        format!("rows={}", self.rows())
    }

    fn encrypt(&self, text: &str) -> Result<String> {
        Ok(self.encrypt_message(&Message::parse(text)?))
    }

    fn decrypt(&self, text: &str) -> Result<String> {
        Ok(self.decrypt_message(&Message::parse(text)?))
    }
}

fn grid_parameters(grid: &crate::polybius::Grid) -> String {
    let pair = grid.pair();
    format!(
        "grid={};merged={}/{}",
        grid.layout(),
        pair.representative(),
        pair.alias()
    )
}
