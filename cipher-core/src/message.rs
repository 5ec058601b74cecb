// File:    message.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Validates and normalizes user text before it reaches a cipher.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! Input validation shared by all ciphers.
//!
//! The ciphers only ever see uppercase `A-Z`. Everything else is either
//! folded (lowercase letters), dropped (whitespace) or rejected here.

use crate::error::{CipherError, Result};
use std::fmt;
use std::str::FromStr;

/// A validated, non-empty message made only of the letters `A` to `Z`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message(String);

impl Message {
    /// Normalizes `text` into a message.
    ///
    /// Whitespace is removed and lowercase letters are folded to uppercase.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] if the text contains a digit or
    /// any other non-letter character, or if nothing is left once
    /// whitespace has been stripped.
    pub fn parse(text: &str) -> Result<Self> {
        let mut letters = String::with_capacity(text.len());
        for c in text.chars() {
            if c.is_whitespace() {
                continue;
            }
            letters.push(checked_letter(c)?);
        }
        if letters.is_empty() {
            return Err(CipherError::invalid_input("message is empty"));
        }
        Ok(Self(letters))
    }

    /// The message as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The message as ASCII bytes, one per letter.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Number of letters in the message.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; an empty message cannot be constructed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Message {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes text for ciphers that keep word breaks (Atbash).
///
/// Leading and trailing whitespace is trimmed, inner spaces are kept as-is
/// and letters are folded to uppercase.
///
/// # Errors
///
/// Returns [`CipherError::InvalidInput`] for digits, for any whitespace other
/// than a plain space between words, for other non-letter characters, and
/// for text without a single letter.
pub fn normalize_preserving_spaces(text: &str) -> Result<String> {
    let trimmed = text.trim();
    let mut normalized = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        if c == ' ' {
            normalized.push(c);
        } else {
            normalized.push(checked_letter(c)?);
        }
    }
    if !normalized.bytes().any(|b| b.is_ascii_uppercase()) {
        return Err(CipherError::invalid_input("message is empty"));
    }
    Ok(normalized)
}

fn checked_letter(c: char) -> Result<char> {
    if c.is_ascii_alphabetic() {
        Ok(c.to_ascii_uppercase())
    } else if c.is_ascii_digit() {
        Err(CipherError::invalid_input(format!(
            "message cannot contain numbers (found '{c}')"
        )))
    } else {
        Err(CipherError::invalid_input(format!(
            "unsupported character '{c}', only the letters A-Z are allowed"
        )))
    }
}
