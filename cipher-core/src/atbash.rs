// File:    atbash.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The Atbash reversed-alphabet substitution.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use crate::error::Result;
use crate::message::normalize_preserving_spaces;

/// Maps `A` to `Z`, `B` to `Y` and so on. Spaces pass through unchanged.
///
/// The mapping is its own inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atbash;

impl Atbash {
    /// Applies the reversal to `text` after normalizing it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CipherError::InvalidInput`] for text without letters
    /// or containing anything besides letters and spaces.
    pub fn apply(text: &str) -> Result<String> {
        let normalized = normalize_preserving_spaces(text)?;
        Ok(normalized.bytes().map(reverse).collect())
    }
}

const fn reverse(b: u8) -> char {
    if b.is_ascii_uppercase() {
        (b'A' + b'Z' - b) as char
    } else {
        b as char
    }
}
