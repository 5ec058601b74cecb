// File:    fractionation.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Expands letters into grid digits and regroups digits back into letters.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use super::grid::{Code, Grid};
use crate::error::{CipherError, Result};
use crate::message::Message;
use log::trace;
use std::fmt;
use std::str::FromStr;

/// An ordered sequence of single decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DigitStream(Vec<u8>);

impl DigitStream {
    /// Wraps raw digit values (not ASCII characters).
    #[must_use]
    pub const fn new(digits: Vec<u8>) -> Self {
        Self(digits)
    }

    /// The digits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the stream holds no digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for DigitStream {
    type Err = CipherError;

    /// Parses written digits; whitespace between them is ignored.
    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                c.to_digit(10).map(|d| d as u8).ok_or_else(|| {
                    CipherError::invalid_input(format!("'{c}' is not a decimal digit"))
                })
            })
            .collect::<Result<Vec<u8>>>()
            .map(Self)
    }
}

impl fmt::Display for DigitStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

/// Replaces every letter by the two digits of its grid code.
///
/// The result always holds exactly `2 * message.len()` digits.
#[must_use]
pub fn fractionate(grid: &Grid, message: &Message) -> DigitStream {
    let stream = DigitStream(
        message
            .as_bytes()
            .iter()
            .flat_map(|&letter| grid.code_of(letter).digits())
            .collect(),
    );
    trace!("Fractionated '{message}' into {stream}");
    stream
}

/// Reads the stream two digits at a time and maps each pair back to a letter.
///
/// # Errors
///
/// Returns [`CipherError::OddDigitCount`] for an odd-length stream and
/// [`CipherError::MalformedCode`] for a pair outside the grid. No partial
/// output is produced on error.
pub fn recontract(grid: &Grid, stream: &DigitStream) -> Result<String> {
    if stream.len() % 2 != 0 {
        return Err(CipherError::OddDigitCount {
            count: stream.len(),
        });
    }
    let letters = stream
        .as_slice()
        .chunks_exact(2)
        .map(|pair| Code::from_digits([pair[0], pair[1]]).map(|code| grid.decode_code(code)))
        .collect::<Result<String>>()?;
    trace!("Recontracted {stream} into '{letters}'");
    Ok(letters)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_digits() {
        let stream: DigitStream = "34 43 23".parse().unwrap();
        assert_eq!(stream.as_slice(), &[3, 4, 4, 3, 2, 3]);
        assert_eq!(stream.to_string(), "344323");
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert!(matches!(
            "3x".parse::<DigitStream>(),
            Err(CipherError::InvalidInput { .. })
        ));
    }
}
