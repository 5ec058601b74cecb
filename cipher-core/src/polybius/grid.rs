// File:    grid.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: The 5x5 Polybius square mapping letters to two-digit coordinates and back.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The alphabet grid.
//!
//! Cells are filled row-major. A letter's [`Code`] is written column first,
//! so in the canonical square `A = 11`, `B = 21`, `F = 12` and `Z = 55`.
//!
//! ```text
//!      1   2   3   4   5
//!  1   A   B   C   D   E
//!  2   F   G   H  I/J  K
//!  3   L   M   N   O   P
//!  4   Q   R   S   T   U
//!  5   V   W   X   Y   Z
//! ```

use crate::error::{CipherError, Result};
use log::debug;
use std::fmt;

/// Number of cells along each side of the grid.
pub const SIDE: u8 = 5;

const CELLS: usize = (SIDE as usize) * (SIDE as usize);
const LETTERS: usize = 26;

/// A cell coordinate, both parts in `1..=5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Code {
    column: u8,
    row: u8,
}

impl Code {
    /// Builds a code from a column and a row.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MalformedCode`] unless both values are in `1..=5`.
    pub fn new(column: u8, row: u8) -> Result<Self> {
        if (1..=SIDE).contains(&column) && (1..=SIDE).contains(&row) {
            Ok(Self { column, row })
        } else {
            Err(CipherError::MalformedCode {
                code: format!("{column}{row}"),
            })
        }
    }

    /// Builds a code from its two written digits, column digit first.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MalformedCode`] unless both digits are in `1..=5`.
    pub fn from_digits(digits: [u8; 2]) -> Result<Self> {
        Self::new(digits[0], digits[1])
    }

    /// The column, in `1..=5`.
    #[must_use]
    pub const fn column(self) -> u8 {
        self.column
    }

    /// The row, in `1..=5`.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// The two digits as written, column first.
    #[must_use]
    pub const fn digits(self) -> [u8; 2] {
        [self.column, self.row]
    }

    const fn from_cell(cell: usize) -> Self {
        // cell < 25, so both parts fit in 1..=5.
        Self {
            column: (cell % SIDE as usize) as u8 + 1,
            row: (cell / SIDE as usize) as u8 + 1,
        }
    }

    const fn cell(self) -> usize {
        (self.row as usize - 1) * SIDE as usize + (self.column as usize - 1)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

/// The two letters that share a single cell.
///
/// The alias never gets a cell of its own: it encodes to the
/// representative's code, and that code always decodes to the
/// representative. Which of the two was originally written is lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergedPair {
    representative: u8,
    alias: u8,
}

impl MergedPair {
    /// Creates a pair from two distinct letters; case is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if either value is not a letter
    /// or both name the same letter.
    pub fn new(representative: char, alias: char) -> Result<Self> {
        if !representative.is_ascii_alphabetic() || !alias.is_ascii_alphabetic() {
            return Err(CipherError::invalid_key(format!(
                "merged pair '{representative}/{alias}' must consist of two letters"
            )));
        }
        let representative = representative.to_ascii_uppercase() as u8;
        let alias = alias.to_ascii_uppercase() as u8;
        if representative == alias {
            return Err(CipherError::invalid_key(format!(
                "merged pair '{}/{}' must name two different letters",
                representative as char, alias as char
            )));
        }
        Ok(Self {
            representative,
            alias,
        })
    }

    /// The traditional `I/J` pair, decoding to `I`.
    #[must_use]
    pub const fn i_j() -> Self {
        Self {
            representative: b'I',
            alias: b'J',
        }
    }

    /// The same two letters with the roles swapped.
    #[must_use]
    pub const fn swapped(self) -> Self {
        Self {
            representative: self.alias,
            alias: self.representative,
        }
    }

    /// The letter the shared cell decodes to.
    #[must_use]
    pub const fn representative(self) -> char {
        self.representative as char
    }

    /// The letter folded onto the representative.
    #[must_use]
    pub const fn alias(self) -> char {
        self.alias as char
    }

    const fn fold(self, letter: u8) -> u8 {
        if letter == self.alias {
            self.representative
        } else {
            letter
        }
    }
}

impl Default for MergedPair {
    fn default() -> Self {
        Self::i_j()
    }
}

/// An immutable 5x5 Polybius square.
///
/// Build one per key and pass it by reference to the stages that need it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [u8; CELLS],
    positions: [u8; LETTERS],
    pair: MergedPair,
}

impl Grid {
    /// The unkeyed square: the alphabet in order with `J` merged into `I`.
    #[must_use]
    pub fn canonical() -> Self {
        Self::build(&[], MergedPair::default())
    }

    /// A keyed square using the traditional `I/J` pair.
    ///
    /// # Errors
    ///
    /// See [`Grid::with_pair`].
    pub fn keyed(key: &str) -> Result<Self> {
        Self::with_pair(key, MergedPair::default())
    }

    /// A keyed square: the key's letters first, without repeats, then the
    /// rest of the alphabet in order.
    ///
    /// Case and whitespace in the key are ignored. An empty key gives the
    /// canonical layout for `pair`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKey`] if the key contains anything other
    /// than letters and whitespace.
    pub fn with_pair(key: &str, pair: MergedPair) -> Result<Self> {
        let mut letters = Vec::with_capacity(key.len());
        for c in key.chars() {
            if c.is_whitespace() {
                continue;
            }
            if !c.is_ascii_alphabetic() {
                return Err(CipherError::invalid_key(format!(
                    "grid key may only contain letters (found '{c}')"
                )));
            }
            letters.push(c.to_ascii_uppercase() as u8);
        }
        let grid = Self::build(&letters, pair);
        debug!("Built grid '{}' from key '{key}'", grid.layout());
        Ok(grid)
    }

    fn build(key: &[u8], pair: MergedPair) -> Self {
        let mut cells = [0u8; CELLS];
        let mut positions = [0u8; LETTERS];
        let mut placed = [false; LETTERS];
        let mut next = 0;

        for letter in key.iter().copied().chain(b'A'..=b'Z') {
            let letter = pair.fold(letter);
            let slot = usize::from(letter - b'A');
            if placed[slot] {
                continue;
            }
            placed[slot] = true;
            cells[next] = letter;
            positions[slot] = next as u8;
            next += 1;
        }

        let alias = usize::from(pair.alias - b'A');
        positions[alias] = positions[usize::from(pair.representative - b'A')];

        Self {
            cells,
            positions,
            pair,
        }
    }

    /// The merged pair this grid was built with.
    #[must_use]
    pub const fn pair(&self) -> MergedPair {
        self.pair
    }

    /// Looks up the code of an uppercase letter.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidInput`] if `letter` is not in `A..=Z`.
    pub fn encode_letter(&self, letter: char) -> Result<Code> {
        if letter.is_ascii_uppercase() {
            Ok(self.code_of(letter as u8))
        } else {
            Err(CipherError::invalid_input(format!(
                "'{letter}' is not an uppercase letter"
            )))
        }
    }

    /// The letter stored at `code`. Total: every code names exactly one cell.
    #[must_use]
    pub const fn decode_code(&self, code: Code) -> char {
        self.cells[code.cell()] as char
    }

    /// The 25 letters of the grid, row by row.
    #[must_use]
    pub fn layout(&self) -> String {
        self.cells.iter().map(|&b| b as char).collect()
    }

    /// Callers guarantee `letter` is an uppercase ASCII letter.
    pub(crate) fn code_of(&self, letter: u8) -> Code {
        Code::from_cell(usize::from(self.positions[usize::from(letter - b'A')]))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::canonical()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let merged = format!("{}/{}", self.pair.representative(), self.pair.alias());
        write!(f, "   ")?;
        for column in 1..=SIDE {
            write!(f, "{column:^5}")?;
        }
        writeln!(f)?;
        for (row, cells) in self.cells.chunks(SIDE as usize).enumerate() {
            write!(f, "{:<3}", row + 1)?;
            for &cell in cells {
                if cell == self.pair.representative {
                    write!(f, "{merged:^5}")?;
                } else {
                    write!(f, "{:^5}", cell as char)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_index_round_trip() {
        for cell in 0..CELLS {
            assert_eq!(Code::from_cell(cell).cell(), cell);
        }
    }

    #[test]
    fn test_swapped_pair_merges_into_j() {
        let grid = Grid::with_pair("", MergedPair::i_j().swapped()).unwrap();
        assert_eq!(grid.layout(), "ABCDEFGHJKLMNOPQRSTUVWXYZ");
        assert_eq!(grid.decode_code(grid.encode_letter('I').unwrap()), 'J');
    }
}
