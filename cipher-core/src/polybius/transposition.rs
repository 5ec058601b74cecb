// File:    transposition.rs
// Author:  apezoo
// Date:    2026-10-19
//
// Description: Position-level rearrangements of the digit stream and their exact inverses.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! The transposition stage.
//!
//! Two fixed permutations, each depending only on the stream length:
//!
//! 1. parity split: digits at even positions, followed by digits at odd positions;
//! 2. a cyclic left rotation by one position.
//!
//! The helpers are generic so they can be exercised on any `Copy` elements.
//! All of them accept streams of any length, including empty and odd ones.

use super::fractionation::DigitStream;
use log::trace;

/// Moves the elements at even indices in front of those at odd indices,
/// keeping the relative order inside each group.
#[must_use]
pub fn split_parity<T: Copy>(items: &[T]) -> Vec<T> {
    let evens = items.iter().step_by(2);
    let odds = items.iter().skip(1).step_by(2);
    evens.chain(odds).copied().collect()
}

/// Inverse of [`split_parity`]: interleaves the first `ceil(n / 2)` elements
/// with the remaining ones.
#[must_use]
pub fn merge_parity<T: Copy>(items: &[T]) -> Vec<T> {
    let (evens, odds) = items.split_at(items.len().div_ceil(2));
    let mut merged = Vec::with_capacity(items.len());
    for (i, &even) in evens.iter().enumerate() {
        merged.push(even);
        if let Some(&odd) = odds.get(i) {
            merged.push(odd);
        }
    }
    merged
}

/// Rotates left by one: `rotated[i] = items[(i + 1) mod n]`.
#[must_use]
pub fn rotate_left<T: Copy>(items: &[T]) -> Vec<T> {
    let n = items.len();
    (0..n).map(|i| items[(i + 1) % n]).collect()
}

/// Rotates right by one: `original[i] = rotated[(i + n - 1) mod n]`.
///
/// The index is kept in `[0, n)` at every step; `i = 0` wraps to the last
/// element rather than to a negative position.
#[must_use]
pub fn rotate_right<T: Copy>(items: &[T]) -> Vec<T> {
    let n = items.len();
    (0..n).map(|i| items[(i + n - 1) % n]).collect()
}

/// Applies the parity split, then the left rotation.
#[must_use]
pub fn transpose(stream: &DigitStream) -> DigitStream {
    let split = split_parity(stream.as_slice());
    let rotated = DigitStream::new(rotate_left(&split));
    trace!("Transposed {stream} into {rotated}");
    rotated
}

/// Undoes [`transpose`]: the right rotation, then the parity merge.
#[must_use]
pub fn untranspose(stream: &DigitStream) -> DigitStream {
    let rotated = rotate_right(stream.as_slice());
    let merged = DigitStream::new(merge_parity(&rotated));
    trace!("Untransposed {stream} into {merged}");
    merged
}
