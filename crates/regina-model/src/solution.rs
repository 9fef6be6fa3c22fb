// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use crate::state::{Placements, SearchState};
use regina_core::bits::BitWord;

/// A complete, non-attacking placement of `N` queens.
///
/// `columns()[r]` is the column of the queen in row `r`. Unlike the terminal
/// occupancy mask alone, this uniquely describes the board.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Solution {
    columns: Placements,
}

impl Solution {
    /// Constructs a `Solution` from per-row column indices.
    #[inline]
    pub fn new<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = u8>,
    {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Constructs a `Solution` from a completed search state.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `state` is not complete.
    #[inline]
    pub fn from_state<W>(state: &SearchState<W>) -> Self
    where
        W: BitWord,
    {
        debug_assert!(
            state.is_complete(),
            "called `Solution::from_state` on an incomplete state: {} of {} rows placed",
            state.rows_placed(),
            state.board_size()
        );

        Self {
            columns: state.placements().into(),
        }
    }

    /// Returns `N`.
    #[inline]
    pub fn board_size(&self) -> usize {
        self.columns.len()
    }

    /// Returns the column of the queen in `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    #[inline]
    pub fn column(&self, row: usize) -> usize {
        debug_assert!(
            row < self.board_size(),
            "called `Solution::column` with row out of bounds: the len is {} but the row is {}",
            self.board_size(),
            row
        );

        self.columns[row] as usize
    }

    /// Returns the per-row columns.
    #[inline]
    pub fn columns(&self) -> &[u8] {
        &self.columns
    }

    /// Returns the union of all occupied files.
    ///
    /// This is the only board information an occupancy-only search keeps; it
    /// equals the full `N`-bit mask for every solution.
    #[inline]
    pub fn terminal_mask(&self) -> u128 {
        self.columns
            .iter()
            .fold(0u128, |mask, &column| mask | (1u128 << column))
    }

    /// Returns `true` if no two queens share a column or a diagonal.
    pub fn is_valid(&self) -> bool {
        let n = self.board_size();
        if self.columns.iter().any(|&c| c as usize >= n) {
            return false;
        }
        for (r1, &c1) in self.columns.iter().enumerate() {
            for (r2, &c2) in self.columns.iter().enumerate().skip(r1 + 1) {
                let dr = r2 - r1;
                let dc = (c1 as isize - c2 as isize).unsigned_abs();
                if c1 == c2 || dr == dc {
                    return false;
                }
            }
        }
        true
    }
}

impl std::fmt::Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = self.board_size();
        for (row, &column) in self.columns.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for c in 0..n {
                let cell = if c == column as usize { 'Q' } else { '.' };
                write!(f, "{}", cell)?;
            }
        }
        Ok(())
    }
}
