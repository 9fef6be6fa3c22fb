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

//! Search state for the row-by-row queen placement.
//!
//! Rows are filled top to bottom, one queen per row. A `SearchState` tracks
//! three occupancy masks over the `N` columns of the next row:
//!
//! - `occupied_files`: columns that already hold a queen,
//! - `occupied_diag_down`: squares attacked along the down-right diagonals,
//!   shifted left by one per row,
//! - `occupied_diag_up`: squares attacked along the down-left diagonals,
//!   shifted right by one per row.
//!
//! Every mask is kept inside the `N`-bit domain. The state also records the
//! column chosen in each placed row so a completed state describes a whole
//! board, not just its terminal occupancy.
//!
//! States are values. `child` builds a new state and never touches the
//! parent, so independent branches can be handed to independent tasks.

use crate::{board::BoardSize, error::ModelError};
use regina_core::bits::{BitWord, SetBits};
use smallvec::SmallVec;

/// Column indices of the placed queens, one per placed row.
pub type Placements = SmallVec<[u8; 32]>;

/// A node of the placement search.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SearchState<W> {
    occupied_files: W,
    occupied_diag_down: W,
    occupied_diag_up: W,
    full_mask: W,
    placements: Placements,
}

impl<W> SearchState<W>
where
    W: BitWord,
{
    /// Creates the empty state for a board of the given size.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DomainBounds` if `W` cannot hold `size` bits.
    #[inline]
    pub fn root(size: BoardSize) -> Result<Self, ModelError> {
        let full_mask = size.mask::<W>()?;
        Ok(Self {
            occupied_files: W::zero(),
            occupied_diag_down: W::zero(),
            occupied_diag_up: W::zero(),
            full_mask,
            placements: SmallVec::with_capacity(size.get()),
        })
    }

    /// Returns the mask of columns already holding a queen.
    #[inline]
    pub fn occupied_files(&self) -> W {
        self.occupied_files
    }

    /// Returns the down-right diagonal attack mask for the next row.
    #[inline]
    pub fn occupied_diag_down(&self) -> W {
        self.occupied_diag_down
    }

    /// Returns the down-left diagonal attack mask for the next row.
    #[inline]
    pub fn occupied_diag_up(&self) -> W {
        self.occupied_diag_up
    }

    /// Returns the `N`-bit domain mask.
    #[inline]
    pub fn full_mask(&self) -> W {
        self.full_mask
    }

    /// Returns `N`.
    #[inline]
    pub fn board_size(&self) -> usize {
        self.full_mask.count_ones() as usize
    }

    /// Returns the number of rows placed so far.
    #[inline]
    pub fn rows_placed(&self) -> usize {
        self.occupied_files.count_ones() as usize
    }

    /// Returns `true` once every row holds a queen.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.occupied_files == self.full_mask
    }

    /// Returns the columns chosen so far, indexed by row.
    #[inline]
    pub fn placements(&self) -> &[u8] {
        &self.placements
    }

    /// Returns the mask of legal columns for the next row.
    #[inline]
    pub fn candidates(&self) -> W {
        !(self.occupied_files | self.occupied_diag_down | self.occupied_diag_up) & self.full_mask
    }

    /// Returns an iterator over the legal placements for the next row,
    /// each as a single-bit word.
    #[inline]
    pub fn candidate_bits(&self) -> SetBits<W> {
        SetBits::new(self.candidates())
    }

    /// Returns the state after placing a queen on the single-bit column
    /// `place` in the next row.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if `place` is not one of the current
    /// candidates.
    #[inline]
    pub fn child(&self, place: W) -> Self {
        debug_assert!(
            place.count_ones() == 1 && (place & self.candidates()) == place,
            "called `SearchState::child` with a placement that is not a single candidate bit: {:?} (candidates: {:?})",
            place,
            self.candidates()
        );

        let mut placements = self.placements.clone();
        placements.push(place.trailing_zeros() as u8);

        Self {
            occupied_files: self.occupied_files | place,
            occupied_diag_down: ((self.occupied_diag_down | place) << 1) & self.full_mask,
            occupied_diag_up: ((self.occupied_diag_up | place) >> 1) & self.full_mask,
            full_mask: self.full_mask,
            placements,
        }
    }
}

impl<W> std::fmt::Display for SearchState<W>
where
    W: BitWord,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchState(rows: {}/{}, candidates: {})",
            self.rows_placed(),
            self.board_size(),
            self.candidates().count_ones()
        )
    }
}
