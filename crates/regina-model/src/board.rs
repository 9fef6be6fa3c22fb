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

//! Board dimensions.
//!
//! `BoardSize` is the only way to name an N in the rest of the workspace, so
//! every size that reaches the search has already been checked against the
//! widest supported mask. `MaskWidth` then names the narrowest unsigned word
//! that can hold one bit per column.

use crate::error::ModelError;
use regina_core::bits::{low_mask, BitWord};

/// The largest board size any mask width supports.
pub const MAX_BOARD_SIZE: usize = 128;

/// A validated board size `N` in `1..=MAX_BOARD_SIZE`.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct BoardSize(usize);

impl BoardSize {
    /// Creates a new `BoardSize`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ZeroSize` for `n == 0` and
    /// `ModelError::DomainBounds` for `n > MAX_BOARD_SIZE`.
    #[inline]
    pub fn new(n: usize) -> Result<Self, ModelError> {
        if n == 0 {
            return Err(ModelError::ZeroSize);
        }
        if n > MAX_BOARD_SIZE {
            return Err(ModelError::DomainBounds {
                n,
                max: MAX_BOARD_SIZE,
            });
        }
        Ok(Self(n))
    }

    /// Returns `N`.
    #[inline]
    pub fn get(self) -> usize {
        self.0
    }

    /// Returns the narrowest mask width that holds `N` bits.
    #[inline]
    pub fn width(self) -> MaskWidth {
        MaskWidth::for_size(self)
    }

    /// Returns the full `N`-bit mask in the word type `W`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::DomainBounds` if `W` has fewer than `N` bits.
    #[inline]
    pub fn mask<W>(self) -> Result<W, ModelError>
    where
        W: BitWord,
    {
        low_mask(self.0).ok_or(ModelError::DomainBounds {
            n: self.0,
            max: W::BITS as usize,
        })
    }
}

impl TryFrom<usize> for BoardSize {
    type Error = ModelError;

    #[inline]
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Self::new(n)
    }
}

impl From<BoardSize> for usize {
    #[inline]
    fn from(size: BoardSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for BoardSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// The unsigned word width used for the occupancy masks of a search.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum MaskWidth {
    U8,
    U16,
    U32,
    U64,
    U128,
}

impl MaskWidth {
    /// Returns the narrowest width with at least `size` bits.
    #[inline]
    pub fn for_size(size: BoardSize) -> Self {
        match size.get() {
            0..=8 => MaskWidth::U8,
            9..=16 => MaskWidth::U16,
            17..=32 => MaskWidth::U32,
            33..=64 => MaskWidth::U64,
            _ => MaskWidth::U128,
        }
    }

    /// Returns the number of bits in this width.
    #[inline]
    pub fn bits(self) -> u32 {
        match self {
            MaskWidth::U8 => u8::BITS,
            MaskWidth::U16 => u16::BITS,
            MaskWidth::U32 => u32::BITS,
            MaskWidth::U64 => u64::BITS,
            MaskWidth::U128 => u128::BITS,
        }
    }
}

impl std::fmt::Display for MaskWidth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_and_oversized_boards() {
        assert_eq!(BoardSize::new(0), Err(ModelError::ZeroSize));
        assert_eq!(
            BoardSize::new(129),
            Err(ModelError::DomainBounds { n: 129, max: 128 })
        );
        assert_eq!(BoardSize::new(128).map(BoardSize::get), Ok(128));
        assert_eq!(BoardSize::try_from(8).map(usize::from), Ok(8));
    }

    #[test]
    fn test_mask_matches_board_size() {
        let size = BoardSize::new(8).unwrap();
        assert_eq!(size.mask::<u8>(), Ok(0xFF));
        assert_eq!(size.mask::<u32>(), Ok(0xFF));

        let size = BoardSize::new(5).unwrap();
        assert_eq!(size.mask::<u16>(), Ok(0b1_1111));
    }

    #[test]
    fn test_mask_rejects_narrow_words() {
        let size = BoardSize::new(9).unwrap();
        assert_eq!(
            size.mask::<u8>(),
            Err(ModelError::DomainBounds { n: 9, max: 8 })
        );
    }

    #[test]
    fn test_width_is_narrowest_fit() {
        let width = |n| BoardSize::new(n).unwrap().width();
        assert_eq!(width(1), MaskWidth::U8);
        assert_eq!(width(8), MaskWidth::U8);
        assert_eq!(width(9), MaskWidth::U16);
        assert_eq!(width(32), MaskWidth::U32);
        assert_eq!(width(33), MaskWidth::U64);
        assert_eq!(width(65), MaskWidth::U128);
        assert_eq!(width(128), MaskWidth::U128);
        assert_eq!(format!("{}", MaskWidth::U16), "u16");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BoardSize::new(8).unwrap()), "8x8");
    }
}
