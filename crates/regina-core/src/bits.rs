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

//! # Bit Words
//!
//! Fixed-width occupancy masks over the unsigned primitive integers. A
//! `BitWord` is any of `u8`, `u16`, `u32`, `u64` or `u128`; callers choose the
//! narrowest width that still holds their domain and stay generic otherwise.
//!
//! ## Highlights
//!
//! - `BitWord` bundles the `num_traits` bounds the search needs (`PrimInt`,
//!   `Unsigned`, `WrappingNeg`) together with `Send + Sync` and the width as
//!   an associated constant.
//! - `low_mask(n)` returns the word with the lowest `n` bits set, including
//!   the full-width case, and refuses domains wider than the word.
//! - `SetBits` walks a mask lowest bit first using the
//!   "isolate lowest set bit, clear it" idiom. Every set bit is yielded
//!   exactly once as a single-bit word.
//!
//! ## Usage
//!
//! ```rust
//! use regina_core::bits::{low_mask, SetBits};
//!
//! let full: u8 = low_mask(5).unwrap();
//! assert_eq!(full, 0b1_1111);
//!
//! let bits: Vec<u8> = SetBits::new(0b1010_0100u8).collect();
//! assert_eq!(bits, vec![0b0000_0100, 0b0010_0000, 0b1000_0000]);
//! ```

use num_traits::{PrimInt, Unsigned, WrappingNeg};
use std::iter::FusedIterator;

/// An unsigned machine word used as a bit set.
///
/// Implemented for all unsigned primitive widths. `BITS` is the number of
/// usable bit positions.
pub trait BitWord:
    PrimInt + Unsigned + WrappingNeg + Send + Sync + std::fmt::Debug + 'static
{
    /// The number of bits in the word.
    const BITS: u32;
}

macro_rules! impl_bit_word_for {
    ($($t:ty),*) => {
        $(
            impl BitWord for $t {
                const BITS: u32 = <$t>::BITS;
            }
        )*
    };
}

impl_bit_word_for!(u8, u16, u32, u64, u128);

/// Returns the word with the lowest `n` bits set.
///
/// Returns `None` if `n` exceeds the width of `W`. `n == W::BITS` yields a
/// word with every bit set.
///
/// # Examples
///
/// ```rust
/// # use regina_core::bits::low_mask;
///
/// assert_eq!(low_mask::<u8>(0), Some(0));
/// assert_eq!(low_mask::<u8>(8), Some(u8::MAX));
/// assert_eq!(low_mask::<u8>(9), None);
/// ```
#[inline]
pub fn low_mask<W>(n: usize) -> Option<W>
where
    W: BitWord,
{
    let width = W::BITS as usize;
    if n > width {
        return None;
    }
    if n == width {
        return Some(W::max_value());
    }
    Some((W::one() << n) - W::one())
}

/// Iterator over the set bits of a word, lowest bit first.
///
/// Each item is a word with exactly one bit set. The iterator owns a copy of
/// the mask and clears each bit as it is yielded, so it terminates as soon as
/// the remaining mask is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBits<W> {
    remaining: W,
}

impl<W> SetBits<W>
where
    W: BitWord,
{
    /// Creates an iterator over the set bits of `word`.
    #[inline]
    pub fn new(word: W) -> Self {
        Self { remaining: word }
    }

    /// Returns the bits not yet yielded.
    #[inline]
    pub fn remaining(&self) -> W {
        self.remaining
    }

    /// Converts this iterator into one over bit positions (`0` is the
    /// least significant bit).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use regina_core::bits::SetBits;
    ///
    /// let positions: Vec<u32> = SetBits::new(0b1001_0010u16).positions().collect();
    /// assert_eq!(positions, vec![1, 4, 7]);
    /// ```
    #[inline]
    pub fn positions(self) -> Positions<W> {
        Positions { bits: self }
    }
}

impl<W> Iterator for SetBits<W>
where
    W: BitWord,
{
    type Item = W;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_zero() {
            return None;
        }
        let lowest = self.remaining & self.remaining.wrapping_neg();
        self.remaining = self.remaining & !lowest;
        Some(lowest)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining.count_ones() as usize;
        (n, Some(n))
    }
}

impl<W> ExactSizeIterator for SetBits<W> where W: BitWord {}

impl<W> FusedIterator for SetBits<W> where W: BitWord {}

/// Iterator over the positions of the set bits of a word, lowest first.
///
/// Created by [`SetBits::positions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Positions<W> {
    bits: SetBits<W>,
}

impl<W> Iterator for Positions<W>
where
    W: BitWord,
{
    type Item = u32;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.bits.next().map(|bit| bit.trailing_zeros())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.bits.size_hint()
    }
}

impl<W> ExactSizeIterator for Positions<W> where W: BitWord {}

impl<W> FusedIterator for Positions<W> where W: BitWord {}
