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

//! # Monoids
//!
//! Partial search results are combined with an associative operation that
//! has an identity element. `Monoid` captures exactly that, with a
//! destructive `combine` that drains the right-hand side back to the
//! identity so that splicing containers stays O(1).
//!
//! ## Laws
//!
//! For all `a`, `b`, `c`:
//!
//! - `a.combined(b).combined(c) == a.combined(b.combined(c))`
//! - `identity().combined(a) == a == a.combined(identity())`
//! - after `a.combine(&mut b)`, `b == identity()`
//!
//! ## Usage
//!
//! ```rust
//! use regina_core::monoid::Monoid;
//!
//! #[derive(Debug, PartialEq)]
//! struct Total(u64);
//!
//! impl Monoid for Total {
//!     fn identity() -> Self {
//!         Total(0)
//!     }
//!
//!     fn combine(&mut self, other: &mut Self) {
//!         self.0 += std::mem::replace(&mut other.0, 0);
//!     }
//! }
//!
//! let mut a = Total(2);
//! let mut b = Total(3);
//! a.combine(&mut b);
//! assert_eq!(a, Total(5));
//! assert_eq!(b, Total::identity());
//! ```

/// An associative combine operation with an identity element.
pub trait Monoid: Sized {
    /// Returns the identity element.
    fn identity() -> Self;

    /// Moves the contents of `other` into `self`.
    ///
    /// `other` is left equal to the identity.
    fn combine(&mut self, other: &mut Self);

    /// By-value form of [`Monoid::combine`], convenient in reductions.
    #[inline]
    fn combined(mut self, mut other: Self) -> Self {
        self.combine(&mut other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::Monoid;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Concat(Vec<u32>);

    impl Monoid for Concat {
        fn identity() -> Self {
            Concat(Vec::new())
        }

        fn combine(&mut self, other: &mut Self) {
            self.0.append(&mut other.0);
        }
    }

    fn c(v: &[u32]) -> Concat {
        Concat(v.to_vec())
    }

    #[test]
    fn test_combine_is_associative() {
        let left = c(&[1, 2]).combined(c(&[3])).combined(c(&[4, 5]));
        let right = c(&[1, 2]).combined(c(&[3]).combined(c(&[4, 5])));
        assert_eq!(left, right);
        assert_eq!(left, c(&[1, 2, 3, 4, 5]));
    }

    #[test]
    fn test_identity_is_neutral_on_both_sides() {
        let x = c(&[7, 8]);
        assert_eq!(Concat::identity().combined(x.clone()), x);
        assert_eq!(x.clone().combined(Concat::identity()), x);
    }

    #[test]
    fn test_combine_drains_source() {
        let mut a = c(&[1]);
        let mut b = c(&[2, 3]);
        a.combine(&mut b);
        assert_eq!(b, Concat::identity());
        assert_eq!(a, c(&[1, 2, 3]));
    }
}
