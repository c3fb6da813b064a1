// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact integer coordinate policy.

use core::cmp::Ordering;
use core::fmt::Debug;
use core::ops::{Add, Mul, Neg, Rem, Sub};

/// Exact integer scalar used for point coordinates and DSS parameters.
///
/// Recognition never rounds: every comparison is made on exact products of
/// coordinates. Pick a type wide enough for `|a·x| + |b·y|` over your
/// contours, or an arbitrary-precision type (`num_bigint::BigInt` with the
/// `bigint` feature). Overflow is not checked inside the algorithm.
///
/// Operations take owned values so that non-`Copy` big integers fit the same
/// bound as machine integers.
pub trait Coordinate:
    Clone
    + Ord
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
    + Rem<Output = Self>
{
    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// Lossy conversion used only by rendering helpers.
    fn to_f64(&self) -> f64;

    /// Absolute value.
    #[inline]
    fn abs(&self) -> Self {
        if *self < Self::zero() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Sign as `-1`, `0` or `1`.
    #[inline]
    fn signum(&self) -> i8 {
        match self.cmp(&Self::zero()) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }

    /// The value `-1`, `0` or `1` for a unit sign.
    #[inline]
    fn from_sign(sign: i8) -> Self {
        match sign.cmp(&0) {
            Ordering::Less => -Self::one(),
            Ordering::Equal => Self::zero(),
            Ordering::Greater => Self::one(),
        }
    }

    /// Classify a value as a unit component: `Some(-1 | 0 | 1)`, or `None`.
    #[inline]
    fn as_unit(&self) -> Option<i8> {
        if *self == Self::zero() {
            Some(0)
        } else if *self == Self::one() {
            Some(1)
        } else if *self == -Self::one() {
            Some(-1)
        } else {
            None
        }
    }
}

/// Greatest common divisor of `|a|` and `|b|` (Euclid). `gcd(0, 0) = 0`.
pub fn gcd<T: Coordinate>(a: &T, b: &T) -> T {
    let mut a = a.abs();
    let mut b = b.abs();
    while b != T::zero() {
        let r = a % b.clone();
        a = b;
        b = r;
    }
    a
}

macro_rules! impl_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                #[inline(always)]
                fn zero() -> Self {
                    0
                }

                #[inline(always)]
                fn one() -> Self {
                    1
                }

                #[allow(
                    clippy::cast_precision_loss,
                    reason = "Only used to place geometry for rendering."
                )]
                #[inline]
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                #[inline]
                fn abs(&self) -> Self {
                    <$t>::abs(*self)
                }

                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "signum is always -1, 0 or 1."
                )]
                #[inline]
                fn signum(&self) -> i8 {
                    <$t>::signum(*self) as i8
                }
            }
        )*
    };
}

impl_coordinate!(i32, i64, i128);

#[cfg(feature = "bigint")]
impl Coordinate for num_bigint::BigInt {
    #[inline]
    fn zero() -> Self {
        Self::from(0_u8)
    }

    #[inline]
    fn one() -> Self {
        Self::from(1_u8)
    }

    #[inline]
    fn to_f64(&self) -> f64 {
        num_traits::ToPrimitive::to_f64(self).unwrap_or(f64::NAN)
    }
}
