// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Digital points and the point sequences they are read from.

use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::ops::{Add, Sub};

use crate::coordinate::Coordinate;

/// A point of the digital plane with exact integer coordinates.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate.
    pub y: T,
}

/// A displacement between two [`Point`]s.
pub type Vector<T> = Point<T>;

impl<T> Point<T> {
    /// Create a new point.
    #[inline(always)]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Coordinate> Point<T> {
    /// The exact cross product `self × other`.
    #[inline]
    pub fn cross(&self, other: &Self) -> T {
        self.x.clone() * other.y.clone() - self.y.clone() * other.x.clone()
    }
}

impl<T: Coordinate> Add for Point<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Coordinate> Sub for Point<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Coordinate> Sub for &Point<T> {
    type Output = Point<T>;

    #[inline]
    fn sub(self, rhs: Self) -> Point<T> {
        Point::new(self.x.clone() - rhs.x.clone(), self.y.clone() - rhs.y.clone())
    }
}

impl<T> From<(T, T)> for Point<T> {
    #[inline]
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

/// An ordered, random-access sequence of points: a contour or boundary trace.
///
/// Recognizers never own or copy the sequence. They keep indices into it and
/// are handed the sequence again on every call, so the sequence must not be
/// reordered while a recognizer refers to it.
pub trait PointSequence {
    /// Coordinate type of the points.
    type Coord: Coordinate;

    /// Number of points.
    fn len(&self) -> usize;

    /// The point at `index`, or `None` past either end.
    fn point(&self, index: usize) -> Option<&Point<Self::Coord>>;

    /// Whether the sequence holds no point at all.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Coordinate> PointSequence for [Point<T>] {
    type Coord = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn point(&self, index: usize) -> Option<&Point<T>> {
        self.get(index)
    }
}

impl<T: Coordinate, const N: usize> PointSequence for [Point<T>; N] {
    type Coord = T;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn point(&self, index: usize) -> Option<&Point<T>> {
        self.get(index)
    }
}

impl<T: Coordinate> PointSequence for Vec<Point<T>> {
    type Coord = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn point(&self, index: usize) -> Option<&Point<T>> {
        self.get(index)
    }
}

impl<T: Coordinate> PointSequence for VecDeque<Point<T>> {
    type Coord = T;

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn point(&self, index: usize) -> Option<&Point<T>> {
        self.get(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn arithmetic_and_cross() {
        let p = Point::new(5_i64, 2);
        let q = Point::new(2_i64, 0);
        assert_eq!(p.clone() - q.clone(), Point::new(3, 2));
        assert_eq!(&p - &q, Point::new(3, 2));
        assert_eq!(p.clone() + q.clone(), Point::new(7, 2));
        assert_eq!(p.cross(&q), -4);
        assert_eq!(Point::from((1_i32, -1)), Point::new(1, -1));
    }

    #[test]
    fn sequences_share_indexing() {
        let v: Vec<Point<i32>> = vec![Point::new(0, 0), Point::new(1, 0)];
        let d: VecDeque<Point<i32>> = v.iter().cloned().collect();
        let a = [Point::new(0, 0), Point::new(1, 0)];

        assert_eq!(PointSequence::len(&v), 2);
        assert_eq!(PointSequence::len(&d), 2);
        assert_eq!(PointSequence::len(&a), 2);
        assert_eq!(v.point(1), d.point(1));
        assert_eq!(a.point(1), v.as_slice().point(1));
        assert!(v.point(2).is_none());
        assert!(!PointSequence::is_empty(&v));
        assert!(PointSequence::is_empty(&Vec::<Point<i32>>::new()));
    }
}
