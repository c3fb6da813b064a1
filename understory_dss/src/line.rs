// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact straight lines and half-planes.

use core::cmp::Ordering;

use crate::coordinate::Coordinate;
use crate::point::{Point, Vector};

/// The oriented straight line through two distinct points.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StraightLine<T> {
    p: Point<T>,
    q: Point<T>,
}

impl<T: Coordinate> StraightLine<T> {
    /// The line through `p` and `q`, oriented from `p` to `q`.
    pub fn new(p: Point<T>, q: Point<T>) -> Self {
        debug_assert!(p != q, "a straight line needs two distinct points, got {p:?} twice");
        Self { p, q }
    }

    /// Origin point.
    pub fn p(&self) -> &Point<T> {
        &self.p
    }

    /// Second point.
    pub fn q(&self) -> &Point<T> {
        &self.q
    }

    /// Direction `q - p`.
    pub fn direction(&self) -> Vector<T> {
        &self.q - &self.p
    }

    /// Which side of the line `r` is on.
    ///
    /// `Greater` is to the left of the oriented line (above it for a line
    /// heading east), `Less` to the right, `Equal` on it. The test is the sign
    /// of the exact cross product `(q - p) × (r - p)`.
    pub fn side(&self, r: &Point<T>) -> Ordering {
        self.direction().cross(&(r - &self.p)).cmp(&T::zero())
    }
}

/// Which side of its line a [`HalfPlane`] keeps.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left of the oriented line.
    Up,
    /// Right of the oriented line.
    Down,
}

/// Whether a [`HalfPlane`] includes its boundary line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Points on the line belong to the half-plane.
    Closed,
    /// Points on the line do not.
    Open,
}

/// A half-plane bounded by a [`StraightLine`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HalfPlane<T> {
    line: StraightLine<T>,
    orientation: Orientation,
    boundary: Boundary,
}

impl<T: Coordinate> HalfPlane<T> {
    /// Create a half-plane.
    pub fn new(line: StraightLine<T>, orientation: Orientation, boundary: Boundary) -> Self {
        Self {
            line,
            orientation,
            boundary,
        }
    }

    /// Bounding line.
    pub fn line(&self) -> &StraightLine<T> {
        &self.line
    }

    /// Kept side.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Boundary inclusion.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Whether `r` lies in the half-plane.
    pub fn contains(&self, r: &Point<T>) -> bool {
        let kept = match self.orientation {
            Orientation::Up => Ordering::Greater,
            Orientation::Down => Ordering::Less,
        };
        match self.line.side(r) {
            Ordering::Equal => self.boundary == Boundary::Closed,
            side => side == kept,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> (StraightLine<i64>, [Point<i64>; 3]) {
        let line = StraightLine::new(Point::new(0, 0), Point::new(5, 2));
        (line, [Point::new(2, 0), Point::new(0, 2), Point::new(10, 4)])
    }

    #[test]
    fn side_of_line() {
        let (line, [r1, r2, r3]) = scenario();
        assert_eq!(line.side(&r1), Ordering::Less);
        assert_eq!(line.side(&r2), Ordering::Greater);
        assert_eq!(line.side(&r3), Ordering::Equal);
        assert_eq!(line.direction(), Point::new(5, 2));
    }

    #[test]
    fn half_plane_membership() {
        let (line, [r1, r2, r3]) = scenario();

        let up_closed = HalfPlane::new(line.clone(), Orientation::Up, Boundary::Closed);
        assert!(!up_closed.contains(&r1));
        assert!(up_closed.contains(&r2));
        assert!(up_closed.contains(&r3));

        let up_open = HalfPlane::new(line.clone(), Orientation::Up, Boundary::Open);
        assert!(!up_open.contains(&r1));
        assert!(up_open.contains(&r2));
        assert!(!up_open.contains(&r3));

        let down_closed = HalfPlane::new(line, Orientation::Down, Boundary::Closed);
        assert!(down_closed.contains(&r1));
        assert!(!down_closed.contains(&r2));
        assert!(down_closed.contains(&r3));
    }

    #[test]
    fn reversed_line_swaps_sides() {
        let (line, [r1, r2, _]) = scenario();
        let reversed = StraightLine::new(line.q().clone(), line.p().clone());
        assert_eq!(reversed.side(&r1), Ordering::Greater);
        assert_eq!(reversed.side(&r2), Ordering::Less);
    }
}
