// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Real-valued bounding parallelogram of a DSS, as [`kurbo`] geometry.

use kurbo::BezPath;

use crate::coordinate::Coordinate;
use crate::dss::ArithmeticalDss;
use crate::point::{Point, PointSequence};

impl<T: Coordinate> ArithmeticalDss<T> {
    /// Corners of the parallelogram bounded by the two leaning lines and the
    /// perpendiculars through the end points.
    ///
    /// The corners are the orthogonal projections of the first and last
    /// points on the leaning lines, in the order first-upper, last-upper,
    /// last-lower, first-lower. Returns `None` when `curve` does not hold the
    /// end points.
    pub fn bounding_corners<C>(&self, curve: &C) -> Option<[kurbo::Point; 4]>
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let first = curve.point(self.first())?;
        let last = curve.point(self.last())?;
        let params = self.params();
        let lower = params.lower_remainder();
        let (a, b) = (params.a.to_f64(), params.b.to_f64());
        let norm = a * a + b * b;

        // Remainder differences are taken exactly before going to floats.
        let project = |p: &Point<T>, leaning: &T| {
            let t = (self.remainder(p) - leaning.clone()).to_f64() / norm;
            kurbo::Point::new(p.x.to_f64() - t * a, p.y.to_f64() + t * b)
        };
        Some([
            project(first, &params.mu),
            project(last, &params.mu),
            project(last, &lower),
            project(first, &lower),
        ])
    }

    /// The closed outline through [`bounding_corners`](Self::bounding_corners).
    pub fn bounding_path<C>(&self, curve: &C) -> Option<BezPath>
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let [p0, p1, p2, p3] = self.bounding_corners(curve)?;
        let mut path = BezPath::new();
        path.move_to(p0);
        path.line_to(p1);
        path.line_to(p2);
        path.line_to(p3);
        path.close_path();
        Some(path)
    }
}
