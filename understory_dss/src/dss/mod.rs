// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arithmetical digital straight segments.
//!
//! A DSS is a run `P[first..=last]` of a digital curve that satisfies
//! `mu <= a·x - b·y < mu + omega` for every point, where `(b, a)` is the
//! irreducible direction of the run and `omega` is the minimal width for the
//! connectivity. Points with remainder `mu` lie on the *upper* leaning line and
//! points with remainder `mu + omega - 1` on the *lower* one. Leaning points
//! of one line repeat every `period` indices inside the run, so tracking the
//! first and last leaning point of each line is enough to grow or shrink the
//! run in constant time.

use core::cmp::Ordering;
use core::fmt;

use crate::coordinate::{Coordinate, gcd};
use crate::line::StraightLine;
use crate::point::{Point, PointSequence, Vector};
use crate::step::{Connectivity, Steps};

mod extend;
mod retract;

/// Characteristics `(a, b, mu, omega)` of a digital straight line.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DssParameters<T> {
    /// `y` component of the direction vector `(b, a)`.
    pub a: T,
    /// `x` component of the direction vector `(b, a)`.
    pub b: T,
    /// Lower bound of the remainder.
    pub mu: T,
    /// Width of the remainder interval.
    pub omega: T,
}

impl<T: Coordinate> DssParameters<T> {
    /// The horizontal line through `p`: `(0, 1, -p.y, 1)`.
    pub fn through(p: &Point<T>) -> Self {
        Self {
            a: T::zero(),
            b: T::one(),
            mu: -p.y.clone(),
            omega: T::one(),
        }
    }

    /// The remainder `a·x - b·y` of `p`.
    #[inline]
    pub fn remainder(&self, p: &Point<T>) -> T {
        self.a.clone() * p.x.clone() - self.b.clone() * p.y.clone()
    }

    /// The direction vector `(b, a)`.
    #[inline]
    pub fn direction(&self) -> Vector<T> {
        Point::new(self.b.clone(), self.a.clone())
    }

    /// Remainder of the lower leaning points, `mu + omega - 1`.
    #[inline]
    pub fn lower_remainder(&self) -> T {
        self.mu.clone() + self.omega.clone() - T::one()
    }

    /// Whether `p` satisfies `mu <= a·x - b·y < mu + omega`.
    #[inline]
    pub fn contains(&self, p: &Point<T>) -> bool {
        let r = self.remainder(p);
        self.mu <= r && r <= self.lower_remainder()
    }
}

/// First and last leaning point of one bounding line, as curve indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LeaningPoints {
    /// Leaning point closest to the back end of the run.
    pub first: usize,
    /// Leaning point closest to the front end of the run.
    pub last: usize,
}

impl LeaningPoints {
    const fn at(index: usize) -> Self {
        Self {
            first: index,
            last: index,
        }
    }

    /// Whether the line touches the run at a single point.
    #[inline]
    pub const fn is_single(self) -> bool {
        self.first == self.last
    }

    /// Extreme leaning points of a run `first..=last` that has a leaning point
    /// at `anchor` and leaning points every `period` indices.
    fn spread(anchor: usize, first: usize, last: usize, period: usize) -> Self {
        debug_assert!(
            first <= anchor && anchor <= last && period > 0,
            "leaning anchor {anchor} must lie in {first}..={last} with a positive period"
        );
        Self {
            first: anchor - (anchor - first) / period * period,
            last: anchor + (last - anchor) / period * period,
        }
    }
}

/// Online recognizer of an arithmetical digital straight segment.
///
/// The recognizer holds indices into a caller-owned [`PointSequence`] and is
/// handed that sequence on every call. It grows at the front with
/// [`extend`](Self::extend), at the back with
/// [`extend_opposite_end`](Self::extend_opposite_end), and shrinks with
/// [`retract`](Self::retract) and
/// [`retract_opposite_end`](Self::retract_opposite_end).
///
/// Every mutating operation returns `false` and leaves the instance untouched
/// when it cannot be applied, so growth is written as `while dss.extend(&curve) {}`.
///
/// The state is a function of the recognized index range alone: two
/// recognizers covering the same points of the same curve compare equal,
/// whichever end they were grown from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArithmeticalDss<T> {
    connectivity: Connectivity,
    params: DssParameters<T>,
    // `omega` expressed as a number of indices along the run.
    period: usize,
    upper: LeaningPoints,
    lower: LeaningPoints,
    first: usize,
    last: usize,
}

impl<T: Coordinate> ArithmeticalDss<T> {
    /// Create a recognizer covering the single point at `index`.
    ///
    /// Returns `None` when `index` is outside `curve`.
    ///
    /// ```
    /// use understory_dss::{ArithmeticalDss, Connectivity, Point};
    ///
    /// let curve = [Point::new(0_i64, 0), Point::new(1, 0), Point::new(2, 1), Point::new(3, 1)];
    /// let mut dss = ArithmeticalDss::new(Connectivity::Eight, &curve, 0).unwrap();
    /// while dss.extend(&curve) {}
    /// assert_eq!((dss.a(), dss.b()), (&1, &2));
    /// assert_eq!(dss.last(), 3);
    /// ```
    pub fn new<C>(connectivity: Connectivity, curve: &C, index: usize) -> Option<Self>
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let p = curve.point(index)?;
        Some(Self::single(connectivity, p, index))
    }

    fn single(connectivity: Connectivity, p: &Point<T>, index: usize) -> Self {
        Self {
            connectivity,
            params: DssParameters::through(p),
            period: 1,
            upper: LeaningPoints::at(index),
            lower: LeaningPoints::at(index),
            first: index,
            last: index,
        }
    }

    /// Reset to the single point at `index`, keeping the connectivity.
    ///
    /// Returns `false` (and changes nothing) when `index` is outside `curve`.
    pub fn init<C>(&mut self, curve: &C, index: usize) -> bool
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        match curve.point(index) {
            Some(p) => {
                *self = Self::single(self.connectivity, p, index);
                true
            }
            None => false,
        }
    }

    /// Connectivity of the recognized curve.
    #[inline]
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Current characteristics.
    #[inline]
    pub fn params(&self) -> &DssParameters<T> {
        &self.params
    }

    /// `a` characteristic.
    #[inline]
    pub fn a(&self) -> &T {
        &self.params.a
    }

    /// `b` characteristic.
    #[inline]
    pub fn b(&self) -> &T {
        &self.params.b
    }

    /// `mu` characteristic.
    #[inline]
    pub fn mu(&self) -> &T {
        &self.params.mu
    }

    /// `omega` characteristic.
    #[inline]
    pub fn omega(&self) -> &T {
        &self.params.omega
    }

    /// Direction vector `(b, a)`, oriented from the first to the last point.
    #[inline]
    pub fn direction(&self) -> Vector<T> {
        self.params.direction()
    }

    /// Number of indices between two consecutive leaning points of one line.
    #[inline]
    pub fn period(&self) -> usize {
        self.period
    }

    /// Index of the first (back) point of the run.
    #[inline]
    pub fn first(&self) -> usize {
        self.first
    }

    /// Index of the last (front) point of the run.
    #[inline]
    pub fn last(&self) -> usize {
        self.last
    }

    /// Number of points in the run (at least one).
    #[expect(
        clippy::len_without_is_empty,
        reason = "A run always holds at least one point."
    )]
    #[inline]
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    /// Whether the run is a single point.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.first == self.last
    }

    /// Leaning points on the upper line (`remainder == mu`).
    #[inline]
    pub fn upper_leaning(&self) -> LeaningPoints {
        self.upper
    }

    /// Leaning points on the lower line (`remainder == mu + omega - 1`).
    #[inline]
    pub fn lower_leaning(&self) -> LeaningPoints {
        self.lower
    }

    /// The remainder `a·x - b·y` of `p` for the current characteristics.
    #[inline]
    pub fn remainder(&self, p: &Point<T>) -> T {
        self.params.remainder(p)
    }

    /// Whether `p` lies in the slab of the current characteristics.
    ///
    /// This does not check that `p` belongs to the run.
    #[inline]
    pub fn contains(&self, p: &Point<T>) -> bool {
        self.params.contains(p)
    }

    /// The points of the run, from first to last.
    pub fn points<'c, C>(&self, curve: &'c C) -> impl Iterator<Item = &'c Point<T>> + use<'c, C, T>
    where
        C: PointSequence<Coord = T> + ?Sized,
        T: 'c,
    {
        (self.first..=self.last).filter_map(move |i| curve.point(i))
    }

    /// The upper leaning line, through the first upper leaning point.
    pub fn upper_line<C>(&self, curve: &C) -> Option<StraightLine<T>>
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let p = curve.point(self.upper.first)?;
        Some(StraightLine::new(p.clone(), p.clone() + self.direction()))
    }

    /// The lower leaning line, through the first lower leaning point.
    pub fn lower_line<C>(&self, curve: &C) -> Option<StraightLine<T>>
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let p = curve.point(self.lower.first)?;
        Some(StraightLine::new(p.clone(), p.clone() + self.direction()))
    }

    /// Steps that can follow the last point (or precede the first one) on a
    /// digital line with the current direction.
    ///
    /// A single point accepts every step of the connectivity. Longer runs
    /// only accept the steps of their octant (8-connectivity) or quadrant
    /// (4-connectivity); an axis-parallel or diagonal run keeps both
    /// neighbouring octants open.
    pub fn compatible_steps(&self) -> Steps {
        if self.is_point() {
            return self.connectivity.steps();
        }
        let sx = self.params.b.signum();
        let sy = self.params.a.signum();
        let step = Steps::from_offset;
        match self.connectivity {
            Connectivity::Four => match (sx, sy) {
                (_, 0) => step(sx, 0) | Steps::NORTH | Steps::SOUTH,
                (0, _) => step(0, sy) | Steps::EAST | Steps::WEST,
                _ => step(sx, 0) | step(0, sy),
            },
            Connectivity::Eight => match self.params.b.abs().cmp(&self.params.a.abs()) {
                Ordering::Greater if sy == 0 => step(sx, 0) | step(sx, 1) | step(sx, -1),
                Ordering::Greater => step(sx, 0) | step(sx, sy),
                Ordering::Less if sx == 0 => step(0, sy) | step(1, sy) | step(-1, sy),
                Ordering::Less => step(0, sy) | step(sx, sy),
                Ordering::Equal => step(sx, sy) | step(sx, 0) | step(0, sy),
            },
        }
    }

    /// Unit vector `c` crossing the slab: `remainder(c) == omega` and `c`
    /// makes no progress along the run.
    fn slab_shift(&self) -> Vector<T> {
        let sx = self.params.b.signum();
        let sy = self.params.a.signum();
        let (dx, dy) = match self.connectivity {
            Connectivity::Four => (sy, -sx),
            Connectivity::Eight if self.params.b.abs() >= self.params.a.abs() => (0, -sx),
            Connectivity::Eight => (sy, 0),
        };
        Point::new(T::from_sign(dx), T::from_sign(dy))
    }

    fn set_direction(&mut self, direction: Vector<T>) {
        let Point { x: b, y: a } = direction;
        self.params.omega = self.connectivity.omega(&a, &b);
        self.params.a = a;
        self.params.b = b;
        debug_assert!(
            gcd(&self.params.a, &self.params.b) == T::one(),
            "DSS direction must be irreducible, got {:?}",
            self.params.direction()
        );
    }

    /// Check the tracked state against `curve`.
    ///
    /// This is an O(1) consistency check on the endpoints and the tracked
    /// leaning points: they must lie in the slab with the expected remainders,
    /// the direction must be irreducible with the minimal `omega` for the
    /// connectivity, and leaning points must repeat every period.
    pub fn is_valid<C>(&self, curve: &C) -> bool
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let Self {
            connectivity,
            params,
            period,
            upper,
            lower,
            first,
            last,
        } = self;
        let (first, last, period) = (*first, *last, *period);

        if first > last || last >= curve.len() || period == 0 {
            return false;
        }
        if gcd(&params.a, &params.b) != T::one()
            || params.omega != connectivity.omega(&params.a, &params.b)
        {
            return false;
        }
        for line in [upper, lower] {
            let ordered = first <= line.first && line.first <= line.last && line.last <= last;
            if !ordered
                || (line.last - line.first) % period != 0
                || line.first - first >= period
                || last - line.last >= period
            {
                return false;
            }
        }

        let remainder_at = |i: usize| curve.point(i).map(|p| params.remainder(p));
        let lower_r = params.lower_remainder();
        let leaning_ok = [upper.first, upper.last]
            .into_iter()
            .all(|i| remainder_at(i).as_ref() == Some(&params.mu))
            && [lower.first, lower.last]
                .into_iter()
                .all(|i| remainder_at(i).as_ref() == Some(&lower_r));
        let ends_ok = [first, last]
            .into_iter()
            .all(|i| curve.point(i).is_some_and(|p| params.contains(p)));
        if !leaning_ok || !ends_ok {
            return false;
        }

        if let Some(next) = upper.first.checked_add(period)
            && next <= last
        {
            let (Some(p), Some(q)) = (curve.point(upper.first), curve.point(next)) else {
                return false;
            };
            if p.clone() + params.direction() != *q {
                return false;
            }
        }
        true
    }
}

impl<T: Coordinate + fmt::Display> fmt::Display for ArithmeticalDss<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let DssParameters { a, b, mu, omega } = &self.params;
        write!(
            f,
            "[ArithmeticalDss] {} (a,b,mu,omega)=({a},{b},{mu},{omega}) points={}..={} upper={}..={} lower={}..={}",
            self.connectivity,
            self.first,
            self.last,
            self.upper.first,
            self.upper.last,
            self.lower.first,
            self.lower.last,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    fn pts(coords: &[(i64, i64)]) -> Vec<Point<i64>> {
        coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn single_point_state() {
        let curve = pts(&[(3, 7)]);
        let dss = ArithmeticalDss::new(Connectivity::Four, &curve, 0).unwrap();
        assert_eq!(
            dss.params(),
            &DssParameters {
                a: 0,
                b: 1,
                mu: -7,
                omega: 1
            }
        );
        assert_eq!(dss.len(), 1);
        assert!(dss.is_point());
        assert_eq!(dss.upper_leaning(), LeaningPoints { first: 0, last: 0 });
        assert_eq!(dss.lower_leaning(), dss.upper_leaning());
        assert_eq!(dss.compatible_steps(), Steps::AXES);
        assert!(dss.is_valid(&curve));
        assert!(ArithmeticalDss::new(Connectivity::Four, &curve, 1).is_none());
    }

    #[test]
    fn init_out_of_range_keeps_state() {
        let curve = pts(&[(0, 0), (1, 0)]);
        let mut dss = ArithmeticalDss::new(Connectivity::Eight, &curve, 0).unwrap();
        assert!(dss.extend(&curve));
        let before = dss.clone();
        assert!(!dss.init(&curve, 5));
        assert_eq!(dss, before);
        assert!(dss.init(&curve, 1));
        assert_eq!(dss.first(), 1);
        assert_eq!(dss.connectivity(), Connectivity::Eight);
    }

    #[test]
    fn compatible_steps_per_octant() {
        // 8-connected run of slope 1/2 heading east.
        let curve = pts(&[(0, 0), (1, 0), (2, 1)]);
        let mut dss = ArithmeticalDss::new(Connectivity::Eight, &curve, 0).unwrap();
        while dss.extend(&curve) {}
        assert_eq!(dss.compatible_steps(), Steps::EAST | Steps::NORTH_EAST);

        // A horizontal 4-connected run opens both vertical steps.
        let curve = pts(&[(0, 0), (-1, 0)]);
        let mut dss = ArithmeticalDss::new(Connectivity::Four, &curve, 0).unwrap();
        assert!(dss.extend(&curve));
        assert_eq!(dss.compatible_steps(), Steps::WEST | Steps::NORTH | Steps::SOUTH);

        // A diagonal 8-connected run keeps both axis neighbours.
        let curve = pts(&[(0, 0), (-1, -1)]);
        let mut dss = ArithmeticalDss::new(Connectivity::Eight, &curve, 0).unwrap();
        assert!(dss.extend(&curve));
        assert_eq!(
            dss.compatible_steps(),
            Steps::SOUTH_WEST | Steps::WEST | Steps::SOUTH
        );
    }

    #[test]
    fn slab_shift_crosses_exactly_one_width() {
        let curve = pts(&[(0, 0), (1, 0), (2, 0), (3, 0), (3, 1), (4, 1), (5, 1), (5, 2)]);
        for connectivity in [Connectivity::Four, Connectivity::Eight] {
            let mut dss = ArithmeticalDss::new(connectivity, &curve, 0).unwrap();
            while dss.extend(&curve) {}
            let c = dss.slab_shift();
            assert_eq!(dss.remainder(&c), dss.omega().clone());
        }
    }

    #[test]
    fn leaning_spread_is_periodic() {
        assert_eq!(LeaningPoints::spread(5, 0, 7, 3), LeaningPoints { first: 2, last: 5 });
        assert_eq!(LeaningPoints::spread(1, 0, 7, 3), LeaningPoints { first: 1, last: 7 });
        assert_eq!(LeaningPoints::spread(4, 4, 4, 1), LeaningPoints::at(4));
    }

    #[test]
    fn validity_rejects_tampered_state() {
        let curve = pts(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        let mut dss = ArithmeticalDss::new(Connectivity::Four, &curve, 0).unwrap();
        while dss.extend(&curve) {}
        assert!(dss.is_valid(&curve));

        let mut reducible = dss.clone();
        reducible.params.a = 2;
        reducible.params.b = 2;
        assert!(!reducible.is_valid(&curve));

        let mut wide = dss.clone();
        wide.params.omega = 3;
        assert!(!wide.is_valid(&curve));

        let mut stray = dss.clone();
        stray.upper.last = 3;
        assert!(!stray.is_valid(&curve));

        let shorter = pts(&[(0, 0), (1, 0)]);
        assert!(!dss.is_valid(&shorter));
    }

    #[test]
    fn display_lists_characteristics() {
        let curve = pts(&[(0, 0), (1, 1)]);
        let mut dss = ArithmeticalDss::new(Connectivity::Eight, &curve, 0).unwrap();
        assert!(dss.extend(&curve));
        assert_eq!(
            format!("{dss}"),
            "[ArithmeticalDss] 8-connected (a,b,mu,omega)=(1,1,0,1) points=0..=1 upper=0..=1 lower=0..=1"
        );
    }

    #[test]
    fn leaning_lines_bound_the_run() {
        use crate::line::{Boundary, HalfPlane, Orientation};

        let curve = pts(&[(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2), (6, 2)]);
        let mut dss = ArithmeticalDss::new(Connectivity::Eight, &curve, 0).unwrap();
        while dss.extend(&curve) {}
        let below_upper = HalfPlane::new(
            dss.upper_line(&curve).unwrap(),
            Orientation::Down,
            Boundary::Closed,
        );
        let above_lower = HalfPlane::new(
            dss.lower_line(&curve).unwrap(),
            Orientation::Up,
            Boundary::Closed,
        );
        for p in dss.points(&curve) {
            assert!(below_upper.contains(p), "{p:?} above the upper leaning line");
            assert!(above_lower.contains(p), "{p:?} below the lower leaning line");
        }
        assert_eq!(dss.points(&curve).count(), dss.len());
    }
}
