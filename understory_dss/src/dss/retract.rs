// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shrinking a DSS at either end.
//!
//! Removing an end point only changes the characteristics when that point was
//! the last leaning point it shared with the opposite line. The new direction
//! is then read off the remaining leaning points, shifted by one slab width,
//! and the leaning points are spread over the run with the new period.

use super::{ArithmeticalDss, LeaningPoints};
use crate::coordinate::Coordinate;
use crate::point::{Point, PointSequence, Vector};

impl<T: Coordinate> ArithmeticalDss<T> {
    /// Remove the last point, undoing [`extend`](Self::extend).
    ///
    /// Returns `false` for a single point, or when `curve` no longer holds
    /// the points the state refers to. `self` is unchanged on failure.
    pub fn retract<C>(&mut self, curve: &C) -> bool
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        if self.is_point() {
            return false;
        }
        let removed = self.last;
        let last = removed - 1;
        if last == self.first {
            return self.init(curve, last);
        }
        if self.period == 1 {
            self.upper.last = last;
            self.lower.last = last;
            self.last = last;
            return true;
        }

        let (mut upper, mut lower) = (self.upper, self.lower);
        if removed == upper.last {
            debug_assert!(!upper.is_single(), "upper line lost its only leaning point");
            upper.last -= self.period;
            if upper.is_single() && lower.is_single() {
                let (Some(end), Some(pivot), Some(anchor)) = (
                    curve.point(removed),
                    curve.point(lower.last),
                    curve.point(upper.first),
                ) else {
                    return false;
                };
                let direction = end - pivot + self.slab_shift();
                let period = removed - lower.last;
                self.reshape(direction, period, anchor, upper.first, lower.last, self.first, last);
                return true;
            }
        } else if removed == lower.last {
            debug_assert!(!lower.is_single(), "lower line lost its only leaning point");
            lower.last -= self.period;
            if upper.is_single() && lower.is_single() {
                let (Some(end), Some(pivot)) = (curve.point(removed), curve.point(upper.last))
                else {
                    return false;
                };
                let direction = end - pivot - self.slab_shift();
                let period = removed - upper.last;
                self.reshape(direction, period, pivot, upper.last, lower.first, self.first, last);
                return true;
            }
        }
        self.upper = upper;
        self.lower = lower;
        self.last = last;
        true
    }

    /// Remove the first point, undoing
    /// [`extend_opposite_end`](Self::extend_opposite_end).
    ///
    /// Returns `false` for a single point, or when `curve` no longer holds
    /// the points the state refers to. `self` is unchanged on failure.
    pub fn retract_opposite_end<C>(&mut self, curve: &C) -> bool
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        if self.is_point() {
            return false;
        }
        let removed = self.first;
        let first = removed + 1;
        if first == self.last {
            return self.init(curve, first);
        }
        if self.period == 1 {
            self.upper.first = first;
            self.lower.first = first;
            self.first = first;
            return true;
        }

        let (mut upper, mut lower) = (self.upper, self.lower);
        if removed == upper.first {
            debug_assert!(!upper.is_single(), "upper line lost its only leaning point");
            upper.first += self.period;
            if upper.is_single() && lower.is_single() {
                let (Some(start), Some(pivot), Some(anchor)) = (
                    curve.point(removed),
                    curve.point(lower.first),
                    curve.point(upper.last),
                ) else {
                    return false;
                };
                let direction = pivot - start - self.slab_shift();
                let period = lower.first - removed;
                self.reshape(direction, period, anchor, upper.last, lower.first, first, self.last);
                return true;
            }
        } else if removed == lower.first {
            debug_assert!(!lower.is_single(), "lower line lost its only leaning point");
            lower.first += self.period;
            if upper.is_single() && lower.is_single() {
                let (Some(start), Some(pivot)) = (curve.point(removed), curve.point(upper.first))
                else {
                    return false;
                };
                let direction = pivot - start + self.slab_shift();
                let period = upper.first - removed;
                self.reshape(direction, period, pivot, upper.first, lower.last, first, self.last);
                return true;
            }
        }
        self.upper = upper;
        self.lower = lower;
        self.first = first;
        true
    }

    /// Install a new direction over `first..=last`, with `upper_point` (at
    /// `upper_anchor`) on the upper line and `lower_anchor` on the lower one.
    fn reshape(
        &mut self,
        direction: Vector<T>,
        period: usize,
        upper_point: &Point<T>,
        upper_anchor: usize,
        lower_anchor: usize,
        first: usize,
        last: usize,
    ) {
        self.set_direction(direction);
        self.params.mu = self.params.remainder(upper_point);
        self.period = period;
        self.upper = LeaningPoints::spread(upper_anchor, first, last, period);
        self.lower = LeaningPoints::spread(lower_anchor, first, last, period);
        self.first = first;
        self.last = last;
    }
}
