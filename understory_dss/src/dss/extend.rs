// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Growing a DSS at either end.

use super::{ArithmeticalDss, LeaningPoints};
use crate::coordinate::Coordinate;
use crate::point::{Point, PointSequence, Vector};
use crate::step::Steps;

impl<T: Coordinate> ArithmeticalDss<T> {
    /// Try to add the point following [`last`](Self::last).
    ///
    /// Succeeds when the next point exists, is reached by a step compatible
    /// with the current direction, and the enlarged run is still a DSS. A
    /// point just outside the slab (remainder `mu - 1` or `mu + omega`)
    /// updates the direction; anything further fails.
    ///
    /// Returns `false` and leaves `self` unchanged on failure.
    pub fn extend<C>(&mut self, curve: &C) -> bool
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let Some(next) = self.last.checked_add(1) else {
            return false;
        };
        let (Some(end), Some(candidate)) = (curve.point(self.last), curve.point(next)) else {
            return false;
        };
        if !self.accepts_step(&(candidate - end)) {
            return false;
        }

        if self.is_point() {
            self.start_run(candidate - end, end, self.first, next);
            return true;
        }

        let r = self.params.remainder(candidate);
        let mu = self.params.mu.clone();
        let lower_r = self.params.lower_remainder();
        if mu <= r && r <= lower_r {
            if r == mu {
                self.upper.last = next;
            }
            if r == lower_r {
                self.lower.last = next;
            }
        } else if r == mu - T::one() {
            // Weakly exterior above the upper line: pivot on its first point.
            let Some(pivot) = curve.point(self.upper.first) else {
                return false;
            };
            self.set_direction(candidate - pivot);
            self.params.mu = self.params.remainder(pivot);
            self.period = next - self.upper.first;
            self.upper.last = next;
            self.lower.first = self.lower.last;
        } else if r == lower_r + T::one() {
            let Some(pivot) = curve.point(self.lower.first) else {
                return false;
            };
            self.set_direction(candidate - pivot);
            self.params.mu =
                self.params.remainder(pivot) - self.params.omega.clone() + T::one();
            self.period = next - self.lower.first;
            self.lower.last = next;
            self.upper.first = self.upper.last;
        } else {
            return false;
        }
        self.last = next;
        true
    }

    /// Try to add the point preceding [`first`](Self::first).
    ///
    /// Mirror of [`extend`](Self::extend): direction stays oriented from the
    /// first to the last point, and the pivots are the last leaning points.
    ///
    /// Returns `false` and leaves `self` unchanged on failure.
    pub fn extend_opposite_end<C>(&mut self, curve: &C) -> bool
    where
        C: PointSequence<Coord = T> + ?Sized,
    {
        let Some(prev) = self.first.checked_sub(1) else {
            return false;
        };
        let (Some(start), Some(candidate)) = (curve.point(self.first), curve.point(prev)) else {
            return false;
        };
        if !self.accepts_step(&(start - candidate)) {
            return false;
        }

        if self.is_point() {
            self.start_run(start - candidate, candidate, prev, self.last);
            return true;
        }

        let r = self.params.remainder(candidate);
        let mu = self.params.mu.clone();
        let lower_r = self.params.lower_remainder();
        if mu <= r && r <= lower_r {
            if r == mu {
                self.upper.first = prev;
            }
            if r == lower_r {
                self.lower.first = prev;
            }
        } else if r == mu - T::one() {
            let Some(pivot) = curve.point(self.upper.last) else {
                return false;
            };
            self.set_direction(pivot - candidate);
            self.params.mu = self.params.remainder(candidate);
            self.period = self.upper.last - prev;
            self.upper.first = prev;
            self.lower.last = self.lower.first;
        } else if r == lower_r + T::one() {
            let Some(pivot) = curve.point(self.lower.last) else {
                return false;
            };
            self.set_direction(pivot - candidate);
            self.params.mu =
                self.params.remainder(candidate) - self.params.omega.clone() + T::one();
            self.period = self.lower.last - prev;
            self.lower.first = prev;
            self.upper.last = self.upper.first;
        } else {
            return false;
        }
        self.first = prev;
        true
    }

    fn accepts_step(&self, step: &Vector<T>) -> bool {
        Steps::from_vector(step).is_some_and(|s| self.compatible_steps().contains(s))
    }

    /// Turn a single point into the two-point run `first..=last` with the given step.
    fn start_run(&mut self, step: Vector<T>, back: &Point<T>, first: usize, last: usize) {
        self.set_direction(step);
        self.params.mu = self.params.remainder(back);
        self.period = 1;
        self.upper = LeaningPoints { first, last };
        self.lower = self.upper;
        self.first = first;
        self.last = last;
    }
}
