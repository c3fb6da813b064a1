// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Connectivity models and sets of unit steps.

use core::fmt;

use crate::coordinate::Coordinate;
use crate::point::Vector;

bitflags::bitflags! {
    /// A set of unit displacements between consecutive points of a curve.
    ///
    /// Directions are named with `y` growing upwards.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Steps: u8 {
        /// `(1, 0)`
        const EAST       = 0b0000_0001;
        /// `(1, 1)`
        const NORTH_EAST = 0b0000_0010;
        /// `(0, 1)`
        const NORTH      = 0b0000_0100;
        /// `(-1, 1)`
        const NORTH_WEST = 0b0000_1000;
        /// `(-1, 0)`
        const WEST       = 0b0001_0000;
        /// `(-1, -1)`
        const SOUTH_WEST = 0b0010_0000;
        /// `(0, -1)`
        const SOUTH      = 0b0100_0000;
        /// `(1, -1)`
        const SOUTH_EAST = 0b1000_0000;

        /// The four axis-aligned steps.
        const AXES = Self::EAST.bits() | Self::NORTH.bits() | Self::WEST.bits() | Self::SOUTH.bits();
        /// The four diagonal steps.
        const DIAGONALS = Self::NORTH_EAST.bits()
            | Self::NORTH_WEST.bits()
            | Self::SOUTH_WEST.bits()
            | Self::SOUTH_EAST.bits();
    }
}

impl Steps {
    /// The single step with unit components `(dx, dy)`.
    ///
    /// Returns an empty set for `(0, 0)` or for components outside `-1..=1`.
    pub const fn from_offset(dx: i8, dy: i8) -> Self {
        match (dx, dy) {
            (1, 0) => Self::EAST,
            (1, 1) => Self::NORTH_EAST,
            (0, 1) => Self::NORTH,
            (-1, 1) => Self::NORTH_WEST,
            (-1, 0) => Self::WEST,
            (-1, -1) => Self::SOUTH_WEST,
            (0, -1) => Self::SOUTH,
            (1, -1) => Self::SOUTH_EAST,
            _ => Self::empty(),
        }
    }

    /// The single step equal to `v`, or `None` when `v` is not a unit step.
    pub fn from_vector<T: Coordinate>(v: &Vector<T>) -> Option<Self> {
        let step = Self::from_offset(v.x.as_unit()?, v.y.as_unit()?);
        (!step.is_empty()).then_some(step)
    }
}

/// Adjacency model of the digital curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connectivity {
    /// Consecutive points differ by an axis-aligned unit step (standard DSS).
    Four,
    /// Consecutive points differ by an axis-aligned or diagonal unit step (naive DSS).
    Eight,
}

impl Connectivity {
    /// Steps allowed between two consecutive points of a curve.
    pub const fn steps(self) -> Steps {
        match self {
            Self::Four => Steps::AXES,
            Self::Eight => Steps::AXES.union(Steps::DIAGONALS),
        }
    }

    /// Whether `v` is a legal step between consecutive points.
    pub fn is_step<T: Coordinate>(self, v: &Vector<T>) -> bool {
        Steps::from_vector(v).is_some_and(|s| self.steps().contains(s))
    }

    /// Minimal slab width of a digital line with direction `(b, a)`.
    ///
    /// `|a| + |b|` for 4-connected (standard) lines, `max(|a|, |b|)` for
    /// 8-connected (naive) lines.
    pub fn omega<T: Coordinate>(self, a: &T, b: &T) -> T {
        match self {
            Self::Four => a.abs() + b.abs(),
            Self::Eight => core::cmp::max(a.abs(), b.abs()),
        }
    }
}

impl fmt::Display for Connectivity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Four => f.write_str("4-connected"),
            Self::Eight => f.write_str("8-connected"),
        }
    }
}
