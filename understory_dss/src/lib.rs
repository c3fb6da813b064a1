// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dss --heading-base-level=0

//! Understory DSS: online recognition of arithmetical digital straight segments.
//!
//! A digital curve is an ordered sequence of integer points where consecutive
//! points differ by a unit step. A *digital straight segment* (DSS) is a run of
//! that curve which is the digitization of a real segment. This crate
//! recognizes such runs incrementally:
//!
//! - Grow a run at either end with [`ArithmeticalDss::extend`] and
//!   [`ArithmeticalDss::extend_opposite_end`].
//! - Shrink it with [`ArithmeticalDss::retract`] and
//!   [`ArithmeticalDss::retract_opposite_end`].
//! - Read the exact characteristics `(a, b, mu, omega)` of the minimal digital
//!   line containing the run, and its leaning points.
//!
//! Every operation runs in constant time and uses exact integer arithmetic.
//! The recognizer never owns the curve: it holds indices and is handed any
//! [`PointSequence`] (slice, array, `Vec`, `VecDeque`, or your own container)
//! on each call.
//!
//! Both classic models are supported through [`Connectivity`]:
//! 4-connected curves give *standard* segments (`omega = |a| + |b|`) and
//! 8-connected curves give *naive* segments (`omega = max(|a|, |b|)`).
//!
//! ## Features
//!
//! - `std` *(default)*: forwards `std` to optional dependencies.
//! - `libm`: `no_std` float support for `kurbo`.
//! - `kurbo`: bounding parallelograms as [`kurbo`] geometry, for renderers.
//! - `bigint`: implements [`Coordinate`] for `num_bigint::BigInt`.
//!
//! # Example
//!
//! ```rust
//! use understory_dss::{ArithmeticalDss, Connectivity, Point};
//!
//! let curve = [(0_i64, 0), (1, 0), (2, 0), (3, 0), (3, 1), (4, 1), (5, 1), (5, 2)]
//!     .map(|(x, y)| Point::new(x, y));
//!
//! let mut dss = ArithmeticalDss::new(Connectivity::Four, &curve, 0).unwrap();
//! while dss.extend(&curve) {}
//!
//! assert_eq!(dss.len(), curve.len());
//! assert_eq!((*dss.a(), *dss.b(), *dss.mu(), *dss.omega()), (2, 5, 0, 7));
//! assert!(curve.iter().all(|p| dss.contains(p)));
//!
//! // Drop the first point again.
//! assert!(dss.retract_opposite_end(&curve));
//! assert_eq!((*dss.a(), *dss.b()), (1, 2));
//! ```
//!
//! Recognition stops at the first point that would break straightness, which
//! makes greedy segmentation a two-line loop:
//!
//! ```rust
//! use understory_dss::{ArithmeticalDss, Connectivity, Point};
//!
//! let curve: Vec<Point<i32>> = [(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (2, 3)]
//!     .into_iter()
//!     .map(Point::from)
//!     .collect();
//!
//! let mut segments = Vec::new();
//! let mut start = 0;
//! while start + 1 < curve.len() {
//!     let mut dss = ArithmeticalDss::new(Connectivity::Eight, &curve, start).unwrap();
//!     while dss.extend(&curve) {}
//!     segments.push((dss.first(), dss.last()));
//!     start = dss.last();
//! }
//! assert_eq!(segments, [(0, 2), (2, 5)]);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "kurbo")]
mod bounds;
mod coordinate;
mod dss;
mod line;
mod point;
mod step;

pub use coordinate::{Coordinate, gcd};
pub use dss::{ArithmeticalDss, DssParameters, LeaningPoints};
pub use line::{Boundary, HalfPlane, Orientation, StraightLine};
pub use point::{Point, PointSequence, Vector};
pub use step::{Connectivity, Steps};
