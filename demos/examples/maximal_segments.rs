// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Greedy segmentation and maximal segments of a digitized circle arc.
//!
//! This example shows how to:
//! - grow an `ArithmeticalDss` until the curve stops being straight,
//! - slide it along the curve with `retract_opposite_end` to list every
//!   maximal segment,
//! - turn a segment into `kurbo` geometry for drawing.
//!
//! Run:
//! - `cargo run -p understory_dss_demos --example maximal_segments`

use kurbo::Shape as _;
use understory_dss::{ArithmeticalDss, Connectivity, Point};

/// First octant of a midpoint-circle digitization, clockwise from the top.
fn circle_octant(radius: i64) -> Vec<Point<i64>> {
    let mut points = Vec::new();
    let (mut x, mut y) = (0, radius);
    let mut d = 1 - radius;
    while x <= y {
        points.push(Point::new(x, y));
        if d < 0 {
            d += 2 * x + 3;
        } else {
            d += 2 * (x - y) + 5;
            y -= 1;
        }
        x += 1;
    }
    points
}

fn main() {
    let curve = circle_octant(40);
    println!("curve: {} points, 8-connected", curve.len());

    // Greedy segmentation: each segment restarts at the end of the previous one.
    println!("\n== greedy segmentation ==");
    let mut start = 0;
    while start + 1 < curve.len() {
        let Some(mut dss) = ArithmeticalDss::new(Connectivity::Eight, &curve, start) else {
            break;
        };
        while dss.extend(&curve) {}
        println!("{dss}");
        start = dss.last();
    }

    // Maximal segments: drop points at the back until the front can grow again.
    println!("\n== maximal segments ==");
    let Some(mut dss) = ArithmeticalDss::new(Connectivity::Eight, &curve, 0) else {
        return;
    };
    while dss.extend(&curve) {}
    let mut maximal = vec![dss.clone()];
    'scan: while dss.last() + 1 < curve.len() {
        while !dss.extend(&curve) {
            if !dss.retract_opposite_end(&curve) {
                // A single point that cannot grow: the curve is broken here.
                break 'scan;
            }
        }
        while dss.extend(&curve) {}
        maximal.push(dss.clone());
    }

    for segment in &maximal {
        let area = segment
            .bounding_path(&curve)
            .map(|path| path.area().abs())
            .unwrap_or_default();
        println!(
            "{:>3}..={:<3} direction=({}, {}) bounding area={area:.2}",
            segment.first(),
            segment.last(),
            segment.b(),
            segment.a(),
        );
    }
    println!("{} maximal segments", maximal.len());
}
