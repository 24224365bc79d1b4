//! Circular coordinates: N anchors evenly spaced around a fixed-radius
//! ring, starting at 12 o'clock. A value shifts its point along the arc
//! segment between its anchor and the next one; the radius is never
//! modulated. This gives a circular analogue of parallel coordinates. The
//! per-row polyline closes into a polygon.

use std::f64::consts::PI;

use super::{AxisGuide, Point, PlotSize, ProjectionInput, LABEL_OFFSET, MARGIN};

const RING_SEGMENTS: usize = 128;

pub(super) fn frame(input: &ProjectionInput<'_>) -> (Vec<AxisGuide>, Vec<Vec<Point>>) {
    let n = input.columns.len();
    let (center, radius) = geometry(input.size);

    let ring = (0..=RING_SEGMENTS)
        .map(|k| {
            let angle = k as f64 * 2.0 * PI / RING_SEGMENTS as f64;
            on_ring(center, radius, angle)
        })
        .collect();
    let chrome = vec![ring];

    let step = angle_step(n);
    let axes = input
        .columns
        .iter()
        .enumerate()
        .map(|(i, column)| AxisGuide {
            label: column.name.clone(),
            anchor: on_ring(center, radius + LABEL_OFFSET, anchor_angle(i, step)),
        })
        .collect();

    (axes, chrome)
}

pub(super) fn row_points(values: &[f64], size: PlotSize) -> Vec<Point> {
    let n = values.len();
    let (center, radius) = geometry(size);
    let step = angle_step(n);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| on_ring(center, radius, anchor_angle(i, step) + v * step))
        .collect()
}

fn geometry(size: PlotSize) -> (Point, f64) {
    let center = [size.width / 2.0, size.height / 2.0];
    (center, size.width.min(size.height) / 2.0 - MARGIN)
}

fn angle_step(n: usize) -> f64 {
    2.0 * PI / n as f64
}

// Anchor i sits at the start of its arc segment; -π/2 puts anchor 0 at the
// top of the ring (12 o'clock).
fn anchor_angle(i: usize, step: f64) -> f64 {
    i as f64 * step - PI / 2.0
}

fn on_ring(center: Point, radius: f64, angle: f64) -> Point {
    [
        center[0] + radius * angle.cos(),
        center[1] + radius * angle.sin(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: PlotSize = PlotSize {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn radius_is_fixed_for_every_value() {
        let (center, radius) = geometry(SIZE);
        for p in row_points(&[0.0, 0.3, 0.7, 1.0], SIZE) {
            let dx = p[0] - center[0];
            let dy = p[1] - center[1];
            assert!(((dx * dx + dy * dy).sqrt() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn zero_value_sits_on_its_anchor() {
        let (center, radius) = geometry(SIZE);
        let points = row_points(&[0.0, 0.0], SIZE);
        // First anchor is at 12 o'clock.
        assert!((points[0][0] - center[0]).abs() < 1e-9);
        assert!((points[0][1] - (center[1] - radius)).abs() < 1e-9);
    }

    #[test]
    fn full_value_reaches_the_next_anchor() {
        let full = row_points(&[1.0, 0.0, 0.0, 0.0], SIZE);
        let rest = row_points(&[0.0, 0.0, 0.0, 0.0], SIZE);
        // value 1 on axis 0 lands where axis 1's anchor sits.
        assert!((full[0][0] - rest[1][0]).abs() < 1e-9);
        assert!((full[0][1] - rest[1][1]).abs() < 1e-9);
    }

    #[test]
    fn value_shifts_the_point_along_the_arc() {
        let a = row_points(&[0.2, 0.0, 0.0], SIZE)[0];
        let b = row_points(&[0.8, 0.0, 0.0], SIZE)[0];
        assert_ne!(a, b);
    }
}
