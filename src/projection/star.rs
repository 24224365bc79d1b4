//! Star coordinates: N attribute axes radiate from a common center at
//! angle `i · 2π/N`; each row point sits at `center + radius · value ·
//! (cos θ, -sin θ)` and the polyline closes into a polygon.

use std::f64::consts::PI;

use super::{AxisGuide, Point, PlotSize, ProjectionInput, LABEL_OFFSET, MARGIN};

pub(super) fn frame(input: &ProjectionInput<'_>) -> (Vec<AxisGuide>, Vec<Vec<Point>>) {
    let n = input.columns.len();
    let (center, radius) = geometry(input.size);
    let mut axes = Vec::with_capacity(n);
    let mut chrome = Vec::with_capacity(n);
    for (i, column) in input.columns.iter().enumerate() {
        let angle = i as f64 * angle_step(n);
        chrome.push(vec![center, spoke(center, radius, angle)]);
        axes.push(AxisGuide {
            label: column.name.clone(),
            anchor: spoke(center, radius + LABEL_OFFSET, angle),
        });
    }
    (axes, chrome)
}

pub(super) fn row_points(values: &[f64], size: PlotSize) -> Vec<Point> {
    let n = values.len();
    let (center, radius) = geometry(size);
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| spoke(center, radius * v, i as f64 * angle_step(n)))
        .collect()
}

fn geometry(size: PlotSize) -> (Point, f64) {
    let center = [size.width / 2.0, size.height / 2.0];
    (center, size.width.min(size.height) / 2.0 - MARGIN)
}

fn angle_step(n: usize) -> f64 {
    2.0 * PI / n as f64
}

// The sine is flipped so increasing angles run counter-clockwise on screen.
fn spoke(center: Point, length: f64, angle: f64) -> Point {
    [
        center[0] + length * angle.cos(),
        center[1] - length * angle.sin(),
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
    fn zero_values_collapse_to_the_center() {
        let (center, _) = geometry(SIZE);
        for p in row_points(&[0.0, 0.0, 0.0], SIZE) {
            assert_eq!(p, center);
        }
    }

    #[test]
    fn full_value_on_the_first_axis_reaches_the_spoke_tip() {
        let (center, radius) = geometry(SIZE);
        let points = row_points(&[1.0, 0.0], SIZE);
        assert_eq!(points[0], [center[0] + radius, center[1]]);
    }

    #[test]
    fn points_scale_linearly_along_their_spoke() {
        let (center, radius) = geometry(SIZE);
        let points = row_points(&[0.5, 0.5, 0.5, 0.5], SIZE);
        for p in points {
            let dx = p[0] - center[0];
            let dy = p[1] - center[1];
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - radius * 0.5).abs() < 1e-9);
        }
    }
}
