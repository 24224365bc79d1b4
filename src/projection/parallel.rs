//! Parallel coordinates: one vertical axis per attribute, evenly spaced
//! left to right in display order; each row is an open polyline through
//! `(axis_x[i], y(value[i]))`.

use super::{AxisGuide, Point, PlotSize, ProjectionInput, LABEL_OFFSET, MARGIN};

pub(super) fn frame(input: &ProjectionInput<'_>) -> (Vec<AxisGuide>, Vec<Vec<Point>>) {
    let n = input.columns.len();
    let size = input.size;
    let mut axes = Vec::with_capacity(n);
    let mut chrome = Vec::with_capacity(n);
    for (i, column) in input.columns.iter().enumerate() {
        let x = axis_x(i, n, size);
        chrome.push(vec![[x, MARGIN], [x, size.height - MARGIN]]);
        axes.push(AxisGuide {
            label: column.name.clone(),
            anchor: [x, size.height - MARGIN + LABEL_OFFSET],
        });
    }
    (axes, chrome)
}

pub(super) fn row_points(values: &[f64], size: PlotSize) -> Vec<Point> {
    let n = values.len();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| [axis_x(i, n, size), value_y(v, size)])
        .collect()
}

fn axis_x(i: usize, n: usize, size: PlotSize) -> f64 {
    if n <= 1 {
        return size.width / 2.0;
    }
    MARGIN + i as f64 * (size.width - 2.0 * MARGIN) / (n - 1) as f64
}

/// Higher values sit higher on the axis (smaller y, top-left origin).
fn value_y(v: f64, size: PlotSize) -> f64 {
    MARGIN + (1.0 - v) * (size.height - 2.0 * MARGIN)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: PlotSize = PlotSize {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn axes_are_evenly_spaced_across_the_width() {
        let xs: Vec<f64> = (0..5).map(|i| axis_x(i, 5, SIZE)).collect();
        assert_eq!(xs[0], MARGIN);
        assert_eq!(xs[4], SIZE.width - MARGIN);
        let gap = xs[1] - xs[0];
        for pair in xs.windows(2) {
            assert!((pair[1] - pair[0] - gap).abs() < 1e-9);
        }
    }

    #[test]
    fn single_attribute_axis_is_centered() {
        assert_eq!(axis_x(0, 1, SIZE), SIZE.width / 2.0);
        assert_eq!(row_points(&[0.5], SIZE).len(), 1);
    }

    #[test]
    fn value_maps_bottom_to_top() {
        assert_eq!(value_y(0.0, SIZE), SIZE.height - MARGIN);
        assert_eq!(value_y(1.0, SIZE), MARGIN);
        assert!(value_y(0.75, SIZE) < value_y(0.25, SIZE));
    }
}
