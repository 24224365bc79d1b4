//! Shifted paired coordinates: attributes pair up consecutively (1&2,
//! 3&4, …) and each pair forms one scatter sub-plot; an odd attribute count
//! pairs the last attribute with itself. A row contributes one point per
//! sub-plot, and consecutive sub-plot points are joined so the row can be
//! traced left to right.

use super::{AxisGuide, Point, PlotSize, ProjectionInput, LABEL_OFFSET, MARGIN};

pub(super) fn frame(input: &ProjectionInput<'_>) -> (Vec<AxisGuide>, Vec<Vec<Point>>) {
    let n = input.columns.len();
    let grid = Grid::new(n, input.size);
    let mut axes = Vec::with_capacity(2 * grid.plots);
    let mut chrome = Vec::with_capacity(grid.plots);
    for plot in 0..grid.plots {
        let (x_attr, y_attr) = pair_indices(plot, n);
        let ox = grid.origin_x(plot);
        let bottom = grid.top + grid.side;
        // L-shaped frame: y axis down to the shared corner, then x axis.
        chrome.push(vec![[ox, grid.top], [ox, bottom], [ox + grid.side, bottom]]);
        axes.push(AxisGuide {
            label: input.columns[x_attr].name.clone(),
            anchor: [ox + grid.side / 2.0, bottom + LABEL_OFFSET],
        });
        axes.push(AxisGuide {
            label: input.columns[y_attr].name.clone(),
            anchor: [ox, grid.top - LABEL_OFFSET / 2.0],
        });
    }
    (axes, chrome)
}

pub(super) fn row_points(values: &[f64], size: PlotSize) -> Vec<Point> {
    let n = values.len();
    let grid = Grid::new(n, size);
    (0..grid.plots)
        .map(|plot| {
            let (x_attr, y_attr) = pair_indices(plot, n);
            let ox = grid.origin_x(plot);
            [
                ox + values[x_attr] * grid.side,
                grid.top + grid.side - values[y_attr] * grid.side,
            ]
        })
        .collect()
}

/// Attribute indices for one sub-plot; the last sub-plot of an odd count
/// pairs its attribute with itself (degenerate diagonal axis).
fn pair_indices(plot: usize, n: usize) -> (usize, usize) {
    let x_attr = 2 * plot;
    let y_attr = 2 * plot + 1;
    if y_attr >= n {
        (x_attr, x_attr)
    } else {
        (x_attr, y_attr)
    }
}

struct Grid {
    plots: usize,
    plot_width: f64,
    side: f64,
    top: f64,
}

impl Grid {
    fn new(n: usize, size: PlotSize) -> Self {
        let plots = n.div_ceil(2);
        let plot_width = size.width / plots as f64;
        let side = (plot_width.min(size.height) - 2.0 * MARGIN).max(1.0);
        Grid {
            plots,
            plot_width,
            side,
            top: MARGIN,
        }
    }

    fn origin_x(&self, plot: usize) -> f64 {
        plot as f64 * self.plot_width + MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZE: PlotSize = PlotSize {
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn even_attribute_count_pairs_consecutively() {
        assert_eq!(pair_indices(0, 4), (0, 1));
        assert_eq!(pair_indices(1, 4), (2, 3));
        assert_eq!(row_points(&[0.1, 0.2, 0.3, 0.4], SIZE).len(), 2);
    }

    #[test]
    fn odd_attribute_count_pairs_the_last_attribute_with_itself() {
        assert_eq!(pair_indices(1, 3), (2, 2));
        let points = row_points(&[0.0, 0.0, 0.25], SIZE);
        assert_eq!(points.len(), 2);
        let grid = Grid::new(3, SIZE);
        let ox = grid.origin_x(1);
        assert_eq!(points[1][0], ox + 0.25 * grid.side);
        assert_eq!(points[1][1], grid.top + grid.side - 0.25 * grid.side);
    }

    #[test]
    fn single_attribute_forms_one_degenerate_plot() {
        let points = row_points(&[0.5], SIZE);
        assert_eq!(points.len(), 1);
        assert!(points[0][0].is_finite() && points[0][1].is_finite());
    }

    #[test]
    fn higher_y_values_sit_higher_in_the_plot() {
        let low = row_points(&[0.5, 0.1], SIZE)[0];
        let high = row_points(&[0.5, 0.9], SIZE)[0];
        assert_eq!(low[0], high[0]);
        assert!(high[1] < low[1]);
    }
}
