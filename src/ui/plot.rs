use eframe::egui::{Align2, Color32, RichText, Ui};
use egui_plot::{
    Legend, Line, MarkerShape as PlotMarker, Plot, PlotPoint, PlotUi, Points, Text,
};

use crate::projection::{LayoutKind, PlotSize, Point, RowGeometry};
use crate::state::AppState;
use crate::style::{MarkerShape, Rgb};

// ---------------------------------------------------------------------------
// Projection canvas (central panel)
// ---------------------------------------------------------------------------

/// Logical plot-space extent handed to the projection engine; egui_plot
/// scales it into the available screen area.
const PLOT_SIZE: PlotSize = PlotSize {
    width: 1000.0,
    height: 800.0,
};

/// Render the active projection in the central panel.
pub fn projection_panel(ui: &mut Ui, state: &AppState) {
    let result = match state.projection(PLOT_SIZE) {
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a file to project rows  (File → Open…)");
            });
            return;
        }
        Some(Err(err)) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(err.to_string());
            });
            return;
        }
        Some(Ok(result)) => result,
    };

    let text_color = ui.visuals().text_color();

    let mut plot = Plot::new("projection_plot")
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .show_x(false)
        .show_y(false);
    // Radial layouts must keep the ring circular; the open layouts may
    // stretch to the panel.
    if matches!(result.layout, LayoutKind::Star | LayoutKind::Circular) {
        plot = plot.data_aspect(1.0);
    }

    plot.show(ui, |plot_ui| {
        for polyline in &result.chrome {
            let path: Vec<[f64; 2]> = polyline.iter().map(|&p| flip(p)).collect();
            plot_ui.line(Line::new(path).color(Color32::from_gray(120)).width(1.0));
        }

        for axis in &result.axes {
            let [x, y] = flip(axis.anchor);
            plot_ui.text(
                Text::new(PlotPoint::new(x, y), RichText::new(axis.label.as_str()))
                    .color(text_color)
                    .anchor(Align2::CENTER_CENTER),
            );
        }

        for row in &result.rows {
            draw_row(plot_ui, row);
        }
    });
}

fn draw_row(plot_ui: &mut PlotUi, row: &RowGeometry) {
    let color = to_color32(row.color);

    if row.connect {
        let mut path: Vec<[f64; 2]> = row.points.iter().map(|&p| flip(p)).collect();
        if row.closed {
            if let Some(&first) = path.first() {
                path.push(first);
            }
        }
        let mut line = Line::new(path)
            .color(color)
            .width(if row.selected { 2.5 } else { 1.5 });
        if let Some(label) = &row.label {
            if !row.selected {
                line = line.name(label);
            }
        }
        plot_ui.line(line);
    }

    let markers: Vec<[f64; 2]> = row.points.iter().map(|&p| flip(p)).collect();
    plot_ui.points(
        Points::new(markers)
            .shape(to_marker(row.shape))
            .radius(if row.selected { 4.0 } else { 3.0 })
            .color(color),
    );
}

// Projection geometry is top-left-origin with y down; egui_plot's y grows up.
fn flip(p: Point) -> [f64; 2] {
    [p[0], PLOT_SIZE.height - p[1]]
}

fn to_color32(c: Rgb) -> Color32 {
    Color32::from_rgb(c.r, c.g, c.b)
}

/// Nearest egui_plot marker for each core shape (the star glyphs have no
/// exact counterpart).
fn to_marker(shape: MarkerShape) -> PlotMarker {
    match shape {
        MarkerShape::Circle => PlotMarker::Circle,
        MarkerShape::Square => PlotMarker::Square,
        MarkerShape::Triangle => PlotMarker::Up,
        MarkerShape::Star4 => PlotMarker::Diamond,
        MarkerShape::Star5 => PlotMarker::Cross,
        MarkerShape::Star6 => PlotMarker::Plus,
        MarkerShape::Star7 => PlotMarker::Asterisk,
        MarkerShape::Star8 => PlotMarker::Down,
    }
}
