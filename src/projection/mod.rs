//! Projection engine: normalized columns → 2-D drawing primitives.
//!
//! Four peer layout algorithms share one entry point ([`project`]) and one
//! draw-order policy: non-selected rows are emitted first, selected rows
//! last and with the fixed highlight color, so selection is always visually
//! on top. Layouts are state-free geometry functions over values already
//! normalized to [0, 1]; they scale into a caller-supplied plot size and
//! never re-normalize.
//!
//! Geometry convention: top-left origin, y increasing downward (the render
//! adapter owns any y-flip), with a fixed inner margin framing every layout.

pub mod circular;
pub mod paired;
pub mod parallel;
pub mod star;

use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::data::normalize::NormalizedColumn;
use crate::style::{ClassStyle, MarkerShape, Rgb, StyleRegistry, HIGHLIGHT_COLOR};

/// A point in plot space.
pub type Point = [f64; 2];

/// Inner margin between the plot edge and the drawn geometry, in plot units.
pub(crate) const MARGIN: f64 = 40.0;
/// Distance between an axis end and its label anchor.
pub(crate) const LABEL_OFFSET: f64 = 16.0;

// ---------------------------------------------------------------------------
// Layout kinds
// ---------------------------------------------------------------------------

/// The closed set of projection layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Parallel,
    Star,
    Circular,
    ShiftedPaired,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 4] = [
        LayoutKind::Parallel,
        LayoutKind::Star,
        LayoutKind::Circular,
        LayoutKind::ShiftedPaired,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LayoutKind::Parallel => "Parallel Coordinates",
            LayoutKind::Star => "Star Coordinates",
            LayoutKind::Circular => "Circular Coordinates",
            LayoutKind::ShiftedPaired => "Shifted Paired Coordinates",
        }
    }

    /// Star and circular layouts close their per-row polygon.
    fn closes(self) -> bool {
        matches!(self, LayoutKind::Star | LayoutKind::Circular)
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Inputs and outputs
// ---------------------------------------------------------------------------

/// Caller-supplied drawing area, in plot units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotSize {
    pub width: f64,
    pub height: f64,
}

/// Everything a projection needs, borrowed from the caller.
///
/// `columns` must already be filtered to the numeric attributes in display
/// order (see [`crate::data::normalize::numeric_columns`]); the engine does
/// no filtering of its own.
pub struct ProjectionInput<'a> {
    pub columns: &'a [NormalizedColumn],
    pub class_labels: Option<&'a [String]>,
    pub registry: &'a StyleRegistry,
    pub selection: &'a BTreeSet<usize>,
    pub size: PlotSize,
}

/// Label anchor for one attribute axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisGuide {
    pub label: String,
    pub anchor: Point,
}

/// Drawable geometry for one row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowGeometry {
    /// Row index in the dataset (the selection identity).
    pub row: usize,
    /// Class label, if a class column exists.
    pub label: Option<String>,
    pub color: Rgb,
    pub shape: MarkerShape,
    /// One point per attribute (or per pair-plot for the shifted-paired
    /// layout), in axis order.
    pub points: Vec<Point>,
    /// Whether consecutive points are joined by segments.
    pub connect: bool,
    /// Whether the polyline closes back to the first point.
    pub closed: bool,
    pub selected: bool,
}

/// The full geometric description of one render request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub layout: LayoutKind,
    /// Attribute label anchors.
    pub axes: Vec<AxisGuide>,
    /// Chrome polylines (axis lines, pair-plot frames, the circular ring)
    /// drawn beneath the row geometry.
    pub chrome: Vec<Vec<Point>>,
    /// Row geometries in draw order: non-selected first, selected last.
    pub rows: Vec<RowGeometry>,
}

/// The only condition in this engine that is surfaced to the end user.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectionError {
    #[error("{layout} needs at least {needed} numeric attribute(s), found {found}")]
    InsufficientAttributes {
        layout: LayoutKind,
        needed: usize,
        found: usize,
    },
}

// ---------------------------------------------------------------------------
// Shared scaffolding
// ---------------------------------------------------------------------------

/// Project every row under the chosen layout.
///
/// Zero rows produce an empty result (axes only); zero numeric attributes
/// are an [`ProjectionError::InsufficientAttributes`] condition. Selection
/// indices beyond the row count are ignored. Under the tolerant blank
/// policy, a row with a blank in any projected column is skipped.
pub fn project(
    layout: LayoutKind,
    input: &ProjectionInput<'_>,
) -> Result<ProjectionResult, ProjectionError> {
    let found = input.columns.len();
    if found == 0 {
        return Err(ProjectionError::InsufficientAttributes {
            layout,
            needed: 1,
            found,
        });
    }

    let (axes, chrome) = match layout {
        LayoutKind::Parallel => parallel::frame(input),
        LayoutKind::Star => star::frame(input),
        LayoutKind::Circular => circular::frame(input),
        LayoutKind::ShiftedPaired => paired::frame(input),
    };

    let n_rows = input
        .columns
        .iter()
        .map(|c| c.values.len())
        .min()
        .unwrap_or(0);

    let mut rows = Vec::with_capacity(n_rows);
    for row in draw_order(n_rows, input.selection) {
        let Some(values) = row_values(input.columns, row) else {
            continue;
        };

        let points = match layout {
            LayoutKind::Parallel => parallel::row_points(&values, input.size),
            LayoutKind::Star => star::row_points(&values, input.size),
            LayoutKind::Circular => circular::row_points(&values, input.size),
            LayoutKind::ShiftedPaired => paired::row_points(&values, input.size),
        };

        let selected = input.selection.contains(&row);
        let label = input
            .class_labels
            .and_then(|labels| labels.get(row))
            .cloned();
        let base = label
            .as_deref()
            .map(|l| input.registry.style_for(l))
            .unwrap_or(ClassStyle::DEFAULT);

        let connect = points.len() > 1;
        rows.push(RowGeometry {
            row,
            label,
            color: if selected { HIGHLIGHT_COLOR } else { base.color },
            shape: base.shape,
            points,
            connect,
            closed: layout.closes(),
            selected,
        });
    }

    Ok(ProjectionResult {
        layout,
        axes,
        chrome,
        rows,
    })
}

/// Row visit order: non-selected rows ascending, then selected rows
/// ascending. Selection indices outside `0..n_rows` are dropped.
fn draw_order(n_rows: usize, selection: &BTreeSet<usize>) -> impl Iterator<Item = usize> + '_ {
    (0..n_rows)
        .filter(move |row| !selection.contains(row))
        .chain(selection.iter().copied().filter(move |row| *row < n_rows))
}

/// The row's normalized value per column, or `None` if any projected column
/// is blank for this row.
fn row_values(columns: &[NormalizedColumn], row: usize) -> Option<Vec<f64>> {
    columns
        .iter()
        .map(|c| c.values.get(row).copied().flatten())
        .collect()
}
