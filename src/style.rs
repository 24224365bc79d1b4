use std::collections::HashMap;

use palette::{Hsv, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Colors and marker shapes
// ---------------------------------------------------------------------------

/// A plain sRGB triple. The geometry engine stays toolkit-free; the render
/// layer converts to its own color type at the edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Fixed color for the recognized "alert" labels (malignant / positive).
pub const ALERT_COLOR: Rgb = Rgb::new(255, 0, 0);
/// Fixed color for the recognized "safe" labels (benign / negative).
pub const SAFE_COLOR: Rgb = Rgb::new(0, 255, 0);
/// Override color for selected rows, regardless of class.
pub const HIGHLIGHT_COLOR: Rgb = Rgb::new(255, 255, 0);
/// Style for rows without a class label (or an unknown label).
pub const DEFAULT_COLOR: Rgb = Rgb::new(0, 0, 0);

/// Marker glyphs drawn at row points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerShape {
    Circle,
    Square,
    Triangle,
    Star4,
    Star5,
    Star6,
    Star7,
    Star8,
}

/// The fixed shape palette, cycled by insertion index (`index % 8`).
pub const SHAPE_PALETTE: [MarkerShape; 8] = [
    MarkerShape::Circle,
    MarkerShape::Square,
    MarkerShape::Triangle,
    MarkerShape::Star4,
    MarkerShape::Star5,
    MarkerShape::Star6,
    MarkerShape::Star7,
    MarkerShape::Star8,
];

/// The visual encoding of one class label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassStyle {
    pub color: Rgb,
    pub shape: MarkerShape,
}

impl ClassStyle {
    pub const DEFAULT: ClassStyle = ClassStyle {
        color: DEFAULT_COLOR,
        shape: MarkerShape::Circle,
    };
}

// ---------------------------------------------------------------------------
// StyleRegistry: class label → (color, shape)
// ---------------------------------------------------------------------------

/// Deterministic color/shape assignment for every distinct class label.
///
/// Labels are discovered in first-seen order. Two canonical binary pairs get
/// fixed colors ahead of everything else: "malignant"/"positive" (alert red)
/// and "benign"/"negative" (safe green), case-insensitively. The remaining
/// labels partition the hue wheel evenly (`hue = index / remaining_count`,
/// full saturation and value). Shapes cycle the 8-entry palette over the
/// full label set in insertion order. The same label sequence always
/// reproduces the same mapping, so legends are stable across sessions.
#[derive(Debug, Clone, Default)]
pub struct StyleRegistry {
    entries: Vec<(String, ClassStyle)>,
}

impl StyleRegistry {
    /// Build the mapping for `labels` (the class column contents, in row
    /// order, duplicates included). `overrides` are user-set styles that are
    /// preserved verbatim; an overridden label still occupies its
    /// insertion-order position, so overriding one label never reshuffles
    /// the shapes of the others. The caller owns the override map.
    pub fn assign(labels: &[String], overrides: &HashMap<String, ClassStyle>) -> Self {
        let mut order: Vec<&String> = Vec::new();
        for label in labels {
            if !order.contains(&label) {
                order.push(label);
            }
        }

        // First pass: canonical binary pairs.
        let mut colors: HashMap<&String, Rgb> = HashMap::new();
        for &label in &order {
            if overrides.contains_key(label) {
                continue;
            }
            if let Some(color) = canonical_color(label) {
                colors.insert(label, color);
            }
        }

        // Second pass: partition the hue wheel over what is left, in
        // first-seen order. The denominator counts only the partitioned
        // labels, independent of how many canonical labels exist.
        let remaining: Vec<&String> = order
            .iter()
            .copied()
            .filter(|l| !overrides.contains_key(*l) && !colors.contains_key(l))
            .collect();
        let denominator = remaining.len();
        for (i, label) in remaining.into_iter().enumerate() {
            colors.insert(label, hue_color(i as f32 / denominator as f32));
        }

        let entries = order
            .into_iter()
            .enumerate()
            .map(|(i, label)| {
                let style = overrides.get(label).copied().unwrap_or_else(|| ClassStyle {
                    color: colors[&label],
                    shape: SHAPE_PALETTE[i % SHAPE_PALETTE.len()],
                });
                (label.clone(), style)
            })
            .collect();

        StyleRegistry { entries }
    }

    /// Look up the style for a label; unknown labels get the default style.
    pub fn style_for(&self, label: &str) -> ClassStyle {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, s)| *s)
            .unwrap_or(ClassStyle::DEFAULT)
    }

    /// Legend entries in insertion (first-seen) order.
    pub fn legend_entries(&self) -> &[(String, ClassStyle)] {
        &self.entries
    }
}

fn canonical_color(label: &str) -> Option<Rgb> {
    if label.eq_ignore_ascii_case("malignant") || label.eq_ignore_ascii_case("positive") {
        Some(ALERT_COLOR)
    } else if label.eq_ignore_ascii_case("benign") || label.eq_ignore_ascii_case("negative") {
        Some(SAFE_COLOR)
    } else {
        None
    }
}

/// Hue fraction in [0, 1) → fully saturated sRGB.
fn hue_color(hue: f32) -> Rgb {
    let hsv = Hsv::new(hue * 360.0, 1.0, 1.0);
    let rgb: Srgb = hsv.into_color();
    Rgb::new(
        (rgb.red * 255.0) as u8,
        (rgb.green * 255.0) as u8,
        (rgb.blue * 255.0) as u8,
    )
}
