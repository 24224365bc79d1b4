use std::collections::{BTreeSet, HashMap};

use crate::data::model::Dataset;
use crate::data::normalize::{numeric_columns, BlankPolicy};
use crate::projection::{
    project, LayoutKind, PlotSize, ProjectionError, ProjectionInput, ProjectionResult,
};
use crate::style::{ClassStyle, StyleRegistry};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Per-row class labels cached from the dataset's class column.
    pub class_labels: Option<Vec<String>>,

    /// Active projection layout.
    pub layout: LayoutKind,

    /// How blank cells affect numeric detection.
    pub blank_policy: BlankPolicy,

    /// Current column display order (a permutation of column indices).
    pub column_order: Vec<usize>,

    /// Selected row indices; re-validated against the row count at draw
    /// time, so stale entries after a reload are harmless.
    pub selection: BTreeSet<usize>,

    /// User-set style overrides, preserved across re-renders but cleared on
    /// a fresh load.
    pub overrides: HashMap<String, ClassStyle>,

    /// Class label → (color, shape), rebuilt from labels + overrides.
    pub registry: StyleRegistry,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            class_labels: None,
            layout: LayoutKind::Parallel,
            blank_policy: BlankPolicy::Strict,
            column_order: Vec::new(),
            selection: BTreeSet::new(),
            overrides: HashMap::new(),
            registry: StyleRegistry::default(),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset order, selection and style
    /// overrides, then rebuild the registry from the class column.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.column_order = (0..dataset.column_count()).collect();
        self.selection.clear();
        self.overrides.clear();
        self.class_labels = dataset.class_labels();
        self.dataset = Some(dataset);
        self.rebuild_registry();
        self.status_message = None;
    }

    /// Rebuild the style registry from the cached labels and overrides.
    pub fn rebuild_registry(&mut self) {
        let labels = self.class_labels.as_deref().unwrap_or(&[]);
        self.registry = StyleRegistry::assign(labels, &self.overrides);
    }

    /// Record a user override for one class label and refresh the registry.
    pub fn set_override(&mut self, label: &str, style: ClassStyle) {
        self.overrides.insert(label.to_string(), style);
        self.rebuild_registry();
    }

    /// Toggle one row in or out of the selection.
    pub fn toggle_row_selection(&mut self, row: usize) {
        if !self.selection.remove(&row) {
            self.selection.insert(row);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Move the column at display position `pos` one slot left or right.
    pub fn move_column(&mut self, pos: usize, delta: isize) {
        let target = pos as isize + delta;
        if pos < self.column_order.len() && target >= 0 && (target as usize) < self.column_order.len()
        {
            self.column_order.swap(pos, target as usize);
        }
    }

    /// Run the active projection against the current dataset, or `None`
    /// when nothing is loaded.
    pub fn projection(&self, size: PlotSize) -> Option<Result<ProjectionResult, ProjectionError>> {
        let dataset = self.dataset.as_ref()?;
        let columns = numeric_columns(dataset, &self.column_order, self.blank_policy);
        let input = ProjectionInput {
            columns: &columns,
            class_labels: self.class_labels.as_deref(),
            registry: &self.registry,
            selection: &self.selection,
            size,
        };
        Some(project(self.layout, &input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{MarkerShape, Rgb, SAFE_COLOR};

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    fn dataset() -> Dataset {
        Dataset::new(
            vec!["f1".into(), "f2".into(), "class".into()],
            vec![
                vec![cell("0"), cell("10"), cell("benign")],
                vec![cell("5"), cell("20"), cell("malignant")],
            ],
        )
    }

    #[test]
    fn loading_resets_selection_order_and_overrides() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.toggle_row_selection(1);
        state.set_override(
            "benign",
            ClassStyle {
                color: Rgb::new(1, 2, 3),
                shape: MarkerShape::Star5,
            },
        );
        state.move_column(0, 1);

        state.set_dataset(dataset());
        assert!(state.selection.is_empty());
        assert!(state.overrides.is_empty());
        assert_eq!(state.column_order, vec![0, 1, 2]);
        assert_eq!(state.registry.style_for("benign").color, SAFE_COLOR);
    }

    #[test]
    fn overrides_survive_layout_and_selection_changes() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        let custom = ClassStyle {
            color: Rgb::new(9, 9, 9),
            shape: MarkerShape::Square,
        };
        state.set_override("benign", custom);
        state.layout = LayoutKind::Circular;
        state.toggle_row_selection(0);
        state.rebuild_registry();
        assert_eq!(state.registry.style_for("benign"), custom);
    }

    #[test]
    fn move_column_clamps_at_the_edges() {
        let mut state = AppState::default();
        state.set_dataset(dataset());
        state.move_column(0, -1);
        assert_eq!(state.column_order, vec![0, 1, 2]);
        state.move_column(2, 1);
        assert_eq!(state.column_order, vec![0, 1, 2]);
        state.move_column(0, 1);
        assert_eq!(state.column_order, vec![1, 0, 2]);
    }

    #[test]
    fn projection_requires_a_dataset() {
        let state = AppState::default();
        let size = PlotSize {
            width: 100.0,
            height: 100.0,
        };
        assert!(state.projection(size).is_none());

        let mut state = AppState::default();
        state.set_dataset(dataset());
        let result = state.projection(size).unwrap().unwrap();
        assert_eq!(result.rows.len(), 2);
    }
}
