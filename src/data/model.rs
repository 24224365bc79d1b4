// ---------------------------------------------------------------------------
// Dataset – the loaded table
// ---------------------------------------------------------------------------

/// One table row: a nullable string cell per column.
pub type Row = Vec<Option<String>>;

/// A rectangular dataset of string cells with named columns.
///
/// Cells keep whatever text the source file contained; interpretation
/// (numeric vs categorical) happens lazily in the normalizer. Row order is
/// meaningful: it matches display order and is the identity used for row
/// selection.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Ordered column names, as declared by the source file.
    pub column_names: Vec<String>,
    /// Rows of cells; every row has exactly `column_names.len()` cells.
    pub rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, padding ragged rows with null cells so the table
    /// stays rectangular (JSON records may omit keys).
    pub fn new(column_names: Vec<String>, mut rows: Vec<Row>) -> Self {
        let width = column_names.len();
        for row in &mut rows {
            row.resize(width, None);
        }
        Dataset { column_names, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_names.len()
    }

    /// Cell text at (row, col); `None` for null cells or out-of-range access.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .and_then(|c| c.as_deref())
    }

    /// Iterate one column top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = Option<&str>> {
        self.rows
            .iter()
            .map(move |r| r.get(col).and_then(|c| c.as_deref()))
    }

    /// Index of the designated class column: the first column named
    /// `"class"`, case-insensitively. `None` when the dataset has no class
    /// column, in which case styling degenerates to a single default style.
    pub fn class_column_index(&self) -> Option<usize> {
        self.column_names
            .iter()
            .position(|name| name.eq_ignore_ascii_case("class"))
    }

    /// Per-row class labels, in row order. Null cells become empty labels.
    pub fn class_labels(&self) -> Option<Vec<String>> {
        let col = self.class_column_index()?;
        Some(
            self.column(col)
                .map(|cell| cell.unwrap_or("").to_string())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn class_column_is_found_case_insensitively() {
        let ds = Dataset::new(
            vec!["f1".into(), "Class".into(), "f2".into()],
            vec![vec![cell("1"), cell("a"), cell("2")]],
        );
        assert_eq!(ds.class_column_index(), Some(1));
    }

    #[test]
    fn missing_class_column_yields_none() {
        let ds = Dataset::new(vec!["f1".into(), "f2".into()], vec![]);
        assert!(ds.is_empty());
        assert_eq!(ds.class_column_index(), None);
        assert!(ds.class_labels().is_none());
    }

    #[test]
    fn class_labels_follow_row_order_and_map_nulls_to_empty() {
        let ds = Dataset::new(
            vec!["f1".into(), "class".into()],
            vec![
                vec![cell("1"), cell("b")],
                vec![cell("2"), None],
                vec![cell("3"), cell("a")],
            ],
        );
        assert_eq!(
            ds.class_labels(),
            Some(vec!["b".to_string(), String::new(), "a".to_string()])
        );
    }

    #[test]
    fn ragged_rows_are_padded_with_nulls() {
        let ds = Dataset::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec![cell("1")]],
        );
        assert_eq!(ds.cell(0, 0), Some("1"));
        assert_eq!(ds.cell(0, 2), None);
        assert_eq!(ds.rows[0].len(), 3);
    }
}
