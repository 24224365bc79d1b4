use super::model::Dataset;

// ---------------------------------------------------------------------------
// Column normalization: raw string cells → [0, 1] doubles
// ---------------------------------------------------------------------------

/// How blank cells (null or whitespace-only) affect numeric detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlankPolicy {
    /// Any blank cell makes the whole column categorical.
    Strict,
    /// Blanks are excluded from min/max; rows with a blank in a projected
    /// column are skipped at draw time.
    Tolerant,
}

/// A numeric column mapped into [0, 1].
///
/// `values[row]` is `None` only for blank cells under
/// [`BlankPolicy::Tolerant`]; every present value satisfies
/// `0.0 <= v <= 1.0`. A degenerate range (`min == max`, e.g. a constant or
/// single-row column) normalizes every present value to 0.0 so no NaN can
/// reach the geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedColumn {
    pub name: String,
    pub min: f64,
    pub max: f64,
    pub values: Vec<Option<f64>>,
}

/// Outcome of normalizing one column.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    Numeric(NormalizedColumn),
    Categorical,
}

/// Normalize one column of raw cells.
///
/// A column is numeric only if every non-blank cell parses as a finite
/// double; a single unparsable cell marks the whole column categorical.
/// Parse failures classify, they never error.
pub fn normalize_column<'a>(
    name: &str,
    cells: impl Iterator<Item = Option<&'a str>>,
    policy: BlankPolicy,
) -> ColumnKind {
    let mut parsed: Vec<Option<f64>> = Vec::new();
    for cell in cells {
        match cell.map(str::trim).filter(|s| !s.is_empty()) {
            None => match policy {
                BlankPolicy::Strict => return ColumnKind::Categorical,
                BlankPolicy::Tolerant => parsed.push(None),
            },
            Some(text) => match text.parse::<f64>() {
                // NaN/inf parse but cannot form a usable range.
                Ok(v) if v.is_finite() => parsed.push(Some(v)),
                _ => return ColumnKind::Categorical,
            },
        }
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in parsed.iter().flatten() {
        min = min.min(*v);
        max = max.max(*v);
    }
    if !min.is_finite() {
        // No present values at all (zero rows, or all blanks under Tolerant).
        min = 0.0;
        max = 0.0;
    }

    let range = max - min;
    let values = parsed
        .into_iter()
        .map(|v| {
            v.map(|v| {
                if range.abs() < f64::EPSILON {
                    0.0
                } else {
                    (v - min) / range
                }
            })
        })
        .collect();

    ColumnKind::Numeric(NormalizedColumn {
        name: name.to_string(),
        min,
        max,
        values,
    })
}

/// Collect the numeric attribute columns for projection, in display order.
///
/// `column_order` is the current display permutation; indices that no longer
/// exist (stale order after a reload) are skipped. The class column never
/// participates as a geometric axis, even when all its cells parse as
/// numbers. Categorical columns are silently excluded.
pub fn numeric_columns(
    dataset: &Dataset,
    column_order: &[usize],
    policy: BlankPolicy,
) -> Vec<NormalizedColumn> {
    let class_col = dataset.class_column_index();
    column_order
        .iter()
        .copied()
        .filter(|&col| col < dataset.column_count() && Some(col) != class_col)
        .filter_map(|col| {
            match normalize_column(&dataset.column_names[col], dataset.column(col), policy) {
                ColumnKind::Numeric(c) => Some(c),
                ColumnKind::Categorical => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn col(cells: &[Option<&str>], policy: BlankPolicy) -> ColumnKind {
        normalize_column("c", cells.iter().copied(), policy)
    }

    fn numeric(cells: &[Option<&str>], policy: BlankPolicy) -> NormalizedColumn {
        match col(cells, policy) {
            ColumnKind::Numeric(c) => c,
            ColumnKind::Categorical => panic!("expected numeric column"),
        }
    }

    #[test]
    fn maps_values_onto_unit_interval() {
        let c = numeric(&[Some("0"), Some("5"), Some("10")], BlankPolicy::Strict);
        assert_eq!(c.values, vec![Some(0.0), Some(0.5), Some(1.0)]);
        assert_eq!((c.min, c.max), (0.0, 10.0));
    }

    #[test]
    fn unparsable_cell_marks_column_categorical() {
        assert_eq!(
            col(&[Some("1"), Some("oops"), Some("3")], BlankPolicy::Strict),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn non_finite_cell_marks_column_categorical() {
        assert_eq!(
            col(&[Some("1"), Some("NaN")], BlankPolicy::Strict),
            ColumnKind::Categorical
        );
        assert_eq!(
            col(&[Some("1"), Some("inf")], BlankPolicy::Strict),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn degenerate_range_normalizes_to_zero() {
        let c = numeric(&[Some("7"), Some("7"), Some("7")], BlankPolicy::Strict);
        assert_eq!(c.values, vec![Some(0.0), Some(0.0), Some(0.0)]);
    }

    #[test]
    fn single_row_column_exercises_degenerate_fallback() {
        let c = numeric(&[Some("42")], BlankPolicy::Strict);
        assert_eq!(c.values, vec![Some(0.0)]);
    }

    #[test]
    fn strict_blank_makes_column_categorical() {
        assert_eq!(
            col(&[Some("1"), None, Some("3")], BlankPolicy::Strict),
            ColumnKind::Categorical
        );
        assert_eq!(
            col(&[Some("1"), Some("   "), Some("3")], BlankPolicy::Strict),
            ColumnKind::Categorical
        );
    }

    #[test]
    fn tolerant_blank_is_excluded_from_range() {
        let c = numeric(&[Some("1"), None, Some("3")], BlankPolicy::Tolerant);
        assert_eq!(c.values, vec![Some(0.0), None, Some(1.0)]);
        assert_eq!((c.min, c.max), (1.0, 3.0));
    }

    #[test]
    fn all_present_values_stay_in_unit_interval() {
        let cells = [Some("-4.5"), Some("12.25"), Some("0"), Some("3.75")];
        let c = numeric(&cells, BlankPolicy::Strict);
        for v in c.values.iter().flatten() {
            assert!((0.0..=1.0).contains(v), "out of range: {v}");
        }
    }

    #[test]
    fn numeric_columns_excludes_class_and_categorical_columns() {
        let ds = Dataset::new(
            vec!["f1".into(), "name".into(), "class".into(), "f2".into()],
            vec![
                vec![
                    Some("0".into()),
                    Some("a".into()),
                    Some("1".into()),
                    Some("10".into()),
                ],
                vec![
                    Some("1".into()),
                    Some("b".into()),
                    Some("2".into()),
                    Some("20".into()),
                ],
            ],
        );
        let order: Vec<usize> = (0..4).collect();
        let cols = numeric_columns(&ds, &order, BlankPolicy::Strict);
        let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
        // "name" is categorical; "class" is excluded even though it parses.
        assert_eq!(names, vec!["f1", "f2"]);
    }

    #[test]
    fn numeric_columns_follows_display_order_and_skips_stale_indices() {
        let ds = Dataset::new(
            vec!["a".into(), "b".into()],
            vec![vec![Some("1".into()), Some("2".into())]],
        );
        let cols = numeric_columns(&ds, &[1, 9, 0], BlankPolicy::Strict);
        let names: Vec<&str> = cols.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
