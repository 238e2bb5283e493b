//! Property-based tests for the table facade using proptest.

use pagetable::{
    BorderFlags, DrawCall, LayoutConfig, OutputMode, RecordingCanvas, Table, TableError,
};
use proptest::prelude::*;

// ============================================================================
// Test helpers
// ============================================================================

fn table_with(columns: usize, rows: &[Vec<String>]) -> Table<RecordingCanvas> {
    let mut table = Table::new(RecordingCanvas::new(&LayoutConfig::default()));
    for i in 0..columns {
        table.add_column(format!("Col {}", i));
    }
    for row in rows {
        table.add_record(row.clone()).unwrap();
    }
    table
}

// Strategy producing a column count and matching rows.
fn table_strategy() -> impl Strategy<Value = (usize, Vec<Vec<String>>)> {
    (1usize..6).prop_flat_map(|cols| {
        let row = prop::collection::vec("[a-z0-9]{0,8}", cols);
        (Just(cols), prop::collection::vec(row, 0..8))
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// A record of the wrong length is rejected and leaves rows untouched.
    #[test]
    fn arity_mismatch_never_mutates(
        (cols, rows) in table_strategy(),
        bad_len in 0usize..10,
    ) {
        prop_assume!(bad_len != cols);
        let mut table = table_with(cols, &rows);
        let before = table.rows().to_vec();

        let result = table.add_record(vec!["x".to_string(); bad_len]);
        let is_arity_mismatch = matches!(
            result,
            Err(TableError::ArityMismatch { expected, actual })
                if expected == cols && actual == bad_len
        );
        prop_assert!(is_arity_mismatch);
        prop_assert_eq!(table.rows(), &before[..]);
    }

    /// Rendering is a pure function of table state.
    #[test]
    fn render_is_deterministic((cols, rows) in table_strategy()) {
        let mut table = table_with(cols, &rows);
        table.set_from(["Acme Ltd", "1 Road"]);

        table.render("out.json", OutputMode::String).unwrap();
        let first = table.canvas_mut().take_calls();
        table.render("out.json", OutputMode::String).unwrap();
        let second = table.canvas_mut().take_calls();

        prop_assert_eq!(first, second);
    }

    /// Body draws one cell per value plus a gap between neighbours, and the
    /// cells of each row span the content width.
    #[test]
    fn body_cells_fill_each_row((cols, rows) in table_strategy()) {
        let mut table = table_with(cols, &rows);
        table.render("out.json", OutputMode::String).unwrap();

        let calls = table.canvas().calls();
        let second_rule = calls
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_line())
            .nth(1)
            .map(|(i, _)| i)
            .unwrap();

        let mut widths_per_row: Vec<f64> = Vec::new();
        let mut current = 0.0;
        let mut cells = 0;
        for call in &calls[second_rule..] {
            if let DrawCall::Cell { width, line_break, borders, .. } = call {
                prop_assert!(borders.contains(BorderFlags::BOTTOM));
                cells += 1;
                current += width;
                if *line_break {
                    widths_per_row.push(current);
                    current = 0.0;
                }
            }
        }

        prop_assert_eq!(cells, rows.len() * (2 * cols - 1));
        prop_assert_eq!(widths_per_row.len(), rows.len());
        for total in widths_per_row {
            prop_assert!((total - 180.0).abs() < 1e-6);
        }
    }
}
