//! The render pipeline.
//!
//! A pass runs these stages in order, each one leaving the canvas cursor where
//! the next one starts:
//!
//! 1. add a page
//! 2. header: logo, bill-from title and address lines
//! 3. table header: column names between two full-width rules
//! 4. body: one bordered cell per value, gap cells between columns
//! 5. footer (draws nothing)
//! 6. output
//!
//! All validation happens before the first canvas call, so a rejected table
//! leaves the canvas untouched.

use tracing::{debug, trace};

use crate::border::{BorderFlags, BorderResolver};
use crate::canvas::{Align, Canvas, FontStyle, OutputMode};
use crate::column::ColumnModel;
use crate::config::LayoutConfig;
use crate::error::{Result, TableError};

/// Everything a pass reads. Borrowed from the [`Table`](crate::Table).
#[derive(Clone, Copy, Debug)]
pub struct LayoutInput<'a> {
    pub columns: &'a ColumnModel,
    pub rows: &'a [Vec<String>],
    pub config: &'a LayoutConfig,
    pub logo: Option<&'a str>,
    pub bill_from: &'a [String],
}

/// Drives one render pass against a canvas.
pub struct LayoutEngine<'a, C: Canvas> {
    canvas: &'a mut C,
    input: LayoutInput<'a>,
}

impl<'a, C: Canvas> LayoutEngine<'a, C> {
    pub fn new(canvas: &'a mut C, input: LayoutInput<'a>) -> Self {
        LayoutEngine { canvas, input }
    }

    /// Runs the full pipeline and hands the page to the canvas output.
    pub fn run(&mut self, target: &str, mode: OutputMode) -> Result<()> {
        let col_width = self.validate()?;
        debug!(
            columns = self.input.columns.len(),
            rows = self.input.rows.len(),
            col_width,
            "starting layout pass"
        );

        self.canvas.add_page()?;
        self.build_header()?;
        self.build_table_header(col_width)?;
        self.build_body(col_width)?;
        self.build_footer()?;

        debug!(output = target, %mode, "writing output");
        self.canvas.output(target, mode)?;
        Ok(())
    }

    fn validate(&self) -> Result<f64> {
        let config = self.input.config;
        config
            .validate()
            .map_err(|err| TableError::InvalidConfiguration(err.to_string()))?;

        let col_count = self.input.columns.len();
        if let Some((index, row)) = self
            .input
            .rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != col_count)
        {
            return Err(TableError::InvalidConfiguration(format!(
                "row {} has {} values but the table has {} columns",
                index,
                row.len(),
                col_count
            )));
        }

        self.input.columns.column_width(
            config.page.width,
            config.margins.left,
            config.margins.right,
            config.col_gap,
        )
    }

    fn build_header(&mut self) -> Result<()> {
        let config = self.input.config;
        let line_height = config.body_line_height;
        debug!(lines = self.input.bill_from.len(), "building header");

        if let Some(logo) = self.input.logo {
            self.canvas.draw_image(
                logo,
                config.margins.left,
                config.margins.top,
                config.logo_width,
                config.logo_height,
            )?;
        }

        let bill_from = self.input.bill_from;
        let (title, address) = match bill_from.split_first() {
            Some((title, rest)) => (title.as_str(), rest),
            None => ("", &[][..]),
        };

        self.indent(line_height)?;
        self.canvas
            .set_font(&config.fonts.family, FontStyle::Bold, config.fonts.title_size)?;
        self.canvas
            .draw_cell(0.0, line_height, title, BorderFlags::NONE, true, Align::Left)?;

        self.canvas.set_font(
            &config.fonts.family,
            FontStyle::Regular,
            config.fonts.address_size,
        )?;
        self.canvas.line_break(Some(config.address_spacing))?;
        for line in address {
            self.indent(line_height)?;
            self.canvas
                .draw_cell(0.0, line_height, line, BorderFlags::NONE, true, Align::Left)?;
        }

        self.canvas
            .line_break(Some(line_height * config.header_spacing_factor))?;
        Ok(())
    }

    /// Blank cell that pushes text past the logo.
    fn indent(&mut self, height: f64) -> Result<()> {
        self.spacer(self.input.config.logo_width, height, BorderFlags::NONE)
    }

    /// Empty cell that only moves the cursor right.
    ///
    /// A zero width is skipped: the canvas reads `0.0` as "up to the right
    /// margin".
    fn spacer(&mut self, width: f64, height: f64, borders: BorderFlags) -> Result<()> {
        if width == 0.0 {
            return Ok(());
        }
        self.canvas
            .draw_cell(width, height, "", borders, false, Align::Left)?;
        Ok(())
    }

    fn build_table_header(&mut self, col_width: f64) -> Result<()> {
        let config = self.input.config;
        let row_height = config.header_row_height();
        let columns = self.input.columns;
        let last = columns.len() - 1;

        self.canvas.set_line_width(config.rule_thickness)?;
        self.draw_rule()?;
        debug!(y = self.canvas.cursor().y, "building table header");

        self.canvas
            .set_font(&config.fonts.family, FontStyle::Bold, config.fonts.body_size)?;
        for (i, column) in columns.iter().enumerate() {
            self.canvas.draw_cell(
                col_width,
                row_height,
                &column.name,
                BorderFlags::NONE,
                i == last,
                Align::Left,
            )?;
            if i != last {
                self.spacer(config.col_gap, row_height, BorderFlags::NONE)?;
            }
        }

        self.draw_rule()
    }

    /// Full page-width rule at the cursor's Y.
    fn draw_rule(&mut self) -> Result<()> {
        let y = self.canvas.cursor().y;
        self.canvas
            .draw_line(0.0, y, self.input.config.page.width, y)?;
        Ok(())
    }

    fn build_body(&mut self, col_width: f64) -> Result<()> {
        let config = self.input.config;
        let row_height = config.body_row_height();
        let rows = self.input.rows;
        let row_count = rows.len();
        let col_count = self.input.columns.len();
        debug!(rows = row_count, row_height, "building body");

        self.canvas.set_font(
            &config.fonts.family,
            FontStyle::Regular,
            config.fonts.body_size,
        )?;
        self.canvas.line_break(Some(row_height / 2.0))?;
        self.canvas.set_line_width(config.body_line_width)?;

        for (i, row) in rows.iter().enumerate() {
            for (j, value) in row.iter().enumerate() {
                let borders = BorderResolver::flags(i, j, row_count, col_count);
                let last = j == col_count - 1;
                trace!(row = i, col = j, %borders, "cell");

                self.canvas
                    .draw_cell(col_width, row_height, value, borders, last, Align::Left)?;
                if !last {
                    self.spacer(config.col_gap, row_height, BorderResolver::gap_flags(i))?;
                }
            }
        }
        Ok(())
    }

    /// Reserved for footer content.
    fn build_footer(&mut self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawCall, RecordingCanvas};

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn run(columns: &[&str], rows: &[Vec<String>], bill_from: &[String]) -> Vec<DrawCall> {
        run_with(&LayoutConfig::default(), columns, rows, bill_from)
    }

    fn run_with(
        config: &LayoutConfig,
        columns: &[&str],
        rows: &[Vec<String>],
        bill_from: &[String],
    ) -> Vec<DrawCall> {
        let mut model = ColumnModel::new();
        for name in columns {
            model.add_column(*name);
        }
        let mut canvas = RecordingCanvas::new(config);
        let input = LayoutInput {
            columns: &model,
            rows,
            config,
            logo: Some("logo.png"),
            bill_from,
        };
        LayoutEngine::new(&mut canvas, input)
            .run("out.json", OutputMode::String)
            .unwrap();
        canvas.take_calls()
    }

    #[test]
    fn header_rules_bracket_column_names() {
        let bill_from = row(&["Acme Ltd", "1 Road", "Town"]);
        let calls = run(&["A", "B"], &[row(&["1", "2"])], &bill_from);

        let lines: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Line { y1, .. } => Some(*y1),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 2);
        // title 4 + spacing 2 + two address lines 8 + gap 8, then 8 header height
        assert_eq!(lines[0], 15.0 + 4.0 + 2.0 + 8.0 + 8.0);
        assert_eq!(lines[1], lines[0] + 8.0);
    }

    #[test]
    fn address_lines_are_indented_by_logo() {
        let bill_from = row(&["Acme Ltd", "1 Road"]);
        let calls = run(&["A"], &[], &bill_from);

        let address = calls
            .iter()
            .find_map(|c| match c {
                DrawCall::Cell { x, text, .. } if text == "1 Road" => Some(*x),
                _ => None,
            })
            .unwrap();
        assert_eq!(address, 15.0 + 24.0);
    }

    #[test]
    fn empty_bill_from_draws_blank_title() {
        let calls = run(&["A"], &[row(&["x"])], &[]);
        assert_eq!(calls[0], DrawCall::AddPage);
        assert!(matches!(&calls[1], DrawCall::Image { path, .. } if path == "logo.png"));
        assert!(matches!(&calls[4], DrawCall::Cell { text, line_break: true, .. } if text.is_empty()));
    }

    #[test]
    fn body_rows_sit_below_header() {
        let calls = run(&["A"], &[row(&["x"]), row(&["y"])], &row(&["T"]));
        let ys: Vec<f64> = calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Cell { y, text, .. } if text == "x" || text == "y" => Some(*y),
                _ => None,
            })
            .collect();
        assert_eq!(ys[1] - ys[0], 6.0);
    }

    fn cells(calls: &[DrawCall]) -> Vec<(f64, f64, &str)> {
        calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Cell { x, width, text, .. } => Some((*x, *width, text.as_str())),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn zero_gap_rows_still_span_content_width() {
        let config = LayoutConfig::from_yaml("col_gap: 0").unwrap();
        let calls = run_with(&config, &["A", "B", "C"], &[row(&["1", "2", "3"])], &[]);

        let first_rule = calls.iter().position(|c| c.is_line()).unwrap();
        let table = cells(&calls[first_rule..]);
        let (header, body) = table.split_at(3);
        assert_eq!(
            header,
            &[(15.0, 60.0, "A"), (75.0, 60.0, "B"), (135.0, 60.0, "C")][..]
        );
        assert_eq!(
            body,
            &[(15.0, 60.0, "1"), (75.0, 60.0, "2"), (135.0, 60.0, "3")][..]
        );
        let total: f64 = body.iter().map(|(_, width, _)| width).sum();
        assert_eq!(total, 180.0);
    }

    #[test]
    fn zero_logo_width_starts_title_at_margin() {
        let config = LayoutConfig::from_yaml("logo_width: 0").unwrap();
        let bill_from = row(&["Acme Ltd", "1 Road"]);
        let calls = run_with(&config, &["A"], &[], &bill_from);

        let first_rule = calls.iter().position(|c| c.is_line()).unwrap();
        assert_eq!(
            cells(&calls[..first_rule]),
            vec![(15.0, 180.0, "Acme Ltd"), (15.0, 180.0, "1 Road")]
        );
    }

    #[test]
    fn ragged_row_is_rejected_before_drawing() {
        let config = LayoutConfig::default();
        let mut model = ColumnModel::new();
        model.add_column("A");
        model.add_column("B");
        let rows = vec![row(&["only one"])];
        let mut canvas = RecordingCanvas::new(&config);
        let input = LayoutInput {
            columns: &model,
            rows: &rows,
            config: &config,
            logo: None,
            bill_from: &[],
        };

        let err = LayoutEngine::new(&mut canvas, input)
            .run("out.json", OutputMode::String)
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidConfiguration(_)));
        assert!(canvas.calls().is_empty());
    }
}
