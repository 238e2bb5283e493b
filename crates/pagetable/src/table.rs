//! The table facade.
//!
//! [`Table`] collects columns, rows and document metadata, then renders them
//! through the [`Canvas`] it was built with.
//!
//! # Example
//!
//! ```rust
//! use pagetable::{OutputMode, RecordingCanvas, LayoutConfig, Table};
//!
//! let mut table = Table::new(RecordingCanvas::new(&LayoutConfig::default()));
//! table
//!     .add_column("Item")
//!     .add_column("Qty")
//!     .add_column("Price");
//! table.add_record(["Widget", "2", "9.90"]).unwrap();
//! table.set_logo("logo.png");
//! table.set_from(["Acme Ltd", "1 Industrial Way", "Springfield"]);
//! table.set_color("#1e88e5").unwrap();
//!
//! table.render("invoice.json", OutputMode::String).unwrap();
//! assert!(table.canvas().rendered().unwrap().contains("Widget"));
//! ```

use tracing::debug;

use crate::canvas::{Canvas, OutputMode};
use crate::color::{BrandColor, ColorError};
use crate::column::ColumnModel;
use crate::config::LayoutConfig;
use crate::error::{Result, TableError};
use crate::layout::{LayoutEngine, LayoutInput};

/// Table data, document metadata and the canvas it renders to.
#[derive(Debug)]
pub struct Table<C: Canvas> {
    canvas: C,
    config: LayoutConfig,
    columns: ColumnModel,
    rows: Vec<Vec<String>>,
    logo: Option<String>,
    bill_from: Vec<String>,
    brand_color: Option<BrandColor>,
}

impl<C: Canvas> Table<C> {
    /// Creates a table with the default layout.
    pub fn new(canvas: C) -> Self {
        Self::with_config(canvas, LayoutConfig::default())
    }

    pub fn with_config(canvas: C, config: LayoutConfig) -> Self {
        Table {
            canvas,
            config,
            columns: ColumnModel::new(),
            rows: Vec::new(),
            logo: None,
            bill_from: Vec::new(),
            brand_color: None,
        }
    }

    /// Appends a column.
    pub fn add_column(&mut self, name: impl Into<String>) -> &mut Self {
        self.columns.add_column(name);
        self
    }

    /// Appends a row. The value count must equal the column count; otherwise
    /// the row is dropped and [`TableError::ArityMismatch`] is returned.
    pub fn add_record<I, S>(&mut self, values: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = values.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(TableError::ArityMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn set_logo(&mut self, path: impl Into<String>) {
        self.logo = Some(path.into());
    }

    /// Sets the bill-from block: the first line is the title, the rest are
    /// address lines.
    pub fn set_from<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bill_from = lines.into_iter().map(Into::into).collect();
    }

    /// Sets the brand color from a hex code, a name, or an RGB value.
    pub fn set_color<T>(&mut self, color: T) -> std::result::Result<(), ColorError>
    where
        T: TryInto<BrandColor>,
        ColorError: From<T::Error>,
    {
        self.brand_color = Some(color.try_into()?);
        Ok(())
    }

    /// Lays out the page and hands it to the canvas output.
    ///
    /// Table state is only read, so rendering again without changes repeats
    /// the same canvas calls.
    pub fn render(&mut self, filename: &str, mode: OutputMode) -> Result<()> {
        debug!(filename, %mode, "rendering table");
        let input = LayoutInput {
            columns: &self.columns,
            rows: &self.rows,
            config: &self.config,
            logo: self.logo.as_deref(),
            bill_from: &self.bill_from,
        };
        LayoutEngine::new(&mut self.canvas, input).run(filename, mode)
    }

    pub fn columns(&self) -> &ColumnModel {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn bill_from(&self) -> &[String] {
        &self.bill_from
    }

    pub fn brand_color(&self) -> Option<BrandColor> {
        self.brand_color
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut C {
        &mut self.canvas
    }

    pub fn into_canvas(self) -> C {
        self.canvas
    }
}
