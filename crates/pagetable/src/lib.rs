//! # pagetable - Page Layout for Tabular Documents
//!
//! `pagetable` lays out a table (an invoice's line items, say) on a fixed-size
//! page and drives a [`Canvas`] through the drawing calls that produce it: a
//! logo and "bill-from" block, a ruled table header, and a body of bordered
//! cells.
//!
//! The engine never rasterizes anything itself. Any backend implementing
//! [`Canvas`] can receive the calls; the crate ships [`RecordingCanvas`], which
//! tracks the cursor and serializes the resulting display list as JSON or YAML.
//!
//! ## Core Concepts
//!
//! - [`Table`]: columns, rows and document metadata; entry point for rendering
//! - [`Canvas`]: drawing surface with a persistent cursor
//! - [`ColumnModel`]: equal-width column distribution
//! - [`BorderResolver`]: which edges each body cell draws ([`BorderFlags`])
//! - [`LayoutConfig`]: every measurement, loadable from YAML
//!
//! ## Quick Start
//!
//! ```rust
//! use pagetable::{LayoutConfig, OutputMode, RecordingCanvas, Table};
//!
//! let config = LayoutConfig::default();
//! let mut table = Table::with_config(RecordingCanvas::new(&config), config);
//!
//! table.add_column("Description").add_column("Amount");
//! table.add_record(["Consulting", "1200.00"]).unwrap();
//! table.add_record(["Travel", "310.50"]).unwrap();
//! table.set_from(["Acme Ltd", "1 Industrial Way"]);
//!
//! table.render("invoice.json", OutputMode::String).unwrap();
//!
//! let cells = table.canvas().calls().iter().filter(|c| c.is_cell()).count();
//! assert!(cells > 0);
//! ```
//!
//! ## Errors
//!
//! Records with the wrong number of values are rejected by
//! [`Table::add_record`]. Rendering a table without columns fails with
//! [`TableError::InvalidConfiguration`] before anything is drawn. Canvas
//! failures come back as [`TableError::Canvas`].

mod border;
mod canvas;
mod color;
mod column;
mod config;
mod error;
mod layout;
mod recording;
mod table;

pub use border::{BorderFlags, BorderResolver};
pub use canvas::{Align, Canvas, FontStyle, OutputMode, Point};
pub use color::{BrandColor, ColorError};
pub use column::{Column, ColumnModel};
pub use config::{ConfigError, FontConfig, LayoutConfig, Margins, PageSize};
pub use error::{CanvasError, Result, TableError};
pub use layout::{LayoutEngine, LayoutInput};
pub use recording::{DisplayList, DisplayListFormat, DrawCall, RecordingCanvas};
pub use table::Table;
