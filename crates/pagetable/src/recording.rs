//! A canvas that records drawing calls instead of rasterizing them.
//!
//! [`RecordingCanvas`] applies the cursor rules of [`Canvas`] and keeps every
//! call, with the resolved position of cells, as a [`DrawCall`]. On `output`
//! the display list is serialized as JSON or YAML and sent wherever the
//! [`OutputMode`] says.
//!
//! ```rust
//! use pagetable::{Align, BorderFlags, Canvas, DrawCall, LayoutConfig, RecordingCanvas};
//!
//! let mut canvas = RecordingCanvas::new(&LayoutConfig::default());
//! canvas.add_page().unwrap();
//! canvas.draw_cell(50.0, 6.0, "Total", BorderFlags::all(), true, Align::Left).unwrap();
//!
//! assert_eq!(canvas.cursor().x, 15.0);
//! assert_eq!(canvas.cursor().y, 21.0);
//! assert_eq!(canvas.calls().len(), 2);
//! ```

use std::fmt;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::border::BorderFlags;
use crate::canvas::{Align, Canvas, FontStyle, OutputMode, Point};
use crate::config::{LayoutConfig, Margins, PageSize};
use crate::error::CanvasError;

/// One recorded canvas call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCall {
    AddPage,
    SetFont {
        family: String,
        style: FontStyle,
        size: f64,
    },
    /// A cell with its resolved top-left corner and width.
    Cell {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        text: String,
        borders: BorderFlags,
        line_break: bool,
        align: Align,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Image {
        path: String,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    LineWidth {
        thickness: f64,
    },
    LineBreak {
        height: f64,
    },
    Output {
        target: String,
        mode: OutputMode,
    },
}

impl DrawCall {
    pub fn is_cell(&self) -> bool {
        matches!(self, DrawCall::Cell { .. })
    }

    pub fn is_line(&self) -> bool {
        matches!(self, DrawCall::Line { .. })
    }
}

impl fmt::Display for DrawCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DrawCall::AddPage => write!(f, "add_page"),
            DrawCall::SetFont {
                family,
                style,
                size,
            } => {
                let style = if style.code().is_empty() {
                    "-"
                } else {
                    style.code()
                };
                write!(f, "font {} {} {:.1}", family, style, size)
            }
            DrawCall::Cell {
                x,
                y,
                width,
                height,
                text,
                borders,
                line_break,
                ..
            } => {
                write!(
                    f,
                    "cell {:.2},{:.2} {:.2}x{:.2} {}",
                    x, y, width, height, borders
                )?;
                if *line_break {
                    write!(f, " ln")?;
                }
                if !text.is_empty() {
                    write!(f, " {:?}", text)?;
                }
                Ok(())
            }
            DrawCall::Line { x1, y1, x2, y2 } => {
                write!(f, "line {:.2},{:.2} -> {:.2},{:.2}", x1, y1, x2, y2)
            }
            DrawCall::Image {
                path,
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "image {} {:.2},{:.2} {:.2}x{:.2}",
                path, x, y, width, height
            ),
            DrawCall::LineWidth { thickness } => write!(f, "line_width {:.2}", thickness),
            DrawCall::LineBreak { height } => write!(f, "ln {:.2}", height),
            DrawCall::Output { target, mode } => write!(f, "output {} {}", target, mode),
        }
    }
}

/// Encoding of the serialized display list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayListFormat {
    #[default]
    Json,
    Yaml,
}

/// The serialized form written by [`RecordingCanvas::output`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayList {
    pub page: PageSize,
    pub pages: usize,
    pub calls: Vec<DrawCall>,
}

/// In-memory [`Canvas`] producing a display list.
#[derive(Clone, Debug)]
pub struct RecordingCanvas {
    page: PageSize,
    margins: Margins,
    format: DisplayListFormat,
    cursor: Point,
    last_height: f64,
    pages: usize,
    calls: Vec<DrawCall>,
    rendered: Option<String>,
}

impl RecordingCanvas {
    /// Creates a canvas with the page geometry of `config`.
    pub fn new(config: &LayoutConfig) -> Self {
        Self::with_geometry(config.page, config.margins)
    }

    pub fn with_geometry(page: PageSize, margins: Margins) -> Self {
        RecordingCanvas {
            page,
            margins,
            format: DisplayListFormat::default(),
            cursor: Point::new(margins.left, margins.top),
            last_height: 0.0,
            pages: 0,
            calls: Vec::new(),
            rendered: None,
        }
    }

    /// Sets the encoding used by `output`.
    pub fn format(mut self, format: DisplayListFormat) -> Self {
        self.format = format;
        self
    }

    /// Calls recorded since the last [`take_calls`](Self::take_calls).
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drains the recorded calls and resets the page count.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        self.pages = 0;
        std::mem::take(&mut self.calls)
    }

    /// Number of pages started.
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// The most recent serialized document, whatever the output mode was.
    pub fn rendered(&self) -> Option<&str> {
        self.rendered.as_deref()
    }

    /// Recorded calls, one per line, in their `Display` form.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for call in &self.calls {
            text.push_str(&call.to_string());
            text.push('\n');
        }
        text
    }

    /// Snapshot of the recorded calls.
    pub fn display_list(&self) -> DisplayList {
        DisplayList {
            page: self.page,
            pages: self.pages,
            calls: self.calls.clone(),
        }
    }

    fn require_page(&self) -> Result<(), CanvasError> {
        if self.pages == 0 {
            return Err(CanvasError::NoPage);
        }
        Ok(())
    }

    fn serialize(&self) -> Result<String, CanvasError> {
        let list = self.display_list();
        let encoded = match self.format {
            DisplayListFormat::Json => serde_json::to_string_pretty(&list)?,
            DisplayListFormat::Yaml => serde_yaml::to_string(&list)?,
        };
        Ok(encoded)
    }
}

impl Canvas for RecordingCanvas {
    fn set_font(&mut self, family: &str, style: FontStyle, size: f64) -> Result<(), CanvasError> {
        self.calls.push(DrawCall::SetFont {
            family: family.to_string(),
            style,
            size,
        });
        Ok(())
    }

    fn draw_cell(
        &mut self,
        width: f64,
        height: f64,
        text: &str,
        borders: BorderFlags,
        line_break: bool,
        align: Align,
    ) -> Result<(), CanvasError> {
        self.require_page()?;

        let width = if width == 0.0 {
            self.page.width - self.margins.right - self.cursor.x
        } else {
            width
        };

        self.calls.push(DrawCall::Cell {
            x: self.cursor.x,
            y: self.cursor.y,
            width,
            height,
            text: text.to_string(),
            borders,
            line_break,
            align,
        });

        self.last_height = height;
        if line_break {
            self.cursor.x = self.margins.left;
            self.cursor.y += height;
        } else {
            self.cursor.x += width;
        }
        Ok(())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), CanvasError> {
        self.require_page()?;
        self.calls.push(DrawCall::Line { x1, y1, x2, y2 });
        self.cursor = Point::new(self.margins.left, y1.max(y2));
        Ok(())
    }

    fn draw_image(
        &mut self,
        path: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), CanvasError> {
        self.require_page()?;
        self.calls.push(DrawCall::Image {
            path: path.to_string(),
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn set_line_width(&mut self, thickness: f64) -> Result<(), CanvasError> {
        self.calls.push(DrawCall::LineWidth { thickness });
        Ok(())
    }

    fn add_page(&mut self) -> Result<(), CanvasError> {
        self.pages += 1;
        self.cursor = Point::new(self.margins.left, self.margins.top);
        self.last_height = 0.0;
        self.calls.push(DrawCall::AddPage);
        Ok(())
    }

    fn line_break(&mut self, height: Option<f64>) -> Result<(), CanvasError> {
        self.require_page()?;
        let height = height.unwrap_or(self.last_height);
        self.calls.push(DrawCall::LineBreak { height });
        self.cursor.x = self.margins.left;
        self.cursor.y += height;
        Ok(())
    }

    fn cursor(&self) -> Point {
        self.cursor
    }

    fn output(&mut self, target: &str, mode: OutputMode) -> Result<(), CanvasError> {
        self.calls.push(DrawCall::Output {
            target: target.to_string(),
            mode,
        });
        let encoded = self.serialize()?;

        match mode {
            OutputMode::File => std::fs::write(target, &encoded)?,
            OutputMode::Inline | OutputMode::Download => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(encoded.as_bytes())?;
                stdout.flush()?;
            }
            OutputMode::String => {}
        }

        self.rendered = Some(encoded);
        Ok(())
    }
}
