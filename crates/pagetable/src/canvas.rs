//! The drawing surface the layout engine talks to.
//!
//! A [`Canvas`] owns a cursor and a current page. The engine never positions
//! text itself: it issues cells and line breaks, and the canvas moves the
//! cursor. Backends decide what a cell, line or image actually becomes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::border::BorderFlags;
use crate::error::CanvasError;

/// A position on the page, in page units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Font weight/slant requested from the canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Style code in the form classic PDF writers expect (`""`, `"B"`, `"I"`, `"BI"`).
    pub fn code(&self) -> &'static str {
        match self {
            FontStyle::Regular => "",
            FontStyle::Bold => "B",
            FontStyle::Italic => "I",
            FontStyle::BoldItalic => "BI",
        }
    }
}

/// Horizontal alignment of text inside a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Where the finished document goes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Send to the standard output sink for inline display.
    #[default]
    Inline,
    /// Send to the standard output sink, marked as an attachment.
    Download,
    /// Write to the target path on disk.
    File,
    /// Keep the document in memory.
    String,
}

impl OutputMode {
    /// Single-letter form (`I`, `D`, `F`, `S`).
    pub fn letter(&self) -> char {
        match self {
            OutputMode::Inline => 'I',
            OutputMode::Download => 'D',
            OutputMode::File => 'F',
            OutputMode::String => 'S',
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputMode::Inline => "inline",
            OutputMode::Download => "download",
            OutputMode::File => "file",
            OutputMode::String => "string",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "i" | "inline" => Ok(OutputMode::Inline),
            "d" | "download" => Ok(OutputMode::Download),
            "f" | "file" => Ok(OutputMode::File),
            "s" | "string" => Ok(OutputMode::String),
            other => Err(format!("unknown output mode: {}", other)),
        }
    }
}

/// Primitive drawing operations with a persistent cursor.
///
/// Cursor rules every implementation must follow:
///
/// - `draw_cell` advances X by `width`; with `line_break` it instead resets X
///   to the left margin and advances Y by `height`. A `width` of `0.0` means
///   "up to the right margin".
/// - `draw_line` resets X to the left margin and moves Y to the line's lower end.
/// - `line_break(None)` moves down by the height of the last cell drawn.
/// - `add_page` places the cursor at the top-left margin corner.
pub trait Canvas {
    fn set_font(&mut self, family: &str, style: FontStyle, size: f64) -> Result<(), CanvasError>;

    fn draw_cell(
        &mut self,
        width: f64,
        height: f64,
        text: &str,
        borders: BorderFlags,
        line_break: bool,
        align: Align,
    ) -> Result<(), CanvasError>;

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), CanvasError>;

    fn draw_image(
        &mut self,
        path: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), CanvasError>;

    fn set_line_width(&mut self, thickness: f64) -> Result<(), CanvasError>;

    fn add_page(&mut self) -> Result<(), CanvasError>;

    /// Resets X to the left margin and moves Y down.
    fn line_break(&mut self, height: Option<f64>) -> Result<(), CanvasError>;

    /// Current cursor position.
    fn cursor(&self) -> Point;

    /// Hands the finished document to `target` according to `mode`.
    fn output(&mut self, target: &str, mode: OutputMode) -> Result<(), CanvasError>;
}

impl<C: Canvas + ?Sized> Canvas for &mut C {
    fn set_font(&mut self, family: &str, style: FontStyle, size: f64) -> Result<(), CanvasError> {
        (**self).set_font(family, style, size)
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
        (**self).draw_cell(width, height, text, borders, line_break, align)
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Result<(), CanvasError> {
        (**self).draw_line(x1, y1, x2, y2)
    }

    fn draw_image(
        &mut self,
        path: &str,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), CanvasError> {
        (**self).draw_image(path, x, y, width, height)
    }

    fn set_line_width(&mut self, thickness: f64) -> Result<(), CanvasError> {
        (**self).set_line_width(thickness)
    }

    fn add_page(&mut self) -> Result<(), CanvasError> {
        (**self).add_page()
    }

    fn line_break(&mut self, height: Option<f64>) -> Result<(), CanvasError> {
        (**self).line_break(height)
    }

    fn cursor(&self) -> Point {
        (**self).cursor()
    }

    fn output(&mut self, target: &str, mode: OutputMode) -> Result<(), CanvasError> {
        (**self).output(target, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_mode_parses_letters_and_names() {
        assert_eq!("F".parse::<OutputMode>().unwrap(), OutputMode::File);
        assert_eq!("s".parse::<OutputMode>().unwrap(), OutputMode::String);
        assert_eq!("Download".parse::<OutputMode>().unwrap(), OutputMode::Download);
        assert_eq!(" inline ".parse::<OutputMode>().unwrap(), OutputMode::Inline);
        assert!("X".parse::<OutputMode>().is_err());
    }

    #[test]
    fn test_output_mode_letter_round_trips() {
        for mode in [
            OutputMode::Inline,
            OutputMode::Download,
            OutputMode::File,
            OutputMode::String,
        ] {
            let parsed: OutputMode = mode.letter().to_string().parse().unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_font_style_codes() {
        assert_eq!(FontStyle::Regular.code(), "");
        assert_eq!(FontStyle::Bold.code(), "B");
        assert_eq!(FontStyle::BoldItalic.code(), "BI");
    }
}
