//! Brand color values.
//!
//! Accepted forms:
//!
//! - Hex: `"#1e88e5"` or `"#18e"` (3 or 6 digits)
//! - RGB tuple: `[30, 136, 229]` (from YAML/JSON)
//! - A handful of names: `black`, `white`, `red`, `green`, `blue`, `gray`/`grey`
//!
//! ```rust
//! use pagetable::BrandColor;
//!
//! assert_eq!(BrandColor::parse("#18e").unwrap(), BrandColor::rgb(0x11, 0x88, 0xee));
//! assert_eq!(BrandColor::parse("navy").unwrap_err().to_string(), "unknown color name: navy");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("invalid hex color: #{0} (must be 3 or 6 digits)")]
    InvalidHex(String),

    #[error("unknown color name: {0}")]
    UnknownName(String),
}

/// An RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRaw", into = "ColorRaw")]
pub struct BrandColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl BrandColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        BrandColor { r, g, b }
    }

    /// Parses a hex code or color name.
    pub fn parse(s: &str) -> Result<Self, ColorError> {
        let s = s.trim();
        match s.strip_prefix('#') {
            Some(hex) => Self::parse_hex(hex),
            None => Self::parse_named(s),
        }
    }

    fn parse_hex(hex: &str) -> Result<Self, ColorError> {
        let invalid = || ColorError::InvalidHex(hex.to_string());
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
                .ok_or_else(invalid)
        };
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(BrandColor::rgb(
                channel(0..1)? * 17,
                channel(1..2)? * 17,
                channel(2..3)? * 17,
            )),
            6 => Ok(BrandColor::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            _ => Err(invalid()),
        }
    }

    fn parse_named(name: &str) -> Result<Self, ColorError> {
        let color = match name.to_lowercase().as_str() {
            "black" => BrandColor::rgb(0, 0, 0),
            "white" => BrandColor::rgb(255, 255, 255),
            "red" => BrandColor::rgb(255, 0, 0),
            "green" => BrandColor::rgb(0, 128, 0),
            "blue" => BrandColor::rgb(0, 0, 255),
            "gray" | "grey" => BrandColor::rgb(128, 128, 128),
            _ => return Err(ColorError::UnknownName(name.to_string())),
        };
        Ok(color)
    }

    /// Lowercase `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for BrandColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for BrandColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BrandColor {
    type Error = ColorError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl TryFrom<String> for BrandColor {
    type Error = ColorError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

// Lets `Table::set_color` take `BrandColor`, tuples and arrays directly.
impl From<std::convert::Infallible> for ColorError {
    fn from(never: std::convert::Infallible) -> Self {
        match never {}
    }
}

impl From<(u8, u8, u8)> for BrandColor {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        BrandColor::rgb(r, g, b)
    }
}

impl From<[u8; 3]> for BrandColor {
    fn from([r, g, b]: [u8; 3]) -> Self {
        BrandColor::rgb(r, g, b)
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum ColorRaw {
    Text(String),
    Tuple([u8; 3]),
}

impl TryFrom<ColorRaw> for BrandColor {
    type Error = ColorError;

    fn try_from(raw: ColorRaw) -> Result<Self, Self::Error> {
        match raw {
            ColorRaw::Text(s) => BrandColor::parse(&s),
            ColorRaw::Tuple(rgb) => Ok(rgb.into()),
        }
    }
}

impl From<BrandColor> for ColorRaw {
    fn from(color: BrandColor) -> Self {
        ColorRaw::Text(color.to_hex())
    }
}
