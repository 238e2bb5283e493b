//! Page geometry and layout constants.
//!
//! Every measurement the layout pipeline uses lives in [`LayoutConfig`]. All
//! fields have defaults matching an A4 portrait page in millimetres, so a YAML
//! file only needs to list what it overrides:
//!
//! ```rust
//! use pagetable::LayoutConfig;
//!
//! let config = LayoutConfig::from_yaml(r#"
//! col_gap: 3
//! margins:
//!   left: 20
//! fonts:
//!   family: courier
//! "#).unwrap();
//!
//! assert_eq!(config.col_gap, 3.0);
//! assert_eq!(config.margins.left, 20.0);
//! assert_eq!(config.margins.right, 15.0);
//! assert_eq!(config.page.width, 210.0);
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`LayoutConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Page dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSize {
    pub width: f64,
    pub height: f64,
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize {
            width: 210.0,
            height: 297.0,
        }
    }
}

/// Page margins. There is no bottom margin: output never paginates.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f64,
    pub top: f64,
    pub right: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Margins {
            left: 15.0,
            top: 15.0,
            right: 15.0,
        }
    }
}

/// Font family and the sizes used by each region.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub family: String,
    /// Bill-from title.
    pub title_size: f64,
    /// Bill-from address lines.
    pub address_size: f64,
    /// Table header and body.
    pub body_size: f64,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            family: "helvetica".to_string(),
            title_size: 12.0,
            address_size: 8.0,
            body_size: 8.0,
        }
    }
}

/// Layout measurements, in page units.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub page: PageSize,
    pub margins: Margins,
    pub fonts: FontConfig,
    /// Horizontal space between two data columns.
    pub col_gap: f64,
    /// Base line height; row heights are multiples of it.
    pub body_line_height: f64,
    /// Table header row height as a multiple of `body_line_height`.
    pub header_row_factor: f64,
    /// Body row height as a multiple of `body_line_height`.
    pub body_row_factor: f64,
    /// Space after the bill-from block as a multiple of `body_line_height`.
    pub header_spacing_factor: f64,
    /// Space between the title and the first address line.
    pub address_spacing: f64,
    pub logo_width: f64,
    pub logo_height: f64,
    /// Thickness of the rules around the table header.
    pub rule_thickness: f64,
    /// Thickness of body cell borders.
    pub body_line_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page: PageSize::default(),
            margins: Margins::default(),
            fonts: FontConfig::default(),
            col_gap: 2.0,
            body_line_height: 4.0,
            header_row_factor: 2.0,
            body_row_factor: 1.5,
            header_spacing_factor: 2.0,
            address_spacing: 2.0,
            logo_width: 24.0,
            logo_height: 20.0,
            rule_thickness: 0.3,
            body_line_width: 0.2,
        }
    }
}

impl LayoutConfig {
    /// Parses a (possibly partial) YAML config and validates it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: LayoutConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a YAML config file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Width between the left and right margins.
    pub fn content_width(&self) -> f64 {
        self.page.width - self.margins.left - self.margins.right
    }

    /// Height of a table header row.
    pub fn header_row_height(&self) -> f64 {
        self.body_line_height * self.header_row_factor
    }

    /// Height of a body row.
    pub fn body_row_height(&self) -> f64 {
        self.body_line_height * self.body_row_factor
    }

    /// Checks that the geometry is drawable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("page.width", self.page.width),
            ("page.height", self.page.height),
            ("body_line_height", self.body_line_height),
            ("header_row_factor", self.header_row_factor),
            ("body_row_factor", self.body_row_factor),
            ("fonts.title_size", self.fonts.title_size),
            ("fonts.address_size", self.fonts.address_size),
            ("fonts.body_size", self.fonts.body_size),
        ];
        let non_negative = [
            ("margins.left", self.margins.left),
            ("margins.top", self.margins.top),
            ("margins.right", self.margins.right),
            ("col_gap", self.col_gap),
            ("header_spacing_factor", self.header_spacing_factor),
            ("address_spacing", self.address_spacing),
            ("logo_width", self.logo_width),
            ("logo_height", self.logo_height),
            ("rule_thickness", self.rule_thickness),
            ("body_line_width", self.body_line_width),
        ];

        for &(field, value) in positive.iter().chain(&non_negative) {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a finite number, got {}", value),
                });
            }
        }
        for (field, value) in positive {
            if value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be positive, got {}", value),
                });
            }
        }
        for (field, value) in non_negative {
            if value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must not be negative, got {}", value),
                });
            }
        }

        if self.content_width() <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "margins",
                reason: format!(
                    "left and right margins ({} + {}) leave no room on a page {} wide",
                    self.margins.left, self.margins.right, self.page.width
                ),
            });
        }

        Ok(())
    }
}
