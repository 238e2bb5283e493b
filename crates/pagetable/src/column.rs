//! Column list and equal-width distribution.
//!
//! Columns share the content width evenly after the gaps between them are
//! taken out:
//!
//! ```text
//! width = (page_width - margin_left - margin_right - gap * (n - 1)) / n
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, TableError};

/// A named table column. Its width is derived at render time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
}

impl Column {
    pub fn new(name: impl Into<String>) -> Self {
        Column { name: name.into() }
    }
}

/// Ordered columns of a table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnModel {
    columns: Vec<Column>,
}

impl ColumnModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column. Duplicate names are allowed.
    pub fn add_column(&mut self, name: impl Into<String>) {
        self.columns.push(Column::new(name));
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Column> {
        self.columns.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Width between the margins.
    pub fn content_width(page_width: f64, margin_left: f64, margin_right: f64) -> f64 {
        page_width - margin_left - margin_right
    }

    /// Width shared by every column.
    ///
    /// Fails with [`TableError::InvalidConfiguration`] when there are no
    /// columns or when the gaps leave no positive width.
    pub fn width(
        page_width: f64,
        margin_left: f64,
        margin_right: f64,
        gap: f64,
        column_count: usize,
    ) -> Result<f64> {
        if column_count == 0 {
            return Err(TableError::InvalidConfiguration(
                "table has no columns".to_string(),
            ));
        }

        let gaps = gap * (column_count - 1) as f64;
        let available = Self::content_width(page_width, margin_left, margin_right) - gaps;
        let width = available / column_count as f64;
        if width <= 0.0 {
            return Err(TableError::InvalidConfiguration(format!(
                "{} columns with a gap of {} do not fit in a content width of {}",
                column_count,
                gap,
                Self::content_width(page_width, margin_left, margin_right)
            )));
        }

        Ok(width)
    }

    /// [`ColumnModel::width`] for the current column count.
    pub fn column_width(
        &self,
        page_width: f64,
        margin_left: f64,
        margin_right: f64,
        gap: f64,
    ) -> Result<f64> {
        Self::width(page_width, margin_left, margin_right, gap, self.len())
    }
}

impl<'a> IntoIterator for &'a ColumnModel {
    type Item = &'a Column;
    type IntoIter = std::slice::Iter<'a, Column>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn columns_and_gaps_fill_content_width(
            n in 1usize..20,
            page_width in 200.0f64..1000.0,
            left in 0.0f64..40.0,
            right in 0.0f64..40.0,
            gap in 0.0f64..3.0,
        ) {
            let width = ColumnModel::width(page_width, left, right, gap, n).unwrap();
            let total = n as f64 * width + (n - 1) as f64 * gap;
            prop_assert!((total - (page_width - left - right)).abs() < 1e-6);
        }
    }
}
