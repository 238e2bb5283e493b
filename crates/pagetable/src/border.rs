//! Cell border flags and the rules that assign them.
//!
//! Body cells in a table share edges, so each cell only draws the edges it
//! owns: every cell draws its bottom edge, the first row also draws the top
//! edge, and the outer columns draw the outer verticals. Interior verticals are
//! never drawn; the gap cells between columns carry only horizontal edges.
//!
//! ```rust
//! use pagetable::{BorderFlags, BorderResolver};
//!
//! let corner = BorderResolver::flags(0, 0, 3, 3);
//! assert_eq!(corner, BorderFlags::TOP | BorderFlags::BOTTOM | BorderFlags::LEFT);
//! assert_eq!(corner.to_string(), "LTB");
//!
//! assert_eq!(BorderResolver::flags(1, 1, 3, 3), BorderFlags::BOTTOM);
//! assert_eq!(BorderResolver::gap_flags(1), BorderFlags::BOTTOM);
//! ```

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

bitflags! {
    /// Edges drawn around a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct BorderFlags: u8 {
        const TOP    = 0b0001;
        const BOTTOM = 0b0010;
        const LEFT   = 0b0100;
        const RIGHT  = 0b1000;
    }
}

impl BorderFlags {
    /// No edges.
    pub const NONE: Self = Self::empty();

    /// Letter code in `L`, `T`, `R`, `B` order, or `"0"` for no border.
    pub fn code(&self) -> String {
        if self.is_empty() {
            return "0".to_string();
        }
        let mut code = String::with_capacity(4);
        if self.contains(BorderFlags::LEFT) {
            code.push('L');
        }
        if self.contains(BorderFlags::TOP) {
            code.push('T');
        }
        if self.contains(BorderFlags::RIGHT) {
            code.push('R');
        }
        if self.contains(BorderFlags::BOTTOM) {
            code.push('B');
        }
        code
    }

    /// Parses a letter code such as `"BTL"` (any order, case-insensitive).
    pub fn from_code(code: &str) -> Result<Self, String> {
        let code = code.trim();
        if code == "0" || code.is_empty() {
            return Ok(BorderFlags::NONE);
        }
        let mut flags = BorderFlags::NONE;
        for ch in code.chars() {
            flags |= match ch.to_ascii_uppercase() {
                'L' => BorderFlags::LEFT,
                'T' => BorderFlags::TOP,
                'R' => BorderFlags::RIGHT,
                'B' => BorderFlags::BOTTOM,
                _ => return Err(format!("invalid border code '{}'", code)),
            };
        }
        Ok(flags)
    }
}

impl fmt::Display for BorderFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl Serialize for BorderFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.code())
    }
}

impl<'de> Deserialize<'de> for BorderFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        BorderFlags::from_code(&code).map_err(serde::de::Error::custom)
    }
}

/// Assigns border flags to body cells.
#[derive(Clone, Copy, Debug, Default)]
pub struct BorderResolver;

impl BorderResolver {
    /// Border flags for the data cell at (`row`, `col`).
    ///
    /// `row_count` does not influence the result: the last row carries the
    /// same bottom edge as every other row.
    pub fn flags(row: usize, col: usize, _row_count: usize, col_count: usize) -> BorderFlags {
        let mut flags = BorderFlags::BOTTOM;
        if row == 0 {
            flags |= BorderFlags::TOP;
        }
        if col == 0 {
            flags |= BorderFlags::LEFT;
        }
        if col + 1 == col_count {
            flags |= BorderFlags::RIGHT;
        }
        flags
    }

    /// Border flags for the spacer between two data cells of `row`.
    pub fn gap_flags(row: usize) -> BorderFlags {
        if row == 0 {
            BorderFlags::TOP | BorderFlags::BOTTOM
        } else {
            BorderFlags::BOTTOM
        }
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn interior_cells_only_draw_bottom(
            rows in 3usize..20,
            cols in 3usize..12,
            row_seed in any::<usize>(),
            col_seed in any::<usize>(),
        ) {
            let i = 1 + row_seed % (rows - 2);
            let j = 1 + col_seed % (cols - 2);
            prop_assert_eq!(BorderResolver::flags(i, j, rows, cols), BorderFlags::BOTTOM);
        }

        #[test]
        fn every_cell_draws_bottom(
            rows in 1usize..20,
            cols in 1usize..12,
            row_seed in any::<usize>(),
            col_seed in any::<usize>(),
        ) {
            let i = row_seed % rows;
            let j = col_seed % cols;
            let flags = BorderResolver::flags(i, j, rows, cols);
            prop_assert!(flags.contains(BorderFlags::BOTTOM));
            prop_assert_eq!(flags.contains(BorderFlags::TOP), i == 0);
            prop_assert_eq!(flags.contains(BorderFlags::LEFT), j == 0);
            prop_assert_eq!(flags.contains(BorderFlags::RIGHT), j == cols - 1);
        }

        #[test]
        fn first_row_corners(rows in 1usize..20, cols in 1usize..12) {
            let left = BorderResolver::flags(0, 0, rows, cols);
            let right = BorderResolver::flags(0, cols - 1, rows, cols);
            prop_assert!(left.contains(BorderFlags::TOP | BorderFlags::BOTTOM | BorderFlags::LEFT));
            prop_assert!(right.contains(BorderFlags::TOP | BorderFlags::BOTTOM | BorderFlags::RIGHT));
        }
    }
}
