// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Character grid construction for floor-plan text.
//!
//! A floor plan is kept as a sequence of rows of single characters. Rows keep
//! their original lengths (no padding), so every column access is bounds
//! checked per row.

use crate::error::{Error, Result};

/// A coordinate in the grid: `(row, col)`, 0-based.
pub type Coord = (usize, usize);

/// Immutable 2D character grid with ragged row lengths.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<Vec<char>>,
}

impl Grid {
    /// Build a grid from raw floor-plan text.
    ///
    /// Splits on line breaks and keeps original column indices. Returns
    /// [`Error::EmptyInput`] if the text is empty or all-whitespace.
    pub fn from_text(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let rows = text.lines().map(|line| line.chars().collect()).collect();
        Ok(Self { rows })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// One row's characters, or `None` past the last row.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    /// The character at `(row, col)`, or `None` outside that row's bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Total number of cells across all rows.
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}
