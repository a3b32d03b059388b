// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room-label extraction.
//!
//! Labels are parenthesized room names embedded in the plan, e.g.
//! `(living room)`. Each label anchors its room at the grid coordinate of
//! the opening parenthesis; that coordinate seeds the flood fill.
//!
//! Matching is non-nested and non-greedy: each `(` is closed by the first
//! `)` after it, and the scan resumes immediately after that `)`. An open
//! paren with no close yields nothing.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::grid::{Coord, Grid};

/// Label scanner over a single row - finds labels without copying the row.
pub struct LabelScanner<'a> {
    row: &'a [char],
    position: usize,
}

impl<'a> LabelScanner<'a> {
    /// Create a new scanner
    pub fn new(row: &'a [char]) -> Self {
        Self { row, position: 0 }
    }

    /// Scan for the next label.
    /// Returns (trimmed name, column of the opening parenthesis).
    pub fn next_label(&mut self) -> Option<(String, usize)> {
        loop {
            let rest = &self.row[self.position..];
            let open = self.position + rest.iter().position(|&c| c == '(')?;

            let after_open = &self.row[open + 1..];
            let close = open + 1 + after_open.iter().position(|&c| c == ')')?;

            // An immediately-closed pair `()` is not a label; resume right
            // after the open paren so later pairs on the row still match.
            if close == open + 1 {
                self.position = open + 1;
                continue;
            }

            let name: String = self.row[open + 1..close].iter().collect();
            self.position = close + 1;
            return Some((name.trim().to_string(), open));
        }
    }

    /// Reset scanner to the start of the row
    pub fn reset(&mut self) {
        self.position = 0;
    }
}

/// Extract every room label from the grid.
///
/// Returns a map from room name to anchor `(row, col)`, in the order names
/// were first discovered. A duplicated name keeps its discovery position
/// but takes the later anchor (last-seen-wins).
///
/// Fails with [`Error::NoRoomsFound`] if the grid contains no labels at all.
pub fn extract_labels(grid: &Grid) -> Result<IndexMap<String, Coord>> {
    let mut labels = IndexMap::new();

    for row_idx in 0..grid.height() {
        let row = grid.row(row_idx).unwrap_or(&[]);
        let mut scanner = LabelScanner::new(row);
        while let Some((name, col)) = scanner.next_label() {
            labels.insert(name, (row_idx, col));
        }
    }

    if labels.is_empty() {
        return Err(Error::NoRoomsFound);
    }
    Ok(labels)
}
