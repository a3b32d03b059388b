// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Room mapping via breadth-first flood fill.
//!
//! Each labeled room grows outward from its anchor through 4-directionally
//! adjacent cells, stopping at wall characters and at cells already claimed
//! by an earlier room. Walls bound regions without requiring a fully closed
//! rectangle, so rooms may be irregular polygons.
//!
//! Rooms are filled in label-discovery order; when two rooms could reach the
//! same cells (a gap in a shared wall), the first-processed room wins the
//! contested cells. Every cell is visited at most once across all rooms, so
//! the whole pass is O(rows x cols).

use std::collections::VecDeque;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::furniture::{Furniture, FurnitureCounts};
use crate::grid::{Coord, Grid};

/// Wall characters - impassable boundaries during flood fill.
const WALL_CHARS: [char; 5] = ['|', '-', '+', '/', '\\'];

/// Check whether a character blocks flood fill.
#[inline]
pub fn is_wall(c: char) -> bool {
    WALL_CHARS.contains(&c)
}

/// A named room recovered from the grid.
#[derive(Debug, Clone)]
pub struct Room {
    /// Room name from its label.
    pub name: String,
    /// Grid coordinate of the label's opening parenthesis.
    pub anchor: Coord,
    /// Every cell belonging to the room. Never empty: the anchor is always
    /// a member, even when its own character is a wall.
    pub cells: FxHashSet<Coord>,
    /// Furniture tally over `cells`.
    pub counts: FurnitureCounts,
}

/// Map out every labeled room and count the furniture inside each.
///
/// `labels` is consumed in its iteration order, which must be the label
/// discovery order; the returned rooms keep that order. The claim set
/// threaded through the fills guarantees the rooms are pairwise disjoint.
pub fn map_rooms(grid: &Grid, labels: &IndexMap<String, Coord>) -> Vec<Room> {
    let mut claimed: FxHashSet<Coord> = FxHashSet::default();
    let mut rooms = Vec::with_capacity(labels.len());

    for (name, &anchor) in labels {
        let room = fill_room(grid, name, anchor, &claimed);
        claimed.extend(room.cells.iter().copied());
        rooms.push(room);
    }

    rooms
}

/// Flood-fill one room from its anchor.
///
/// `claimed` holds every cell owned by previously completed rooms; the fill
/// never expands into it. The anchor itself is not checked against any set -
/// it is simply the first cell dequeued, so the room is never empty and the
/// anchor's own character is counted like any other cell.
fn fill_room(grid: &Grid, name: &str, anchor: Coord, claimed: &FxHashSet<Coord>) -> Room {
    let mut cells = FxHashSet::default();
    let mut counts = FurnitureCounts::new();

    let mut queue: VecDeque<Coord> = VecDeque::new();
    let mut visited: FxHashSet<Coord> = FxHashSet::default();
    queue.push_back(anchor);
    visited.insert(anchor);

    while let Some((row, col)) = queue.pop_front() {
        cells.insert((row, col));

        if let Some(kind) = grid.get(row, col).and_then(Furniture::from_char) {
            counts.record(kind);
        }

        for next in neighbors(row, col) {
            // Per-row bounds check: `get` returns None outside the (ragged)
            // row, so out-of-grid neighbors drop out here.
            let passable = match grid.get(next.0, next.1) {
                Some(c) => !is_wall(c),
                None => false,
            };
            if passable && !visited.contains(&next) && !claimed.contains(&next) {
                visited.insert(next);
                queue.push_back(next);
            }
        }
    }

    Room {
        name: name.to_string(),
        anchor,
        cells,
        counts,
    }
}

/// The 4 axis-aligned neighbors of a cell, minus those that would underflow
/// the top or left edge.
fn neighbors(row: usize, col: usize) -> SmallVec<[Coord; 4]> {
    let mut out = SmallVec::new();
    if row > 0 {
        out.push((row - 1, col));
    }
    out.push((row + 1, col));
    if col > 0 {
        out.push((row, col - 1));
    }
    out.push((row, col + 1));
    out
}
