// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Floorcount Core Parser
//!
//! Parses ASCII floor-plan diagrams into disjoint rooms and counts the
//! furniture symbols inside each.
//!
//! ## Overview
//!
//! This crate provides the core parsing pipeline for Floorcount:
//!
//! - **Grid building**: raw text to a ragged 2D character grid
//! - **Label scanning**: parenthesized room names anchor each room
//! - **Room mapping**: breadth-first flood fill bounded by wall characters
//! - **Reporting**: per-room and total furniture tallies, fixed text layout
//!
//! ## Quick Start
//!
//! ```rust
//! use floorcount_core::{parse_floor_plan, Furniture, Report};
//!
//! let plan = "+------+\n|(bar) |\n| W S  |\n+------+";
//! let rooms = parse_floor_plan(plan).unwrap();
//!
//! assert_eq!(rooms.len(), 1);
//! assert_eq!(rooms[0].name, "bar");
//!
//! let report = Report::from_rooms(&rooms);
//! assert_eq!(report.total().get(Furniture::WoodenChair), 1);
//! assert_eq!(report.total().get(Furniture::Sofa), 1);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for report types

pub mod error;
pub mod furniture;
pub mod grid;
pub mod labels;
pub mod mapper;
pub mod report;

pub use error::{Error, Result};
pub use furniture::{Furniture, FurnitureCounts};
pub use grid::{Coord, Grid};
pub use labels::{extract_labels, LabelScanner};
pub use mapper::{is_wall, map_rooms, Room};
pub use report::Report;

/// Parse a floor plan end to end: grid, labels, then room mapping.
///
/// Returns the rooms in label-discovery order. Fails with
/// [`Error::EmptyInput`] on empty or whitespace-only text and with
/// [`Error::NoRoomsFound`] when the grid has no room labels.
pub fn parse_floor_plan(text: &str) -> Result<Vec<Room>> {
    let grid = Grid::from_text(text)?;
    let labels = extract_labels(&grid)?;
    Ok(map_rooms(&grid, &labels))
}
