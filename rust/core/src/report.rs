// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Report aggregation and rendering.
//!
//! Sums the per-room furniture tallies into a `total` entry and renders the
//! fixed text layout expected by the delivery system.

use indexmap::IndexMap;

use crate::furniture::FurnitureCounts;
use crate::mapper::Room;

/// Furniture report: one `total` entry plus one entry per room.
///
/// Built once from parsed rooms and never mutated afterwards.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Report {
    total: FurnitureCounts,
    rooms: IndexMap<String, FurnitureCounts>,
}

impl Report {
    /// Build a report from mapped rooms.
    pub fn from_rooms(rooms: &[Room]) -> Self {
        Self::from_counts(
            rooms
                .iter()
                .map(|room| (room.name.clone(), room.counts))
                .collect(),
        )
    }

    /// Build a report from a name-to-counts map.
    pub fn from_counts(rooms: IndexMap<String, FurnitureCounts>) -> Self {
        let mut total = FurnitureCounts::new();
        for counts in rooms.values() {
            total.add(counts);
        }
        Self { total, rooms }
    }

    /// The summed counts across all rooms.
    pub fn total(&self) -> &FurnitureCounts {
        &self.total
    }

    /// Counts for one room, if it exists.
    pub fn room(&self, name: &str) -> Option<&FurnitureCounts> {
        self.rooms.get(name)
    }

    /// Render the report as plain text.
    ///
    /// The `total` block comes first, then each room in lexicographic name
    /// order. Every block is a `<name>:` line followed by its counts line.
    /// No trailing newline.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(2 + 2 * self.rooms.len());

        lines.push("total:".to_string());
        lines.push(self.total.to_string());

        let mut names: Vec<&String> = self.rooms.keys().collect();
        names.sort();
        for name in names {
            lines.push(format!("{name}:"));
            lines.push(self.rooms[name.as_str()].to_string());
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::furniture::Furniture;

    fn counts(w: u32, p: u32, s: u32, c: u32) -> FurnitureCounts {
        let mut out = FurnitureCounts::new();
        for _ in 0..w {
            out.record(Furniture::WoodenChair);
        }
        for _ in 0..p {
            out.record(Furniture::PlasticChair);
        }
        for _ in 0..s {
            out.record(Furniture::Sofa);
        }
        for _ in 0..c {
            out.record(Furniture::Chair);
        }
        out
    }

    #[test]
    fn test_total_single_room() {
        let report = Report::from_counts(IndexMap::from([("room1".to_string(), counts(1, 2, 0, 0))]));

        assert_eq!(report.total().get(Furniture::WoodenChair), 1);
        assert_eq!(report.total().get(Furniture::PlasticChair), 2);
        assert_eq!(report.total().get(Furniture::Sofa), 0);
        assert_eq!(report.total().get(Furniture::Chair), 0);
        assert_eq!(report.room("room1"), Some(&counts(1, 2, 0, 0)));
    }

    #[test]
    fn test_total_multiple_rooms() {
        let report = Report::from_counts(IndexMap::from([
            ("room1".to_string(), counts(1, 2, 0, 0)),
            ("room2".to_string(), counts(3, 0, 1, 1)),
        ]));

        assert_eq!(report.total().get(Furniture::WoodenChair), 4);
        assert_eq!(report.total().get(Furniture::PlasticChair), 2);
        assert_eq!(report.total().get(Furniture::Sofa), 1);
        assert_eq!(report.total().get(Furniture::Chair), 1);
    }

    #[test]
    fn test_render_single_room() {
        let report = Report::from_counts(IndexMap::from([("room1".to_string(), counts(1, 2, 0, 0))]));

        assert_eq!(
            report.render(),
            "total:\nW: 1, P: 2, S: 0, C: 0\nroom1:\nW: 1, P: 2, S: 0, C: 0"
        );
    }

    #[test]
    fn test_render_multiple_rooms() {
        let report = Report::from_counts(IndexMap::from([
            ("office".to_string(), counts(1, 2, 0, 0)),
            ("living room".to_string(), counts(3, 0, 1, 1)),
        ]));

        assert_eq!(
            report.render(),
            "total:\n\
             W: 4, P: 2, S: 1, C: 1\n\
             living room:\n\
             W: 3, P: 0, S: 1, C: 1\n\
             office:\n\
             W: 1, P: 2, S: 0, C: 0"
        );
    }

    #[test]
    fn test_render_lexicographic_order() {
        let report = Report::from_counts(IndexMap::from([
            ("zebra".to_string(), counts(1, 0, 0, 0)),
            ("apple".to_string(), counts(2, 0, 0, 0)),
            ("banana".to_string(), counts(3, 0, 0, 0)),
        ]));

        let rendered = report.render();
        let names: Vec<&str> = rendered
            .lines()
            .step_by(2)
            .map(|line| line.trim_end_matches(':'))
            .collect();

        assert_eq!(names, ["total", "apple", "banana", "zebra"]);
    }
}
