// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Furniture symbol definitions and per-room tallies.
//!
//! The four symbols are opaque single-character tokens to the parser; their
//! meaning (wooden chair, plastic chair, sofa, chair) belongs to the
//! delivery application.

use std::fmt;

/// One of the four furniture symbols tracked by the counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Furniture {
    /// `W` - wooden chair
    WoodenChair,
    /// `P` - plastic chair
    PlasticChair,
    /// `S` - sofa
    Sofa,
    /// `C` - chair
    Chair,
}

impl Furniture {
    /// All furniture kinds, in the fixed output order (W, P, S, C).
    pub const ALL: [Furniture; 4] = [
        Furniture::WoodenChair,
        Furniture::PlasticChair,
        Furniture::Sofa,
        Furniture::Chair,
    ];

    /// Map a grid character to its furniture kind, if any.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(Furniture::WoodenChair),
            'P' => Some(Furniture::PlasticChair),
            'S' => Some(Furniture::Sofa),
            'C' => Some(Furniture::Chair),
            _ => None,
        }
    }

    /// The character this kind appears as in a floor plan.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Furniture::WoodenChair => 'W',
            Furniture::PlasticChair => 'P',
            Furniture::Sofa => 'S',
            Furniture::Chair => 'C',
        }
    }
}

/// Tally of the four furniture symbols for one room (or the grand total).
///
/// All four kinds are always present; furniture that never appears simply
/// counts as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FurnitureCounts {
    counts: [u32; 4],
}

impl FurnitureCounts {
    /// Create a tally with all four counts at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for one furniture kind.
    #[inline]
    pub fn record(&mut self, kind: Furniture) {
        self.counts[kind as usize] += 1;
    }

    /// Current count for one furniture kind.
    #[inline]
    pub fn get(&self, kind: Furniture) -> u32 {
        self.counts[kind as usize]
    }

    /// Add another tally into this one (used for the `total` entry).
    pub fn add(&mut self, other: &FurnitureCounts) {
        for kind in Furniture::ALL {
            self.counts[kind as usize] += other.counts[kind as usize];
        }
    }

    /// Iterate the counts in the fixed output order.
    pub fn iter(&self) -> impl Iterator<Item = (Furniture, u32)> + '_ {
        Furniture::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }
}

/// Renders the counts line of the report: `W: 1, P: 2, S: 0, C: 0`.
impl fmt::Display for FurnitureCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (kind, count) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", kind.symbol(), count)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FurnitureCounts {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(4))?;
        for (kind, count) in self.iter() {
            map.serialize_entry(&kind.symbol(), &count)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char() {
        assert_eq!(Furniture::from_char('W'), Some(Furniture::WoodenChair));
        assert_eq!(Furniture::from_char('P'), Some(Furniture::PlasticChair));
        assert_eq!(Furniture::from_char('S'), Some(Furniture::Sofa));
        assert_eq!(Furniture::from_char('C'), Some(Furniture::Chair));
        assert_eq!(Furniture::from_char('w'), None);
        assert_eq!(Furniture::from_char('|'), None);
    }

    #[test]
    fn test_counts_start_at_zero() {
        let counts = FurnitureCounts::new();
        for kind in Furniture::ALL {
            assert_eq!(counts.get(kind), 0);
        }
    }

    #[test]
    fn test_record_and_get() {
        let mut counts = FurnitureCounts::new();
        counts.record(Furniture::WoodenChair);
        counts.record(Furniture::WoodenChair);
        counts.record(Furniture::Sofa);

        assert_eq!(counts.get(Furniture::WoodenChair), 2);
        assert_eq!(counts.get(Furniture::PlasticChair), 0);
        assert_eq!(counts.get(Furniture::Sofa), 1);
        assert_eq!(counts.get(Furniture::Chair), 0);
    }

    #[test]
    fn test_add() {
        let mut a = FurnitureCounts::new();
        a.record(Furniture::WoodenChair);
        let mut b = FurnitureCounts::new();
        b.record(Furniture::WoodenChair);
        b.record(Furniture::Chair);

        a.add(&b);
        assert_eq!(a.get(Furniture::WoodenChair), 2);
        assert_eq!(a.get(Furniture::Chair), 1);
    }

    #[test]
    fn test_display_fixed_order() {
        let mut counts = FurnitureCounts::new();
        counts.record(Furniture::PlasticChair);
        counts.record(Furniture::PlasticChair);
        counts.record(Furniture::Chair);

        assert_eq!(counts.to_string(), "W: 0, P: 2, S: 0, C: 1");
    }
}
