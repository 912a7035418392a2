//! Axis-aligned boxes in grid cell coordinates.

use crate::geometry::Extents;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned box anchored at its minimum corner.
///
/// Covers the half-open cell ranges `[x, x + width)`, `[y, y + height)` and
/// `[z, z + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cuboid {
    /// Minimum x cell.
    pub x: u32,
    /// Minimum y cell.
    pub y: u32,
    /// Minimum z cell.
    pub z: u32,
    /// Size of the box.
    pub extents: Extents,
}

impl Cuboid {
    /// Creates a new cuboid.
    pub const fn new(x: u32, y: u32, z: u32, extents: Extents) -> Self {
        Self { x, y, z, extents }
    }

    /// Exclusive upper x bound.
    pub fn max_x(&self) -> u64 {
        u64::from(self.x) + u64::from(self.extents.width)
    }

    /// Exclusive upper y bound.
    pub fn max_y(&self) -> u64 {
        u64::from(self.y) + u64::from(self.extents.height)
    }

    /// Exclusive upper z bound.
    pub fn max_z(&self) -> u64 {
        u64::from(self.z) + u64::from(self.extents.length)
    }

    /// Returns the volume in cells.
    pub fn volume(&self) -> u64 {
        self.extents.volume()
    }

    /// Checks if this cuboid lies entirely inside a space of the given extents.
    pub fn fits_within(&self, bounds: &Extents) -> bool {
        self.max_x() <= u64::from(bounds.width)
            && self.max_y() <= u64::from(bounds.height)
            && self.max_z() <= u64::from(bounds.length)
    }

    /// Checks if this cuboid shares at least one cell with another.
    ///
    /// Touching faces do not count as an intersection.
    pub fn intersects(&self, other: &Self) -> bool {
        u64::from(self.x) < other.max_x()
            && self.max_x() > u64::from(other.x)
            && u64::from(self.y) < other.max_y()
            && self.max_y() > u64::from(other.y)
            && u64::from(self.z) < other.max_z()
            && self.max_z() > u64::from(other.z)
    }

    /// Checks if this cuboid covers the given cell.
    pub fn contains_cell(&self, x: u32, y: u32, z: u32) -> bool {
        x >= self.x
            && u64::from(x) < self.max_x()
            && y >= self.y
            && u64::from(y) < self.max_y()
            && z >= self.z
            && u64::from(z) < self.max_z()
    }
}
