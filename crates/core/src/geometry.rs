//! Truck and crate value types.

use crate::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a crate within a planning run.
pub type CrateId = u32;

/// Axis-aligned extents in grid cells (width along X, height along Y, length along Z).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Extents {
    /// Extent along the X axis.
    pub width: u32,
    /// Extent along the Y axis.
    pub height: u32,
    /// Extent along the Z axis.
    pub length: u32,
}

impl Extents {
    /// Creates new extents.
    pub const fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            width,
            height,
            length,
        }
    }

    /// Returns the volume in cells, or `None` if it does not fit in a `u64`.
    pub fn checked_volume(&self) -> Option<u64> {
        u64::from(self.width)
            .checked_mul(u64::from(self.height))?
            .checked_mul(u64::from(self.length))
    }

    /// Returns the volume in cells, saturating at `u64::MAX`.
    ///
    /// Validated trucks and crates never saturate.
    pub fn volume(&self) -> u64 {
        self.checked_volume().unwrap_or(u64::MAX)
    }

    /// Returns true if any extent is zero.
    pub fn is_degenerate(&self) -> bool {
        self.width == 0 || self.height == 0 || self.length == 0
    }

    /// Returns true if these extents fit inside `outer` without rotation.
    pub fn fits_within(&self, outer: &Extents) -> bool {
        self.width <= outer.width && self.height <= outer.height && self.length <= outer.length
    }
}

/// Orientation of a crate relative to its declared extents.
///
/// Only three of the six axis permutations are supported. They are tried in
/// the order of [`Orientation::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Declared (width, height, length).
    #[default]
    Original,
    /// Width and length swapped, height fixed.
    TurnHorizontal,
    /// Height and length swapped, width fixed.
    TurnVertical,
}

impl Orientation {
    /// All supported orientations, in search order.
    pub const ALL: [Orientation; 3] = [
        Orientation::Original,
        Orientation::TurnHorizontal,
        Orientation::TurnVertical,
    ];

    /// Returns the extents a crate occupies when placed in this orientation.
    pub fn apply(self, extents: Extents) -> Extents {
        let Extents {
            width,
            height,
            length,
        } = extents;
        match self {
            Orientation::Original => Extents::new(width, height, length),
            Orientation::TurnHorizontal => Extents::new(length, height, width),
            Orientation::TurnVertical => Extents::new(width, length, height),
        }
    }

    /// Returns true for the horizontal turn.
    pub fn turn_horizontal(self) -> bool {
        self == Orientation::TurnHorizontal
    }

    /// Returns true for the vertical turn.
    pub fn turn_vertical(self) -> bool {
        self == Orientation::TurnVertical
    }
}

/// The loadable interior of a truck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Truck {
    extents: Extents,
}

impl Truck {
    /// Creates a truck with the given cargo extents.
    pub fn new(width: u32, height: u32, length: u32) -> Self {
        Self {
            extents: Extents::new(width, height, length),
        }
    }

    /// Returns the cargo extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Returns the width.
    pub fn width(&self) -> u32 {
        self.extents.width
    }

    /// Returns the height.
    pub fn height(&self) -> u32 {
        self.extents.height
    }

    /// Returns the length.
    pub fn length(&self) -> u32 {
        self.extents.length
    }

    /// Returns the cargo volume.
    pub fn volume(&self) -> u64 {
        self.extents.volume()
    }

    /// Validates the cargo dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.extents.is_degenerate() {
            return Err(Error::InvalidTruck(format!(
                "All dimensions must be positive, got {}x{}x{}",
                self.width(),
                self.height(),
                self.length()
            )));
        }
        if self.extents.checked_volume().is_none() {
            return Err(Error::InvalidTruck(format!(
                "Cargo volume of {}x{}x{} cells is out of range",
                self.width(),
                self.height(),
                self.length()
            )));
        }
        Ok(())
    }
}

/// A rectangular crate to be loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Crate {
    id: CrateId,
    extents: Extents,
}

impl Crate {
    /// Creates a crate with the given ID and declared extents.
    pub fn new(id: CrateId, width: u32, height: u32, length: u32) -> Self {
        Self {
            id,
            extents: Extents::new(width, height, length),
        }
    }

    /// Returns the crate ID.
    pub fn id(&self) -> CrateId {
        self.id
    }

    /// Returns the declared extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Returns the width.
    pub fn width(&self) -> u32 {
        self.extents.width
    }

    /// Returns the height.
    pub fn height(&self) -> u32 {
        self.extents.height
    }

    /// Returns the length.
    pub fn length(&self) -> u32 {
        self.extents.length
    }

    /// Returns the volume.
    pub fn volume(&self) -> u64 {
        self.extents.volume()
    }

    /// Returns the extents this crate occupies in the given orientation.
    pub fn oriented(&self, orientation: Orientation) -> Extents {
        orientation.apply(self.extents)
    }

    /// Validates the crate dimensions.
    pub fn validate(&self) -> Result<()> {
        if self.extents.is_degenerate() {
            return Err(Error::InvalidCrate(format!(
                "All dimensions for crate {} must be positive",
                self.id
            )));
        }
        if self.extents.checked_volume().is_none() {
            return Err(Error::InvalidCrate(format!(
                "Volume of crate {} is out of range",
                self.id
            )));
        }
        Ok(())
    }
}
