//! Loading instructions and committed crate placements.

use crate::cuboid::Cuboid;
use crate::geometry::{CrateId, Orientation};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single step of a loading plan, as handed to the loader.
///
/// Only the X/Y corner is part of the instruction; depth follows from the
/// step order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LoadingInstruction {
    /// 1-based position of this crate in the loading sequence.
    pub loading_step_number: u32,

    /// The crate this instruction refers to.
    pub crate_id: CrateId,

    /// X coordinate of the crate's top-left corner.
    pub top_left_x: u32,

    /// Y coordinate of the crate's top-left corner.
    pub top_left_y: u32,

    /// Crate is turned so its width and length are swapped.
    pub turn_horizontal: bool,

    /// Crate is turned so its height and length are swapped.
    pub turn_vertical: bool,
}

impl LoadingInstruction {
    /// Creates an instruction for a crate placed in its declared orientation.
    pub fn new(loading_step_number: u32, crate_id: CrateId, top_left_x: u32, top_left_y: u32) -> Self {
        Self {
            loading_step_number,
            crate_id,
            top_left_x,
            top_left_y,
            turn_horizontal: false,
            turn_vertical: false,
        }
    }

    /// Sets the turn flags from the orientation the crate was placed in.
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.turn_horizontal = orientation.turn_horizontal();
        self.turn_vertical = orientation.turn_vertical();
        self
    }

    /// Returns the orientation described by the turn flags.
    pub fn orientation(&self) -> Orientation {
        match (self.turn_horizontal, self.turn_vertical) {
            (true, _) => Orientation::TurnHorizontal,
            (false, true) => Orientation::TurnVertical,
            (false, false) => Orientation::Original,
        }
    }
}

/// The geometric record of a committed crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedCrate {
    /// The placed crate.
    pub crate_id: CrateId,

    /// Loading step number of the commit.
    pub step: u32,

    /// Orientation the crate was placed in.
    pub orientation: Orientation,

    /// Cells covered by the crate, including its z offset.
    pub cuboid: Cuboid,
}

impl PlacedCrate {
    /// Creates a new placement record.
    pub fn new(crate_id: CrateId, step: u32, orientation: Orientation, cuboid: Cuboid) -> Self {
        Self {
            crate_id,
            step,
            orientation,
            cuboid,
        }
    }

    /// Builds the loader-facing instruction for this placement.
    pub fn instruction(&self) -> LoadingInstruction {
        LoadingInstruction::new(self.step, self.crate_id, self.cuboid.x, self.cuboid.y)
            .with_orientation(self.orientation)
    }
}

/// Orientation statistics for a set of placements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacementStats {
    /// Total number of placements.
    pub count: usize,
    /// Placements in the declared orientation.
    pub original_count: usize,
    /// Placements turned horizontally.
    pub horizontal_count: usize,
    /// Placements turned vertically.
    pub vertical_count: usize,
}

impl PlacementStats {
    /// Computes statistics from a set of placements.
    pub fn from_placements(placements: &[PlacedCrate]) -> Self {
        let mut stats = Self {
            count: placements.len(),
            ..Default::default()
        };

        for p in placements {
            match p.orientation {
                Orientation::Original => stats.original_count += 1,
                Orientation::TurnHorizontal => stats.horizontal_count += 1,
                Orientation::TurnVertical => stats.vertical_count += 1,
            }
        }

        stats
    }
}
