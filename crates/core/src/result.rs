//! Loading plan representation.

use crate::geometry::CrateId;
use crate::placement::{LoadingInstruction, PlacedCrate, PlacementStats};
use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complete loading plan: one instruction per requested crate.
///
/// Plans are only ever produced whole. A planning run that cannot place every
/// crate returns an error instead.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoadingPlan {
    /// Instructions keyed by crate ID.
    pub instructions: BTreeMap<CrateId, LoadingInstruction>,

    /// Committed placements in loading order.
    pub placements: Vec<PlacedCrate>,

    /// Volume of the cargo space.
    pub truck_volume: u64,

    /// Total volume of all loaded crates.
    pub crate_volume: u64,

    /// Utilization ratio (0.0 - 1.0).
    /// Calculated as: crate_volume / truck_volume
    pub utilization: f64,

    /// Computation time in milliseconds.
    pub computation_time_ms: u64,
}

impl LoadingPlan {
    /// Creates an empty plan for a cargo space of the given volume.
    pub fn new(truck_volume: u64) -> Self {
        Self {
            instructions: BTreeMap::new(),
            placements: Vec::new(),
            truck_volume,
            crate_volume: 0,
            utilization: 0.0,
            computation_time_ms: 0,
        }
    }

    /// Records a committed placement and its instruction.
    pub fn push(&mut self, placed: PlacedCrate) {
        self.instructions.insert(placed.crate_id, placed.instruction());
        self.crate_volume += placed.cuboid.volume();
        if self.truck_volume > 0 {
            self.utilization = self.crate_volume as f64 / self.truck_volume as f64;
        }
        self.placements.push(placed);
    }

    /// Returns the instruction for a crate.
    pub fn get(&self, crate_id: CrateId) -> Option<&LoadingInstruction> {
        self.instructions.get(&crate_id)
    }

    /// Returns the number of instructions.
    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    /// Returns true if the plan has no instructions.
    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }

    /// Returns the instructions in loading order.
    pub fn steps(&self) -> impl Iterator<Item = LoadingInstruction> + '_ {
        self.placements.iter().map(PlacedCrate::instruction)
    }

    /// Consumes the plan, returning the instruction mapping.
    pub fn into_instructions(self) -> BTreeMap<CrateId, LoadingInstruction> {
        self.instructions
    }

    /// Computes orientation statistics.
    pub fn placement_stats(&self) -> PlacementStats {
        PlacementStats::from_placements(&self.placements)
    }

    /// Returns utilization as a percentage string.
    pub fn utilization_percent(&self) -> String {
        format!("{:.1}%", self.utilization * 100.0)
    }
}

/// Summary statistics for a loading plan.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    /// Number of crates loaded.
    pub crates_loaded: usize,
    /// Utilization percentage.
    pub utilization_percent: f64,
    /// Number of crates turned horizontally or vertically.
    pub turned_count: usize,
    /// Computation time in milliseconds.
    pub time_ms: u64,
}

impl From<&LoadingPlan> for PlanSummary {
    fn from(plan: &LoadingPlan) -> Self {
        let stats = plan.placement_stats();
        Self {
            crates_loaded: plan.len(),
            utilization_percent: plan.utilization * 100.0,
            turned_count: stats.horizontal_count + stats.vertical_count,
            time_ms: plan.computation_time_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cuboid::Cuboid;
    use crate::geometry::{Extents, Orientation};
    use approx::assert_relative_eq;

    fn sample_plan() -> LoadingPlan {
        let mut plan = LoadingPlan::new(64);
        plan.push(PlacedCrate::new(
            1,
            1,
            Orientation::Original,
            Cuboid::new(0, 0, 0, Extents::new(2, 2, 2)),
        ));
        plan.push(PlacedCrate::new(
            2,
            2,
            Orientation::TurnHorizontal,
            Cuboid::new(0, 0, 2, Extents::new(2, 2, 2)),
        ));
        plan
    }

    #[test]
    fn test_plan_new() {
        let plan = LoadingPlan::new(100);
        assert!(plan.is_empty());
        assert_eq!(plan.utilization, 0.0);
    }

    #[test]
    fn test_plan_push_tracks_volume() {
        let plan = sample_plan();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.crate_volume, 16);
        assert_relative_eq!(plan.utilization, 0.25, epsilon = 1e-12);
        assert_eq!(plan.utilization_percent(), "25.0%");
    }

    #[test]
    fn test_steps_follow_loading_order() {
        let plan = sample_plan();
        let steps: Vec<u32> = plan.steps().map(|i| i.loading_step_number).collect();
        assert_eq!(steps, vec![1, 2]);
        assert!(plan.get(2).is_some_and(|i| i.turn_horizontal));
    }

    #[test]
    fn test_plan_summary() {
        let mut plan = sample_plan();
        plan.computation_time_ms = 7;
        let summary = PlanSummary::from(&plan);
        assert_eq!(summary.crates_loaded, 2);
        assert_eq!(summary.turned_count, 1);
        assert_eq!(summary.time_ms, 7);
        assert_relative_eq!(summary.utilization_percent, 25.0, epsilon = 1e-9);
    }
}
