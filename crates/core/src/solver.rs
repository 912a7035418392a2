//! Solver traits and configuration.

use crate::geometry::{Crate, CrateId, Truck};
use crate::result::LoadingPlan;
use crate::Result;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Common configuration for planners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Maximum computation time in milliseconds (0 = unlimited).
    ///
    /// Checked between crate placements, never inside a position scan.
    pub time_limit_ms: u64,

    /// Scan x-slabs of the cargo space in parallel.
    ///
    /// The chosen position is the same as with a sequential scan.
    pub parallel_scan: bool,
}

impl Config {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the time limit in milliseconds.
    pub fn with_time_limit(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Enables or disables the parallel position scan.
    pub fn with_parallel_scan(mut self, enabled: bool) -> Self {
        self.parallel_scan = enabled;
        self
    }
}

/// Progress callback for long-running operations.
pub type ProgressCallback = Box<dyn Fn(ProgressInfo) + Send + Sync>;

/// Progress information, reported after each committed crate.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressInfo {
    /// Loading step just committed, counted like `total`.
    pub step: usize,
    /// Total number of crates in the request.
    pub total: usize,
    /// Crate committed at this step.
    pub crate_id: CrateId,
    /// Elapsed time in milliseconds.
    pub elapsed_ms: u64,
    /// Utilization reached so far.
    pub utilization: f64,
}

/// Trait for loading planners.
pub trait Solver {
    /// Computes a loading plan for the crates.
    fn solve(&self, truck: &Truck, crates: &[Crate]) -> Result<LoadingPlan>;

    /// Computes a loading plan, reporting progress after every committed crate.
    fn solve_with_progress(
        &self,
        truck: &Truck,
        crates: &[Crate],
        callback: ProgressCallback,
    ) -> Result<LoadingPlan>;

    /// Cancels an ongoing solve operation.
    fn cancel(&self);
}
