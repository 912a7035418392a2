//! # Truck Loader Planner
//!
//! Greedy 3D crate placement for the truck loading planner.
//!
//! This crate turns a truck and a list of crates into step-by-step loading
//! instructions. It uses a largest-first, first-fit search over a dense
//! occupancy grid.
//!
//! ## Features
//!
//! - Up-front volume feasibility check
//! - Stable largest-volume-first crate sequencing
//! - Three supported orientations per crate (original, horizontal, vertical turn)
//! - Exhaustive first-fit position scan, optionally parallel across x-slabs
//! - Cancellation, time limit and per-step progress reporting

pub mod feasibility;
pub mod grid;
pub mod planner;
pub mod search;
pub mod sequence;

// Re-exports
pub use feasibility::{check_capacity, validate_request, VolumeCheck};
pub use grid::{OccupancyGrid, MAX_CELLS};
pub use planner::LoadingPlanner;
pub use search::{find_first_fit, find_first_fit_parallel, find_fit, Fit};
pub use sequence::sequence_crates;
pub use truck_loader_core::{
    Config, Crate, Error, LoadingInstruction, LoadingPlan, Result, Solver, Truck,
};
