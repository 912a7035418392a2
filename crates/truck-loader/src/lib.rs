//! # Truck Loader
//!
//! Step-by-step loading plans for rectangular crates in a truck.
//!
//! This crate provides:
//! - **Planning**: largest-first, first-fit placement over a 3D occupancy grid
//! - **Instructions**: one loading step per crate, with its corner position
//!   and the turn needed to fit it
//!
//! ## Quick Start
//!
//! ```rust
//! use truck_loader::{Crate, LoadingPlanner, Solver, Truck};
//!
//! let truck = Truck::new(10, 10, 10);
//! let crates = vec![Crate::new(1, 5, 5, 5), Crate::new(2, 2, 2, 2)];
//!
//! let plan = LoadingPlanner::default_config().solve(&truck, &crates)?;
//! for step in plan.steps() {
//!     println!("{}: crate {} at ({}, {})", step.loading_step_number, step.crate_id, step.top_left_x, step.top_left_y);
//! }
//! # Ok::<(), truck_loader::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support

/// Core types and abstractions.
pub use truck_loader_core as core;

/// Placement algorithm.
pub use truck_loader_planner as planner;

// Re-export commonly used types at root level
pub use truck_loader_core::{
    Config, Crate, CrateId, Error, Extents, LoadingInstruction, LoadingPlan, Orientation,
    PlanSummary, ProgressCallback, ProgressInfo, Result, Solver, Truck,
};
pub use truck_loader_planner::{check_capacity, LoadingPlanner, VolumeCheck};
