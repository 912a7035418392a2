//! # Truck Loader Core
//!
//! Core types and abstractions for the truck loading planner.
//!
//! This crate provides the value types shared between the planner and its
//! callers.
//!
//! ## Core Components
//!
//! - **Geometry**: `Truck`, `Crate`, `Extents`, `Orientation`
//! - **Cuboid**: axis-aligned boxes in grid cell coordinates
//! - **Placement**: `LoadingInstruction` and committed `PlacedCrate` records
//! - **Result**: `LoadingPlan`, the all-or-nothing planning result
//! - **Solver trait**: common interface for planners, with `Config`
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod cuboid;
pub mod error;
pub mod geometry;
pub mod placement;
pub mod result;
pub mod solver;

// Re-exports
pub use cuboid::Cuboid;
pub use error::{Error, Result};
pub use geometry::{Crate, CrateId, Extents, Orientation, Truck};
pub use placement::{LoadingInstruction, PlacedCrate, PlacementStats};
pub use result::{LoadingPlan, PlanSummary};
pub use solver::{Config, ProgressCallback, ProgressInfo, Solver};
