//! Error types for truck loading.

use crate::geometry::CrateId;
use thiserror::Error;

/// Result type alias for truck loading operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while planning a load.
///
/// Every variant is fatal to the planning run that produced it; no partial
/// plan accompanies an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Invalid truck provided.
    #[error("Invalid truck: {0}")]
    InvalidTruck(String),

    /// Invalid crate provided.
    #[error("Invalid crate: {0}")]
    InvalidCrate(String),

    /// The same crate identifier appears more than once in a request.
    #[error("Duplicate crate ID {0}")]
    DuplicateCrateId(CrateId),

    /// Total crate volume exceeds the truck's cargo volume.
    #[error("Cannot load crates: total volume {crate_volume} exceeds truck capacity {truck_volume}")]
    CapacityExceeded {
        /// Sum of all crate volumes.
        crate_volume: u64,
        /// Volume of the cargo space.
        truck_volume: u64,
    },

    /// No orientation of the crate fits anywhere in the remaining space.
    #[error("Unable to place crate with ID {0}")]
    UnplaceableCrate(CrateId),

    /// Computation cancelled.
    #[error("Computation cancelled")]
    Cancelled,

    /// Timeout exceeded.
    #[error("Timeout exceeded after {0}ms")]
    Timeout(u64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message_carries_both_volumes() {
        let err = Error::CapacityExceeded {
            crate_volume: 16,
            truck_volume: 8,
        };
        let msg = err.to_string();
        assert!(msg.contains("16"));
        assert!(msg.contains("8"));
    }

    #[test]
    fn test_unplaceable_message_carries_id() {
        assert_eq!(
            Error::UnplaceableCrate(42).to_string(),
            "Unable to place crate with ID 42"
        );
    }
}
