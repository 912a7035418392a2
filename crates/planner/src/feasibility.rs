//! Request validation and the up-front capacity check.

use std::collections::HashSet;
use truck_loader_core::{Crate, Error, Result, Truck};

/// Truck and total crate volume of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolumeCheck {
    /// Sum of all crate volumes.
    pub crate_volume: u64,
    /// Volume of the cargo space.
    pub truck_volume: u64,
}

impl VolumeCheck {
    /// Measures both volumes of a request.
    ///
    /// Fails if the truck or any crate has a volume outside the `u64` range.
    /// The crate total saturates, which still exceeds any truck volume.
    pub fn measure(truck: &Truck, crates: &[Crate]) -> Result<Self> {
        let truck_volume = truck.extents().checked_volume().ok_or_else(|| {
            Error::InvalidTruck(format!(
                "Cargo volume of {}x{}x{} cells is out of range",
                truck.width(),
                truck.height(),
                truck.length()
            ))
        })?;

        let mut crate_volume = 0u64;
        for c in crates {
            let volume = c.extents().checked_volume().ok_or_else(|| {
                Error::InvalidCrate(format!("Volume of crate {} is out of range", c.id()))
            })?;
            crate_volume = crate_volume.saturating_add(volume);
        }

        Ok(Self {
            crate_volume,
            truck_volume,
        })
    }

    /// Returns true if the crates do not exceed the truck's volume.
    pub fn has_capacity(&self) -> bool {
        self.crate_volume <= self.truck_volume
    }

    /// Returns the cargo volume left over after loading every crate.
    pub fn spare_volume(&self) -> Option<u64> {
        self.truck_volume.checked_sub(self.crate_volume)
    }
}

/// Validates the truck, each crate, and crate ID uniqueness.
pub fn validate_request(truck: &Truck, crates: &[Crate]) -> Result<()> {
    truck.validate()?;

    let mut seen = HashSet::with_capacity(crates.len());
    for c in crates {
        c.validate()?;
        if !seen.insert(c.id()) {
            return Err(Error::DuplicateCrateId(c.id()));
        }
    }
    Ok(())
}

/// Fails with [`Error::CapacityExceeded`] if the crates cannot fit by volume.
///
/// Passing does not guarantee a packing exists.
pub fn check_capacity(truck: &Truck, crates: &[Crate]) -> Result<VolumeCheck> {
    let check = VolumeCheck::measure(truck, crates)?;
    if !check.has_capacity() {
        return Err(Error::CapacityExceeded {
            crate_volume: check.crate_volume,
            truck_volume: check.truck_volume,
        });
    }
    Ok(check)
}
