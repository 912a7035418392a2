//! Dense 3D occupancy map of the cargo space.
//!
//! Cells are stored in a single bit vector, z-major within each (x, y)
//! column: `index = (x * height + y) * length + z`. A crate therefore covers
//! one contiguous run of bits per (x, y) column, which keeps both the fit
//! test and the commit to slice operations.

use bitvec::order::Lsb0;
use bitvec::slice::BitSlice;
use bitvec::vec::BitVec;
use truck_loader_core::{Cuboid, Error, Extents, Result};

/// Largest cargo space, in cells, a grid will allocate (2 GiB of bits).
pub const MAX_CELLS: u64 = 1 << 34;

/// A 3D boolean map marking which cells of the cargo space are filled.
#[derive(Debug, Clone)]
pub struct OccupancyGrid {
    extents: Extents,
    cells: BitVec,
}

impl OccupancyGrid {
    /// Creates an empty grid covering the given extents.
    ///
    /// Fails with [`Error::InvalidTruck`] if the space exceeds [`MAX_CELLS`]
    /// or cannot be addressed on this platform.
    pub fn new(extents: Extents) -> Result<Self> {
        let too_large = || {
            Error::InvalidTruck(format!(
                "Cargo space of {}x{}x{} cells is too large to map (limit {} cells)",
                extents.width, extents.height, extents.length, MAX_CELLS
            ))
        };

        let volume = extents
            .checked_volume()
            .filter(|v| *v <= MAX_CELLS)
            .ok_or_else(too_large)?;
        let total = usize::try_from(volume)
            .ok()
            .filter(|n| *n <= BitSlice::<usize, Lsb0>::MAX_BITS)
            .ok_or_else(too_large)?;

        Ok(Self {
            extents,
            cells: BitVec::repeat(false, total),
        })
    }

    /// Returns the grid extents.
    pub fn extents(&self) -> Extents {
        self.extents
    }

    /// Returns the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns the number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.count_ones()
    }

    #[inline]
    fn index(&self, x: u32, y: u32, z: u32) -> usize {
        let height = self.extents.height as usize;
        let length = self.extents.length as usize;
        (x as usize * height + y as usize) * length + z as usize
    }

    /// Returns true if the cell is occupied. Cells outside the grid read as occupied.
    pub fn is_occupied(&self, x: u32, y: u32, z: u32) -> bool {
        if x >= self.extents.width || y >= self.extents.height || z >= self.extents.length {
            return true;
        }
        self.cells[self.index(x, y, z)]
    }

    /// Checks whether every cell of the cuboid is inside the grid and free.
    pub fn fits(&self, cuboid: &Cuboid) -> bool {
        if !cuboid.fits_within(&self.extents) {
            return false;
        }

        let run = cuboid.extents.length as usize;
        for x in cuboid.x..cuboid.x + cuboid.extents.width {
            for y in cuboid.y..cuboid.y + cuboid.extents.height {
                let start = self.index(x, y, cuboid.z);
                if self.cells[start..start + run].any() {
                    return false;
                }
            }
        }
        true
    }

    /// Marks every cell of the cuboid as occupied.
    ///
    /// The cuboid must have passed [`OccupancyGrid::fits`]; there is no undo.
    pub fn occupy(&mut self, cuboid: &Cuboid) {
        debug_assert!(self.fits(cuboid), "occupying a cuboid that does not fit");

        let run = cuboid.extents.length as usize;
        for x in cuboid.x..cuboid.x + cuboid.extents.width {
            for y in cuboid.y..cuboid.y + cuboid.extents.height {
                let start = self.index(x, y, cuboid.z);
                self.cells[start..start + run].fill(true);
            }
        }
    }
}
