//! Orientation and position search.
//!
//! Positions are scanned in (x, y, z) order with x outermost and z innermost.
//! The first free slot wins; there is no scoring of alternatives.

use crate::grid::OccupancyGrid;
use rayon::prelude::*;
use truck_loader_core::{Crate, Cuboid, Extents, Orientation};

/// A successful search result for one crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fit {
    /// Orientation that produced the position.
    pub orientation: Orientation,
    /// Cells the crate will cover.
    pub cuboid: Cuboid,
}

/// Scans one x-slab of the grid for the first free slot.
fn scan_slab(grid: &OccupancyGrid, x: u32, extents: Extents) -> Option<Cuboid> {
    let bounds = grid.extents();
    for y in 0..=bounds.height - extents.height {
        for z in 0..=bounds.length - extents.length {
            let candidate = Cuboid::new(x, y, z, extents);
            if grid.fits(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Finds the first slot in scan order where a box of `extents` fits.
///
/// Returns `None` without scanning if the box exceeds the grid on any axis.
pub fn find_first_fit(grid: &OccupancyGrid, extents: Extents) -> Option<Cuboid> {
    let bounds = grid.extents();
    if !extents.fits_within(&bounds) {
        return None;
    }
    (0..=bounds.width - extents.width).find_map(|x| scan_slab(grid, x, extents))
}

/// Parallel variant of [`find_first_fit`].
///
/// Slabs are scanned concurrently, but the lowest-x hit is returned, so the
/// result is identical to the sequential scan.
pub fn find_first_fit_parallel(grid: &OccupancyGrid, extents: Extents) -> Option<Cuboid> {
    let bounds = grid.extents();
    if !extents.fits_within(&bounds) {
        return None;
    }
    (0..=bounds.width - extents.width)
        .into_par_iter()
        .find_map_first(|x| scan_slab(grid, x, extents))
}

/// Tries each supported orientation of a crate in order.
///
/// The first orientation with a free slot wins. An orientation whose extents
/// repeat an earlier one is skipped, since it would fail the same way.
pub fn find_fit(grid: &OccupancyGrid, item: &Crate, parallel: bool) -> Option<Fit> {
    let mut tried: Vec<Extents> = Vec::with_capacity(Orientation::ALL.len());

    for orientation in Orientation::ALL {
        let extents = item.oriented(orientation);
        if tried.contains(&extents) {
            continue;
        }
        tried.push(extents);

        let found = if parallel {
            find_first_fit_parallel(grid, extents)
        } else {
            find_first_fit(grid, extents)
        };

        if let Some(cuboid) = found {
            return Some(Fit {
                orientation,
                cuboid,
            });
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(w: u32, h: u32, l: u32) -> OccupancyGrid {
        OccupancyGrid::new(Extents::new(w, h, l)).unwrap()
    }

    #[test]
    fn test_empty_grid_fits_at_origin() {
        let g = grid(10, 10, 10);
        let c = find_first_fit(&g, Extents::new(5, 5, 5)).unwrap();
        assert_eq!((c.x, c.y, c.z), (0, 0, 0));
    }

    #[test]
    fn test_z_is_innermost() {
        let mut g = grid(4, 4, 4);
        g.occupy(&Cuboid::new(0, 0, 0, Extents::new(2, 2, 2)));
        let c = find_first_fit(&g, Extents::new(1, 1, 1)).unwrap();
        assert_eq!((c.x, c.y, c.z), (0, 0, 2));
    }

    #[test]
    fn test_y_before_x() {
        let mut g = grid(2, 2, 1);
        g.occupy(&Cuboid::new(0, 0, 0, Extents::new(1, 1, 1)));
        let c = find_first_fit(&g, Extents::new(1, 1, 1)).unwrap();
        assert_eq!((c.x, c.y, c.z), (0, 1, 0));
    }

    #[test]
    fn test_oversized_box_does_not_fit() {
        let g = grid(2, 2, 2);
        assert!(find_first_fit(&g, Extents::new(3, 1, 1)).is_none());
        assert!(find_first_fit_parallel(&g, Extents::new(1, 1, 3)).is_none());
    }

    #[test]
    fn test_full_grid_has_no_fit() {
        let mut g = grid(2, 2, 2);
        g.occupy(&Cuboid::new(0, 0, 0, Extents::new(2, 2, 2)));
        assert!(find_first_fit(&g, Extents::new(1, 1, 1)).is_none());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let mut g = grid(6, 3, 4);
        g.occupy(&Cuboid::new(0, 0, 0, Extents::new(3, 3, 4)));
        g.occupy(&Cuboid::new(3, 0, 0, Extents::new(1, 2, 4)));
        for extents in [
            Extents::new(1, 1, 1),
            Extents::new(2, 3, 2),
            Extents::new(3, 1, 4),
            Extents::new(4, 1, 1),
        ] {
            assert_eq!(
                find_first_fit(&g, extents),
                find_first_fit_parallel(&g, extents),
                "extents {:?}",
                extents
            );
        }
    }

    #[test]
    fn test_original_orientation_preferred() {
        let g = grid(10, 10, 10);
        let fit = find_fit(&g, &Crate::new(1, 2, 3, 4), false).unwrap();
        assert_eq!(fit.orientation, Orientation::Original);
    }

    #[test]
    fn test_horizontal_turn_when_length_too_long() {
        // Declared length 2 exceeds the truck length 1; width and length swap.
        let g = grid(2, 1, 1);
        let fit = find_fit(&g, &Crate::new(1, 1, 1, 2), false).unwrap();
        assert_eq!(fit.orientation, Orientation::TurnHorizontal);
        assert_eq!(fit.cuboid.extents, Extents::new(2, 1, 1));
    }

    #[test]
    fn test_vertical_turn_when_only_height_fits() {
        let g = grid(1, 2, 1);
        let fit = find_fit(&g, &Crate::new(1, 1, 1, 2), false).unwrap();
        assert_eq!(fit.orientation, Orientation::TurnVertical);
        assert_eq!(fit.cuboid.extents, Extents::new(1, 2, 1));
    }

    #[test]
    fn test_unsupported_rotation_is_not_tried() {
        // Fitting needs (3, 1, 1), which none of the three orientations produce.
        let g = grid(3, 1, 1);
        assert!(find_fit(&g, &Crate::new(1, 1, 3, 1), false).is_none());
    }

    #[test]
    fn test_cube_reports_original() {
        let g = grid(3, 3, 3);
        let fit = find_fit(&g, &Crate::new(1, 3, 3, 3), false).unwrap();
        assert_eq!(fit.orientation, Orientation::Original);
    }
}
