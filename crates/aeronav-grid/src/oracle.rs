//! The pluggable occupancy predicate consulted during diagonal resolution.

use aeronav_core::CellCoord;
use nalgebra::Point3;

use crate::grid::VoxelGrid;

/// Decides whether a cell may currently be occupied or traversed.
///
/// The grid never caches an oracle's answer: diagonal neighbours are
/// recomputed on every query, so implementations should be cheap
/// (O(1) amortised). Implementations are treated as total and
/// side-effect free; a backend that can fail must decide on its own
/// fallback answer.
///
/// Closures `Fn(CellCoord) -> bool` implement this trait, which is the
/// easiest way to inject a deterministic fixture:
///
/// ```
/// use aeronav_grid::{CellCoord, GridConfig, NavGrid};
///
/// let blocked = CellCoord::new(3, 2, 2);
/// let oracle = move |c: CellCoord| c != blocked;
/// let mut nav = NavGrid::new(GridConfig::new(5, 5, 5, 1.0), oracle).unwrap();
/// let n = nav.resolve_neighbours(CellCoord::new(2, 2, 2));
/// assert!(!n.contains(&CellCoord::new(3, 2, 3)));
/// assert!(n.contains(&CellCoord::new(2, 3, 3)));
/// ```
pub trait NavigabilityOracle {
    /// `true` iff the cell at `coord` of `grid` is currently navigable.
    ///
    /// Only called with valid coordinates of `grid` by this crate.
    fn is_navigable(&self, grid: &VoxelGrid, coord: CellCoord) -> bool;

    /// Navigability of the cell containing a world-space point.
    ///
    /// Points inside an allocated cell defer to [`is_navigable`](Self::is_navigable).
    /// Points outside every cell are navigable only when the grid is unbounded.
    fn is_location_navigable(&self, grid: &VoxelGrid, location: Point3<f64>) -> bool {
        let coord = grid.world_to_index(location);
        if grid.is_valid_index(coord) {
            self.is_navigable(grid, coord)
        } else {
            grid.is_unbounded()
        }
    }
}

/// Every cell is navigable. The default oracle until an occupancy
/// backend is wired in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AlwaysNavigable;

impl NavigabilityOracle for AlwaysNavigable {
    fn is_navigable(&self, _grid: &VoxelGrid, _coord: CellCoord) -> bool {
        true
    }
}

/// Reads the occupant counters stored on the grid's cells
/// (see [`VoxelGrid::set_navigability`]).
///
/// Out-of-range coordinates are not navigable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OccupancyOracle;

impl NavigabilityOracle for OccupancyOracle {
    fn is_navigable(&self, grid: &VoxelGrid, coord: CellCoord) -> bool {
        grid.cell_at(coord).is_some_and(|cell| cell.is_navigable())
    }
}

impl<F> NavigabilityOracle for F
where
    F: Fn(CellCoord) -> bool,
{
    fn is_navigable(&self, _grid: &VoxelGrid, coord: CellCoord) -> bool {
        self(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aeronav_core::GridConfig;

    fn grid(unbounded: bool) -> VoxelGrid {
        VoxelGrid::build(GridConfig::new(3, 3, 3, 1.0).with_unbounded(unbounded)).unwrap()
    }

    #[test]
    fn always_navigable_is_true_everywhere() {
        let g = grid(false);
        assert!(AlwaysNavigable.is_navigable(&g, CellCoord::new(1, 1, 1)));
        assert!(AlwaysNavigable.is_location_navigable(&g, Point3::new(0.5, 0.5, 0.5)));
    }

    #[test]
    fn occupancy_oracle_follows_counters() {
        let mut g = grid(false);
        let c = CellCoord::new(2, 0, 1);
        assert!(OccupancyOracle.is_navigable(&g, c));
        g.set_navigability(c, false).unwrap();
        assert!(!OccupancyOracle.is_navigable(&g, c));
        assert!(!OccupancyOracle.is_location_navigable(&g, Point3::new(2.5, 0.1, 1.9)));
        g.set_navigability(c, true).unwrap();
        assert!(OccupancyOracle.is_navigable(&g, c));
    }

    #[test]
    fn occupancy_oracle_rejects_out_of_range() {
        let g = grid(false);
        assert!(!OccupancyOracle.is_navigable(&g, CellCoord::new(3, 0, 0)));
    }

    #[test]
    fn location_outside_grid_depends_on_unbounded() {
        let outside = Point3::new(-4.0, 10.0, 0.5);
        assert!(!AlwaysNavigable.is_location_navigable(&grid(false), outside));
        assert!(AlwaysNavigable.is_location_navigable(&grid(true), outside));
    }

    #[test]
    fn nan_location_is_not_navigable_in_a_bounded_grid() {
        let nan = Point3::new(f64::NAN, f64::NAN, f64::NAN);
        assert!(!AlwaysNavigable.is_location_navigable(&grid(false), nan));
        assert!(!OccupancyOracle.is_location_navigable(&grid(false), nan));
    }

    #[test]
    fn closures_are_oracles() {
        let g = grid(false);
        let only_origin = |c: CellCoord| c == CellCoord::new(0, 0, 0);
        assert!(only_origin.is_navigable(&g, CellCoord::new(0, 0, 0)));
        assert!(!only_origin.is_navigable(&g, CellCoord::new(0, 0, 1)));
    }
}
