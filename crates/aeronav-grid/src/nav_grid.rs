//! The combined neighbour resolver: a grid, its direct-neighbour cache and
//! the oracle that gates diagonal steps.

use aeronav_core::{CellCoord, GridConfig, GridError};
use nalgebra::Point3;
use smallvec::SmallVec;

use crate::cache::{DirectNeighbours, NeighbourCache};
use crate::diagonal::diagonal_neighbours;
use crate::grid::VoxelGrid;
use crate::oracle::{AlwaysNavigable, NavigabilityOracle};

/// Direct neighbours followed by diagonal neighbours. Never exceeds 18.
pub type NeighbourList = SmallVec<[CellCoord; 18]>;

/// A [`VoxelGrid`] paired with its [`NeighbourCache`] and a
/// [`NavigabilityOracle`].
///
/// Every operation that can populate the cache takes `&mut self`, so a
/// single writer is enforced by the borrow checker. Diagonal queries only
/// read the grid and the oracle and take `&self`.
///
/// # Examples
///
/// ```
/// use aeronav_grid::{AlwaysNavigable, CellCoord, GridConfig, NavGrid};
///
/// let mut nav = NavGrid::new(GridConfig::new(5, 5, 5, 1.0), AlwaysNavigable).unwrap();
/// let n = nav.resolve_neighbours(CellCoord::new(2, 2, 2));
/// assert_eq!(n.len(), 18);
/// assert_eq!(n[0], CellCoord::new(2, 3, 2));
/// ```
#[derive(Debug)]
pub struct NavGrid<O = AlwaysNavigable> {
    grid: VoxelGrid,
    cache: NeighbourCache,
    oracle: O,
}

impl<O: NavigabilityOracle> NavGrid<O> {
    /// Build a grid from `config` and wrap it with an empty cache.
    pub fn new(config: GridConfig, oracle: O) -> Result<Self, GridError> {
        let grid = VoxelGrid::build(config)?;
        Ok(Self::with_grid(grid, oracle))
    }

    /// Wrap an already built grid.
    pub fn with_grid(grid: VoxelGrid, oracle: O) -> Self {
        let cache = NeighbourCache::new(&grid);
        Self {
            grid,
            cache,
            oracle,
        }
    }

    /// The underlying grid.
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// The navigability oracle.
    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    /// Mutable access to the oracle, e.g. to update a fixture's blocked set.
    pub fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    /// The direct-neighbour cache, read-only.
    pub fn cache(&self) -> &NeighbourCache {
        &self.cache
    }

    /// Split into the grid and the oracle, dropping the cache.
    pub fn into_parts(self) -> (VoxelGrid, O) {
        (self.grid, self.oracle)
    }

    /// Record an occupant entering or leaving a cell.
    ///
    /// See [`VoxelGrid::set_navigability`]. The cache is left untouched.
    pub fn set_navigability(&mut self, coord: CellCoord, navigable: bool) -> Result<(), GridError> {
        self.grid.set_navigability(coord, navigable)
    }

    /// Direct (6-DOF) neighbours of `coord`, served from the cache.
    pub fn direct_neighbours_of(&mut self, coord: CellCoord) -> DirectNeighbours {
        self.cache.direct_neighbours_of(&self.grid, coord)
    }

    /// Diagonal (12-DOF) neighbours of `coord`, recomputed from the oracle.
    pub fn diagonal_neighbours_of(&self, coord: CellCoord) -> SmallVec<[CellCoord; 12]> {
        diagonal_neighbours(&self.grid, &self.oracle, coord)
    }

    /// All neighbours of `coord`: direct ones in offset-table order, then
    /// diagonal ones in step-table order.
    ///
    /// The direct part is identical on every call; the diagonal part
    /// reflects the oracle's answers at call time. An out-of-range `coord`
    /// yields an empty list.
    pub fn resolve_neighbours(&mut self, coord: CellCoord) -> NeighbourList {
        let mut out: NeighbourList = self.direct_neighbours_of(coord).into_iter().collect();
        out.extend(self.diagonal_neighbours_of(coord));
        out
    }

    /// Discover direct neighbours for every cell up front.
    pub fn warm_cache(&mut self) {
        self.cache.warm(&self.grid);
    }

    /// Whether the oracle considers `coord` navigable. Out-of-range
    /// coordinates are never navigable.
    pub fn is_navigable(&self, coord: CellCoord) -> bool {
        self.grid.is_valid_index(coord) && self.oracle.is_navigable(&self.grid, coord)
    }

    /// Whether the oracle considers the cell containing `location` navigable.
    pub fn is_location_navigable(&self, location: Point3<f64>) -> bool {
        self.oracle.is_location_navigable(&self.grid, location)
    }

    // ── Query passthroughs ──────────────────────────────────────

    /// See [`VoxelGrid::is_valid_index`].
    pub fn is_valid_index(&self, coord: CellCoord) -> bool {
        self.grid.is_valid_index(coord)
    }

    /// See [`VoxelGrid::world_to_index`].
    pub fn world_to_index(&self, location: Point3<f64>) -> CellCoord {
        self.grid.world_to_index(location)
    }

    /// See [`VoxelGrid::index_to_world_center`].
    pub fn index_to_world_center(&self, coord: CellCoord) -> Point3<f64> {
        self.grid.index_to_world_center(coord)
    }

    /// See [`VoxelGrid::clamp_to_bounds`].
    pub fn clamp_to_bounds(&self, location: Point3<f64>) -> Point3<f64> {
        self.grid.clamp_to_bounds(location)
    }

    /// See [`VoxelGrid::contains_world_point`].
    pub fn contains_world_point(&self, location: Point3<f64>) -> bool {
        self.grid.contains_world_point(location)
    }
}
