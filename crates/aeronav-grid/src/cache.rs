//! Lazily populated cache of direct (6-DOF) neighbour lists.
//!
//! Whether a direct neighbour *exists* depends only on grid geometry, which
//! never changes after construction, so an entry is written once, on the
//! first lookup for its coordinate, and never invalidated. Keys are cell
//! coordinates rather than storage addresses, so the cache stays correct
//! no matter where the grid's cells live.

use aeronav_core::{CellCoord, GridInstanceId};
use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::direction::DIRECT_OFFSETS;
use crate::grid::VoxelGrid;

/// Direct neighbours of one cell, in [`DIRECT_OFFSETS`] order.
pub type DirectNeighbours = SmallVec<[CellCoord; 6]>;

/// Write-once-per-key map from a cell to its direct neighbours.
///
/// A cache is bound to the grid it was created for; serving a different
/// grid is a logic error and trips a debug assertion.
#[derive(Debug)]
pub struct NeighbourCache {
    grid: GridInstanceId,
    entries: IndexMap<CellCoord, DirectNeighbours>,
    discoveries: u64,
}

impl NeighbourCache {
    /// An empty cache for `grid`.
    pub fn new(grid: &VoxelGrid) -> Self {
        Self {
            grid: grid.instance_id(),
            entries: IndexMap::new(),
            discoveries: 0,
        }
    }

    /// Direct neighbours of `coord`, discovering and caching them on first use.
    ///
    /// Returns a copy; the stored list is never handed out mutably.
    /// An out-of-range `coord` yields an empty list and is not cached.
    pub fn direct_neighbours_of(
        &mut self,
        grid: &VoxelGrid,
        coord: CellCoord,
    ) -> DirectNeighbours {
        debug_assert_eq!(
            self.grid,
            grid.instance_id(),
            "neighbour cache used with a grid it was not built for"
        );
        if let Some(cached) = self.entries.get(&coord) {
            return cached.clone();
        }
        if !grid.is_valid_index(coord) {
            return DirectNeighbours::new();
        }
        let found = self.discover(grid, coord);
        self.entries.insert(coord, found.clone());
        found
    }

    /// Compute the direct neighbours of a valid `coord` from grid geometry.
    ///
    /// Boundary cells check each candidate individually; interior cells
    /// take all six without checks.
    fn discover(&mut self, grid: &VoxelGrid, coord: CellCoord) -> DirectNeighbours {
        self.discoveries += 1;
        let found: DirectNeighbours = if grid.is_interior(coord) {
            DIRECT_OFFSETS.iter().map(|&o| coord.offset(o)).collect()
        } else {
            DIRECT_OFFSETS
                .iter()
                .map(|&o| coord.offset(o))
                .filter(|&n| grid.is_valid_index(n))
                .collect()
        };
        trace!(%coord, neighbours = found.len(), "discovered direct neighbours");
        found
    }

    /// Discover and cache direct neighbours for every cell of `grid`.
    ///
    /// Coordinates that are already cached are not rediscovered.
    pub fn warm(&mut self, grid: &VoxelGrid) {
        self.entries
            .reserve(grid.cell_count().saturating_sub(self.entries.len()));
        let before = self.discoveries;
        for coord in grid.coords() {
            self.direct_neighbours_of(grid, coord);
        }
        debug!(
            cached = self.entries.len(),
            discovered = self.discoveries - before,
            "warmed neighbour cache"
        );
    }

    /// The cached list for `coord`, without triggering discovery.
    pub fn cached(&self, coord: CellCoord) -> Option<&[CellCoord]> {
        self.entries.get(&coord).map(|n| n.as_slice())
    }

    /// Whether `coord` has been discovered.
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.entries.contains_key(&coord)
    }

    /// Number of cached coordinates.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if nothing has been discovered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// How many times the discovery routine has run.
    ///
    /// Each valid coordinate is discovered at most once, so this never
    /// exceeds the grid's cell count.
    pub fn discoveries(&self) -> u64 {
        self.discoveries
    }

    /// Cached coordinates in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (CellCoord, &[CellCoord])> {
        self.entries.iter().map(|(c, n)| (*c, n.as_slice()))
    }
}
