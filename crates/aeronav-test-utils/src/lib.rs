//! Test utilities and occupancy fixtures for aeronav development.
//!
//! Provides a [`BlockedCells`] oracle for hand-placed obstacles, grid
//! configuration shorthands, and (in [`fixtures`]) a call-counting oracle
//! wrapper plus seeded random obstacle fields.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use aeronav_core::{CellCoord, GridConfig, GridError};
use aeronav_grid::{NavGrid, NavigabilityOracle, VoxelGrid};
use indexmap::IndexSet;

/// A unit-voxel grid configuration at the world origin.
pub fn unit_config(size_x: u32, size_y: u32, size_z: u32) -> GridConfig {
    GridConfig::new(size_x, size_y, size_z, 1.0)
}

/// A unit-voxel cube of `n` cells per side.
pub fn cube_config(n: u32) -> GridConfig {
    unit_config(n, n, n)
}

/// A [`NavGrid`] over `config` whose only obstacles are `blocked`.
pub fn nav_grid_with_blocked(
    config: GridConfig,
    blocked: impl IntoIterator<Item = CellCoord>,
) -> Result<NavGrid<BlockedCells>, GridError> {
    NavGrid::new(config, blocked.into_iter().collect())
}

/// Oracle backed by an explicit set of non-navigable cells.
///
/// Every cell not in the set is navigable. Insertion order is kept so
/// failing tests print obstacles in the order they were placed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BlockedCells {
    blocked: IndexSet<CellCoord>,
}

impl BlockedCells {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `coord` as occupied. Returns `false` if it already was.
    pub fn block(&mut self, coord: CellCoord) -> bool {
        self.blocked.insert(coord)
    }

    /// Clear `coord`. Returns `false` if it was not blocked.
    pub fn unblock(&mut self, coord: CellCoord) -> bool {
        self.blocked.shift_remove(&coord)
    }

    pub fn is_blocked(&self, coord: CellCoord) -> bool {
        self.blocked.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.blocked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocked.is_empty()
    }

    /// Blocked cells in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.blocked.iter().copied()
    }
}

impl FromIterator<CellCoord> for BlockedCells {
    fn from_iter<I: IntoIterator<Item = CellCoord>>(iter: I) -> Self {
        Self {
            blocked: iter.into_iter().collect(),
        }
    }
}

impl NavigabilityOracle for BlockedCells {
    fn is_navigable(&self, _grid: &VoxelGrid, coord: CellCoord) -> bool {
        !self.blocked.contains(&coord)
    }
}
