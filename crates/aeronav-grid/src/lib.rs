//! Voxel grid and neighbour resolution for free-flight navigation.
//!
//! This crate discretises a cuboid region of world space into uniform
//! cubic cells and answers "which cells can an agent step to from here?"
//! for agents that are not bound to the ground.
//!
//! # Components
//!
//! - [`VoxelGrid`]: dense cell storage, bounds checks, and world/index conversion
//! - [`NeighbourCache`]: lazily populated, never-invalidated direct (6-DOF) neighbour lists
//! - [`diagonal_neighbours`]: the 12 implicit diagonal steps, recomputed on every query
//! - [`NavigabilityOracle`]: the pluggable occupancy predicate consulted for diagonals
//! - [`NavGrid`]: owns all of the above and answers combined neighbour queries
//!
//! # Caching policy
//!
//! Direct neighbour *existence* depends only on grid geometry, so it is
//! cached forever. Diagonal neighbours depend on the current navigability
//! of the two straight legs of each diagonal step, which is mutable world
//! state, so they are never cached.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod cell;
pub mod debug;
pub mod diagonal;
pub mod direction;
pub mod grid;
pub mod nav_grid;
pub mod oracle;

#[cfg(test)]
pub(crate) mod compliance;

/// World-space math types used throughout the API.
pub use nalgebra;

pub use aeronav_core::{CellCoord, ConfigError, GridConfig, GridError, GridInstanceId, Offset};
pub use cache::{DirectNeighbours, NeighbourCache};
pub use cell::Cell;
pub use debug::{DebugVolume, DebugVolumeParams};
pub use diagonal::diagonal_neighbours;
pub use direction::{DiagonalStep, DIAGONAL_STEPS, DIRECT_OFFSETS};
pub use grid::VoxelGrid;
pub use nav_grid::{NavGrid, NeighbourList};
pub use oracle::{AlwaysNavigable, NavigabilityOracle, OccupancyOracle};
