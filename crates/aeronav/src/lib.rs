//! aeronav: voxel grids and neighbour resolution for agents that fly.
//!
//! This is the facade crate that re-exports the public API from the
//! aeronav sub-crates. Adding `aeronav` as a single dependency is enough
//! for most users.
//!
//! # Quick start
//!
//! ```rust
//! use aeronav::prelude::*;
//!
//! // 8×8×4 cells of 100 world units, anchored at the world origin.
//! let config = GridConfig::new(8, 8, 4, 100.0);
//! let mut nav = NavGrid::new(config, OccupancyOracle).unwrap();
//!
//! // Park something in the cell directly above (3, 3, 1).
//! nav.set_navigability(CellCoord::new(3, 3, 2), false).unwrap();
//!
//! let here = nav.world_to_index(Point3::new(350.0, 350.0, 150.0));
//! assert_eq!(here, CellCoord::new(3, 3, 1));
//!
//! // The occupied cell still exists as a direct neighbour, but the four
//! // diagonals through it are withheld.
//! let n = nav.resolve_neighbours(here);
//! assert_eq!(n.len(), 6 + 8);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `aeronav-core` | Coordinates, offsets, grid configuration, errors |
//! | [`grid`] | `aeronav-grid` | Voxel storage, neighbour cache, diagonal resolution, oracles |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, configuration and error types (`aeronav-core`).
///
/// [`types::GridConfig`] is validated by [`types::GridConfig::validate`]
/// before any grid is allocated.
pub use aeronav_core as types;

/// Voxel grid and neighbour resolution (`aeronav-grid`).
///
/// [`grid::NavGrid`] is the usual entry point; [`grid::VoxelGrid`] and
/// [`grid::NeighbourCache`] can also be used on their own.
pub use aeronav_grid as grid;

/// Common imports for typical aeronav usage.
///
/// ```rust
/// use aeronav::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use aeronav_core::{CellCoord, GridConfig, Offset};

    // Errors
    pub use aeronav_core::{ConfigError, GridError};

    // Grid and resolution
    pub use aeronav_grid::{NavGrid, NeighbourCache, NeighbourList, VoxelGrid};

    // Oracles
    pub use aeronav_grid::{AlwaysNavigable, NavigabilityOracle, OccupancyOracle};

    // Debug visualisation
    pub use aeronav_grid::{DebugVolume, DebugVolumeParams};

    // World-space math
    pub use aeronav_grid::nalgebra::{Point3, Vector3};
}
