//! Benchmark profiles and utilities for aeronav.
//!
//! Provides pre-built grid profiles for benchmarks and examples:
//!
//! - [`reference_profile`]: 32³ unit cells, the resolution benchmark grid
//! - [`stress_profile`]: 64³ cells of 100 world units, for construction cost
//! - [`obstacle_profile`]: the reference grid with a seeded obstacle field
//! - [`interior_probe_cells`]: deterministic interior sample points

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use aeronav_core::{CellCoord, GridConfig, GridError};
use aeronav_grid::{NavGrid, VoxelGrid};
use aeronav_test_utils::fixtures::random_blocked_cells;
use aeronav_test_utils::BlockedCells;

/// Obstacle density used by [`obstacle_profile`].
pub const REFERENCE_DENSITY: f64 = 0.2;

/// 32×32×32 unit cells (32 768 cells) at the origin.
pub fn reference_profile() -> GridConfig {
    GridConfig::new(32, 32, 32, 1.0)
}

/// 64×64×64 cells (262 144 cells) of 100 world units.
///
/// Same shape as the reference grid at 8x the cell count.
pub fn stress_profile() -> GridConfig {
    GridConfig::new(64, 64, 64, 100.0)
}

/// The reference grid with [`REFERENCE_DENSITY`] of its cells blocked.
///
/// Identical seeds produce identical obstacle fields.
pub fn obstacle_profile(seed: u64) -> Result<NavGrid<BlockedCells>, GridError> {
    let grid = VoxelGrid::build(reference_profile())?;
    let blocked = random_blocked_cells(&grid, REFERENCE_DENSITY, seed);
    Ok(NavGrid::with_grid(grid, blocked))
}

/// Generate `n` deterministic interior coordinates of `grid`.
///
/// Uses a simple multiplicative hash of the seed, so the same inputs always
/// give the same probes. Returns an empty list if the grid has no interior.
pub fn interior_probe_cells(grid: &VoxelGrid, n: usize, seed: u64) -> Vec<CellCoord> {
    let inner = |len: u32| u64::from(len.saturating_sub(2));
    let (ix, iy, iz) = (
        inner(grid.size_x()),
        inner(grid.size_y()),
        inner(grid.size_z()),
    );
    if ix == 0 || iy == 0 || iz == 0 {
        return Vec::new();
    }

    (0..n as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            // Interior sizes fit in i32, so each remainder does too.
            CellCoord::new(
                1 + (h % ix) as i32,
                1 + ((h >> 21) % iy) as i32,
                1 + ((h >> 42) % iz) as i32,
            )
        })
        .collect()
}
