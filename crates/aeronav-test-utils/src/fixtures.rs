//! Reusable occupancy fixtures.
//!
//! - [`CountingOracle`]: wraps another oracle and counts how often it is asked.
//! - [`random_blocked_cells`]: a seeded obstacle field as a [`BlockedCells`] oracle.
//! - [`scatter_occupants`]: the same field written into a grid's occupant counters.

use aeronav_core::{CellCoord, GridError};
use aeronav_grid::{AlwaysNavigable, NavigabilityOracle, VoxelGrid};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::BlockedCells;

/// Delegates to an inner oracle and counts calls to `is_navigable`.
///
/// Uses an atomic counter so a `&CountingOracle` can be shared with code
/// that only takes the oracle by reference.
#[derive(Debug, Default)]
pub struct CountingOracle<O = AlwaysNavigable> {
    inner: O,
    calls: AtomicUsize,
}

impl<O> CountingOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of `is_navigable` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.calls.store(0, Ordering::Relaxed);
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut O {
        &mut self.inner
    }
}

impl<O: NavigabilityOracle> NavigabilityOracle for CountingOracle<O> {
    fn is_navigable(&self, grid: &VoxelGrid, coord: CellCoord) -> bool {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.is_navigable(grid, coord)
    }
}

/// Pick each cell of `grid` independently with probability `density`.
///
/// Identical `(grid shape, density, seed)` always yields the same cells, in
/// canonical order. `density` is clamped to `[0, 1]`; NaN counts as zero.
fn sample_cells(grid: &VoxelGrid, density: f64, seed: u64) -> Vec<CellCoord> {
    let p = if density.is_nan() {
        0.0
    } else {
        density.clamp(0.0, 1.0)
    };
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    grid.coords().filter(|_| rng.random_bool(p)).collect()
}

/// A seeded random obstacle field as a [`BlockedCells`] oracle.
pub fn random_blocked_cells(grid: &VoxelGrid, density: f64, seed: u64) -> BlockedCells {
    sample_cells(grid, density, seed).into_iter().collect()
}

/// Add one occupant to each cell of a seeded random obstacle field.
///
/// Returns the cells that were occupied, in canonical order. Pair with
/// [`OccupancyOracle`](aeronav_grid::OccupancyOracle) to see the result.
pub fn scatter_occupants(
    grid: &mut VoxelGrid,
    density: f64,
    seed: u64,
) -> Result<Vec<CellCoord>, GridError> {
    let cells = sample_cells(grid, density, seed);
    for &coord in &cells {
        grid.set_navigability(coord, false)?;
    }
    Ok(cells)
}
