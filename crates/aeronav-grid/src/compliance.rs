//! Grid and neighbour-cache invariant checks.
//!
//! Reused by the unit tests of every module that builds a grid, so each
//! invariant is exercised against several shapes.

use aeronav_core::CellCoord;
use indexmap::IndexSet;

use crate::cache::NeighbourCache;
use crate::grid::VoxelGrid;

/// Assert that `is_valid_index` agrees with the per-axis ranges, including
/// one step outside the grid on every side.
pub fn assert_bounds_exact(grid: &VoxelGrid) {
    let (sx, sy, sz) = (
        grid.size_x() as i32,
        grid.size_y() as i32,
        grid.size_z() as i32,
    );
    for x in -1..=sx {
        for y in -1..=sy {
            for z in -1..=sz {
                let expected = (0..sx).contains(&x) && (0..sy).contains(&y) && (0..sz).contains(&z);
                let coord = CellCoord::new(x, y, z);
                assert_eq!(
                    grid.is_valid_index(coord),
                    expected,
                    "is_valid_index({coord}) disagrees with {}",
                    grid.bounds_description()
                );
            }
        }
    }
}

/// Assert that `coords()` yields exactly `cell_count` unique coordinates in
/// flat-index order.
pub fn assert_canonical_ordering_complete(grid: &VoxelGrid) {
    let ordering: IndexSet<CellCoord> = grid.coords().collect();
    assert_eq!(
        ordering.len(),
        grid.cell_count(),
        "canonical ordering has duplicates or missing cells"
    );
    for (i, coord) in ordering.iter().enumerate() {
        assert_eq!(grid.flat_index(*coord), Some(i), "{coord} is out of order");
    }
}

/// Assert that every cell centre maps back to its own coordinate and lies
/// inside the grid's world box.
pub fn assert_centres_round_trip(grid: &VoxelGrid) {
    for cell in grid.iter() {
        let centre = grid.index_to_world_center(cell.coord());
        assert_eq!(centre, cell.center(), "stored centre of {} drifted", cell.coord());
        assert_eq!(
            grid.world_to_index(centre),
            cell.coord(),
            "centre {centre:?} does not round-trip"
        );
        assert!(
            grid.contains_world_point(centre),
            "centre {centre:?} of {} lies outside the grid",
            cell.coord()
        );
    }
}

/// Run all grid-geometry checks.
pub fn run_grid_compliance(grid: &VoxelGrid) {
    assert_bounds_exact(grid);
    assert_canonical_ordering_complete(grid);
    assert_centres_round_trip(grid);
}

/// Assert that every direct neighbour is a valid unit step away.
pub fn assert_direct_neighbours_valid(grid: &VoxelGrid, cache: &mut NeighbourCache) {
    for coord in grid.coords() {
        for nb in cache.direct_neighbours_of(grid, coord) {
            assert!(grid.is_valid_index(nb), "{nb} in N({coord}) is out of range");
            assert_eq!(
                (nb.axes_differing(coord), nb.chebyshev(coord)),
                (1, 1),
                "{nb} in N({coord}) is not a unit step"
            );
        }
    }
}

/// Assert that `b in N(a)` implies `a in N(b)`.
pub fn assert_direct_neighbours_symmetric(grid: &VoxelGrid, cache: &mut NeighbourCache) {
    for coord in grid.coords() {
        for nb in cache.direct_neighbours_of(grid, coord) {
            assert!(
                cache.direct_neighbours_of(grid, nb).contains(&coord),
                "neighbour symmetry violated: {nb} in N({coord}) but {coord} not in N({nb})"
            );
        }
    }
}

/// Assert that cached lists are stable and that no coordinate was
/// discovered more than once.
pub fn assert_cache_stable(grid: &VoxelGrid, cache: &mut NeighbourCache) {
    for coord in grid.coords() {
        let first = cache.direct_neighbours_of(grid, coord);
        let again = cache.direct_neighbours_of(grid, coord);
        assert_eq!(first, again, "cached neighbours of {coord} changed");
    }
    assert_eq!(cache.len(), grid.cell_count());
    assert!(
        cache.discoveries() <= grid.cell_count() as u64,
        "{} discoveries for {} cells",
        cache.discoveries(),
        grid.cell_count()
    );
}

/// Run all direct-neighbour checks.
pub fn run_neighbour_compliance(grid: &VoxelGrid, cache: &mut NeighbourCache) {
    assert_direct_neighbours_valid(grid, cache);
    assert_direct_neighbours_symmetric(grid, cache);
    assert_cache_stable(grid, cache);
}
