//! Flythrough demo.
//!
//! Demonstrates: build grid → scatter obstacles → warm cache → resolve
//! neighbours along a flight line → move an obstacle → resolve again.
//!
//! Run with `RUST_LOG=debug` (or `trace`) to see the grid's own events.

use aeronav_bench::stress_profile;
use aeronav_grid::nalgebra::Point3;
use aeronav_grid::{CellCoord, DebugVolumeParams, NavGrid, OccupancyOracle, VoxelGrid};
use aeronav_test_utils::fixtures::scatter_occupants;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== aeronav Flythrough ===\n");

    let config = stress_profile().with_origin(Point3::new(-3200.0, -3200.0, 0.0));
    let mut grid = VoxelGrid::build(config)?;
    let occupied = scatter_occupants(&mut grid, 0.05, 42)?;
    info!(occupied = occupied.len(), "scattered obstacles");

    let mut nav = NavGrid::with_grid(grid, OccupancyOracle);
    nav.warm_cache();
    println!(
        "Grid: {}x{}x{} cells, {} occupied, {} direct lists cached\n",
        nav.grid().size_x(),
        nav.grid().size_y(),
        nav.grid().size_z(),
        occupied.len(),
        nav.cache().len()
    );

    // --- A straight flight line across the grid at 1 km altitude ---
    println!("Flight line (y = 0, z = 1000):");
    for step in 0..8 {
        let waypoint = Point3::new(-3150.0 + f64::from(step) * 900.0, 0.0, 1000.0);
        let coord = nav.world_to_index(waypoint);
        let n = nav.resolve_neighbours(coord);
        let diagonals = n.len() - nav.direct_neighbours_of(coord).len();
        println!(
            "  {:>8.1} -> cell {coord}: {} neighbours ({} diagonal){}",
            waypoint.x,
            n.len(),
            diagonals,
            if nav.is_navigable(coord) { "" } else { " [occupied]" }
        );
    }

    // --- A drone parks next to a probe cell, then leaves ---
    let probe = CellCoord::new(10, 10, 10);
    let beside = CellCoord::new(11, 10, 10);
    let before = nav.resolve_neighbours(probe).len();
    nav.set_navigability(beside, false)?;
    let during = nav.resolve_neighbours(probe).len();
    nav.set_navigability(beside, true)?;
    let after = nav.resolve_neighbours(probe).len();
    println!("\nProbe {probe}: {before} neighbours, {during} with {beside} occupied, {after} after");

    // --- Debug volumes for a renderer ---
    let blocked_boxes = nav
        .grid()
        .debug_volumes(DebugVolumeParams::default())
        .filter(|(_, v)| !v.navigable)
        .count();
    let bounds = nav.grid().world_bounds_volume();
    println!(
        "\nDebug: {blocked_boxes} occupied boxes, world box centred at {:?} with half extent {:?}",
        bounds.center, bounds.half_extent
    );

    println!(
        "\nCache: {} entries, {} discoveries",
        nav.cache().len(),
        nav.cache().discoveries()
    );
    Ok(())
}
