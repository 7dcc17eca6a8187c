//! Diagonal (implicit 12-DOF) neighbour resolution.
//!
//! A diagonal step moves along two orthogonal axes at once. It is only
//! offered when both straight legs of the step are navigable right now,
//! which keeps agents from cutting through an occupied corner. Because the
//! answer depends on mutable occupancy, it is recomputed on every call and
//! never cached.

use aeronav_core::CellCoord;
use smallvec::SmallVec;

use crate::direction::DIAGONAL_STEPS;
use crate::grid::VoxelGrid;
use crate::oracle::NavigabilityOracle;

/// Diagonal neighbours of `coord`, in [`DIAGONAL_STEPS`] order.
///
/// For a boundary cell the twelve targets are checked up front and, if any
/// of them is out of range, no diagonal is returned at all. Interior cells
/// skip that check: all of their diagonal targets exist. An out-of-range
/// `coord` yields an empty list.
pub fn diagonal_neighbours<O>(
    grid: &VoxelGrid,
    oracle: &O,
    coord: CellCoord,
) -> SmallVec<[CellCoord; 12]>
where
    O: NavigabilityOracle + ?Sized,
{
    let mut out = SmallVec::new();
    if !grid.is_valid_index(coord) {
        return out;
    }
    if !grid.is_interior(coord)
        && !DIAGONAL_STEPS
            .iter()
            .all(|step| grid.is_valid_index(coord.offset(step.target())))
    {
        return out;
    }
    for step in &DIAGONAL_STEPS {
        if oracle.is_navigable(grid, coord.offset(step.leg_a))
            && oracle.is_navigable(grid, coord.offset(step.leg_b))
        {
            out.push(coord.offset(step.target()));
        }
    }
    out
}
