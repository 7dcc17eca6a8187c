//! A single voxel of the navigation grid.

use std::hash::{Hash, Hasher};

use aeronav_core::CellCoord;
use nalgebra::Point3;

/// One cubic cell of a [`VoxelGrid`](crate::VoxelGrid).
///
/// Cells are owned by the grid and only ever handed out by reference, so
/// the grid never exposes two live handles for the same coordinate.
/// Equality and hashing use the coordinate alone.
#[derive(Debug)]
pub struct Cell {
    coord: CellCoord,
    center: Point3<f64>,
    occupant_count: u8,
    initialized: bool,
}

impl Cell {
    pub(crate) fn new(coord: CellCoord, center: Point3<f64>) -> Self {
        Self {
            coord,
            center,
            occupant_count: 0,
            initialized: false,
        }
    }

    /// Integer coordinate of this cell.
    pub fn coord(&self) -> CellCoord {
        self.coord
    }

    /// World-space centre, fixed when the grid is built.
    pub fn center(&self) -> Point3<f64> {
        self.center
    }

    /// Number of occupants currently blocking this cell.
    pub fn occupant_count(&self) -> u8 {
        self.occupant_count
    }

    /// `true` iff no occupant blocks this cell.
    pub fn is_navigable(&self) -> bool {
        self.occupant_count == 0
    }

    /// Whether navigability has been reported for this cell at least once.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Record an occupant entering (`navigable == false`) or leaving
    /// (`navigable == true`) this cell.
    ///
    /// The counter saturates at both ends: leaving an empty cell is a no-op
    /// and entering a cell with `u8::MAX` occupants keeps it at `u8::MAX`.
    pub(crate) fn set_navigability(&mut self, navigable: bool) {
        self.occupant_count = if navigable {
            self.occupant_count.saturating_sub(1)
        } else {
            self.occupant_count.saturating_add(1)
        };
        self.initialized = true;
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.coord == other.coord
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coord.hash(state);
    }
}
