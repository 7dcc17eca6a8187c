//! Strongly-typed identifiers and integer cell coordinates.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Integer coordinate of a cell in a voxel grid.
///
/// A cell's identity *is* its coordinate: two cells are the same cell iff
/// their `(x, y, z)` triples match. Coordinates are signed so that offsets
/// below the grid origin (and the results of `VoxelGrid::world_to_index` for points
/// outside the grid) are representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    /// Index along the x axis.
    pub x: i32,
    /// Index along the y axis.
    pub y: i32,
    /// Index along the z axis.
    pub z: i32,
}

impl CellCoord {
    /// Create a coordinate from its three components.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The coordinate reached by stepping `offset` from `self`.
    ///
    /// Components wrap on `i32` overflow. Grid axes are capped at
    /// `i32::MAX` cells, so a wrapped result never names a valid cell.
    pub const fn offset(self, offset: Offset) -> Self {
        Self {
            x: self.x.wrapping_add(offset.dx),
            y: self.y.wrapping_add(offset.dy),
            z: self.z.wrapping_add(offset.dz),
        }
    }

    /// Components as an `[x, y, z]` array.
    pub const fn as_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }

    /// Number of axes on which `self` and `other` differ.
    pub fn axes_differing(self, other: Self) -> usize {
        usize::from(self.x != other.x)
            + usize::from(self.y != other.y)
            + usize::from(self.z != other.z)
    }

    /// Chebyshev (L∞) distance between two coordinates.
    pub fn chebyshev(self, other: Self) -> u32 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        let dz = self.z.abs_diff(other.z);
        dx.max(dy).max(dz)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for CellCoord {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for CellCoord {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

/// A relative step between two cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Offset {
    /// Step along the x axis.
    pub dx: i32,
    /// Step along the y axis.
    pub dy: i32,
    /// Step along the z axis.
    pub dz: i32,
}

impl Offset {
    /// Create an offset from its three components.
    pub const fn new(dx: i32, dy: i32, dz: i32) -> Self {
        Self { dx, dy, dz }
    }

    /// Component-wise sum of two offsets.
    pub const fn compose(self, other: Self) -> Self {
        Self::new(self.dx + other.dx, self.dy + other.dy, self.dz + other.dz)
    }
}

/// Counter for unique [`GridInstanceId`] allocation.
static GRID_INSTANCE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique per-instance identifier for a voxel grid.
///
/// Allocated from a monotonic atomic counter via [`GridInstanceId::next`].
/// Two distinct grids always have different IDs, even if they have
/// identical configuration. A neighbour cache records the ID of the grid
/// it was populated from so it is never consulted for another grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridInstanceId(u64);

impl GridInstanceId {
    /// Allocate a fresh, unique instance ID. Thread-safe.
    pub fn next() -> Self {
        Self(GRID_INSTANCE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for GridInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
