//! Dense voxel storage with bounds checks and world/index conversion.

use aeronav_core::{CellCoord, ConfigError, GridConfig, GridError, GridInstanceId, Offset};
use nalgebra::{Point3, Vector3};
use tracing::{debug, trace};

use crate::cell::Cell;
use crate::debug::{DebugVolume, DebugVolumeParams};

/// A fixed-size, three-dimensional grid of cubic cells.
///
/// Cell `(x, y, z)` spans `origin + voxel_size * [x, x+1) × [y, y+1) × [z, z+1)`
/// in world space and is valid iff `0 <= x < size_x`, `0 <= y < size_y`
/// and `0 <= z < size_z`.
///
/// Cells live in one flat vector in x-major order (`x` outer, `z` inner),
/// addressed by `((x * size_y) + y) * size_z + z`. The grid is built once
/// and never resized.
#[derive(Debug)]
pub struct VoxelGrid {
    config: GridConfig,
    cells: Vec<Cell>,
    instance_id: GridInstanceId,
}

impl VoxelGrid {
    /// Validate `config` and materialise every cell with its world-space centre.
    ///
    /// Returns the first [`ConfigError`] reported by
    /// [`GridConfig::validate`]; nothing is allocated in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use aeronav_grid::{CellCoord, GridConfig, VoxelGrid};
    ///
    /// let grid = VoxelGrid::build(GridConfig::new(4, 4, 4, 2.0)).unwrap();
    /// assert_eq!(grid.cell_count(), 64);
    /// assert!(grid.is_valid_index(CellCoord::new(3, 3, 3)));
    /// assert!(!grid.is_valid_index(CellCoord::new(4, 0, 0)));
    /// ```
    pub fn build(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let count = config.cell_count()?;

        let mut cells = Vec::with_capacity(count);
        // Axis sizes were validated to fit in i32.
        let (sx, sy, sz) = (
            config.size_x as i32,
            config.size_y as i32,
            config.size_z as i32,
        );
        for x in 0..sx {
            for y in 0..sy {
                for z in 0..sz {
                    let coord = CellCoord::new(x, y, z);
                    cells.push(Cell::new(coord, center_of(&config, coord)));
                }
            }
        }

        debug!(
            size_x = config.size_x,
            size_y = config.size_y,
            size_z = config.size_z,
            voxel_size = config.voxel_size,
            unbounded = config.unbounded,
            cells = cells.len(),
            "built voxel grid"
        );

        Ok(Self {
            config,
            cells,
            instance_id: GridInstanceId::next(),
        })
    }

    /// The configuration this grid was built from.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Cells along x.
    pub fn size_x(&self) -> u32 {
        self.config.size_x
    }

    /// Cells along y.
    pub fn size_y(&self) -> u32 {
        self.config.size_y
    }

    /// Cells along z.
    pub fn size_z(&self) -> u32 {
        self.config.size_z
    }

    /// Edge length of every cell.
    pub fn voxel_size(&self) -> f64 {
        self.config.voxel_size
    }

    /// World-space minimum corner of cell `(0, 0, 0)`.
    pub fn origin(&self) -> Point3<f64> {
        self.config.origin
    }

    /// Whether world-space clamping and containment checks are disabled.
    pub fn is_unbounded(&self) -> bool {
        self.config.unbounded
    }

    /// Total number of cells (`size_x * size_y * size_z`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Unique identifier of this grid instance.
    pub fn instance_id(&self) -> GridInstanceId {
        self.instance_id
    }

    // ── Bounds ──────────────────────────────────────────────────

    /// `true` iff every component of `coord` lies within its axis.
    pub fn is_valid_index(&self, coord: CellCoord) -> bool {
        axis_ok(coord.x, self.config.size_x)
            && axis_ok(coord.y, self.config.size_y)
            && axis_ok(coord.z, self.config.size_z)
    }

    /// `true` iff `coord` is valid and sits on at least one face of the grid.
    pub fn is_boundary(&self, coord: CellCoord) -> bool {
        self.is_valid_index(coord) && !self.has_all_faces_inside(coord)
    }

    /// `true` iff `coord` is valid and strictly inside the grid on every axis.
    ///
    /// Every direct and diagonal step from an interior cell lands on a
    /// valid cell, which is what lets neighbour discovery skip bounds checks.
    pub fn is_interior(&self, coord: CellCoord) -> bool {
        self.is_valid_index(coord) && self.has_all_faces_inside(coord)
    }

    fn has_all_faces_inside(&self, coord: CellCoord) -> bool {
        let inner = |v: i32, len: u32| v > 0 && i64::from(v) < i64::from(len) - 1;
        inner(coord.x, self.config.size_x)
            && inner(coord.y, self.config.size_y)
            && inner(coord.z, self.config.size_z)
    }

    /// Human-readable description of the valid index range.
    pub fn bounds_description(&self) -> String {
        format!(
            "x in [0, {}), y in [0, {}), z in [0, {})",
            self.config.size_x, self.config.size_y, self.config.size_z
        )
    }

    // ── Cell access ─────────────────────────────────────────────

    /// Position of `coord` in canonical order, or `None` if out of range.
    pub fn flat_index(&self, coord: CellCoord) -> Option<usize> {
        self.is_valid_index(coord).then(|| self.flat_index_unchecked(coord))
    }

    fn flat_index_unchecked(&self, coord: CellCoord) -> usize {
        let sy = self.config.size_y as usize;
        let sz = self.config.size_z as usize;
        ((coord.x as usize) * sy + coord.y as usize) * sz + coord.z as usize
    }

    /// Bounds-checked access: `None` if `coord` is out of range.
    pub fn cell_at(&self, coord: CellCoord) -> Option<&Cell> {
        self.flat_index(coord).map(|i| &self.cells[i])
    }

    /// Access without a bounds check, for callers that have already
    /// established validity (for example via [`is_interior`](Self::is_interior)).
    ///
    /// # Panics
    ///
    /// Debug builds panic on an out-of-range coordinate. Release builds skip
    /// the check: the flat index is used as-is, which panics if it falls
    /// past the end of storage and otherwise returns an unrelated cell.
    pub fn cell_at_unchecked(&self, coord: CellCoord) -> &Cell {
        debug_assert!(
            self.is_valid_index(coord),
            "cell_at_unchecked: {coord} outside {}",
            self.bounds_description()
        );
        &self.cells[self.flat_index_unchecked(coord)]
    }

    /// The cell one `offset` away from `coord`, if it exists.
    pub fn neighbour_at(&self, coord: CellCoord, offset: Offset) -> Option<&Cell> {
        self.cell_at(coord.offset(offset))
    }

    /// The cell containing a world-space point, if it exists.
    pub fn cell_at_location(&self, location: Point3<f64>) -> Option<&Cell> {
        self.cell_at(self.world_to_index(location))
    }

    /// All cells in canonical order (x outer, y middle, z inner).
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// All coordinates in canonical order.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        self.cells.iter().map(Cell::coord)
    }

    // ── Occupancy ───────────────────────────────────────────────

    /// Record an occupant entering (`false`) or leaving (`true`) a cell.
    ///
    /// Neighbour caches stay valid: they depend on geometry, not occupancy.
    pub fn set_navigability(
        &mut self,
        coord: CellCoord,
        navigable: bool,
    ) -> Result<(), GridError> {
        let Some(idx) = self.flat_index(coord) else {
            return Err(GridError::CoordOutOfBounds {
                coord,
                bounds: self.bounds_description(),
            });
        };
        let cell = &mut self.cells[idx];
        let was_navigable = cell.is_navigable();
        cell.set_navigability(navigable);
        if was_navigable != cell.is_navigable() {
            trace!(%coord, navigable = cell.is_navigable(), "cell navigability changed");
        }
        Ok(())
    }

    // ── World space ─────────────────────────────────────────────

    /// The cell coordinate containing a world-space point.
    ///
    /// Each axis is `floor((p - origin) / voxel_size)`, so points below the
    /// origin map to negative indices symmetrically and a point exactly on a
    /// shared face belongs to the cell whose minimum face it is. The result
    /// may be out of range; check it with [`is_valid_index`](Self::is_valid_index).
    /// A NaN or infinite component maps to `i32::MIN` on that axis, which is
    /// never a valid index.
    pub fn world_to_index(&self, location: Point3<f64>) -> CellCoord {
        let rel = (location - self.config.origin) / self.config.voxel_size;
        CellCoord::new(floor_index(rel.x), floor_index(rel.y), floor_index(rel.z))
    }

    /// World-space centre of cell `coord`, half a voxel in from its minimum corner.
    ///
    /// Defined for any coordinate, including out-of-range ones.
    pub fn index_to_world_center(&self, coord: CellCoord) -> Point3<f64> {
        center_of(&self.config, coord)
    }

    /// Centre of the cell containing `location`.
    pub fn snap_to_cell_center(&self, location: Point3<f64>) -> Point3<f64> {
        self.index_to_world_center(self.world_to_index(location))
    }

    /// Minimum world-space corner of the grid.
    pub fn world_min(&self) -> Point3<f64> {
        self.config.origin
    }

    /// Maximum world-space corner of the grid.
    pub fn world_max(&self) -> Point3<f64> {
        let v = self.config.voxel_size;
        self.config.origin
            + Vector3::new(
                f64::from(self.config.size_x) * v,
                f64::from(self.config.size_y) * v,
                f64::from(self.config.size_z) * v,
            )
    }

    /// Half a voxel along each axis.
    pub fn voxel_half_extent(&self) -> Vector3<f64> {
        Vector3::repeat(self.config.voxel_size / 2.0)
    }

    /// Half the grid's world-space span along each axis.
    pub fn world_half_extent(&self) -> Vector3<f64> {
        (self.world_max() - self.world_min()) / 2.0
    }

    /// Clamp a point into `[world_min, world_max]` on each axis.
    ///
    /// Identity when the grid is unbounded.
    pub fn clamp_to_bounds(&self, location: Point3<f64>) -> Point3<f64> {
        if self.config.unbounded {
            return location;
        }
        let (min, max) = (self.world_min(), self.world_max());
        Point3::new(
            location.x.clamp(min.x, max.x),
            location.y.clamp(min.y, max.y),
            location.z.clamp(min.z, max.z),
        )
    }

    /// `true` iff `location` lies within the grid's world-space box, faces
    /// included. Always `true` when the grid is unbounded.
    pub fn contains_world_point(&self, location: Point3<f64>) -> bool {
        if self.config.unbounded {
            return true;
        }
        let (min, max) = (self.world_min(), self.world_max());
        (0..3).all(|i| location[i] >= min[i] && location[i] <= max[i])
    }

    // ── Debug visualisation ─────────────────────────────────────

    /// One box per cell, in canonical order, for an external renderer.
    pub fn debug_volumes(
        &self,
        params: DebugVolumeParams,
    ) -> impl Iterator<Item = (CellCoord, DebugVolume)> + '_ {
        let half_extent = self.voxel_half_extent() * params.extent_scale;
        self.cells.iter().map(move |cell| {
            let volume = DebugVolume {
                center: cell.center(),
                half_extent,
                navigable: cell.is_navigable(),
            };
            (cell.coord(), volume)
        })
    }

    /// A single box covering the whole grid.
    pub fn world_bounds_volume(&self) -> DebugVolume {
        DebugVolume {
            center: nalgebra::center(&self.world_min(), &self.world_max()),
            half_extent: self.world_half_extent(),
            navigable: true,
        }
    }
}

fn floor_index(rel: f64) -> i32 {
    if rel.is_finite() {
        rel.floor() as i32
    } else {
        i32::MIN
    }
}

fn axis_ok(v: i32, len: u32) -> bool {
    u32::try_from(v).is_ok_and(|v| v < len)
}

fn center_of(config: &GridConfig, coord: CellCoord) -> Point3<f64> {
    let v = config.voxel_size;
    config.origin
        + Vector3::new(
            (f64::from(coord.x) + 0.5) * v,
            (f64::from(coord.y) + 0.5) * v,
            (f64::from(coord.z) + 0.5) * v,
        )
}
