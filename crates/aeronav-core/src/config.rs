//! Grid configuration and validation.
//!
//! [`GridConfig`] is the immutable input for building a voxel grid.
//! [`validate()`](GridConfig::validate) checks structural invariants up
//! front so that construction either succeeds completely or allocates
//! nothing.

use nalgebra::Point3;

use crate::error::ConfigError;

/// Complete configuration for constructing a voxel grid.
///
/// The grid copies this value at build time; changing a config after the
/// grid exists has no effect on it, so cached cell centres and neighbour
/// lists never go stale.
#[derive(Clone, Debug, PartialEq)]
pub struct GridConfig {
    /// World-space anchor of the grid: the minimum corner of cell `(0, 0, 0)`.
    pub origin: Point3<f64>,
    /// Number of cells along x. Default: 10.
    pub size_x: u32,
    /// Number of cells along y. Default: 10.
    pub size_y: u32,
    /// Number of cells along z. Default: 10.
    pub size_z: u32,
    /// Edge length of every cubic cell. Default: 100.0.
    pub voxel_size: f64,
    /// Disables world-space clamping and containment checks. Default: `false`.
    pub unbounded: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            origin: Point3::origin(),
            size_x: 10,
            size_y: 10,
            size_z: 10,
            voxel_size: 100.0,
            unbounded: false,
        }
    }
}

impl GridConfig {
    /// Maximum cells per axis: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// How many float steps at the grid's far edge must fit in one voxel.
    /// Keeps centre/index round-trip error well under half a cell.
    pub const PRECISION_MARGIN: f64 = 8.0;

    /// A bounded grid of `size_x * size_y * size_z` cells anchored at the origin.
    pub fn new(size_x: u32, size_y: u32, size_z: u32, voxel_size: f64) -> Self {
        Self {
            size_x,
            size_y,
            size_z,
            voxel_size,
            ..Self::default()
        }
    }

    /// Replace the world-space anchor.
    pub fn with_origin(mut self, origin: Point3<f64>) -> Self {
        self.origin = origin;
        self
    }

    /// Set the unbounded flag.
    pub fn with_unbounded(mut self, unbounded: bool) -> Self {
        self.unbounded = unbounded;
        self
    }

    /// Validate all structural invariants.
    ///
    /// Checks, in order: every axis has at least one cell, every axis fits
    /// in `i32`, `voxel_size` is finite and positive, the origin is finite,
    /// `voxel_size` is resolvable by `f64` across the grid's world span, and
    /// the total cell count fits in `usize`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let axes = [
            ("size_x", self.size_x),
            ("size_y", self.size_y),
            ("size_z", self.size_z),
        ];
        for (name, value) in axes {
            if value == 0 {
                return Err(ConfigError::EmptyAxis { name });
            }
        }
        for (name, value) in axes {
            if value > Self::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(ConfigError::InvalidVoxelSize {
                value: self.voxel_size,
            });
        }
        if !self.origin.coords.iter().all(|c| c.is_finite()) {
            return Err(ConfigError::NonFiniteOrigin);
        }
        let spans = [
            ("x", self.origin.x, self.size_x),
            ("y", self.origin.y, self.size_y),
            ("z", self.origin.z, self.size_z),
        ];
        for (axis, origin, size) in spans {
            let magnitude = origin.abs() + f64::from(size) * self.voxel_size;
            if magnitude * f64::EPSILON * Self::PRECISION_MARGIN >= self.voxel_size {
                return Err(ConfigError::InsufficientPrecision {
                    axis,
                    magnitude,
                    voxel_size: self.voxel_size,
                });
            }
        }
        self.cell_count()?;
        Ok(())
    }

    /// Total number of cells, or `CellCountOverflow` if it does not fit in `usize`.
    pub fn cell_count(&self) -> Result<usize, ConfigError> {
        (self.size_x as usize)
            .checked_mul(self.size_y as usize)
            .and_then(|n| n.checked_mul(self.size_z as usize))
            .ok_or(ConfigError::CellCountOverflow {
                size_x: self.size_x,
                size_y: self.size_y,
                size_z: self.size_z,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn default_config_is_valid() {
        assert!(GridConfig::default().validate().is_ok());
        assert_eq!(GridConfig::default().cell_count(), Ok(1000));
    }

    #[test]
    fn zero_axis_rejected() {
        assert_eq!(
            GridConfig::new(0, 4, 4, 1.0).validate(),
            Err(ConfigError::EmptyAxis { name: "size_x" })
        );
        assert_eq!(
            GridConfig::new(4, 0, 4, 1.0).validate(),
            Err(ConfigError::EmptyAxis { name: "size_y" })
        );
        assert_eq!(
            GridConfig::new(4, 4, 0, 1.0).validate(),
            Err(ConfigError::EmptyAxis { name: "size_z" })
        );
    }

    #[test]
    fn axis_exceeding_i32_rejected() {
        let big = GridConfig::MAX_DIM + 1;
        assert!(matches!(
            GridConfig::new(1, big, 1, 1.0).validate(),
            Err(ConfigError::DimensionTooLarge { name: "size_y", .. })
        ));
    }

    #[test]
    fn invalid_voxel_sizes_rejected() {
        for bad in [0.0, -2.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                GridConfig::new(2, 2, 2, bad).validate(),
                Err(ConfigError::InvalidVoxelSize { .. })
            ));
        }
    }

    #[test]
    fn non_finite_origin_rejected() {
        let cfg = GridConfig::new(2, 2, 2, 1.0).with_origin(Point3::new(0.0, f64::NAN, 0.0));
        assert_eq!(cfg.validate(), Err(ConfigError::NonFiniteOrigin));
    }

    #[test]
    fn origin_beyond_voxel_precision_rejected() {
        let cfg = GridConfig::new(4, 4, 4, 1.0).with_origin(Point3::new(1.0e17, 0.0, 0.0));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InsufficientPrecision { axis: "x", .. })
        ));
        let cfg = GridConfig::new(4, 4, 4, 1.0e-6).with_origin(Point3::new(0.0, 0.0, -1.0e9));
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InsufficientPrecision { axis: "z", .. })
        ));
    }

    #[test]
    fn far_origin_with_coarse_voxels_accepted() {
        let cfg = GridConfig::new(4, 4, 4, 1.0).with_origin(Point3::new(1.0e14, -1.0e14, 0.0));
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn huge_span_overflowing_to_infinity_rejected() {
        let cfg = GridConfig::new(4, 4, 4, f64::MAX);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::InsufficientPrecision { axis: "x", .. })
        ));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn max_dims_overflow_cell_count_only_when_product_overflows() {
        let max = GridConfig::MAX_DIM;
        let cfg = GridConfig::new(max, max, max, 1.0);
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::CellCountOverflow { .. })
        ));
    }

    #[test]
    fn builders_set_fields() {
        let cfg = GridConfig::new(3, 4, 5, 2.5)
            .with_origin(Point3::new(1.0, 2.0, 3.0))
            .with_unbounded(true);
        assert_eq!(cfg.size_x, 3);
        assert_eq!(cfg.size_y, 4);
        assert_eq!(cfg.size_z, 5);
        assert_eq!(cfg.voxel_size, 2.5);
        assert_eq!(cfg.origin, Point3::new(1.0, 2.0, 3.0));
        assert!(cfg.unbounded);
    }

    proptest! {
        #[test]
        fn positive_dims_and_size_always_validate(
            sx in 1u32..64,
            sy in 1u32..64,
            sz in 1u32..64,
            voxel in 0.001f64..1000.0,
        ) {
            let cfg = GridConfig::new(sx, sy, sz, voxel);
            prop_assert!(cfg.validate().is_ok());
            prop_assert_eq!(cfg.cell_count(), Ok((sx * sy * sz) as usize));
        }
    }
}
