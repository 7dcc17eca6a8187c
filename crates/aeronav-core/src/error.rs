//! Error types for grid construction and grid queries.

use crate::id::CellCoord;
use std::error::Error;
use std::fmt;

/// Errors detected by [`GridConfig::validate`](crate::GridConfig::validate).
///
/// A grid is never partially built: every variant is reported before any
/// cell storage is allocated.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An axis was configured with zero cells.
    EmptyAxis {
        /// Axis name (`"size_x"`, `"size_y"` or `"size_z"`).
        name: &'static str,
    },
    /// An axis exceeds the largest size representable by `i32` coordinates.
    DimensionTooLarge {
        /// Axis name.
        name: &'static str,
        /// The configured value.
        value: u32,
        /// Maximum allowed value.
        max: u32,
    },
    /// `voxel_size` is NaN, infinite, zero, or negative.
    InvalidVoxelSize {
        /// The invalid value.
        value: f64,
    },
    /// The grid origin has a NaN or infinite component.
    NonFiniteOrigin,
    /// Along one axis the grid sits so far from zero that `f64` cannot
    /// resolve individual cells.
    InsufficientPrecision {
        /// Axis name (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// Largest world-space magnitude the grid reaches on that axis.
        magnitude: f64,
        /// The configured voxel size.
        voxel_size: f64,
    },
    /// `size_x * size_y * size_z` does not fit in `usize`.
    CellCountOverflow {
        /// Cells along x.
        size_x: u32,
        /// Cells along y.
        size_y: u32,
        /// Cells along z.
        size_z: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyAxis { name } => write!(f, "{name} must be at least 1"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum of {max}")
            }
            Self::InvalidVoxelSize { value } => {
                write!(f, "voxel_size must be finite and positive, got {value}")
            }
            Self::NonFiniteOrigin => write!(f, "grid origin must be finite"),
            Self::InsufficientPrecision {
                axis,
                magnitude,
                voxel_size,
            } => write!(
                f,
                "voxel_size {voxel_size} is too small to resolve cells at {axis} = {magnitude}"
            ),
            Self::CellCountOverflow {
                size_x,
                size_y,
                size_z,
            } => {
                write!(f, "grid {size_x}x{size_y}x{size_z} exceeds maximum cell count")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors arising from grid queries that mutate or require a valid cell.
///
/// Read-only checked accessors report out-of-range coordinates with
/// `None` or an empty list instead; an out-of-range lookup at a grid
/// boundary is an expected outcome, not an error.
#[derive(Clone, Debug, PartialEq)]
pub enum GridError {
    /// A coordinate is outside the bounds of the grid.
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: CellCoord,
        /// Human-readable description of the valid range.
        bounds: String,
    },
    /// The grid configuration is invalid.
    Config(ConfigError),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordOutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::Config(e) => write!(f, "config: {e}"),
        }
    }
}

impl Error for GridError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::CoordOutOfBounds { .. } => None,
        }
    }
}

impl From<ConfigError> for GridError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
