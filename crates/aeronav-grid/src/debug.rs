//! Axis-aligned boxes handed to an external debug renderer.
//!
//! Nothing in the grid depends on whether these are consumed.

use nalgebra::{Point3, Vector3};

/// Parameters for [`VoxelGrid::debug_volumes`](crate::VoxelGrid::debug_volumes).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugVolumeParams {
    /// Scale applied to each cell's half extent. Default: 0.95, which
    /// leaves a visible gap between adjacent boxes.
    pub extent_scale: f64,
}

impl Default for DebugVolumeParams {
    fn default() -> Self {
        Self { extent_scale: 0.95 }
    }
}

/// A box to draw: one cell, or the whole grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DebugVolume {
    /// World-space centre.
    pub center: Point3<f64>,
    /// Half the box size along each axis.
    pub half_extent: Vector3<f64>,
    /// Whether the cell is currently free of occupants.
    pub navigable: bool,
}

impl DebugVolume {
    /// The eight corners, indexed by bit pattern `zyx` (bit set = `+` side).
    pub fn corners(&self) -> [Point3<f64>; 8] {
        let e = self.half_extent;
        std::array::from_fn(|i| {
            let sx = if i & 1 == 0 { -1.0 } else { 1.0 };
            let sy = if i & 2 == 0 { -1.0 } else { 1.0 };
            let sz = if i & 4 == 0 { -1.0 } else { 1.0 };
            self.center + Vector3::new(sx * e.x, sy * e.y, sz * e.z)
        })
    }

    /// The twelve wireframe edges: four on the top face, four on the
    /// bottom face, then the four verticals joining them.
    pub fn edges(&self) -> [(Point3<f64>, Point3<f64>); 12] {
        const EDGES: [(usize, usize); 12] = [
            // top (+z) face
            (7, 5),
            (5, 4),
            (4, 6),
            (6, 7),
            // bottom (-z) face
            (3, 1),
            (1, 0),
            (0, 2),
            (2, 3),
            // verticals
            (7, 3),
            (5, 1),
            (4, 0),
            (6, 2),
        ];
        let corners = self.corners();
        EDGES.map(|(a, b)| (corners[a], corners[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexSet;

    fn unit_box() -> DebugVolume {
        DebugVolume {
            center: Point3::new(1.0, 2.0, 3.0),
            half_extent: Vector3::new(0.5, 0.5, 0.5),
            navigable: true,
        }
    }

    #[test]
    fn corners_are_distinct_and_offset_by_half_extent() {
        let v = unit_box();
        let corners = v.corners();
        assert_eq!(corners[0], Point3::new(0.5, 1.5, 2.5));
        assert_eq!(corners[7], Point3::new(1.5, 2.5, 3.5));
        let unique: IndexSet<_> = corners.iter().map(|p| format!("{p:?}")).collect();
        assert_eq!(unique.len(), 8);
    }

    #[test]
    fn edges_are_axis_aligned_and_full_length() {
        let v = DebugVolume {
            half_extent: Vector3::new(2.0, 2.0, 2.0),
            ..unit_box()
        };
        for (a, b) in v.edges() {
            let d = b - a;
            let nonzero = d.iter().filter(|c| c.abs() > 1e-12).count();
            assert_eq!(nonzero, 1, "edge {a:?}->{b:?} is not axis aligned");
            assert!((d.norm() - 4.0).abs() < 1e-12);
        }
    }

    #[test]
    fn every_corner_has_three_edges() {
        let v = unit_box();
        let corners = v.corners();
        let mut degree = [0usize; 8];
        for (a, b) in v.edges() {
            for (i, c) in corners.iter().enumerate() {
                if *c == a || *c == b {
                    degree[i] += 1;
                }
            }
        }
        assert_eq!(degree, [3; 8]);
    }

    #[test]
    fn default_scale_leaves_a_gap() {
        assert_eq!(DebugVolumeParams::default().extent_scale, 0.95);
    }
}
