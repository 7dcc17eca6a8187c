//! Fixed offset tables for direct and diagonal steps.
//!
//! A free-flying agent has six *direct* degrees of freedom (forward/back,
//! left/right, up/down) and twelve *implicit* diagonal ones formed by
//! moving along two orthogonal direct directions at once. The order of
//! both tables is part of the public contract: neighbour lists are
//! returned in table order.

use aeronav_core::Offset;

/// The six unit steps, in neighbour-list order: ±y, ±x, ±z.
pub const DIRECT_OFFSETS: [Offset; 6] = [
    Offset::new(0, 1, 0),
    Offset::new(0, -1, 0),
    Offset::new(1, 0, 0),
    Offset::new(-1, 0, 0),
    Offset::new(0, 0, 1),
    Offset::new(0, 0, -1),
];

/// A diagonal step and the two straight legs it is composed from.
///
/// The step is only taken if both legs are navigable, so an agent never
/// cuts through an occupied corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagonalStep {
    /// First straight leg.
    pub leg_a: Offset,
    /// Second straight leg, orthogonal to `leg_a`.
    pub leg_b: Offset,
}

impl DiagonalStep {
    const fn new(leg_a: Offset, leg_b: Offset) -> Self {
        Self { leg_a, leg_b }
    }

    /// Offset of the diagonal target cell (`leg_a + leg_b`).
    pub const fn target(&self) -> Offset {
        self.leg_a.compose(self.leg_b)
    }
}

const PX: Offset = Offset::new(1, 0, 0);
const NX: Offset = Offset::new(-1, 0, 0);
const PY: Offset = Offset::new(0, 1, 0);
const NY: Offset = Offset::new(0, -1, 0);
const PZ: Offset = Offset::new(0, 0, 1);
const NZ: Offset = Offset::new(0, 0, -1);

/// All 12 diagonal steps, in neighbour-list order.
///
/// Grouped as x/z pairs, then y/z pairs, then x/y pairs; within each group
/// the second leg is `+` for the first two entries and `-` for the last
/// two, alternating the first leg `+`, `-`.
pub const DIAGONAL_STEPS: [DiagonalStep; 12] = [
    DiagonalStep::new(PX, PZ),
    DiagonalStep::new(NX, PZ),
    DiagonalStep::new(PX, NZ),
    DiagonalStep::new(NX, NZ),
    DiagonalStep::new(PY, PZ),
    DiagonalStep::new(NY, PZ),
    DiagonalStep::new(PY, NZ),
    DiagonalStep::new(NY, NZ),
    DiagonalStep::new(PX, PY),
    DiagonalStep::new(NX, PY),
    DiagonalStep::new(PX, NY),
    DiagonalStep::new(NX, NY),
];
