//! World axes for orientable blocks (logs, pillars, chains).

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One of the three world axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Axis {
    /// East-west.
    X,
    /// Vertical.
    Y,
    /// North-south.
    Z,
}

impl Axis {
    /// All three axes, in discriminant order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit vector along the positive half of this axis.
    pub fn unit_vector(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }
}
