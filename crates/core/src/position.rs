//! Integer world positions used as map keys by the view bookkeeping.

use serde::{Deserialize, Serialize};

/// A block position in world coordinates.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BlockPos {
    /// East-west coordinate.
    pub x: i32,
    /// Vertical coordinate.
    pub y: i32,
    /// North-south coordinate.
    pub z: i32,
}

impl BlockPos {
    /// Create a new block position.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Origin position (0, 0, 0).
    pub const ZERO: Self = Self::new(0, 0, 0);

    /// Offset this position by the given deltas.
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

impl From<(i32, i32, i32)> for BlockPos {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_total_and_stable() {
        let a = BlockPos::new(0, 64, 0);
        let b = BlockPos::new(0, 64, 1);
        let c = BlockPos::new(1, 0, 0);
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn offset_adds_componentwise() {
        assert_eq!(BlockPos::ZERO.offset(1, -2, 3), BlockPos::new(1, -2, 3));
    }
}
