//! Block-face directions, matching the host enumeration used by
//! freely-rotatable blocks (signs, banners) as well as the axis-aligned
//! six used by everything else.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A block-face direction.
///
/// Covers the six cardinals, the four horizontal intercardinals, and the
/// eight secondary intercardinals. Coordinate convention follows the host:
/// north is -Z, south is +Z, east is +X, west is -X, up is +Y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Direction {
    /// -Z
    North,
    /// +X
    East,
    /// +Z
    South,
    /// -X
    West,
    /// +Y
    Up,
    /// -Y
    Down,
    /// +X -Z
    NorthEast,
    /// -X -Z
    NorthWest,
    /// +X +Z
    SouthEast,
    /// -X +Z
    SouthWest,
    /// Mostly west, slightly north.
    WestNorthWest,
    /// Mostly north, slightly west.
    NorthNorthWest,
    /// Mostly north, slightly east.
    NorthNorthEast,
    /// Mostly east, slightly north.
    EastNorthEast,
    /// Mostly east, slightly south.
    EastSouthEast,
    /// Mostly south, slightly east.
    SouthSouthEast,
    /// Mostly south, slightly west.
    SouthSouthWest,
    /// Mostly west, slightly south.
    WestSouthWest,
}

impl Direction {
    /// Every direction, in discriminant order.
    pub const ALL: [Direction; 18] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::WestNorthWest,
        Direction::NorthNorthWest,
        Direction::NorthNorthEast,
        Direction::EastNorthEast,
        Direction::EastSouthEast,
        Direction::SouthSouthEast,
        Direction::SouthSouthWest,
        Direction::WestSouthWest,
    ];

    /// The six axis-aligned directions.
    pub const CARDINALS: [Direction; 6] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
        Direction::Up,
        Direction::Down,
    ];

    /// Integer offset of this direction, before normalization.
    ///
    /// Secondary intercardinals use the host's 1:2 component ratio.
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Direction::North => (0, 0, -1),
            Direction::East => (1, 0, 0),
            Direction::South => (0, 0, 1),
            Direction::West => (-1, 0, 0),
            Direction::Up => (0, 1, 0),
            Direction::Down => (0, -1, 0),
            Direction::NorthEast => (1, 0, -1),
            Direction::NorthWest => (-1, 0, -1),
            Direction::SouthEast => (1, 0, 1),
            Direction::SouthWest => (-1, 0, 1),
            Direction::WestNorthWest => (-2, 0, -1),
            Direction::NorthNorthWest => (-1, 0, -2),
            Direction::NorthNorthEast => (1, 0, -2),
            Direction::EastNorthEast => (2, 0, -1),
            Direction::EastSouthEast => (2, 0, 1),
            Direction::SouthSouthEast => (1, 0, 2),
            Direction::SouthSouthWest => (-1, 0, 2),
            Direction::WestSouthWest => (-2, 0, 1),
        }
    }

    /// Unit vector pointing along this direction.
    pub fn unit_vector(self) -> Vec3 {
        let (x, y, z) = self.offset();
        Vec3::new(x as f32, y as f32, z as f32).normalize()
    }

    /// The direction pointing the opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
            Direction::WestNorthWest => Direction::EastSouthEast,
            Direction::NorthNorthWest => Direction::SouthSouthEast,
            Direction::NorthNorthEast => Direction::SouthSouthWest,
            Direction::EastNorthEast => Direction::WestSouthWest,
            Direction::EastSouthEast => Direction::WestNorthWest,
            Direction::SouthSouthEast => Direction::NorthNorthWest,
            Direction::SouthSouthWest => Direction::NorthNorthEast,
            Direction::WestSouthWest => Direction::EastNorthEast,
        }
    }

    /// Whether this is one of the six axis-aligned directions.
    pub fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North
                | Direction::East
                | Direction::South
                | Direction::West
                | Direction::Up
                | Direction::Down
        )
    }
}
