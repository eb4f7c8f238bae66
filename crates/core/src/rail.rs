//! Rail connection shapes.
//!
//! Every shape encodes a pair of directions: the two ends of a straight or
//! curved piece, or a horizontal direction plus [`Direction::Up`] for
//! ascending pieces. Rotation works by decomposing into that pair,
//! rotating both halves, and re-encoding.

use crate::Direction;
use serde::{Deserialize, Serialize};

/// The connection shape of a rail block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RailShape {
    /// Straight, running north-south.
    NorthSouth,
    /// Straight, running east-west.
    EastWest,
    /// Sloped upward toward the east.
    AscendingEast,
    /// Sloped upward toward the west.
    AscendingWest,
    /// Sloped upward toward the north.
    AscendingNorth,
    /// Sloped upward toward the south.
    AscendingSouth,
    /// Curve joining the south and east sides.
    SouthEast,
    /// Curve joining the south and west sides.
    SouthWest,
    /// Curve joining the north and west sides.
    NorthWest,
    /// Curve joining the north and east sides.
    NorthEast,
}

impl RailShape {
    /// Every shape, in discriminant order.
    pub const ALL: [RailShape; 10] = [
        RailShape::NorthSouth,
        RailShape::EastWest,
        RailShape::AscendingEast,
        RailShape::AscendingWest,
        RailShape::AscendingNorth,
        RailShape::AscendingSouth,
        RailShape::SouthEast,
        RailShape::SouthWest,
        RailShape::NorthWest,
        RailShape::NorthEast,
    ];

    /// The pair of directions this shape connects.
    ///
    /// Ascending shapes report their horizontal direction plus `Up`.
    pub const fn directions(self) -> (Direction, Direction) {
        match self {
            RailShape::NorthSouth => (Direction::North, Direction::South),
            RailShape::EastWest => (Direction::East, Direction::West),
            RailShape::AscendingEast => (Direction::East, Direction::Up),
            RailShape::AscendingWest => (Direction::West, Direction::Up),
            RailShape::AscendingNorth => (Direction::North, Direction::Up),
            RailShape::AscendingSouth => (Direction::South, Direction::Up),
            RailShape::SouthEast => (Direction::South, Direction::East),
            RailShape::SouthWest => (Direction::South, Direction::West),
            RailShape::NorthWest => (Direction::North, Direction::West),
            RailShape::NorthEast => (Direction::North, Direction::East),
        }
    }

    /// Re-encode a direction pair as a shape, in either order.
    ///
    /// Returns `None` when the pair names no valid shape (for example a
    /// rotation that tilted an ascending piece downward).
    pub fn from_directions(a: Direction, b: Direction) -> Option<RailShape> {
        RailShape::ALL.into_iter().find(|shape| {
            let (x, y) = shape.directions();
            (x, y) == (a, b) || (x, y) == (b, a)
        })
    }
}
