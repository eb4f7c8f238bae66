//! Orientation capability snapshots.
//!
//! A block position exposes exactly one orientation capability. The
//! boundary adapter that reads host block data produces one
//! [`OrientationState`] per position; when a host block exposes both the
//! directional and orientable capabilities, directional wins. That
//! priority is observable behavior and must not change.

use bitflags::bitflags;
use portalveil_core::{Axis, Direction, RailShape};
use serde::{Deserialize, Serialize};

/// Block type identifier.
pub type BlockId = u16;

bitflags! {
    /// The set of facing values a directional block accepts.
    #[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct DirectionSet: u32 {
        /// -Z
        const NORTH = 1 << 0;
        /// +X
        const EAST = 1 << 1;
        /// +Z
        const SOUTH = 1 << 2;
        /// -X
        const WEST = 1 << 3;
        /// +Y
        const UP = 1 << 4;
        /// -Y
        const DOWN = 1 << 5;
        /// +X -Z
        const NORTH_EAST = 1 << 6;
        /// -X -Z
        const NORTH_WEST = 1 << 7;
        /// +X +Z
        const SOUTH_EAST = 1 << 8;
        /// -X +Z
        const SOUTH_WEST = 1 << 9;
        /// Mostly west, slightly north.
        const WEST_NORTH_WEST = 1 << 10;
        /// Mostly north, slightly west.
        const NORTH_NORTH_WEST = 1 << 11;
        /// Mostly north, slightly east.
        const NORTH_NORTH_EAST = 1 << 12;
        /// Mostly east, slightly north.
        const EAST_NORTH_EAST = 1 << 13;
        /// Mostly east, slightly south.
        const EAST_SOUTH_EAST = 1 << 14;
        /// Mostly south, slightly east.
        const SOUTH_SOUTH_EAST = 1 << 15;
        /// Mostly south, slightly west.
        const SOUTH_SOUTH_WEST = 1 << 16;
        /// Mostly west, slightly south.
        const WEST_SOUTH_WEST = 1 << 17;

        /// The four horizontal cardinals (stairs, furnaces, chests).
        const HORIZONTAL = Self::NORTH.bits()
            | Self::EAST.bits()
            | Self::SOUTH.bits()
            | Self::WEST.bits();
        /// All six cardinals (observers, pistons, droppers).
        const CARDINAL = Self::HORIZONTAL.bits() | Self::UP.bits() | Self::DOWN.bits();
    }
}

impl DirectionSet {
    /// The flag for one direction.
    pub fn of(direction: Direction) -> Self {
        Self::from_bits_truncate(1 << direction as u32)
    }

    /// Whether `direction` is a member of this set.
    pub fn allows(self, direction: Direction) -> bool {
        self.contains(Self::of(direction))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, d| acc | Self::of(d))
    }
}

bitflags! {
    /// The set of axes an orientable block accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct AxisSet: u8 {
        /// East-west.
        const X = 1 << 0;
        /// Vertical.
        const Y = 1 << 1;
        /// North-south.
        const Z = 1 << 2;

        /// Horizontal only (nether portal frames).
        const HORIZONTAL = Self::X.bits() | Self::Z.bits();
    }
}

impl AxisSet {
    /// The flag for one axis.
    pub fn of(axis: Axis) -> Self {
        Self::from_bits_truncate(1 << axis as u8)
    }

    /// Whether `axis` is a member of this set.
    pub fn allows(self, axis: Axis) -> bool {
        self.contains(Self::of(axis))
    }
}

bitflags! {
    /// The set of shapes a rail block accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct RailShapeSet: u16 {
        /// Straight north-south.
        const NORTH_SOUTH = 1 << 0;
        /// Straight east-west.
        const EAST_WEST = 1 << 1;
        /// Ascending east.
        const ASCENDING_EAST = 1 << 2;
        /// Ascending west.
        const ASCENDING_WEST = 1 << 3;
        /// Ascending north.
        const ASCENDING_NORTH = 1 << 4;
        /// Ascending south.
        const ASCENDING_SOUTH = 1 << 5;
        /// South-east curve.
        const SOUTH_EAST = 1 << 6;
        /// South-west curve.
        const SOUTH_WEST = 1 << 7;
        /// North-west curve.
        const NORTH_WEST = 1 << 8;
        /// North-east curve.
        const NORTH_EAST = 1 << 9;

        /// Straights and slopes, no curves (powered/detector rails).
        const STRAIGHT = Self::NORTH_SOUTH.bits()
            | Self::EAST_WEST.bits()
            | Self::ASCENDING_EAST.bits()
            | Self::ASCENDING_WEST.bits()
            | Self::ASCENDING_NORTH.bits()
            | Self::ASCENDING_SOUTH.bits();
    }
}

impl RailShapeSet {
    /// The flag for one shape.
    pub fn of(shape: RailShape) -> Self {
        Self::from_bits_truncate(1 << shape as u16)
    }

    /// Whether `shape` is a member of this set.
    pub fn allows(self, shape: RailShape) -> bool {
        self.contains(Self::of(shape))
    }
}

/// The orientation capability a block position exposes, captured once at
/// the world boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationState {
    /// Freely rotatable facing (signs, banners). Legality of a given
    /// facing is only discoverable by attempting it on the host.
    Rotatable {
        /// Current facing.
        facing: Direction,
    },
    /// Facing restricted to a block-specific legal subset.
    Directional {
        /// Current facing.
        facing: Direction,
        /// Facings this block accepts.
        allowed: DirectionSet,
    },
    /// Axis orientation restricted to a legal subset.
    Orientable {
        /// Current axis.
        axis: Axis,
        /// Axes this block accepts.
        allowed: AxisSet,
    },
    /// Rail connection shape restricted to a legal subset.
    Rail {
        /// Current shape.
        shape: RailShape,
        /// Shapes this block accepts.
        allowed: RailShapeSet,
    },
    /// No rotatable orientation; rotation is a no-op.
    Fixed,
}

/// A cloneable snapshot of one block: its type and orientation.
///
/// This is what the world-access collaborator hands out and what the
/// batched client updates carry. Anything beyond the orientation is
/// opaque to the illusion engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSnapshot {
    /// Block type.
    pub id: BlockId,
    /// Orientation capability and current value.
    pub orientation: OrientationState,
}

impl BlockSnapshot {
    /// Snapshot of a block with no rotatable orientation.
    pub const fn fixed(id: BlockId) -> Self {
        Self {
            id,
            orientation: OrientationState::Fixed,
        }
    }
}
