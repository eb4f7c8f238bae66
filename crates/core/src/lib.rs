#![warn(missing_docs)]
//! Pure geometry shared across the workspace: directions, axes, rail
//! shapes, block positions, and the axis-aligned rotation transform used
//! to map orientation values between the two sides of a portal.

mod axis;
mod direction;
mod position;
mod rail;
mod rotation;

pub use axis::Axis;
pub use direction::Direction;
pub use position::BlockPos;
pub use rail::RailShape;
pub use rotation::{rotate_axis, rotate_direction, rotate_rail_shape, Rotation};
