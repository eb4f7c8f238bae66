#![warn(missing_docs)]
//! Block orientation model: the capability snapshot a block position
//! exposes, the legal-subset sets, and the transformer that rotates an
//! orientation without ever producing an invalid state.

mod access;
mod orientation;
mod rotator;

pub use access::{AllowAll, FacingRule, IllegalOrientation, WorldAccess};
pub use orientation::{
    AxisSet, BlockId, BlockSnapshot, DirectionSet, OrientationState, RailShapeSet,
};
pub use rotator::rotate_orientation;
