#![warn(missing_docs)]
//! Portal illusion state engine.
//!
//! Players looking through a portal surface see a live, geometrically
//! transformed view of a distant region of the world without being
//! teleported there. This crate keeps that illusion consistent: it rotates
//! block orientation state so faked blocks still render validly, tracks
//! per-player which positions and entities are currently faked so every
//! change is applied exactly once and reverted exactly once, and batches
//! the resulting client updates.
//!
//! The host engine's world/event API, packet transport, and configuration
//! are collaborators behind narrow traits; this crate owns none of them.

mod engine;
mod session;

pub use engine::IllusionEngine;
pub use session::{PortalViewSession, ViewedBlockInfo};

pub use portalveil_core::{
    rotate_axis, rotate_direction, rotate_rail_shape, Axis, BlockPos, Direction, RailShape,
    Rotation,
};
pub use portalveil_view::{
    BlockChangeBatch, BlockChangeMessage, EntityAccess, EntityId, EntityTransform, GhostEntity,
    GhostSynthesizer, HostVersion, InitError, PlayerId, PlayerViewState, SpawnDescriptor,
    SpawnStrategy, TrackerEntry, Transport, WatcherSnapshot, WatcherValue, YawSource,
};
pub use portalveil_world::{
    rotate_orientation, AllowAll, AxisSet, BlockId, BlockSnapshot, DirectionSet, FacingRule,
    IllegalOrientation, OrientationState, RailShapeSet, WorldAccess,
};
