//! Collaborator traits at the world boundary.
//!
//! The engine never talks to the host directly; it reads and writes block
//! snapshots through these traits, and treats a host rejection as a benign
//! "leave the block unrotated" signal rather than an error.

use crate::{BlockSnapshot, OrientationState};
use portalveil_core::{BlockPos, Direction};
use thiserror::Error;

/// A snapshot the host refused to accept.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("host rejected orientation {rejected:?}")]
pub struct IllegalOrientation {
    /// The orientation that was refused.
    pub rejected: OrientationState,
}

/// Host legality check for freely-rotatable facings.
///
/// Rotatable blocks advertise no allowed-set; the only way to learn that a
/// facing is illegal is to try it and have the host refuse. The rotator
/// consults this before committing a rotated facing.
pub trait FacingRule {
    /// Check whether this facing would be accepted.
    fn permits(&self, facing: Direction) -> Result<(), IllegalOrientation>;
}

/// A rule that accepts every facing. The common case for hosts whose
/// rotatable blocks really do rotate anywhere.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl FacingRule for AllowAll {
    fn permits(&self, _facing: Direction) -> Result<(), IllegalOrientation> {
        Ok(())
    }
}

/// Read and write access to block snapshots.
pub trait WorldAccess {
    /// Snapshot of the block at `pos`.
    fn snapshot(&self, pos: BlockPos) -> BlockSnapshot;

    /// Apply a snapshot at `pos`. The host may reject it as illegal.
    fn apply(&mut self, pos: BlockPos, snapshot: BlockSnapshot)
        -> Result<(), IllegalOrientation>;
}
