//! The block orientation transformer.
//!
//! Rotates one block's orientation through a portal transform. The
//! function is total: whenever a rotation would land outside the block's
//! legal values it degrades to "no change", so callers may apply the
//! result unconditionally without re-validating.

use crate::{FacingRule, OrientationState};
use portalveil_core::{rotate_axis, rotate_direction, rotate_rail_shape, Rotation};

/// Rotate an orientation state, never producing an invalid one.
///
/// Dispatch order is fixed (rotatable, directional, orientable, rail,
/// fixed) and mirrors the host's capability priority for blocks that
/// expose more than one.
pub fn rotate_orientation(
    rotation: &Rotation,
    state: &OrientationState,
    rule: &dyn FacingRule,
) -> OrientationState {
    match *state {
        OrientationState::Rotatable { facing } => {
            match rotate_direction(facing, rotation) {
                // The host may still refuse the rotated facing; keep the
                // original rather than break the block.
                Some(rotated) if rule.permits(rotated).is_ok() => {
                    OrientationState::Rotatable { facing: rotated }
                }
                _ => *state,
            }
        }
        OrientationState::Directional { facing, allowed } => {
            match rotate_direction(facing, rotation) {
                Some(rotated) if allowed.allows(rotated) => OrientationState::Directional {
                    facing: rotated,
                    allowed,
                },
                _ => *state,
            }
        }
        OrientationState::Orientable { axis, allowed } => match rotate_axis(axis, rotation) {
            Some(rotated) if allowed.allows(rotated) => OrientationState::Orientable {
                axis: rotated,
                allowed,
            },
            _ => *state,
        },
        OrientationState::Rail { shape, allowed } => match rotate_rail_shape(shape, rotation) {
            Some(rotated) if allowed.allows(rotated) => OrientationState::Rail {
                shape: rotated,
                allowed,
            },
            _ => *state,
        },
        OrientationState::Fixed => OrientationState::Fixed,
    }
}
