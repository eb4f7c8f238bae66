//! Property-based tests for the orientation transformer.
//!
//! Critical invariants:
//! - The output is always legal for the block: a directional facing never
//!   leaves its allowed set, an axis never leaves its allowed set, a rail
//!   shape never leaves its allowed set.
//! - Whenever the rotation cannot be applied legally, the output equals
//!   the input unchanged.
//! - A fixed orientation is a fixed point of every transform.

use portalveil_core::{Axis, Direction, RailShape, Rotation};
use portalveil_world::{
    rotate_orientation, AllowAll, AxisSet, DirectionSet, OrientationState, RailShapeSet,
};
use proptest::prelude::*;

fn axis_aligned_rotation() -> impl Strategy<Value = Rotation> {
    prop::collection::vec((0usize..3, 0i32..4), 0..6).prop_map(|turns| {
        turns
            .into_iter()
            .fold(Rotation::IDENTITY, |acc, (axis, count)| {
                acc.then(Rotation::quarter_turns(Axis::ALL[axis], count))
            })
    })
}

fn direction_set() -> impl Strategy<Value = DirectionSet> {
    (1u32..(1 << 18)).prop_map(DirectionSet::from_bits_truncate)
}

proptest! {
    /// Property: a directional facing never escapes its allowed set, and
    /// an inapplicable rotation leaves the state untouched.
    #[test]
    fn directional_never_leaves_allowed_set(
        facing in prop::sample::select(Direction::ALL.to_vec()),
        allowed in direction_set(),
        rotation in axis_aligned_rotation(),
    ) {
        let allowed = allowed | DirectionSet::of(facing);
        let state = OrientationState::Directional { facing, allowed };
        let rotated = rotate_orientation(&rotation, &state, &AllowAll);

        match rotated {
            OrientationState::Directional { facing: f, allowed: a } => {
                prop_assert_eq!(a, allowed);
                prop_assert!(allowed.allows(f));
                if f != facing {
                    // A change only happens when the rotated face is legal.
                    prop_assert!(allowed.allows(f));
                } else {
                    prop_assert_eq!(rotated, state);
                }
            }
            other => prop_assert!(false, "variant changed: {:?}", other),
        }
    }

    /// Property: orientable axes never escape their allowed set.
    #[test]
    fn orientable_never_leaves_allowed_set(
        axis in prop::sample::select(Axis::ALL.to_vec()),
        bits in 1u8..8,
        rotation in axis_aligned_rotation(),
    ) {
        let allowed = AxisSet::from_bits_truncate(bits) | AxisSet::of(axis);
        let state = OrientationState::Orientable { axis, allowed };
        match rotate_orientation(&rotation, &state, &AllowAll) {
            OrientationState::Orientable { axis: a, allowed: s } => {
                prop_assert_eq!(s, allowed);
                prop_assert!(allowed.allows(a));
            }
            other => prop_assert!(false, "variant changed: {:?}", other),
        }
    }

    /// Property: rail shapes never escape their allowed set.
    #[test]
    fn rail_never_leaves_allowed_set(
        shape in prop::sample::select(RailShape::ALL.to_vec()),
        bits in 1u16..(1 << 10),
        rotation in axis_aligned_rotation(),
    ) {
        let allowed = RailShapeSet::from_bits_truncate(bits) | RailShapeSet::of(shape);
        let state = OrientationState::Rail { shape, allowed };
        match rotate_orientation(&rotation, &state, &AllowAll) {
            OrientationState::Rail { shape: s, allowed: a } => {
                prop_assert_eq!(a, allowed);
                prop_assert!(allowed.allows(s));
            }
            other => prop_assert!(false, "variant changed: {:?}", other),
        }
    }

    /// Property: fixed blocks are never rotated by any transform.
    #[test]
    fn fixed_is_a_fixed_point(rotation in axis_aligned_rotation()) {
        prop_assert_eq!(
            rotate_orientation(&rotation, &OrientationState::Fixed, &AllowAll),
            OrientationState::Fixed
        );
    }
}
