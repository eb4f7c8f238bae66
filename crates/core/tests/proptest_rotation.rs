//! Property-based tests for the rotation functions.
//!
//! Critical invariants:
//! - Rotating by an axis-aligned rotation and then by its inverse is the
//!   identity on directions, axes, and rail shapes.
//! - The rotation functions are deterministic.
//! - Cardinal directions always land on cardinal directions.

use portalveil_core::{
    rotate_axis, rotate_direction, rotate_rail_shape, Axis, Direction, RailShape, Rotation,
};
use proptest::prelude::*;

/// An arbitrary axis-aligned rotation: a short composition of quarter
/// turns about arbitrary axes.
fn axis_aligned_rotation() -> impl Strategy<Value = Rotation> {
    prop::collection::vec((0usize..3, 0i32..4), 0..6).prop_map(|turns| {
        turns
            .into_iter()
            .fold(Rotation::IDENTITY, |acc, (axis, count)| {
                acc.then(Rotation::quarter_turns(Axis::ALL[axis], count))
            })
    })
}

fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

fn any_cardinal() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::CARDINALS.to_vec())
}

fn any_rail_shape() -> impl Strategy<Value = RailShape> {
    prop::sample::select(RailShape::ALL.to_vec())
}

proptest! {
    /// Property: rotating a direction and rotating back is the identity.
    #[test]
    fn direction_round_trips_through_inverse(
        dir in any_direction(),
        rotation in axis_aligned_rotation(),
    ) {
        if let Some(rotated) = rotate_direction(dir, &rotation) {
            prop_assert_eq!(
                rotate_direction(rotated, &rotation.inverse()),
                Some(dir)
            );
        }
    }

    /// Property: cardinals always snap, and always onto another cardinal.
    #[test]
    fn cardinals_stay_cardinal(
        dir in any_cardinal(),
        rotation in axis_aligned_rotation(),
    ) {
        let rotated = rotate_direction(dir, &rotation);
        prop_assert!(rotated.is_some());
        prop_assert!(rotated.unwrap().is_cardinal());
    }

    /// Property: axes always resolve under axis-aligned rotations and
    /// round-trip through the inverse.
    #[test]
    fn axis_round_trips_through_inverse(
        axis in prop::sample::select(Axis::ALL.to_vec()),
        rotation in axis_aligned_rotation(),
    ) {
        let rotated = rotate_axis(axis, &rotation);
        prop_assert!(rotated.is_some());
        prop_assert_eq!(rotate_axis(rotated.unwrap(), &rotation.inverse()), Some(axis));
    }

    /// Property: rail shapes round-trip whenever both hops are defined.
    #[test]
    fn rail_shape_round_trips_through_inverse(
        shape in any_rail_shape(),
        rotation in axis_aligned_rotation(),
    ) {
        if let Some(rotated) = rotate_rail_shape(shape, &rotation) {
            prop_assert_eq!(
                rotate_rail_shape(rotated, &rotation.inverse()),
                Some(shape)
            );
        }
    }

    /// Property: same input, same output. The functions hold no state.
    #[test]
    fn rotation_functions_are_deterministic(
        dir in any_direction(),
        rotation in axis_aligned_rotation(),
    ) {
        prop_assert_eq!(
            rotate_direction(dir, &rotation),
            rotate_direction(dir, &rotation)
        );
    }
}
