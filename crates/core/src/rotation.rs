//! The portal rotation transform and the three rotation functions.
//!
//! Portals only ever relate coordinate frames by axis-aligned rotations,
//! so every matrix built here has exact 0/±1 entries and rotating any
//! cardinal direction lands exactly on another cardinal direction.

use crate::{Axis, Direction, RailShape};
use glam::{Mat3, Vec3};

/// How close a rotated unit vector must be to an enumerated direction to
/// snap to it. Axis-aligned rotations land exactly on enumeration values;
/// anything further off than this is a transform we refuse to discretize.
const SNAP_TOLERANCE: f32 = 1e-4;

/// An invertible axis-aligned rotation with an optional translation.
///
/// The translation is carried for point mapping between portal frames; the
/// orientation functions below only use the rotation part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    matrix: Mat3,
    translation: Vec3,
}

impl Rotation {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        matrix: Mat3::IDENTITY,
        translation: Vec3::ZERO,
    };

    /// Build from an explicit rotation matrix.
    pub const fn from_matrix(matrix: Mat3) -> Self {
        Self {
            matrix,
            translation: Vec3::ZERO,
        }
    }

    /// A rotation of `turns` quarter turns about `axis`.
    ///
    /// Positive turns rotate north toward east about Y, up toward north
    /// about X, and up toward east about Z. Negative and out-of-range
    /// counts wrap modulo four.
    pub fn quarter_turns(axis: Axis, turns: i32) -> Self {
        // Exact 0/±1 generator matrices, one quarter turn each.
        let generator = match axis {
            Axis::X => Mat3::from_cols(
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -1.0),
                Vec3::new(0.0, 1.0, 0.0),
            ),
            Axis::Y => Mat3::from_cols(
                Vec3::new(0.0, 0.0, 1.0),
                Vec3::new(0.0, 1.0, 0.0),
                Vec3::new(-1.0, 0.0, 0.0),
            ),
            Axis::Z => Mat3::from_cols(
                Vec3::new(0.0, -1.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, 1.0),
            ),
        };

        let mut matrix = Mat3::IDENTITY;
        for _ in 0..turns.rem_euclid(4) {
            matrix = generator * matrix;
        }
        Self::from_matrix(matrix)
    }

    /// Attach a translation, applied after the rotation.
    pub fn with_translation(self, translation: Vec3) -> Self {
        Self {
            translation,
            ..self
        }
    }

    /// The transform applying `self` first, then `next`.
    pub fn then(self, next: Rotation) -> Self {
        Self {
            matrix: next.matrix * self.matrix,
            translation: next.matrix * self.translation + next.translation,
        }
    }

    /// The inverse transform. Rotation matrices here are orthonormal, so
    /// the inverse rotation is the transpose.
    pub fn inverse(self) -> Self {
        let inv = self.matrix.transpose();
        Self {
            matrix: inv,
            translation: -(inv * self.translation),
        }
    }

    /// Rotate a direction vector (translation ignored).
    pub fn transform_vector(self, v: Vec3) -> Vec3 {
        self.matrix * v
    }

    /// Map a point into the destination frame.
    pub fn transform_point(self, p: Vec3) -> Vec3 {
        self.matrix * p + self.translation
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Rotate a direction, snapping the result back onto the enumeration.
///
/// Returns `None` when no enumerated direction is within tolerance of the
/// rotated vector. Valid portal transforms never produce that, but the
/// check keeps a bad matrix from silently mis-orienting a block.
pub fn rotate_direction(direction: Direction, rotation: &Rotation) -> Option<Direction> {
    let rotated = rotation.transform_vector(direction.unit_vector());

    let mut best: Option<(Direction, f32)> = None;
    for candidate in Direction::ALL {
        let dot = rotated.dot(candidate.unit_vector());
        if best.map_or(true, |(_, d)| dot > d) {
            best = Some((candidate, dot));
        }
    }

    match best {
        Some((dir, dot)) if dot >= 1.0 - SNAP_TOLERANCE => Some(dir),
        _ => None,
    }
}

/// Rotate an axis through the transform's basis vectors.
///
/// Returns `None` only when the transform is degenerate and maps the axis
/// onto nothing axis-aligned.
pub fn rotate_axis(axis: Axis, rotation: &Rotation) -> Option<Axis> {
    let rotated = rotation.transform_vector(axis.unit_vector());

    let mut best: Option<(Axis, f32)> = None;
    for candidate in Axis::ALL {
        let dot = rotated.dot(candidate.unit_vector()).abs();
        if best.map_or(true, |(_, d)| dot > d) {
            best = Some((candidate, dot));
        }
    }

    match best {
        Some((axis, dot)) if dot >= 1.0 - SNAP_TOLERANCE => Some(axis),
        _ => None,
    }
}

/// Rotate a rail shape by rotating both of its constituent directions.
///
/// Returns `None` when the rotated pair corresponds to no valid shape,
/// e.g. an ascending rail rotated to slope downward.
pub fn rotate_rail_shape(shape: RailShape, rotation: &Rotation) -> Option<RailShape> {
    let (a, b) = shape.directions();
    let a = rotate_direction(a, rotation)?;
    let b = rotate_direction(b, rotation)?;
    RailShape::from_directions(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_turn_about_y_cycles_the_compass() {
        let r = Rotation::quarter_turns(Axis::Y, 1);
        assert_eq!(rotate_direction(Direction::North, &r), Some(Direction::East));
        assert_eq!(rotate_direction(Direction::East, &r), Some(Direction::South));
        assert_eq!(rotate_direction(Direction::South, &r), Some(Direction::West));
        assert_eq!(rotate_direction(Direction::West, &r), Some(Direction::North));
        assert_eq!(rotate_direction(Direction::Up, &r), Some(Direction::Up));
    }

    #[test]
    fn quarter_turn_preserves_intercardinals() {
        let r = Rotation::quarter_turns(Axis::Y, 1);
        assert_eq!(
            rotate_direction(Direction::NorthEast, &r),
            Some(Direction::SouthEast)
        );
        assert_eq!(
            rotate_direction(Direction::NorthNorthEast, &r),
            Some(Direction::EastSouthEast)
        );
    }

    #[test]
    fn four_quarter_turns_are_the_identity() {
        let r = Rotation::quarter_turns(Axis::Y, 4);
        assert_eq!(r, Rotation::IDENTITY);
        assert_eq!(
            Rotation::quarter_turns(Axis::X, -1),
            Rotation::quarter_turns(Axis::X, 3)
        );
    }

    #[test]
    fn non_axis_aligned_rotation_refuses_to_snap() {
        // 45 degrees about X lands nothing from the vertical plane on the
        // enumeration (the intermediate directions are all horizontal).
        let half = std::f32::consts::FRAC_PI_4;
        let r = Rotation::from_matrix(Mat3::from_rotation_x(half));
        assert_eq!(rotate_direction(Direction::Up, &r), None);
    }

    #[test]
    fn axis_rotation_maps_between_axes() {
        let r = Rotation::quarter_turns(Axis::X, 1);
        assert_eq!(rotate_axis(Axis::Y, &r), Some(Axis::Z));
        assert_eq!(rotate_axis(Axis::Z, &r), Some(Axis::Y));
        assert_eq!(rotate_axis(Axis::X, &r), Some(Axis::X));
    }

    #[test]
    fn rail_shapes_rotate_as_pairs() {
        let r = Rotation::quarter_turns(Axis::Y, 1);
        assert_eq!(
            rotate_rail_shape(RailShape::NorthSouth, &r),
            Some(RailShape::EastWest)
        );
        assert_eq!(
            rotate_rail_shape(RailShape::AscendingEast, &r),
            Some(RailShape::AscendingSouth)
        );
        assert_eq!(
            rotate_rail_shape(RailShape::NorthEast, &r),
            Some(RailShape::SouthEast)
        );
    }

    #[test]
    fn ascending_rail_tilted_downward_names_no_shape() {
        // Two quarter turns about X point the ascending end down.
        let r = Rotation::quarter_turns(Axis::X, 2);
        assert_eq!(rotate_rail_shape(RailShape::AscendingNorth, &r), None);
    }

    #[test]
    fn translation_affects_points_but_not_vectors() {
        let r = Rotation::quarter_turns(Axis::Y, 1).with_translation(Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(r.transform_vector(Vec3::Z), Vec3::new(-1.0, 0.0, 0.0));
        assert_eq!(r.transform_point(Vec3::ZERO), Vec3::new(10.0, 0.0, 0.0));

        let back = r.inverse();
        assert_eq!(back.transform_point(r.transform_point(Vec3::ONE)), Vec3::ONE);
    }
}
