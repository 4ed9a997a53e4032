//! Auto-framing target acquisition: computing a camera destination pose from one or two world
//! points, and the ECS events game code uses to request it.

use bevy_ecs::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;
use bevy_transform::prelude::*;
use rand::Rng;

use super::component::FocusCam;

/// A camera destination: where the rig should come to rest and which way it should face.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct PoseTarget {
    /// Destination position in world space.
    pub position: Vec3,
    /// Destination orientation.
    pub rotation: Quat,
}

impl Default for PoseTarget {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

/// Frame a single point from a randomized-azimuth standoff.
///
/// `azimuth` picks where on the circle around `point` the camera lands: the camera is offset
/// along `azimuth × up`, at `standoff` distance, looking back at the point. Returns `None` when
/// `azimuth` is parallel to `up` (no usable orbit direction); callers decide whether to resample
/// or keep their previous target.
pub fn single_point_target(
    point: Vec3,
    azimuth: Vec3,
    up: Vec3,
    standoff: f32,
) -> Option<PoseTarget> {
    let offset_dir = azimuth.cross(up).try_normalize()?;
    Some(PoseTarget {
        position: point + offset_dir * standoff,
        rotation: Transform::default().looking_to(-offset_dir, up).rotation,
    })
}

/// Frame two points at once, viewed side-on from a standoff that scales with their separation.
///
/// The camera lands on the line through the pair's midpoint, perpendicular to the pair's own
/// axis, at `standoff * |b - midpoint|`, so wider-apart pairs are framed from proportionally
/// farther back and both stay in view without touching the field of view. The up hint keeps the
/// pair's axis horizontal on screen.
///
/// Returns `None` for degenerate pairs: coincident points, or a pair axis parallel to `up`,
/// both of which leave the viewing direction undefined.
pub fn two_point_target(a: Vec3, b: Vec3, up: Vec3, standoff: f32) -> Option<PoseTarget> {
    let midpoint = (a + b) / 2.0;
    let half_axis = b - midpoint;
    let view_axis = half_axis.cross(up);
    let offset_dir = view_axis.try_normalize()?;
    Some(PoseTarget {
        position: midpoint + offset_dir * standoff * half_axis.length(),
        rotation: Transform::default()
            .looking_to(-offset_dir, view_axis.cross(half_axis).normalize())
            .rotation,
    })
}

/// Uniform sample on the unit sphere, used as the azimuth seed for single-point framing.
pub fn random_azimuth(rng: &mut impl Rng) -> Vec3 {
    let z: f32 = rng.gen_range(-1.0..=1.0);
    let theta: f32 = rng.gen_range(0.0..std::f32::consts::TAU);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * theta.cos(), z, r * theta.sin())
}

/// Send this to frame a single point of interest. Retargets the rig without engaging the focus
/// lock; the destination only takes effect if something else locks the rig, or when a host reads
/// the target directly.
#[derive(Debug, Event)]
pub struct FocusSingle {
    /// The camera to retarget.
    pub camera: Entity,
    /// The point of interest.
    pub point: Vec3,
}

/// Send this to frame a pair of points of interest (attacker and defender, endpoints of an edge).
/// Engages the focus lock, unless auto-focus is disabled on the rig.
#[derive(Debug, Event)]
pub struct FocusPair {
    /// The camera to retarget.
    pub camera: Entity,
    /// First point of the pair.
    pub a: Vec3,
    /// Second point of the pair.
    pub b: Vec3,
}

/// Applies [`FocusSingle`] and [`FocusPair`] requests to their target rigs.
pub fn receive_focus_requests(
    mut singles: EventReader<FocusSingle>,
    mut pairs: EventReader<FocusPair>,
    mut rigs: Query<&mut FocusCam>,
) {
    for event in singles.read() {
        let Ok(mut rig) = rigs.get_mut(event.camera) else {
            continue;
        };
        rig.request_single_focus(event.point);
    }
    for event in pairs.read() {
        let Ok(mut rig) = rigs.get_mut(event.camera) else {
            continue;
        };
        rig.request_two_point_focus(event.a, event.b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn two_point_framing_is_symmetric_up_to_mirroring() {
        let a = Vec3::new(-4.0, 1.0, 2.0);
        let b = Vec3::new(6.0, 1.0, -2.0);
        let ab = two_point_target(a, b, Vec3::Y, 10.0).unwrap();
        let ba = two_point_target(b, a, Vec3::Y, 10.0).unwrap();

        let midpoint = (a + b) / 2.0;
        // Both placements sit on the same line through the midpoint, mirrored across it.
        assert_relative_eq!(
            (ab.position - midpoint).length(),
            (ba.position - midpoint).length(),
            epsilon = 1e-4
        );
        assert!((ab.position - midpoint).abs_diff_eq(midpoint - ba.position, 1e-4));
    }

    #[test]
    fn two_point_standoff_scales_with_separation() {
        let near = two_point_target(Vec3::ZERO, Vec3::X * 2.0, Vec3::Y, 10.0).unwrap();
        let far = two_point_target(Vec3::ZERO, Vec3::X * 8.0, Vec3::Y, 10.0).unwrap();
        let near_dist = (near.position - Vec3::X).length();
        let far_dist = (far.position - Vec3::X * 4.0).length();
        assert_relative_eq!(near_dist, 10.0, epsilon = 1e-4);
        assert_relative_eq!(far_dist, 40.0, epsilon = 1e-4);
    }

    #[test]
    fn two_point_camera_faces_the_midpoint() {
        let a = Vec3::new(0.0, 0.0, -5.0);
        let b = Vec3::new(0.0, 0.0, 5.0);
        let target = two_point_target(a, b, Vec3::Y, 1.0).unwrap();
        let midpoint = (a + b) / 2.0;
        let to_midpoint = (midpoint - target.position).normalize();
        let forward = target.rotation * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq(to_midpoint, 1e-4), "forward = {forward}");
    }

    #[test]
    fn coincident_points_are_rejected() {
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(two_point_target(p, p, Vec3::Y, 10.0).is_none());
    }

    #[test]
    fn vertical_pairs_are_rejected() {
        // Pair axis parallel to up leaves no side-on viewing direction.
        assert!(two_point_target(Vec3::ZERO, Vec3::Y * 4.0, Vec3::Y, 10.0).is_none());
    }

    #[test]
    fn single_point_standoff_is_exact() {
        let point = Vec3::new(3.0, 0.0, -7.0);
        let target = single_point_target(point, Vec3::X, Vec3::Y, 10.0).unwrap();
        assert_relative_eq!((target.position - point).length(), 10.0, epsilon = 1e-4);
        // Looks back toward the point.
        let forward = target.rotation * Vec3::NEG_Z;
        assert!(forward.abs_diff_eq((point - target.position).normalize(), 1e-4));
    }

    #[test]
    fn single_point_rejects_azimuth_parallel_to_up() {
        assert!(single_point_target(Vec3::ZERO, Vec3::Y, Vec3::Y, 10.0).is_none());
    }

    #[test]
    fn random_azimuth_is_unit_length() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_relative_eq!(random_azimuth(&mut rng).length(), 1.0, epsilon = 1e-4);
        }
    }
}
