//! Optional view correction: nudges the camera back toward facing the world origin whenever it
//! drifts too far off-axis. Disabled by default; the free-fly experience is deliberately
//! unconstrained, but graph-heavy scenes can enable this to keep the node cloud on screen.

use bevy_math::prelude::*;
use bevy_reflect::prelude::*;
use bevy_transform::prelude::*;

/// Settings for the view-correction step. Runs between input motion and boundary enforcement,
/// only while the rig is unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct ViewCorrection {
    /// Whether the correction runs at all.
    pub enabled: bool,
    /// Angular deviation from "looking at the origin", in radians, above which correction kicks
    /// in. The correction strength scales with how far past the threshold the deviation is.
    pub threshold: f32,
}

impl Default for ViewCorrection {
    fn default() -> Self {
        Self {
            enabled: false,
            threshold: 50f32.to_radians(),
        }
    }
}

/// Slerp the orientation back toward looking at the origin when the deviation exceeds
/// `threshold`. The slerp parameter is `1 - threshold / deviation`, so a camera exactly at the
/// threshold is untouched and correction strengthens the further it has drifted.
pub fn apply(transform: &mut Transform, threshold: f32) {
    let Ok(toward_origin) = Dir3::new(-transform.translation) else {
        // Sitting on the origin, every direction "faces" it.
        return;
    };
    let baseline = Transform::default()
        .looking_to(toward_origin, Vec3::Y)
        .rotation;
    let deviation = transform.rotation.angle_between(baseline);
    if deviation > threshold {
        let t = 1.0 - threshold / deviation;
        transform.rotation = transform.rotation.slerp(baseline, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn deviation_from_origin(transform: &Transform) -> f32 {
        let toward_origin = Dir3::new(-transform.translation).unwrap();
        let baseline = Transform::default()
            .looking_to(toward_origin, Vec3::Y)
            .rotation;
        transform.rotation.angle_between(baseline)
    }

    #[test]
    fn below_threshold_is_untouched() {
        let mut transform =
            Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        transform.rotate_y(10f32.to_radians());
        let before = transform.rotation;
        apply(&mut transform, 50f32.to_radians());
        assert_eq!(transform.rotation, before);
    }

    #[test]
    fn above_threshold_is_pulled_back() {
        let threshold = 30f32.to_radians();
        let mut transform =
            Transform::from_xyz(0.0, 0.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y);
        transform.rotate_y(90f32.to_radians());
        let before = deviation_from_origin(&transform);
        apply(&mut transform, threshold);
        let after = deviation_from_origin(&transform);
        assert!(after < before, "deviation did not shrink: {after} >= {before}");
        // The correction lands back on the threshold.
        assert_relative_eq!(after, threshold, epsilon = 1e-3);
    }

    #[test]
    fn origin_position_is_a_noop() {
        let mut transform = Transform::default();
        transform.rotate_y(2.0);
        let before = transform.rotation;
        apply(&mut transform, 0.1);
        assert_eq!(transform.rotation, before);
    }
}
