//! Annulus boundary enforcement: the camera may roam between an inner and an outer radius
//! around the world origin.

use bevy_math::prelude::*;
use bevy_reflect::prelude::*;

/// The permitted region for the camera, as an annulus (inner and outer radius) around the origin.
///
/// This is a hard constraint applied after all other motion each frame, not a soft force. Motion
/// that crosses the inner boundary in a single frame snaps to the inner surface; that is accepted
/// behavior.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct WorldBounds {
    /// Maximum distance from the origin.
    pub outer: f32,
    /// Minimum distance from the origin.
    pub inner: f32,
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            outer: 50.0,
            inner: 3.0,
        }
    }
}

impl WorldBounds {
    /// Clamp a position into the annulus. The outer clamp runs first, then the inner push-out, so
    /// a degenerate configuration with `inner > outer` resolves to the inner radius.
    pub fn clamp(&self, position: Vec3) -> Vec3 {
        let position = position.clamp_length_max(self.outer);
        if position.length() < self.inner {
            // A camera sitting exactly on the origin has no direction to push out along.
            position.try_normalize().unwrap_or(Vec3::Z) * self.inner
        } else {
            position
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn clamps_outer_radius() {
        let bounds = WorldBounds {
            outer: 50.0,
            inner: 3.0,
        };
        assert_eq!(bounds.clamp(Vec3::new(0.0, 0.0, 60.0)), Vec3::new(0.0, 0.0, 50.0));
    }

    #[test]
    fn pushes_out_to_inner_radius() {
        let bounds = WorldBounds {
            outer: 50.0,
            inner: 3.0,
        };
        assert_eq!(bounds.clamp(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn in_range_positions_pass_through() {
        let bounds = WorldBounds::default();
        let p = Vec3::new(3.0, 4.0, 0.0); // length 5
        assert_eq!(bounds.clamp(p), p);
    }

    #[test]
    fn origin_falls_back_to_a_fixed_direction() {
        let bounds = WorldBounds::default();
        let clamped = bounds.clamp(Vec3::ZERO);
        assert_relative_eq!(clamped.length(), bounds.inner);
    }

    #[test]
    fn invariant_holds_for_arbitrary_positions() {
        let bounds = WorldBounds {
            outer: 20.0,
            inner: 2.0,
        };
        let samples = [
            Vec3::splat(1000.0),
            Vec3::new(-0.001, 0.002, 0.0),
            Vec3::new(5.0, -5.0, 5.0),
            Vec3::NEG_Y * 19.999,
            Vec3::X * 2.0,
        ];
        for p in samples {
            let clamped = bounds.clamp(p);
            let len = clamped.length();
            assert!(
                (bounds.inner - 1e-4..=bounds.outer + 1e-4).contains(&len),
                "|{clamped}| = {len} outside [{}, {}]",
                bounds.inner,
                bounds.outer
            );
        }
    }
}
