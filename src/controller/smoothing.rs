//! Critically-damped spring interpolation ("smooth damp") used by the focus transition.
//!
//! Unlike a plain lerp, the approach carries a persistent velocity, so it accelerates away from
//! the start and decelerates into the target without ever overshooting. `smooth_time` is the
//! time constant: roughly the time to cover most of the remaining distance.

use bevy_math::prelude::*;

/// Smallest usable time constant; protects the `2.0 / smooth_time` term.
const MIN_SMOOTH_TIME: f32 = 1e-4;

/// Advance `current` toward `target` by one step of critically-damped spring motion.
///
/// `velocity` must persist between calls; zero it when retargeting from rest.
pub fn smooth_damp(
    current: Vec3,
    target: Vec3,
    velocity: &mut Vec3,
    smooth_time: f32,
    dt: f32,
) -> Vec3 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    // Pade approximant of e^-x, stable for the x ranges a frame tick produces.
    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    // The spring formulation can step past the target for large dt; clamp to the target so the
    // approach is monotone.
    if (target - current).dot(output - target) > 0.0 {
        output = target;
        *velocity = Vec3::ZERO;
    }
    output
}

/// Scalar variant of [`smooth_damp`], used on the angular delta of the orientation transition.
pub fn smooth_damp_angle(
    current: f32,
    target: f32,
    velocity: &mut f32,
    smooth_time: f32,
    dt: f32,
) -> f32 {
    let smooth_time = smooth_time.max(MIN_SMOOTH_TIME);
    let omega = 2.0 / smooth_time;

    let x = omega * dt;
    let exp = 1.0 / (1.0 + x + 0.48 * x * x + 0.235 * x * x * x);

    let change = current - target;
    let temp = (*velocity + omega * change) * dt;
    *velocity = (*velocity - omega * temp) * exp;
    let mut output = target + (change + temp) * exp;

    if (target - current) * (output - target) > 0.0 {
        output = target;
        *velocity = 0.0;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn position_converges_without_overshoot() {
        let target = Vec3::new(10.0, -4.0, 2.0);
        let mut current = Vec3::ZERO;
        let mut velocity = Vec3::ZERO;
        let mut last_distance = current.distance(target);

        for _ in 0..600 {
            current = smooth_damp(current, target, &mut velocity, 0.5, DT);
            let distance = current.distance(target);
            assert!(
                distance <= last_distance,
                "distance grew: {distance} > {last_distance}"
            );
            last_distance = distance;
        }
        assert!(last_distance < 1e-3, "did not converge: {last_distance}");
    }

    #[test]
    fn angle_converges_to_zero() {
        let mut delta = std::f32::consts::PI;
        let mut velocity = 0.0;
        for _ in 0..600 {
            let next = smooth_damp_angle(delta, 0.0, &mut velocity, 0.5, DT);
            assert!(next <= delta);
            assert!(next >= 0.0, "overshot past zero: {next}");
            delta = next;
        }
        assert!(delta < 1e-4);
    }

    #[test]
    fn incoming_velocity_cannot_overshoot() {
        let target = Vec3::X;
        // Arriving at high speed; the guard must pin the output at the target instead of
        // letting the spring carry past it.
        let mut velocity = Vec3::X * 1000.0;
        let out = smooth_damp(Vec3::ZERO, target, &mut velocity, 1.0, 0.1);
        assert_eq!(out, target);
        assert_eq!(velocity, Vec3::ZERO);
    }

    #[test]
    fn zero_dt_is_a_noop() {
        let mut velocity = Vec3::ZERO;
        let out = smooth_damp(Vec3::splat(3.0), Vec3::ZERO, &mut velocity, 1.0, 0.0);
        assert_eq!(out, Vec3::splat(3.0));
    }
}
