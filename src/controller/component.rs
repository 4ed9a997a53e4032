//! The primary [`Component`] of the rig, [`FocusCam`].

use bevy_ecs::prelude::*;
use bevy_log::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;
use bevy_render::prelude::*;
use bevy_time::prelude::*;
use bevy_transform::prelude::*;
use bevy_window::RequestRedraw;

use super::{
    bounds::WorldBounds,
    focus::{self, PoseTarget},
    inputs::InputSnapshot,
    settings::FocusCamSettings,
    smoothing::{smooth_damp, smooth_damp_angle},
    view_correction::{self, ViewCorrection},
};

/// Calibration constant tying raw look-input units to degrees per second.
const LOOK_SCALE: f32 = 100.0;

/// Rate multiplier while the precision modifier is held. Applies to look and move alike.
const PRECISION_FACTOR: f32 = 0.1;

/// Angular deltas below this (0.01°) skip the orientation slerp entirely. Prevents a
/// divide-by-near-zero in the covered-fraction parameter and jitter at convergence.
const MIN_SLERP_ANGLE: f32 = 0.01 * core::f32::consts::PI / 180.0;

/// Tracks all state of a camera rig: its tunables, its focus target, and the lock/unlock
/// transition.
///
/// # Moving the camera
///
/// While unlocked, the rig flies freely from the frame's [`InputSnapshot`]. Game code frames
/// points of interest by sending [`FocusSingle`](super::focus::FocusSingle) or
/// [`FocusPair`](super::focus::FocusPair) events, or by calling
/// [`FocusCam::request_single_focus`] / [`FocusCam::request_two_point_focus`] directly. A
/// two-point request locks the rig onto a damped approach toward the computed destination;
/// any input after the grace window hands control straight back.
///
/// Everything runs from [`FocusCam::tick`], which the
/// [`MinimalFocusCamPlugin`](super::MinimalFocusCamPlugin) drives once per frame with unscaled
/// time, so the camera stays responsive while game time is paused or scaled.
#[derive(Debug, Clone, Component, Reflect)]
pub struct FocusCam {
    /// Sideways translation speed, world units per second.
    pub strafe_speed: f32,
    /// Forward translation speed, world units per second.
    pub forward_speed: f32,
    /// Backward translation speed, world units per second.
    pub backward_speed: f32,
    /// Translation multiplier while the boost modifier is held.
    pub boost_multiplier: f32,
    /// Look sensitivity.
    pub sensitivity: f32,
    /// Time constant of the focus transition, in seconds. Also sets the auto-unlock grace
    /// window, which is twice this value.
    pub focus_speed: f32,
    /// Standoff distance used when framing focus points. For two-point framing this scales
    /// further with the separation of the pair.
    pub focus_distance: f32,
    /// Field-of-view change per scroll unit, radians per second.
    pub zoom_speed: f32,
    /// Permitted field-of-view range `[min, max]`, radians.
    pub fov_range: Vec2,
    /// The annulus the camera position is clamped into every frame.
    pub bounds: WorldBounds,
    /// Gate for two-point focus requests. When false, requests are ignored and the rig never
    /// locks. Hot-reloaded from [`FocusCamSettings::auto_focus`].
    pub auto_lock: bool,
    /// Optional pull back toward facing the origin. Disabled by default.
    pub view_correction: ViewCorrection,
    /// Focus transition state. Managed by the rig, but exposed for inspection.
    pub transition: TransitionState,
    /// Internal clock, accumulated from the `dt` passed to [`FocusCam::tick`]. Drives the
    /// auto-unlock grace window deterministically.
    elapsed: f64,
    /// Last observed field of view, radians.
    fov: f32,
    /// Last enforced world position.
    position: Vec3,
}

impl Default for FocusCam {
    fn default() -> Self {
        Self {
            strafe_speed: 1.0,
            forward_speed: 1.0,
            backward_speed: 1.0,
            boost_multiplier: 2.0,
            sensitivity: 1.0,
            focus_speed: 1.0,
            focus_distance: 10.0,
            zoom_speed: 1.0,
            fov_range: Vec2::new(30f32.to_radians(), 100f32.to_radians()),
            bounds: WorldBounds::default(),
            auto_lock: false,
            view_correction: ViewCorrection::default(),
            transition: TransitionState::default(),
            elapsed: 0.0,
            fov: core::f32::consts::FRAC_PI_4,
            position: Vec3::ZERO,
        }
    }
}

/// State of the damped focus transition.
#[derive(Debug, Clone, Default, Reflect)]
pub struct TransitionState {
    /// True while the rig is flying itself toward [`TransitionState::target`].
    pub locked: bool,
    /// Rig clock value at the moment the lock engaged.
    lock_started: f64,
    /// The destination pose. Persists after unlock; single-point requests update it without
    /// locking.
    pub target: PoseTarget,
    /// Smoothing auxiliary for the position approach.
    position_velocity: Vec3,
    /// Smoothing auxiliary for the angular approach.
    angle_velocity: f32,
}

impl FocusCam {
    /// A rig with two-point auto-framing enabled from the start, before any
    /// [`FocusCamSettings`] load.
    pub fn with_auto_lock(mut self) -> Self {
        self.auto_lock = true;
        self
    }

    /// Replace the boundary annulus.
    pub fn with_bounds(mut self, bounds: WorldBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// True while the rig is locked onto a focus transition.
    pub fn is_locked(&self) -> bool {
        self.transition.locked
    }

    /// The current destination pose.
    pub fn target(&self) -> PoseTarget {
        self.transition.target
    }

    /// Last observed field of view, radians. Readout for dependent HUD math.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Last enforced world position. Readout for screen-space projection of node labels.
    pub fn world_position(&self) -> Vec3 {
        self.position
    }

    /// Re-read the hot-reloadable settings. Movement speed applies to forward, backward, and
    /// strafe motion alike.
    pub fn apply_settings(&mut self, settings: &FocusCamSettings) {
        self.forward_speed = settings.movement_speed;
        self.backward_speed = settings.movement_speed;
        self.strafe_speed = settings.movement_speed;
        self.auto_lock = settings.auto_focus;
        self.sensitivity = settings.sensitivity;
    }

    /// Retarget toward a single point, viewed from a random azimuth at
    /// [`FocusCam::focus_distance`]. Does not engage the lock; callers decide whether the rig
    /// should fly there.
    pub fn request_single_focus(&mut self, point: Vec3) {
        let mut rng = rand::thread_rng();
        // The cross with up only degenerates for a near-vertical azimuth; resampling a few
        // times makes that unobservable.
        for _ in 0..8 {
            let azimuth = focus::random_azimuth(&mut rng);
            if let Some(target) =
                focus::single_point_target(point, azimuth, Vec3::Y, self.focus_distance)
            {
                self.transition.target = target;
                return;
            }
        }
        warn!("single focus: no usable viewing azimuth for {point}, keeping previous target");
    }

    /// Retarget toward a pose framing both points side-on, and lock the rig onto the damped
    /// approach. Ignored while [`FocusCam::auto_lock`] is false; that is the operator's
    /// auto-focus policy, not an error. A degenerate pair (coincident points, or a pair axis
    /// parallel to world up) keeps the previous target and lock state unchanged.
    ///
    /// A fresh request while already locked simply retargets: the lock clock restarts and the
    /// smoothing velocities carry over, so back-to-back events chain smoothly.
    pub fn request_two_point_focus(&mut self, a: Vec3, b: Vec3) {
        if !self.auto_lock {
            return;
        }
        let Some(target) = focus::two_point_target(a, b, Vec3::Y, self.focus_distance) else {
            warn!("two-point focus: degenerate pair {a} / {b}, keeping previous target");
            return;
        };
        self.transition.target = target;
        self.transition.locked = true;
        self.transition.lock_started = self.elapsed;
    }

    /// Advance the rig by one frame.
    ///
    /// `dt` must be unscaled elapsed seconds. Order of operations: unlock check, then either
    /// free-fly input motion (with optional view correction) or the locked damped approach,
    /// then boundary enforcement, always.
    pub fn tick(
        &mut self,
        dt: f32,
        input: &InputSnapshot,
        transform: &mut Transform,
        projection: &mut Projection,
    ) {
        self.elapsed += dt as f64;

        // Input hands control back, but only once the grace window has elapsed; otherwise a
        // key still held from before the event would cancel the transition instantly.
        if self.transition.locked
            && input.is_active()
            && self.elapsed - self.transition.lock_started > (2.0 * self.focus_speed) as f64
        {
            self.transition.locked = false;
        }

        if self.transition.locked {
            self.approach_target(dt, transform);
        } else {
            self.apply_translation(dt, input, transform);
            self.apply_look(dt, input, transform);
            self.apply_zoom(dt, input, projection);
            if self.view_correction.enabled {
                view_correction::apply(transform, self.view_correction.threshold);
            }
        }

        transform.translation = self.bounds.clamp(transform.translation);

        self.position = transform.translation;
        if let Projection::Perspective(perspective) = projection {
            self.fov = perspective.fov;
        }
    }

    /// Free-fly translation: forward/back along the view axis (with distinct speeds per
    /// direction), strafe along local right. Boost multiplies the combined step, except while
    /// the fly modifier is held, which shares a physical key with boost in the default
    /// bindings.
    fn apply_translation(&self, dt: f32, input: &InputSnapshot, transform: &mut Transform) {
        let forward_axis = input.axes.y;
        let strafe_axis = input.axes.x;
        if forward_axis == 0.0 && strafe_axis == 0.0 {
            return;
        }
        let fb_speed = if forward_axis > 0.0 {
            self.forward_speed
        } else {
            self.backward_speed
        };
        let mut step = (transform.forward() * forward_axis * fb_speed
            + transform.right() * strafe_axis * self.strafe_speed)
            * dt;
        if input.modifiers.boost && !input.modifiers.fly {
            step *= self.boost_multiplier;
        }
        if input.modifiers.precision {
            step *= PRECISION_FACTOR;
        }
        transform.translation += step;
    }

    /// Free-look: pitch about the local right axis, yaw about world up.
    fn apply_look(&self, dt: f32, input: &InputSnapshot, transform: &mut Transform) {
        if input.look == Vec2::ZERO {
            return;
        }
        let mut scale = self.sensitivity * LOOK_SCALE;
        if input.modifiers.precision {
            scale *= PRECISION_FACTOR;
        }
        let pitch = (-input.look.y * dt * scale).to_radians();
        let yaw = (input.look.x * dt * scale).to_radians();
        let right = transform.right();
        transform.rotate_axis(right, pitch);
        transform.rotate_y(yaw);
    }

    /// Scroll zoom, expressed as a field-of-view change, hard-clamped into
    /// [`FocusCam::fov_range`].
    fn apply_zoom(&self, dt: f32, input: &InputSnapshot, projection: &mut Projection) {
        let Projection::Perspective(perspective) = projection else {
            return;
        };
        perspective.fov = (perspective.fov - input.scroll * dt * self.zoom_speed)
            .clamp(self.fov_range.x, self.fov_range.y);
    }

    /// One step of the locked transition: smooth-damp the position, smooth-damp the angular
    /// delta toward zero, and slerp by the fraction of angular distance just covered so the
    /// orientation approach has the same damped shape as the position approach.
    fn approach_target(&mut self, dt: f32, transform: &mut Transform) {
        let target = self.transition.target;
        transform.translation = smooth_damp(
            transform.translation,
            target.position,
            &mut self.transition.position_velocity,
            self.focus_speed,
            dt,
        );
        let delta = transform.rotation.angle_between(target.rotation);
        let remaining = smooth_damp_angle(
            delta,
            0.0,
            &mut self.transition.angle_velocity,
            self.focus_speed,
            dt,
        );
        if delta > MIN_SLERP_ANGLE {
            transform.rotation = transform
                .rotation
                .slerp(target.rotation, (delta - remaining) / delta)
                .normalize();
        }
    }

    /// Advance every rig by one frame. Uses unscaled time so the camera stays controllable
    /// during pause and slow-motion states.
    pub fn update_rigs(
        mut rigs: Query<(&mut FocusCam, &mut Transform, &mut Projection)>,
        input: Res<InputSnapshot>,
        time: Res<Time<Real>>,
        mut redraw: EventWriter<RequestRedraw>,
    ) {
        let dt = time.delta_secs();
        for (mut rig, transform, projection) in &mut rigs {
            let moving = rig.transition.locked || input.is_active();
            rig.tick(dt, &input, transform.into_inner(), projection.into_inner());
            if moving {
                redraw.send(RequestRedraw);
            }
        }
    }
}
