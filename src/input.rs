//! Gathers keyboard and mouse state into the frame's [`InputSnapshot`].
//!
//! This is the only part of the crate that touches input devices. Hosts with their own control
//! scheme can leave this plugin out and write the [`InputSnapshot`] resource themselves before
//! [`PreUpdate`].

use bevy_app::prelude::*;
use bevy_ecs::prelude::*;
use bevy_input::{
    mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
    InputSystem,
};
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;

use crate::controller::{
    component::FocusCam,
    inputs::{InputSnapshot, Modifiers},
};

/// Adds keyboard/mouse input gathering for the camera controller.
///
/// Runs after Bevy's [`InputSystem`] set so the snapshot sees the current frame's device events,
/// and before the rig update so the controller consumes it the same frame. Hosts replacing this
/// plugin must keep the same ordering for their own snapshot writer.
pub struct DefaultInputPlugin;

impl Plugin for DefaultInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CamBindings>()
            .add_systems(
                PreUpdate,
                gather_inputs
                    .after(InputSystem)
                    .before(FocusCam::update_rigs),
            )
            .register_type::<CamBindings>();
    }
}

/// Key bindings for the default input gathering.
#[derive(Debug, Clone, Resource, Reflect)]
pub struct CamBindings {
    /// Move forward.
    pub forward: KeyCode,
    /// Move backward.
    pub backward: KeyCode,
    /// Strafe left.
    pub left: KeyCode,
    /// Strafe right.
    pub right: KeyCode,
    /// Boost modifier. Either entry counts.
    pub boost: [KeyCode; 2],
    /// Precision modifier.
    pub precision: KeyCode,
    /// Fly modifier. Shares a chord with boost, which is why boost is suppressed while this is
    /// held.
    pub fly: KeyCode,
}

impl Default for CamBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            boost: [KeyCode::ShiftLeft, KeyCode::ShiftRight],
            precision: KeyCode::ControlLeft,
            fly: KeyCode::Space,
        }
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    (positive as i8 - negative as i8) as f32
}

/// Builds the frame's [`InputSnapshot`] from the accumulated mouse state and held keys.
pub fn gather_inputs(
    bindings: Res<CamBindings>,
    keys: Res<ButtonInput<KeyCode>>,
    buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    // Window coordinates put +x to the right, but the rig yaws in right-handed world space, so
    // the horizontal look axis flips here. Vertical already matches the rig's pitch convention.
    let look = Vec2::new(-mouse_motion.delta.x, mouse_motion.delta.y);

    *snapshot = InputSnapshot {
        look,
        axes: Vec2::new(
            axis(keys.pressed(bindings.right), keys.pressed(bindings.left)),
            axis(keys.pressed(bindings.forward), keys.pressed(bindings.backward)),
        ),
        scroll: mouse_scroll.delta.y,
        modifiers: Modifiers {
            precision: keys.pressed(bindings.precision),
            boost: bindings.boost.iter().any(|key| keys.pressed(*key)),
            fly: keys.pressed(bindings.fly),
        },
        any_pressed: keys.get_pressed().next().is_some()
            || buttons.get_pressed().next().is_some(),
    };
}
