//! Core camera controller: input-to-motion mapping, auto-framing target acquisition, the damped
//! lock/unlock transition, and annulus boundary enforcement.

pub mod bounds;
pub mod component;
pub mod focus;
pub mod inputs;
pub mod settings;
pub mod smoothing;
pub mod view_correction;

use bevy_app::prelude::*;
use bevy_ecs::schedule::IntoSystemConfigs;
use bevy_window::RequestRedraw;

use component::FocusCam;

/// Adds the systems and types needed to run [`FocusCam`] controllers, but does not gather any
/// input. Pair it with [`crate::input::DefaultInputPlugin`], or write
/// [`inputs::InputSnapshot`](inputs::InputSnapshot) yourself before [`PreUpdate`].
pub struct MinimalFocusCamPlugin;

impl Plugin for MinimalFocusCamPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<inputs::InputSnapshot>()
            .init_resource::<settings::FocusCamSettings>()
            .add_event::<focus::FocusSingle>()
            .add_event::<focus::FocusPair>()
            .add_event::<RequestRedraw>()
            .add_systems(
                PreUpdate,
                (settings::apply_settings, FocusCam::update_rigs).chain(),
            )
            // In PostUpdate so requests sent from Update systems are not missed; the transition
            // picks the new target up on the next frame's tick.
            .add_systems(PostUpdate, focus::receive_focus_requests)
            .register_type::<FocusCam>()
            .register_type::<settings::FocusCamSettings>();
    }
}
