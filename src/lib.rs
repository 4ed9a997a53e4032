//! A free-fly camera rig with event-driven auto-framing, built for node-graph scenes where game
//! events need to pull the operator's view toward one or two points of interest, then hand
//! control straight back.
//!
//! # Usage
//!
//! Add [`DefaultFocusCamPlugins`] to your app and a [`FocusCam`](controller::component::FocusCam)
//! component to your camera. Game code frames points of interest by sending
//! [`FocusSingle`](controller::focus::FocusSingle) or [`FocusPair`](controller::focus::FocusPair)
//! events, or by calling the request methods on the component directly.
//!
//! The controller itself never reads input devices: the [`DefaultInputPlugin`](input) gathers
//! keyboard and mouse state into an [`InputSnapshot`](controller::inputs::InputSnapshot) resource
//! once per frame. Hosts with their own bindings can skip that plugin and write the snapshot
//! themselves, then the rig is driven entirely through
//! [`FocusCam::tick`](controller::component::FocusCam::tick).

pub mod controller;
pub mod input;

/// Common imports.
pub mod prelude {
    pub use crate::{
        controller::{
            bounds::WorldBounds,
            component::FocusCam,
            focus::{FocusPair, FocusSingle, PoseTarget},
            inputs::{InputSnapshot, Modifiers},
            settings::FocusCamSettings,
            view_correction::ViewCorrection,
            MinimalFocusCamPlugin,
        },
        input::{CamBindings, DefaultInputPlugin},
        DefaultFocusCamPlugins,
    };
}

use bevy_app::{PluginGroup, PluginGroupBuilder};

/// Adds the camera controller and the default keyboard/mouse input gathering.
///
/// Use [`controller::MinimalFocusCamPlugin`] instead if you want to supply your own
/// [`controller::inputs::InputSnapshot`] every frame.
pub struct DefaultFocusCamPlugins;

impl PluginGroup for DefaultFocusCamPlugins {
    fn build(self) -> PluginGroupBuilder {
        PluginGroupBuilder::start::<Self>()
            .add(input::DefaultInputPlugin)
            .add(controller::MinimalFocusCamPlugin)
    }
}
