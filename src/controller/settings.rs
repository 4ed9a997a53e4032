//! Hot-reloadable operator settings shared by every rig.
//!
//! Hosts expose these three values in their options screen and simply mutate the resource; change
//! detection pushes the new values into every [`FocusCam`] before the next tick. The first run of
//! the system counts as a change, which doubles as the load-at-startup path.

use bevy_ecs::prelude::*;
use bevy_reflect::prelude::*;

use super::component::FocusCam;

/// Operator-facing camera settings.
#[derive(Debug, Clone, Resource, Reflect)]
pub struct FocusCamSettings {
    /// Translation speed, applied to forward, backward, and strafe motion alike.
    pub movement_speed: f32,
    /// When false, two-point focus requests are ignored and the rig never locks.
    pub auto_focus: bool,
    /// Look sensitivity.
    pub sensitivity: f32,
}

impl Default for FocusCamSettings {
    fn default() -> Self {
        Self {
            movement_speed: 1.0,
            auto_focus: true,
            sensitivity: 1.0,
        }
    }
}

/// Pushes changed settings into every rig. Freshly spawned rigs get a read of the current values
/// even if the resource hasn't changed since startup.
pub fn apply_settings(settings: Res<FocusCamSettings>, mut rigs: Query<&mut FocusCam>) {
    for mut rig in &mut rigs {
        if settings.is_changed() || rig.is_added() {
            rig.apply_settings(&settings);
        }
    }
}
