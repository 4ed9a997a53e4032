//! Engine-agnostic per-frame input values consumed by the controller.
//!
//! The controller never touches input devices. Something (by default
//! [`crate::input::DefaultInputPlugin`]) must refresh the [`InputSnapshot`] resource before the
//! controller runs each frame.

use bevy_ecs::prelude::*;
use bevy_math::prelude::*;
use bevy_reflect::prelude::*;

/// Modifier key state for the current frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Reflect)]
pub struct Modifiers {
    /// Scales look and move rates down to a tenth for fine adjustment.
    pub precision: bool,
    /// Multiplies translation speed by the rig's boost multiplier.
    pub boost: bool,
    /// Vertical-flight modifier. Holding it suppresses `boost`, so the shared physical key
    /// (space + shift combos) can't trigger both at once.
    pub fly: bool,
}

/// Raw input values for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Resource, Reflect)]
pub struct InputSnapshot {
    /// Look delta, in input device units. `x` yaws, `y` pitches.
    pub look: Vec2,
    /// Movement axes in `[-1, 1]`. `x` strafes, `y` moves forward (positive) or back (negative).
    pub axes: Vec2,
    /// Scroll delta for zoom.
    pub scroll: f32,
    /// Modifier key state.
    pub modifiers: Modifiers,
    /// True while any key or button is held, regardless of whether it maps to a motion. This is
    /// the "operator wants control back" signal used by the auto-unlock rule.
    pub any_pressed: bool,
}

impl InputSnapshot {
    /// True when the snapshot carries any activity at all. Used by the locked state to decide
    /// whether the operator is asking for control back.
    pub fn is_active(&self) -> bool {
        self.any_pressed || self.look != Vec2::ZERO || self.axes != Vec2::ZERO || self.scroll != 0.0
    }
}
