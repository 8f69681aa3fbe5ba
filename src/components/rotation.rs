use std::f32::consts::TAU;

use bevy_ecs::system::Resource;

use super::shell::ShellKind;

/// Per frame increments, in radians.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RotationRates {
    pub surface: f32,
    pub overlay: f32,
    // keep angles in [0, 2pi) instead of letting them grow forever
    pub wrap: bool,
}

/// Accumulated angles of the two rotating layers. Only reset on remount.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct RotationState {
    pub surface: f32,
    pub overlay: f32,
}

impl RotationState {
    pub fn advance(&mut self, rates: &RotationRates) {
        self.surface += rates.surface;
        self.overlay += rates.overlay;

        if rates.wrap {
            self.surface = self.surface.rem_euclid(TAU);
            self.overlay = self.overlay.rem_euclid(TAU);
        }
    }

    pub fn angle_for(&self, kind: ShellKind) -> f32 {
        match kind {
            ShellKind::Surface => self.surface,
            ShellKind::Clouds => self.overlay,
        }
    }
}
