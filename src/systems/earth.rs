use bevy_ecs::{entity::Entity, world::World};
use tracing::debug;

use crate::{
    components::{
        model::ModelMatrixComponent,
        shell::{ShellComponent, ShellKind},
    },
    config::GlobeConfig,
};

use super::rotation::RotationSystem;

pub struct EarthSystem {}

impl EarthSystem {
    /// Spawns the surface and cloud shells, returned in that order.
    pub fn spawn_shells(world: &mut World, config: &GlobeConfig) -> (Entity, Entity) {
        let surface = EarthSystem::spawn_shell(world, ShellKind::Surface, config.globe_radius);
        let clouds = EarthSystem::spawn_shell(world, ShellKind::Clouds, config.cloud_radius());
        (surface, clouds)
    }

    fn spawn_shell(world: &mut World, kind: ShellKind, radius: f32) -> Entity {
        let shell = ShellComponent { kind, radius };
        let mut model = ModelMatrixComponent::default();
        // unit sphere mesh, scaled out to the shell radius
        model.set(RotationSystem::shell_matrix(&shell, 0.0));

        let entity = world.spawn((shell, model)).id();
        debug!(?kind, radius, ?entity, "spawned shell");
        entity
    }
}
