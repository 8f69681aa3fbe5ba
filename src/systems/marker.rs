use bevy_ecs::{entity::Entity, world::World};
use cgmath::Point3;
use tracing::debug;

use crate::components::{
    marker::MarkerComponent, model::ModelMatrixComponent, rotation::RotationState,
};

use super::{geospatial::coordinates::GeoCoordinate, rotation::RotationSystem};

pub struct MarkerSystem {}

impl MarkerSystem {
    pub fn marker_point(coordinate: GeoCoordinate, marker_radius: f32) -> Point3<f32> {
        coordinate.project(marker_radius)
    }

    /// Puts the marker where `coordinate` says, or takes it away when the
    /// position is unknown. Returns the marker entity if one exists afterwards.
    ///
    /// An existing marker is moved in place rather than respawned.
    pub fn place(
        world: &mut World,
        coordinate: Option<GeoCoordinate>,
        label: &str,
        marker_radius: f32,
        existing: Option<Entity>,
    ) -> Option<Entity> {
        let Some(coordinate) = coordinate else {
            if let Some(entity) = existing {
                world.despawn(entity);
                debug!(?entity, "marker removed, position unknown");
            }
            return None;
        };

        let marker = MarkerComponent {
            label: label.to_string(),
            coordinate,
            local_position: MarkerSystem::marker_point(coordinate, marker_radius),
        };
        let overlay = world
            .get_resource::<RotationState>()
            .map(|state| state.overlay)
            .unwrap_or_default();
        let mut model = ModelMatrixComponent::default();
        model.set(RotationSystem::marker_matrix(&marker, overlay));

        debug!(
            lat = coordinate.latitude,
            lon = coordinate.longitude,
            x = marker.local_position.x,
            y = marker.local_position.y,
            z = marker.local_position.z,
            "placing marker"
        );

        if let Some(entity) = existing {
            if let Some(mut entity_mut) = world.get_entity_mut(entity) {
                entity_mut.insert((marker, model));
                return Some(entity);
            }
        }
        Some(world.spawn((marker, model)).id())
    }
}
