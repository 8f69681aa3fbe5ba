use bevy_ecs::prelude::*;
use cgmath::{EuclideanSpace, Matrix4, Rad};
use tracing::trace;

use crate::components::{
    marker::MarkerComponent,
    model::ModelMatrixComponent,
    rotation::{RotationRates, RotationState},
    shell::ShellComponent,
};

pub struct RotationSystem {}

impl RotationSystem {
    /// Systems run once per frame, in order.
    pub fn add_to_schedule(schedule: &mut Schedule) {
        schedule.add_systems((advance_rotation, orient_shells, orient_markers).chain());
    }

    pub fn shell_matrix(shell: &ShellComponent, angle: f32) -> Matrix4<f32> {
        Matrix4::from_angle_y(Rad(angle)) * Matrix4::from_scale(shell.radius)
    }

    // the marker rides on the overlay layer, so it picks up the cloud rotation
    pub fn marker_matrix(marker: &MarkerComponent, overlay_angle: f32) -> Matrix4<f32> {
        Matrix4::from_angle_y(Rad(overlay_angle))
            * Matrix4::from_translation(marker.local_position.to_vec())
    }
}

fn advance_rotation(rates: Res<RotationRates>, mut state: ResMut<RotationState>) {
    state.advance(&rates);
    trace!(surface = state.surface, overlay = state.overlay, "rotation advanced");
}

fn orient_shells(
    state: Res<RotationState>,
    mut shells: Query<(&ShellComponent, &mut ModelMatrixComponent)>,
) {
    for (shell, mut model) in shells.iter_mut() {
        model.set(RotationSystem::shell_matrix(shell, state.angle_for(shell.kind)));
    }
}

fn orient_markers(
    state: Res<RotationState>,
    mut markers: Query<(&MarkerComponent, &mut ModelMatrixComponent), Without<ShellComponent>>,
) {
    for (marker, mut model) in markers.iter_mut() {
        model.set(RotationSystem::marker_matrix(marker, state.overlay));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::shell::ShellKind;
    use crate::systems::geospatial::coordinates::GeoCoordinate;
    use approx::assert_relative_eq;
    use bevy_ecs::schedule::ExecutorKind;
    use cgmath::{InnerSpace, Point3};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn shell_matrix_scales_unit_mesh_to_radius() {
        let shell = ShellComponent {
            kind: ShellKind::Clouds,
            radius: 2.01,
        };
        let mut model = ModelMatrixComponent::default();
        model.set(RotationSystem::shell_matrix(&shell, 1.3));
        let edge = cgmath::Transform::transform_point(&model.matrix(), Point3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(edge.to_vec().magnitude(), 2.01, epsilon = 1e-5);
    }

    #[test]
    fn marker_matrix_rotates_about_the_polar_axis() {
        let marker = MarkerComponent {
            label: "ISS".to_string(),
            coordinate: GeoCoordinate::new(0.0, 0.0),
            local_position: Point3::new(2.25, 0.0, 0.0),
        };
        let mut model = ModelMatrixComponent::default();
        model.set(RotationSystem::marker_matrix(&marker, FRAC_PI_2));
        let p = model.origin();
        // +x swings round to -z under a quarter turn about +y
        assert_relative_eq!(p.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.y, 0.0, epsilon = 1e-5);
        assert_relative_eq!(p.z, -2.25, epsilon = 1e-5);
    }

    #[test]
    fn schedule_advances_and_orients() {
        let mut world = World::new();
        world.insert_resource(RotationRates {
            surface: 0.1,
            overlay: 0.2,
            wrap: false,
        });
        world.insert_resource(RotationState::default());
        let surface = world
            .spawn((
                ShellComponent {
                    kind: ShellKind::Surface,
                    radius: 1.0,
                },
                ModelMatrixComponent::default(),
            ))
            .id();

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        RotationSystem::add_to_schedule(&mut schedule);
        for _ in 0..3 {
            schedule.run(&mut world);
        }

        let state = *world.resource::<RotationState>();
        assert_relative_eq!(state.surface, 0.3, epsilon = 1e-5);
        assert_relative_eq!(state.overlay, 0.6, epsilon = 1e-5);

        let model = world.get::<ModelMatrixComponent>(surface).unwrap();
        let expected = RotationSystem::shell_matrix(
            &ShellComponent {
                kind: ShellKind::Surface,
                radius: 1.0,
            },
            state.surface,
        );
        assert_eq!(model.matrix(), expected);
    }
}
