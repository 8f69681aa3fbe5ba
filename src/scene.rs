use std::path::Path;

use anyhow::Context;
use bevy_ecs::{
    entity::Entity,
    schedule::{ExecutorKind, Schedule},
    world::World,
};
use cgmath::Point3;
use tracing::{debug, info, trace};

use crate::{
    components::{
        marker::MarkerComponent,
        model::{ModelMatrixComponent, ModelUniform},
        rotation::RotationState,
        shell::ShellComponent,
    },
    config::GlobeConfig,
    error::ConfigError,
    systems::{
        earth::EarthSystem, geospatial::coordinates::GeoCoordinate, marker::MarkerSystem,
        rotation::RotationSystem,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScenePhase {
    Running,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawLayer {
    Surface,
    Clouds,
    Marker,
}

/// One thing for the renderer to draw this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub layer: DrawLayer,
    pub uniform: ModelUniform,
}

/// What the renderer needs to put the indicator and its label on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerView {
    pub label: String,
    pub coordinate: GeoCoordinate,
    pub local_position: Point3<f32>,
    pub world_position: Point3<f32>,
}

/// The rotating globe: surface shell, cloud shell and an optional marker.
///
/// The host render loop owns the frame cadence and calls [`GlobeScene::frame`]
/// once per rendered frame. Nothing here touches a GPU.
pub struct GlobeScene {
    world: World,
    schedule: Schedule,
    config: GlobeConfig,
    surface: Entity,
    clouds: Entity,
    marker: Option<Entity>,
    phase: ScenePhase,
    frames: u64,
}

impl GlobeScene {
    pub fn new(config: GlobeConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut world = World::new();
        world.insert_resource(config.rotation_rates());
        world.insert_resource(RotationState::default());
        let (surface, clouds) = EarthSystem::spawn_shells(&mut world, &config);

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        RotationSystem::add_to_schedule(&mut schedule);

        info!(
            globe_radius = config.globe_radius,
            cloud_radius = config.cloud_radius(),
            marker_radius = config.marker_radius(),
            "globe scene mounted"
        );

        Ok(Self {
            world,
            schedule,
            config,
            surface,
            clouds,
            marker: None,
            phase: ScenePhase::Running,
            frames: 0,
        })
    }

    pub fn from_config_file(path: &Path) -> anyhow::Result<Self> {
        let config = GlobeConfig::load(path)
            .with_context(|| format!("loading globe config from {}", path.display()))?;
        GlobeScene::new(config).context("mounting globe scene")
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn phase(&self) -> ScenePhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == ScenePhase::Running
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn rotation(&self) -> RotationState {
        *self.world.resource::<RotationState>()
    }

    /// Per frame callback. Does nothing while the scene is unmounted.
    pub fn frame(&mut self) {
        if self.phase == ScenePhase::Idle {
            trace!("frame skipped, scene idle");
            return;
        }
        self.schedule.run(&mut self.world);
        self.frames += 1;
    }

    /// `None` means the position is unknown and no marker is shown.
    pub fn set_marker(&mut self, coordinate: Option<GeoCoordinate>) {
        self.marker = MarkerSystem::place(
            &mut self.world,
            coordinate,
            &self.config.marker_label,
            self.config.marker_radius(),
            self.marker,
        );
    }

    pub fn marker(&self) -> Option<MarkerView> {
        let entity = self.marker?;
        let marker = self.world.get::<MarkerComponent>(entity)?;
        let model = self.world.get::<ModelMatrixComponent>(entity)?;
        Some(MarkerView {
            label: marker.label.clone(),
            coordinate: marker.coordinate,
            local_position: marker.local_position,
            world_position: model.origin(),
        })
    }

    /// Model matrices for everything visible, innermost shell first.
    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(3);
        for (entity, layer) in [
            (Some(self.surface), DrawLayer::Surface),
            (Some(self.clouds), DrawLayer::Clouds),
            (self.marker, DrawLayer::Marker),
        ] {
            if let Some(model) = entity.and_then(|e| self.world.get::<ModelMatrixComponent>(e)) {
                items.push(DrawItem {
                    layer,
                    uniform: model.uniform(),
                });
            }
        }
        items
    }

    pub fn unmount(&mut self) {
        if self.phase == ScenePhase::Running {
            info!(frames = self.frames, "globe scene unmounted");
        }
        self.phase = ScenePhase::Idle;
    }

    /// Starts over from zero rotation. The marker, if any, stays where it is
    /// on its shell.
    pub fn remount(&mut self) {
        *self.world.resource_mut::<RotationState>() = RotationState::default();
        self.frames = 0;
        self.phase = ScenePhase::Running;
        self.reorient();
        info!("globe scene remounted");
    }

    // bring every matrix in line with the current angles without advancing them
    fn reorient(&mut self) {
        let state = self.rotation();
        let mut shells = self.world.query::<(&ShellComponent, &mut ModelMatrixComponent)>();
        for (shell, mut model) in shells.iter_mut(&mut self.world) {
            model.set(RotationSystem::shell_matrix(shell, state.angle_for(shell.kind)));
        }

        if let Some(entity) = self.marker {
            let matrix = self
                .world
                .get::<MarkerComponent>(entity)
                .map(|marker| RotationSystem::marker_matrix(marker, state.overlay));
            if let (Some(matrix), Some(mut model)) =
                (matrix, self.world.get_mut::<ModelMatrixComponent>(entity))
            {
                model.set(matrix);
            }
        }
        debug!(?state, "scene reoriented");
    }
}
