//! Headless core of a rotating Earth / ISS visualizer.
//!
//! Projects latitude/longitude onto the globe's shells, keeps the marker on
//! its orbit shell and advances the per-frame rotation of the surface and the
//! cloud overlay. The host renderer drives [`GlobeScene::frame`] and draws
//! whatever [`GlobeScene::draw_list`] hands back.

pub mod components;
pub mod config;
pub mod error;
pub mod scene;
pub mod systems;

pub use components::model::ModelUniform;
pub use components::rotation::RotationState;
pub use config::GlobeConfig;
pub use error::ConfigError;
pub use scene::{DrawItem, DrawLayer, GlobeScene, MarkerView, ScenePhase};
pub use systems::geospatial::coordinates::{CoordinatesSystem, GeoCoordinate};
pub use systems::marker::MarkerSystem;

pub const IDENTITY_MATRIX_4: [[f32; 4]; 4] = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Shorthand for the projection at the heart of the crate.
pub fn project(latitude: f32, longitude: f32, radius: f32) -> cgmath::Point3<f32> {
    CoordinatesSystem::lat_lon_to_cartesian(latitude, longitude, radius)
}

// column-major, same layout the shaders read
fn matrix4_to_array(mat: cgmath::Matrix4<f32>) -> [[f32; 4]; 4] {
    let m: [[f32; 4]; 4] = mat.into();
    [
        [m[0][0], m[0][1], m[0][2], m[0][3]],
        [m[1][0], m[1][1], m[1][2], m[1][3]],
        [m[2][0], m[2][1], m[2][2], m[2][3]],
        [m[3][0], m[3][1], m[3][2], m[3][3]],
    ]
}

/// Installs the global tracing subscriber. Safe to call more than once.
///
/// Native builds log to stderr filtered by `RUST_LOG` (default `info`), wasm
/// builds go to the browser console.
pub fn init_tracing() {
    cfg_if::cfg_if! {
        if #[cfg(target_arch = "wasm32")] {
            console_error_panic_hook::set_once();
            static INIT: std::sync::Once = std::sync::Once::new();
            INIT.call_once(tracing_wasm::set_as_global_default);
        } else {
            use tracing_subscriber::EnvFilter;

            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            // already installed by the host or an earlier call
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .try_init();
        }
    }
}
