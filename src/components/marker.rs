use bevy_ecs::component::Component;
use cgmath::Point3;

use crate::systems::geospatial::coordinates::GeoCoordinate;

#[derive(Component, Debug, Clone, PartialEq)]
pub struct MarkerComponent {
    pub label: String,
    pub coordinate: GeoCoordinate,
    // position on the marker shell before the overlay rotation is applied
    pub local_position: Point3<f32>,
}
