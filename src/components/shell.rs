use bevy_ecs::component::Component;

/// Which rotating layer a shell belongs to. The surface follows the body
/// angle, clouds (and the marker) follow the overlay angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellKind {
    Surface,
    Clouds,
}

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ShellComponent {
    pub kind: ShellKind,
    pub radius: f32,
}
