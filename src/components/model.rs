use bevy_ecs::component::Component;
use cgmath::{EuclideanSpace, Point3, Transform};

use crate::{matrix4_to_array, IDENTITY_MATRIX_4};

#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ModelMatrixComponent {
    pub model_matrix: [[f32; 4]; 4],
}

impl ModelMatrixComponent {
    pub fn set(&mut self, matrix: cgmath::Matrix4<f32>) {
        self.model_matrix = matrix4_to_array(matrix);
    }

    pub fn matrix(&self) -> cgmath::Matrix4<f32> {
        self.model_matrix.into()
    }

    /// Where the model's origin ends up in scene space.
    pub fn origin(&self) -> Point3<f32> {
        self.matrix().transform_point(Point3::origin())
    }

    pub fn uniform(&self) -> ModelUniform {
        ModelUniform {
            model_matrix: self.model_matrix,
        }
    }
}

impl Default for ModelMatrixComponent {
    fn default() -> Self {
        Self {
            model_matrix: IDENTITY_MATRIX_4,
        }
    }
}

// layout handed straight to the renderer's model matrix bind group
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ModelUniform {
    pub model_matrix: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
