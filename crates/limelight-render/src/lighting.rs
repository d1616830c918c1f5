use glam::{Mat4, Vec3};
use limelight_core::constants::RIG_COUNT;

/// Attenuation radius of an orbit light, in world units.
const ORBIT_LIGHT_RADIUS: f32 = 4.0;
const ORBIT_LIGHT_INTENSITY: f32 = 1.0;

/// GPU point light data (32 bytes, matches PointLight in text_fill.wgsl).
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct GpuPointLight {
    pub position: [f32; 3],
    pub radius: f32,
    pub color: [f32; 3],
    pub intensity: f32,
}

impl GpuPointLight {
    /// White orbit light, the only kind this scene carries.
    pub fn orbit(position: Vec3) -> Self {
        Self {
            position: position.to_array(),
            radius: ORBIT_LIGHT_RADIUS,
            color: [1.0, 1.0, 1.0],
            intensity: ORBIT_LIGHT_INTENSITY,
        }
    }
}

/// Camera uniforms (80 bytes, matches CameraUniforms in text_fill.wgsl).
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniforms {
    pub fn new(view_proj: Mat4, position: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            position: [position.x, position.y, position.z, 1.0],
        }
    }
}

/// Per-block uniforms (176 bytes, matches BlockUniforms in text_fill.wgsl):
/// the block's model transform, its three rig lights, and the ambient term.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct BlockUniforms {
    pub model: [[f32; 4]; 4],
    pub lights: [GpuPointLight; RIG_COUNT],
    pub ambient: [f32; 4],
}

impl BlockUniforms {
    pub fn new(position: Vec3, lights: [Vec3; RIG_COUNT]) -> Self {
        Self {
            model: Mat4::from_translation(position).to_cols_array_2d(),
            lights: lights.map(GpuPointLight::orbit),
            ambient: [0.03, 0.03, 0.04, 1.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gpu_point_light_size() {
        assert_eq!(std::mem::size_of::<GpuPointLight>(), 32);
    }

    #[test]
    fn test_camera_uniforms_size() {
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 80);
    }

    #[test]
    fn test_block_uniforms_size() {
        assert_eq!(std::mem::size_of::<BlockUniforms>(), 176);
    }

    #[test]
    fn test_block_uniforms_places_model_and_lights() {
        let block = BlockUniforms::new(
            Vec3::new(1.0, 2.0, 3.0),
            [Vec3::X, Vec3::Y, Vec3::Z],
        );
        // Translation lands in the last matrix column
        assert_eq!(block.model[3][0], 1.0);
        assert_eq!(block.model[3][1], 2.0);
        assert_eq!(block.model[3][2], 3.0);
        assert_eq!(block.lights[0].position, [1.0, 0.0, 0.0]);
        assert_eq!(block.lights[2].position, [0.0, 0.0, 1.0]);
    }
}
