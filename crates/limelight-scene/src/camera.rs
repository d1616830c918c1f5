use glam::{Mat4, Vec3};
use limelight_core::constants::{CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR};

/// Fixed perspective camera looking down -Z at the content plane.
pub struct Camera {
    pub position: Vec3,
    pub fov_y_rad: f32,
}

impl Camera {
    pub fn new() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            fov_y_rad: CAMERA_FOV_DEG.to_radians(),
        }
    }

    pub fn view_proj(&self, width: f32, height: f32) -> Mat4 {
        let view = Mat4::look_at_rh(self.position, self.position - Vec3::Z, Vec3::Y);
        let aspect = width / height.max(1.0);
        let proj = Mat4::perspective_rh(self.fov_y_rad, aspect, CAMERA_NEAR, CAMERA_FAR);
        proj * view
    }

    /// World-space height of the viewport at the z = 0 content plane.
    /// Headline placement and scroll translation are both measured in
    /// multiples of this.
    pub fn world_viewport_height(&self) -> f32 {
        2.0 * (self.fov_y_rad / 2.0).tan() * self.position.z
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_viewport_height() {
        let camera = Camera::new();
        let expected = 2.0 * (CAMERA_FOV_DEG.to_radians() / 2.0).tan() * CAMERA_DISTANCE;
        assert!((camera.world_viewport_height() - expected).abs() < 1e-6);
        // ~2.68 world units for a 30 degree fov at distance 5
        assert!((camera.world_viewport_height() - 2.679).abs() < 0.01);
    }

    #[test]
    fn test_view_proj_is_finite_for_degenerate_viewport() {
        let camera = Camera::new();
        let vp = camera.view_proj(800.0, 0.0);
        assert!(vp.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
