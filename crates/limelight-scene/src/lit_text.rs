use glam::{EulerRot, Mat3, Vec3};
use limelight_core::constants::{RIG_COUNT, RIG_LIGHT_OFFSET};
use limelight_core::math::{camera_depth, rig_orientations};
use limelight_core::types::{FrameContext, TextAlign, Transform};

/// A rotating group holding one point light at a fixed local offset.
/// Spinning the group sweeps the light across a sphere around the text.
#[derive(Debug, Clone, Copy, Default)]
pub struct LightRig {
    pub transform: Transform,
}

impl LightRig {
    /// World position of the rig's light for a given parent position.
    pub fn light_world_position(&self, parent: Vec3) -> Vec3 {
        let r = self.transform.rotation;
        let rot = Mat3::from_euler(EulerRot::XYZ, r.x, r.y, r.z);
        parent + self.transform.position + rot * RIG_LIGHT_OFFSET
    }
}

/// Outlined headline text plus three orbiting point-light rigs.
///
/// The rigs re-orient every frame as fixed trig functions of elapsed
/// time, and the container's depth tracks the viewport so the block stays
/// framed on narrow screens. Nothing here can fail; both formulas are
/// total over their inputs.
pub struct LitText {
    pub text: String,
    pub align: TextAlign,
    /// Base placement within the scrolled group. The container's x/y stay
    /// here; its z is recomputed from the viewport each frame.
    pub anchor: Vec3,
    pub container: Transform,
    pub rigs: [LightRig; RIG_COUNT],
}

impl LitText {
    pub fn new(text: impl Into<String>, align: TextAlign, anchor: Vec3) -> Self {
        Self {
            text: text.into(),
            align,
            anchor,
            container: Transform::from_position(anchor),
            rigs: [LightRig::default(); RIG_COUNT],
        }
    }

    /// Per-frame update. Inputs are only the elapsed time and viewport
    /// carried by `ctx`; the result overwrites the rig rotations and the
    /// container depth in place.
    pub fn update(&mut self, ctx: &FrameContext) {
        let orientations = rig_orientations(ctx.elapsed);
        for (rig, orientation) in self.rigs.iter_mut().zip(orientations) {
            rig.transform.rotation = orientation;
        }
        self.container.position = self.anchor;
        self.container.position.z = camera_depth(ctx.viewport);
    }

    /// World positions of the rig lights for a given scrolled-group offset.
    pub fn light_positions(&self, group_offset: Vec3) -> [Vec3; RIG_COUNT] {
        let parent = group_offset + self.container.position;
        self.rigs.map(|rig| rig.light_world_position(parent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limelight_core::types::Viewport;

    fn ctx(elapsed: f32, width: f32, height: f32) -> FrameContext {
        FrameContext {
            elapsed,
            scroll_progress: 0.0,
            viewport: Viewport::new(width, height),
        }
    }

    #[test]
    fn test_update_orients_rigs() {
        let mut text = LitText::new("CONTACT", TextAlign::Center, Vec3::ZERO);
        text.update(&ctx(2.5, 1920.0, 1080.0));

        let expected = rig_orientations(2.5);
        for (rig, want) in text.rigs.iter().zip(expected) {
            assert_eq!(rig.transform.rotation, want);
        }
    }

    #[test]
    fn test_update_tracks_viewport_depth() {
        let anchor = Vec3::new(0.0, -1.3, 0.0);
        let mut text = LitText::new("ABOUT ME", TextAlign::Center, anchor);

        text.update(&ctx(0.0, 1920.0, 1080.0));
        assert_eq!(text.container.position.x, anchor.x);
        assert_eq!(text.container.position.y, anchor.y);
        assert_eq!(
            text.container.position.z,
            camera_depth(Viewport::new(1920.0, 1080.0))
        );

        // Depth follows a resize; x/y stay anchored
        text.update(&ctx(0.1, 390.0, 844.0));
        assert_eq!(
            text.container.position.z,
            camera_depth(Viewport::new(390.0, 844.0))
        );
        assert_eq!(text.container.position.y, anchor.y);
    }

    #[test]
    fn test_lights_orbit_at_fixed_radius() {
        let mut text = LitText::new("X", TextAlign::Left, Vec3::ZERO);
        for i in 0..50 {
            text.update(&ctx(i as f32 * 0.31, 1280.0, 720.0));
            let parent = text.container.position;
            for pos in text.light_positions(Vec3::ZERO) {
                let radius = (pos - parent).length();
                assert!(
                    (radius - RIG_LIGHT_OFFSET.length()).abs() < 1e-4,
                    "radius {radius} at step {i}"
                );
            }
        }
    }

    #[test]
    fn test_unrotated_rig_places_light_at_local_offset() {
        let text = LitText::new("X", TextAlign::Left, Vec3::ZERO);
        let parent = Vec3::new(1.0, 2.0, 3.0);
        let pos = text.rigs[0].light_world_position(parent);
        assert!((pos - (parent + RIG_LIGHT_OFFSET)).length() < 1e-6);
    }
}
