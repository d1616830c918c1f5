use crate::camera::Camera;
use crate::lit_text::LitText;
use glam::Vec3;
use limelight_core::constants::{PAGE_COUNT, RIG_COUNT};
use limelight_core::types::{FrameContext, TextAlign};

/// One text block ready for drawing, with its three light positions
/// already resolved to world space.
pub struct TextDraw<'a> {
    pub text: &'a str,
    pub align: TextAlign,
    pub position: Vec3,
    pub lights: [Vec3; RIG_COUNT],
}

/// Flat draw list emitted once per frame and consumed by the renderer.
pub struct DrawList<'a> {
    pub texts: Vec<TextDraw<'a>>,
}

/// Scene root: a fixed camera, a scroll-translated group, and the lit
/// headline blocks placed down the page.
pub struct Scene {
    pub camera: Camera,
    entries: Vec<LitText>,
    group_offset: Vec3,
}

impl Scene {
    /// Build the scene from headline entries: text, alignment, and a
    /// vertical position in viewport heights (0 = first page, negative =
    /// further down the scroll).
    pub fn new<S: Into<String>>(headlines: impl IntoIterator<Item = (S, TextAlign, f32)>) -> Self {
        let camera = Camera::new();
        let vh = camera.world_viewport_height();
        let entries: Vec<LitText> = headlines
            .into_iter()
            .map(|(text, align, vh_multiple)| {
                LitText::new(text, align, Vec3::new(0.0, vh * vh_multiple, 0.0))
            })
            .collect();
        log::debug!("scene built: {} headline blocks", entries.len());
        Self {
            camera,
            entries,
            group_offset: Vec3::ZERO,
        }
    }

    /// Advance one frame: the scrolled group offset first, then every
    /// text block, in registration order. No cross-entry state is shared
    /// beyond the read-only context.
    pub fn update(&mut self, ctx: &FrameContext) {
        let extent = (PAGE_COUNT - 1) as f32 * self.camera.world_viewport_height();
        self.group_offset = Vec3::new(0.0, ctx.scroll_progress * extent, 0.0);
        for entry in &mut self.entries {
            entry.update(ctx);
        }
    }

    pub fn draw_list(&self) -> DrawList<'_> {
        let texts = self
            .entries
            .iter()
            .map(|entry| TextDraw {
                text: &entry.text,
                align: entry.align,
                position: self.group_offset + entry.container.position,
                lights: entry.light_positions(self.group_offset),
            })
            .collect();
        DrawList { texts }
    }

    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use limelight_core::types::Viewport;

    fn demo_scene() -> Scene {
        Scene::new([
            ("FIRST LAST", TextAlign::Left, 0.0),
            ("ABOUT ME", TextAlign::Center, -0.5),
            ("CONTACT", TextAlign::Center, -2.5),
        ])
    }

    fn ctx(progress: f32) -> FrameContext {
        FrameContext {
            elapsed: 1.0,
            scroll_progress: progress,
            viewport: Viewport::new(1920.0, 1080.0),
        }
    }

    #[test]
    fn test_headlines_placed_in_viewport_heights() {
        let mut scene = demo_scene();
        scene.update(&ctx(0.0));
        let vh = scene.camera.world_viewport_height();
        let draws = scene.draw_list();
        assert_eq!(draws.texts.len(), 3);
        assert_eq!(draws.texts[0].position.y, 0.0);
        assert!((draws.texts[1].position.y - (-0.5 * vh)).abs() < 1e-5);
        assert!((draws.texts[2].position.y - (-2.5 * vh)).abs() < 1e-5);
    }

    #[test]
    fn test_full_scroll_lifts_content_by_extent() {
        let mut scene = demo_scene();
        scene.update(&ctx(1.0));
        let vh = scene.camera.world_viewport_height();
        let draws = scene.draw_list();
        // Group rises by (PAGE_COUNT - 1) viewport heights, so the last
        // headline ends half a viewport above center.
        let want = (PAGE_COUNT - 1) as f32 * vh - 2.5 * vh;
        assert!((draws.texts[2].position.y - want).abs() < 1e-5);
    }

    #[test]
    fn test_each_draw_carries_its_rig_lights() {
        let mut scene = demo_scene();
        scene.update(&ctx(0.25));
        for draw in scene.draw_list().texts {
            assert_eq!(draw.lights.len(), RIG_COUNT);
            for light in draw.lights {
                // Lights stay on the rig sphere around their own block
                assert!((light - draw.position).length() < 1.0);
            }
        }
    }

    #[test]
    fn test_update_is_deterministic_in_context() {
        let mut a = demo_scene();
        let mut b = demo_scene();
        a.update(&ctx(0.4));
        b.update(&ctx(0.4));
        let (da, db) = (a.draw_list(), b.draw_list());
        for (x, y) in da.texts.iter().zip(db.texts.iter()) {
            assert_eq!(x.position, y.position);
            assert_eq!(x.lights, y.lights);
        }
    }
}
