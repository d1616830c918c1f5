//! Single source of truth for the animation and layout constants shared
//! across the scene, render, and web crates.

use glam::Vec3;

/// Number of virtual scroll pages the scene is divided into.
pub const PAGE_COUNT: u32 = 4;

/// Phase offsets (seconds) fed into the orbit trig functions, one row per
/// light rig. The cosine falls on the diagonal axis, sine elsewhere.
pub const RIG_PHASES: [[f32; 3]; 3] = [
    [100.0, 200.0, 300.0],
    [400.0, 500.0, 600.0],
    [700.0, 800.0, 900.0],
];

/// Number of light rigs orbiting each text block.
pub const RIG_COUNT: usize = RIG_PHASES.len();

/// Local offset of the point light inside its rig.
pub const RIG_LIGHT_OFFSET: Vec3 = Vec3::new(0.0, 0.0, 0.5);

/// Container depth formula: z = DEPTH_NUMERATOR / metric + DEPTH_BIAS,
/// where metric = max(1, min(viewport width, viewport height + DEPTH_HEIGHT_PAD)).
pub const DEPTH_NUMERATOR: f32 = -2000.0;
pub const DEPTH_BIAS: f32 = 4.0;
pub const DEPTH_HEIGHT_PAD: f32 = 500.0;

/// The hint overlay fades across the scroll sub-range [0, FADE_RANGE_END],
/// with opacity = 1 - FADE_SLOPE * fraction-through-range, floored at 0.
pub const FADE_RANGE_END: f32 = 0.25;
pub const FADE_SLOPE: f32 = 4.0;

/// Fixed camera: vertical field of view and distance to the content plane.
pub const CAMERA_FOV_DEG: f32 = 30.0;
pub const CAMERA_DISTANCE: f32 = 5.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 500.0;

/// Headline text styling, in world units per em.
pub const TEXT_FONT_SIZE: f32 = 0.3;
pub const TEXT_OUTLINE_WIDTH: f32 = 0.0025;
pub const TEXT_LETTER_SPACING: f32 = 0.02;
pub const TEXT_LINE_HEIGHT: f32 = 1.0;

/// Wrap width for headline blocks. Deliberately narrower than a single
/// glyph so every word lands on its own line, stacking the headline.
pub const TEXT_MAX_WIDTH: f32 = 0.1;
