use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Dimensions of the rendering surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Read-only inputs broadcast to every per-frame update function.
///
/// Built once per displayed frame by the host loop; nothing reads the
/// clock, scroll position, or window size from ambient globals.
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    /// Seconds since the scene started, monotonically increasing.
    pub elapsed: f32,
    /// Normalized scroll progress through the virtual page set, in [0, 1].
    pub scroll_progress: f32,
    pub viewport: Viewport,
}

/// Horizontal alignment of a text block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Right,
    Center,
    Justify,
}

/// Owned mutable transform record for a scene node.
///
/// Rotation is XYZ Euler angles in radians. Mutated in place by the
/// per-frame updates rather than rebuilt declaratively.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
