use crate::constants::{
    DEPTH_BIAS, DEPTH_HEIGHT_PAD, DEPTH_NUMERATOR, FADE_RANGE_END, FADE_SLOPE, RIG_COUNT,
    RIG_PHASES,
};
use crate::types::Viewport;
use glam::Vec3;

/// Compute the Euler orientation of each light rig at elapsed time `t`.
///
/// Each component is a sine of `t` plus the rig's per-axis phase offset,
/// except the diagonal axis (rig 0 → x, rig 1 → y, rig 2 → z) which uses
/// cosine. The three rigs therefore never synchronize.
pub fn rig_orientations(t: f32) -> [Vec3; RIG_COUNT] {
    let mut out = [Vec3::ZERO; RIG_COUNT];
    for (rig, phases) in RIG_PHASES.iter().enumerate() {
        for (axis, phase) in phases.iter().enumerate() {
            let arg = t + phase;
            out[rig][axis] = if axis == rig { arg.cos() } else { arg.sin() };
        }
    }
    out
}

/// Camera-relative depth of a text container for the current viewport.
///
/// Pulls the text away from the camera on large screens and toward it on
/// small ones. The divisor substitutes 1 when the viewport metric is not
/// positive, so the function is total.
pub fn camera_depth(viewport: Viewport) -> f32 {
    let metric = viewport
        .width
        .min(viewport.height + DEPTH_HEIGHT_PAD)
        .max(1.0);
    DEPTH_NUMERATOR / metric + DEPTH_BIAS
}

/// Fraction of scroll progress between `lo` and `hi`, clamped to [0, 1].
///
/// A degenerate span (`hi <= lo`) saturates: 0 below `lo`, 1 at or above.
pub fn range(progress: f32, lo: f32, hi: f32) -> f32 {
    if hi <= lo {
        return if progress < lo { 0.0 } else { 1.0 };
    }
    ((progress - lo) / (hi - lo)).clamp(0.0, 1.0)
}

/// Opacity of the scroll-hint overlay: 1 at progress 0, falling linearly
/// as the user enters the fade range, floored at 0 well before the range
/// ends (the slope is steeper than the range is long).
pub fn fade_opacity(progress: f32) -> f32 {
    (1.0 - FADE_SLOPE * range(progress, 0.0, FADE_RANGE_END)).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientations_match_formulas_at_zero() {
        let [a, b, c] = rig_orientations(0.0);
        assert_eq!(a, Vec3::new(100f32.cos(), 200f32.sin(), 300f32.sin()));
        assert_eq!(b, Vec3::new(400f32.sin(), 500f32.cos(), 600f32.sin()));
        assert_eq!(c, Vec3::new(700f32.sin(), 800f32.sin(), 900f32.cos()));
    }

    #[test]
    fn test_orientation_components_bounded() {
        for i in 0..2000 {
            let t = i as f32 * 0.173;
            for rig in rig_orientations(t) {
                for axis in 0..3 {
                    assert!(rig[axis] >= -1.0 && rig[axis] <= 1.0, "t={t} rig={rig:?}");
                }
            }
        }
    }

    #[test]
    fn test_depth_typical_viewport() {
        // 1920x1080: metric = min(1920, 1580) = 1580
        let z = camera_depth(Viewport::new(1920.0, 1080.0));
        assert!((z - (-2000.0 / 1580.0 + 4.0)).abs() < 1e-5, "got {z}");
    }

    #[test]
    fn test_depth_narrow_viewport_uses_width() {
        // Portrait phone: width is the limiting metric
        let z = camera_depth(Viewport::new(390.0, 844.0));
        assert!((z - (-2000.0 / 390.0 + 4.0)).abs() < 1e-5, "got {z}");
    }

    #[test]
    fn test_depth_zero_viewport_uses_fallback() {
        assert_eq!(camera_depth(Viewport::new(0.0, 0.0)), -1996.0);
        assert_eq!(camera_depth(Viewport::new(0.0, -500.0)), -1996.0);
    }

    #[test]
    fn test_depth_finite_everywhere() {
        for w in [0.0, 1.0, 320.0, 1024.0, 3840.0] {
            for h in [0.0, 1.0, 568.0, 768.0, 2160.0] {
                assert!(camera_depth(Viewport::new(w, h)).is_finite());
            }
        }
    }

    #[test]
    fn test_depth_continuous_around_metric_one() {
        // The max(1, ...) guard must not introduce a jump
        let below = camera_depth(Viewport::new(0.999, 10000.0));
        let above = camera_depth(Viewport::new(1.001, 10000.0));
        assert!((below - above).abs() < 0.01, "{below} vs {above}");
    }

    #[test]
    fn test_range_clamps() {
        assert_eq!(range(-0.5, 0.0, 0.25), 0.0);
        assert_eq!(range(0.0, 0.0, 0.25), 0.0);
        assert_eq!(range(0.125, 0.0, 0.25), 0.5);
        assert_eq!(range(0.25, 0.0, 0.25), 1.0);
        assert_eq!(range(2.0, 0.0, 0.25), 1.0);
    }

    #[test]
    fn test_range_degenerate_span_saturates() {
        assert_eq!(range(0.1, 0.5, 0.5), 0.0);
        assert_eq!(range(0.5, 0.5, 0.5), 1.0);
        assert_eq!(range(0.9, 0.5, 0.2), 1.0);
    }

    #[test]
    fn test_fade_endpoints() {
        assert_eq!(fade_opacity(0.0), 1.0);
        // Half-way down the slope, then fully faded
        assert!((fade_opacity(FADE_RANGE_END / (2.0 * FADE_SLOPE)) - 0.5).abs() < 1e-6);
        assert_eq!(fade_opacity(FADE_RANGE_END / FADE_SLOPE), 0.0);
        assert_eq!(fade_opacity(FADE_RANGE_END), 0.0);
        assert_eq!(fade_opacity(1.0), 0.0);
    }

    #[test]
    fn test_fade_never_negative_and_non_increasing() {
        let mut prev = f32::INFINITY;
        for i in 0..=100 {
            let o = fade_opacity(i as f32 / 100.0);
            assert!((0.0..=1.0).contains(&o));
            assert!(o <= prev, "opacity increased at step {i}");
            prev = o;
        }
    }
}
