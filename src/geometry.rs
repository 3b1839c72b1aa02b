//! Derived measurements for the target artwork.
//!
//! Every measurement is a fixed fraction of the canvas side, rounded to the
//! nearest pixel, so the visual proportions are identical across all
//! rendered sizes. Stroke widths have small pixel floors so pathologically
//! small canvases still produce visible (if degenerate) output.

/// Corner radius of the rounded background silhouette, as a fraction of size.
pub const CORNER_RADIUS_RATIO: f32 = 0.1875;

/// Outer white disc radius ratio (~148px at 512).
const OUTER_DISC_RATIO: f32 = 0.289;
/// Ring radii ratios, outermost first (~120/84/48px at 512).
const RING_RATIOS: [f32; 3] = [0.234, 0.164, 0.094];
/// Center dot radius ratio (~16px at 512).
const DOT_RATIO: f32 = 0.031;
/// Ring stroke width ratio (~26px at 512).
const RING_STROKE_RATIO: f32 = 0.051;
/// Shaft base stroke width ratio (~16px at 512).
const SHAFT_STROKE_RATIO: f32 = 0.031;
/// Shaft highlight stroke width ratio (~8px at 512).
const HIGHLIGHT_STROKE_RATIO: f32 = 0.016;
/// Shaft start point ratios (~(148, 364) at 512). The shaft ends at center.
const SHAFT_START_X_RATIO: f32 = 0.289;
const SHAFT_START_Y_RATIO: f32 = 0.711;

/// Rounds `size * ratio` to the nearest integer pixel.
pub fn scaled(size: u32, ratio: f32) -> u32 {
    (size as f32 * ratio).round() as u32
}

/// All pixel measurements for one render, derived from the canvas side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArtworkGeometry {
    /// Center of the target, `(size / 2, size / 2)`.
    pub center: (u32, u32),
    /// Radius of the solid white backing disc.
    pub outer_disc_radius: u32,
    /// Radii of the three concentric ring outlines, outermost first.
    pub ring_radii: [u32; 3],
    /// Radius of the solid navy center dot.
    pub dot_radius: u32,
    /// Stroke width shared by all three rings. At least 2px.
    pub ring_stroke: u32,
    /// Shaft base stroke width. At least 2px.
    pub shaft_stroke: u32,
    /// Shaft highlight stroke width (half-scale overlay). At least 1px.
    pub highlight_stroke: u32,
    /// Off-center start of the shaft; the other endpoint is `center`.
    pub shaft_start: (u32, u32),
    /// Corner radius of the background silhouette.
    pub corner_radius: u32,
}

impl ArtworkGeometry {
    /// Derives all measurements for a square canvas of the given side.
    pub fn for_size(size: u32) -> Self {
        Self {
            center: (size / 2, size / 2),
            outer_disc_radius: scaled(size, OUTER_DISC_RATIO),
            ring_radii: RING_RATIOS.map(|r| scaled(size, r)),
            dot_radius: scaled(size, DOT_RATIO),
            ring_stroke: scaled(size, RING_STROKE_RATIO).max(2),
            shaft_stroke: scaled(size, SHAFT_STROKE_RATIO).max(2),
            highlight_stroke: scaled(size, HIGHLIGHT_STROKE_RATIO).max(1),
            shaft_start: (
                scaled(size, SHAFT_START_X_RATIO),
                scaled(size, SHAFT_START_Y_RATIO),
            ),
            corner_radius: scaled(size, CORNER_RADIUS_RATIO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_values_at_512() {
        let g = ArtworkGeometry::for_size(512);
        assert_eq!(g.center, (256, 256));
        assert_eq!(g.outer_disc_radius, 148);
        assert_eq!(g.ring_radii, [120, 84, 48]);
        assert_eq!(g.dot_radius, 16);
        assert_eq!(g.ring_stroke, 26);
        assert_eq!(g.shaft_stroke, 16);
        assert_eq!(g.highlight_stroke, 8);
        assert_eq!(g.shaft_start, (148, 364));
        assert_eq!(g.corner_radius, 96);
    }

    #[test]
    fn proportions_are_scale_invariant() {
        // The ratio of any measurement to size must agree across sizes
        // within integer-rounding tolerance (±1px after rescaling).
        let sizes = [180u32, 192, 512];
        for window in sizes.windows(2) {
            let (a, b) = (window[0], window[1]);
            let ga = ArtworkGeometry::for_size(a);
            let gb = ArtworkGeometry::for_size(b);
            let pairs = [
                (ga.outer_disc_radius, gb.outer_disc_radius),
                (ga.ring_radii[0], gb.ring_radii[0]),
                (ga.ring_radii[1], gb.ring_radii[1]),
                (ga.ring_radii[2], gb.ring_radii[2]),
                (ga.dot_radius, gb.dot_radius),
                (ga.corner_radius, gb.corner_radius),
            ];
            for (ma, mb) in pairs {
                let rescaled = (mb as f32 * a as f32 / b as f32).round() as i64;
                assert!(
                    (ma as i64 - rescaled).abs() <= 1,
                    "measurement {ma} at size {a} vs {mb} at size {b}"
                );
            }
        }
    }

    #[test]
    fn stroke_floors_hold_for_tiny_sizes() {
        let g = ArtworkGeometry::for_size(8);
        assert!(g.ring_stroke >= 2);
        assert!(g.shaft_stroke >= 2);
        assert!(g.highlight_stroke >= 1);
    }
}
