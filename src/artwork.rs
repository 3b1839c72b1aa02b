//! The target-with-arrow artwork and the full icon composition.
//!
//! [`render_icon`] is the raster entry point: it builds the masked gradient
//! background, rasterizes the target artwork with tiny-skia, and composites
//! the two into one square RGBA image. The procedure is a pure function of
//! the size and the fixed palette/geometry constants, so repeated renders
//! are byte-identical.

use image::RgbaImage;
use palette::Srgb;
use resvg::tiny_skia::{
    FillRule, LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::canvas::{self, Canvas};
use crate::color::{NAVY, RING_A, RING_B, WHITE};
use crate::geometry::ArtworkGeometry;

/// Renders the complete icon at the given side length.
///
/// Always produces a `size x size` image for any positive size.
/// Pathologically small sizes degrade visually (elements collapse to their
/// minimum stroke widths or round to nothing) but never panic.
pub fn render_icon(size: u32) -> RgbaImage {
    let geometry = ArtworkGeometry::for_size(size);

    let mut canvas = Canvas::transparent(size);
    let background = canvas::gradient(size);
    let silhouette = canvas::rounded_mask(size, geometry.corner_radius);
    canvas.masked_paste(&background, &silhouette);

    // Pixmap creation only fails for a zero-sized canvas, where there is
    // nothing to draw anyway.
    if let Some(target) = draw_target(size, &geometry) {
        canvas.composite_over(&target, 0, 0);
    }

    canvas.into_image()
}

/// Rasterizes the target artwork on a transparent pixmap.
///
/// Draw order matters: white backing disc, the three rings outermost first,
/// the navy center dot, then the two shaft strokes with the highlight on top.
fn draw_target(size: u32, geometry: &ArtworkGeometry) -> Option<RgbaImage> {
    let mut pixmap = Pixmap::new(size, size)?;

    let (cx, cy) = geometry.center;
    let cx = cx as f32;
    let cy = cy as f32;

    fill_circle(&mut pixmap, cx, cy, geometry.outer_disc_radius, WHITE);

    let ring_stroke = Stroke {
        width: geometry.ring_stroke as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    for (radius, color) in geometry.ring_radii.into_iter().zip([RING_A, RING_B, RING_A]) {
        if let Some(ring) = PathBuilder::from_circle(cx, cy, radius as f32) {
            pixmap.stroke_path(
                &ring,
                &paint_for(color),
                &ring_stroke,
                Transform::identity(),
                None,
            );
        }
    }

    fill_circle(&mut pixmap, cx, cy, geometry.dot_radius, NAVY);

    // Shadow/base stroke, then the half-width highlight over it.
    let (sx, sy) = geometry.shaft_start;
    stroke_segment(
        &mut pixmap,
        (sx as f32, sy as f32),
        (cx, cy),
        geometry.shaft_stroke,
        NAVY,
    );
    stroke_segment(
        &mut pixmap,
        (sx as f32, sy as f32),
        (cx, cy),
        geometry.highlight_stroke,
        RING_B,
    );

    Some(canvas::pixmap_to_rgba_image(&pixmap))
}

fn paint_for(color: Srgb<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, 255);
    paint.anti_alias = true;
    paint
}

/// Fills a solid disc; a radius that rounded to zero draws nothing.
fn fill_circle(pixmap: &mut Pixmap, cx: f32, cy: f32, radius: u32, color: Srgb<u8>) {
    let Some(path) = PathBuilder::from_circle(cx, cy, radius as f32) else {
        return;
    };
    pixmap.fill_path(
        &path,
        &paint_for(color),
        FillRule::Winding,
        Transform::identity(),
        None,
    );
}

/// Strokes a straight segment with round caps so the ends are not clipped.
fn stroke_segment(
    pixmap: &mut Pixmap,
    from: (f32, f32),
    to: (f32, f32),
    width: u32,
    color: Srgb<u8>,
) {
    let mut pb = PathBuilder::new();
    pb.move_to(from.0, from.1);
    pb.line_to(to.0, to.1);
    let Some(path) = pb.finish() else {
        return;
    };

    let stroke = Stroke {
        width: width as f32,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    pixmap.stroke_path(
        &path,
        &paint_for(color),
        &stroke,
        Transform::identity(),
        None,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color;

    #[test]
    fn renders_exact_dimensions_for_all_supported_sizes() {
        for size in [180u32, 192, 512] {
            let img = render_icon(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let a = render_icon(192);
        let b = render_icon(192);
        assert_eq!(a.as_raw(), b.as_raw());
    }

    #[test]
    fn corners_stay_transparent_outside_the_silhouette() {
        let img = render_icon(512);
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(511, 0).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(0, 511).0, [0, 0, 0, 0]);
        assert_eq!(img.get_pixel(511, 511).0, [0, 0, 0, 0]);
    }

    #[test]
    fn background_gradient_shows_through_above_the_disc() {
        // (256, 2) is inside the silhouette but above all artwork, so the
        // composed pixel equals the raw gradient row.
        let img = render_icon(512);
        let grad = canvas::gradient(512);
        assert_eq!(img.get_pixel(256, 2), grad.get_pixel(256, 2));
        assert_eq!(img.get_pixel(256, 2)[3], 255);
    }

    #[test]
    fn sampled_artwork_pixels_match_the_palette() {
        let img = render_icon(512);

        // Between ring 1 (120 +/- 13) and ring 2 (84 +/- 13): white disc.
        assert_eq!(
            img.get_pixel(256 + 102, 256).0,
            color::to_rgba(color::WHITE, 255)
        );
        // On the ring 1 stroke centerline.
        assert_eq!(
            img.get_pixel(256 + 120, 256).0,
            color::to_rgba(color::RING_A, 255)
        );
        // On the ring 2 stroke centerline.
        assert_eq!(
            img.get_pixel(256 + 84, 256).0,
            color::to_rgba(color::RING_B, 255)
        );
        // The exact center is covered by the highlight's round end cap.
        assert_eq!(
            img.get_pixel(256, 256).0,
            color::to_rgba(color::RING_B, 255)
        );
        // Upper-right of center: inside the dot, away from the shaft.
        assert_eq!(
            img.get_pixel(256 + 10, 256 - 10).0,
            color::to_rgba(color::NAVY, 255)
        );
    }

    #[test]
    fn shaft_base_is_navy_under_the_highlight() {
        let img = render_icon(512);
        // Midpoint of the shaft, offset perpendicular to the segment by
        // 5px: outside the 8px-wide highlight, inside the 16px base.
        let (mx, my) = (202u32, 310u32);
        let offset = (4u32, 4u32);
        assert_eq!(
            img.get_pixel(mx + offset.0, my + offset.1).0,
            color::to_rgba(color::NAVY, 255)
        );
    }

    #[test]
    fn degenerate_sizes_do_not_panic() {
        for size in [1u32, 2, 4, 9] {
            let img = render_icon(size);
            assert_eq!(img.dimensions(), (size, size));
        }
    }
}
