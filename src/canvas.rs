//! The owned RGBA drawing surface and its pixel-level operations.
//!
//! A [`Canvas`] starts fully transparent and is progressively painted by a
//! linear sequence of operations, each borrowing it exclusively. Nothing
//! here touches the filesystem; persistence lives in [`crate::output`].

use image::{GrayImage, Luma, Rgba, RgbaImage};
use resvg::tiny_skia::Pixmap;

use crate::color::{self, BG_BOTTOM, BG_TOP};

/// A square RGBA buffer owned by a single renderer invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    data: RgbaImage,
}

impl Canvas {
    /// Creates a fully transparent square canvas of the given side.
    pub fn transparent(size: u32) -> Self {
        Self {
            data: RgbaImage::new(size, size),
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }

    /// Read access to the pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.data
    }

    /// Consumes the canvas, yielding the pixel buffer.
    pub fn into_image(self) -> RgbaImage {
        self.data
    }

    /// Pastes `src` onto the canvas through `mask`.
    ///
    /// PIL-style masked paste: per channel (alpha included) the result is
    /// `dst + (src - dst) * mask / 255`. With the binary rounded-rect mask
    /// this copies `src` where the mask is 255 and leaves the canvas
    /// untouched (fully transparent) where it is 0.
    pub fn masked_paste(&mut self, src: &RgbaImage, mask: &GrayImage) {
        debug_assert_eq!(src.dimensions(), self.data.dimensions());
        debug_assert_eq!(mask.dimensions(), self.data.dimensions());

        for (x, y, pixel) in self.data.enumerate_pixels_mut() {
            let m = mask.get_pixel(x, y)[0] as u16;
            if m == 0 {
                continue;
            }
            let s = src.get_pixel(x, y);
            for c in 0..4 {
                let d = pixel[c] as u16;
                let sv = s[c] as u16;
                pixel[c] = ((d * (255 - m) + sv * m + 127) / 255) as u8;
            }
        }
    }

    /// Composites `src` over the canvas at `(x, y)` with source-over
    /// alpha blending.
    pub fn composite_over(&mut self, src: &RgbaImage, x: i32, y: i32) {
        let width = self.data.width() as i32;
        let height = self.data.height() as i32;

        for sy in 0..src.height() {
            for sx in 0..src.width() {
                let dx = x + sx as i32;
                let dy = y + sy as i32;
                if dx < 0 || dy < 0 || dx >= width || dy >= height {
                    continue;
                }

                let src_pixel = src.get_pixel(sx, sy);
                let dst_pixel = self.data.get_pixel(dx as u32, dy as u32);
                let blended = alpha_blend(*src_pixel, *dst_pixel);
                self.data.put_pixel(dx as u32, dy as u32, blended);
            }
        }
    }
}

/// Builds the fully opaque vertical background gradient.
///
/// Every pixel in row `y` is the blend of the top and bottom palette colors
/// at `t = y / (size - 1)`; a single-row canvas takes `t = 0` rather than
/// dividing by zero.
pub fn gradient(size: u32) -> RgbaImage {
    let mut img = RgbaImage::new(size, size);
    for y in 0..size {
        let t = if size > 1 {
            y as f32 / (size - 1) as f32
        } else {
            0.0
        };
        let row = color::to_rgba(color::blend(BG_TOP, BG_BOTTOM, t), 255);
        for x in 0..size {
            img.put_pixel(x, y, Rgba(row));
        }
    }
    img
}

/// Builds the binary rounded-rectangle silhouette mask.
///
/// 255 inside a rounded square spanning the whole canvas, 0 outside. A pixel
/// is inside when it sits within `radius` of the inner rectangle obtained by
/// insetting each side by `radius` (clamping the pixel to that rectangle and
/// checking the corner-circle distance covers edges and corners in one test).
pub fn rounded_mask(size: u32, radius: u32) -> GrayImage {
    let mut mask = GrayImage::new(size, size);
    let s = size as i64;
    let r = (radius as i64).clamp(0, (s - 1).max(0) / 2);

    for (x, y, pixel) in mask.enumerate_pixels_mut() {
        let px = x as i64;
        let py = y as i64;
        let cx = px.clamp(r, s - 1 - r);
        let cy = py.clamp(r, s - 1 - r);
        let dx = px - cx;
        let dy = py - cy;
        if dx * dx + dy * dy <= r * r {
            *pixel = Luma([255]);
        }
    }
    mask
}

/// Alpha blends two RGBA pixels (source over destination).
fn alpha_blend(src: Rgba<u8>, dst: Rgba<u8>) -> Rgba<u8> {
    let sa = src[3] as f32 / 255.0;
    let da = dst[3] as f32 / 255.0;

    let out_a = sa + da * (1.0 - sa);
    if out_a == 0.0 {
        return Rgba([0, 0, 0, 0]);
    }

    let blend = |s: u8, d: u8| -> u8 {
        let sf = s as f32 / 255.0;
        let df = d as f32 / 255.0;
        let out = (sf * sa + df * da * (1.0 - sa)) / out_a;
        (out * 255.0).round() as u8
    };

    Rgba([
        blend(src[0], dst[0]),
        blend(src[1], dst[1]),
        blend(src[2], dst[2]),
        (out_a * 255.0).round() as u8,
    ])
}

/// Converts a tiny_skia Pixmap to an image::RgbaImage.
///
/// tiny_skia stores premultiplied alpha; this unpremultiplies on the way out.
pub(crate) fn pixmap_to_rgba_image(pixmap: &Pixmap) -> RgbaImage {
    let width = pixmap.width();
    let height = pixmap.height();
    let mut img = RgbaImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            // In-bounds by construction; pixel() only fails out of range.
            let Some(pixel) = pixmap.pixel(x, y) else {
                continue;
            };
            let (r, g, b, a) =
                unpremultiply(pixel.red(), pixel.green(), pixel.blue(), pixel.alpha());
            img.put_pixel(x, y, Rgba([r, g, b, a]));
        }
    }
    img
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}
