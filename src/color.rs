//! The fixed icon palette and the gradient blend.
//!
//! All colors are fully opaque; transparency only ever comes from the
//! rounded-rectangle mask applied in [`crate::canvas`].

use palette::{Mix, Srgb};

/// Background gradient, top row. `#E6F6FF`
pub const BG_TOP: Srgb<u8> = Srgb::new(0xE6, 0xF6, 0xFF);

/// Background gradient, bottom row. `#38BDF8`
pub const BG_BOTTOM: Srgb<u8> = Srgb::new(0x38, 0xBD, 0xF8);

/// Outer and inner ring stroke. `#38BDF8`
pub const RING_A: Srgb<u8> = Srgb::new(0x38, 0xBD, 0xF8);

/// Middle ring stroke and shaft highlight. `#7DD3FC`
pub const RING_B: Srgb<u8> = Srgb::new(0x7D, 0xD3, 0xFC);

/// Center dot and shaft base stroke. `#0B74C5`
pub const NAVY: Srgb<u8> = Srgb::new(0x0B, 0x74, 0xC5);

/// Target disc fill. `#FFFFFF`
pub const WHITE: Srgb<u8> = Srgb::new(0xFF, 0xFF, 0xFF);

/// Linearly blends two palette colors at `t` (0.0 = `a`, 1.0 = `b`).
///
/// Per channel this is `round(a + (b - a) * t)` on the 8-bit values: the
/// blend happens on the f32 representation and `into_format` rounds on the
/// way back to u8, so each row of the gradient lands on the nearest
/// integer channel value.
pub fn blend(a: Srgb<u8>, b: Srgb<u8>, t: f32) -> Srgb<u8> {
    a.into_format::<f32>()
        .mix(b.into_format::<f32>(), t)
        .into_format::<u8>()
}

/// Converts a palette color to the RGBA byte layout used by image buffers.
pub fn to_rgba(color: Srgb<u8>, alpha: u8) -> [u8; 4] {
    [color.red, color.green, color.blue, alpha]
}
