//! The canonical 512x512 vector rendition of the icon.
//!
//! This is a static template, not a parameterized renderer: the markup is a
//! single literal so every invocation reproduces it byte for byte. The
//! coordinates and stroke widths match what [`crate::artwork`] rasterizes at
//! 512px (center 256,256; radii 148/120/84/48/16; ring stroke 26; shaft
//! strokes 16 and 8).

/// The complete SVG markup.
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 512 512" aria-label="Goal Tracker icon">
  <defs>
    <linearGradient id="bg" x1="96" y1="80" x2="416" y2="432">
      <stop offset="0" stop-color="#E6F6FF"/>
      <stop offset="1" stop-color="#38BDF8"/>
    </linearGradient>
  </defs>

  <rect x="48" y="48" width="416" height="416" rx="96" fill="url(#bg)"/>

  <circle cx="256" cy="256" r="148" fill="#ffffff"/>
  <circle cx="256" cy="256" r="120" fill="none" stroke="#38BDF8" stroke-width="26"/>
  <circle cx="256" cy="256" r="84"  fill="none" stroke="#7DD3FC" stroke-width="26"/>
  <circle cx="256" cy="256" r="48"  fill="none" stroke="#38BDF8" stroke-width="26"/>
  <circle cx="256" cy="256" r="16"  fill="#0B74C5"/>

  <path d="M148 364 L256 256" stroke="#0B74C5" stroke-width="16" stroke-linecap="round"/>
  <path d="M148 364 L256 256" stroke="#7DD3FC" stroke-width="8" stroke-linecap="round"/>
</svg>
"##;
