//! goal-icons: build-time icon asset generator for the Goal Tracker app.
//!
//! Renders a stylized "target with an arrow" logo (rounded gradient
//! background, white disc, three rings, navy center dot, round-capped
//! diagonal shaft) as PNG rasters at the app's required sizes, plus one
//! canonical 512x512 SVG. The whole pipeline is a pure function of the
//! requested size and a fixed palette, so output files are byte-stable
//! across runs.
//!
//! # Example
//!
//! ```
//! use goal_icons::render_icon;
//!
//! let icon = render_icon(192);
//! assert_eq!(icon.dimensions(), (192, 192));
//! ```
//!
//! The binary entry point writes the fixed asset set:
//!
//! ```no_run
//! use std::path::Path;
//!
//! goal_icons::generate(Path::new(goal_icons::DEFAULT_OUT_DIR)).unwrap();
//! ```

mod artwork;
mod canvas;
mod color;
mod geometry;
mod manifest;
mod output;
mod svg;

pub use artwork::render_icon;
pub use canvas::{Canvas, gradient, rounded_mask};
pub use color::{BG_BOTTOM, BG_TOP, NAVY, RING_A, RING_B, WHITE};
pub use geometry::{ArtworkGeometry, CORNER_RADIUS_RATIO};
pub use manifest::{IconManifest, IconPurpose, ManifestIcon};
pub use output::{
    DEFAULT_OUT_DIR, OutputError, RASTER_TARGETS, RasterTarget, SVG_FILE_NAME, generate,
};
pub use svg::ICON_SVG;
