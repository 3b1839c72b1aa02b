//! Output targets and the one-shot generation driver.
//!
//! Each write is independent and overwrites any pre-existing file at the
//! same path, so re-running the generator is idempotent.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use thiserror::Error;

use crate::artwork::render_icon;
use crate::manifest::IconPurpose;
use crate::svg::ICON_SVG;

/// Output directory the binary writes into, relative to the working
/// directory (the web app's `public/` tree).
pub const DEFAULT_OUT_DIR: &str = "public/icons";

/// Filename of the vector rendition.
pub const SVG_FILE_NAME: &str = "target-icon.svg";

/// One required raster output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterTarget {
    /// Filename under the output directory.
    pub file_name: &'static str,
    /// Square side length in pixels.
    pub size: u32,
    /// Purpose the asset manifest declares for this file.
    pub purpose: IconPurpose,
}

/// The four required PNG renders.
///
/// The maskable 512 variant is pixel-identical to the standard one; the two
/// files target different consumer semantics but share generation logic.
pub const RASTER_TARGETS: [RasterTarget; 4] = [
    RasterTarget {
        file_name: "icon-192.png",
        size: 192,
        purpose: IconPurpose::Any,
    },
    RasterTarget {
        file_name: "icon-512.png",
        size: 512,
        purpose: IconPurpose::Any,
    },
    RasterTarget {
        file_name: "maskable-512.png",
        size: 512,
        purpose: IconPurpose::Maskable,
    },
    RasterTarget {
        file_name: "apple-touch-icon.png",
        size: 180,
        purpose: IconPurpose::Any,
    },
];

/// Failures while persisting the generated assets.
///
/// Rendering itself cannot fail; only directory creation, the SVG write,
/// and PNG encoding/writing touch fallible ground.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}: {source}", .path.display())]
    WriteSvg { path: PathBuf, source: io::Error },

    #[error("failed to save {}: {source}", .path.display())]
    SavePng {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Generates the full asset set under `out_dir`.
///
/// Creates the directory tree if absent, writes the SVG once, then renders
/// and saves the four raster targets. Calls are order-insensitive with no
/// shared state between them; existing files are overwritten silently.
pub fn generate(out_dir: &Path) -> Result<(), OutputError> {
    fs::create_dir_all(out_dir).map_err(|source| OutputError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let svg_path = out_dir.join(SVG_FILE_NAME);
    fs::write(&svg_path, ICON_SVG).map_err(|source| OutputError::WriteSvg {
        path: svg_path.clone(),
        source,
    })?;

    for target in RASTER_TARGETS {
        let path = out_dir.join(target.file_name);
        render_icon(target.size)
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|source| OutputError::SavePng {
                path: path.clone(),
                source,
            })?;
    }

    Ok(())
}
