//! Serializable description of the generated asset set.
//!
//! The PNG/SVG outputs exist to be declared in the consuming web app's
//! manifest `icons` array. [`IconManifest`] captures that declaration in a
//! format that can be serialized to JSON and pasted into (or diffed against)
//! a `manifest.webmanifest`.
//!
//! # Example
//!
//! ```
//! use goal_icons::IconManifest;
//!
//! let manifest = IconManifest::for_generated_assets();
//! let json = manifest.to_json_pretty().unwrap();
//! assert!(json.contains("maskable-512.png"));
//! ```

use serde::{Deserialize, Serialize};

use crate::output::{RASTER_TARGETS, SVG_FILE_NAME};

/// The purpose a web-app manifest declares for an icon entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPurpose {
    /// General-purpose icon.
    Any,
    /// Icon with safe-zone padding semantics for adaptive shapes.
    Maskable,
}

/// One entry of the manifest `icons` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestIcon {
    /// Path of the asset relative to the site root.
    pub src: String,

    /// Declared dimensions, e.g. `"512x512"`, or `"any"` for vectors.
    pub sizes: String,

    /// MIME type of the asset.
    #[serde(rename = "type")]
    pub media_type: String,

    /// Declared purpose of the entry.
    pub purpose: IconPurpose,
}

/// The full set of icon entries for the generated assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct IconManifest {
    pub icons: Vec<ManifestIcon>,
}

impl IconManifest {
    /// Builds the manifest for the fixed output set the driver writes.
    ///
    /// Entries come from the same target table as the raster renders, so the
    /// declaration can never drift from what lands on disk.
    pub fn for_generated_assets() -> Self {
        let mut icons = vec![ManifestIcon {
            src: format!("icons/{SVG_FILE_NAME}"),
            sizes: "any".to_string(),
            media_type: "image/svg+xml".to_string(),
            purpose: IconPurpose::Any,
        }];

        icons.extend(RASTER_TARGETS.iter().map(|target| ManifestIcon {
            src: format!("icons/{}", target.file_name),
            sizes: format!("{0}x{0}", target.size),
            media_type: "image/png".to_string(),
            purpose: target.purpose,
        }));

        Self { icons }
    }

    /// Serializes the manifest to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the manifest to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn covers_every_output_file() {
        let manifest = IconManifest::for_generated_assets();
        assert_eq!(manifest.icons.len(), 5);

        let srcs: Vec<_> = manifest.icons.iter().map(|i| i.src.as_str()).collect();
        assert_eq!(
            srcs,
            [
                "icons/target-icon.svg",
                "icons/icon-192.png",
                "icons/icon-512.png",
                "icons/maskable-512.png",
                "icons/apple-touch-icon.png",
            ]
        );
    }

    #[test]
    fn maskable_variant_is_declared_maskable() {
        let manifest = IconManifest::for_generated_assets();
        let maskable = manifest
            .icons
            .iter()
            .find(|i| i.src.ends_with("maskable-512.png"))
            .unwrap();
        assert_eq!(maskable.purpose, IconPurpose::Maskable);
        assert_eq!(maskable.sizes, "512x512");
        assert_eq!(maskable.media_type, "image/png");
    }

    #[test]
    fn json_round_trip_preserves_entries() {
        let manifest = IconManifest::for_generated_assets();
        let json = manifest.to_json().unwrap();
        assert!(json.contains(r#""purpose":"maskable""#));
        assert!(json.contains(r#""type":"image/png""#));

        let restored = IconManifest::from_json(&json).unwrap();
        assert_eq!(restored, manifest);
    }
}
