//! Sticker configuration: defaults, optional JSON file, then CLI flags.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use boxsticker::MarkerSpec;
use serde::{Deserialize, Serialize};

/// Run-wide sticker options, keyed as in config files (`stickerOffset`, ...).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct StickerConfig {
    pub sticker_offset: f64,
    pub sticker_width: f64,
    pub sticker_height: f64,
}

impl Default for StickerConfig {
    fn default() -> Self {
        let spec = MarkerSpec::default();
        Self {
            sticker_offset: spec.offset,
            sticker_width: spec.width,
            sticker_height: spec.height,
        }
    }
}

impl StickerConfig {
    /// Read a config file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_slice(&bytes)
            .with_context(|| format!("parsing config {}", path.display()))
    }

    /// Apply explicit flag values on top.
    pub fn with_overrides(
        mut self,
        offset: Option<f64>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Self {
        if let Some(v) = offset {
            self.sticker_offset = v;
        }
        if let Some(v) = width {
            self.sticker_width = v;
        }
        if let Some(v) = height {
            self.sticker_height = v;
        }
        self
    }

    /// Validated marker spec for the geometry core.
    pub fn marker_spec(&self) -> Result<MarkerSpec> {
        MarkerSpec::new(self.sticker_offset, self.sticker_width, self.sticker_height)
            .context("invalid sticker configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_keys_override_defaults_and_flags_override_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sticker.json");
        fs::write(&path, r#"{ "stickerOffset": 12.5, "stickerHeight": 8 }"#).unwrap();
        let cfg = StickerConfig::from_file(&path).unwrap();
        assert_eq!(cfg.sticker_offset, 12.5);
        assert_eq!(cfg.sticker_width, 40.0);
        assert_eq!(cfg.sticker_height, 8.0);

        let cfg = cfg.with_overrides(None, Some(64.0), None);
        assert_eq!(cfg.sticker_width, 64.0);
        let spec = cfg.marker_spec().unwrap();
        assert_eq!((spec.offset, spec.width, spec.height), (12.5, 64.0, 8.0));
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, r#"{ "stickerOfset": 3 }"#).unwrap();
        assert!(StickerConfig::from_file(&path).is_err());

        let cfg = StickerConfig::default().with_overrides(Some(-1.0), None, None);
        assert!(cfg.marker_spec().is_err());
    }
}
