//! Contour files handed over by the extraction stage.
//!
//! A file holds one image record or an array of them:
//! `{ "image": "a.png", "contours": [[[x, y], ...], ...] }`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use boxsticker::Vec2;
use serde::{Deserialize, Serialize};

/// Contours extracted from one image, in pixel coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub image: String,
    #[serde(default)]
    pub contours: Vec<Vec<[f64; 2]>>,
}

impl ImageRecord {
    pub fn contour_points(&self) -> Vec<Vec<Vec2<f64>>> {
        self.contours
            .iter()
            .map(|c| c.iter().map(|&[x, y]| Vec2::new(x, y)).collect())
            .collect()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RecordFile {
    Many(Vec<ImageRecord>),
    One(ImageRecord),
}

/// Parse one contour file.
pub fn read_file(path: &Path) -> Result<Vec<ImageRecord>> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let parsed: RecordFile =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(match parsed {
        RecordFile::Many(v) => v,
        RecordFile::One(r) => vec![r],
    })
}

/// Load records from a file, or from every `*.json` file of a directory.
///
/// Directory entries are visited in name order. Files that are not JSON, or
/// that fail to parse, are skipped with a warning.
pub fn read_records(input: &Path) -> Result<Vec<ImageRecord>> {
    if !input.is_dir() {
        return read_file(input);
    }
    let mut paths: Vec<_> = fs::read_dir(input)
        .with_context(|| format!("listing {}", input.display()))?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut out = Vec::new();
    for path in paths {
        if !is_contour_file(&path) {
            tracing::debug!(path = %path.display(), "skip_non_contour_file");
            continue;
        }
        match read_file(&path) {
            Ok(records) => out.extend(records),
            Err(err) => {
                let reason = format!("{err:#}");
                tracing::warn!(path = %path.display(), error = %reason, "unreadable");
            }
        }
    }
    Ok(out)
}

fn is_contour_file(path: &Path) -> bool {
    let name = path.file_name().map(|n| n.to_string_lossy().to_lowercase());
    match name {
        Some(n) => n.ends_with(".json") && !n.ends_with(".provenance.json"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn single_record_and_array_forms() {
        let dir = tempdir().unwrap();
        let one = dir.path().join("one.json");
        fs::write(&one, r#"{"image":"a.png","contours":[[[0,0],[1,0],[1,1]]]}"#).unwrap();
        let recs = read_file(&one).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].contour_points()[0][2], Vec2::new(1.0, 1.0));

        let many = dir.path().join("many.json");
        fs::write(&many, r#"[{"image":"b.png"},{"image":"c.png","contours":[]}]"#).unwrap();
        let recs = read_file(&many).unwrap();
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contours.is_empty());
    }

    #[test]
    fn directory_skips_foreign_and_broken_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("b.json"), r#"{"image":"b.png"}"#).unwrap();
        fs::write(dir.path().join("a.JSON"), r#"{"image":"a.png"}"#).unwrap();
        fs::write(dir.path().join("notes.txt"), "hello").unwrap();
        fs::write(dir.path().join("broken.json"), "{").unwrap();
        fs::write(dir.path().join("run.provenance.json"), "{}").unwrap();
        let recs = read_records(dir.path()).unwrap();
        let names: Vec<_> = recs.iter().map(|r| r.image.as_str()).collect();
        assert_eq!(names, vec!["a.png", "b.png"]);
    }
}
