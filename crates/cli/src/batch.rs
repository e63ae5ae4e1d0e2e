//! Batch orchestration: one independent pipeline per image record.
//!
//! Records run in parallel on the rayon pool; the report keeps input order.
//! A failing object is logged and reported, never fatal to the batch.

use boxsticker::contour::largest_contour;
use boxsticker::pipeline::{process_object, ObjectGeometry};
use boxsticker::{GeomCfg, GeometryError, MarkerSpec, Vec2};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::StickerConfig;
use crate::input::ImageRecord;

type Xy = [f64; 2];

#[inline]
fn xy(p: Vec2<f64>) -> Xy {
    [p.x, p.y]
}

/// Per-object line of the batch report.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ObjectReport {
    Ok {
        image: String,
        angle_deg: f64,
        marker_center: Xy,
        marker_pixel: [i64; 2],
        rect_corners: [Xy; 4],
        marker_corners: [Xy; 4],
        vector_from_center: Xy,
        orientation_axis: Xy,
    },
    Error {
        image: String,
        error: String,
    },
}

impl ObjectReport {
    fn placed(image: &str, geo: &ObjectGeometry) -> Self {
        let (px, py) = geo.marker_pixel();
        Self::Ok {
            image: image.to_string(),
            angle_deg: geo.display_angle(),
            marker_center: xy(geo.placement.marker_center()),
            marker_pixel: [px, py],
            rect_corners: geo.rect_corners.map(xy),
            marker_corners: geo.marker_corners.map(xy),
            vector_from_center: xy(geo.placement.vector_from_center),
            orientation_axis: xy(geo.orientation_axis),
        }
    }

    fn failed(image: &str, err: &GeometryError) -> Self {
        Self::Error {
            image: image.to_string(),
            error: err.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok { .. })
    }
}

/// Whole-run report written to disk.
#[derive(Clone, Debug, Serialize)]
pub struct BatchReport {
    pub version: &'static str,
    pub config: StickerConfig,
    pub placed: usize,
    pub failed: usize,
    pub objects: Vec<ObjectReport>,
}

/// Geometry for the largest contour of one image.
pub fn process_record(
    rec: &ImageRecord,
    marker: &MarkerSpec,
    cfg: GeomCfg,
) -> Result<ObjectGeometry, GeometryError> {
    let contours = rec.contour_points();
    let points = largest_contour(&contours)?;
    process_object(points, marker, cfg)
}

/// Run every record and log the per-object text report.
pub fn run_batch(
    records: &[ImageRecord],
    config: StickerConfig,
    marker: &MarkerSpec,
) -> BatchReport {
    let cfg = GeomCfg::default();
    let objects: Vec<ObjectReport> = records
        .par_iter()
        .map(|rec| match process_record(rec, marker, cfg) {
            Ok(geo) => {
                let (x, y) = geo.marker_pixel();
                tracing::info!(
                    image = %rec.image,
                    angle_deg = geo.display_angle(),
                    sticker_x = x,
                    sticker_y = y,
                    "placed"
                );
                ObjectReport::placed(&rec.image, &geo)
            }
            Err(err) => {
                tracing::warn!(image = %rec.image, error = %err, "no_usable_object");
                ObjectReport::failed(&rec.image, &err)
            }
        })
        .collect();
    let placed = objects.iter().filter(|o| o.is_ok()).count();
    BatchReport {
        version: boxsticker::VERSION,
        config,
        placed,
        failed: objects.len() - placed,
        objects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(image: &str, contours: Vec<Vec<Xy>>) -> ImageRecord {
        ImageRecord {
            image: image.to_string(),
            contours,
        }
    }

    fn wide_box() -> Vec<Xy> {
        vec![[0.0, 50.0], [200.0, 50.0], [200.0, 150.0], [0.0, 150.0]]
    }

    #[test]
    fn failures_do_not_stop_the_batch() {
        let records = vec![
            record("empty.png", vec![]),
            record("box.png", vec![vec![[5.0, 5.0], [6.0, 5.0], [6.0, 6.0]], wide_box()]),
            record("line.png", vec![vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]]),
        ];
        let config = StickerConfig::default();
        let report = run_batch(&records, config, &config.marker_spec().unwrap());
        assert_eq!((report.placed, report.failed), (1, 2));
        assert!(matches!(
            &report.objects[0],
            ObjectReport::Error { image, .. } if image == "empty.png"
        ));
        match &report.objects[1] {
            ObjectReport::Ok {
                image,
                angle_deg,
                marker_center,
                marker_pixel,
                ..
            } => {
                assert_eq!(image, "box.png");
                assert_eq!(*angle_deg, 0.0);
                assert!((marker_center[0] - 170.0).abs() < 1e-9);
                assert!((marker_center[1] - 80.0).abs() < 1e-9);
                assert_eq!(*marker_pixel, [170, 80]);
            }
            other => panic!("expected placement, got {other:?}"),
        }
        assert!(!report.objects[2].is_ok());
    }

    #[test]
    fn report_serializes_with_status_tag() {
        let records = vec![record("box.png", vec![wide_box()]), record("none.png", vec![])];
        let config = StickerConfig::default();
        let report = run_batch(&records, config, &config.marker_spec().unwrap());
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["objects"][0]["status"], "ok");
        assert_eq!(v["objects"][1]["status"], "error");
        assert_eq!(v["config"]["stickerOffset"], 30.0);
        assert_eq!(v["objects"][0]["rect_corners"].as_array().unwrap().len(), 4);
    }
}
