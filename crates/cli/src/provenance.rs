//! Provenance sidecars for report and contour artifacts.
//!
//! Every artifact `<dir>/<stem>.<ext>` gets `<dir>/<stem>.provenance.json`
//! recording which build produced it, from what, and with which settings.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Metadata recorded next to a generated artifact.
pub struct Payload {
    pub params: Value,
    pub inputs: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            inputs: Vec::new(),
        }
    }

    pub fn with_input(mut self, input: &Path) -> Self {
        self.inputs.push(input.to_string_lossy().into_owned());
        self
    }
}

#[derive(Serialize)]
struct Callsite {
    file: &'static str,
    line: u32,
}

#[derive(Serialize)]
struct Sidecar {
    code_rev: String,
    version: &'static str,
    callsite: Callsite,
    params: Value,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

/// Provenance block without a call site, as printed by `report`.
pub fn summary(params: Value) -> Value {
    json!({
        "code_rev": git_rev(),
        "version": boxsticker::VERSION,
        "params": params,
    })
}

/// Write the sidecar for `artifact`; the call site of this function is recorded.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let callsite = Location::caller();
    let artifact = artifact.as_ref();
    let path = sidecar_path(artifact);
    let doc = Sidecar {
        code_rev: git_rev(),
        version: boxsticker::VERSION,
        callsite: Callsite {
            file: callsite.file(),
            line: callsite.line(),
        },
        params: payload.params,
        inputs: payload.inputs,
        outputs: vec![artifact.to_string_lossy().into_owned()],
    };
    let bytes = serde_json::to_vec_pretty(&doc).context("encoding provenance")?;
    fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `report.json` → `report.provenance.json`, `out` → `out.provenance.json`.
fn sidecar_path(artifact: &Path) -> PathBuf {
    artifact.with_extension("provenance.json")
}

/// Build-time `GIT_COMMIT`, then runtime `GIT_COMMIT`, then `git rev-parse HEAD`.
pub fn git_rev() -> String {
    let non_empty = |s: String| (!s.is_empty()).then_some(s);
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .and_then(non_empty)
        .or_else(|| std::env::var("GIT_COMMIT").ok().and_then(non_empty))
        .or_else(head_commit)
        .unwrap_or_else(|| "unknown".to_string())
}

fn head_commit() -> Option<String> {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let rev = String::from_utf8(output.stdout).ok()?;
    Some(rev.trim().to_string()).filter(|r| !r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn sidecar_path_replaces_extension() {
        assert_eq!(
            sidecar_path(Path::new("/tmp/output/report.json")),
            Path::new("/tmp/output/report.provenance.json")
        );
        assert_eq!(
            sidecar_path(Path::new("runs/out")),
            Path::new("runs/out.provenance.json")
        );
    }

    #[test]
    fn sidecar_lists_inputs_outputs_and_callsite() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("report.json");
        fs::write(&artifact, "{}").unwrap();
        let payload =
            Payload::new(json!({"stickerOffset": 30.0})).with_input(Path::new("contours/"));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert_eq!(prov_path, dir.path().join("report.provenance.json"));
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["inputs"][0], "contours/");
        assert_eq!(parsed["params"]["stickerOffset"], 30.0);
        assert_eq!(parsed["version"], boxsticker::VERSION);
        assert!(parsed["callsite"]["file"]
            .as_str()
            .unwrap()
            .ends_with("provenance.rs"));
        assert!(!git_rev().is_empty());
    }
}
