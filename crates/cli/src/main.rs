use anyhow::{Context, Result};
use boxsticker::sample::{draw_rect_cloud, CloudCfg, ReplayToken};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod batch;
mod config;
mod input;
mod provenance;

use config::StickerConfig;
use input::ImageRecord;

#[derive(Parser)]
#[command(name = "boxsticker")]
#[command(about = "Locate a box in extracted contours and place a sticker on it")]
struct Cmd {
    /// Log at debug level
    #[arg(long, global = true)]
    verbose: bool,

    /// JSON file with stickerOffset / stickerWidth / stickerHeight
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Inset of the sticker from the box corner along both box axes (pixels)
    #[arg(long, global = true)]
    sticker_offset: Option<f64>,

    /// Sticker width (pixels)
    #[arg(long, global = true)]
    sticker_width: Option<f64>,

    /// Sticker height (pixels)
    #[arg(long, global = true)]
    sticker_height: Option<f64>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Process a contour file or a directory of contour files
    Run {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Write synthetic contour records for demos and smoke tests
    Generate {
        #[arg(long, default_value_t = 8)]
        count: u64,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Inward boundary jitter (pixels)
        #[arg(long, default_value_t = 0.5)]
        jitter: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();

    let config = match &cmd.config {
        Some(path) => StickerConfig::from_file(path)?,
        None => StickerConfig::default(),
    }
    .with_overrides(cmd.sticker_offset, cmd.sticker_width, cmd.sticker_height);

    match cmd.action {
        Action::Run { input, out } => run(&input, &out, config),
        Action::Generate {
            count,
            seed,
            jitter,
            out,
        } => generate(count, seed, jitter, &out),
        Action::Report => report(config),
    }
}

fn run(input: &Path, out: &Path, config: StickerConfig) -> Result<()> {
    let marker = config.marker_spec()?;
    tracing::info!(input = %input.display(), out = %out.display(), ?config, "run");
    let records = input::read_records(input)?;
    if records.is_empty() {
        tracing::warn!(input = %input.display(), "no_image_records");
    }

    let report = batch::run_batch(&records, config, &marker);
    write_json(out, &report)?;
    let payload = provenance::Payload::new(serde_json::to_value(config)?).with_input(input);
    provenance::write_sidecar(out, payload)?;
    tracing::info!(
        placed = report.placed,
        failed = report.failed,
        out = %out.display(),
        "processing_complete"
    );
    Ok(())
}

fn generate(count: u64, seed: u64, jitter: f64, out: &Path) -> Result<()> {
    tracing::info!(count, seed, jitter, out = %out.display(), "generate");
    let main_cfg = CloudCfg {
        jitter,
        ..CloudCfg::default()
    };
    // small speck next to the box; the largest-contour rule must ignore it
    let speck_cfg = CloudCfg {
        side_range: (4.0, 12.0),
        points_per_side: 2,
        ..CloudCfg::default()
    };
    let records: Vec<ImageRecord> = (0..count)
        .map(|i| {
            let (truth, pts) = draw_rect_cloud(main_cfg, ReplayToken::new(seed, i));
            let (_, speck) = draw_rect_cloud(speck_cfg, ReplayToken::new(!seed, i));
            tracing::debug!(
                index = i,
                cx = truth.center.x,
                cy = truth.center.y,
                width = truth.width,
                height = truth.height,
                angle = truth.angle,
                "synthetic_box"
            );
            ImageRecord {
                image: format!("synthetic_{i:04}.png"),
                contours: vec![
                    speck.iter().map(|p| [p.x, p.y]).collect(),
                    pts.iter().map(|p| [p.x, p.y]).collect(),
                ],
            }
        })
        .collect();
    write_json(out, &records)?;
    let payload = provenance::Payload::new(serde_json::json!({
        "count": count,
        "seed": seed,
        "jitter": jitter
    }));
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(config: StickerConfig) -> Result<()> {
    let obj = provenance::summary(serde_json::to_value(config)?);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn write_json<T: serde::Serialize>(out: &Path, value: &T) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    Ok(())
}
