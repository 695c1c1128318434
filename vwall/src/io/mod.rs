use std::fs;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{Level, LevelFilter, info, log, warn};
use serde::Serialize;
use svg::Document;
use vitreye::Layout;
use walkdir::WalkDir;

use crate::EPOCH;
use crate::config::WallConfig;
use crate::session::Selection;

pub mod cli;
pub mod output;

/// File extensions considered when walking input directories
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub fn read_config(path: Option<&Path>) -> Result<WallConfig> {
    match path {
        None => {
            warn!("[IO] no config file provided, use --config-file to provide a custom config");
            Ok(WallConfig::default())
        }
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("could not open config file: {}", path.display()))?;
            let config: WallConfig = serde_json::from_reader(BufReader::new(file))
                .context("incorrect config file format")?;
            config.validate()?;
            Ok(config)
        }
    }
}

pub fn write_json(json: &impl Serialize, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("could not open output file: {}", path.display()))?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, json)
        .with_context(|| format!("could not write output file: {}", path.display()))?;

    info!("[IO] json written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

pub fn write_svg(document: &Document, path: &Path) -> Result<()> {
    svg::save(path, document)
        .with_context(|| format!("could not write svg file: {}", path.display()))?;
    info!("[IO] svg written to file://{}", fs::canonicalize(path)?.display());
    Ok(())
}

/// Writes one tab separated line per item (id, label, footprint, outer and inner rect or `unplaced`),
/// followed by one line per resolved click
pub fn write_report(
    out: &mut impl Write,
    layout: &Layout,
    labels: &[String],
    selections: &[Selection],
) -> Result<()> {
    for item in layout.items() {
        let label = &labels[item.id];
        match layout.tile(item.id) {
            Some(tile) => writeln!(
                out,
                "{}\t{}\t{:?}\touter {:?}\tinner {:?}",
                item.id, label, tile.footprint, tile.outer, tile.inner
            )?,
            None => writeln!(out, "{}\t{}\tunplaced", item.id, label)?,
        }
    }
    for selection in selections {
        let (x, y) = (selection.point.x(), selection.point.y());
        match selection.item {
            Some(id) => writeln!(out, "click {x},{y} -> item {id} ({})", labels[id])?,
            None => writeln!(out, "click {x},{y} -> nothing")?,
        }
    }
    out.flush()?;
    Ok(())
}

/// Expands the inputs into a list of image files. Directories are walked recursively,
/// only files with an image extension are kept from them and their order is sorted.
/// Files given explicitly are always kept, in the given order.
pub fn collect_inputs(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = vec![];
    for input in inputs {
        if input.is_dir() {
            let mut entries: Vec<PathBuf> = WalkDir::new(input)
                .into_iter()
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.file_type().is_file() && has_image_extension(entry.path()))
                .map(|entry| entry.path().to_path_buf())
                .collect();
            entries.sort();
            if entries.is_empty() {
                warn!("[IO] no image files found in {}", input.display());
            }
            files.extend(entries);
        } else {
            anyhow::ensure!(input.exists(), "input does not exist: {}", input.display());
            files.push(input.clone());
        }
    }
    Ok(files)
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

pub fn init_logger(level_filter: LevelFilter) -> Result<()> {
    fern::Dispatch::new()
        // Perform allocation-free log formatting
        .format(|out, message, record| {
            let handle = std::thread::current();
            let thread_name = handle.name().unwrap_or("-");

            let duration = EPOCH.elapsed();
            let sec = duration.as_secs() % 60;
            let min = (duration.as_secs() / 60) % 60;
            let hours = (duration.as_secs() / 60) / 60;

            let prefix = format!(
                "[{}] [{:0>2}:{:0>2}:{:0>2}] <{}>",
                record.level(),
                hours,
                min,
                sec,
                thread_name,
            );

            out.finish(format_args!("{prefix:<27}{message}"))
        })
        .level(level_filter)
        .chain(std::io::stderr())
        .apply()?;
    log!(Level::Info, "[EPOCH]: {}", jiff::Timestamp::now());
    Ok(())
}
