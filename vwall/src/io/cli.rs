use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use log::LevelFilter;
use vitreye::entities::WindowSize;
use vitreye::geometry::Point;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Image files or directories to put on the wall. Without inputs, synthetic rectangles are generated
    #[arg(value_name = "INPUTS")]
    pub inputs: Vec<PathBuf>,
    #[arg(short, long, value_name = "FOLDER", default_value = "output")]
    pub output_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    /// Overrides the window size of the config
    #[arg(long, value_name = "WxH", value_parser = parse_window)]
    pub window: Option<WindowSize>,
    /// Wheel ticks applied once all sources are loaded, negative scrolls down
    #[arg(long, value_name = "TICKS", allow_hyphen_values = true)]
    pub scroll: Vec<i32>,
    /// Inverts the direction of all wheel ticks
    #[arg(long)]
    pub flipped: bool,
    /// Screen points to resolve to items after scrolling
    #[arg(long, value_name = "X,Y", value_parser = parse_point, allow_hyphen_values = true)]
    pub click: Vec<Point>,
}

pub fn parse_window(s: &str) -> Result<WindowSize> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got {s:?}"))?;
    let width = w.trim().parse().with_context(|| format!("invalid window width {w:?}"))?;
    let height = h.trim().parse().with_context(|| format!("invalid window height {h:?}"))?;
    Ok(WindowSize::new(width, height))
}

pub fn parse_point(s: &str) -> Result<Point> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| anyhow!("expected X,Y, got {s:?}"))?;
    let x = x.trim().parse().with_context(|| format!("invalid x coordinate {x:?}"))?;
    let y = y.trim().parse().with_context(|| format!("invalid y coordinate {y:?}"))?;
    Ok(Point(x, y))
}
