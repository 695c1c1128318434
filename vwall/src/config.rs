use anyhow::{Result, ensure};
use serde::{Deserialize, Serialize};

use vitreye::entities::WindowSize;
use vitreye::io::svg::SvgDrawOptions;
use vitreye::scroll::DEFAULT_SCROLL_SENSITIVITY;
use vitreye::util::LayoutConfig;

/// Configuration of the reference wall
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct WallConfig {
    /// Configuration of the layout engine
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Initial window width in pixels
    pub window_width: u32,
    /// Initial window height in pixels
    pub window_height: u32,
    /// Frames per second of the session loop
    pub fps: u32,
    /// Pixels scrolled per wheel tick
    pub scroll_sensitivity: i32,
    /// Maximum number of sources measured per frame
    pub decodes_per_tick: usize,
    /// Seed for the synthetic test rectangles. If undefined, entropy is used
    pub prng_seed: Option<u64>,
    /// Number of synthetic rectangles generated when no inputs are given
    pub n_test_rects: usize,
    /// Smallest synthetic rectangle (width, height)
    pub test_rect_min: (u32, u32),
    /// Largest synthetic rectangle (width, height), inclusive
    pub test_rect_max: (u32, u32),
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl WallConfig {
    pub fn validate(&self) -> Result<()> {
        self.layout.validate()?;
        ensure!(self.fps > 0, "fps must be positive");
        ensure!(
            self.decodes_per_tick > 0,
            "at least one source must be measured per tick"
        );
        ensure!(
            self.scroll_sensitivity >= 0,
            "scroll sensitivity must not be negative, got {}",
            self.scroll_sensitivity
        );
        let ((min_w, min_h), (max_w, max_h)) = (self.test_rect_min, self.test_rect_max);
        ensure!(
            min_w > 0 && min_h > 0 && min_w <= max_w && min_h <= max_h,
            "invalid test rect range: {:?} to {:?}",
            self.test_rect_min,
            self.test_rect_max
        );
        Ok(())
    }

    pub fn window(&self) -> WindowSize {
        WindowSize::new(self.window_width, self.window_height)
    }
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            window_width: 800,
            window_height: 600,
            fps: 30,
            scroll_sensitivity: DEFAULT_SCROLL_SENSITIVITY,
            decodes_per_tick: 1,
            prng_seed: Some(1),
            n_test_rects: 64,
            test_rect_min: (100, 100),
            test_rect_max: (2048, 2048),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
