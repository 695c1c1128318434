use std::collections::VecDeque;
use std::fmt::Debug;
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{debug, warn};
use rand::Rng;
use rand::prelude::SmallRng;
use vitreye::entities::{Item, ItemId};

use crate::config::WallConfig;

/// Something that can be shown on the wall and whose intrinsic size can be measured.
pub trait Source: Debug {
    /// Human readable name, used in reports and exports
    fn label(&self) -> String;

    /// Determines the intrinsic (width, height) of the source, without decoding its content
    fn measure(&self) -> Result<(u32, u32)>;
}

/// An image file on disk, measured by reading its header only
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub path: PathBuf,
}

impl Source for ImageFile {
    fn label(&self) -> String {
        self.path.display().to_string()
    }

    fn measure(&self) -> Result<(u32, u32)> {
        image::image_dimensions(&self.path)
            .with_context(|| format!("failed to measure image {:?}", self.path))
    }
}

/// A rectangle of known size, stands in for a source when no inputs are given
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyntheticRect {
    pub width: u32,
    pub height: u32,
}

impl Source for SyntheticRect {
    fn label(&self) -> String {
        format!("rect {}x{}", self.width, self.height)
    }

    fn measure(&self) -> Result<(u32, u32)> {
        Ok((self.width, self.height))
    }
}

/// Generates `config.n_test_rects` rectangles with both dimensions uniform in the configured (inclusive) range.
/// The range must be valid, see [`WallConfig::validate`].
pub fn generate_test_rects(config: &WallConfig, rng: &mut SmallRng) -> Vec<SyntheticRect> {
    let (min_w, min_h) = config.test_rect_min;
    let (max_w, max_h) = config.test_rect_max;
    (0..config.n_test_rects)
        .map(|_| SyntheticRect {
            width: rng.random_range(min_w..=max_w),
            height: rng.random_range(min_h..=max_h),
        })
        .collect()
}

/// A source that has been measured and converted to an [`Item`]
#[derive(Debug, Clone)]
pub struct Arrival {
    pub item: Item,
    pub label: String,
    /// True if measuring failed and the item is a 1:1 stand-in
    pub fallback: bool,
}

/// Queue of sources waiting to be measured.
/// At most `per_tick` sources are taken off the queue per call to [`ArrivalQueue::drain_tick`],
/// so a single frame never stalls on a large batch of sources.
#[derive(Debug)]
pub struct ArrivalQueue {
    pending: VecDeque<Box<dyn Source>>,
    per_tick: usize,
    n_measured: usize,
    n_fallbacks: usize,
}

impl ArrivalQueue {
    pub fn new(per_tick: usize) -> Self {
        assert!(per_tick > 0, "at least one source must be measured per tick");
        ArrivalQueue {
            pending: VecDeque::new(),
            per_tick,
            n_measured: 0,
            n_fallbacks: 0,
        }
    }

    pub fn push(&mut self, source: Box<dyn Source>) {
        self.pending.push_back(source);
    }

    /// Measures the next (at most `per_tick`) sources. Their items get consecutive ids starting from `next_id`.
    /// A source that fails to measure becomes a fallback item instead of an error.
    pub fn drain_tick(&mut self, next_id: ItemId) -> Vec<Arrival> {
        let n = usize::min(self.per_tick, self.pending.len());
        self.pending
            .drain(..n)
            .enumerate()
            .map(|(i, source)| {
                let id = next_id + i;
                let label = source.label();
                let measured = source
                    .measure()
                    .and_then(|(width, height)| Item::try_new(id, width, height));
                self.n_measured += 1;
                match measured {
                    Ok(item) => {
                        debug!("[LOAD] measured {label}: {}x{}", item.width, item.height);
                        Arrival {
                            item,
                            label,
                            fallback: false,
                        }
                    }
                    Err(err) => {
                        warn!("[LOAD] {err:#}, using a 1x1 placeholder for {label}");
                        self.n_fallbacks += 1;
                        Arrival {
                            item: Item::fallback(id),
                            label,
                            fallback: true,
                        }
                    }
                }
            })
            .collect()
    }

    pub fn n_pending(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn per_tick(&self) -> usize {
        self.per_tick
    }

    pub fn n_measured(&self) -> usize {
        self.n_measured
    }

    pub fn n_fallbacks(&self) -> usize {
        self.n_fallbacks
    }
}

impl Extend<Box<dyn Source>> for ArrivalQueue {
    fn extend<T: IntoIterator<Item = Box<dyn Source>>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}
