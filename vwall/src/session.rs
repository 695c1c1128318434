use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info, warn};
use thousands::Separable;
use vitreye::LayoutError;
use vitreye::entities::{ItemId, Layout, LayoutReport, WindowSize};
use vitreye::geometry::Point;
use vitreye::scroll::ScrollState;

use crate::config::WallConfig;
use crate::loader::{ArrivalQueue, Source};

/// Input events of the wall, as delivered by a windowing system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallEvent {
    /// The window was resized
    Resize(WindowSize),
    /// Mouse wheel moved by `ticks`, `flipped` for inverted (natural) scrolling
    Wheel { ticks: i32, flipped: bool },
    /// Primary click at a point in screen space
    Click(Point),
    Quit,
}

/// A click resolved to the item under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub point: Point,
    pub item: Option<ItemId>,
}

/// What happened during a single [`Session::tick`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    pub frame: usize,
    /// Report of the last relayout triggered by a resize during this tick
    pub relayout: Option<LayoutReport>,
    pub selections: Vec<Selection>,
    /// Newly arrived items that received a tile
    pub placed: Vec<ItemId>,
    /// Newly arrived items for which no free region was left
    pub overflowed: Vec<ItemId>,
    /// Newly arrived items that could not be placed because the window is too narrow for a single column.
    /// They are laid out by the first relayout to a wide enough window.
    pub deferred: Vec<ItemId>,
    /// True if no sources are left to measure
    pub drained: bool,
    pub quit: bool,
}

/// Headless, frame-driven wall: owns the layout, the scroll state and the queue of sources still to be measured.
pub struct Session {
    pub layout: Layout,
    pub scroll: ScrollState,
    queue: ArrivalQueue,
    /// Source label per item id
    labels: Vec<String>,
    frame: usize,
}

impl Session {
    pub fn new(config: &WallConfig, sources: impl IntoIterator<Item = Box<dyn Source>>) -> Self {
        let mut layout = Layout::new(config.layout);
        layout.relayout(config.window());

        let mut queue = ArrivalQueue::new(config.decodes_per_tick);
        queue.extend(sources);
        info!(
            "[SESSION] {} sources queued, measuring {} per frame",
            queue.n_pending().separate_with_commas(),
            queue.per_tick()
        );

        Session {
            layout,
            scroll: ScrollState::new(config.scroll_sensitivity),
            queue,
            labels: vec![],
            frame: 0,
        }
    }

    /// Advances the wall by one frame: handles all `events` in order, then measures and places
    /// at most `decodes_per_tick` newly arrived sources.
    pub fn tick(&mut self, events: impl IntoIterator<Item = WallEvent>) -> TickOutcome {
        let mut outcome = TickOutcome {
            frame: self.frame,
            ..TickOutcome::default()
        };
        self.frame += 1;

        for event in events {
            match event {
                WallEvent::Resize(window) => {
                    let report = self.layout.relayout(window);
                    if !report.overflowed.is_empty() {
                        warn!(
                            "[SESSION] {} items could not be placed after resize to {}x{}",
                            report.overflowed.len(),
                            window.width,
                            window.height
                        );
                    }
                    outcome.relayout = Some(report);
                }
                WallEvent::Wheel { ticks, flipped } => {
                    let offset = self.scroll.apply_delta(ticks, flipped);
                    debug!("[SESSION] scrolled {ticks} ticks (flipped: {flipped}), offset {offset}");
                }
                WallEvent::Click(point) => {
                    let item = self.layout.item_at(point, &self.scroll);
                    match item {
                        Some(id) => info!("[SESSION] clicked {point:?}: item {id} ({})", self.labels[id]),
                        None => info!("[SESSION] clicked {point:?}: nothing"),
                    }
                    outcome.selections.push(Selection { point, item });
                }
                WallEvent::Quit => {
                    outcome.quit = true;
                    break;
                }
            }
        }

        if !outcome.quit {
            for arrival in self.queue.drain_tick(self.layout.next_item_id()) {
                let id = arrival.item.id;
                self.labels.push(arrival.label);
                match self.layout.place_item(arrival.item) {
                    Ok(tile) => {
                        debug!("[SESSION] item {id} placed at cell {}", tile.cell);
                        outcome.placed.push(id);
                    }
                    Err(err @ LayoutError::PlacementOverflow { .. }) => {
                        warn!("[SESSION] {err}");
                        outcome.overflowed.push(id);
                    }
                    Err(err @ LayoutError::DegenerateGrid { .. }) => {
                        debug!("[SESSION] {err}, item {id} kept for a later relayout");
                        outcome.deferred.push(id);
                    }
                }
            }
        }

        outcome.drained = self.queue.is_empty();
        outcome
    }

    /// Runs ticks at a fixed frame rate until all sources are placed or a [`WallEvent::Quit`] arrives.
    /// `events` is asked for the events of every frame.
    pub fn run(
        &mut self,
        mut events: impl FnMut(usize) -> Vec<WallEvent>,
        frame_interval: Duration,
    ) -> Vec<TickOutcome> {
        let start = Instant::now();
        let mut outcomes = vec![];
        loop {
            let outcome = self.tick(events(self.frame));
            let done = outcome.quit || outcome.drained;
            outcomes.push(outcome);
            if done {
                break;
            }
            // sleep until the deadline of the next frame
            let deadline = frame_interval.saturating_mul(outcomes.len() as u32);
            if let Some(remaining) = deadline.checked_sub(start.elapsed()) {
                thread::sleep(remaining);
            }
        }
        info!(
            "[SESSION] loaded {} sources in {} frames ({:.3}ms), {} placed, {} fallbacks",
            self.queue.n_measured().separate_with_commas(),
            outcomes.len().separate_with_commas(),
            start.elapsed().as_secs_f64() * 1000.0,
            self.layout.n_placed().separate_with_commas(),
            self.queue.n_fallbacks()
        );
        outcomes
    }

    /// Source label of every item, indexed by item id
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn n_pending(&self) -> usize {
        self.queue.n_pending()
    }
}
