use crate::geometry::{Point, Rect};

/// Pixels scrolled per wheel tick unless configured otherwise
pub const DEFAULT_SCROLL_SENSITIVITY: i32 = 30;

/// Vertical scroll offset of the wall.
/// The offset is never positive: the top of the wall can not be scrolled below the top of the window.
/// It is applied to tiles at draw time only, stored tile geometry is never modified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollState {
    offset: i32,
    sensitivity: i32,
}

impl ScrollState {
    pub fn new(sensitivity: i32) -> Self {
        ScrollState {
            offset: 0,
            sensitivity,
        }
    }

    /// Accumulates a wheel event and returns the new offset.
    /// `flipped` inverts the direction of the event (natural scrolling).
    pub fn apply_delta(&mut self, wheel_ticks: i32, flipped: bool) -> i32 {
        let sign = match flipped {
            true => -1,
            false => 1,
        };
        let delta = self.sensitivity.saturating_mul(wheel_ticks).saturating_mul(sign);
        self.offset = self.offset.saturating_add(delta).min(0);
        self.offset
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    /// Grid space to screen space
    pub fn to_screen(&self, rect: Rect) -> Rect {
        rect.translate_y(self.offset)
    }

    /// Screen space to grid space
    pub fn to_grid(&self, point: Point) -> Point {
        Point(point.x(), point.y().saturating_sub(self.offset))
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        ScrollState::new(DEFAULT_SCROLL_SENSITIVITY)
    }
}
