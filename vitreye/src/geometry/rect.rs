use serde::{Deserialize, Serialize};

/// Point in pixel coordinates, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point(pub i32, pub i32);

impl Point {
    pub fn x(&self) -> i32 {
        self.0
    }

    pub fn y(&self) -> i32 {
        self.1
    }
}

///Axis-aligned rectangle in pixel coordinates, origin at the top-left corner
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn x_max(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn y_max(&self) -> i32 {
        self.y + self.height
    }

    /// True if `other` lies completely inside `self` (touching edges included)
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x_max() <= self.x_max()
            && other.y_max() <= self.y_max()
    }

    /// True if the point lies inside `self`, the right and bottom edges are exclusive
    pub fn contains_point(&self, point: Point) -> bool {
        let Point(x, y) = point;
        x >= self.x && x < self.x_max() && y >= self.y && y < self.y_max()
    }

    /// True if the interiors of both rectangles intersect
    pub fn overlaps(&self, other: &Rect) -> bool {
        i32::max(self.x, other.x) < i32::min(self.x_max(), other.x_max())
            && i32::max(self.y, other.y) < i32::min(self.y_max(), other.y_max())
    }

    /// Returns a copy of `self` moved vertically by `dy`
    pub fn translate_y(self, dy: i32) -> Rect {
        Rect {
            y: self.y.saturating_add(dy),
            ..self
        }
    }
}
