use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SvgDrawOptions {
    #[serde(default)]
    pub theme: SvgLayoutThemes,
    ///Only draws what is visible in the window at the current scroll offset
    #[serde(default)]
    pub clip_to_window: bool,
    ///Draws the cells of the occupancy grid
    #[serde(default)]
    pub occupancy: bool,
    ///Labels every tile with the id of its item
    #[serde(default)]
    pub item_ids: bool,
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutThemes::default(),
            clip_to_window: false,
            occupancy: false,
            item_ids: true,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    Dark,
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn get_theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::Dark => DARK_THEME,
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width: f32,
    pub background_fill: Color,
    pub tile_fill: Color,
    pub content_fill: Color,
    pub cell_stroke: Color,
    pub label_fill: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        DARK_THEME
    }
}

pub const DARK_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width: 1.0,
    background_fill: Color(0x00, 0x00, 0x00),
    tile_fill: Color(0x33, 0x33, 0x33),
    content_fill: Color(0xEE, 0xEE, 0xEE),
    cell_stroke: Color(0x66, 0x66, 0x66),
    label_fill: Color(0xCC, 0x33, 0x33),
};

pub const EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width: 2.0,
    background_fill: Color(0x2D, 0x2D, 0x2D),
    tile_fill: Color(0xCC, 0x82, 0x4A),
    content_fill: Color(0xFF, 0xC8, 0x79),
    cell_stroke: Color(0x8F, 0x5B, 0x34),
    label_fill: Color(0x00, 0x00, 0x00),
};

pub const GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width: 2.5,
    background_fill: Color(0xFF, 0xFF, 0xFF),
    tile_fill: Color(0xC3, 0xC3, 0xC3),
    content_fill: Color(0x8F, 0x8F, 0x8F),
    cell_stroke: Color(0x63, 0x63, 0x63),
    label_fill: Color(0x00, 0x00, 0x00),
};

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;
    let scale = |c: u8| (c as f32 * fraction).clamp(0.0, 255.0) as u8;
    Color(scale(r), scale(g), scale(b))
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Color(pub u8, pub u8, pub u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}
