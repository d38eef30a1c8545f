use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};


#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Color { r, g, b } }
}

// Renders the SVG fill syntax, e.g. `rgb(232, 77, 77)`.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

pub const SECTOR_PALETTE: [Color; 8] = [
    Color::rgb(232, 77, 77),   // red
    Color::rgb(240, 142, 65),  // orange
    Color::rgb(100, 200, 140), // light green
    Color::rgb(144, 71, 220),  // purple
    Color::rgb(41, 117, 234),  // dark blue
    Color::rgb(76, 197, 240),  // light blue
    Color::rgb(30, 139, 73),   // dark green
    Color::rgb(240, 194, 67),  // yellow
];

// Matches the page background, so the circle drawn last reads as a hole in the chart.
pub const CUTOUT_COLOR: Color = Color::rgb(28, 28, 28);

// Deals colors from a working copy of the palette: each draw removes a uniformly random
// remaining color, so nothing repeats until the whole palette has been dealt, at which
// point the copy is refilled and the cycle starts over.
pub struct ColorSupplier {
    remaining: Vec<Color>,
}

impl ColorSupplier {
    pub fn new() -> Self { ColorSupplier { remaining: SECTOR_PALETTE.to_vec() } }

    pub fn next(&mut self, rng: &mut impl Rng) -> Color {
        if self.remaining.is_empty() {
            self.remaining = SECTOR_PALETTE.to_vec();
        }
        let index = rng.random_range(0..self.remaining.len());
        self.remaining.swap_remove(index)
    }
}
