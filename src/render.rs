use rand::Rng;

use crate::angles::calculate_angles;
use crate::palette::{CUTOUT_COLOR, Color, ColorSupplier};
use crate::sector::Sector;
use crate::svg::sector_path;


pub const DEFAULT_CUTOUT_RADIUS: f64 = 30.0;

// The seam between chart geometry and the host drawing surface. The wasm front end backs
// it with a live SVG element; tests back it with an in-memory recorder.
pub trait ChartSurface {
    type Error;

    fn clear(&mut self) -> Result<(), Self::Error>;
    fn fill_path(&mut self, path_data: &str, fill: Color) -> Result<(), Self::Error>;
    fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, fill: Color)
        -> Result<(), Self::Error>;
}

// Owns the chart placement (center point and cutout radius) explicitly, so several
// independent charts can coexist and rendering is testable without a browser.
pub struct ChartRenderer {
    center_x: f64,
    center_y: f64,
    cutout_radius: f64,
}

impl ChartRenderer {
    pub fn new(center_x: f64, center_y: f64, cutout_radius: f64) -> Self {
        ChartRenderer { center_x, center_y, cutout_radius }
    }

    // Replaces everything on the surface: one wedge per sector (or a plain circle when
    // there is only one sector), then the cutout circle on top.
    pub fn draw_chart<S: ChartSurface>(
        &self, surface: &mut S, sectors: &mut [Sector], rng: &mut impl Rng,
    ) -> Result<(), S::Error> {
        surface.clear()?;
        calculate_angles(sectors);
        let mut colors = ColorSupplier::new();
        if sectors.len() > 1 {
            for sector in sectors.iter() {
                let path_data = sector_path(self.center_x, self.center_y, sector);
                surface.fill_path(&path_data, colors.next(&mut *rng))?;
            }
        }
        if sectors.len() == 1 {
            // Historical quirk, kept as observed: the lone circle takes its color from a
            // fresh supplier instead of `colors`.
            let fill = ColorSupplier::new().next(&mut *rng);
            surface.fill_circle(self.center_x, self.center_y, sectors[0].radius, fill)?;
        }
        // The cutout goes last so it layers above every sector shape.
        surface.fill_circle(self.center_x, self.center_y, self.cutout_radius, CUTOUT_COLOR)
    }
}
