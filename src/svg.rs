use crate::sector::Sector;


// The chart puts zero degrees straight up, while SVG measures angles from the positive
// x axis, hence the -90 rotation.
const ANGLE_OFFSET_DEG: f64 = -90.0;

pub fn polar_to_cartesian(
    center_x: f64, center_y: f64, radius: f64, angle_deg: f64,
) -> (f64, f64) {
    let rad = (angle_deg + ANGLE_OFFSET_DEG).to_radians();
    (center_x + radius * rad.cos(), center_y + radius * rad.sin())
}

// Path data for one filled wedge: center, line to the start-angle point on the sector's
// own radius circle, clockwise arc to the end-angle point, close back to center.
pub fn sector_path(center_x: f64, center_y: f64, sector: &Sector) -> String {
    let radius = sector.radius;
    let (x1, y1) = polar_to_cartesian(center_x, center_y, radius, sector.start_angle);
    let (x2, y2) = polar_to_cartesian(center_x, center_y, radius, sector.end_angle);
    let large_arc_flag = sector.large_arc_flag();
    format!(
        "M {center_x},{center_y} L {x1},{y1} \
         A {radius},{radius} 0 {large_arc_flag} 1 {x2},{y2} Z"
    )
}
