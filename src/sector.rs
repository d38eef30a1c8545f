use serde::{Deserialize, Serialize};


// One wedge of the chart. `value` is the sector's share of the whole: within a dataset
// all values are pairwise distinct and sum to 1.0 (up to floating-point tolerance).
// Angles are in degrees and stay zero until `angles::calculate_angles` assigns them.
// A dataset lives for exactly one render pass and is rebuilt from scratch on the next.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Sector {
    pub value: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

impl Sector {
    pub fn new(value: f64, radius: f64) -> Self {
        Sector { value, radius, start_angle: 0.0, end_angle: 0.0 }
    }

    // SVG large-arc flag: set when the wedge spans more than half the circle. At most one
    // sector per dataset can qualify, since the values sum to 1.
    pub fn large_arc_flag(&self) -> u32 { if self.value > 0.5 { 1 } else { 0 } }
}

// Canonical pre-render ordering: the biggest share is drawn first, starting at the top of
// the circle. Angle assignment follows input order, so sort before calculating angles.
pub fn sort_by_share_descending(sectors: &mut [Sector]) {
    sectors.sort_unstable_by(|a, b| b.value.total_cmp(&a.value));
}
