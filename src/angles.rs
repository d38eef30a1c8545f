use crate::sector::Sector;


// Assigns each sector a contiguous angular span so that together they cover the full
// 360 degrees, in the order the sectors are given. Callers sort beforehand (by
// convention, descending by share), since visual ordering follows input order. The sum
// is recomputed here rather than assumed to be 1.0, so a not-quite-normalized input
// still fills the whole circle.
pub fn calculate_angles(sectors: &mut [Sector]) {
    let total_value: f64 = sectors.iter().map(|s| s.value).sum();
    let mut start_angle = 0.0;
    for sector in sectors {
        let end_angle = start_angle + (sector.value / total_value) * 360.0;
        sector.start_angle = start_angle;
        sector.end_angle = end_angle;
        start_angle = end_angle;
    }
}


#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::data_gen::generate_chart_data;
    use crate::sector::sort_by_share_descending;
    use crate::test_util::deterministic_rng;

    #[test]
    fn two_sector_example() {
        let mut sectors = vec![Sector::new(0.6, 100.0), Sector::new(0.4, 80.0)];
        calculate_angles(&mut sectors);
        assert_eq!(sectors[0].start_angle, 0.0);
        assert_eq!(sectors[0].end_angle, 216.0);
        assert_eq!(sectors[1].start_angle, 216.0);
        assert_eq!(sectors[1].end_angle, 360.0);
        assert_eq!(sectors[0].large_arc_flag(), 1);
        assert_eq!(sectors[1].large_arc_flag(), 0);
    }

    #[test]
    fn spans_are_contiguous_and_cover_the_circle() {
        let mut rng = deterministic_rng();
        for _ in 0..100 {
            let mut sectors = generate_chart_data(&mut rng);
            sort_by_share_descending(&mut sectors);
            calculate_angles(&mut sectors);
            assert_eq!(sectors.first().unwrap().start_angle, 0.0);
            assert!((sectors.last().unwrap().end_angle - 360.0).abs() < 1e-9);
            for (a, b) in sectors.iter().tuple_windows() {
                assert_eq!(a.end_angle, b.start_angle);
            }
        }
    }

    #[test]
    fn renormalizes_unnormalized_input() {
        // Values sum to 2.0; the spans must still cover 360 degrees.
        let mut sectors = vec![Sector::new(1.5, 100.0), Sector::new(0.5, 80.0)];
        calculate_angles(&mut sectors);
        assert_eq!(sectors[0].end_angle, 270.0);
        assert_eq!(sectors[1].end_angle, 360.0);
    }

    #[test]
    fn empty_input_is_a_noop() { calculate_angles(&mut []); }
}
