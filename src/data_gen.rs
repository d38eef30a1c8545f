use rand::Rng;

use crate::sector::Sector;


pub const MIN_SECTORS: usize = 1;
pub const MAX_SECTORS: usize = 8;
pub const MIN_RADIUS: f64 = 50.0;
pub const MAX_RADIUS: f64 = 150.0;

// With a working random source two `f64` samples practically never collide, so the cap
// only guards against a degenerate source that keeps returning the same value.
const MAX_SAMPLE_ATTEMPTS: usize = 1000;

// Produces a fresh dataset: 1 to 8 sectors with pairwise distinct shares normalized to
// sum to 1.0, each with an independent random radius in [MIN_RADIUS, MAX_RADIUS).
pub fn generate_chart_data(rng: &mut impl Rng) -> Vec<Sector> {
    let num_sectors = rng.random_range(MIN_SECTORS..=MAX_SECTORS);
    let raw_values = generate_unique_values(&mut *rng, num_sectors);
    let total: f64 = raw_values.iter().sum();
    raw_values
        .into_iter()
        .map(|value| Sector::new(value / total, rng.random_range(MIN_RADIUS..MAX_RADIUS)))
        .collect()
}

fn generate_unique_values(rng: &mut impl Rng, count: usize) -> Vec<f64> {
    let mut values: Vec<f64> = Vec::with_capacity(count);
    for _ in 0..MAX_SAMPLE_ATTEMPTS {
        if values.len() == count {
            break;
        }
        let v = rng.random::<f64>();
        if !values.contains(&v) {
            values.push(v);
        }
    }
    if values.len() < count {
        log::warn!(
            "Got only {} distinct random values in {} attempts; topping up with fixed fractions",
            values.len(),
            MAX_SAMPLE_ATTEMPTS
        );
        // Successive halvings are pairwise distinct, and `values` holds fewer than
        // `count` elements, so this terminates after at most `count` skips.
        let mut v = 0.5;
        while values.len() < count {
            if !values.contains(&v) {
                values.push(v);
            }
            v /= 2.0;
        }
    }
    values
}


#[cfg(test)]
mod tests {
    use rand::RngCore;

    use super::*;
    use crate::test_util::deterministic_rng;

    #[test]
    fn dataset_shape() {
        let mut rng = deterministic_rng();
        for _ in 0..1000 {
            let sectors = generate_chart_data(&mut rng);
            assert!((MIN_SECTORS..=MAX_SECTORS).contains(&sectors.len()));
            let total: f64 = sectors.iter().map(|s| s.value).sum();
            assert!((total - 1.0).abs() < 1e-9, "shares sum to {total}");
            // Shares are fractions of a whole, so at most one can exceed one half.
            assert!(sectors.iter().filter(|s| s.large_arc_flag() == 1).count() <= 1);
            for s in &sectors {
                assert!(s.value > 0.0 && s.value < 1.0 || sectors.len() == 1);
                assert!((MIN_RADIUS..MAX_RADIUS).contains(&s.radius));
                assert_eq!(s.start_angle, 0.0);
                assert_eq!(s.end_angle, 0.0);
            }
        }
    }

    #[test]
    fn shares_are_pairwise_distinct() {
        let mut rng = deterministic_rng();
        for _ in 0..1000 {
            let sectors = generate_chart_data(&mut rng);
            for (i, a) in sectors.iter().enumerate() {
                for b in &sectors[i + 1..] {
                    assert_ne!(a.value, b.value);
                }
            }
        }
    }

    // A random source that always returns zero: the worst case for the uniqueness loop.
    struct DegenerateRng;

    impl RngCore for DegenerateRng {
        fn next_u32(&mut self) -> u32 { 0 }
        fn next_u64(&mut self) -> u64 { 0 }
        fn fill_bytes(&mut self, dest: &mut [u8]) { dest.fill(0); }
    }

    #[test]
    fn degenerate_random_source_still_terminates() {
        let values = generate_unique_values(&mut DegenerateRng, 5);
        assert_eq!(values.len(), 5);
        for (i, a) in values.iter().enumerate() {
            for b in &values[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
