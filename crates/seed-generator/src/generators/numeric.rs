//! Numeric generators.

use rand::Rng;

/// Random value in `[min, max]` rounded to one decimal place.
///
/// Sampled as whole tenths so the bounds are reachable and the result never
/// drifts outside them after rounding.
pub fn one_decimal_in<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    let lo = (min * 10.0).round() as i64;
    let hi = (max * 10.0).round() as i64;
    rng.gen_range(lo..=hi) as f64 / 10.0
}

/// Random integer in `[min, max]`.
pub fn int_in<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    rng.gen_range(min..=max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_one_decimal_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let v = one_decimal_in(&mut rng, 36.5, 37.5);
            assert!((36.5..=37.5).contains(&v), "{v} out of range");
            assert_eq!((v * 10.0).round() / 10.0, v);
        }
    }

    #[test]
    fn test_int_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..100 {
            assert!((100..=500).contains(&int_in(&mut rng, 100, 500)));
        }
    }
}
