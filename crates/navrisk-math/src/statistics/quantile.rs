//! Percentiles.

/// The `p`-th percentile (0–100) of `values`, linearly interpolated between
/// the two closest ranks (`rank = p / 100 · (n − 1)`).
///
/// Returns `None` for an empty sample or a `p` outside `[0, 100]`. NaNs in
/// the input sort last.
///
/// # Example
///
/// ```rust
/// use navrisk_math::statistics::percentile;
///
/// let xs = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(percentile(&xs, 50.0), Some(2.5));
/// assert_eq!(percentile(&xs, 0.0), Some(1.0));
/// ```
pub fn percentile(values: &[f64], p: f64) -> Option<f64> {
    if values.is_empty() || !(0.0..=100.0).contains(&p) {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let weight = rank - lo as f64;

    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * weight)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_interpolates_between_ranks() {
        let xs: Vec<f64> = (1..=10).map(f64::from).collect();
        // rank = 0.05 * 9 = 0.45
        assert_relative_eq!(percentile(&xs, 5.0).unwrap(), 1.45, epsilon = 1e-12);
        // rank = 0.95 * 9 = 8.55
        assert_relative_eq!(percentile(&xs, 95.0).unwrap(), 9.55, epsilon = 1e-12);
    }

    #[test]
    fn test_extremes() {
        let xs = [3.0, -1.0, 7.0];
        assert_eq!(percentile(&xs, 0.0), Some(-1.0));
        assert_eq!(percentile(&xs, 100.0), Some(7.0));
    }

    #[test]
    fn test_single_value_and_invalid_input() {
        assert_eq!(percentile(&[0.2], 5.0), Some(0.2));
        assert_eq!(percentile(&[], 5.0), None);
        assert_eq!(percentile(&[1.0], 101.0), None);
    }
}
