//! Sample moments.
//!
//! Mean and standard deviation delegate to `statrs`. Skewness and kurtosis use
//! the bias-corrected estimators (G1, G2) reported by common dataframe
//! libraries, so results are comparable with spreadsheet and notebook output.

use statrs::statistics::Statistics;

/// Arithmetic mean, `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().mean())
}

/// Sample standard deviation (n − 1 denominator), `None` below two points.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    Some(values.iter().std_dev())
}

/// Sums of squared, cubed and fourth-power deviations from the mean.
fn central_sums(values: &[f64]) -> (f64, f64, f64) {
    let m = values.iter().mean();
    values.iter().fold((0.0, 0.0, 0.0), |(s2, s3, s4), &x| {
        let d = x - m;
        let d2 = d * d;
        (s2 + d2, s3 + d2 * d, s4 + d2 * d2)
    })
}

/// Treats sums that are pure floating point residue as exact zero.
fn zero_out_residue(value: f64) -> f64 {
    if value.abs() < 1e-14 {
        0.0
    } else {
        value
    }
}

/// Adjusted Fisher–Pearson skewness (G1).
///
/// `None` below three points; `Some(0.0)` for a constant sample.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let (s2, s3, _) = central_sums(values);
    let s2 = zero_out_residue(s2);
    let s3 = zero_out_residue(s3);
    if s2 == 0.0 {
        return Some(0.0);
    }
    let n = n as f64;
    Some(n * (n - 1.0).sqrt() / (n - 2.0) * (s3 / s2.powf(1.5)))
}

/// Bias-corrected excess kurtosis (G2).
///
/// `None` below four points; `Some(0.0)` for a constant sample.
pub fn excess_kurtosis(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    let (s2, _, s4) = central_sums(values);
    let s2 = zero_out_residue(s2);
    let s4 = zero_out_residue(s4);
    let n = n as f64;
    let denominator = (n - 2.0) * (n - 3.0) * s2 * s2;
    if denominator == 0.0 {
        return Some(0.0);
    }
    let numerator = n * (n + 1.0) * (n - 1.0) * s4;
    let adjustment = 3.0 * (n - 1.0).powi(2) / ((n - 2.0) * (n - 3.0));
    Some(numerator / denominator - adjustment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_and_std() {
        let xs = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(mean(&xs).unwrap(), 5.0);
        // population std is 2.0; sample std = sqrt(32 / 7)
        assert_relative_eq!(sample_std(&xs).unwrap(), (32.0_f64 / 7.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_undefined_cases() {
        assert!(mean(&[]).is_none());
        assert!(sample_std(&[1.0]).is_none());
        assert!(skewness(&[1.0, 2.0]).is_none());
        assert!(excess_kurtosis(&[1.0, 2.0, 3.0]).is_none());
    }

    #[test]
    fn test_symmetric_sample_has_zero_skew() {
        let xs = [-2.0, -1.0, 0.0, 1.0, 2.0];
        assert_relative_eq!(skewness(&xs).unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_skewness_reference_value() {
        // G1 for [1, 2, 3, 10]: n=4, mean=4, s2=50, s3=180
        // 4 * sqrt(3) / 2 * 180 / 50^1.5
        let xs = [1.0, 2.0, 3.0, 10.0];
        let expected = 4.0 * 3.0_f64.sqrt() / 2.0 * (180.0 / 50.0_f64.powf(1.5));
        assert_relative_eq!(skewness(&xs).unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_kurtosis_reference_value() {
        // [1, 2, 3, 4, 5]: s2 = 10, s4 = 34 -> G2 = -1.2
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(excess_kurtosis(&xs).unwrap(), -1.2, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_sample() {
        let xs = [0.01; 6];
        assert_eq!(skewness(&xs), Some(0.0));
        assert_eq!(excess_kurtosis(&xs), Some(0.0));
    }
}
