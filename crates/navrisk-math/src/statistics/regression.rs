//! Ordinary least squares on a single regressor.

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Result of a simple linear regression `y = intercept + slope · x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    /// Fitted slope.
    pub slope: f64,
    /// Fitted intercept.
    pub intercept: f64,
    /// Pearson correlation between x and y, clipped to [-1, 1].
    pub r: f64,
}

impl LinearFit {
    /// Coefficient of determination.
    pub fn r_squared(&self) -> f64 {
        self.r * self.r
    }
}

/// Fits `ys` against `xs` by least squares.
///
/// A degenerate fit (either variable constant) reports `r = 0`.
///
/// # Errors
///
/// Returns an error if the slices differ in length or hold fewer than two
/// points.
pub fn linear_regression(xs: &[f64], ys: &[f64]) -> MathResult<LinearFit> {
    if xs.len() != ys.len() {
        return Err(MathError::invalid_input(format!(
            "xs and ys must have same length: {} vs {}",
            xs.len(),
            ys.len()
        )));
    }
    if xs.len() < 2 {
        return Err(MathError::insufficient_data(2, xs.len()));
    }

    let n = xs.len() as f64;
    let x_mean = xs.iter().sum::<f64>() / n;
    let y_mean = ys.iter().sum::<f64>() / n;

    let (sxx, syy, sxy) = xs
        .iter()
        .zip(ys)
        .fold((0.0, 0.0, 0.0), |(sxx, syy, sxy), (&x, &y)| {
            let dx = x - x_mean;
            let dy = y - y_mean;
            (sxx + dx * dx, syy + dy * dy, sxy + dx * dy)
        });

    let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
    let denominator = (sxx * syy).sqrt();
    let r = if denominator == 0.0 {
        0.0
    } else {
        (sxy / denominator).clamp(-1.0, 1.0)
    };

    Ok(LinearFit {
        slope,
        intercept: y_mean - slope * x_mean,
        r,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_line() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [1.0, 3.0, 5.0, 7.0];
        let fit = linear_regression(&xs, &ys).unwrap();
        assert_relative_eq!(fit.slope, 2.0, epsilon = 1e-12);
        assert_relative_eq!(fit.intercept, 1.0, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_noisy_fit_below_one() {
        let xs = [0.0, 1.0, 2.0, 3.0, 4.0];
        let ys = [0.0, 2.0, 1.0, 4.0, 3.0];
        let fit = linear_regression(&xs, &ys).unwrap();
        // sxy = 8, sxx = 10, syy = 10 -> r = 0.8
        assert_relative_eq!(fit.r, 0.8, epsilon = 1e-12);
        assert_relative_eq!(fit.r_squared(), 0.64, epsilon = 1e-12);
    }

    #[test]
    fn test_flat_series_is_degenerate() {
        let fit = linear_regression(&[0.0, 1.0, 2.0], &[5.0, 5.0, 5.0]).unwrap();
        assert_eq!(fit.r, 0.0);
        assert_eq!(fit.slope, 0.0);
    }

    #[test]
    fn test_errors() {
        assert!(linear_regression(&[0.0], &[1.0]).is_err());
        assert!(linear_regression(&[0.0, 1.0], &[1.0]).is_err());
    }
}
