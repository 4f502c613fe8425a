//! Ordinary least squares for a single predictor.
//!
//! Fits `y = intercept + slope * x` over arbitrary `(x, y)` pairs. Sums are
//! taken around the means so that large x values (epoch seconds) don't lose
//! precision.

/// Result of a simple linear regression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    /// Change in y per unit of x.
    pub slope: f64,
    /// Value of y at x = 0.
    pub intercept: f64,
    /// Coefficient of determination, 0 when either variable has no variance.
    pub r_squared: f64,
    /// Number of points the fit was computed from.
    pub observations: usize,
}

impl LinearFit {
    /// Fit a line through `points`.
    ///
    /// Returns `None` when there are fewer than two points, when every x is
    /// the same, or when the slope is not finite.
    #[must_use]
    #[allow(clippy::cast_precision_loss)] // Record counts never approach 2^53
    pub fn least_squares(points: &[(f64, f64)]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let n = points.len() as f64;
        let mean_x = points.iter().map(|&(x, _)| x).sum::<f64>() / n;
        let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        let (mut sxx, mut sxy, mut syy) = (0.0_f64, 0.0_f64, 0.0_f64);
        for &(x, y) in points {
            let dx = x - mean_x;
            let dy = y - mean_y;
            sxx += dx * dx;
            sxy += dx * dy;
            syy += dy * dy;
        }

        if !sxx.is_finite() || sxx <= 0.0 {
            return None;
        }

        let slope = sxy / sxx;
        if !slope.is_finite() {
            return None;
        }
        let intercept = mean_y - slope * mean_x;

        let r_squared = if syy > 0.0 {
            (sxy * sxy) / (sxx * syy)
        } else {
            0.0
        };

        Some(Self {
            slope,
            intercept,
            r_squared,
            observations: points.len(),
        })
    }

    /// Value of the fitted line at `x`.
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.slope.mul_add(x, self.intercept)
    }

    /// The x at which the fitted line crosses y = 0.
    ///
    /// `None` for a flat line, which never crosses (or always does).
    #[must_use]
    pub fn x_intercept(&self) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        let x = -self.intercept / self.slope;
        x.is_finite().then_some(x)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_exact_line() {
        let fit = LinearFit::least_squares(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
        assert!(approx(fit.slope, 2.0));
        assert!(approx(fit.intercept, 1.0));
        assert!(approx(fit.r_squared, 1.0));
        assert_eq!(fit.observations, 3);
        assert!(approx(fit.predict(10.0), 21.0));
        assert!(approx(fit.x_intercept().unwrap(), -0.5));
    }

    #[test]
    fn test_noisy_line() {
        // Scattered around y = 0.6x + 0.6
        let fit =
            LinearFit::least_squares(&[(0.0, 1.0), (1.0, 0.0), (2.0, 3.0), (3.0, 2.0)]).unwrap();
        assert!(approx(fit.slope, 0.6));
        assert!(approx(fit.intercept, 0.6));
        assert!(fit.r_squared > 0.0 && fit.r_squared < 1.0);
    }

    #[test]
    fn test_too_few_points() {
        assert!(LinearFit::least_squares(&[]).is_none());
        assert!(LinearFit::least_squares(&[(1.0, 2.0)]).is_none());
    }

    #[test]
    fn test_no_x_variance() {
        assert!(LinearFit::least_squares(&[(4.0, 1.0), (4.0, 9.0), (4.0, 3.0)]).is_none());
    }

    #[test]
    fn test_non_finite_input() {
        assert!(LinearFit::least_squares(&[(f64::NAN, 1.0), (2.0, 3.0)]).is_none());
        assert!(LinearFit::least_squares(&[(0.0, f64::NAN), (2.0, 3.0)]).is_none());
    }

    #[test]
    fn test_flat_line_has_no_x_intercept() {
        let fit = LinearFit::least_squares(&[(0.0, 5.0), (1.0, 5.0), (2.0, 5.0)]).unwrap();
        assert!(approx(fit.slope, 0.0));
        assert!(approx(fit.r_squared, 0.0));
        assert!(fit.x_intercept().is_none());
    }

    #[test]
    fn test_large_x_values_keep_precision() {
        // Epoch seconds around 2021 with a slope of -1 per day
        let day = 86_400.0;
        let base = 1_609_459_200.0;
        let points: Vec<(f64, f64)> = (0..5)
            .map(|i| (f64::from(i).mul_add(day, base), 10.0 - f64::from(i)))
            .collect();
        let fit = LinearFit::least_squares(&points).unwrap();
        let crossing = fit.x_intercept().unwrap();
        assert!((crossing - 10.0_f64.mul_add(day, base)).abs() < 1.0);
    }
}
