//! Empirical Growth Exponent
//!
//! Fits `cost ~ size^k` by least squares on `(ln size, ln cost)`. A linear
//! scan yields `k` close to 1; bisection yields a value that keeps shrinking
//! as sizes grow, since `log n` grows slower than any power.

/// One `(size, cost)` observation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPoint {
    /// Input size
    pub size: f64,
    /// Measured cost at that size (time or comparisons)
    pub cost: f64,
}

/// Fit the log-log slope through `points`
pub fn fit_growth_exponent(points: &[GrowthPoint]) -> Result<f64, GrowthError> {
    if points.len() < 2 {
        return Err(GrowthError::InsufficientPoints(points.len()));
    }
    if let Some(p) = points.iter().find(|p| !(p.size > 0.0 && p.cost > 0.0)) {
        return Err(GrowthError::NonPositive {
            size: p.size,
            cost: p.cost,
        });
    }

    let n = points.len() as f64;
    let xs: Vec<f64> = points.iter().map(|p| p.size.ln()).collect();
    let ys: Vec<f64> = points.iter().map(|p| p.cost.ln()).collect();
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let sxx: f64 = xs.iter().map(|x| (x - mean_x).powi(2)).sum();
    if sxx <= f64::EPSILON {
        return Err(GrowthError::DegenerateSizes);
    }
    let sxy: f64 = xs
        .iter()
        .zip(&ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();

    Ok(sxy / sxx)
}

/// Errors from growth fitting
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GrowthError {
    /// Fewer than two observations
    #[error("need at least 2 points to fit growth, got {0}")]
    InsufficientPoints(usize),
    /// A size or cost was zero, negative or NaN
    #[error("size and cost must be positive (size={size}, cost={cost})")]
    NonPositive {
        /// Offending size
        size: f64,
        /// Offending cost
        cost: f64,
    },
    /// Every observation shares one size, so the slope is undefined
    #[error("all points share the same size")]
    DegenerateSizes,
}
